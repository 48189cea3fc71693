/// Mean radius used for all spherical distance calculations, in meters
///
/// This matches the sphere of the map projection, so planar scale factors and
/// great-circle distances agree with each other.
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// Meters per nautical mile
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// A geographic position in decimal degrees
///
/// Longitude is usually within `[-180, 180]`, but boundaries that cross the
/// date line may carry unnormalized longitudes (e.g. `181.5`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in meters (haversine formula)
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().min(1.0).asin();

        EARTH_RADIUS_METERS * c
    }

    /// Initial great-circle bearing towards `other` in degrees (0-360)
    pub fn bearing_to(&self, other: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let x = delta_lon.sin() * lat2.cos();
        let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

        (x.atan2(y).to_degrees() + 360.0) % 360.0
    }

    /// Round both components to six decimal places (about 0.1 m)
    pub fn rounded(&self) -> Self {
        Self::new(round_degrees(self.latitude), round_degrees(self.longitude))
    }
}

/// Round a value in degrees to six decimal places
pub fn round_degrees(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
