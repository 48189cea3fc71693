use crate::types::{Coordinate, EARTH_RADIUS_METERS};
use std::f64::consts::PI;

/// Width and height of the projected world in map units
///
/// The world is a square spherical-Mercator plane. `x` grows eastwards from
/// the antimeridian and `y` grows southwards from the top edge.
pub const WORLD_SIZE: f64 = 268_435_456.0;

/// A point on the projected map plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert back to a geographic coordinate
    ///
    /// Points outside `0..WORLD_SIZE` on the x axis produce longitudes
    /// outside `-180..180`.
    pub fn to_coordinate(&self) -> Coordinate {
        let longitude = self.x / WORLD_SIZE * 360.0 - 180.0;
        let latitude = (PI * (1.0 - 2.0 * self.y / WORLD_SIZE))
            .sinh()
            .atan()
            .to_degrees();
        Coordinate::new(latitude, longitude)
    }

    /// Planar Euclidean distance in map units
    pub fn distance_to(&self, other: &MapPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Great-circle distance in meters between the coordinates of two points
    pub fn meters_to(&self, other: &MapPoint) -> f64 {
        self.to_coordinate().distance_to(&other.to_coordinate())
    }

    /// Same point moved by `dx` map units along the x axis
    pub fn shifted(&self, dx: f64) -> Self {
        Self::new(self.x + dx, self.y)
    }
}

impl From<Coordinate> for MapPoint {
    fn from(coordinate: Coordinate) -> Self {
        let x = (coordinate.longitude + 180.0) / 360.0 * WORLD_SIZE;
        let lat = coordinate.latitude.to_radians();
        let y = (0.5 - (PI / 4.0 + lat / 2.0).tan().ln() / (2.0 * PI)) * WORLD_SIZE;
        Self::new(x, y)
    }
}

/// Number of map units covering one meter at the given latitude
///
/// The scale grows with `1 / cos(latitude)` towards the poles.
pub fn map_points_per_meter_at_latitude(latitude: f64) -> f64 {
    WORLD_SIZE / (2.0 * PI * EARTH_RADIUS_METERS * latitude.to_radians().cos())
}
