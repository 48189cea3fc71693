//! Placing points at a distance and bearing from a center

use crate::error::{Error, Result};
use crate::types::{
    Coordinate, METERS_PER_NAUTICAL_MILE, MapPoint, map_points_per_meter_at_latitude,
};
use log::trace;

/// Default upper bound for correction iterations in [`PointProjector::project`]
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Largest accepted deviation from the requested distance
const TOLERANCE_METERS: f64 = 0.5;

/// Projects points along a bearing on the map plane
///
/// A first guess is made with the flat map scale at the center's latitude,
/// then the planar displacement is rescaled until the great-circle distance
/// is within half a meter of the requested distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointProjector {
    max_iterations: u32,
}

impl PointProjector {
    pub fn new() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Override the maximum number of correction iterations
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Destination `distance_nm` nautical miles from `center` along `bearing`
    ///
    /// The bearing is in whole degrees clockwise from true north. Values
    /// outside `0..360` (arcs step through e.g. `350..=370`) are reduced
    /// modulo 360.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDistance`] for negative or non-finite distances
    /// - [`Error::NotConverged`] if the iteration limit is exceeded
    pub fn project(
        &self,
        center: Coordinate,
        bearing: i32,
        distance_nm: f64,
    ) -> Result<Coordinate> {
        if !distance_nm.is_finite() || distance_nm < 0.0 {
            return Err(Error::InvalidDistance(distance_nm));
        }
        if distance_nm == 0.0 {
            return Ok(center);
        }

        let target = distance_nm * METERS_PER_NAUTICAL_MILE;
        let origin = MapPoint::from(center);

        // rotate by 90° so that 0 points up (north) on the map plane
        let (sin, cos) = f64::from(bearing.rem_euclid(360) - 90)
            .to_radians()
            .sin_cos();
        let displace = |r: f64| MapPoint::new(origin.x + r * cos, origin.y + r * sin);

        let mut r = map_points_per_meter_at_latitude(center.latitude) * target;
        let mut candidate = displace(r);
        let mut distance = origin.meters_to(&candidate);

        let mut iterations = 0;
        while (distance - target).abs() >= TOLERANCE_METERS {
            if iterations == self.max_iterations || distance == 0.0 {
                return Err(Error::NotConverged { iterations });
            }

            r *= target / distance;
            candidate = displace(r);
            distance = origin.meters_to(&candidate);
            iterations += 1;
        }

        trace!("projected {distance_nm} NM at {bearing}° in {iterations} iterations");
        Ok(candidate.to_coordinate())
    }
}

impl Default for PointProjector {
    fn default() -> Self {
        Self::new()
    }
}
