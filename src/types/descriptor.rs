use crate::types::Coordinate;

/// One instruction contributing vertices to an airspace boundary
///
/// The coordinate of `Point` and `Arc` is the center the vertices are
/// projected from; it never ends up in the boundary itself. Angles are whole
/// degrees clockwise from true north, radii are in nautical miles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathDescriptor {
    /// A single vertex at `coordinate`
    Line { coordinate: Coordinate },
    /// A single vertex `radius` NM from `coordinate` along `angle`
    Point {
        coordinate: Coordinate,
        angle: i32,
        radius: f64,
    },
    /// One vertex per degree from `start` to `end` around `coordinate`
    Arc {
        coordinate: Coordinate,
        start: i32,
        end: i32,
        radius: f64,
        clockwise: bool,
    },
}

impl PathDescriptor {
    pub fn line(latitude: f64, longitude: f64) -> Self {
        PathDescriptor::Line {
            coordinate: Coordinate::new(latitude, longitude),
        }
    }

    pub fn point(latitude: f64, longitude: f64, angle: i32, radius: f64) -> Self {
        PathDescriptor::Point {
            coordinate: Coordinate::new(latitude, longitude),
            angle,
            radius,
        }
    }

    pub fn arc(
        latitude: f64,
        longitude: f64,
        start: i32,
        end: i32,
        radius: f64,
        clockwise: bool,
    ) -> Self {
        PathDescriptor::Arc {
            coordinate: Coordinate::new(latitude, longitude),
            start,
            end,
            radius,
            clockwise,
        }
    }

    /// A full clockwise circle (`0..=359`) around the center
    pub fn circle(latitude: f64, longitude: f64, radius: f64) -> Self {
        Self::arc(latitude, longitude, 0, 359, radius, true)
    }

    /// The vertex (for `Line`) or center (for `Point` and `Arc`) coordinate
    pub fn coordinate(&self) -> Coordinate {
        match self {
            PathDescriptor::Line { coordinate }
            | PathDescriptor::Point { coordinate, .. }
            | PathDescriptor::Arc { coordinate, .. } => *coordinate,
        }
    }

    /// Bearings to step through, in emission order
    ///
    /// `Line` yields nothing, `Point` its single angle. Arc bounds are reduced
    /// to `0..360` and the range is normalized so that stepping always follows
    /// the requested rotation, then traversed ascending (clockwise) or
    /// descending (counter-clockwise), both ends inclusive. An arc never
    /// yields more than 361 bearings.
    pub fn bearings(&self) -> Vec<i32> {
        match *self {
            PathDescriptor::Line { .. } => Vec::new(),
            PathDescriptor::Point { angle, .. } => vec![angle],
            PathDescriptor::Arc {
                mut start,
                mut end,
                clockwise,
                ..
            } => {
                start = start.rem_euclid(360);
                end = end.rem_euclid(360);

                if !clockwise && start < end {
                    start += 360;
                }
                if clockwise && end < start {
                    end += 360;
                }

                let range = start.min(end)..=start.max(end);
                if clockwise {
                    range.collect()
                } else {
                    range.rev().collect()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_compact_debug_snapshot;

    #[test]
    fn line_has_no_bearings() {
        assert_eq!(PathDescriptor::line(0.0, 0.0).bearings(), Vec::<i32>::new());
    }

    #[test]
    fn point_has_single_bearing() {
        assert_eq!(PathDescriptor::point(0.0, 0.0, 45, 5.0).bearings(), vec![45]);
    }

    #[test]
    fn clockwise_arc_ascends() {
        let bearings = PathDescriptor::arc(0.0, 0.0, 10, 50, 5.0, true).bearings();

        assert_eq!(bearings.len(), 41);
        assert_eq!(bearings.first(), Some(&10));
        assert_eq!(bearings.last(), Some(&50));
        assert!(bearings.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn counter_clockwise_arc_goes_the_other_way_around() {
        let bearings = PathDescriptor::arc(0.0, 0.0, 10, 50, 5.0, false).bearings();

        // 370 (= 10) down to 50, passing through north
        assert_eq!(bearings.len(), 321);
        assert_eq!(bearings.first(), Some(&370));
        assert_eq!(bearings.last(), Some(&50));
        assert!(bearings.windows(2).all(|w| w[1] == w[0] - 1));
    }

    #[test]
    fn clockwise_arc_through_north() {
        let bearings = PathDescriptor::arc(0.0, 0.0, 350, 10, 5.0, true).bearings();

        assert_eq!(bearings.len(), 21);
        assert_eq!(bearings.first(), Some(&350));
        assert_eq!(bearings.last(), Some(&370));
    }

    #[test]
    fn counter_clockwise_arc_without_wraparound() {
        let bearings = PathDescriptor::arc(0.0, 0.0, 90, 45, 5.0, false).bearings();

        assert_eq!(bearings.len(), 46);
        assert_eq!(bearings.first(), Some(&90));
        assert_eq!(bearings.last(), Some(&45));
    }

    #[test]
    fn arc_bounds_are_reduced_to_a_single_turn() {
        let bearings = PathDescriptor::arc(0.0, 0.0, 370, 410, 5.0, true).bearings();
        assert_eq!(bearings, PathDescriptor::arc(0.0, 0.0, 10, 50, 5.0, true).bearings());

        let bearings = PathDescriptor::arc(0.0, 0.0, -10, 10, 5.0, true).bearings();
        assert_eq!(bearings.first(), Some(&350));
        assert_eq!(bearings.last(), Some(&370));
    }

    #[test]
    fn extreme_arc_bounds_stay_bounded() {
        // 2147483647 and 2147483600 reduce to 127 and 80
        let bearings = PathDescriptor::arc(0.0, 0.0, i32::MAX, 2_147_483_600, 5.0, true).bearings();
        assert_eq!(bearings.len(), 314);
        assert_eq!(bearings.first(), Some(&127));
        assert_eq!(bearings.last(), Some(&440));

        // 2000000000 reduces to 200
        let bearings = PathDescriptor::arc(0.0, 0.0, 0, 2_000_000_000, 5.0, true).bearings();
        assert_eq!(bearings.len(), 201);

        let bearings = PathDescriptor::arc(0.0, 0.0, i32::MIN, i32::MAX, 5.0, false).bearings();
        assert!(bearings.len() <= 361);
    }

    #[test]
    fn circle_covers_every_degree() {
        let circle = PathDescriptor::circle(-41.0, 174.0, 5.0);
        assert_compact_debug_snapshot!(circle, @"Arc { coordinate: Coordinate { latitude: -41.0, longitude: 174.0 }, start: 0, end: 359, radius: 5.0, clockwise: true }");

        let bearings = circle.bearings();
        assert_eq!(bearings.len(), 360);
        assert_eq!(bearings, (0..360).collect::<Vec<_>>());
    }
}
