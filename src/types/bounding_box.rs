use crate::types::MapPoint;

/// Axis-aligned rectangle on the map plane
///
/// All coordinates are in map units. Since `y` grows southwards, `top` is the
/// smallest `y` value and `bottom` the largest.
///
/// A boundary without points has no bounding box; that case is represented
/// as `Option::None` rather than a special "null" rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,   // min x
    pub top: f64,    // min y
    pub right: f64,  // max x
    pub bottom: f64, // max y
}

impl BoundingBox {
    /// Create a bounding box from a slice of points
    ///
    /// Returns `None` if the slice is empty.
    pub fn from_points(points: &[MapPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;

        let mut bbox = Self::from(*first);
        for &point in rest {
            bbox.extend(point);
        }
        Some(bbox)
    }

    /// Grow the bounding box to include a point
    pub fn extend(&mut self, point: MapPoint) {
        self.left = self.left.min(point.x);
        self.right = self.right.max(point.x);
        self.top = self.top.min(point.y);
        self.bottom = self.bottom.max(point.y);
    }

    /// Grow the bounding box to include another bounding box
    pub fn merge(&mut self, other: BoundingBox) {
        self.left = self.left.min(other.left);
        self.right = self.right.max(other.right);
        self.top = self.top.min(other.top);
        self.bottom = self.bottom.max(other.bottom);
    }

    /// Minimum x (the origin's x)
    pub fn x(&self) -> f64 {
        self.left
    }

    /// Minimum y (the origin's y)
    pub fn y(&self) -> f64 {
        self.top
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn top_left(&self) -> MapPoint {
        MapPoint::new(self.left, self.top)
    }

    pub fn top_right(&self) -> MapPoint {
        MapPoint::new(self.right, self.top)
    }

    pub fn bottom_right(&self) -> MapPoint {
        MapPoint::new(self.right, self.bottom)
    }

    pub fn bottom_left(&self) -> MapPoint {
        MapPoint::new(self.left, self.bottom)
    }

    /// Corners in drawing order, starting at the top left and going clockwise
    pub fn corners(&self) -> [MapPoint; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    pub fn center(&self) -> MapPoint {
        MapPoint::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

impl From<MapPoint> for BoundingBox {
    fn from(point: MapPoint) -> Self {
        Self {
            left: point.x,
            top: point.y,
            right: point.x,
            bottom: point.y,
        }
    }
}

/// Union of an optional bounding box with a point
///
/// Starts from "no rectangle", absorbs the first point as a zero-size
/// rectangle and extends from there on.
pub(crate) fn union_with_point(bbox: &mut Option<BoundingBox>, point: MapPoint) {
    match bbox {
        Some(bbox) => bbox.extend(point),
        None => *bbox = Some(BoundingBox::from(point)),
    }
}
