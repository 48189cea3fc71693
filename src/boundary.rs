//! Expanding path descriptors into map boundaries

use crate::error::{Error, Result};
use crate::projection::PointProjector;
use crate::types::{BoundingBox, MapPoint, PathDescriptor, WORLD_SIZE, union_with_point};
use log::{debug, trace};

/// A finished airspace boundary on the map plane
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Boundary {
    /// Vertices in drawing order, stitched across the date line
    pub points: Vec<MapPoint>,
    /// Smallest rectangle covering all vertices (`None` without vertices)
    pub bounding_box: Option<BoundingBox>,
}

/// Incremental boundary accumulator
///
/// Descriptors are expanded one at a time with [`append`](Self::append);
/// the previous vertex and the running bounding box are kept so that every
/// new vertex can be stitched to its predecessor. Appending descriptors one
/// by one yields exactly the same boundary as [`build`](Self::build).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryBuilder {
    projector: PointProjector,
    points: Vec<MapPoint>,
    bounding_box: Option<BoundingBox>,
}

impl BoundaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom projector for `Point` and `Arc` descriptors
    pub fn with_projector(mut self, projector: PointProjector) -> Self {
        self.projector = projector;
        self
    }

    /// Expand a full descriptor list in one pass
    pub fn build(descriptors: &[PathDescriptor]) -> Result<Boundary> {
        let mut builder = Self::new();
        builder.extend(descriptors)?;
        Ok(builder.finish())
    }

    /// Append every descriptor of `descriptors` in order
    ///
    /// Errors are wrapped in [`Error::Descriptor`] with the position of the
    /// failing descriptor within `descriptors`. Descriptors before it stay
    /// appended.
    pub fn extend(&mut self, descriptors: &[PathDescriptor]) -> Result<()> {
        for (index, descriptor) in descriptors.iter().enumerate() {
            self.append(descriptor).map_err(|source| Error::Descriptor {
                index,
                source: Box::new(source),
            })?;
        }
        debug!(
            "built boundary with {} vertices from {} descriptors",
            self.points.len(),
            descriptors.len()
        );
        Ok(())
    }

    /// Expand a single descriptor and append its vertices
    ///
    /// All vertices are computed before any of them is added, so the builder
    /// is left untouched if a projection fails.
    pub fn append(&mut self, descriptor: &PathDescriptor) -> Result<()> {
        let vertices = self.vertices(descriptor)?;
        trace!("{descriptor:?} expands to {} vertices", vertices.len());

        for vertex in vertices {
            self.push(vertex);
        }
        Ok(())
    }

    pub fn points(&self) -> &[MapPoint] {
        &self.points
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounding_box
    }

    pub fn finish(self) -> Boundary {
        Boundary {
            points: self.points,
            bounding_box: self.bounding_box,
        }
    }

    fn vertices(&self, descriptor: &PathDescriptor) -> Result<Vec<MapPoint>> {
        let (center, radius) = match *descriptor {
            PathDescriptor::Line { coordinate } => return Ok(vec![MapPoint::from(coordinate)]),
            PathDescriptor::Point {
                coordinate, radius, ..
            }
            | PathDescriptor::Arc {
                coordinate, radius, ..
            } => (coordinate, radius),
        };

        descriptor
            .bearings()
            .into_iter()
            .map(|bearing| {
                let coordinate = self.projector.project(center, bearing, radius)?;
                Ok(MapPoint::from(coordinate))
            })
            .collect()
    }

    /// Add a vertex, moving it by a full world width if that brings it
    /// closer to the previous vertex
    fn push(&mut self, point: MapPoint) {
        let point = match self.points.last() {
            None => point,
            Some(previous) => [point, point.shifted(WORLD_SIZE), point.shifted(-WORLD_SIZE)]
                .into_iter()
                .min_by(|a, b| previous.distance_to(a).total_cmp(&previous.distance_to(b)))
                .unwrap_or(point),
        };

        union_with_point(&mut self.bounding_box, point);
        self.points.push(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coordinate;
    use claims::{assert_none, assert_ok};
    use insta::assert_compact_debug_snapshot;

    #[test]
    fn empty_boundary() {
        let boundary = assert_ok!(BoundaryBuilder::build(&[]));

        assert!(boundary.points.is_empty());
        assert_none!(boundary.bounding_box);
    }

    #[test]
    fn line_adds_the_coordinate_itself() {
        let boundary = assert_ok!(BoundaryBuilder::build(&[PathDescriptor::line(-41.0, 174.0)]));

        assert_eq!(
            boundary.points,
            vec![MapPoint::from(Coordinate::new(-41.0, 174.0))]
        );
        assert_eq!(boundary.bounding_box.unwrap().width(), 0.0);
    }

    #[test]
    fn point_adds_a_single_vertex() {
        let boundary =
            assert_ok!(BoundaryBuilder::build(&[PathDescriptor::point(-41.0, 174.0, 90, 5.0)]));
        assert_eq!(boundary.points.len(), 1);
    }

    #[test]
    fn arc_vertex_counts() {
        let count = |descriptor| BoundaryBuilder::build(&[descriptor]).unwrap().points.len();

        assert_eq!(count(PathDescriptor::arc(-41.0, 174.0, 10, 50, 5.0, true)), 41);
        assert_eq!(count(PathDescriptor::arc(-41.0, 174.0, 10, 50, 5.0, false)), 321);
        assert_eq!(count(PathDescriptor::circle(-41.0, 174.0, 5.0)), 360);
    }

    #[test]
    fn incremental_and_one_shot_builds_agree() {
        let descriptors = [
            PathDescriptor::line(-41.2, 174.6),
            PathDescriptor::arc(-41.3, 174.8, 270, 90, 8.0, true),
            PathDescriptor::point(-41.3, 174.8, 135, 8.0),
            PathDescriptor::arc(-41.3, 174.8, 180, 200, 4.0, false),
        ];

        let mut builder = BoundaryBuilder::new();
        for descriptor in &descriptors {
            assert_ok!(builder.append(descriptor));
        }

        assert_eq!(builder.finish(), BoundaryBuilder::build(&descriptors).unwrap());
    }

    #[test]
    fn bounding_box_covers_all_vertices() {
        let boundary =
            assert_ok!(BoundaryBuilder::build(&[PathDescriptor::circle(-41.0, 174.0, 5.0)]));

        assert_eq!(
            boundary.bounding_box,
            BoundingBox::from_points(&boundary.points)
        );
    }

    #[test]
    fn stitches_across_the_date_line() {
        let boundary = assert_ok!(BoundaryBuilder::build(&[
            PathDescriptor::line(-44.0, 179.9),
            PathDescriptor::line(-44.0, -179.9),
        ]));

        let [first, second] = boundary.points.as_slice() else {
            panic!("expected two vertices");
        };
        assert!(second.x > WORLD_SIZE);
        assert!(first.distance_to(second) < WORLD_SIZE / 1000.0);
        assert!((second.to_coordinate().longitude - 180.1).abs() < 1e-9);
    }

    #[test]
    fn stitches_westwards_across_the_date_line() {
        let boundary = assert_ok!(BoundaryBuilder::build(&[
            PathDescriptor::line(-44.0, -179.9),
            PathDescriptor::line(-44.0, 179.9),
        ]));

        assert!(boundary.points[1].x < 0.0);
        assert!((boundary.points[1].to_coordinate().longitude + 180.1).abs() < 1e-9);
    }

    #[test]
    fn failing_descriptor_is_reported_with_its_index() {
        let result = BoundaryBuilder::build(&[
            PathDescriptor::line(-41.0, 174.0),
            PathDescriptor::point(-41.0, 174.0, 0, -5.0),
        ]);
        assert_compact_debug_snapshot!(result, @"Err(Descriptor { index: 1, source: InvalidDistance(-5.0) })");
    }

    #[test]
    fn failing_append_leaves_builder_untouched() {
        let mut builder =
            BoundaryBuilder::new().with_projector(PointProjector::new().with_max_iterations(0));
        assert_ok!(builder.append(&PathDescriptor::line(-60.0, 0.0)));
        let before = builder.clone();

        let result = builder.append(&PathDescriptor::arc(-60.0, 0.0, 0, 90, 200.0, true));
        assert_compact_debug_snapshot!(result, @"Err(NotConverged { iterations: 0 })");
        assert_eq!(builder, before);
    }
}
