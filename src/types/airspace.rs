use crate::boundary::BoundaryBuilder;
use crate::error::{Error, Result};
use crate::projection::PointProjector;
use crate::types::{BoundingBox, Color, ColorTable, Coordinate, MapPoint, PathDescriptor};
use std::fmt;

/// Altitudes above this value are displayed as flight levels
const FLIGHT_LEVEL_THRESHOLD: i32 = 13_000;

/// An airspace with its path descriptors and derived map boundary
///
/// The descriptors are authoritative; the boundary and bounding box are
/// rebuilt from them and always reflect the full descriptor list.
#[derive(Debug, Clone, PartialEq)]
pub struct Airspace {
    /// Identifier, unique within a dataset (e.g. `NZA936`)
    pub id: String,
    pub name: String,
    /// Category, possibly `/`-delimited (e.g. `CTA/Class C`)
    pub category: String,
    /// Lower limit in feet, 0 meaning surface
    pub lower: i32,
    /// Upper limit in feet
    pub upper: i32,

    descriptors: Vec<PathDescriptor>,
    boundary: BoundaryBuilder,
}

impl Airspace {
    /// Create an airspace without any boundary
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        lower: i32,
        upper: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            lower,
            upper,
            descriptors: Vec::new(),
            boundary: BoundaryBuilder::new(),
        }
    }

    /// Use a custom projector for descriptors added from now on
    ///
    /// Call this before adding descriptors; vertices that were already
    /// computed are kept as they are.
    pub fn with_projector(mut self, projector: PointProjector) -> Self {
        self.boundary = self.boundary.with_projector(projector);
        self
    }

    /// Set all descriptors at once and build the boundary in one pass
    pub fn with_descriptors(mut self, descriptors: Vec<PathDescriptor>) -> Result<Self> {
        self.boundary.extend(&descriptors)?;
        self.descriptors.extend(descriptors);
        Ok(self)
    }

    /// Append a descriptor and extend the boundary with its vertices
    ///
    /// If the descriptor cannot be expanded the airspace is left unchanged
    /// and an [`Error::Descriptor`] carrying the would-be index is returned.
    pub fn add(&mut self, descriptor: PathDescriptor) -> Result<&mut Self> {
        let index = self.descriptors.len();
        self.boundary
            .append(&descriptor)
            .map_err(|source| Error::Descriptor {
                index,
                source: Box::new(source),
            })?;
        self.descriptors.push(descriptor);
        Ok(self)
    }

    /// Add a single vertex at the given coordinate
    pub fn add_line(&mut self, latitude: f64, longitude: f64) -> Result<&mut Self> {
        self.add(PathDescriptor::line(latitude, longitude))
    }

    /// Add a single vertex `radius` NM from the center along `angle`
    pub fn add_point(
        &mut self,
        latitude: f64,
        longitude: f64,
        angle: i32,
        radius: f64,
    ) -> Result<&mut Self> {
        self.add(PathDescriptor::point(latitude, longitude, angle, radius))
    }

    /// Add an arc around the center, one vertex per degree
    pub fn add_arc(
        &mut self,
        latitude: f64,
        longitude: f64,
        start: i32,
        end: i32,
        radius: f64,
        clockwise: bool,
    ) -> Result<&mut Self> {
        self.add(PathDescriptor::arc(
            latitude, longitude, start, end, radius, clockwise,
        ))
    }

    /// Add a full circle around the center
    pub fn add_circle(&mut self, latitude: f64, longitude: f64, radius: f64) -> Result<&mut Self> {
        self.add(PathDescriptor::circle(latitude, longitude, radius))
    }

    pub fn descriptors(&self) -> &[PathDescriptor] {
        &self.descriptors
    }

    /// Boundary vertices on the map plane, in drawing order
    pub fn boundary(&self) -> &[MapPoint] {
        self.boundary.points()
    }

    pub fn first_vertex(&self) -> Option<&MapPoint> {
        self.boundary().first()
    }

    pub fn last_vertex(&self) -> Option<&MapPoint> {
        self.boundary().last()
    }

    /// Get bounding box on the map plane (`None` if there are no vertices)
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.boundary.bounding_box()
    }

    /// Geographic coordinate at the middle of the bounding box
    pub fn center(&self) -> Option<Coordinate> {
        self.bounding_box()
            .map(|bbox| bbox.center().to_coordinate())
    }

    /// First `/`-delimited segment of the category (e.g. `CTA`)
    pub fn category_prefix(&self) -> &str {
        self.category.split('/').next().unwrap_or_default()
    }

    /// Display color from the given table
    pub fn color(&self, table: &ColorTable) -> Color {
        table.color_for(&self.category)
    }

    /// Vertical limits label, e.g. `SFC - 3500FT` or `2500FT - FL245`
    pub fn vertical_limits(&self) -> String {
        format!("{} - {}", format_limit(self.lower), format_limit(self.upper))
    }
}

impl fmt::Display for Airspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Airspace(id: {}, name: {}, lower: {}, upper: {}, type: {})",
            self.id, self.name, self.lower, self.upper, self.category
        )
    }
}

/// Format an altitude in feet for display
///
/// `0` is the surface, altitudes above 13,000 ft are shown as flight levels.
pub fn format_limit(feet: i32) -> String {
    if feet == 0 {
        "SFC".to_string()
    } else if feet > FLIGHT_LEVEL_THRESHOLD {
        format!("FL{}", feet / 100)
    } else {
        format!("{feet}FT")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_ok, assert_some};
    use insta::{assert_compact_debug_snapshot, assert_snapshot};

    fn wellington_ctr() -> Airspace {
        Airspace::new("NZA101", "Wellington Control Zone", "CTR/Class C", 0, 2500)
    }

    #[test]
    fn new_airspace_has_no_boundary() {
        let airspace = wellington_ctr();

        assert!(airspace.descriptors().is_empty());
        assert!(airspace.boundary().is_empty());
        assert_none!(airspace.bounding_box());
        assert_none!(airspace.first_vertex());
        assert_none!(airspace.last_vertex());
        assert_none!(airspace.center());
    }

    #[test]
    fn adding_descriptors_extends_boundary() {
        let mut airspace = wellington_ctr();
        assert_ok!(airspace.add_line(-41.2, 174.6));
        assert_ok!(airspace.add_arc(-41.33, 174.81, 300, 60, 6.0, true));
        assert_ok!(airspace.add_point(-41.33, 174.81, 120, 6.0));

        assert_eq!(airspace.descriptors().len(), 3);
        assert_eq!(airspace.boundary().len(), 1 + 121 + 1);
        assert_some!(airspace.bounding_box());
    }

    #[test]
    fn incremental_and_bulk_construction_agree() {
        let descriptors = vec![
            PathDescriptor::line(-41.2, 174.6),
            PathDescriptor::arc(-41.33, 174.81, 300, 60, 6.0, true),
            PathDescriptor::point(-41.33, 174.81, 120, 6.0),
        ];

        let mut incremental = wellington_ctr();
        for descriptor in descriptors.clone() {
            assert_ok!(incremental.add(descriptor));
        }

        let bulk = assert_ok!(wellington_ctr().with_descriptors(descriptors));
        assert_eq!(incremental, bulk);
    }

    #[test]
    fn failed_add_leaves_airspace_unchanged() {
        let mut airspace = wellington_ctr();
        assert_ok!(airspace.add_circle(-41.33, 174.81, 6.0));
        let before = airspace.clone();

        let result = airspace.add_point(-41.33, 174.81, 0, f64::NAN);
        assert_compact_debug_snapshot!(result.map(|_| ()), @"Err(Descriptor { index: 1, source: InvalidDistance(NaN) })");
        assert_eq!(airspace, before);
    }

    #[test]
    fn circle_center() {
        let mut airspace = wellington_ctr();
        assert_ok!(airspace.add_circle(-41.33, 174.81, 6.0));

        let center = airspace.center().unwrap();
        assert!((center.latitude - -41.33).abs() < 1e-3);
        assert!((center.longitude - 174.81).abs() < 1e-3);
    }

    #[test]
    fn colors_and_categories() {
        let airspace = wellington_ctr();
        let table = ColorTable::default();

        assert_eq!(airspace.category_prefix(), "CTR");
        assert_eq!(airspace.color(&table), Color::rgb(0, 103, 165));
    }

    #[test]
    fn limits() {
        assert_eq!(format_limit(0), "SFC");
        assert_eq!(format_limit(2500), "2500FT");
        assert_eq!(format_limit(13_000), "13000FT");
        assert_eq!(format_limit(24_500), "FL245");

        let airspace = Airspace::new("NZA936", "Auckland Oceanic", "CTA/Class A", 9500, 24_500);
        assert_snapshot!(airspace.vertical_limits(), @"9500FT - FL245");
    }

    #[test]
    fn display() {
        assert_snapshot!(
            wellington_ctr().to_string(),
            @"Airspace(id: NZA101, name: Wellington Control Zone, lower: 0, upper: 2500, type: CTR/Class C)"
        );
    }
}
