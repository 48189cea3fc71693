use crate::error::{Error, Result};
use crate::projection::PointProjector;
use crate::types::{Airspace, PathDescriptor};
use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};

/// Decoded airspace record whose boundary has not been built yet
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub(crate) struct AirspaceRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub lower: i32,
    pub upper: i32,
    pub boundary: Vec<PathDescriptor>,
}

impl AirspaceRecord {
    /// Build the boundary over the full descriptor list
    pub fn into_airspace(self, projector: PointProjector) -> Result<Airspace> {
        let AirspaceRecord {
            id,
            name,
            category,
            lower,
            upper,
            boundary,
        } = self;

        Airspace::new(id.clone(), name, category, lower, upper)
            .with_projector(projector)
            .with_descriptors(boundary)
            .map_err(|source| Error::Airspace {
                id,
                source: Box::new(source),
            })
    }
}

/// Borrowed wire representation of an airspace
#[derive(serde::Serialize)]
struct AirspaceRecordRef<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(rename = "type")]
    category: &'a str,
    lower: i32,
    upper: i32,
    boundary: &'a [PathDescriptor],
}

impl<'a> From<&'a Airspace> for AirspaceRecordRef<'a> {
    fn from(airspace: &'a Airspace) -> Self {
        Self {
            id: &airspace.id,
            name: &airspace.name,
            category: &airspace.category,
            lower: airspace.lower,
            upper: airspace.upper,
            boundary: airspace.descriptors(),
        }
    }
}

impl Serialize for Airspace {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        AirspaceRecordRef::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Airspace {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let record = AirspaceRecord::deserialize(deserializer)?;
        record
            .into_airspace(PointProjector::default())
            .map_err(de::Error::custom)
    }
}
