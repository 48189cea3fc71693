//! Loading airspace datasets from JSON documents

use crate::codec::AirspaceRecord;
use crate::error::{Error, Result};
use crate::projection::PointProjector;
use crate::types::Airspace;
use log::{info, warn};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Loads airspace datasets and builds their boundaries
///
/// Two document layouts are accepted:
///
/// - an object mapping airspace identifiers to airspace records (keyed)
/// - an array of airspace records (flat)
///
/// Loading is all-or-nothing: a single malformed record fails the whole
/// document and no partial dataset is returned.
///
/// # Example
///
/// ```
/// use airspace_boundary::AirspaceReader;
///
/// let json = r#"[{
///     "id": "NZA101", "name": "Wellington", "type": "CTR/Class C",
///     "lower": 0, "upper": 2500,
///     "boundary": [{"latitude": -41.33, "longitude": 174.81, "start": 0, "end": 359, "radius": 6, "clockwise": true}]
/// }]"#;
///
/// let airspaces = AirspaceReader::new().read_str(json)?;
/// assert_eq!(airspaces[0].boundary().len(), 360);
/// # Ok::<(), airspace_boundary::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AirspaceReader {
    projector: PointProjector,
}

impl AirspaceReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom projector for all airspaces
    pub fn with_projector(mut self, projector: PointProjector) -> Self {
        self.projector = projector;
        self
    }

    /// Read a dataset from a file path
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Airspace>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let airspaces = self.read(BufReader::new(file))?;
        info!("loaded {} airspaces from {}", airspaces.len(), path.display());
        Ok(airspaces)
    }

    /// Read a dataset from any `Read` source
    pub fn read<R: Read>(&self, reader: R) -> Result<Vec<Airspace>> {
        let value: Value = serde_json::from_reader(reader)?;
        self.read_value(value)
    }

    /// Read a dataset from a JSON string
    pub fn read_str(&self, json: &str) -> Result<Vec<Airspace>> {
        let value: Value = serde_json::from_str(json)?;
        self.read_value(value)
    }

    /// Read a dataset from an already parsed JSON tree
    pub fn read_value(&self, value: Value) -> Result<Vec<Airspace>> {
        let records = decode_records(value)?;
        self.build(records)
    }

    #[cfg(not(feature = "rayon"))]
    fn build(&self, records: Vec<AirspaceRecord>) -> Result<Vec<Airspace>> {
        records
            .into_iter()
            .map(|record| record.into_airspace(self.projector))
            .collect()
    }

    #[cfg(feature = "rayon")]
    fn build(&self, records: Vec<AirspaceRecord>) -> Result<Vec<Airspace>> {
        use rayon::prelude::*;

        records
            .into_par_iter()
            .map(|record| record.into_airspace(self.projector))
            .collect()
    }
}

/// Decode all records of a keyed or flat document, in iteration order
fn decode_records(value: Value) -> Result<Vec<AirspaceRecord>> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| Ok(serde_json::from_value(item)?))
            .collect(),
        Value::Object(entries) => entries
            .into_iter()
            .map(|(key, item)| {
                let record: AirspaceRecord = serde_json::from_value(item)?;
                if record.id != key {
                    warn!("airspace {} is stored under key {key}", record.id);
                }
                Ok(record)
            })
            .collect(),
        other => Err(Error::InvalidDocument {
            found: value_kind(&other),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
