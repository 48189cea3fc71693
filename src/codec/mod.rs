//! JSON transport format for path descriptors and airspaces
//!
//! Descriptors are stored as flat records with mandatory `latitude` and
//! `longitude` fields. The variant is inferred from the optional fields that
//! are present, see [`decode_descriptor`].
//!
//! ```
//! use airspace_boundary::PathDescriptor;
//! use airspace_boundary::codec::{decode_descriptor, encode_descriptor};
//! use serde_json::json;
//!
//! let value = json!({"latitude": -41.33, "longitude": 174.81, "angle": 90, "radius": 5});
//! let descriptor = decode_descriptor(&value)?;
//! assert_eq!(descriptor, PathDescriptor::point(-41.33, 174.81, 90, 5.0));
//! assert_eq!(encode_descriptor(&descriptor)?, json!({
//!     "latitude": -41.33, "longitude": 174.81, "angle": 90, "radius": 5.0
//! }));
//! # Ok::<(), airspace_boundary::Error>(())
//! ```

mod airspace;
mod descriptor;

pub(crate) use airspace::AirspaceRecord;

use crate::error::Result;
use crate::types::{Airspace, PathDescriptor};
use serde_json::Value;

/// Decode a single descriptor record
///
/// Precedence, first match wins:
///
/// 1. whole-degree `start` and `end`, numeric `radius`, boolean `clockwise` → `Arc`
/// 2. whole-degree `angle` and numeric `radius` → `Point`
/// 3. anything else → `Line`
///
/// Angles must lie in `0..360`; `90` and `90.0` are both accepted. Optional
/// fields with the wrong type or out of range are treated as absent. Missing or
/// non-numeric `latitude`/`longitude` fields are format errors.
pub fn decode_descriptor(value: &Value) -> Result<PathDescriptor> {
    Ok(descriptor::decode::<serde_json::Error>(value)?)
}

/// Encode a descriptor, rounding its coordinate to six decimal places
pub fn encode_descriptor(descriptor: &PathDescriptor) -> Result<Value> {
    Ok(serde_json::to_value(descriptor)?)
}

/// Decode an airspace record and build its boundary
pub fn decode_airspace(value: Value) -> Result<Airspace> {
    let record: AirspaceRecord = serde_json::from_value(value)?;
    record.into_airspace(Default::default())
}

/// Encode an airspace with its descriptors (the boundary is not stored)
pub fn encode_airspace(airspace: &Airspace) -> Result<Value> {
    Ok(serde_json::to_value(airspace)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use claims::assert_matches;
    use serde_json::json;

    #[test]
    fn decode_descriptor_reports_format_errors() {
        let result = decode_descriptor(&json!({"latitude": 1}));
        assert_matches!(result, Err(Error::Json(_)));
    }

    #[test]
    fn decode_airspace_keeps_build_errors_typed() {
        let result = decode_airspace(json!({
            "id": "NZR001", "name": "Test", "type": "R", "lower": 0, "upper": 100,
            "boundary": [{"latitude": 0, "longitude": 0, "angle": 0, "radius": -1}]
        }));

        match result {
            Err(Error::Airspace { id, source }) => {
                assert_eq!(id, "NZR001");
                assert_matches!(*source, Error::Descriptor { index: 0, .. });
            }
            other => panic!("expected an airspace error, got {other:?}"),
        }
    }

    #[test]
    fn encode_airspace_omits_boundary_points() {
        let mut airspace = Airspace::new("NZR001", "Test", "R", 0, 100);
        airspace.add_circle(-41.0, 174.0, 1.0).unwrap();

        let value = encode_airspace(&airspace).unwrap();
        assert_eq!(value["boundary"].as_array().map(Vec::len), Some(1));
    }
}
