use crate::types::{Coordinate, PathDescriptor};
use log::debug;
use serde::de::{self, Deserialize, Deserializer, Unexpected};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Optional fields that select the descriptor variant
const SHAPE_FIELDS: [&str; 5] = ["angle", "start", "end", "radius", "clockwise"];

/// Wire representation of a descriptor
///
/// Only the fields of the encoded variant are present. Coordinates are
/// rounded to six decimal places so that output is stable across runs.
#[derive(Serialize)]
struct DescriptorRecord {
    latitude: f64,
    longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    angle: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clockwise: Option<bool>,
}

impl From<&PathDescriptor> for DescriptorRecord {
    fn from(descriptor: &PathDescriptor) -> Self {
        let coordinate = descriptor.coordinate().rounded();
        let mut record = DescriptorRecord {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            angle: None,
            start: None,
            end: None,
            radius: None,
            clockwise: None,
        };

        match *descriptor {
            PathDescriptor::Line { .. } => {}
            PathDescriptor::Point { angle, radius, .. } => {
                record.angle = Some(angle);
                record.radius = Some(radius);
            }
            PathDescriptor::Arc {
                start,
                end,
                radius,
                clockwise,
                ..
            } => {
                record.start = Some(start);
                record.end = Some(end);
                record.radius = Some(radius);
                record.clockwise = Some(clockwise);
            }
        }

        record
    }
}

impl Serialize for PathDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DescriptorRecord::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PathDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode(&value)
    }
}

/// Classify a descriptor record by the optional fields it carries
///
/// Precedence, first match wins:
///
/// 1. `start`, `end`, `radius` and `clockwise` → [`PathDescriptor::Arc`]
/// 2. `angle` and `radius` → [`PathDescriptor::Point`]
/// 3. anything else → [`PathDescriptor::Line`]
///
/// Optional fields with the wrong type, and angles outside `0..360`, count
/// as absent, so a partially broken record degrades to a simpler variant
/// instead of failing. Only a missing or non-numeric `latitude`/`longitude`
/// is an error.
pub(crate) fn decode<E: de::Error>(value: &Value) -> Result<PathDescriptor, E> {
    let Value::Object(record) = value else {
        return Err(E::invalid_type(unexpected(value), &"a path descriptor record"));
    };

    let coordinate = Coordinate::new(
        required_number(record, "latitude")?,
        required_number(record, "longitude")?,
    );

    let radius = number(record, "radius");

    if let (Some(start), Some(end), Some(radius), Some(clockwise)) = (
        angle(record, "start"),
        angle(record, "end"),
        radius,
        record.get("clockwise").and_then(Value::as_bool),
    ) {
        return Ok(PathDescriptor::Arc {
            coordinate,
            start,
            end,
            radius,
            clockwise,
        });
    }

    if let (Some(angle), Some(radius)) = (angle(record, "angle"), radius) {
        return Ok(PathDescriptor::Point {
            coordinate,
            angle,
            radius,
        });
    }

    if SHAPE_FIELDS.iter().any(|field| record.contains_key(*field)) {
        debug!("incomplete descriptor at {coordinate:?} decoded as a line: {value}");
    }

    Ok(PathDescriptor::Line { coordinate })
}

fn required_number<E: de::Error>(
    record: &Map<String, Value>,
    field: &'static str,
) -> Result<f64, E> {
    match record.get(field) {
        None => Err(E::missing_field(field)),
        Some(value) => value.as_f64().ok_or_else(|| {
            E::custom(format_args!(
                "invalid type for `{field}`: {}, expected a number",
                unexpected(value)
            ))
        }),
    }
}

fn number(record: &Map<String, Value>, field: &str) -> Option<f64> {
    record.get(field).and_then(Value::as_f64)
}

/// Whole degrees in `0..360`, written as an integer or an integral float
fn angle(record: &Map<String, Value>, field: &str) -> Option<i32> {
    let degrees = record.get(field).and_then(Value::as_f64)?;
    if degrees.fract() != 0.0 || !(0.0..360.0).contains(&degrees) {
        return None;
    }
    Some(degrees as i32)
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Unexpected::Signed(i),
            None => Unexpected::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
