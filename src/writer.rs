//! Saving airspace datasets as JSON documents

use crate::error::Result;
use crate::types::Airspace;
use log::{debug, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// Top-level shape of a written document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// An array of airspace records, in insertion order
    #[default]
    Flat,
    /// An object mapping each airspace id to its record, sorted by id
    Keyed,
}

/// JSON dataset writer with builder API
///
/// Only the descriptors of each airspace are written, never the derived
/// boundary. Coordinates are rounded to six decimal places, so the same
/// airspaces always produce byte-identical output. The keyed layout holds
/// one record per id: duplicates are logged and only the last one is kept.
///
/// # Example
///
/// ```
/// use airspace_boundary::{Airspace, AirspaceWriter};
///
/// let mut airspace = Airspace::new("NZD120", "Wairarapa", "D", 0, 9500);
/// airspace.add_circle(-41.1, 175.6, 2.0)?;
///
/// let json = AirspaceWriter::new().add_airspace(airspace).to_string()?;
/// assert!(json.starts_with(r#"[{"id":"NZD120""#));
/// # Ok::<(), airspace_boundary::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AirspaceWriter {
    airspaces: Vec<Airspace>,
    layout: Layout,
    pretty: bool,
}

impl AirspaceWriter {
    /// Create a writer producing compact, flat documents
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single airspace to the writer
    ///
    /// Returns `&mut self` to allow method chaining.
    pub fn add_airspace(&mut self, airspace: Airspace) -> &mut Self {
        self.airspaces.push(airspace);
        self
    }

    /// Add multiple airspaces from an iterator
    ///
    /// Returns `&mut self` to allow method chaining.
    pub fn add_airspaces<I: IntoIterator<Item = Airspace>>(&mut self, airspaces: I) -> &mut Self {
        self.airspaces.extend(airspaces);
        self
    }

    /// Configure the document layout
    ///
    /// Default is [`Layout::Flat`]. Returns `&mut self` to allow method chaining.
    pub fn with_layout(&mut self, layout: Layout) -> &mut Self {
        self.layout = layout;
        self
    }

    /// Indent the output for human readers
    ///
    /// Default is compact output. Returns `&mut self` to allow method chaining.
    pub fn with_pretty(&mut self, pretty: bool) -> &mut Self {
        self.pretty = pretty;
        self
    }

    /// Write the document to `writer`
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        debug!(
            "writing {} airspaces ({:?} layout)",
            self.airspaces.len(),
            self.layout
        );

        match self.layout {
            Layout::Flat => self.write_value(writer, &self.airspaces),
            Layout::Keyed => self.write_value(writer, &self.keyed()),
        }
    }

    /// Render the document into a string
    pub fn to_string(&self) -> Result<String> {
        match self.layout {
            Layout::Flat => self.render_value(&self.airspaces),
            Layout::Keyed => self.render_value(&self.keyed()),
        }
    }

    /// Airspaces sorted by id; of several airspaces sharing an id the last
    /// one added is kept
    fn keyed(&self) -> BTreeMap<&str, &Airspace> {
        let mut keyed = BTreeMap::new();
        for airspace in &self.airspaces {
            if keyed.insert(airspace.id.as_str(), airspace).is_some() {
                warn!("duplicate airspace id {}, keeping the last one", airspace.id);
            }
        }
        keyed
    }

    fn write_value<W: Write, T: Serialize>(&self, writer: W, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(writer, value)?;
        } else {
            serde_json::to_writer(writer, value)?;
        }
        Ok(())
    }

    fn render_value<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}
