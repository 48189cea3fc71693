/// An RGBA display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 255,
        }
    }

    /// Same color with a different opacity (`0.0..=1.0`)
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    /// `#RRGGBB` representation, ignoring alpha
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// Ordered lookup table from airspace category to display color
///
/// Only the first `/`-separated segment of a category is matched, so
/// `"CTA/Class C"` uses the `CTA` entry. Entries are checked in insertion
/// order and the first exact match wins.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable {
    entries: Vec<(String, Color)>,
    fallback: Color,
}

impl ColorTable {
    /// Create an empty table resolving every category to `fallback`
    pub fn new(fallback: Color) -> Self {
        Self {
            entries: Vec::new(),
            fallback,
        }
    }

    /// Add an entry at the end of the table
    pub fn with_entry(mut self, prefix: impl Into<String>, color: Color) -> Self {
        self.entries.push((prefix.into(), color));
        self
    }

    pub fn entries(&self) -> &[(String, Color)] {
        &self.entries
    }

    /// Resolve the display color of a category string
    pub fn color_for(&self, category: &str) -> Color {
        let prefix = category.split('/').next().unwrap_or_default();
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == prefix)
            .map(|(_, color)| *color)
            .unwrap_or(self.fallback)
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        ColorTable::new(Color::BLACK)
            .with_entry("CTA", Color::rgb(129, 44, 124))
            .with_entry("CTR", Color::rgb(0, 103, 165))
            .with_entry("T", Color::rgb(119, 166, 205))
            .with_entry("D", Color::rgb(216, 35, 42))
            .with_entry("QNH", Color::YELLOW)
    }
}
