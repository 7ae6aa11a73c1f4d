//! # Style Attribute Maps
//!
//! A [Style] holds the attributes configured for one widget type, keyed by
//! attribute name (e.g. `rectWidth`, `progressColor`).
//!
//! ```rust
//! use rectprogress_theme::style::{Style, StyleVal};
//! use rectprogress_theme::dimension::Dimension;
//! use vello::peniko::Color;
//!
//! let style = Style::new()
//!     .with_value("rectColor", StyleVal::Color(Color::from_rgb8(0x88, 0x88, 0x88)))
//!     .with_value("rectWidth", StyleVal::Dimension(Dimension::dp(5.0)));
//!
//! assert!(style.get_color("rectColor").is_some());
//! assert!(style.get_color("rectWidth").is_none());
//! ```

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use vello::peniko::Color;

use crate::color;
use crate::dimension::{Dimension, DisplayMetrics};
use crate::error::{StyleError, StyleResult};

/// Attribute map for defining widget appearance.
#[derive(Clone, Debug, Default)]
pub struct Style {
    map: IndexMap<String, StyleVal>,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self {
            map: IndexMap::with_capacity(8),
        }
    }

    /// Create a style from an iterator of names and style values.
    pub fn from_values(values: impl IntoIterator<Item = (String, StyleVal)>) -> Self {
        Self {
            map: IndexMap::from_iter(values),
        }
    }

    /// Build a style from a TOML table.
    ///
    /// Attributes whose values cannot be understood are logged and skipped,
    /// so that readers fall back to their defaults.
    pub fn from_toml_table(table: &toml::Table) -> Self {
        let mut style = Self::new();

        for (name, value) in table {
            match StyleVal::from_toml(name, value) {
                Ok(val) => style.set(name, val),
                Err(err) => log::warn!("Ignoring style attribute '{}': {}", name, err),
            }
        }

        style
    }

    /// Insert a style value with the given name into the style map.
    pub fn with_value(mut self, name: impl ToString, value: StyleVal) -> Self {
        self.map.insert(name.to_string(), value);
        self
    }

    /// Set a style value by name.
    pub fn set(&mut self, name: impl ToString, value: StyleVal) {
        self.map.insert(name.to_string(), value);
    }

    /// Removes the style value with the given name.
    pub fn remove(&mut self, name: &str) {
        self.map.shift_remove(name);
    }

    /// Copy every attribute of `other` into this style, overriding existing ones.
    pub fn merge(&mut self, other: &Style) {
        for (name, value) in &other.map {
            self.map.insert(name.clone(), value.clone());
        }
    }

    /// Get a style value by name. Returns [None] if the value name does not exist.
    pub fn get(&self, name: &str) -> Option<&StyleVal> {
        self.map.get(name)
    }

    /// Get a color style value by name.
    pub fn get_color(&self, name: &str) -> Option<Color> {
        match self.map.get(name)? {
            StyleVal::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// Get an int style value by name.
    pub fn get_int(&self, name: &str) -> Option<i32> {
        match self.map.get(name)? {
            StyleVal::Int(int) => Some(*int),
            _ => None,
        }
    }

    /// Get a float style value by name.
    pub fn get_float(&self, name: &str) -> Option<f32> {
        match self.map.get(name)? {
            StyleVal::Float(float) => Some(*float),
            _ => None,
        }
    }

    /// Get a bool style value by name.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.map.get(name)? {
            StyleVal::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Get a dimension style value by name. Plain numbers are read as pixels.
    pub fn get_dimension(&self, name: &str) -> Option<Dimension> {
        match self.map.get(name)? {
            StyleVal::Dimension(dimension) => Some(*dimension),
            StyleVal::Float(value) => Some(Dimension::px(*value)),
            StyleVal::Int(value) => Some(Dimension::px(*value as f32)),
            _ => None,
        }
    }

    /// Get a dimension style value resolved to pixels.
    pub fn get_dimension_px(&self, name: &str, metrics: &DisplayMetrics) -> Option<f32> {
        self.get_dimension(name).map(|d| metrics.resolve(d))
    }

    /// Number of attributes in this style.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the style holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over the attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleVal)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A single attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleVal {
    /// A color value.
    Color(Color),
    /// A length with a unit.
    Dimension(Dimension),
    /// A float value.
    Float(f32),
    /// An int value.
    Int(i32),
    /// A bool value.
    Bool(bool),
}

impl StyleVal {
    /// Convert a TOML value into a style value.
    ///
    /// Strings starting with `#` or naming a color become [StyleVal::Color];
    /// other strings must be dimensions like `5dp`.
    pub fn from_toml(attribute: &str, value: &toml::Value) -> StyleResult<Self> {
        match value {
            toml::Value::Boolean(b) => Ok(StyleVal::Bool(*b)),
            toml::Value::Float(f) => Ok(StyleVal::Float(*f as f32)),
            toml::Value::Integer(i) => i32::try_from(*i)
                .map(StyleVal::Int)
                .map_err(|_| StyleError::unsupported_value(attribute, "integer out of range")),
            toml::Value::String(s) => Self::parse_str(s),
            other => Err(StyleError::unsupported_value(attribute, other.type_str())),
        }
    }

    fn parse_str(value: &str) -> StyleResult<Self> {
        let trimmed = value.trim();
        let starts_numeric = trimmed
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '.' || c == '+');

        if starts_numeric {
            trimmed.parse::<Dimension>().map(StyleVal::Dimension)
        } else {
            color::parse_color(trimmed).map(StyleVal::Color)
        }
    }
}

impl Display for StyleVal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleVal::Color(color) => write!(f, "{}", color::to_hex(*color)),
            StyleVal::Dimension(dimension) => write!(f, "{}", dimension),
            StyleVal::Float(value) => write!(f, "{}", value),
            StyleVal::Int(value) => write!(f, "{}", value),
            StyleVal::Bool(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(src: &str) -> toml::Table {
        src.parse::<toml::Table>().unwrap()
    }

    #[test]
    fn test_from_toml_table_types() {
        let style = Style::from_toml_table(&table(
            r##"
            rectWidth = "5dp"
            progressColor = "#00ff00"
            rectColor = "gray"
            progress = 42
            ratio = 0.5
            "##,
        ));

        assert_eq!(style.get_dimension("rectWidth"), Some(Dimension::dp(5.0)));
        assert_eq!(
            style.get_color("progressColor").map(color::to_hex).as_deref(),
            Some("#00ff00")
        );
        assert_eq!(style.get("rectColor").map(|v| v.to_string()).as_deref(), Some("#888888"));
        assert_eq!(style.get_int("progress"), Some(42));
        assert_eq!(style.get_float("ratio"), Some(0.5));
    }

    #[test]
    fn test_malformed_attributes_are_skipped() {
        let style = Style::from_toml_table(&table(
            r#"
            rectWidth = "5 furlongs"
            rectColor = "not-a-color"
            progress = 10000000000
            nested = { a = 1 }
            progressWidth = "6dp"
            "#,
        ));

        assert_eq!(style.len(), 1);
        assert!(style.get("rectWidth").is_none());
        assert!(style.get("rectColor").is_none());
        assert!(style.get("progress").is_none());
        assert_eq!(style.get_dimension("progressWidth"), Some(Dimension::dp(6.0)));
    }

    #[test]
    fn test_dimension_accepts_plain_numbers() {
        let style = Style::new()
            .with_value("a", StyleVal::Float(3.5))
            .with_value("b", StyleVal::Int(4));
        let metrics = DisplayMetrics::with_density(2.0);

        assert_eq!(style.get_dimension_px("a", &metrics), Some(3.5));
        assert_eq!(style.get_dimension_px("b", &metrics), Some(4.0));
    }

    #[test]
    fn test_merge_overrides() {
        let mut base = Style::new()
            .with_value("progress", StyleVal::Int(1))
            .with_value("rectWidth", StyleVal::Dimension(Dimension::dp(5.0)));
        let overlay = Style::new().with_value("progress", StyleVal::Int(2));

        base.merge(&overlay);

        assert_eq!(base.get_int("progress"), Some(2));
        assert_eq!(base.len(), 2);
    }
}
