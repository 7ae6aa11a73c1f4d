//! # Dimensions
//!
//! Lengths in style attributes carry a unit. They are resolved to pixels
//! against the [DisplayMetrics] of the target display.
//!
//! ```rust
//! use rectprogress_theme::dimension::{Dimension, DisplayMetrics};
//!
//! let metrics = DisplayMetrics::with_density(2.0);
//! let width: Dimension = "5dp".parse().unwrap();
//! assert_eq!(metrics.resolve(width), 10.5);
//! ```

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::StyleError;

/// Baseline dots per inch that a density of `1.0` corresponds to.
pub const BASELINE_DPI: f32 = 160.0;

/// The unit of a [Dimension].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Raw pixels.
    Px,
    /// Density independent pixels.
    Dp,
    /// Scale independent pixels (density scaled by the user's font scale).
    Sp,
    /// Points, 1/72 of an inch.
    Pt,
    /// Inches.
    In,
    /// Millimeters.
    Mm,
}

impl Unit {
    fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Dp => "dp",
            Unit::Sp => "sp",
            Unit::Pt => "pt",
            Unit::In => "in",
            Unit::Mm => "mm",
        }
    }
}

/// A length with a unit, e.g. `5dp` or `12px`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    /// The numeric part.
    pub value: f32,
    /// The unit the value is expressed in.
    pub unit: Unit,
}

impl Dimension {
    /// A dimension in pixels.
    pub const fn px(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    /// A dimension in density independent pixels.
    pub const fn dp(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Dp,
        }
    }
}

impl FromStr for Dimension {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let split = raw
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(raw.len());
        let (number, suffix) = raw.split_at(split);

        let unit = match suffix.to_ascii_lowercase().as_str() {
            "" | "px" => Unit::Px,
            "dp" | "dip" => Unit::Dp,
            "sp" => Unit::Sp,
            "pt" => Unit::Pt,
            "in" => Unit::In,
            "mm" => Unit::Mm,
            _ => return Err(StyleError::invalid_dimension(raw)),
        };

        let value = number
            .trim()
            .parse::<f32>()
            .map_err(|_| StyleError::invalid_dimension(raw))?;

        if !value.is_finite() || value < 0.0 {
            return Err(StyleError::invalid_dimension(raw));
        }

        Ok(Self { value, unit })
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

/// Information about the display that dimensions are resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayMetrics {
    /// Logical density; `1.0` on a 160 dpi screen.
    pub density: f32,
    /// Density used for `sp` values; usually `density` times the font scale.
    pub scaled_density: f32,
    /// Physical pixels per inch along the x axis.
    pub xdpi: f32,
}

impl DisplayMetrics {
    /// Metrics for a display with the given density and no extra font scaling.
    pub fn with_density(density: f32) -> Self {
        Self {
            density,
            scaled_density: density,
            xdpi: density * BASELINE_DPI,
        }
    }

    /// Resolve a dimension to pixels.
    ///
    /// Density based units round the way the host toolkit does for its
    /// defaults: `value * density + 0.5`.
    pub fn resolve(&self, dimension: Dimension) -> f32 {
        let value = dimension.value;
        match dimension.unit {
            Unit::Px => value,
            Unit::Dp => value * self.density + 0.5,
            Unit::Sp => value * self.scaled_density + 0.5,
            Unit::Pt => value * self.xdpi / 72.0,
            Unit::In => value * self.xdpi,
            Unit::Mm => value * self.xdpi / 25.4,
        }
    }

    /// Shortcut for resolving a `dp` value.
    pub fn dp_to_px(&self, dp: f32) -> f32 {
        self.resolve(Dimension::dp(dp))
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!("5dp".parse::<Dimension>().unwrap(), Dimension::dp(5.0));
        assert_eq!("5dip".parse::<Dimension>().unwrap(), Dimension::dp(5.0));
        assert_eq!(" 12.5px ".parse::<Dimension>().unwrap(), Dimension::px(12.5));
        assert_eq!("7".parse::<Dimension>().unwrap(), Dimension::px(7.0));
        assert_eq!(
            "2mm".parse::<Dimension>().unwrap(),
            Dimension {
                value: 2.0,
                unit: Unit::Mm
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_unit() {
        assert!("5em".parse::<Dimension>().is_err());
        assert!("dp".parse::<Dimension>().is_err());
        assert!("".parse::<Dimension>().is_err());
        assert!("-5dp".parse::<Dimension>().is_err());
        assert!("-0.5px".parse::<Dimension>().is_err());
    }

    #[test]
    fn test_resolve_density_units() {
        let metrics = DisplayMetrics::with_density(3.0);
        assert_eq!(metrics.dp_to_px(6.0), 18.5);
        assert_eq!(metrics.resolve(Dimension::px(4.0)), 4.0);
        assert_eq!(metrics.resolve("1in".parse().unwrap()), 480.0);
        assert_eq!(metrics.resolve("72pt".parse().unwrap()), 480.0);
        assert_eq!(metrics.resolve("2sp".parse().unwrap()), 6.5);
        assert!((metrics.resolve("25.4mm".parse().unwrap()) - 480.0).abs() < 1e-3);

        let scaled = DisplayMetrics {
            density: 2.0,
            scaled_density: 2.5,
            xdpi: 320.0,
        };
        assert_eq!(scaled.resolve("4sp".parse().unwrap()), 10.5);
        assert_eq!(scaled.dp_to_px(4.0), 8.5);
    }

    #[test]
    fn test_default_metrics() {
        let metrics = DisplayMetrics::default();
        assert_eq!(metrics.dp_to_px(5.0), 5.5);
        assert_eq!(metrics.xdpi, BASELINE_DPI);
    }
}
