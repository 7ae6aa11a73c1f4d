#![warn(missing_docs)]

//! Styling for rectprogress => See `rectprogress` crate.
//!
//! Contains widget ids, attribute maps, units, colors and style sheet loading.

pub use vello::peniko;

/// Contains the [color] parsing helpers and default colors.
pub mod color;

/// Contains the [config::StyleSheet] loaded from TOML.
pub mod config;

/// Contains [dimension::Dimension] and [dimension::DisplayMetrics].
pub mod dimension;

/// Contains the [error::StyleError] type.
pub mod error;

/// Contains the [id::WidgetId] struct.
pub mod id;

/// Contains the [style::Style] attribute map.
pub mod style;

/// Contains the [theme::Theme] trait.
pub mod theme;
