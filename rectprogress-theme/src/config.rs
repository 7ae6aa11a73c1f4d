//! # Style Sheet Configuration
//!
//! A [StyleSheet] is a [Theme] loaded from TOML, from a file, or from the path
//! named by the `RECTPROGRESS_STYLE` environment variable.
//!
//! ## File Format
//!
//! ```toml
//! [metrics]
//! density = 2.0
//! scaled_density = 2.0
//! xdpi = 320.0
//!
//! [styles.RectProgressBar]
//! rectWidth = "5dp"
//! progressWidth = "6dp"
//! rectColor = "gray"
//! progressColor = "#ff0000"
//! progress = 0
//!
//! [styles."my-app:RectProgressBar"]
//! progressColor = "#00aaff"
//! ```
//!
//! A section key without a namespace belongs to `rectprogress-widgets`.
//! Attribute values that cannot be parsed are logged and skipped.

use std::env;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::dimension::DisplayMetrics;
use crate::error::{StyleError, StyleResult};
use crate::id::WidgetId;
use crate::style::Style;
use crate::theme::Theme;

/// Environment variable holding the path of the style sheet to load.
pub const STYLE_ENV_VAR: &str = "RECTPROGRESS_STYLE";

#[derive(Debug, Default, Deserialize)]
struct StyleFile {
    #[serde(default)]
    metrics: Option<DisplayMetrics>,
    #[serde(default)]
    styles: toml::Table,
}

/// A set of widget styles plus the display metrics to resolve them with.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    // None until a sheet sets [metrics]; resolves to the default metrics
    metrics: Option<DisplayMetrics>,
    styles: IndexMap<WidgetId, Style>,
}

impl StyleSheet {
    /// Create an empty style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display metrics and return the sheet.
    pub fn with_metrics(mut self, metrics: DisplayMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Add a style for a widget type and return the sheet.
    pub fn with_style(mut self, id: WidgetId, style: Style) -> Self {
        self.insert(id, style);
        self
    }

    /// Add a style for a widget type, merging into any existing one.
    pub fn insert(&mut self, id: WidgetId, style: Style) {
        match self.styles.get_mut(&id) {
            Some(existing) => existing.merge(&style),
            None => {
                self.styles.insert(id, style);
            },
        }
    }

    /// Parse a style sheet from TOML source.
    pub fn from_toml(source: &str) -> StyleResult<Self> {
        Self::parse(source, "<inline>")
    }

    /// Load a style sheet from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> StyleResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StyleError::file_not_found(path));
        }

        log::info!("Loading style sheet from: {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Load the sheet named by `RECTPROGRESS_STYLE`, or an empty sheet.
    ///
    /// Failures are logged and yield the empty sheet.
    pub fn from_env_or_default() -> Self {
        let Ok(path) = env::var(STYLE_ENV_VAR) else {
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(sheet) => sheet,
            Err(err) => {
                log::warn!("Failed to load style sheet from {}: {}", STYLE_ENV_VAR, err);
                Self::default()
            },
        }
    }

    /// Merge another sheet into this one. Its attributes override, and so do
    /// its metrics if it sets any.
    pub fn merge(&mut self, other: StyleSheet) {
        if other.metrics.is_some() {
            self.metrics = other.metrics;
        }
        for (id, style) in other.styles {
            self.insert(id, style);
        }
    }

    /// The widget types this sheet has styles for.
    pub fn widget_ids(&self) -> impl Iterator<Item = &WidgetId> {
        self.styles.keys()
    }

    fn parse(source: &str, source_name: &str) -> StyleResult<Self> {
        let file: StyleFile = toml::from_str(source)
            .map_err(|e| StyleError::parse_error(source_name, e.to_string()))?;

        let mut sheet = Self {
            metrics: file.metrics,
            ..Self::default()
        };

        for (key, value) in &file.styles {
            match value.as_table() {
                Some(table) => sheet.insert(WidgetId::parse(key), Style::from_toml_table(table)),
                None => log::warn!("Ignoring style entry '{}' in {}: not a table", key, source_name),
            }
        }

        Ok(sheet)
    }
}

impl Theme for StyleSheet {
    fn of(&self, id: &WidgetId) -> Option<Style> {
        self.styles.get(id).cloned()
    }

    fn metrics(&self) -> DisplayMetrics {
        self.metrics.unwrap_or_default()
    }
}
