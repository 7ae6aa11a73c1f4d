use crate::dimension::DisplayMetrics;
use crate::id::WidgetId;
use crate::style::Style;

/// Something that hands out styles for widget types.
///
/// Widgets query the theme once when they are constructed from it and fall
/// back to their built-in defaults for every attribute it does not provide.
pub trait Theme {
    /// Return the style of the given widget type or [None] if it is unstyled.
    fn of(&self, id: &WidgetId) -> Option<Style>;

    /// Return the display metrics dimensions are resolved against.
    fn metrics(&self) -> DisplayMetrics {
        DisplayMetrics::default()
    }
}

/// A theme that styles nothing. Every widget uses its defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTheme {
    metrics: DisplayMetrics,
}

impl DefaultTheme {
    /// Create a default theme for a display with the given metrics.
    pub fn new(metrics: DisplayMetrics) -> Self {
        Self { metrics }
    }
}

impl Theme for DefaultTheme {
    fn of(&self, _id: &WidgetId) -> Option<Style> {
        None
    }

    fn metrics(&self) -> DisplayMetrics {
        self.metrics
    }
}
