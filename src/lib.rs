#![warn(missing_docs)]

//! A square progress indicator for vello based UIs.
//!
//! The [RectProgressBar](widgets::rect_progress::RectProgressBar) draws a
//! square track and traces its progress clockwise around the perimeter,
//! starting at the top-left corner.
//!
//! ```rust
//! use rectprogress::prelude::*;
//!
//! let update = UpdateManager::new();
//! let mut bar = RectProgressBar::new(update.clone()).with_progress(40);
//!
//! let layout = LayoutNode::sized(120.0, 120.0);
//! let mut graphics = RecordingGraphics::new();
//! bar.render(&mut graphics, &layout);
//!
//! // track outline, full top side, partial right side
//! assert_eq!(graphics.commands().len(), 3);
//! ```

pub use nalgebra as math;
pub use vello::peniko as color;

pub use rectprogress_core as core;
pub use rectprogress_theme as theme;
pub use rectprogress_widgets as widgets;

/// A "prelude" for users of rectprogress.
///
/// ```rust
/// use rectprogress::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::app::update::{Update, UpdateManager};
    pub use crate::core::layout::{LayoutNode, MeasureMode, MeasureSpec};
    pub use crate::core::signal::{state::StateSignal, Signal};
    pub use crate::core::vgi::{DrawCommand, Graphics, RecordingGraphics, VelloGraphics};
    pub use crate::core::widget::Widget;

    // Styling
    pub use crate::theme::config::StyleSheet;
    pub use crate::theme::dimension::{Dimension, DisplayMetrics};
    pub use crate::theme::id::WidgetId;
    pub use crate::theme::style::{Style, StyleVal};
    pub use crate::theme::theme::{DefaultTheme, Theme};

    // Math
    pub use nalgebra::Vector2;

    // Color
    pub use vello::peniko::Color;

    // Widgets
    pub use crate::widgets::perimeter::{
        DrawPrimitive, PerimeterProgressRenderer, ProgressBand, RenderState,
    };
    pub use crate::widgets::rect_progress::RectProgressBar;
}
