//! Vector Graphics Interface abstraction.
//!
//! This module provides an abstraction over rendering backends, allowing widgets
//! to be decoupled from the specific rendering implementation (e.g., Vello).

use vello::kurbo::{Affine, BezPath, Shape, Stroke};
use vello::peniko::{Brush, Fill};

/// A trait for rendering vector graphics.
///
/// Methods use `&BezPath` for object-safety. To use concrete shape types
/// (Rect, Line, etc.), convert them with [shape_to_path].
pub trait Graphics {
    /// Fill a shape with the given brush.
    fn fill(
        &mut self,
        fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Stroke a shape with the given brush.
    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );
}

/// Helper function to convert a shape to BezPath for use with Graphics trait.
pub fn shape_to_path(shape: &impl Shape) -> BezPath {
    shape.to_path(0.1)
}

/// A default graphics implementation using Vello.
pub mod vello_vg;

/// A headless graphics implementation that records draw commands.
pub mod recording;

pub use recording::{DrawCommand, RecordingGraphics};
pub use vello_vg::VelloGraphics;
