use nalgebra::Vector2;

/// Contains [measure::MeasureSpec] and helpers for resolving size constraints.
pub mod measure;

pub use measure::{MeasureMode, MeasureSpec};

/// The computed placement of a widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutNode {
    /// Top-left corner in surface coordinates.
    pub location: Vector2<f32>,
    /// Width and height.
    pub size: Vector2<f32>,
}

impl LayoutNode {
    /// Create a layout node at `location` with `size`.
    pub fn new(location: Vector2<f32>, size: Vector2<f32>) -> Self {
        Self { location, size }
    }

    /// A node at the origin with the given size.
    pub fn sized(width: f32, height: f32) -> Self {
        Self::new(Vector2::zeros(), Vector2::new(width, height))
    }

    /// The width of the node.
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// The height of the node.
    pub fn height(&self) -> f32 {
        self.size.y
    }
}
