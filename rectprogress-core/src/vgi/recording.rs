use crate::vgi::Graphics;
use vello::kurbo::{Affine, BezPath, Stroke};
use vello::peniko::{Brush, Fill};

/// A single recorded draw call.
#[derive(Clone, Debug)]
pub enum DrawCommand {
    /// A fill call.
    Fill {
        /// Fill rule.
        fill_rule: Fill,
        /// Shape transform.
        transform: Affine,
        /// Brush used.
        brush: Brush,
        /// The filled path.
        path: BezPath,
    },
    /// A stroke call.
    Stroke {
        /// Stroke width.
        width: f64,
        /// Shape transform.
        transform: Affine,
        /// Brush used.
        brush: Brush,
        /// The stroked path.
        path: BezPath,
    },
}

/// Records every draw call instead of rasterizing it.
///
/// Useful for headless hosts and for asserting what a widget drew.
#[derive(Clone, Debug, Default)]
pub struct RecordingGraphics {
    commands: Vec<DrawCommand>,
}

impl RecordingGraphics {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Graphics for RecordingGraphics {
    fn fill(
        &mut self,
        fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        _brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.commands.push(DrawCommand::Fill {
            fill_rule,
            transform,
            brush: brush.clone(),
            path: shape.clone(),
        });
    }

    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        _brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.commands.push(DrawCommand::Stroke {
            width: style.width,
            transform,
            brush: brush.clone(),
            path: shape.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vgi::shape_to_path;
    use vello::kurbo::{Line, Rect};
    use vello::peniko::Color;

    #[test]
    fn test_records_in_order() {
        let mut graphics = RecordingGraphics::new();
        let brush = Brush::Solid(Color::from_rgb8(1, 2, 3));

        graphics.stroke(
            &Stroke::new(2.0),
            Affine::IDENTITY,
            &brush,
            None,
            &shape_to_path(&Rect::new(0.0, 0.0, 10.0, 10.0)),
        );
        graphics.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            &brush,
            None,
            &shape_to_path(&Rect::new(0.0, 0.0, 5.0, 5.0)),
        );
        graphics.stroke(
            &Stroke::new(3.0),
            Affine::IDENTITY,
            &brush,
            None,
            &shape_to_path(&Line::new((0.0, 0.0), (4.0, 0.0))),
        );

        let widths: Vec<_> = graphics
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Stroke { width, .. } => Some(*width),
                DrawCommand::Fill { .. } => None,
            })
            .collect();

        assert_eq!(graphics.commands().len(), 3);
        assert_eq!(widths, vec![2.0, 3.0]);

        graphics.clear();
        assert!(graphics.commands().is_empty());
    }
}
