use nalgebra::Vector2;

/// Size used along an axis the parent leaves unconstrained.
pub const DEFAULT_MEASURE_SIZE: u32 = 100;

/// How a parent constrains one axis of a child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MeasureMode {
    /// The child may be as large as it wants.
    #[default]
    Unspecified,
    /// The child may be at most `size`.
    AtMost,
    /// The child must be exactly `size`.
    Exactly,
}

/// A constraint on one axis, passed to [Widget::measure](crate::widget::Widget::measure).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct MeasureSpec {
    /// The constraint mode.
    pub mode: MeasureMode,
    /// The size in pixels. Ignored for [MeasureMode::Unspecified].
    pub size: u32,
}

impl MeasureSpec {
    /// An unconstrained axis.
    pub const fn unspecified() -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size: 0,
        }
    }

    /// An axis bounded by `size`.
    pub const fn at_most(size: u32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    /// An axis fixed to `size`.
    pub const fn exactly(size: u32) -> Self {
        Self {
            mode: MeasureMode::Exactly,
            size,
        }
    }

    /// Resolve the size a widget without content preferences takes on this axis.
    ///
    /// Bounded and exact axes take the offered size, unconstrained ones fall back
    /// to [DEFAULT_MEASURE_SIZE].
    pub fn resolve(&self) -> u32 {
        match self.mode {
            MeasureMode::AtMost | MeasureMode::Exactly => self.size,
            MeasureMode::Unspecified => DEFAULT_MEASURE_SIZE,
        }
    }
}

/// Measure a square widget: both sides equal the larger resolved axis.
pub fn measure_square(width: MeasureSpec, height: MeasureSpec) -> Vector2<u32> {
    let side = width.resolve().max(height.resolve());
    Vector2::new(side, side)
}
