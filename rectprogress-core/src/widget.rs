use crate::app::update::Update;
use crate::layout::{LayoutNode, MeasureSpec};
use crate::vgi::Graphics;
use nalgebra::Vector2;
use rectprogress_theme::id::WidgetId;

/// A boxed widget.
pub type BoxedWidget = Box<dyn Widget>;

/// The base trait for all widgets.
///
/// A host drives a widget in three steps: [measure](Widget::measure) it
/// against the parent's constraints, place it (producing a [LayoutNode]),
/// then call [update](Widget::update) and, when that asks for
/// [Update::DRAW], [render](Widget::render) onto a [Graphics] surface.
pub trait Widget {
    /// Draw the widget into `graphics` at the position and size given by `layout`.
    fn render(&mut self, graphics: &mut dyn Graphics, layout: &LayoutNode);

    /// Compute the desired size under the given constraints.
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Vector2<f32>;

    /// Process pending state and report what the host has to do next.
    fn update(&mut self, layout: &LayoutNode) -> Update;

    /// Return the widget id of this widget type.
    fn widget_id(&self) -> WidgetId;
}
