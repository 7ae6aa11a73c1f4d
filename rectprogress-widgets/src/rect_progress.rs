use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use nalgebra::Vector2;
use rectprogress_core::app::update::{Update, UpdateManager};
use rectprogress_core::layout::measure::measure_square;
use rectprogress_core::layout::{LayoutNode, MeasureSpec};
use rectprogress_core::signal::state::StateSignal;
use rectprogress_core::signal::Signal;
use rectprogress_core::vg::kurbo::{Affine, Stroke};
use rectprogress_core::vg::peniko::{Brush, Color};
use rectprogress_core::vgi::{shape_to_path, Graphics};
use rectprogress_core::widget::Widget;
use rectprogress_theme::color::{GRAY, RED};
use rectprogress_theme::dimension::DisplayMetrics;
use rectprogress_theme::id::WidgetId;
use rectprogress_theme::theme::Theme;

use crate::perimeter::{DrawPrimitive, PerimeterProgressRenderer, RenderState};

/// Default track stroke width in dp.
pub const DEFAULT_RECT_WIDTH_DP: f32 = 5.0;
/// Default progress stroke width in dp.
pub const DEFAULT_PROGRESS_WIDTH_DP: f32 = 6.0;

/// A square progress indicator that traces its progress around the perimeter.
///
/// The track is a square outline; progress is a stroke running clockwise from
/// the top-left corner, covering `progress`% of the perimeter. Values are not
/// clamped when stored: anything `<= 0` shows an empty track and anything
/// `>= 100` a full one.
///
/// The progress may be read and written from any thread, either through the
/// widget or through [RectProgressBar::progress_signal]. Every write requests
/// a redraw by raising [Update::DRAW] on the [UpdateManager].
///
/// ### Theming
/// Styling the widget uses following attributes:
/// - `rectWidth` - The stroke width of the track (default `5dp`).
/// - `progressWidth` - The stroke width of the progress trace (default `6dp`).
/// - `rectColor` - The track color (default gray).
/// - `progressColor` - The progress color (default red).
/// - `progress` - The initial progress (default `0`).
pub struct RectProgressBar {
    rect_width: f32,
    progress_width: f32,
    rect_color: Color,
    progress_color: Color,
    progress: StateSignal<i32>,
    redraw: Arc<AtomicBool>,
    renderer: PerimeterProgressRenderer,
}

impl RectProgressBar {
    /// Name of the track stroke width attribute.
    pub const ATTR_RECT_WIDTH: &'static str = "rectWidth";
    /// Name of the progress stroke width attribute.
    pub const ATTR_PROGRESS_WIDTH: &'static str = "progressWidth";
    /// Name of the track color attribute.
    pub const ATTR_RECT_COLOR: &'static str = "rectColor";
    /// Name of the progress color attribute.
    pub const ATTR_PROGRESS_COLOR: &'static str = "progressColor";
    /// Name of the progress attribute.
    pub const ATTR_PROGRESS: &'static str = "progress";

    /// Create a progress bar with default attributes for a display of density `1.0`.
    pub fn new(update: UpdateManager) -> Self {
        Self::with_metrics(&DisplayMetrics::default(), update)
    }

    /// Create a progress bar with default attributes resolved against `metrics`.
    pub fn with_metrics(metrics: &DisplayMetrics, update: UpdateManager) -> Self {
        Self::build(
            metrics.dp_to_px(DEFAULT_RECT_WIDTH_DP),
            metrics.dp_to_px(DEFAULT_PROGRESS_WIDTH_DP),
            GRAY,
            RED,
            0,
            update,
        )
    }

    /// Create a progress bar from the style the theme holds for [RectProgressBar::id].
    ///
    /// Attributes the theme does not provide, or provides with the wrong type,
    /// keep their defaults. So do widths that do not resolve to a positive size.
    pub fn from_theme(theme: &dyn Theme, update: UpdateManager) -> Self {
        let metrics = theme.metrics();
        let style = theme.of(&Self::id()).unwrap_or_default();

        Self::build(
            style
                .get_dimension_px(Self::ATTR_RECT_WIDTH, &metrics)
                .filter(|width| *width > 0.0)
                .unwrap_or_else(|| metrics.dp_to_px(DEFAULT_RECT_WIDTH_DP)),
            style
                .get_dimension_px(Self::ATTR_PROGRESS_WIDTH, &metrics)
                .filter(|width| *width > 0.0)
                .unwrap_or_else(|| metrics.dp_to_px(DEFAULT_PROGRESS_WIDTH_DP)),
            style.get_color(Self::ATTR_RECT_COLOR).unwrap_or(GRAY),
            style.get_color(Self::ATTR_PROGRESS_COLOR).unwrap_or(RED),
            style.get_int(Self::ATTR_PROGRESS).unwrap_or(0),
            update,
        )
    }

    fn build(
        rect_width: f32,
        progress_width: f32,
        rect_color: Color,
        progress_color: Color,
        progress: i32,
        update: UpdateManager,
    ) -> Self {
        let progress = StateSignal::new(progress);
        let redraw = Arc::new(AtomicBool::new(false));

        update.hook_signal(&progress, Update::DRAW);
        {
            let redraw = redraw.clone();
            progress.listen(Box::new(move |_| {
                redraw.store(true, Ordering::Release);
            }));
        }

        Self {
            rect_width,
            progress_width,
            rect_color,
            progress_color,
            progress,
            redraw,
            renderer: PerimeterProgressRenderer,
        }
    }

    /// The widget id used to look up this widget's style.
    pub fn id() -> WidgetId {
        WidgetId::new("rectprogress-widgets", "RectProgressBar")
    }

    /// Sets the track stroke width and returns itself.
    pub fn with_rect_width(mut self, width: f32) -> Self {
        self.rect_width = width;
        self
    }

    /// Sets the progress stroke width and returns itself.
    pub fn with_progress_width(mut self, width: f32) -> Self {
        self.progress_width = width;
        self
    }

    /// Sets the track color and returns itself.
    pub fn with_rect_color(mut self, color: Color) -> Self {
        self.rect_color = color;
        self
    }

    /// Sets the progress color and returns itself.
    pub fn with_progress_color(mut self, color: Color) -> Self {
        self.progress_color = color;
        self
    }

    /// Sets the progress and returns itself.
    pub fn with_progress(self, progress: i32) -> Self {
        self.set_progress(progress);
        self
    }

    /// The track stroke width in pixels.
    pub fn rect_width(&self) -> f32 {
        self.rect_width
    }

    /// Set the track stroke width in pixels.
    pub fn set_rect_width(&mut self, width: f32) {
        self.rect_width = width;
    }

    /// The progress stroke width in pixels.
    pub fn progress_width(&self) -> f32 {
        self.progress_width
    }

    /// Set the progress stroke width in pixels.
    pub fn set_progress_width(&mut self, width: f32) {
        self.progress_width = width;
    }

    /// The track color.
    pub fn rect_color(&self) -> Color {
        self.rect_color
    }

    /// Set the track color.
    pub fn set_rect_color(&mut self, color: Color) {
        self.rect_color = color;
    }

    /// The progress color.
    pub fn progress_color(&self) -> Color {
        self.progress_color
    }

    /// Set the progress color.
    pub fn set_progress_color(&mut self, color: Color) {
        self.progress_color = color;
    }

    /// The stored progress value, exactly as it was set.
    pub fn progress(&self) -> i32 {
        self.progress.get()
    }

    /// Store a new progress value and request a redraw.
    pub fn set_progress(&self, progress: i32) {
        self.progress.set_value(progress);
    }

    /// A handle to the progress value that can be moved to other threads.
    pub fn progress_signal(&self) -> StateSignal<i32> {
        self.progress.clone()
    }

    /// Snapshot the current fields for a square of `side_length` pixels.
    pub fn render_state(&self, side_length: f64) -> RenderState {
        RenderState {
            side_length,
            progress: self.progress(),
            track_stroke_width: self.rect_width,
            fill_stroke_width: self.progress_width,
            track_color: self.rect_color,
            fill_color: self.progress_color,
        }
    }
}

impl Widget for RectProgressBar {
    fn render(&mut self, graphics: &mut dyn Graphics, layout: &LayoutNode) {
        let side_length = f64::from(layout.width());
        let transform = Affine::translate((
            f64::from(layout.location.x),
            f64::from(layout.location.y),
        ));

        let state = self.render_state(side_length);

        for primitive in self.renderer.render(&state) {
            let (path, stroke_width, color) = match primitive {
                DrawPrimitive::Rect {
                    rect,
                    stroke_width,
                    color,
                } => (shape_to_path(&rect), stroke_width, color),
                DrawPrimitive::Line {
                    line,
                    stroke_width,
                    color,
                } => (shape_to_path(&line), stroke_width, color),
            };

            graphics.stroke(
                &Stroke::new(f64::from(stroke_width)),
                transform,
                &Brush::Solid(color),
                None,
                &path,
            );
        }
    }

    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Vector2<f32> {
        measure_square(width, height).map(|side| side as f32)
    }

    fn update(&mut self, _layout: &LayoutNode) -> Update {
        if self.redraw.swap(false, Ordering::AcqRel) {
            Update::DRAW
        } else {
            Update::empty()
        }
    }

    fn widget_id(&self) -> WidgetId {
        Self::id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rectprogress_core::vgi::{DrawCommand, RecordingGraphics};
    use rectprogress_theme::config::StyleSheet;
    use rectprogress_theme::theme::DefaultTheme;

    fn stroke_widths(graphics: &RecordingGraphics) -> Vec<f64> {
        graphics
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Stroke { width, .. } => Some(*width),
                DrawCommand::Fill { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_defaults() {
        let bar = RectProgressBar::new(UpdateManager::new());
        assert_eq!(bar.rect_width(), 5.5);
        assert_eq!(bar.progress_width(), 6.5);
        assert_eq!(bar.rect_color().to_rgba8().r, 0x88);
        assert_eq!(bar.progress_color().to_rgba8().r, 0xff);
        assert_eq!(bar.progress(), 0);
    }

    #[test]
    fn test_defaults_scale_with_density() {
        let bar = RectProgressBar::from_theme(
            &DefaultTheme::new(DisplayMetrics::with_density(2.0)),
            UpdateManager::new(),
        );
        assert_eq!(bar.rect_width(), 10.5);
        assert_eq!(bar.progress_width(), 12.5);
    }

    #[test]
    fn test_from_theme_attributes() {
        let sheet = StyleSheet::from_toml(
            r##"
            [metrics]
            density = 2.0

            [styles.RectProgressBar]
            rectWidth = "4px"
            progressWidth = "3dp"
            rectColor = "#112233"
            progressColor = "blue"
            progress = 40
            "##,
        )
        .unwrap();
        let update = UpdateManager::new();
        let mut bar = RectProgressBar::from_theme(&sheet, update.clone());

        assert_eq!(bar.rect_width(), 4.0);
        assert_eq!(bar.progress_width(), 6.5);
        assert_eq!(bar.rect_color().to_rgba8().g, 0x22);
        assert_eq!(bar.progress_color().to_rgba8().b, 0xff);
        assert_eq!(bar.progress(), 40);
        // styled initial progress is not a pending redraw
        assert_eq!(bar.update(&LayoutNode::sized(10.0, 10.0)), Update::empty());
        assert!(update.get().is_empty());
    }

    #[test]
    fn test_from_theme_falls_back_on_bad_attributes() {
        let sheet = StyleSheet::from_toml(
            r#"
            [styles.RectProgressBar]
            rectWidth = "wide"
            rectColor = 12
            progress = "half"
            "#,
        )
        .unwrap();
        let bar = RectProgressBar::from_theme(&sheet, UpdateManager::new());

        assert_eq!(bar.rect_width(), 5.5);
        assert_eq!(bar.rect_color().to_rgba8().r, 0x88);
        assert_eq!(bar.progress(), 0);
    }

    #[test]
    fn test_from_theme_ignores_non_positive_widths() {
        let sheet = StyleSheet::from_toml(
            r#"
            [styles.RectProgressBar]
            rectWidth = 0
            progressWidth = -3.0
            "#,
        )
        .unwrap();
        let bar = RectProgressBar::from_theme(&sheet, UpdateManager::new());
        assert_eq!(bar.rect_width(), 5.5);
        assert_eq!(bar.progress_width(), 6.5);

        let sheet = StyleSheet::from_toml(
            "[styles.RectProgressBar]\nrectWidth = \"-5dp\"\n",
        )
        .unwrap();
        let bar = RectProgressBar::from_theme(&sheet, UpdateManager::new());
        assert_eq!(bar.rect_width(), 5.5);
    }

    #[test]
    fn test_set_progress_requests_redraw() {
        let update = UpdateManager::new();
        let mut bar = RectProgressBar::new(update.clone());
        let layout = LayoutNode::sized(100.0, 100.0);

        assert_eq!(bar.update(&layout), Update::empty());

        bar.set_progress(150);
        assert_eq!(bar.progress(), 150);
        assert!(update.get().contains(Update::DRAW));
        assert_eq!(bar.update(&layout), Update::DRAW);
        assert_eq!(bar.update(&layout), Update::empty());
    }

    #[test]
    fn test_progress_set_from_other_thread() {
        let update = UpdateManager::new();
        let bar = RectProgressBar::new(update.clone());
        let signal = bar.progress_signal();

        std::thread::spawn(move || signal.set_value(-7))
            .join()
            .unwrap();

        assert_eq!(bar.progress(), -7);
        assert_eq!(update.take(), Update::DRAW);
    }

    #[test]
    fn test_measure_reports_square() {
        let bar = RectProgressBar::new(UpdateManager::new());
        let size = bar.measure(MeasureSpec::exactly(60), MeasureSpec::at_most(90));
        assert_eq!(size, Vector2::new(90.0, 90.0));

        let size = bar.measure(MeasureSpec::unspecified(), MeasureSpec::unspecified());
        assert_eq!(size, Vector2::new(100.0, 100.0));
    }

    #[test]
    fn test_render_strokes_track_then_trace() {
        let mut bar = RectProgressBar::new(UpdateManager::new())
            .with_rect_width(2.0)
            .with_progress_width(4.0)
            .with_progress(50);
        let mut graphics = RecordingGraphics::new();

        bar.render(&mut graphics, &LayoutNode::sized(100.0, 100.0));

        assert_eq!(stroke_widths(&graphics), vec![2.0, 4.0, 4.0, 4.0]);
    }

    #[test]
    fn test_render_translates_to_layout_location() {
        let mut bar = RectProgressBar::new(UpdateManager::new());
        let mut graphics = RecordingGraphics::new();
        let layout = LayoutNode::new(Vector2::new(10.0, 20.0), Vector2::new(50.0, 50.0));

        bar.render(&mut graphics, &layout);

        assert_eq!(graphics.commands().len(), 1);
        match &graphics.commands()[0] {
            DrawCommand::Stroke { transform, .. } => {
                assert_eq!(*transform, Affine::translate((10.0, 20.0)));
            },
            other => panic!("expected stroke, got {:?}", other),
        }
    }

    #[test]
    fn test_render_state_reflects_fields() {
        let bar = RectProgressBar::new(UpdateManager::new())
            .with_rect_color(Color::from_rgb8(1, 2, 3))
            .with_progress(33);
        let state = bar.render_state(64.0);

        assert_eq!(state.side_length, 64.0);
        assert_eq!(state.progress, 33);
        assert_eq!(state.track_color.to_rgba8().b, 3);
        assert_eq!(state.fill_stroke_width, bar.progress_width());
    }
}
