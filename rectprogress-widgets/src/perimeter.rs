//! Perimeter trace rendering.
//!
//! Progress is drawn as a stroke running clockwise around a square, starting
//! at the top-left corner: top edge, right edge, bottom edge, left edge. The
//! stroke length is linear in progress: `progress / 100 * 4 * side`.

use rectprogress_core::vg::kurbo::{Line, Point, Rect};
use rectprogress_core::vg::peniko::Color;

/// Classification of a progress value for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProgressBand {
    /// `progress <= 0`: nothing but the track.
    Flat,
    /// `0 < progress < 100`: a partial trace.
    Normal,
    /// `progress >= 100`: the full square in the fill color.
    High,
}

impl ProgressBand {
    /// Classify a raw progress value. Out-of-range values saturate.
    pub fn classify(progress: i32) -> Self {
        if progress <= 0 {
            ProgressBand::Flat
        } else if progress >= 100 {
            ProgressBand::High
        } else {
            ProgressBand::Normal
        }
    }
}

/// Where a partial trace ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TracePosition {
    /// The side the trace ends on: 0 top, 1 right, 2 bottom, 3 left.
    pub side: usize,
    /// How far along that side the trace reaches.
    pub remainder: f64,
}

impl TracePosition {
    /// Locate the end of the trace for `progress` on a square of `side_length`.
    ///
    /// Only meaningful for [ProgressBand::Normal] values and a positive side length.
    pub fn locate(side_length: f64, progress: i32) -> Self {
        let perimeter = 4.0 * side_length;
        let drawn = f64::from(progress) * perimeter / 100.0;

        Self {
            side: ((drawn / side_length).floor() as usize).min(3),
            remainder: drawn % side_length,
        }
    }
}

/// Everything needed to draw one frame of the indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
    /// Side length of the square in pixels.
    pub side_length: f64,
    /// Raw progress value; not clamped.
    pub progress: i32,
    /// Stroke width of the track outline.
    pub track_stroke_width: f32,
    /// Stroke width of the progress trace.
    pub fill_stroke_width: f32,
    /// Color of the track outline.
    pub track_color: Color,
    /// Color of the progress trace.
    pub fill_color: Color,
}

/// A stroked shape emitted by [PerimeterProgressRenderer].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawPrimitive {
    /// A stroked rectangle outline.
    Rect {
        /// The rectangle.
        rect: Rect,
        /// Stroke width.
        stroke_width: f32,
        /// Stroke color.
        color: Color,
    },
    /// A stroked line segment.
    Line {
        /// The segment.
        line: Line,
        /// Stroke width.
        stroke_width: f32,
        /// Stroke color.
        color: Color,
    },
}

/// Turns a [RenderState] into draw primitives.
#[derive(Clone, Copy, Debug, Default)]
pub struct PerimeterProgressRenderer;

impl PerimeterProgressRenderer {
    /// Produce the primitives for one frame.
    ///
    /// The first primitive is always the track outline. The fill follows as a
    /// full outline ([ProgressBand::High]), a sequence of edge segments
    /// ([ProgressBand::Normal]) or nothing ([ProgressBand::Flat]).
    pub fn render(&self, state: &RenderState) -> Vec<DrawPrimitive> {
        let length = state.side_length;
        let outline = Rect::new(0.0, 0.0, length, length);

        let mut primitives = Vec::with_capacity(5);
        primitives.push(DrawPrimitive::Rect {
            rect: outline,
            stroke_width: state.track_stroke_width,
            color: state.track_color,
        });

        let band = ProgressBand::classify(state.progress);
        log::debug!("progress {} classified as {:?}", state.progress, band);

        match band {
            ProgressBand::Flat => {},
            ProgressBand::High => primitives.push(DrawPrimitive::Rect {
                rect: outline,
                stroke_width: state.fill_stroke_width,
                color: state.fill_color,
            }),
            ProgressBand::Normal if length > 0.0 && length.is_finite() => {
                let position = TracePosition::locate(length, state.progress);
                log::trace!(
                    "trace ends on side {} after {}",
                    position.side,
                    position.remainder
                );

                primitives.extend(trace_segments(length, position).into_iter().map(|line| {
                    DrawPrimitive::Line {
                        line,
                        stroke_width: state.fill_stroke_width,
                        color: state.fill_color,
                    }
                }));
            },
            ProgressBand::Normal => {
                log::debug!("skipping trace for degenerate side length {}", length);
            },
        }

        primitives
    }
}

/// The segments of a partial trace: every full side before `position.side`,
/// then the partial segment on it.
///
/// The left side runs from the bottom-left corner back up toward the origin,
/// so its stop coordinate is `length - remainder`.
fn trace_segments(length: f64, position: TracePosition) -> Vec<Line> {
    let l = length;
    let r = position.remainder;

    let corners = [
        Point::new(0.0, 0.0),
        Point::new(l, 0.0),
        Point::new(l, l),
        Point::new(0.0, l),
    ];

    let mut segments: Vec<Line> = (0..position.side)
        .map(|side| Line::new(corners[side], corners[(side + 1) % 4]))
        .collect();

    let partial_end = match position.side {
        0 => Point::new(r, 0.0),
        1 => Point::new(l, r),
        2 => Point::new(l - r, l),
        _ => Point::new(0.0, l - r),
    };
    segments.push(Line::new(corners[position.side], partial_end));

    segments
}
