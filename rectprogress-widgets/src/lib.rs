#![warn(missing_docs)]

//! Widget library for rectprogress => See `rectprogress` crate.
//!
//! Contains the square perimeter progress indicator and its renderer.

/// Contains the [perimeter::PerimeterProgressRenderer] and its draw primitives.
pub mod perimeter;

/// Contains the [rect_progress::RectProgressBar] widget.
pub mod rect_progress;
