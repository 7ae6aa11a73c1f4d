#![warn(missing_docs)]

//! Core library for rectprogress => See `rectprogress` crate.
//!
//! Contains the graphics abstraction, update flags, signals and layout types widgets build on.

pub use vello as vg;

/// Contains app functionality.
pub mod app;

/// Contains useful types and functions for layout interaction.
pub mod layout;

/// Contains the thread-safe signal system.
pub mod signal;

/// Contains the vector graphics interface abstraction.
pub mod vgi;

/// Contains the core widget functionalities.
pub mod widget;
