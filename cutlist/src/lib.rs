//! Core entities of the `cutlist` nesting library: parts, sheets and their skyline frontiers.

/// Entities to model the nesting of rectangular parts on sheets
pub mod entities;

/// Rectangles, rotations and grain-aware orientation rules
pub mod geometry;

/// Importing part lists into and exporting nesting results out of this library
pub mod io;

/// Configuration and helpers which do not belong to any specific module
pub mod util;
