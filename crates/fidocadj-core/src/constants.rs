//! Numeric constants of the FidoCAD coordinate system.
//!
//! The logical FidoCAD resolution is 5 mils (127 µm). Typical magnitudes:
//!
//! ```text
//! Resolution        units/pixel   x/y magnitude
//! 72   pixels/inch  2.7778        0.36
//! 150  pixels/inch  1.3333        0.75
//! 300  pixels/inch  0.66666       1.50
//! 600  pixels/inch  0.33333       3.00
//! 1200 pixels/inch  0.16667       6.00
//! ```

/// Smallest magnitude accepted by the checked setters.
pub const MIN_MAGNITUDE: f64 = 0.25;

/// Largest magnitude accepted by the checked setters.
pub const MAX_MAGNITUDE: f64 = 100.0;

/// Local origin of macro (symbol) definitions, in logical units on both axes.
pub const MACRO_ORIGIN: f64 = 100.0;

/// Default grid spacing in logical units.
pub const DEFAULT_GRID_STEP: i32 = 5;

/// Distances at or above this value are reported as exactly this value.
pub const MIN_DISTANCE: i32 = 100;

/// Number of linear pieces used to approximate a cubic Bézier curve.
pub const MAX_BEZIER_SEGMENTS: usize = 10;
