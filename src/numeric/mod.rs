// ============================================================================
// Numeric Module
// Fixed-point decimal codec for geographic coordinates
// ============================================================================
//
// This module provides:
// - parse_scaled: decimal text to scaled 32-bit integer, no floating point
// - append_scaled / scaled_to_string: minimal exact decimal output
// - CoordinateError: error types for the codec and the value type
//
// Design principles:
// - No floating-point operations on the text path
// - Parsing either fully succeeds or reports Malformed (no partial results)
// - Format-then-parse reproduces the scaled value exactly

mod errors;
mod formatter;
mod parser;

pub use errors::{CoordinateError, CoordinateResult};
pub use formatter::{append_scaled, scaled_to_string};
pub use parser::parse_scaled;

/// Scale factor between real degree values and their fixed-point
/// representation. Seven fraction digits give centimeter accuracy at the
/// equator.
pub const COORDINATE_PRECISION: i32 = 10_000_000;
