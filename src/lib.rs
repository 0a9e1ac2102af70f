// ============================================================================
// Geofix Library
// Fixed-point geographic coordinates with an exact decimal text codec
// ============================================================================

//! # Geofix
//!
//! Fixed-point geographic coordinates for exact storage, deduplication and
//! round-tripping of longitude/latitude data.
//!
//! ## Features
//!
//! - **Scaled integer storage**: each axis is the degree value times 10^7 in
//!   an `i32`, centimeter accuracy with exact equality and ordering
//! - **Hand-rolled decimal codec**: parsing and formatting never touch
//!   floating point, so values survive any number of text round trips
//! - **Scientific notation input**: `1e2` and `5e-2` parse like their plain
//!   decimal forms; output is always plain and minimal
//! - **Lazy validation**: out-of-range axes are stored as-is and rejected
//!   only by the range-checked accessors
//!
//! ## Example
//!
//! ```rust
//! use geofix::prelude::*;
//!
//! let berlin: Coordinate = "13.377704,52.516275".parse().unwrap();
//! assert!(berlin.is_defined() && berlin.is_valid());
//! assert_eq!(berlin.x(), 133_777_040);
//! assert_eq!(berlin.lat().unwrap(), 52.516275);
//!
//! // minimal exact output, trailing zeros and superfluous points dropped
//! let half = Coordinate::new(0.5, -10.0);
//! assert_eq!(half.to_text(',').unwrap(), "0.5,-10");
//!
//! // undefined until both axes carry data
//! assert!(!Coordinate::default().is_defined());
//! ```

pub mod domain;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub use domain::Coordinate;

pub mod prelude {
    pub use crate::domain::Coordinate;
    pub use crate::numeric::{
        append_scaled, parse_scaled, scaled_to_string, CoordinateError, CoordinateResult,
        COORDINATE_PRECISION,
    };
}
