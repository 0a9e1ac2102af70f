// ============================================================================
// Coordinate Domain Model
// Fixed-point (longitude, latitude) pair with exact text conversion
// ============================================================================

use crate::numeric::{
    append_scaled, parse_scaled, CoordinateError, CoordinateResult, COORDINATE_PRECISION,
};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scaled bounds of the valid geographic range, kept in integer terms so the
/// range check never touches floating point.
const MAX_SCALED_LON: i32 = 180 * COORDINATE_PRECISION;
const MAX_SCALED_LAT: i32 = 90 * COORDINATE_PRECISION;

/// A place on earth, stored as two scaled 32-bit integers.
///
/// Each axis holds the degree value times
/// [`COORDINATE_PRECISION`], giving an accuracy of a
/// few centimeters. The x axis is the longitude, the y axis the latitude.
///
/// A default-constructed `Coordinate` is undefined: both axes carry the
/// reserved [`UNDEFINED_COORDINATE`](Self::UNDEFINED_COORDINATE) sentinel.
/// Axes are never range-checked on construction; call
/// [`is_valid`](Self::is_valid) to check bounds on demand.
///
/// Equality is exact integer equality on both axes and ordering is
/// lexicographic, x first. Ordering and hashing involve the raw axis values,
/// so comparing undefined coordinates is well-defined for collections but
/// carries no geographic meaning.
///
/// ```rust
/// use geofix::Coordinate;
///
/// let berlin: Coordinate = "13.377704,52.516275".parse().unwrap();
/// assert!(berlin.is_valid());
/// assert_eq!(berlin.x(), 133_777_040);
/// assert_eq!(berlin.to_text(',').unwrap(), "13.377704,52.516275");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    x: i32,
    y: i32,
}

impl Coordinate {
    /// Reserved axis value marking the axis as undefined.
    pub const UNDEFINED_COORDINATE: i32 = i32::MAX;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a coordinate from degree values.
    ///
    /// The conversion rounds to the nearest scaled step and never fails;
    /// degree values far outside the valid range saturate the 32-bit axis.
    /// Checking validity stays the caller's responsibility.
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            x: Self::degrees_to_scaled(lon),
            y: Self::degrees_to_scaled(lat),
        }
    }

    /// Create a coordinate from pre-scaled axis values, without conversion
    /// or validation.
    #[inline]
    pub const fn from_scaled(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create an undefined coordinate, both axes set to the sentinel.
    #[inline]
    pub const fn undefined() -> Self {
        Self {
            x: Self::UNDEFINED_COORDINATE,
            y: Self::UNDEFINED_COORDINATE,
        }
    }

    /// Convert a degree value to its scaled representation.
    #[inline]
    pub fn degrees_to_scaled(degrees: f64) -> i32 {
        (degrees * f64::from(COORDINATE_PRECISION)).round() as i32
    }

    /// Convert a scaled axis value back to degrees.
    #[inline]
    pub fn scaled_to_degrees(scaled: i32) -> f64 {
        f64::from(scaled) / f64::from(COORDINATE_PRECISION)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check whether both axes carry data, i.e. neither equals the
    /// undefined sentinel.
    #[inline]
    pub const fn is_defined(&self) -> bool {
        self.x != Self::UNDEFINED_COORDINATE && self.y != Self::UNDEFINED_COORDINATE
    }

    /// Check whether the coordinate is inside the usual bounds
    /// (-180 <= lon <= 180, -90 <= lat <= 90).
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.x >= -MAX_SCALED_LON
            && self.x <= MAX_SCALED_LON
            && self.y >= -MAX_SCALED_LAT
            && self.y <= MAX_SCALED_LAT
    }

    /// Raw scaled x axis (longitude).
    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Raw scaled y axis (latitude).
    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Set the raw scaled x axis (longitude).
    #[inline]
    pub fn set_x(&mut self, x: i32) -> &mut Self {
        self.x = x;
        self
    }

    /// Set the raw scaled y axis (latitude).
    #[inline]
    pub fn set_y(&mut self, y: i32) -> &mut Self {
        self.y = y;
        self
    }

    /// Longitude in degrees.
    ///
    /// # Errors
    /// Returns [`CoordinateError::Invalid`] if the coordinate is outside the
    /// valid range.
    pub fn lon(&self) -> CoordinateResult<f64> {
        if !self.is_valid() {
            return Err(CoordinateError::Invalid);
        }
        Ok(Self::scaled_to_degrees(self.x))
    }

    /// Longitude in degrees, without the validity check.
    #[inline]
    pub fn lon_unchecked(&self) -> f64 {
        Self::scaled_to_degrees(self.x)
    }

    /// Latitude in degrees.
    ///
    /// # Errors
    /// Returns [`CoordinateError::Invalid`] if the coordinate is outside the
    /// valid range.
    pub fn lat(&self) -> CoordinateResult<f64> {
        if !self.is_valid() {
            return Err(CoordinateError::Invalid);
        }
        Ok(Self::scaled_to_degrees(self.y))
    }

    /// Latitude in degrees, without the validity check.
    #[inline]
    pub fn lat_unchecked(&self) -> f64 {
        Self::scaled_to_degrees(self.y)
    }

    /// Set the longitude from a degree value.
    #[inline]
    pub fn set_lon(&mut self, lon: f64) -> &mut Self {
        self.x = Self::degrees_to_scaled(lon);
        self
    }

    /// Set the latitude from a degree value.
    #[inline]
    pub fn set_lat(&mut self, lat: f64) -> &mut Self {
        self.y = Self::degrees_to_scaled(lat);
        self
    }

    // ========================================================================
    // Text Conversion
    // ========================================================================

    /// Set the longitude from a complete decimal literal.
    ///
    /// # Errors
    /// Returns [`CoordinateError::Malformed`] when the text is not a single
    /// well-formed literal or characters remain after it.
    pub fn set_lon_from_text(&mut self, text: &str) -> CoordinateResult<()> {
        self.x = parse_full_literal(text)?;
        Ok(())
    }

    /// Set the latitude from a complete decimal literal.
    ///
    /// # Errors
    /// Returns [`CoordinateError::Malformed`] when the text is not a single
    /// well-formed literal or characters remain after it.
    pub fn set_lat_from_text(&mut self, text: &str) -> CoordinateResult<()> {
        self.y = parse_full_literal(text)?;
        Ok(())
    }

    /// Set the longitude from the next literal in a shared buffer, leaving
    /// the cursor just past the consumed text. No trailing-character check
    /// is performed.
    ///
    /// # Errors
    /// Returns [`CoordinateError::Malformed`] when no literal can be
    /// consumed; the cursor must not be reused afterwards.
    pub fn set_lon_partial(&mut self, cursor: &mut &str) -> CoordinateResult<()> {
        self.x = parse_scaled(cursor)?;
        Ok(())
    }

    /// Set the latitude from the next literal in a shared buffer, leaving
    /// the cursor just past the consumed text. No trailing-character check
    /// is performed.
    ///
    /// # Errors
    /// Returns [`CoordinateError::Malformed`] when no literal can be
    /// consumed; the cursor must not be reused afterwards.
    pub fn set_lat_partial(&mut self, cursor: &mut &str) -> CoordinateResult<()> {
        self.y = parse_scaled(cursor)?;
        Ok(())
    }

    /// Append both axes as minimal decimal text, separated by `separator`.
    ///
    /// # Errors
    /// Returns [`CoordinateError::Invalid`] if the coordinate is outside the
    /// valid range.
    pub fn append_to_string(&self, out: &mut String, separator: char) -> CoordinateResult<()> {
        if !self.is_valid() {
            return Err(CoordinateError::Invalid);
        }
        self.append_to_string_unchecked(out, separator);
        Ok(())
    }

    /// Append both axes as minimal decimal text without the validity check.
    /// The sentinel and other out-of-range axis values are formatted as the
    /// numbers they are.
    pub fn append_to_string_unchecked(&self, out: &mut String, separator: char) {
        append_scaled(out, self.x);
        out.push(separator);
        append_scaled(out, self.y);
    }

    /// Both axes as minimal decimal text in a fresh `String`.
    ///
    /// # Errors
    /// Returns [`CoordinateError::Invalid`] if the coordinate is outside the
    /// valid range.
    pub fn to_text(&self, separator: char) -> CoordinateResult<String> {
        let mut out = String::with_capacity(26);
        self.append_to_string(&mut out, separator)?;
        Ok(out)
    }

    fn parse_text(text: &str) -> CoordinateResult<Self> {
        let mut cursor = text;
        let mut coordinate = Self::undefined();
        coordinate.set_lon_partial(&mut cursor)?;
        cursor = match cursor.strip_prefix(',') {
            Some(rest) => rest,
            None => return Err(CoordinateError::malformed(text)),
        };
        coordinate.set_lat_partial(&mut cursor)?;
        if !cursor.is_empty() {
            return Err(CoordinateError::malformed(cursor));
        }
        Ok(coordinate)
    }
}

/// Undefined coordinate, matching the reserved sentinel on both axes.
impl Default for Coordinate {
    #[inline]
    fn default() -> Self {
        Self::undefined()
    }
}

impl fmt::Display for Coordinate {
    /// Writes `(<lon>,<lat>)` using the unchecked text conversion, or
    /// `(undefined,undefined)` when an axis carries no data.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_defined() {
            let mut buffer = String::with_capacity(26);
            self.append_to_string_unchecked(&mut buffer, ',');
            write!(f, "({})", buffer)
        } else {
            f.write_str("(undefined,undefined)")
        }
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    /// Parse the canonical `"<lon>,<lat>"` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_text(s).map_err(|error| {
            tracing::debug!("rejected coordinate text {:?}: {}", s, error);
            error
        })
    }
}

/// Parse one literal and require that it consumes the whole input.
fn parse_full_literal(text: &str) -> CoordinateResult<i32> {
    let mut cursor = text;
    let value = parse_scaled(&mut cursor)?;
    if !cursor.is_empty() {
        return Err(CoordinateError::malformed(cursor));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_is_undefined() {
        let coordinate = Coordinate::default();
        assert!(!coordinate.is_defined());
        assert_eq!(coordinate.x(), Coordinate::UNDEFINED_COORDINATE);
        assert_eq!(coordinate.y(), Coordinate::UNDEFINED_COORDINATE);
        assert_eq!(coordinate, Coordinate::undefined());
    }

    #[test]
    fn test_partially_defined_is_undefined() {
        let coordinate = Coordinate::from_scaled(135_000_000, Coordinate::UNDEFINED_COORDINATE);
        assert!(!coordinate.is_defined());
    }

    #[test]
    fn test_degree_construction() {
        let coordinate = Coordinate::new(13.5, 52.5);
        assert_eq!(coordinate.x(), 135_000_000);
        assert_eq!(coordinate.y(), 525_000_000);
        assert!(coordinate.is_defined());
        assert!(coordinate.is_valid());
    }

    #[test]
    fn test_degree_conversion_rounds_to_nearest() {
        assert_eq!(Coordinate::degrees_to_scaled(0.00000004), 0);
        assert_eq!(Coordinate::degrees_to_scaled(0.00000006), 1);
        assert_eq!(Coordinate::degrees_to_scaled(-0.00000006), -1);
    }

    #[test]
    fn test_validity_boundary() {
        let on_the_edge = Coordinate::from_scaled(1_800_000_000, 0);
        assert!(on_the_edge.is_valid());
        assert_eq!(on_the_edge.lon(), Ok(180.0));

        let one_step_beyond = Coordinate::from_scaled(1_800_000_001, 0);
        assert!(one_step_beyond.is_defined());
        assert!(!one_step_beyond.is_valid());
        assert_eq!(one_step_beyond.lon(), Err(CoordinateError::Invalid));
        assert_eq!(one_step_beyond.lon_unchecked(), 180.0000001);

        assert!(Coordinate::from_scaled(0, 900_000_000).is_valid());
        assert!(!Coordinate::from_scaled(0, 900_000_001).is_valid());
        assert!(Coordinate::from_scaled(-1_800_000_000, -900_000_000).is_valid());
    }

    #[test]
    fn test_undefined_is_invalid() {
        let coordinate = Coordinate::default();
        assert!(!coordinate.is_valid());
        assert_eq!(coordinate.lat(), Err(CoordinateError::Invalid));
    }

    #[test]
    fn test_degree_getters() {
        let mut coordinate = Coordinate::default();
        coordinate.set_lon(9.8).set_lat(47.6);
        assert_eq!(coordinate.lon(), Ok(9.8));
        assert_eq!(coordinate.lat(), Ok(47.6));
        assert_eq!(coordinate.lon_unchecked(), 9.8);
    }

    #[test]
    fn test_text_setters() {
        let mut coordinate = Coordinate::default();
        coordinate.set_lon_from_text("13.377704").unwrap();
        coordinate.set_lat_from_text("52.516275").unwrap();
        assert_eq!(coordinate.x(), 133_777_040);
        assert_eq!(coordinate.y(), 525_162_750);
    }

    #[test]
    fn test_text_setters_reject_trailing_characters() {
        let mut coordinate = Coordinate::default();
        assert!(coordinate.set_lon_from_text("13.5x").is_err());
        assert!(coordinate.set_lat_from_text("52.5 ").is_err());
    }

    #[test]
    fn test_partial_setters_share_a_buffer() {
        let mut cursor = "13.5,52.5";
        let mut coordinate = Coordinate::default();
        coordinate.set_lon_partial(&mut cursor).unwrap();
        assert_eq!(cursor, ",52.5");
        cursor = &cursor[1..];
        coordinate.set_lat_partial(&mut cursor).unwrap();
        assert_eq!(coordinate, Coordinate::from_scaled(135_000_000, 525_000_000));
    }

    #[test]
    fn test_from_str_canonical_form() {
        let coordinate: Coordinate = "13.5,52.5".parse().unwrap();
        assert_eq!(coordinate, Coordinate::from_scaled(135_000_000, 525_000_000));

        let negative: Coordinate = "-0.1,0".parse().unwrap();
        assert_eq!(negative, Coordinate::from_scaled(-1_000_000, 0));

        let exponent: Coordinate = "1e2,3.14159265".parse().unwrap();
        assert_eq!(exponent.x(), 1_000_000_000);
        assert_eq!(exponent.y(), 31_415_927);
    }

    #[test]
    fn test_from_str_rejects_bad_shapes() {
        assert!("13.5".parse::<Coordinate>().is_err());
        assert!("13.5;52.5".parse::<Coordinate>().is_err());
        assert!("13.5,52.5,1".parse::<Coordinate>().is_err());
        assert!("13.5,".parse::<Coordinate>().is_err());
        assert!(",52.5".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_text_round_trip() {
        let coordinate: Coordinate = "13.377704,52.516275".parse().unwrap();
        let text = coordinate.to_text(',').unwrap();
        assert_eq!(text, "13.377704,52.516275");
        assert_eq!(text.parse::<Coordinate>().unwrap(), coordinate);
    }

    #[test]
    fn test_checked_serialization_rejects_invalid() {
        let coordinate = Coordinate::from_scaled(1_800_000_001, 0);
        assert_eq!(coordinate.to_text(','), Err(CoordinateError::Invalid));

        let mut out = String::new();
        coordinate.append_to_string_unchecked(&mut out, ' ');
        assert_eq!(out, "180.0000001 0");
    }

    #[test]
    fn test_custom_separator() {
        let coordinate = Coordinate::from_scaled(-1_000_000, 0);
        assert_eq!(coordinate.to_text(';').unwrap(), "-0.1;0");
    }

    #[test]
    fn test_display() {
        let coordinate = Coordinate::new(13.5, 52.5);
        assert_eq!(coordinate.to_string(), "(13.5,52.5)");
        assert_eq!(Coordinate::default().to_string(), "(undefined,undefined)");
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Coordinate::from_scaled(1, 2);
        let b = Coordinate::from_scaled(1, 2);
        let c = Coordinate::from_scaled(1, 3);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_lexicographic_ordering() {
        let low = Coordinate::from_scaled(1, 5);
        let middle = Coordinate::from_scaled(1, 6);
        let high = Coordinate::from_scaled(2, 0);
        assert!(low < middle);
        assert!(middle < high);
        assert!(!(middle < low));
        assert!(low < high);
    }

    #[test]
    fn test_hash_deduplicates() {
        let mut seen = HashSet::new();
        assert!(seen.insert(Coordinate::new(13.5, 52.5)));
        assert!(!seen.insert(Coordinate::new(13.5, 52.5)));
        assert!(seen.insert(Coordinate::new(13.5, 52.6)));
        assert!(seen.insert(Coordinate::new(13.6, 52.5)));
        assert_eq!(seen.len(), 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let coordinate = Coordinate::from_scaled(133_777_040, 525_162_750);
        let json = serde_json::to_string(&coordinate).unwrap();
        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, coordinate);
    }
}
