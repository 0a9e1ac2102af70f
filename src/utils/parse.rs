// ============================================================================
// Text Parsing Utilities
// ============================================================================

/// Interpret the input string as a non-negative number. Leading whitespace
/// is ignored. If there is any error, zero is returned.
///
/// Errors are a malformed or empty number, trailing characters, a negative
/// value, or a value that does not fit the target type.
///
/// ```rust
/// use geofix::utils::str_to_int;
///
/// assert_eq!(str_to_int::<u32>(" 42"), 42);
/// assert_eq!(str_to_int::<u32>("-1"), 0);
/// assert_eq!(str_to_int::<u32>("42x"), 0);
/// ```
pub fn str_to_int<T>(input: &str) -> T
where
    T: TryFrom<i64> + Default,
{
    match input.trim_start().parse::<i64>() {
        Ok(value) if value >= 0 => T::try_from(value).unwrap_or_default(),
        _ => T::default(),
    }
}
