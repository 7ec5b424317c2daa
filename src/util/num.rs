/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Truncates an `f64` toward zero and converts it to `i64`, if and only if
/// the truncated value is exactly representable.
///
/// ## Errors
/// Returns `Err(error)` if the value is not finite or its integer part
/// exceeds `MAX_SAFE_I64_INT` in absolute value.
///
/// ## Parameters
/// - `value`: The number to truncate.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Returns
/// - `Ok(i64)`: The truncated value if it is safe.
/// - `Err(error)`: If the value is too large or not finite.
///
/// ## Example
/// ```
/// use hulk::util::num::f64_to_i64_truncated;
///
/// // Truncation is toward zero
/// assert_eq!(f64_to_i64_truncated(7.9, "too big!").unwrap(), 7);
/// assert_eq!(f64_to_i64_truncated(-7.9, "too big!").unwrap(), -7);
///
/// // Fails for values outside the safe range
/// assert!(f64_to_i64_truncated(1e300, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn f64_to_i64_truncated<E>(value: f64, error: E) -> Result<i64, E> {
    if !value.is_finite() {
        return Err(error);
    }

    let truncated = value.trunc();
    if truncated.abs() > MAX_SAFE_I64_INT as f64 {
        return Err(error);
    }

    Ok(truncated as i64)
}
