//! Numeric and ordinal range guards
//!
//! One generic guard per bound shape, over anything with a natural order
//! (`PartialOrd`) or an explicit comparison function (`*_by`). Bounds are
//! inclusive. Comparisons are the type's own: floats compare exactly, and
//! instants compare by their position on the timeline, so mixing reference
//! frames is the caller's problem.
//!
//! Bounds only need `Display`, because the failure keeps a rendered copy.
//!
//! # Examples
//!
//! ```
//! use precond::{not_greater, not_less, not_out_of_range};
//!
//! assert_eq!(not_out_of_range("pct", 42_u8, 0, 100).unwrap(), 42);
//! assert_eq!(not_less("grade", 'c', 'a').unwrap(), 'c');
//! assert!(not_greater("ratio", 1.000_1_f64, 1.0).is_err());
//! ```

use std::cmp::Ordering;
use std::fmt::Display;

use crate::error::{GuardError, GuardResult, RangeBound};

// ============================================================================
// ZERO
// ============================================================================

/// Types with an additive zero, used by the sign guards.
pub trait Zero {
    /// The zero value.
    fn zero() -> Self;
}

macro_rules! impl_zero {
    ($zero:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Zero for $ty {
                #[inline]
                fn zero() -> Self {
                    $zero
                }
            }
        )+
    };
}

impl_zero!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_zero!(0.0 => f32, f64);

#[cfg(feature = "chrono")]
impl_zero!(chrono::TimeDelta::zero() => chrono::TimeDelta);

#[cfg(feature = "decimal")]
impl_zero!(rust_decimal::Decimal::ZERO => rust_decimal::Decimal);

// ============================================================================
// SIGN GUARDS
// ============================================================================

/// Verifies that `value >= 0`.
///
/// # Errors
///
/// [`GuardError::ArgumentOutOfRange`] when `value` is negative.
#[inline]
pub fn positive_or_zero<T>(name: &str, value: T) -> GuardResult<T>
where
    T: PartialOrd + Zero + Display,
{
    if value < T::zero() {
        return Err(GuardError::out_of_range(
            name,
            RangeBound::PositiveOrZero {
                actual: value.to_string(),
            },
        ));
    }
    Ok(value)
}

/// Verifies that `value > 0`.
///
/// # Errors
///
/// [`GuardError::ArgumentOutOfRange`] when `value` is zero or negative.
///
/// # Examples
///
/// ```
/// use precond::positive_non_zero;
///
/// assert_eq!(positive_non_zero("workers", 1).unwrap(), 1);
/// let err = positive_non_zero("workers", 0).unwrap_err();
/// assert_eq!(
///     err.message(),
///     "Argument workers must be positive and not zero. Actual value was 0."
/// );
/// ```
#[inline]
pub fn positive_non_zero<T>(name: &str, value: T) -> GuardResult<T>
where
    T: PartialOrd + Zero + Display,
{
    if value <= T::zero() {
        return Err(GuardError::out_of_range(
            name,
            RangeBound::PositiveNonZero {
                actual: value.to_string(),
            },
        ));
    }
    Ok(value)
}

// ============================================================================
// BOUND GUARDS
// ============================================================================

#[cold]
fn between<T: Display>(name: &str, min: &T, max: &T) -> GuardError {
    GuardError::out_of_range(
        name,
        RangeBound::Between {
            min: min.to_string(),
            max: max.to_string(),
        },
    )
}

#[cold]
fn at_least<T: Display>(name: &str, min: &T) -> GuardError {
    GuardError::out_of_range(
        name,
        RangeBound::AtLeast {
            min: min.to_string(),
        },
    )
}

#[cold]
fn at_most<T: Display>(name: &str, max: &T) -> GuardError {
    GuardError::out_of_range(
        name,
        RangeBound::AtMost {
            max: max.to_string(),
        },
    )
}

/// Verifies that `min <= value <= max`.
///
/// The lower bound is checked first, so a value below `min` is reported
/// even when `min > max`.
///
/// # Errors
///
/// [`GuardError::ArgumentOutOfRange`] with [`RangeBound::Between`].
#[inline]
pub fn not_out_of_range<T>(name: &str, value: T, min: T, max: T) -> GuardResult<T>
where
    T: PartialOrd + Display,
{
    if value < min {
        return Err(between(name, &min, &max));
    }
    if value > max {
        return Err(between(name, &min, &max));
    }
    Ok(value)
}

/// Verifies that `min <= value <= max` under `compare`.
///
/// # Errors
///
/// [`GuardError::ArgumentOutOfRange`] with [`RangeBound::Between`].
///
/// # Examples
///
/// ```
/// use precond::not_out_of_range_by;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert!(not_out_of_range_by("code", "abc", "ab", "abcd", by_len).is_ok());
/// assert!(not_out_of_range_by("code", "a", "ab", "abcd", by_len).is_err());
/// ```
pub fn not_out_of_range_by<T, F>(
    name: &str,
    value: T,
    min: T,
    max: T,
    mut compare: F,
) -> GuardResult<T>
where
    T: Display,
    F: FnMut(&T, &T) -> Ordering,
{
    if compare(&value, &min) == Ordering::Less {
        return Err(between(name, &min, &max));
    }
    if compare(&value, &max) == Ordering::Greater {
        return Err(between(name, &min, &max));
    }
    Ok(value)
}

/// Verifies that `value >= min`.
///
/// # Errors
///
/// [`GuardError::ArgumentOutOfRange`] with [`RangeBound::AtLeast`].
#[inline]
pub fn not_less<T>(name: &str, value: T, min: T) -> GuardResult<T>
where
    T: PartialOrd + Display,
{
    if value < min {
        return Err(at_least(name, &min));
    }
    Ok(value)
}

/// Verifies that `value >= min` under `compare`.
///
/// # Errors
///
/// [`GuardError::ArgumentOutOfRange`] with [`RangeBound::AtLeast`].
pub fn not_less_by<T, F>(name: &str, value: T, min: T, mut compare: F) -> GuardResult<T>
where
    T: Display,
    F: FnMut(&T, &T) -> Ordering,
{
    if compare(&value, &min) == Ordering::Less {
        return Err(at_least(name, &min));
    }
    Ok(value)
}

/// Verifies that `value <= max`.
///
/// # Errors
///
/// [`GuardError::ArgumentOutOfRange`] with [`RangeBound::AtMost`].
#[inline]
pub fn not_greater<T>(name: &str, value: T, max: T) -> GuardResult<T>
where
    T: PartialOrd + Display,
{
    if value > max {
        return Err(at_most(name, &max));
    }
    Ok(value)
}

/// Verifies that `value <= max` under `compare`.
///
/// # Errors
///
/// [`GuardError::ArgumentOutOfRange`] with [`RangeBound::AtMost`].
pub fn not_greater_by<T, F>(name: &str, value: T, max: T, mut compare: F) -> GuardResult<T>
where
    T: Display,
    F: FnMut(&T, &T) -> Ordering,
{
    if compare(&value, &max) == Ordering::Greater {
        return Err(at_most(name, &max));
    }
    Ok(value)
}

// ============================================================================
// TESTS
// ============================================================================
