//! Primitive saturating operations.
//!
//! Every function here is total over its input domain, with one exception:
//! division and remainder by zero panic, exactly as the primitive operators do.
//! Out-of-range results are clamped to the nearest bound of the type and are
//! not reported in any other way.
//!
//! Overflow is detected using the `overflowing_*` intrinsics of the primitive
//! types, so nothing here ever computes an out-of-range intermediate. The
//! comparison-based equivalents in [`fallback`](crate::fallback) produce
//! identical results.



//		Modules

#[cfg(test)]
#[path = "tests/ops.rs"]
mod tests;



//		Packages

use crate::{
	errors::ConversionError,
	int::{Integer, Signed},
};



//		Functions

//		add_sat
/// Saturating addition.
///
/// Computes `x + y`, clamped to `[T::MIN, T::MAX]`.
///
/// # Parameters
///
/// * `x` - The first operand.
/// * `y` - The second operand.
///
/// # Examples
///
/// ```
/// use satint::add_sat;
///
/// assert_eq!(add_sat(100_i8, 27),  127);
/// assert_eq!(add_sat(100_i8, 28),  127);
/// assert_eq!(add_sat(-128_i8, -1), -128);
/// assert_eq!(add_sat(200_u8, 100), 255);
/// ```
///
#[must_use]
#[inline]
pub fn add_sat<T: Integer>(x: T, y: T) -> T {
	match x.overflowing_add(y) {
		(sum, false)                   => sum,
		(_,   true) if y.is_negative() => T::MIN,
		(_,   true)                    => T::MAX,
	}
}

//		sub_sat
/// Saturating subtraction.
///
/// Computes `x - y`, clamped to `[T::MIN, T::MAX]`. For unsigned types, any
/// result below zero becomes zero.
///
/// # Parameters
///
/// * `x` - The minuend.
/// * `y` - The subtrahend.
///
#[must_use]
#[inline]
pub fn sub_sat<T: Integer>(x: T, y: T) -> T {
	match x.overflowing_sub(y) {
		(difference, false)                   => difference,
		(_,          true) if y.is_negative() => T::MAX,
		(_,          true)                    => T::MIN,
	}
}

//		mul_sat
/// Saturating multiplication.
///
/// Computes `x * y`, clamped to `[T::MIN, T::MAX]`. Which bound is used depends
/// on the sign of the exact product.
///
/// # Parameters
///
/// * `x` - The first operand.
/// * `y` - The second operand.
///
#[must_use]
#[inline]
pub fn mul_sat<T: Integer>(x: T, y: T) -> T {
	match x.overflowing_mul(y) {
		(product, false)                                      => product,
		(_,       true) if x.is_negative() == y.is_negative() => T::MAX,
		(_,       true)                                       => T::MIN,
	}
}

//		div_sat
/// Saturating division.
///
/// Computes `x / y`, truncating towards zero. The only quotient that can fall
/// outside the range of `T` is `T::MIN / -1`, which gives `T::MAX`.
///
/// # Parameters
///
/// * `x` - The dividend.
/// * `y` - The divisor.
///
/// # Panics
///
/// Panics if `y` is zero. Checking the divisor is the responsibility of the
/// caller.
///
#[must_use]
#[inline]
pub fn div_sat<T: Integer>(x: T, y: T) -> T {
	match x.overflowing_div(y) {
		(quotient, false) => quotient,
		(_,        true)  => T::MAX,
	}
}

//		rem_sat
/// Remainder that never overflows.
///
/// Computes `x % y`. The primitive operator treats `T::MIN % -1` as an
/// overflow, even though the exact remainder is zero; this returns zero.
///
/// # Parameters
///
/// * `x` - The dividend.
/// * `y` - The divisor.
///
/// # Panics
///
/// Panics if `y` is zero.
///
#[must_use]
#[inline]
pub fn rem_sat<T: Integer>(x: T, y: T) -> T {
	match x.overflowing_rem(y) {
		(remainder, false) => remainder,
		(_,         true)  => T::ZERO,
	}
}

//		neg_sat
/// Saturating negation.
///
/// Computes `-x`. Negating `T::MIN` gives `T::MAX`, as `-T::MIN` cannot be
/// represented. Only available for signed types:
///
/// ```compile_fail
/// use satint::neg_sat;
///
/// let _ = neg_sat(1_u8);
/// ```
///
/// # Parameters
///
/// * `x` - The value to negate.
///
#[must_use]
#[inline]
pub fn neg_sat<T: Signed>(x: T) -> T {
	match x.overflowing_neg() {
		(negated, false) => negated,
		(_,       true)  => T::MAX,
	}
}

//		saturate_cast
/// Converts between integer types, clamping to the range of the destination.
///
/// Negative values become zero when the destination is unsigned. Values above
/// `R::MAX` become `R::MAX`, and values below `R::MIN` become `R::MIN`. All
/// other values are converted exactly.
///
/// # Parameters
///
/// * `x` - The value to convert.
///
/// # Examples
///
/// ```
/// use satint::saturate_cast;
///
/// assert_eq!(saturate_cast::<u8>(-5_i32), 0);
/// assert_eq!(saturate_cast::<i8>(300_i32), 127);
/// assert_eq!(saturate_cast::<i64>(u64::MAX), i64::MAX);
/// assert_eq!(saturate_cast::<u16>(42_i8), 42);
/// ```
///
#[must_use]
#[inline]
pub fn saturate_cast<R: Integer>(x: impl Integer) -> R {
	checked_cast(x).unwrap_or_else(|err| match err {
		ConversionError::ValueTooSmall => R::MIN,
		_                              => R::MAX,
	})
}

//		checked_cast
/// Converts between integer types, refusing values the destination cannot hold.
///
/// This is the non-saturating counterpart of [`saturate_cast()`]; it succeeds
/// in exactly the cases where [`saturate_cast()`] does not need to clamp.
///
/// # Parameters
///
/// * `x` - The value to convert.
///
/// # Errors
///
/// Returns [`ConversionError::ValueTooSmall`] if `x` is below `R::MIN`, and
/// [`ConversionError::ValueTooLarge`] if `x` is above `R::MAX`.
///
pub fn checked_cast<R: Integer>(x: impl Integer) -> Result<R, ConversionError> {
	//	Signed comparison is safe for negatives, as both sides fit in an i64
	if x.is_negative() {
		if !R::SIGNED || R::MIN.as_i64() > x.as_i64() {
			return Err(ConversionError::ValueTooSmall);
		}
	//	Unsigned comparison is safe for non-negatives, as both sides fit in a u64
	} else if R::MAX.as_u64() < x.as_u64() {
		return Err(ConversionError::ValueTooLarge);
	}
	Ok(R::from_i64_truncating(x.as_i64()))
}
