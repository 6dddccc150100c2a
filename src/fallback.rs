//! Comparison-based saturating arithmetic.
//!
//! These are the reference forms of [`add_sat()`](crate::add_sat()),
//! [`sub_sat()`](crate::sub_sat()), [`mul_sat()`](crate::mul_sat()),
//! [`div_sat()`](crate::div_sat()), [`rem_sat()`](crate::rem_sat()), and
//! [`neg_sat()`](crate::neg_sat()). They
//! decide whether the exact result would be out of range by comparing the
//! operands against bounds derived from `MIN` and `MAX`, using only arithmetic
//! that is known not to overflow, and only then perform the operation itself.
//!
//! They are kept alongside the intrinsic-based versions so that the two can be
//! checked against each other, and so that the boundary reasoning is written
//! down in one place.

//	Every operator below is guarded by a bounds check
#![allow(clippy::arithmetic_side_effects, reason = "All operations are guarded")]
#![allow(clippy::integer_division,        reason = "Truncation is accounted for")]



//		Modules

#[cfg(test)]
#[path = "tests/fallback.rs"]
mod tests;



//		Packages

use crate::int::{Integer, Signed};



//		Functions

//		add_sat
/// Saturating addition.
///
/// Overflows upwards iff `y > 0 && x > MAX - y`, and downwards iff
/// `y < 0 && x < MIN - y`. Unsigned types can only overflow upwards.
///
/// # Parameters
///
/// * `x` - The first operand.
/// * `y` - The second operand.
///
#[must_use]
pub fn add_sat<T: Integer>(x: T, y: T) -> T {
	if y > T::ZERO && x > T::MAX - y {
		T::MAX
	} else if y < T::ZERO && x < T::MIN - y {
		T::MIN
	} else {
		x + y
	}
}

//		sub_sat
/// Saturating subtraction.
///
/// Overflows downwards iff `y > 0 && x < MIN + y`, and upwards iff
/// `y < 0 && x > MAX + y`. For unsigned types the first case is `x < y`, which
/// clamps to zero.
///
/// # Parameters
///
/// * `x` - The minuend.
/// * `y` - The subtrahend.
///
#[must_use]
pub fn sub_sat<T: Integer>(x: T, y: T) -> T {
	if y > T::ZERO && x < T::MIN + y {
		T::MIN
	} else if y < T::ZERO && x > T::MAX + y {
		T::MAX
	} else {
		x - y
	}
}

//		mul_sat
/// Saturating multiplication.
///
/// Splits on the signs of the operands and compares one of them against the
/// bound divided by the other. Division truncates towards zero, which rounds
/// the bound in the direction that keeps each comparison exact.
///
/// # Parameters
///
/// * `x` - The first operand.
/// * `y` - The second operand.
///
#[must_use]
pub fn mul_sat<T: Integer>(x: T, y: T) -> T {
	let zero = T::ZERO;
	if x > zero && y > zero {
		if x > T::MAX / y {
			return T::MAX;
		}
	} else if x < zero && y < zero {
		//	MAX / y is negative here, and the product is positive
		if x < T::MAX / y {
			return T::MAX;
		}
	} else if x > zero && y < zero {
		if y < T::MIN / x {
			return T::MIN;
		}
	} else if x < zero && y > zero && x < T::MIN / y {
		return T::MIN;
	}
	x * y
}

//		div_sat
/// Saturating division.
///
/// The only quotient that can be out of range is `MIN / -1`, which clamps to
/// `MAX`. For unsigned types `y` is never negative, so this is plain division.
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
pub fn div_sat<T: Integer>(x: T, y: T) -> T {
	//	y + 1 cannot overflow for negative y
	if x == T::MIN && y.is_negative() && y + T::ONE == T::ZERO {
		T::MAX
	} else {
		x / y
	}
}

//		rem_sat
/// Remainder that never overflows.
///
/// `MIN % -1` is zero, but the operator itself would overflow computing it.
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
pub fn rem_sat<T: Integer>(x: T, y: T) -> T {
	if y.is_negative() && y + T::ONE == T::ZERO {
		T::ZERO
	} else {
		x % y
	}
}

//		neg_sat
/// Saturating negation, as multiplication by minus one.
///
/// # Parameters
///
/// * `x` - The value to negate.
///
#[must_use]
pub fn neg_sat<T: Signed>(x: T) -> T {
	mul_sat(x, T::NEG_ONE)
}
