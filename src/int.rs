//! Integer width/sign classes.
//!
//! The eight standard integer types are the only types the rest of the crate
//! operates on. Each one is described by an [`Integer`] implementation, which
//! carries its bounds as constants along with the overflow-reporting primitives
//! that the saturating operations build on.



//		Modules

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;



//		Packages

use core::{
	fmt::{Debug, Display, Formatter, self},
	hash::Hash,
	ops::{Add, Div, Mul, Rem, Sub},
};



//		Enums

//		Class
/// The width and signedness of an integer type.
///
/// This is the runtime counterpart of the [`Integer`] trait, and is mostly
/// useful for introspection, e.g. when reporting which kind of integer a value
/// was being converted to.
///
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Class {
	/// 8-bit signed.
	I8,

	/// 16-bit signed.
	I16,

	/// 32-bit signed.
	I32,

	/// 64-bit signed.
	I64,

	/// 8-bit unsigned.
	U8,

	/// 16-bit unsigned.
	U16,

	/// 32-bit unsigned.
	U32,

	/// 64-bit unsigned.
	U64,
}

//󰭅		Class
impl Class {
	/// Every class, signed first, narrowest first.
	pub const ALL: [Self; 8] = [
		Self::I8, Self::I16, Self::I32, Self::I64,
		Self::U8, Self::U16, Self::U32, Self::U64,
	];

	//		bits
	/// The width of the class in bits.
	#[must_use]
	pub const fn bits(self) -> u32 {
		match self {
			Self::I8  | Self::U8  => 8,
			Self::I16 | Self::U16 => 16,
			Self::I32 | Self::U32 => 32,
			Self::I64 | Self::U64 => 64,
		}
	}

	//		is_signed
	/// Whether the class can represent negative values.
	#[must_use]
	pub const fn is_signed(self) -> bool {
		matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
	}
}

//󰭅		Display
impl Display for Class {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let prefix = if self.is_signed() { "i" } else { "u" };
		write!(f, "{prefix}{}", self.bits())
	}
}



//		Traits

mod sealed {
	#[expect(unreachable_pub, reason = "Sealed trait pattern")]
	pub trait Sealed {}
}

//		Integer
/// A primitive integer type that saturating arithmetic is defined for.
///
/// This trait is sealed, and is implemented for [`i8`], [`i16`], [`i32`],
/// [`i64`], [`u8`], [`u16`], [`u32`], and [`u64`] only. Any attempt to use
/// another type where an [`Integer`] is expected is rejected at compile time.
///
/// The `overflowing_*` methods mirror the inherent methods of the same names on
/// the primitive types, and report whether the true result was out of range.
/// Division and remainder follow the primitive behaviour when the divisor is
/// zero, i.e. they panic.
///
pub trait Integer:
	Copy
	+ Debug
	+ Default
	+ Display
	+ Eq
	+ Hash
	+ Ord
	+ Send
	+ Sync
	+ 'static
	+ Add<Output = Self>
	+ Sub<Output = Self>
	+ Mul<Output = Self>
	+ Div<Output = Self>
	+ Rem<Output = Self>
	+ sealed::Sealed
{
	/// The class this type belongs to.
	const CLASS: Class;

	/// Width of the type in bits.
	const BITS: u32;

	/// Whether the type is signed.
	const SIGNED: bool;

	/// The smallest representable value.
	const MIN: Self;

	/// The largest representable value.
	const MAX: Self;

	/// Zero.
	const ZERO: Self;

	/// One.
	const ONE: Self;

	/// Whether the value is below zero. Always `false` for unsigned types.
	fn is_negative(self) -> bool;

	/// Represents the value as a signed 64-bit integer.
	///
	/// This is lossless for every class except [`u64`], where values above
	/// [`i64::MAX`] wrap. [`from_i64_truncating()`](Integer::from_i64_truncating())
	/// reverses it for every class.
	///
	fn as_i64(self) -> i64;

	/// Represents the value as an unsigned 64-bit integer.
	///
	/// Lossless for non-negative values. Negative values wrap.
	///
	fn as_u64(self) -> u64;

	/// Keeps the low [`BITS`](Integer::BITS) bits of a 64-bit value.
	fn from_i64_truncating(v: i64) -> Self;

	/// Calculates `self + rhs`, along with whether it overflowed.
	fn overflowing_add(self, rhs: Self) -> (Self, bool);

	/// Calculates `self - rhs`, along with whether it overflowed.
	fn overflowing_sub(self, rhs: Self) -> (Self, bool);

	/// Calculates `self * rhs`, along with whether it overflowed.
	fn overflowing_mul(self, rhs: Self) -> (Self, bool);

	/// Calculates `self / rhs`, along with whether it overflowed.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	fn overflowing_div(self, rhs: Self) -> (Self, bool);

	/// Calculates `self % rhs`, along with whether it overflowed.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	fn overflowing_rem(self, rhs: Self) -> (Self, bool);
}

//		Signed
/// An [`Integer`] that can hold negative values.
pub trait Signed: Integer {
	/// Minus one.
	const NEG_ONE: Self;

	/// Calculates `-self`, along with whether it overflowed.
	fn overflowing_neg(self) -> (Self, bool);
}



//		Macros

macro_rules! integer {
	($($t:ty => $class:ident, $signed:literal;)*) => { $(
		impl sealed::Sealed for $t {}

		//󰭅		Integer
		impl Integer for $t {
			const CLASS:  Class = Class::$class;
			const BITS:   u32   = <$t>::BITS;
			const SIGNED: bool  = $signed;
			const MIN:    Self  = <$t>::MIN;
			const MAX:    Self  = <$t>::MAX;
			const ZERO:   Self  = 0;
			const ONE:    Self  = 1;

			//		is_negative
			#[allow(unused_comparisons,                  reason = "Always false for unsigned types")]
			#[allow(clippy::absurd_extreme_comparisons, reason = "Always false for unsigned types")]
			#[inline]
			fn is_negative(self) -> bool {
				self < 0
			}

			//		as_i64
			#[allow(clippy::cast_lossless,      reason = "Needs to be generic over all classes")]
			#[allow(clippy::cast_possible_wrap, reason = "Wrap is documented for u64")]
			#[allow(trivial_numeric_casts,      reason = "Needs to be generic over all classes")]
			#[inline]
			fn as_i64(self) -> i64 {
				self as i64
			}

			//		as_u64
			#[allow(clippy::cast_lossless,  reason = "Needs to be generic over all classes")]
			#[allow(clippy::cast_sign_loss, reason = "Wrap is documented for negative values")]
			#[allow(trivial_numeric_casts,  reason = "Needs to be generic over all classes")]
			#[inline]
			fn as_u64(self) -> u64 {
				self as u64
			}

			//		from_i64_truncating
			#[allow(clippy::cast_possible_truncation, reason = "Truncation is the point")]
			#[allow(clippy::cast_sign_loss,           reason = "Truncation is the point")]
			#[allow(trivial_numeric_casts,            reason = "Needs to be generic over all classes")]
			#[inline]
			fn from_i64_truncating(v: i64) -> Self {
				v as Self
			}

			//		overflowing_add
			#[inline]
			fn overflowing_add(self, rhs: Self) -> (Self, bool) {
				<$t>::overflowing_add(self, rhs)
			}

			//		overflowing_sub
			#[inline]
			fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
				<$t>::overflowing_sub(self, rhs)
			}

			//		overflowing_mul
			#[inline]
			fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
				<$t>::overflowing_mul(self, rhs)
			}

			//		overflowing_div
			#[inline]
			fn overflowing_div(self, rhs: Self) -> (Self, bool) {
				<$t>::overflowing_div(self, rhs)
			}

			//		overflowing_rem
			#[inline]
			fn overflowing_rem(self, rhs: Self) -> (Self, bool) {
				<$t>::overflowing_rem(self, rhs)
			}
		}
	)* };
}

macro_rules! signed {
	($($t:ty),*) => { $(
		//󰭅		Signed
		impl Signed for $t {
			const NEG_ONE: Self = -1;

			//		overflowing_neg
			#[inline]
			fn overflowing_neg(self) -> (Self, bool) {
				<$t>::overflowing_neg(self)
			}
		}
	)* };
}

integer! {
	i8  => I8,  true;
	i16 => I16, true;
	i32 => I32, true;
	i64 => I64, true;
	u8  => U8,  false;
	u16 => U16, false;
	u32 => U32, false;
	u64 => U64, false;
}

signed!(i8, i16, i32, i64);
