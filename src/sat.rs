//! The saturating integer wrapper.



//		Modules

#[cfg(test)]
#[path = "tests/sat.rs"]
mod tests;



//		Packages

use crate::{
	errors::ConversionError,
	int::{Integer, Signed},
	ops::{add_sat, checked_cast, div_sat, mul_sat, neg_sat, rem_sat, saturate_cast, sub_sat},
	promote::{Promote, Promoted},
};
use bytes::BytesMut;
use core::{
	cmp::Ordering,
	error::Error,
	fmt::{Display, Formatter, self},
	hash::{Hash, Hasher},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
};
use serde::{Deserialize, Serialize};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};



//		Type aliases

/// Saturating 8-bit signed integer.
pub type SatI8 = Sat<i8>;

/// Saturating 16-bit signed integer.
pub type SatI16 = Sat<i16>;

/// Saturating 32-bit signed integer.
pub type SatI32 = Sat<i32>;

/// Saturating 64-bit signed integer.
pub type SatI64 = Sat<i64>;

/// Saturating 8-bit unsigned integer.
pub type SatU8 = Sat<u8>;

/// Saturating 16-bit unsigned integer.
pub type SatU16 = Sat<u16>;

/// Saturating 32-bit unsigned integer.
pub type SatU32 = Sat<u32>;

/// Saturating 64-bit unsigned integer.
pub type SatU64 = Sat<u64>;



//		Structs

//		Sat
/// An integer whose arithmetic saturates.
///
/// The wrapped value is always a valid value of `T`, and every operation that
/// produces a new value clamps it to the range of `T` rather than wrapping or
/// panicking on overflow.
///
/// # Arithmetic
///
/// `+`, `-`, `*`, `/`, and `%` are available between any two [`Sat`]s of the
/// same signedness, and the result is expressed in the wider of the two types,
/// following [`Promote`]. For example, `Sat<i8> + Sat<i32>` is a `Sat<i32>`.
/// Combinations of signed and unsigned types do not compile:
///
/// ```compile_fail
/// use satint::{SatI8, SatU8};
///
/// let _ = SatI8::new(1) + SatU8::new(1);
/// ```
///
/// A [`Sat`] can also be combined with a raw integer of the same signedness
/// when the raw integer is no wider than the wrapped type, in which case the
/// result has the wrapped type. Wider raw integers have to be converted
/// explicitly first, so that the effective range of a value is never changed
/// silently:
///
/// ```compile_fail
/// use satint::SatI8;
///
/// let _ = SatI8::new(1) + 1_i16;
/// ```
///
/// The compound assignment operators apply the operation and then saturate the
/// result back into the receiver's own type. This means that `a += b` where `b`
/// is wider than `a` may clamp a result that `a + b` would have represented
/// exactly.
///
/// Division and remainder by zero panic, just as for primitive integers.
///
/// # Conversion
///
/// Conversions that can never lose information, i.e. from a raw integer or
/// [`Sat`] to a [`Sat`] or raw integer of the same signedness and at least the
/// same width, are available through [`From`]. All other conversions are
/// explicit, through [`saturating_from()`](Sat::saturating_from()),
/// [`saturating_into()`](Sat::saturating_into()), and [`cast()`](Sat::cast()),
/// which saturate, or [`checked_from()`](Sat::checked_from()), which fails
/// instead.
///
/// # Comparison
///
/// Comparisons work across [`Sat`]s and raw integers of the same signedness,
/// in either order, and compare the numeric values.
///
/// # Examples
///
/// ```
/// use satint::{Sat, SatI8, SatI32};
///
/// let a = SatI8::from(100_i8);
/// assert_eq!(a * 4_i8, 127_i8);
/// assert_eq!(-SatI8::MIN, SatI8::MAX);
///
/// let b: SatI32 = a + SatI32::from(1_000_i32);
/// assert_eq!(b, 1_100_i32);
///
/// assert_eq!(SatI8::saturating_from(-300_i32), i8::MIN);
/// assert_eq!(Sat::<u8>::saturating_from(-5_i64), 0_u8);
/// ```
///
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
pub struct Sat<T>(T);

//󰭅		Sat
impl<T: Integer> Sat<T> {
	/// The smallest value.
	pub const MIN: Self = Self(T::MIN);

	/// The largest value.
	pub const MAX: Self = Self(T::MAX);

	/// Zero.
	pub const ZERO: Self = Self(T::ZERO);

	//		Constructors

	//		new
	/// Wraps a value of the underlying type.
	///
	/// # Parameters
	///
	/// * `value` - The value to wrap.
	///
	#[must_use]
	pub const fn new(value: T) -> Self {
		Self(value)
	}

	//		saturating_from
	/// Creates a [`Sat`] from any integer, clamping it to the range of `T`.
	///
	/// # Parameters
	///
	/// * `value` - The value to convert.
	///
	#[must_use]
	pub fn saturating_from(value: impl Integer) -> Self {
		Self(saturate_cast(value))
	}

	//		checked_from
	/// Creates a [`Sat`] from any integer that fits into `T`.
	///
	/// # Parameters
	///
	/// * `value` - The value to convert.
	///
	/// # Errors
	///
	/// Returns an error if the value is outside the range of `T`.
	///
	pub fn checked_from(value: impl Integer) -> Result<Self, ConversionError> {
		checked_cast(value).map(Self)
	}

	//		Public methods

	//		cast
	/// Converts to a [`Sat`] of another type, clamping to its range.
	#[must_use]
	pub fn cast<U: Integer>(self) -> Sat<U> {
		Sat(saturate_cast(self.0))
	}

	//		decrement
	/// Subtracts one in place, and returns the new value.
	#[must_use]
	pub fn decrement(&mut self) -> Self {
		self.0 = sub_sat(self.0, T::ONE);
		*self
	}

	//		increment
	/// Adds one in place, and returns the new value.
	#[must_use]
	pub fn increment(&mut self) -> Self {
		self.0 = add_sat(self.0, T::ONE);
		*self
	}

	//		is_zero
	/// Whether the value is zero.
	#[must_use]
	pub fn is_zero(self) -> bool {
		self.0 == T::ZERO
	}

	//		post_decrement
	/// Subtracts one in place, and returns the previous value.
	#[must_use]
	pub fn post_decrement(&mut self) -> Self {
		let previous = *self;
		_ = self.decrement();
		previous
	}

	//		post_increment
	/// Adds one in place, and returns the previous value.
	#[must_use]
	pub fn post_increment(&mut self) -> Self {
		let previous = *self;
		_ = self.increment();
		previous
	}

	//		saturating_into
	/// Converts to a raw integer of any type, clamping to its range.
	#[must_use]
	pub fn saturating_into<U: Integer>(self) -> U {
		saturate_cast(self.0)
	}

	//		value
	/// The wrapped value.
	#[must_use]
	pub const fn value(self) -> T {
		self.0
	}
}

//󰭅		Display
impl<T: Display> Display for Sat<T> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

//󰭅		Eq
impl<T: Promote<T>> Eq for Sat<T> {}

//󰭅		From: Sat -> bool
impl<T: Integer> From<Sat<T>> for bool {
	//		from
	fn from(v: Sat<T>) -> Self {
		!v.is_zero()
	}
}

//󰭅		FromSql
impl<'a, T: Integer> FromSql<'a> for Sat<T> {
	//		from_sql
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => Ok(Self::saturating_from(i16::from_sql(ty, raw)?)),
			&Type::INT4 => Ok(Self::saturating_from(i32::from_sql(ty, raw)?)),
			&Type::INT8 => Ok(Self::saturating_from(i64::from_sql(ty, raw)?)),
			unknown     => Err(Box::new(ConversionError::InvalidSqlType(unknown.to_string(), T::CLASS))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8)
	}
}

//󰭅		Hash
impl<T: Hash> Hash for Sat<T> {
	//		hash
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.hash(state);
	}
}

//󰭅		Neg
impl<T: Signed> Neg for Sat<T> {
	type Output = Self;

	//		neg
	fn neg(self) -> Self::Output {
		Self(neg_sat(self.0))
	}
}

//󰭅		Ord
impl<T: Promote<T>> Ord for Sat<T> {
	//		cmp
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.cmp(&other.0)
	}
}

//󰭅		PartialEq
impl<T, U> PartialEq<Sat<U>> for Sat<T>
where
	T: Promote<U>,
	U: Integer,
{
	//		eq
	fn eq(&self, other: &Sat<U>) -> bool {
		<Promoted<T, U>>::from(self.0) == <Promoted<T, U>>::from(other.0)
	}
}

//󰭅		PartialOrd
impl<T, U> PartialOrd<Sat<U>> for Sat<T>
where
	T: Promote<U>,
	U: Integer,
{
	//		partial_cmp
	fn partial_cmp(&self, other: &Sat<U>) -> Option<Ordering> {
		Some(<Promoted<T, U>>::from(self.0).cmp(&<Promoted<T, U>>::from(other.0)))
	}
}

//󰭅		Product
impl<T: Integer> Product for Sat<T> {
	//		product
	/// Multiplies the values together, saturating at each step.
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self(T::ONE), |acc, x| Self(mul_sat(acc.0, x.0)))
	}
}

//󰭅		Product<&>
impl<'a, T: Integer> Product<&'a Self> for Sat<T> {
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.copied().product()
	}
}

//󰭅		Sum
impl<T: Integer> Sum for Sat<T> {
	//		sum
	/// Adds the values together, saturating at each step.
	///
	/// For signed types the result depends on the order of the values once
	/// any intermediate total has saturated.
	///
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self(T::ZERO), |acc, x| Self(add_sat(acc.0, x.0)))
	}
}

//󰭅		Sum<&>
impl<'a, T: Integer> Sum<&'a Self> for Sat<T> {
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.copied().sum()
	}
}

//󰭅		ToSql
impl<T: Integer> ToSql for Sat<T> {
	//		to_sql
	/// Writes the value to a column of any integer type, saturating to the
	/// range of the column.
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => self.saturating_into::<i16>().to_sql(ty, out),
			&Type::INT4 => self.saturating_into::<i32>().to_sql(ty, out),
			&Type::INT8 => self.saturating_into::<i64>().to_sql(ty, out),
			unknown     => Err(Box::new(ConversionError::InvalidSqlType(unknown.to_string(), T::CLASS))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8)
	}

	to_sql_checked!();
}



//		Macros

//	Operators between two wrappers, for every same-signedness pair.
macro_rules! arithmetic {
	($($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sat:ident;)*) => { $(
		//󰭅		Op: Sat<T> op Sat<U>
		impl<T, U> $Op<Sat<U>> for Sat<T>
		where
			T: Promote<U>,
			U: Integer,
		{
			type Output = Sat<Promoted<T, U>>;

			//		op
			fn $op(self, rhs: Sat<U>) -> Self::Output {
				Sat($sat(<Promoted<T, U>>::from(self.0), <Promoted<T, U>>::from(rhs.0)))
			}
		}

		//󰭅		OpAssign: Sat<T> op= Sat<U>
		impl<T, U> $OpAssign<Sat<U>> for Sat<T>
		where
			T: Promote<U>,
			U: Integer,
		{
			//		op_assign
			fn $op_assign(&mut self, rhs: Sat<U>) {
				*self = $Op::$op(*self, rhs).cast();
			}
		}
	)* };
}

//	Operators between a wrapper and a raw integer that is no wider.
macro_rules! raw_arithmetic {
	(@op $wide:ty, $narrow:ty, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sat:ident) => {
		//󰭅		Op: Sat op raw
		impl $Op<$narrow> for Sat<$wide> {
			type Output = Self;

			//		op
			#[allow(clippy::useless_conversion, reason = "Needed when the types match")]
			fn $op(self, rhs: $narrow) -> Self::Output {
				Self($sat(self.0, <$wide>::from(rhs)))
			}
		}

		//󰭅		Op: raw op Sat
		impl $Op<Sat<$wide>> for $narrow {
			type Output = Sat<$wide>;

			//		op
			#[allow(clippy::useless_conversion, reason = "Needed when the types match")]
			fn $op(self, rhs: Sat<$wide>) -> Self::Output {
				Sat($sat(<$wide>::from(self), rhs.0))
			}
		}

		//󰭅		OpAssign: Sat op= raw
		impl $OpAssign<$narrow> for Sat<$wide> {
			//		op_assign
			fn $op_assign(&mut self, rhs: $narrow) {
				*self = $Op::$op(*self, rhs);
			}
		}
	};
	($($wide:ty => $($narrow:ty),+;)*) => { $($(
		raw_arithmetic!(@op $wide, $narrow, Add, add, AddAssign, add_assign, add_sat);
		raw_arithmetic!(@op $wide, $narrow, Sub, sub, SubAssign, sub_assign, sub_sat);
		raw_arithmetic!(@op $wide, $narrow, Mul, mul, MulAssign, mul_assign, mul_sat);
		raw_arithmetic!(@op $wide, $narrow, Div, div, DivAssign, div_assign, div_sat);
		raw_arithmetic!(@op $wide, $narrow, Rem, rem, RemAssign, rem_assign, rem_sat);
	)+)* };
}

//	Comparisons between a wrapper and a raw integer, in both directions.
macro_rules! raw_comparisons {
	($($raw:ty),*) => { $(
		//󰭅		PartialEq: Sat == raw
		impl<T: Promote<$raw>> PartialEq<$raw> for Sat<T> {
			//		eq
			fn eq(&self, other: &$raw) -> bool {
				<Promoted<T, $raw>>::from(self.0) == <Promoted<T, $raw>>::from(*other)
			}
		}

		//󰭅		PartialOrd: Sat <> raw
		impl<T: Promote<$raw>> PartialOrd<$raw> for Sat<T> {
			//		partial_cmp
			fn partial_cmp(&self, other: &$raw) -> Option<Ordering> {
				Some(<Promoted<T, $raw>>::from(self.0).cmp(&<Promoted<T, $raw>>::from(*other)))
			}
		}

		//󰭅		PartialEq: raw == Sat
		impl<T: Integer> PartialEq<Sat<T>> for $raw
		where
			$raw: Promote<T>,
		{
			//		eq
			fn eq(&self, other: &Sat<T>) -> bool {
				<Promoted<$raw, T>>::from(*self) == <Promoted<$raw, T>>::from(other.0)
			}
		}

		//󰭅		PartialOrd: raw <> Sat
		impl<T: Integer> PartialOrd<Sat<T>> for $raw
		where
			$raw: Promote<T>,
		{
			//		partial_cmp
			fn partial_cmp(&self, other: &Sat<T>) -> Option<Ordering> {
				Some(<Promoted<$raw, T>>::from(*self).cmp(&<Promoted<$raw, T>>::from(other.0)))
			}
		}
	)* };
}

//	Conversions that cannot lose information.
macro_rules! lossless {
	(@identity $($t:ty),*) => { $(
		//󰭅		From: raw -> Sat
		impl From<$t> for Sat<$t> {
			//		from
			fn from(v: $t) -> Self {
				Self(v)
			}
		}

		//󰭅		From: Sat -> raw
		impl From<Sat<$t>> for $t {
			//		from
			fn from(v: Sat<$t>) -> Self {
				v.0
			}
		}
	)* };
	($($narrow:ty => $($wide:ty),+;)*) => { $($(
		//󰭅		From: raw -> wider Sat
		impl From<$narrow> for Sat<$wide> {
			//		from
			fn from(v: $narrow) -> Self {
				Self(<$wide>::from(v))
			}
		}

		//󰭅		From: Sat -> wider raw
		impl From<Sat<$narrow>> for $wide {
			//		from
			fn from(v: Sat<$narrow>) -> Self {
				Self::from(v.0)
			}
		}

		//󰭅		From: Sat -> wider Sat
		impl From<Sat<$narrow>> for Sat<$wide> {
			//		from
			fn from(v: Sat<$narrow>) -> Self {
				Self(<$wide>::from(v.0))
			}
		}
	)+)* };
}

arithmetic! {
	Add, add, AddAssign, add_assign, add_sat;
	Sub, sub, SubAssign, sub_assign, sub_sat;
	Mul, mul, MulAssign, mul_assign, mul_sat;
	Div, div, DivAssign, div_assign, div_sat;
	Rem, rem, RemAssign, rem_assign, rem_sat;
}

raw_arithmetic! {
	i8  => i8;
	i16 => i8, i16;
	i32 => i8, i16, i32;
	i64 => i8, i16, i32, i64;
	u8  => u8;
	u16 => u8, u16;
	u32 => u8, u16, u32;
	u64 => u8, u16, u32, u64;
}

raw_comparisons!(i8, i16, i32, i64, u8, u16, u32, u64);

lossless!(@identity i8, i16, i32, i64, u8, u16, u32, u64);

lossless! {
	i8  => i16, i32, i64;
	i16 => i32, i64;
	i32 => i64;
	u8  => u16, u32, u64;
	u16 => u32, u64;
	u32 => u64;
}
