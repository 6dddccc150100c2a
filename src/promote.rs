//! Promotion between integer classes.
//!
//! When a binary operation mixes two classes, the result is expressed in the
//! promoted class. Promotion is only defined when both classes have the same
//! signedness, in which case the wider of the two wins. Mixed-signedness pairs
//! have no promoted class, so no operator is offered for them at all: mixing
//! [`Sat<i8>`](crate::Sat) with [`Sat<u8>`](crate::Sat) does not compile.
//!
//! The relation exists in two forms that describe the same table: the
//! [`Promote`] trait, which drives operator dispatch, and the [`promote()`]
//! function, which answers the same question for runtime [`Class`] values.



//		Modules

#[cfg(test)]
#[path = "tests/promote.rs"]
mod tests;



//		Packages

use crate::int::{Class, Integer};



//		Type aliases

/// The promoted type of `T` and `U`.
pub type Promoted<T, U> = <T as Promote<U>>::Output;



//		Traits

//		Promote
/// Same-signedness pairing of two integer types.
///
/// `T: Promote<U>` holds iff `T` and `U` are both signed or both unsigned, and
/// [`Output`](Promote::Output) is then the wider of the two. Both operands can
/// be converted into the output losslessly, which is expressed by the [`From`]
/// bounds.
///
pub trait Promote<U: Integer>: Integer {
	/// The class the result of a mixed operation is expressed in.
	type Output: Integer + From<Self> + From<U>;
}



//		Functions

//		promote
/// Determines the promoted class of a pair of classes.
///
/// Returns [`None`] if the classes differ in signedness.
///
/// # Parameters
///
/// * `lhs` - The class of the left operand.
/// * `rhs` - The class of the right operand.
///
#[must_use]
pub const fn promote(lhs: Class, rhs: Class) -> Option<Class> {
	if lhs.is_signed() != rhs.is_signed() {
		None
	} else if lhs.bits() >= rhs.bits() {
		Some(lhs)
	} else {
		Some(rhs)
	}
}



//		Macros

macro_rules! promote {
	($($lhs:ty, $rhs:ty => $out:ty;)*) => { $(
		//󰭅		Promote
		impl Promote<$rhs> for $lhs {
			type Output = $out;
		}
	)* };
}

promote! {
	i8,  i8  => i8;
	i8,  i16 => i16;
	i8,  i32 => i32;
	i8,  i64 => i64;
	i16, i8  => i16;
	i16, i16 => i16;
	i16, i32 => i32;
	i16, i64 => i64;
	i32, i8  => i32;
	i32, i16 => i32;
	i32, i32 => i32;
	i32, i64 => i64;
	i64, i8  => i64;
	i64, i16 => i64;
	i64, i32 => i64;
	i64, i64 => i64;
	u8,  u8  => u8;
	u8,  u16 => u16;
	u8,  u32 => u32;
	u8,  u64 => u64;
	u16, u8  => u16;
	u16, u16 => u16;
	u16, u32 => u32;
	u16, u64 => u64;
	u32, u8  => u32;
	u32, u16 => u32;
	u32, u32 => u32;
	u32, u64 => u64;
	u64, u8  => u64;
	u64, u16 => u64;
	u64, u32 => u64;
	u64, u64 => u64;
}
