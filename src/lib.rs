//! The Satint crate provides saturating integer arithmetic.
//!
//! Saturating operations clamp results that would not fit in the type to the
//! nearest bound, instead of wrapping or panicking. There are two layers:
//!
//!   1. Free functions that operate on a single primitive type, i.e.
//!      [`add_sat()`], [`sub_sat()`], [`mul_sat()`], [`div_sat()`],
//!      [`rem_sat()`], and [`neg_sat()`], along with [`saturate_cast()`] for
//!      converting between types.
//!   2. The [`Sat`] wrapper type, which makes the arithmetic operators
//!      saturate, and which combines values of different widths according to
//!      the [`Promote`] relation.
//!
//! Both layers cover [`i8`], [`i16`], [`i32`], [`i64`], [`u8`], [`u16`],
//! [`u32`], and [`u64`].
//!
//! Saturation is never reported as an error. The one precondition that is not
//! checked is a non-zero divisor: division and remainder by zero panic, as for
//! the primitive types.
//!
//! # Examples
//!
//! ```
//! use satint::{SatI8, SatU8, mul_sat, saturate_cast};
//!
//! assert_eq!(mul_sat(100_i8, 4),  127);
//! assert_eq!(mul_sat(-100_i8, 4), -128);
//! assert_eq!(saturate_cast::<u8>(-5_i32), 0);
//!
//! let mut n = SatU8::from(250_u8);
//! n += 10_u8;
//! assert_eq!(n, u8::MAX);
//! assert_eq!(SatI8::MIN / -1_i8, i8::MAX);
//! ```



//		Global configuration

#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_sign_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::expect_used,
	clippy::integer_division,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::op_ref,
	clippy::panic,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod errors;
pub mod fallback;
mod int;
mod ops;
mod promote;
mod sat;

#[cfg(test)]
#[path = "tests/utils.rs"]
mod test_utils;



//		Packages

pub use errors::ConversionError;
pub use int::{Class, Integer, Signed};
pub use ops::{add_sat, checked_cast, div_sat, mul_sat, neg_sat, rem_sat, saturate_cast, sub_sat};
pub use promote::{Promote, Promoted, promote};
pub use sat::{Sat, SatI8, SatI16, SatI32, SatI64, SatU8, SatU16, SatU32, SatU64};
