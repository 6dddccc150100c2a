//! Contains error types used throughout the library.



//		Packages

use crate::int::Class;
use thiserror::Error as ThisError;



//		Enums

//		ConversionError
/// Represents all possible conversion errors that can occur.
///
/// Saturation itself is never an error. These are only produced by the checked
/// conversion paths, which refuse to clamp, and by the database integration.
///
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The column type is not one that can hold an integer of this kind.
	#[error("Invalid SQL type for {1}: {0}")]
	InvalidSqlType(String, Class),

	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,

	/// The incoming value is too small to be converted to the destination type,
	/// e.g. a negative value being converted to an unsigned type.
	#[error("Value too small")]
	ValueTooSmall,
}
