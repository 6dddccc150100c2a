//! Helpers shared by the unit tests.



//		Packages

use crate::int::Integer;



//		Functions

//		exact
/// The value of `x` as an unbounded integer.
pub(crate) fn exact<T: Integer>(x: T) -> i128 {
	if T::SIGNED {
		i128::from(x.as_i64())
	} else {
		i128::from(x.as_u64())
	}
}

//		clamped
/// The nearest value of `T` to `v`.
pub(crate) fn clamped<T: Integer>(v: i128) -> T {
	if v < exact(T::MIN) {
		T::MIN
	} else if v > exact(T::MAX) {
		T::MAX
	} else {
		//	Values above i64::MAX only occur for u64, and survive the round trip
		T::from_i64_truncating(v as i64)
	}
}

//		all_values
/// Every value of an 8-bit type.
pub(crate) fn all_values<T: Integer>() -> Vec<T> {
	assert_eq!(T::BITS, 8, "Only 8-bit types can be enumerated");
	(exact(T::MIN)..=exact(T::MAX)).map(clamped::<T>).collect()
}

//		boundary_values
/// Values around the bounds of `T`, and around the points where
/// multiplication starts to overflow.
pub(crate) fn boundary_values<T: Integer>() -> Vec<T> {
	let two  = T::ONE + T::ONE;
	let half = 1_i64 << (T::BITS / 2);
	let mut values = vec![
		T::MIN,
		T::MIN + T::ONE,
		T::MIN + two,
		T::MIN / two,
		T::ZERO,
		T::ONE,
		two,
		T::from_i64_truncating(33),
		T::from_i64_truncating(half - 1),
		T::from_i64_truncating(half),
		T::from_i64_truncating(half + 1),
		T::MAX / two,
		T::MAX - two,
		T::MAX - T::ONE,
		T::MAX,
	];
	if T::SIGNED {
		values.extend([
			T::from_i64_truncating(-1),
			T::from_i64_truncating(-2),
			T::from_i64_truncating(-33),
			T::from_i64_truncating(-half),
			T::from_i64_truncating(-half - 1),
		]);
	}
	values.sort_unstable();
	values.dedup();
	values
}
