//! Value equality and reference identity checks.

use std::fmt::Debug;

use crate::Result;
use crate::error::violation;

/// Checks that `value == target`.
#[inline]
pub fn is_equal_to<T: PartialEq + Debug>(value: T, target: T, name: &str) -> Result {
	if value == target {
		Ok(())
	} else {
		violation!(Equality, name, "must be equal to {target:?}, was {value:?}")
	}
}

/// Checks that `value != target`.
#[inline]
pub fn is_not_equal_to<T: PartialEq + Debug>(value: T, target: T, name: &str) -> Result {
	if value != target {
		Ok(())
	} else {
		violation!(Equality, name, "must not be equal to {target:?}, was {value:?}")
	}
}

/// Checks that `value` and `target` are the same object.
///
/// Only addresses are compared; `PartialEq` is never consulted and pointer
/// metadata (slice length, vtable) is ignored.
#[inline]
pub fn is_reference_equal_to<T: ?Sized>(value: &T, target: &T, name: &str) -> Result {
	if std::ptr::addr_eq(value, target) {
		Ok(())
	} else {
		violation!(
			Equality,
			name,
			"must be reference equal to {:p}, was {:p}",
			target as *const T,
			value as *const T
		)
	}
}

/// Checks that `value` and `target` are distinct objects.
#[inline]
pub fn is_reference_not_equal_to<T: ?Sized>(value: &T, target: &T, name: &str) -> Result {
	if std::ptr::addr_eq(value, target) {
		violation!(
			Equality,
			name,
			"must not be reference equal to {:p}, was {:p}",
			target as *const T,
			value as *const T
		)
	} else {
		Ok(())
	}
}
