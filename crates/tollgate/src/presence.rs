//! Null / none checks.

use std::ptr::NonNull;

use crate::Result;
use crate::error::violation;

/// A value that has an absent state.
///
/// Implemented for `Option<T>` whatever its payload, so value-like and
/// reference-like inputs go through the same checks without boxing.
pub trait Presence {
	/// Returns true if the value is in its absent state.
	fn is_absent(&self) -> bool;
}

impl<T> Presence for Option<T> {
	#[inline]
	fn is_absent(&self) -> bool {
		self.is_none()
	}
}

impl<T: ?Sized> Presence for *const T {
	#[inline]
	fn is_absent(&self) -> bool {
		self.is_null()
	}
}

impl<T: ?Sized> Presence for *mut T {
	#[inline]
	fn is_absent(&self) -> bool {
		self.is_null()
	}
}

impl<T: ?Sized> Presence for NonNull<T> {
	#[inline]
	fn is_absent(&self) -> bool {
		false
	}
}

impl<P: Presence + ?Sized> Presence for &P {
	#[inline]
	fn is_absent(&self) -> bool {
		(**self).is_absent()
	}
}

/// Checks that `value` is absent.
///
/// Takes `value` by value; pass `&value` to keep ownership.
#[inline]
pub fn is_null<P: Presence>(value: P, name: &str) -> Result {
	if value.is_absent() {
		Ok(())
	} else {
		violation!(Absence, name, "must be null, was not null")
	}
}

/// Checks that `value` is present.
#[inline]
pub fn is_not_null<P: Presence>(value: P, name: &str) -> Result {
	if value.is_absent() {
		violation!(Absence, name, "must not be null, was null")
	} else {
		Ok(())
	}
}
