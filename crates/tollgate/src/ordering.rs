//! Ordering, range and interval checks.
//!
//! Every bound is compared with [`PartialOrd::partial_cmp`] at most once and
//! the success condition is evaluated literally. An incomparable pair
//! (`partial_cmp` returning `None`) satisfies neither `<`, `=` nor `>`, so a
//! NaN fails both a range check and its negation.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::Result;
use crate::error::violation;

#[inline(always)]
fn lt<T: PartialOrd>(a: &T, b: &T) -> bool {
	matches!(a.partial_cmp(b), Some(Ordering::Less))
}

#[inline(always)]
fn le<T: PartialOrd>(a: &T, b: &T) -> bool {
	matches!(a.partial_cmp(b), Some(Ordering::Less | Ordering::Equal))
}

#[inline(always)]
fn gt<T: PartialOrd>(a: &T, b: &T) -> bool {
	matches!(a.partial_cmp(b), Some(Ordering::Greater))
}

#[inline(always)]
fn ge<T: PartialOrd>(a: &T, b: &T) -> bool {
	matches!(a.partial_cmp(b), Some(Ordering::Greater | Ordering::Equal))
}

/// Checks `value < max`.
#[inline]
pub fn is_less_than<T: PartialOrd + Debug>(value: T, max: T, name: &str) -> Result {
	if lt(&value, &max) {
		Ok(())
	} else {
		violation!(Range, name, "must be less than {max:?}, was {value:?}")
	}
}

/// Checks `value <= max`.
#[inline]
pub fn is_less_than_or_equal_to<T: PartialOrd + Debug>(value: T, max: T, name: &str) -> Result {
	if le(&value, &max) {
		Ok(())
	} else {
		violation!(Range, name, "must be less than or equal to {max:?}, was {value:?}")
	}
}

/// Checks `value > min`.
#[inline]
pub fn is_greater_than<T: PartialOrd + Debug>(value: T, min: T, name: &str) -> Result {
	if gt(&value, &min) {
		Ok(())
	} else {
		violation!(Range, name, "must be greater than {min:?}, was {value:?}")
	}
}

/// Checks `value >= min`.
#[inline]
pub fn is_greater_than_or_equal_to<T: PartialOrd + Debug>(value: T, min: T, name: &str) -> Result {
	if ge(&value, &min) {
		Ok(())
	} else {
		violation!(Range, name, "must be greater than or equal to {min:?}, was {value:?}")
	}
}

/// Checks `min <= value < max` (half-open).
#[inline]
pub fn is_in_range<T: PartialOrd + Debug>(value: T, min: T, max: T, name: &str) -> Result {
	if ge(&value, &min) && lt(&value, &max) {
		Ok(())
	} else {
		violation!(Range, name, "must be in range [{min:?}, {max:?}), was {value:?}")
	}
}

/// Checks `value < min || value >= max`.
#[inline]
pub fn is_not_in_range<T: PartialOrd + Debug>(value: T, min: T, max: T, name: &str) -> Result {
	if lt(&value, &min) || ge(&value, &max) {
		Ok(())
	} else {
		violation!(Range, name, "must not be in range [{min:?}, {max:?}), was {value:?}")
	}
}

/// Checks `min < value < max` (open).
#[inline]
pub fn is_between<T: PartialOrd + Debug>(value: T, min: T, max: T, name: &str) -> Result {
	if gt(&value, &min) && lt(&value, &max) {
		Ok(())
	} else {
		violation!(Range, name, "must be between {min:?} and {max:?}, was {value:?}")
	}
}

/// Checks `value <= min || value >= max`.
#[inline]
pub fn is_not_between<T: PartialOrd + Debug>(value: T, min: T, max: T, name: &str) -> Result {
	if le(&value, &min) || ge(&value, &max) {
		Ok(())
	} else {
		violation!(Range, name, "must not be between {min:?} and {max:?}, was {value:?}")
	}
}

/// Checks `min <= value <= max` (closed).
#[inline]
pub fn is_between_or_equal_to<T: PartialOrd + Debug>(value: T, min: T, max: T, name: &str) -> Result {
	if ge(&value, &min) && le(&value, &max) {
		Ok(())
	} else {
		violation!(Range, name, "must be between or equal to {min:?} and {max:?}, was {value:?}")
	}
}

/// Checks `value < min || value > max`.
#[inline]
pub fn is_not_between_or_equal_to<T: PartialOrd + Debug>(value: T, min: T, max: T, name: &str) -> Result {
	if lt(&value, &min) || gt(&value, &max) {
		Ok(())
	} else {
		violation!(
			Range,
			name,
			"must not be between or equal to {min:?} and {max:?}, was {value:?}"
		)
	}
}
