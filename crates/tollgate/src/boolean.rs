//! Must-be-true / must-be-false checks.

use crate::Result;
use crate::error::violation;

/// Checks that `value` is `true`.
#[inline]
pub fn is_true(value: bool, name: &str) -> Result {
	if value { Ok(()) } else { violation!(Boolean, name, "must be true, was false") }
}

/// Checks that `value` is `false`.
#[inline]
pub fn is_false(value: bool, name: &str) -> Result {
	if value { violation!(Boolean, name, "must be false, was true") } else { Ok(()) }
}
