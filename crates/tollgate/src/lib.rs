//! Argument precondition checks.
//!
//! Each check validates one condition about its inputs and returns
//! `Err(`[`Violation`]`)` the moment it is violated, with a message of the form
//! `Parameter {name} must {relation} {bound}, was {actual}`. Checks are pure:
//! they never mutate their inputs, never allocate on success, and hold no
//! state, so they can be called from any thread.
//!
//! ```
//! use tollgate::check;
//!
//! fn resize(width: u32, height: u32) -> tollgate::Result {
//! 	check!(is_in_range(width, 1, 4096))?;
//! 	check!(is_between_or_equal_to(height, 1, 4096))?;
//! 	Ok(())
//! }
//!
//! assert!(resize(640, 480).is_ok());
//! let err = resize(0, 480).unwrap_err();
//! assert_eq!(err.to_string(), "Parameter width must be in range [1, 4096), was 0");
//! ```

/// Raw byte equality with fixed-width fast paths.
pub mod bitwise;
/// Must-be-true / must-be-false checks.
pub mod boolean;
/// Value equality and reference identity.
pub mod equality;
/// Failure descriptor and result alias.
pub mod error;
/// Ordering, range and interval checks.
pub mod ordering;
/// Absent/present checks.
pub mod presence;
/// Exact type and assignability checks.
pub mod typing;

pub use bitwise::is_bitwise_equal_to;
pub use boolean::{is_false, is_true};
pub use equality::{is_equal_to, is_not_equal_to, is_reference_equal_to, is_reference_not_equal_to};
pub use error::{Result, Violation, ViolationKind};
pub use ordering::{
	is_between, is_between_or_equal_to, is_greater_than, is_greater_than_or_equal_to, is_in_range,
	is_less_than, is_less_than_or_equal_to, is_not_between, is_not_between_or_equal_to, is_not_in_range,
};
pub use presence::{Presence, is_not_null, is_null};
pub use typing::{Type, Typed, is_assignable_to_type, is_assignable_to_type_dyn, is_of_type, is_of_type_dyn};

// Dev-dependencies used only by the bench or by feature-gated tests.
#[cfg(test)]
use criterion as _;
#[cfg(all(test, not(feature = "tracing")))]
use tracing_subscriber as _;

/// Runs a check, naming the parameter after its first argument.
///
/// `check!(is_less_than(len, 64))` is `tollgate::is_less_than(len, 64, "len")`.
/// Type checks take a turbofish: `check!(is_of_type::<u32>(value))`.
#[macro_export]
macro_rules! check {
	($check:ident :: < $ty:ty > ( $subject:expr $(, $arg:expr)* $(,)? )) => {
		$crate::$check::<$ty, _>($subject $(, $arg)*, ::core::stringify!($subject))
	};
	($check:ident ( $subject:expr $(, $arg:expr)* $(,)? )) => {
		$crate::$check($subject $(, $arg)*, ::core::stringify!($subject))
	};
}
