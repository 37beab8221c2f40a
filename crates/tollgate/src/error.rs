//! Failure descriptor shared by every check.

use std::fmt;

use thiserror::Error;

/// Result type returned by every check.
pub type Result<T = (), E = Violation> = std::result::Result<T, E>;

/// Category of a violated precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
	/// A presence check saw the wrong absent/present state.
	Absence,
	/// An exact-type or assignability check failed.
	Type,
	/// A value, reference, or bitwise (in)equality check failed.
	Equality,
	/// A must-be-true or must-be-false check failed.
	Boolean,
	/// An ordering, range, or interval check failed.
	Range,
}

impl ViolationKind {
	/// Stable lower-case label for the kind.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Absence => "absence",
			Self::Type => "type",
			Self::Equality => "equality",
			Self::Boolean => "boolean",
			Self::Range => "range",
		}
	}
}

impl fmt::Display for ViolationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A violated precondition.
///
/// `Display` renders the message alone, so a violation can be surfaced as-is
/// or wrapped by the caller's own error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Violation {
	kind: ViolationKind,
	param: String,
	message: String,
}

impl Violation {
	/// Builds a violation for `param`. Only reached on the failure path.
	#[cold]
	#[inline(never)]
	pub(crate) fn new(kind: ViolationKind, param: &str, message: fmt::Arguments<'_>) -> Self {
		let message = message.to_string();
		#[cfg(feature = "tracing")]
		tracing::debug!(target: "tollgate", param, kind = kind.as_str(), "{message}");
		Self {
			kind,
			param: param.to_owned(),
			message,
		}
	}

	/// Category of the violated check.
	pub fn kind(&self) -> ViolationKind {
		self.kind
	}

	/// Parameter name exactly as the caller supplied it.
	pub fn param(&self) -> &str {
		&self.param
	}

	/// Human-readable failure message.
	pub fn message(&self) -> &str {
		&self.message
	}
}

/// Produces `Err(Violation)` with a message of the form
/// `Parameter {name} must ...`.
macro_rules! violation {
	($kind:ident, $param:expr, $($fmt:tt)+) => {
		Err($crate::error::Violation::new(
			$crate::error::ViolationKind::$kind,
			$param,
			format_args!("Parameter {} {}", $param, format_args!($($fmt)+)),
		))
	};
}

pub(crate) use violation;
