//! Runtime type checks: exact match and assignability.
//!
//! Rust has no inheritance, so "is assignable to" is driven by declared
//! ancestry: a [`Typed`] value lists the types it stands in for (parent
//! structs it wraps, traits it implements as `dyn Trait`). Exact match only
//! ever compares the concrete runtime type.

use std::any::{Any, TypeId};
use std::fmt;

use crate::Result;
use crate::error::violation;

/// A runtime type: identity plus a printable name.
#[derive(Clone, Copy)]
pub struct Type {
	id: TypeId,
	name: &'static str,
}

impl Type {
	/// Describes `T`.
	#[inline]
	pub fn of<T: ?Sized + 'static>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: std::any::type_name::<T>(),
		}
	}

	/// Type identity.
	pub fn id(&self) -> TypeId {
		self.id
	}

	/// Type name as reported by [`std::any::type_name`].
	pub fn name(&self) -> &'static str {
		self.name
	}
}

impl PartialEq for Type {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for Type {}

impl fmt::Debug for Type {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

impl fmt::Display for Type {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

/// A value whose runtime type and ancestry can be inspected.
///
/// Implement with [`typed!`](crate::typed). The runtime type is always the
/// implementing type itself; `descends_from` answers for declared ancestors
/// only and never for the type itself.
pub trait Typed: Any {
	/// The concrete runtime type of this value.
	fn runtime_type(&self) -> Type {
		Type::of::<Self>()
	}

	/// Returns true if `ty` is a declared proper ancestor or capability.
	fn descends_from(&self, ty: TypeId) -> bool {
		let _ = ty;
		false
	}

	/// Static form of [`descends_from`](Typed::descends_from), consulted
	/// when this type is listed as a parent of another.
	fn declares(ty: TypeId) -> bool
	where
		Self: Sized,
	{
		let _ = ty;
		false
	}
}

/// Implements [`Typed`] for a type and its declared ancestors.
///
/// Parents come first and must themselves be [`Typed`]; their own ancestry is
/// inherited, so a grandparent need not be repeated. Capabilities follow a
/// `;` and are matched as listed, typically `dyn Trait`. Parent declarations
/// must not form a cycle.
///
/// ```
/// use tollgate::typed;
///
/// trait Shape {}
/// struct Polygon;
/// struct Rectangle;
/// struct Square;
/// impl Shape for Square {}
///
/// typed!(Polygon);
/// typed!(Rectangle: Polygon);
/// typed!(Square: Rectangle; dyn Shape);
/// assert!(tollgate::is_assignable_to_type::<Polygon, _>(&Square, "square").is_ok());
/// assert!(tollgate::is_assignable_to_type::<dyn Shape, _>(&Square, "square").is_ok());
/// ```
#[macro_export]
macro_rules! typed {
	($ty:ty : $($parent:ty),* $(; $($capability:ty),+)?) => {
		impl $crate::Typed for $ty {
			fn descends_from(&self, ty: ::std::any::TypeId) -> bool {
				<Self as $crate::Typed>::declares(ty)
			}

			fn declares(ty: ::std::any::TypeId) -> bool {
				false
					$(|| ty == ::std::any::TypeId::of::<$parent>() || <$parent as $crate::Typed>::declares(ty))*
					$($(|| ty == ::std::any::TypeId::of::<$capability>())+)?
			}
		}
	};
	($($ty:ty),+ $(,)?) => {
		$(impl $crate::Typed for $ty {})+
	};
}

typed!(
	(),
	bool,
	char,
	u8,
	u16,
	u32,
	u64,
	u128,
	usize,
	i8,
	i16,
	i32,
	i64,
	i128,
	isize,
	f32,
	f64,
	String,
	&'static str,
);

/// Checks that the runtime type of `value` is exactly `T`.
#[inline]
pub fn is_of_type<T: ?Sized + 'static, V: Typed + ?Sized>(value: &V, name: &str) -> Result {
	is_of_type_dyn(value, Type::of::<T>(), name)
}

/// Checks that the runtime type of `value` is exactly `ty`.
pub fn is_of_type_dyn<V: Typed + ?Sized>(value: &V, ty: Type, name: &str) -> Result {
	let actual = value.runtime_type();
	if actual == ty {
		Ok(())
	} else {
		violation!(Type, name, "must be of type {ty}, was {actual}")
	}
}

/// Checks that `value` is a `T` or declares `T` as an ancestor.
#[inline]
pub fn is_assignable_to_type<T: ?Sized + 'static, V: Typed + ?Sized>(value: &V, name: &str) -> Result {
	is_assignable_to_type_dyn(value, Type::of::<T>(), name)
}

/// Checks that `value` is a `ty` or declares `ty` as an ancestor.
pub fn is_assignable_to_type_dyn<V: Typed + ?Sized>(value: &V, ty: Type, name: &str) -> Result {
	let actual = value.runtime_type();
	if actual == ty || value.descends_from(ty.id()) {
		Ok(())
	} else {
		violation!(Type, name, "must be assignable to type {ty}, was {actual}")
	}
}
