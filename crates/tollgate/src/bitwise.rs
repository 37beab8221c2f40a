//! Raw byte equality.
//!
//! Compares the in-memory representation of two values, independent of any
//! `PartialEq` impl. Types of width 1, 2, 4 and 8 are reinterpreted as the
//! matching unsigned integer and compared in one step; every other width is
//! scanned byte by byte. The width is a constant per instantiation, so the
//! dispatch below folds away after monomorphization.

use bytemuck::{NoUninit, bytes_of, pod_read_unaligned};

use crate::Result;
use crate::error::violation;

/// Checks that `value` and `target` have identical bytes.
///
/// `T` must have a fixed layout with no padding and no indirection, which
/// [`NoUninit`] guarantees.
#[inline]
pub fn is_bitwise_equal_to<T: NoUninit>(value: &T, target: &T, name: &str) -> Result {
	let value = bytes_of(value);
	let target = bytes_of(target);
	match const { size_of::<T>() } {
		1 => compare_word::<u8>(value, target, name),
		2 => compare_word::<u16>(value, target, name),
		4 => compare_word::<u32>(value, target, name),
		8 => compare_word::<u64>(value, target, name),
		_ => compare_bytes(value, target, name),
	}
}

/// Unsigned integer used for a fixed-width comparison.
trait Word: bytemuck::Pod + PartialEq + std::fmt::UpperHex {
	/// Hex digits needed to render every byte of the word.
	const DIGITS: usize = size_of::<Self>() * 2;
}

impl Word for u8 {}
impl Word for u16 {}
impl Word for u32 {}
impl Word for u64 {}

#[inline(always)]
fn compare_word<W: Word>(value: &[u8], target: &[u8], name: &str) -> Result {
	let value: W = pod_read_unaligned(value);
	let target: W = pod_read_unaligned(target);
	if value == target {
		Ok(())
	} else {
		violation!(
			Equality,
			name,
			"must be bitwise equal to 0x{target:0width$X}, was 0x{value:0width$X}",
			width = W::DIGITS
		)
	}
}

#[inline]
fn compare_bytes(value: &[u8], target: &[u8], name: &str) -> Result {
	match first_difference(value, target) {
		None => Ok(()),
		Some(index) => violation!(
			Equality,
			name,
			"must be bitwise equal to target, byte {index} was 0x{:02X}, expected 0x{:02X}",
			value[index],
			target[index]
		),
	}
}

/// Index of the first differing byte of two equally sized buffers.
pub(crate) fn first_difference(value: &[u8], target: &[u8]) -> Option<usize> {
	value.iter().zip(target).position(|(a, b)| a != b)
}

#[cfg(test)]
mod tests;
