use bytemuck::NoUninit;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::ViolationKind;

#[derive(Debug, Clone, Copy, PartialEq, NoUninit)]
#[repr(C)]
struct Sample {
	id: u32,
	weight: f32,
	flags: u32,
}

#[test]
fn single_precision_fast_path_reports_hex_words() {
	let value = f32::from_bits(0x3F80_0000);
	let target = f32::from_bits(0x3F80_0001);
	let err = is_bitwise_equal_to(&value, &target, "scale").unwrap_err();
	assert_eq!(err.kind(), ViolationKind::Equality);
	assert_eq!(
		err.message(),
		"Parameter scale must be bitwise equal to 0x3F800001, was 0x3F800000"
	);
}

#[test]
fn integer_word_reinterpretation() {
	let err = is_bitwise_equal_to(&0x3F80_0000u32, &0x3F80_0001u32, "word").unwrap_err();
	assert_eq!(
		err.message(),
		"Parameter word must be bitwise equal to 0x3F800001, was 0x3F800000"
	);
}

#[test]
fn fast_path_pads_to_full_width() {
	let err = is_bitwise_equal_to(&1u8, &2u8, "b").unwrap_err();
	assert_eq!(err.message(), "Parameter b must be bitwise equal to 0x02, was 0x01");
	let err = is_bitwise_equal_to(&1u16, &0u16, "h").unwrap_err();
	assert_eq!(err.message(), "Parameter h must be bitwise equal to 0x0000, was 0x0001");
	let err = is_bitwise_equal_to(&0.0f64, &-0.0f64, "d").unwrap_err();
	assert_eq!(
		err.message(),
		"Parameter d must be bitwise equal to 0x8000000000000000, was 0x0000000000000000"
	);
}

#[test]
fn bits_differ_where_partial_eq_agrees() {
	assert!(crate::is_equal_to(0.0f32, -0.0f32, "z").is_ok());
	assert!(is_bitwise_equal_to(&0.0f32, &-0.0f32, "z").is_err());
}

#[test]
fn identical_nan_payloads_are_bitwise_equal() {
	let nan = f64::from_bits(0x7FF8_0000_0000_0001);
	assert!(is_bitwise_equal_to(&nan, &nan, "nan").is_ok());
}

#[test]
fn odd_width_scans_bytes() {
	let err = is_bitwise_equal_to(&[1u8, 2, 3], &[1u8, 9, 3], "triple").unwrap_err();
	assert_eq!(
		err.message(),
		"Parameter triple must be bitwise equal to target, byte 1 was 0x02, expected 0x09"
	);
	assert!(is_bitwise_equal_to(&[4u8, 5, 6], &[4u8, 5, 6], "triple").is_ok());
}

#[test]
fn struct_width_reports_first_differing_byte() {
	let value = Sample {
		id: 1,
		weight: 1.0,
		flags: 0,
	};
	let mut target = value;
	target.flags = 0x0000_0100;
	let err = is_bitwise_equal_to(&value, &target, "sample").unwrap_err();
	let index = if cfg!(target_endian = "little") { 9 } else { 10 };
	assert_eq!(
		err.message(),
		format!("Parameter sample must be bitwise equal to target, byte {index} was 0x00, expected 0x01")
	);
	assert!(is_bitwise_equal_to(&value, &value, "sample").is_ok());
}

#[test]
fn zero_sized_values_are_equal() {
	assert!(is_bitwise_equal_to(&(), &(), "unit").is_ok());
}

fn agrees_with_scan<T: NoUninit>(value: T, target: T) -> bool {
	let fast = is_bitwise_equal_to(&value, &target, "v").is_ok();
	let scan = first_difference(bytes_of(&value), bytes_of(&target)).is_none();
	fast == scan
}

proptest! {
	#[test]
	fn fast_path_agrees_with_scan_u8(a in any::<u8>(), b in any::<u8>()) {
		prop_assert!(agrees_with_scan(a, b));
		prop_assert!(agrees_with_scan(a, a));
	}

	#[test]
	fn fast_path_agrees_with_scan_u16(a in any::<u16>(), b in any::<u16>()) {
		prop_assert!(agrees_with_scan(a, b));
		prop_assert!(agrees_with_scan(a, a));
	}

	#[test]
	fn fast_path_agrees_with_scan_f32(a in any::<u32>(), flip in 0u32..32) {
		let value = f32::from_bits(a);
		let target = f32::from_bits(a ^ (1 << flip));
		prop_assert!(agrees_with_scan(value, target));
		prop_assert!(agrees_with_scan(value, value));
	}

	#[test]
	fn fast_path_agrees_with_scan_u64(a in any::<u64>(), b in any::<u64>()) {
		prop_assert!(agrees_with_scan(a, b));
		prop_assert!(agrees_with_scan([a as u32, b as u32], [a as u32, a as u32]));
	}

	#[test]
	fn failures_are_idempotent(a in any::<[u8; 5]>(), b in any::<[u8; 5]>()) {
		let first = is_bitwise_equal_to(&a, &b, "v");
		let second = is_bitwise_equal_to(&a, &b, "v");
		prop_assert_eq!(first, second);
	}
}
