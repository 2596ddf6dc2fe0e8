// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use fjord_sys::transcript::Transcript;
use heapless::String;

fn transcript() -> Transcript<String<256>> {
    Transcript::new(String::new())
}

#[test]
fn hex_renders_exactly_eight_lowercase_digits() {
    for (value, expected) in [
        (0x0000_0000u32, "00000000"),
        (0xFFFF_FFFFu32, "ffffffff"),
        (0xC0FF_EE12u32, "c0ffee12"),
        (0x0000_0001u32, "00000001"),
        (0xDEAD_BEEFu32, "deadbeef"),
    ] {
        let mut t = transcript();
        t.hex_u32(value).unwrap();
        assert_eq!(t.into_writer().as_str(), expected);
    }
}

#[test]
fn percent_uses_one_to_three_decimal_digits() {
    for (value, expected) in [
        (0u32, "0"),
        (7u32, "7"),
        (10u32, "10"),
        (42u32, "42"),
        (99u32, "99"),
        (100u32, "100"),
    ] {
        let mut t = transcript();
        t.percent(value).unwrap();
        assert_eq!(t.into_writer().as_str(), expected);
    }
}

#[test]
fn percent_saturates_at_one_hundred() {
    for value in [101u32, 255, 1000, u32::MAX] {
        let mut t = transcript();
        t.percent(value).unwrap();
        assert_eq!(t.into_writer().as_str(), "100");
    }
}

#[test]
fn lines_end_with_crlf() {
    let mut t = transcript();
    t.line("memtest: PASS").unwrap();
    assert_eq!(t.into_writer().as_str(), "memtest: PASS\r\n");
}

#[test]
fn writes_appear_in_order() {
    let mut t = transcript();
    t.text("addr: 0x").unwrap();
    t.hex_u32(0x1000).unwrap();
    t.line("").unwrap();
    assert_eq!(t.into_writer().as_str(), "addr: 0x00001000\r\n");
}
