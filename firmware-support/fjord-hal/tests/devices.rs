// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use fjord_hal::character_display::{CharacterDisplay, CELL_COUNT};
use fjord_hal::uart::Uart;

// Register order: control, read data, write data.
fn uart_over(regs: &mut [u32; 3]) -> Uart {
    unsafe { Uart::new(regs.as_mut_ptr() as *const ()) }
}

#[test]
fn display_string_wraps_past_the_last_cell() {
    let mut cells = [0u8; CELL_COUNT];
    let mut display = unsafe { CharacterDisplay::new(cells.as_mut_ptr()) };

    display.put_str(46, "abcd");

    assert_eq!(cells[46], b'a');
    assert_eq!(cells[47], b'b');
    assert_eq!(cells[0], b'c');
    assert_eq!(cells[1], b'd');
}

#[test]
fn display_writes_land_in_their_cells() {
    let mut cells = [0u8; CELL_COUNT];
    let mut display = unsafe { CharacterDisplay::new(cells.as_mut_ptr()) };

    display.put_str(0, "Hei, verden!");
    display.put_digit(16, 7);

    assert_eq!(&cells[..12], b"Hei, verden!");
    assert_eq!(cells[16], b'7');
}

#[test]
fn display_positions_wrap_into_the_grid() {
    let mut cells = [0u8; CELL_COUNT];
    let mut display = unsafe { CharacterDisplay::new(cells.as_mut_ptr()) };

    display.put_glyph(CELL_COUNT, b'*');
    display.put_glyph(CELL_COUNT + 5, b'+');

    assert_eq!(cells[0], b'*');
    assert_eq!(cells[5], b'+');
}

#[test]
fn uart_status_flags_decode() {
    let mut regs = [0u32; 3];
    let uart = uart_over(&mut regs);
    let status = uart.read_status();
    assert!(!status.transmit_busy);
    assert!(!status.receive_ready);

    let mut regs = [0b01u32, 0, 0];
    let uart = uart_over(&mut regs);
    let status = uart.read_status();
    assert!(status.transmit_busy);
    assert!(!status.receive_ready);

    let mut regs = [0b10u32, 0, 0];
    let uart = uart_over(&mut regs);
    let status = uart.read_status();
    assert!(!status.transmit_busy);
    assert!(status.receive_ready);
}

#[test]
fn uart_receive_honours_the_ready_flag() {
    let mut regs = [0u32; 3];
    let uart = uart_over(&mut regs);
    assert!(uart.try_receive().is_err());
    assert!(!uart.receive_ready());

    let mut regs = [0b10u32, 0x41, 0];
    let uart = uart_over(&mut regs);
    assert!(uart.receive_ready());
    assert_eq!(uart.try_receive().ok(), Some(b'A'));
}

#[test]
fn uart_send_honours_the_busy_flag() {
    let mut regs = [0b01u32, 0, 0];
    let uart = uart_over(&mut regs);
    assert!(uart.try_send(b'x').is_err());
    assert_eq!(regs[2], 0);

    let mut regs = [0u32; 3];
    let uart = uart_over(&mut regs);
    assert!(uart.try_send(b'x').is_ok());
    assert_eq!(regs[2], u32::from(b'x'));
}

#[test]
fn uart_writer_pushes_bytes_through_the_data_register() {
    let mut regs = [0u32; 3];
    let mut uart = uart_over(&mut regs);
    ufmt::uwrite!(uart, "ok").unwrap();
    assert_eq!(regs[2], u32::from(b'k'));
}
