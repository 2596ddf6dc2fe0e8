#![no_std]
#![no_main]

// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

extern crate panic_halt;

use fjord_hal::character_display::CharacterDisplay;
use fjord_hal::uart::Uart;
use riscv_rt::entry;
use ufmt::uwriteln;

const DISPLAY_BASE: usize = 0x8000_0000;
const UART_BASE: usize = 0x2000_0000;

#[entry]
fn main() -> ! {
    let mut uart = unsafe { Uart::new(UART_BASE as *const ()) };
    let mut display = unsafe { CharacterDisplay::new(DISPLAY_BASE as *mut u8) };

    display.put_str(0, "Hei, verden!");
    uwriteln!(uart, "Hello from Rust!").unwrap();

    loop {
        let byte = uart.receive();
        uart.send(byte);
    }
}
