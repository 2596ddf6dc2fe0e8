#![no_std]
#![cfg_attr(not(test), no_main)]

// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use core::fmt::Write;

use fjord_hal::bus::DirectBus;
use fjord_hal::character_display::CharacterDisplay;
use fjord_hal::uart::Uart;
use fjord_sys::lfsr;
use fjord_sys::logger::LOGGER;
use fjord_sys::memtest::{MemTest, Verdict, WordRange};
use fjord_sys::transcript::Transcript;
use log::{error, info, warn, LevelFilter};
use ufmt::uwriteln;

#[cfg(not(test))]
use riscv_rt::entry;

const DISPLAY_BASE: usize = 0x8000_0000;
const UART_BASE: usize = 0x2000_0000;

// SDRAM under test. The firmware itself sits below 0x1000.
const SDRAM_TEST_START: u32 = 0x0000_1000;
const SDRAM_TEST_END: u32 = 0x0100_0000;

const GREETING_POS: usize = 0;
const DIGIT_POS: usize = 16;
const HEARTBEAT_POS: usize = 20;

/// Busy-wait between animation frames.
fn delay() {
    for i in 0..5_000u32 {
        core::hint::black_box(i);
    }
}

#[cfg_attr(not(test), entry)]
fn main() -> ! {
    let mut uart = unsafe { Uart::new(UART_BASE as *const ()) };
    let mut display = unsafe { CharacterDisplay::new(DISPLAY_BASE as *mut u8) };

    unsafe {
        LOGGER.set_uart(uart.clone());
        // The soft core has no compare-and-swap, so the non-racy
        // installer is unavailable; a single hart makes this sound.
        let _ = log::set_logger_racy(&LOGGER);
    }
    log::set_max_level(LevelFilter::Info);

    display.put_str(GREETING_POS, "Hei, verden!");
    uwriteln!(uart, "Hello, world!").unwrap();

    let range = match WordRange::new(SDRAM_TEST_START, SDRAM_TEST_END) {
        Ok(range) => range,
        Err(_) => {
            error!("SDRAM test bounds are invalid");
            loop {
                continue;
            }
        }
    };

    let bus = unsafe { DirectBus::new() };
    let mut memtest = MemTest::new(bus, lfsr::DEFAULT_SEED);
    let mut transcript = Transcript::new(uart.clone());
    let verdict = memtest.run(range, &mut transcript).unwrap();

    match verdict {
        Verdict::Pass => info!("memtest passed"),
        Verdict::EmptyRange => warn!("memtest skipped, empty range"),
        Verdict::Fail(mismatch) => warn!("memtest failed at {:#010x}", mismatch.addr),
    }

    let mut digit: u8 = 0;
    loop {
        if let Ok(byte) = uart.try_receive() {
            uart.send(byte);
        }

        display.put_str(HEARTBEAT_POS, "^^/");
        delay();

        display.put_str(HEARTBEAT_POS, "^^|");
        delay();

        display.put_digit(DIGIT_POS, digit);
        digit = (digit + 1) % 10;
    }
}

#[panic_handler]
fn panic_handler(info: &core::panic::PanicInfo) -> ! {
    let mut uart = unsafe { Uart::new(UART_BASE as *const ()) };
    _ = writeln!(uart, "PANIC: {}", info);
    loop {
        continue;
    }
}
