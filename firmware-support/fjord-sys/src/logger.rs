// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use fjord_hal::uart::Uart;

// The logger utilizes core::fmt to format the log messages because ufmt
// formatting is not compatible with (dependencies of) the log crate.
use core::fmt::Write;
use log::LevelFilter;

/// A global logger instance to be used with the `log` crate.
///
/// Use `set_uart` to set the `Uart` instance to be used for logging.
/// # Safety
/// Using this logger is only safe if there is only one thread of execution.
/// Even though `UartLogger` is `Send` and `Sync`, the underlying `Uart` is
/// not `Send` or `Sync`.
pub static mut LOGGER: UartLogger = UartLogger {
    uart: None,
    display_level: LevelFilter::Trace,
};

/// Wrapper for `Uart` to be used as a logger with the `log` crate.
/// Instead of making a new logger, use the `set_uart` method of the
/// `LOGGER` instance.
/// # Safety
/// Using this logger is only safe if there is only one thread of execution.
pub struct UartLogger {
    uart: Option<Uart>,
    pub display_level: LevelFilter,
}

impl UartLogger {
    /// Set the logger to use the given UART.
    /// # Safety
    /// This function assigns the `Uart` instance to a global
    /// (`static mut`), which is only sound with a single thread of
    /// execution.
    pub unsafe fn set_uart(&mut self, uart: Uart) {
        self.uart = Some(uart);
    }
}

impl log::Log for UartLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.display_level
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            unsafe {
                match &mut LOGGER.uart {
                    Some(uart) => {
                        write!(uart, "{} | {}\r\n", record.level(), record.args()).unwrap()
                    }
                    None => panic!("Logger not set"),
                }
            }
        }
    }

    fn flush(&self) {}
}

unsafe impl core::marker::Send for UartLogger {}
unsafe impl core::marker::Sync for UartLogger {}
