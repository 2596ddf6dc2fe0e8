// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

pub struct UartStatus {
    pub transmit_busy: bool,
    pub receive_ready: bool,
}

pub struct TransmitBusy;
pub struct NothingReceived;

/// `Uart` is the register block of the SoC's serial port.
///
/// The control register sits at offset 0 (bit 0: transmitter busy,
/// bit 1: a received byte is waiting), received data at offset 4 and
/// transmit data at offset 8. All registers are word wide; the data
/// registers carry one byte in their low bits.
#[derive(Clone)]
pub struct Uart {
    control_addr: *const u32,
    data_read_addr: *const u32,
    data_write_addr: *mut u32,
}

impl Uart {
    /// Create a new [`Uart`] instance given a base address.
    ///
    /// # Safety
    ///
    /// The `base_addr` pointer MUST BE a valid pointer that is backed
    /// by a memory mapped UART instance.
    pub const unsafe fn new(base_addr: *const ()) -> Uart {
        let addr = base_addr as *const u32;
        Uart {
            control_addr: addr,
            data_read_addr: addr.add(1),
            data_write_addr: addr.add(2).cast_mut(),
        }
    }

    /// UART status register output
    pub fn read_status(&self) -> UartStatus {
        let flags: u32 = unsafe { self.control_addr.read_volatile() };

        let tx_mask = 0b01;
        let tx_busy = flags & tx_mask;

        let rx_mask = 0b10;
        let rx_ready = flags & rx_mask;

        UartStatus {
            transmit_busy: tx_busy != 0,
            receive_ready: rx_ready != 0,
        }
    }

    /// Whether a received byte is waiting in the data register.
    pub fn receive_ready(&self) -> bool {
        self.read_status().receive_ready
    }

    /// The `receive` function attempts to receive data from the UART. If no
    /// data is available, it keeps looping until data is available.
    pub fn receive(&self) -> u8 {
        loop {
            if let Ok(val) = self.try_receive() {
                return val;
            }
        }
    }

    /// The `try_receive` function attempts to receive data from the UART. If
    /// no data is available, it returns an error.
    pub fn try_receive(&self) -> Result<u8, NothingReceived> {
        if !self.read_status().receive_ready {
            Err(NothingReceived)
        } else {
            let data: u32 = unsafe { self.data_read_addr.read_volatile() };
            Ok(data as u8)
        }
    }

    /// The `send` function sends the given data to the UART. If the UART is
    /// unable to accept the data, it keeps looping until it can send the data.
    pub fn send(&self, data: u8) {
        loop {
            if let Ok(()) = self.try_send(data) {
                return;
            }
        }
    }

    /// The `try_send` function attempts to send the given data to the UART. If
    /// the UART is unable to accept the data, it returns an error.
    pub fn try_send(&self, data: u8) -> Result<(), TransmitBusy> {
        if self.read_status().transmit_busy {
            Err(TransmitBusy)
        } else {
            unsafe {
                self.data_write_addr.write_volatile(data as u32);
            }
            Ok(())
        }
    }
}

impl ufmt::uWrite for Uart {
    type Error = ();

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for b in s.bytes() {
            self.send(b);
        }
        Ok(())
    }
}

impl core::fmt::Write for Uart {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for b in s.bytes() {
            self.send(b);
        }
        Ok(())
    }
}
