// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use ufmt::uWrite;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// The firmware's diagnostic text channel.
///
/// Wraps a blocking byte writer and renders the three message shapes
/// the firmware emits: literal text, 32-bit words as fixed-width hex
/// and progress percentages as short decimals. Writes complete in
/// order; backpressure is the writer's busy-wait.
pub struct Transcript<W> {
    writer: W,
}

impl<W: uWrite> Transcript<W> {
    pub fn new(writer: W) -> Transcript<W> {
        Transcript { writer }
    }

    /// Hand the underlying writer back.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write `s` as-is.
    pub fn text(&mut self, s: &str) -> Result<(), W::Error> {
        self.writer.write_str(s)
    }

    /// Write `s` terminated with CRLF.
    pub fn line(&mut self, s: &str) -> Result<(), W::Error> {
        self.writer.write_str(s)?;
        self.writer.write_str("\r\n")
    }

    /// Write `value` as exactly eight lowercase hex digits, most
    /// significant nibble first.
    pub fn hex_u32(&mut self, value: u32) -> Result<(), W::Error> {
        let mut shift = 32;
        while shift != 0 {
            shift -= 4;
            let nibble = (value >> shift) & 0xF;
            self.writer.write_char(HEX_DIGITS[nibble as usize] as char)?;
        }
        Ok(())
    }

    /// Write an unsigned percentage as one to three decimal digits.
    ///
    /// Values of 100 or more come out as the literal `100`. This is a
    /// progress formatter, not a general decimal formatter; it trades
    /// precision above 100 for a division-free body.
    pub fn percent(&mut self, value: u32) -> Result<(), W::Error> {
        if value >= 100 {
            return self.text("100");
        }
        let mut tens = 0u8;
        let mut ones = value as u8;
        while ones >= 10 {
            ones -= 10;
            tens += 1;
        }
        if tens != 0 {
            self.writer.write_char((b'0' + tens) as char)?;
        }
        self.writer.write_char((b'0' + ones) as char)
    }
}
