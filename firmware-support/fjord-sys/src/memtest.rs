// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

//! Pseudo-random fill-and-verify test for the SDRAM.
//!
//! The write pass stores `lfsr ^ address` into every word of the range,
//! tying each word's expected value to its own address so stuck bits
//! and address-decoding faults show up, not just retention faults. The
//! verify pass re-seeds the generator, recomputes the sequence and
//! stops at the first mismatch.

use fjord_hal::bus::WordBus;
use ufmt::uWrite;

use crate::lfsr::Lfsr32;
use crate::transcript::Transcript;

/// Half-open `[start, end)` interval of byte addresses, word aligned.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WordRange {
    start: u32,
    end: u32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RangeError {
    /// A bound is not on a 4-byte boundary.
    Misaligned,
    /// `end` lies before `start`.
    Backwards,
}

impl WordRange {
    pub fn new(start: u32, end: u32) -> Result<WordRange, RangeError> {
        if start % 4 != 0 || end % 4 != 0 {
            return Err(RangeError::Misaligned);
        }
        if end < start {
            return Err(RangeError::Backwards);
        }
        Ok(WordRange { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of 32-bit words in the interval.
    pub fn word_count(&self) -> u32 {
        (self.end - self.start) / 4
    }

    fn addresses(&self) -> impl Iterator<Item = u32> {
        (self.start..self.end).step_by(4)
    }
}

/// First mismatching word found by the verify pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Mismatch {
    pub addr: u32,
    pub actual: u32,
    pub expected: u32,
}

/// Outcome of one memory test invocation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Verdict {
    Pass,
    EmptyRange,
    Fail(Mismatch),
}

/// Whole-percent progress over a fixed number of words, division-free.
///
/// Each processed word deposits 100 into the accumulator; each drain of
/// `total_words` from it is exactly one percentage point. Draining in a
/// loop keeps percent moving for ranges smaller than 100 words, so it
/// reaches exactly 100 at the end of every pass. Percent never moves
/// backwards and stops at 100.
struct Progress {
    total_words: u32,
    acc: u32,
    percent: u32,
}

impl Progress {
    fn new(total_words: u32) -> Progress {
        Progress {
            total_words,
            acc: 0,
            percent: 0,
        }
    }

    /// Account one processed word.
    fn step(&mut self) {
        self.acc += 100;
    }

    /// The next percentage point that became due, if any.
    fn due(&mut self) -> Option<u32> {
        if self.acc >= self.total_words && self.percent < 100 {
            self.acc -= self.total_words;
            self.percent += 1;
            Some(self.percent)
        } else {
            None
        }
    }
}

/// The fill-and-verify engine.
///
/// One [`run`](MemTest::run) owns the bus range and the transcript
/// until it returns; the verdict comes back to the caller, and deciding
/// what to do about a failure is the caller's business.
pub struct MemTest<B> {
    bus: B,
    seed: u32,
}

impl<B: WordBus> MemTest<B> {
    pub fn new(bus: B, seed: u32) -> MemTest<B> {
        MemTest { bus, seed }
    }

    /// Fill `range` with the pseudo-random pattern, then read it back.
    ///
    /// Blocks until both passes finish or the first mismatch stops the
    /// verify pass. Progress and the final verdict go out through
    /// `transcript`.
    pub fn run<W: uWrite>(
        &mut self,
        range: WordRange,
        transcript: &mut Transcript<W>,
    ) -> Result<Verdict, W::Error> {
        let total_words = range.word_count();
        if total_words == 0 {
            transcript.line("memtest: empty range")?;
            return Ok(Verdict::EmptyRange);
        }

        transcript.line("memtest: write...")?;
        let mut pattern = Lfsr32::new(self.seed);
        let mut progress = Progress::new(total_words);
        for addr in range.addresses() {
            self.bus.write_word(addr, pattern.next_word() ^ addr);
            progress.step();
            while let Some(percent) = progress.due() {
                report_percent(transcript, percent)?;
            }
        }

        transcript.line("memtest: verify...")?;
        let mut pattern = Lfsr32::new(self.seed);
        let mut progress = Progress::new(total_words);
        for addr in range.addresses() {
            let expected = pattern.next_word() ^ addr;
            let actual = self.bus.read_word(addr);
            if actual != expected {
                let mismatch = Mismatch {
                    addr,
                    actual,
                    expected,
                };
                report_mismatch(transcript, &mismatch)?;
                return Ok(Verdict::Fail(mismatch));
            }
            progress.step();
            while let Some(percent) = progress.due() {
                report_percent(transcript, percent)?;
            }
        }

        transcript.line("memtest: PASS")?;
        Ok(Verdict::Pass)
    }
}

fn report_percent<W: uWrite>(
    transcript: &mut Transcript<W>,
    percent: u32,
) -> Result<(), W::Error> {
    transcript.text("memtest: ")?;
    transcript.percent(percent)?;
    transcript.line("%")
}

fn report_mismatch<W: uWrite>(
    transcript: &mut Transcript<W>,
    mismatch: &Mismatch,
) -> Result<(), W::Error> {
    transcript.line("memtest: FAIL")?;
    transcript.text("addr: 0x")?;
    transcript.hex_u32(mismatch.addr)?;
    transcript.text(" read: 0x")?;
    transcript.hex_u32(mismatch.actual)?;
    transcript.text(" expect: 0x")?;
    transcript.hex_u32(mismatch.expected)?;
    transcript.line("")
}
