//! Stand-in protocol engine shims
//!
//! The byte-level protocol engine (framing, parity, the command
//! grammar) is a separate layer and attaches here. These shims keep
//! the firmware self-contained without interpreting message content:
//! the receive side collects the fixed bit window that follows a
//! start bit and publishes it raw; the transmit side replays queued
//! raw words bit by bit.

use defmt::*;

use pelorus_core::traits::{LineLevel, Transport};

use crate::channels::WordChannel;

/// Bits collected after the start bit of each character: 8 data bits
/// plus the command bit. The stop bit is not sampled; its bouncy
/// trailing edge is covered by the debounce window.
pub const BITS_PER_WORD: u8 = 9;

/// One raw bit window, LSB-first as sampled off the wire. A high
/// level is stored as a 1 bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawWord {
    /// Sampled bits, LSB first
    pub bits: u16,
    /// Number of valid bits
    pub len: u8,
}

/// Receive shim: assembles [`BITS_PER_WORD`] samples per byte and
/// publishes the result.
pub struct WordCollector {
    bits: u16,
    seen: u8,
    out: &'static WordChannel,
}

impl WordCollector {
    pub fn new(out: &'static WordChannel) -> Self {
        Self {
            bits: 0,
            seen: 0,
            out,
        }
    }
}

impl Transport for WordCollector {
    fn may_begin_byte(&mut self) -> bool {
        self.bits = 0;
        self.seen = 0;
        true
    }

    fn intake_bit(&mut self, level: LineLevel) -> bool {
        if level.is_high() {
            self.bits |= 1 << self.seen;
        }
        self.seen += 1;
        if self.seen < BITS_PER_WORD {
            true
        } else {
            let word = RawWord {
                bits: self.bits,
                len: self.seen,
            };
            // non-blocking: drop the word if the engine is behind
            if self.out.try_send(word).is_err() {
                warn!("rx word channel full, dropping word");
            }
            false
        }
    }

    fn next_outgoing_bit(&mut self) -> (LineLevel, bool) {
        // receive-side shim: keep the bus released
        (LineLevel::High, false)
    }
}

/// Transmit shim: replays queued raw words bit by bit, framing each
/// with a start bit (asserted) and a stop bit (released).
pub struct WordFeeder {
    queue: &'static WordChannel,
    current: Option<RawWord>,
    sent: u8,
}

impl WordFeeder {
    pub fn new(queue: &'static WordChannel) -> Self {
        Self {
            queue,
            current: None,
            sent: 0,
        }
    }
}

impl Transport for WordFeeder {
    fn may_begin_byte(&mut self) -> bool {
        // transmit-side shim: never sources received bytes
        false
    }

    fn intake_bit(&mut self, _level: LineLevel) -> bool {
        false
    }

    fn next_outgoing_bit(&mut self) -> (LineLevel, bool) {
        let word = match self.current {
            Some(word) => word,
            None => match self.queue.try_receive() {
                Ok(word) => {
                    self.sent = 0;
                    self.current = Some(word);
                    word
                }
                // nothing queued: release the bus and go idle
                Err(_) => return (LineLevel::High, false),
            },
        };

        let idx = self.sent;
        self.sent += 1;
        if idx == 0 {
            // start bit asserts the wire
            (LineLevel::Low, true)
        } else if idx <= word.len {
            (LineLevel::from_high(word.bits & (1 << (idx - 1)) != 0), true)
        } else {
            // stop bit releases the bus; the word is done
            self.current = None;
            (LineLevel::High, false)
        }
    }
}
