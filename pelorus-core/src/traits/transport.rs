//! Contract with the byte-level protocol engine
//!
//! Byte framing, parity and the command grammar all live above this
//! layer. The synchronizers only ever ask the engine the three
//! questions below; no entity in this crate owns byte or frame
//! contents.

use super::line::LineLevel;

/// The transport/framing collaborator.
///
/// Called from interrupt-like context: implementations must not
/// block, allocate, or wait.
pub trait Transport {
    /// May a new byte begin now?
    ///
    /// Queried by the receive synchronizer on a qualifying start
    /// edge; `false` means the edge is ignored and the receiver
    /// stays idle.
    fn may_begin_byte(&mut self) -> bool;

    /// Take delivery of one sampled bit.
    ///
    /// Returns `true` to expect another bit, `false` when the byte
    /// is complete and the stop condition should be debounced.
    fn intake_bit(&mut self, level: LineLevel) -> bool;

    /// Supply the next outgoing bit.
    ///
    /// The level is written to the wire; the flag reports whether
    /// more bits remain after it.
    fn next_outgoing_bit(&mut self) -> (LineLevel, bool);
}
