//! Receive driver
//!
//! Composes the receive synchronizer with a line reader and the
//! transport collaborator. The two entry points correspond to the
//! two interrupt-like callback sources and must be called under
//! mutual exclusion; neither blocks, allocates, or waits.

use pelorus_core::rx::{RxState, RxSynchronizer, RxTick};
use pelorus_core::timing::{BitTiming, TimerCmd};
use pelorus_core::traits::{LineReader, Transport};

/// Receive driver for one bus line.
pub struct Receiver<L, T> {
    line: L,
    transport: T,
    sync: RxSynchronizer,
}

impl<L: LineReader, T: Transport> Receiver<L, T> {
    /// Create an idle receiver.
    pub fn new(line: L, transport: T, timing: BitTiming) -> Self {
        Self {
            line,
            transport,
            sync: RxSynchronizer::new(timing),
        }
    }

    /// Current synchronizer phase.
    pub fn state(&self) -> RxState {
        self.sync.state()
    }

    /// Raw line access; the platform registers its edge source on
    /// the underlying pin.
    pub fn line_mut(&mut self) -> &mut L {
        &mut self.line
    }

    /// Edge callback.
    ///
    /// Consults the debounce guard before any other work; a bounce
    /// or an in-flight byte makes this a pure no-op. Otherwise the
    /// transport is asked whether a byte may begin, and a refusal
    /// also leaves the receiver idle.
    pub fn on_edge(&mut self) -> TimerCmd {
        if !self.sync.edge_is_candidate() {
            return TimerCmd::Keep;
        }
        if self.transport.may_begin_byte() {
            self.sync.start_byte()
        } else {
            TimerCmd::Keep
        }
    }

    /// Timer callback.
    pub fn on_timer(&mut self) -> TimerCmd {
        match self.sync.timer_expired() {
            RxTick::SampleBit => {
                let level = self.line.read_bit();
                let more = self.transport.intake_bit(level);
                self.sync.bit_delivered(more)
            }
            RxTick::GuardReleased => TimerCmd::Stop,
            RxTick::Ignored => TimerCmd::Keep,
        }
    }
}
