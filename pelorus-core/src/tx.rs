//! Transmit synchronizer
//!
//! Emits one bit per period for as long as the transport reports
//! more bits pending, then goes idle. [`TxSynchronizer::begin`]
//! takes a guard delay in whole bit periods so a device can insert
//! bus silence before asserting, which reduces collision probability
//! with other transmitters on the shared wire.

use crate::timing::{BitTiming, TimerCmd};

/// Transmit synchronizer phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxState {
    /// Fully passive; no line writes until the next `begin`.
    Idle,
    /// Emitting one bit per period.
    Sending,
}

/// What the driver must do when the transmit timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxTick {
    /// Fetch one bit from the transport, report the verdict through
    /// [`TxSynchronizer::bit_fetched`], and write the bit.
    EmitBit,
    /// Stale expiry with no work attached.
    Ignored,
}

/// Transmit-side state machine for one bus line.
#[derive(Debug, Clone)]
pub struct TxSynchronizer {
    state: TxState,
    timing: BitTiming,
}

impl TxSynchronizer {
    /// Create an idle synchronizer with nothing scheduled.
    pub fn new(timing: BitTiming) -> Self {
        Self {
            state: TxState::Idle,
            timing,
        }
    }

    /// Current phase.
    pub fn state(&self) -> TxState {
        self.state
    }

    /// Wake the transmitter.
    ///
    /// Callable at any time, including while already sending: the
    /// returned `Arm` replaces any in-flight schedule, so exactly
    /// one transmit timer is ever active. The first bit is emitted
    /// no earlier than `bit_period * guard_delay_periods` from now.
    pub fn begin(&mut self, guard_delay_periods: u32) -> TimerCmd {
        self.state = TxState::Sending;
        TimerCmd::Arm(self.timing.guard_delay_ns(guard_delay_periods))
    }

    /// Timer expiry.
    pub fn timer_expired(&self) -> TxTick {
        match self.state {
            TxState::Sending => TxTick::EmitBit,
            TxState::Idle => TxTick::Ignored,
        }
    }

    /// Report whether more bits remain after the one just fetched.
    ///
    /// Completion is checked before re-arming: when the byte is
    /// finished the timer is cancelled outright instead of firing
    /// once more for nothing. The driver schedules the returned
    /// `Arm` before doing the line write, to bound jitter on slow
    /// callback paths.
    pub fn bit_fetched(&mut self, more_pending: bool) -> TimerCmd {
        if more_pending {
            TimerCmd::Arm(self.timing.bit_period_ns)
        } else {
            self.state = TxState::Idle;
            TimerCmd::Stop
        }
    }

    /// Force the transmitter idle. A no-op when already idle.
    pub fn stop(&mut self) -> TimerCmd {
        match self.state {
            TxState::Idle => TimerCmd::Keep,
            TxState::Sending => {
                self.state = TxState::Idle;
                TimerCmd::Stop
            }
        }
    }
}
