//! Receive synchronizer
//!
//! State machine that locks onto a byte from its start-bit edge and
//! then samples one bit per period until the transport reports the
//! byte complete. All transitions are pure functions of the current
//! state and the event; the firmware owns the edge source and the
//! one-shot timer and executes the returned [`TimerCmd`]s.
//!
//! The edge callback and the timer callback run in mutually
//! exclusive interrupt-like contexts. The edge path must mask
//! re-entrant edges for its short critical section so the guard
//! check cannot race a concurrently firing timer callback.

use crate::debounce::DebounceGuard;
use crate::timing::{BitTiming, TimerCmd};

/// Receive synchronizer phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxState {
    /// No timer armed; the edge detector is live (unless the guard
    /// is armed).
    Idle,
    /// Start edge accepted; waiting one period plus the settling
    /// offset before the first data-bit sample.
    AwaitingFirstBit,
    /// Sampling one bit per period.
    Sampling,
    /// Byte complete; swallowing stop-edge bounce until the quiet
    /// window expires.
    Debouncing,
}

/// What the driver must do when the receive timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxTick {
    /// Sample the line, deliver the bit to the transport, then
    /// report the verdict through [`RxSynchronizer::bit_delivered`].
    SampleBit,
    /// The quiet window closed; the guard was released and the
    /// receiver is idle again.
    GuardReleased,
    /// Stale expiry with no work attached.
    Ignored,
}

/// Receive-side state machine for one bus line.
#[derive(Debug, Clone)]
pub struct RxSynchronizer {
    state: RxState,
    guard: DebounceGuard,
    timing: BitTiming,
}

impl RxSynchronizer {
    /// Create an idle synchronizer with nothing scheduled.
    pub fn new(timing: BitTiming) -> Self {
        Self {
            state: RxState::Idle,
            guard: DebounceGuard::new(),
            timing,
        }
    }

    /// Current phase.
    pub fn state(&self) -> RxState {
        self.state
    }

    /// Whether the debounce guard is armed.
    pub fn guard_armed(&self) -> bool {
        self.guard.is_armed()
    }

    /// Edge callback, first half: is this edge a candidate start
    /// bit?
    ///
    /// `false` while the guard is armed (stop-edge bounce) and while
    /// a byte is in flight - once sampling has begun the receiver is
    /// committed to timer-driven sampling and edges are ignored.
    /// Only when this returns `true` may the transport be asked
    /// whether a byte may begin.
    pub fn edge_is_candidate(&self) -> bool {
        matches!(self.state, RxState::Idle) && !self.guard.is_armed()
    }

    /// Edge callback, second half: the transport accepted the byte.
    ///
    /// Arms the timer for one full period plus the settling offset,
    /// so the first sample lands inside the first data-bit cell
    /// rather than on its leading edge.
    pub fn start_byte(&mut self) -> TimerCmd {
        self.state = RxState::AwaitingFirstBit;
        TimerCmd::Arm(self.timing.first_sample_delay_ns())
    }

    /// Timer expiry.
    pub fn timer_expired(&mut self) -> RxTick {
        match self.state {
            RxState::Debouncing => {
                // end of the quiet window; the timer is not restarted
                self.guard.disarm();
                self.state = RxState::Idle;
                RxTick::GuardReleased
            }
            RxState::AwaitingFirstBit | RxState::Sampling => {
                self.state = RxState::Sampling;
                RxTick::SampleBit
            }
            RxState::Idle => RxTick::Ignored,
        }
    }

    /// Report the transport's verdict on the bit just delivered.
    ///
    /// `more_expected` keeps the per-period sampling loop running.
    /// Otherwise the byte is done: the guard arms at this instant
    /// and the same timer is reused for the debounce window.
    pub fn bit_delivered(&mut self, more_expected: bool) -> TimerCmd {
        if more_expected {
            TimerCmd::Arm(self.timing.bit_period_ns)
        } else {
            self.guard.arm();
            self.state = RxState::Debouncing;
            TimerCmd::Arm(self.timing.debounce_ns)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sync() -> RxSynchronizer {
        RxSynchronizer::new(BitTiming::from_bit_rate(4800))
    }

    /// Drive a full byte of `n` bits through the machine, returning
    /// the timer delays that were armed along the way.
    fn run_byte(sync: &mut RxSynchronizer, n: usize) -> [u64; 16] {
        let mut delays = [0u64; 16];
        let mut i = 0;

        let TimerCmd::Arm(d) = sync.start_byte() else {
            panic!("start_byte must arm the timer");
        };
        delays[i] = d;
        i += 1;

        for bit in 0..n {
            assert_eq!(sync.timer_expired(), RxTick::SampleBit);
            let more = bit + 1 < n;
            let TimerCmd::Arm(d) = sync.bit_delivered(more) else {
                panic!("bit_delivered must arm the timer");
            };
            delays[i] = d;
            i += 1;
        }
        delays
    }

    #[test]
    fn test_idle_edge_is_candidate() {
        let sync = sync();
        assert_eq!(sync.state(), RxState::Idle);
        assert!(sync.edge_is_candidate());
    }

    #[test]
    fn test_first_sample_lands_inside_bit_cell() {
        let mut sync = sync();
        assert_eq!(sync.start_byte(), TimerCmd::Arm(260_416));
        assert_eq!(sync.state(), RxState::AwaitingFirstBit);
    }

    #[test]
    fn test_three_bit_byte_sequence() {
        // intake_bit answering true, true, false: three samples, one
        // bit period apart, then the guard arms for the quiet window
        let mut sync = sync();
        let delays = run_byte(&mut sync, 3);
        assert_eq!(delays[0], 260_416);
        assert_eq!(delays[1], 208_333);
        assert_eq!(delays[2], 208_333);
        assert_eq!(delays[3], 60_000);
        assert_eq!(sync.state(), RxState::Debouncing);
        assert!(sync.guard_armed());

        // quiet window expires: guard released, timer left disarmed
        assert_eq!(sync.timer_expired(), RxTick::GuardReleased);
        assert!(!sync.guard_armed());
        assert_eq!(sync.state(), RxState::Idle);
    }

    #[test]
    fn test_edges_ignored_while_byte_in_flight() {
        let mut sync = sync();
        sync.start_byte();
        assert!(!sync.edge_is_candidate());

        sync.timer_expired();
        assert_eq!(sync.state(), RxState::Sampling);
        assert!(!sync.edge_is_candidate());
    }

    #[test]
    fn test_edges_ignored_while_guard_armed() {
        let mut sync = sync();
        run_byte(&mut sync, 1);
        assert!(sync.guard_armed());

        // any number of bounce edges leaves the state untouched
        for _ in 0..100 {
            assert!(!sync.edge_is_candidate());
            assert_eq!(sync.state(), RxState::Debouncing);
            assert!(sync.guard_armed());
        }
    }

    #[test]
    fn test_guard_arms_exactly_once_per_byte() {
        let mut sync = sync();
        sync.start_byte();
        sync.timer_expired();
        assert!(!sync.guard_armed());
        sync.bit_delivered(true);
        sync.timer_expired();
        assert!(!sync.guard_armed());
        sync.bit_delivered(false);
        assert!(sync.guard_armed());
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let mut sync = sync();
        assert_eq!(sync.timer_expired(), RxTick::Ignored);
        assert_eq!(sync.state(), RxState::Idle);
    }

    #[test]
    fn test_back_to_back_bytes() {
        let mut sync = sync();
        run_byte(&mut sync, 9);
        sync.timer_expired();
        assert!(sync.edge_is_candidate());
        // second byte starts clean
        let delays = run_byte(&mut sync, 9);
        assert_eq!(delays[0], 260_416);
    }
}
