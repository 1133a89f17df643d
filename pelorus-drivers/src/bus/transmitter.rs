//! Transmit driver
//!
//! Composes the transmit synchronizer with a line writer and the
//! transport collaborator. Driven solely by the one-shot timer;
//! `begin` is the only external entry point and the only
//! cancellation primitive.

use pelorus_core::timing::{BitTiming, TimerCmd};
use pelorus_core::traits::{LineWriter, Transport};
use pelorus_core::tx::{TxState, TxSynchronizer, TxTick};

/// Transmit driver for one bus line.
pub struct Transmitter<L, T> {
    line: L,
    transport: T,
    sync: TxSynchronizer,
}

impl<L: LineWriter, T: Transport> Transmitter<L, T> {
    /// Create an idle transmitter.
    pub fn new(line: L, transport: T, timing: BitTiming) -> Self {
        Self {
            line,
            transport,
            sync: TxSynchronizer::new(timing),
        }
    }

    /// Current synchronizer phase.
    pub fn state(&self) -> TxState {
        self.sync.state()
    }

    /// Wake the transmitter with a bus-silence guard delay in whole
    /// bit periods.
    ///
    /// The returned `Arm` replaces any in-flight schedule: the
    /// executor must cancel the pending expiry before re-arming, so
    /// exactly one transmit timer is ever active.
    pub fn begin(&mut self, guard_delay_periods: u32) -> TimerCmd {
        self.sync.begin(guard_delay_periods)
    }

    /// Timer callback.
    pub fn on_timer(&mut self) -> TimerCmd {
        match self.sync.timer_expired() {
            TxTick::EmitBit => {
                let (level, more) = self.transport.next_outgoing_bit();
                // completion decided (and the next period scheduled)
                // before the line write runs
                let cmd = self.sync.bit_fetched(more);
                self.line.write_bit(level);
                cmd
            }
            TxTick::Ignored => TimerCmd::Keep,
        }
    }

    /// Force the transmitter idle. A no-op when already idle.
    pub fn stop(&mut self) -> TimerCmd {
        self.sync.stop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;
    use pelorus_core::traits::LineLevel;

    /// Line writer recording every driven level.
    struct RecordingLine {
        written: Vec<LineLevel, 32>,
    }

    impl RecordingLine {
        fn new() -> Self {
            Self {
                written: Vec::new(),
            }
        }
    }

    impl LineWriter for RecordingLine {
        fn write_bit(&mut self, level: LineLevel) {
            self.written.push(level).unwrap();
        }
    }

    /// Transport replaying a fixed outgoing bit pattern.
    struct PatternTransport {
        pattern: Vec<LineLevel, 32>,
        next: usize,
    }

    impl PatternTransport {
        fn new(pattern: &[LineLevel]) -> Self {
            Self {
                pattern: Vec::from_slice(pattern).unwrap(),
                next: 0,
            }
        }
    }

    impl Transport for PatternTransport {
        fn may_begin_byte(&mut self) -> bool {
            false
        }

        fn intake_bit(&mut self, _level: LineLevel) -> bool {
            false
        }

        fn next_outgoing_bit(&mut self) -> (LineLevel, bool) {
            let level = self.pattern[self.next];
            self.next += 1;
            (level, self.next < self.pattern.len())
        }
    }

    const BIT: u64 = 208_333;

    fn timing() -> BitTiming {
        BitTiming::from_bit_rate(4800)
    }

    /// Run the timer loop to completion, returning the absolute
    /// write times (ns after `begin`).
    fn run_timers<L: LineWriter, T: Transport>(
        tx: &mut Transmitter<L, T>,
        mut cmd: TimerCmd,
    ) -> Vec<u64, 32> {
        let mut now = 0u64;
        let mut fired = Vec::new();
        while let TimerCmd::Arm(delay) = cmd {
            now += delay;
            fired.push(now).unwrap();
            cmd = tx.on_timer();
        }
        assert_eq!(cmd, TimerCmd::Stop);
        fired
    }

    #[test]
    fn test_guard_delay_precedes_first_write() {
        use LineLevel::{High, Low};
        let pattern = [Low, High, Low, Low, High];
        let mut tx = Transmitter::new(RecordingLine::new(), PatternTransport::new(&pattern), timing());

        let cmd = tx.begin(3);
        assert_eq!(cmd, TimerCmd::Arm(3 * BIT));

        let fired = run_timers(&mut tx, cmd);
        // first bit exactly at the guard boundary, one per period after
        assert_eq!(fired[0], 3 * BIT);
        for (i, t) in fired.iter().enumerate() {
            assert_eq!(*t, 3 * BIT + i as u64 * BIT);
        }
        assert_eq!(fired.len(), pattern.len());
        assert_eq!(tx.line.written[..], pattern);
        assert_eq!(tx.state(), TxState::Idle);
    }

    #[test]
    fn test_no_firing_after_last_bit() {
        let mut tx = Transmitter::new(
            RecordingLine::new(),
            PatternTransport::new(&[LineLevel::Low]),
            timing(),
        );
        let cmd = tx.begin(0);
        run_timers(&mut tx, cmd);
        assert_eq!(tx.line.written.len(), 1);
        // a stale expiry after completion does no work
        assert_eq!(tx.on_timer(), TimerCmd::Keep);
        assert_eq!(tx.line.written.len(), 1);
    }

    #[test]
    fn test_begin_while_sending_discards_old_schedule() {
        use LineLevel::{High, Low};
        let mut tx = Transmitter::new(
            RecordingLine::new(),
            PatternTransport::new(&[Low, High, Low, High]),
            timing(),
        );

        let cmd = tx.begin(1);
        assert_eq!(cmd, TimerCmd::Arm(BIT));
        assert_eq!(tx.on_timer(), TimerCmd::Arm(BIT));
        assert_eq!(tx.line.written.len(), 1);

        // re-begin mid-byte: the pending expiry is replaced, and the
        // next write happens on the new schedule only
        let cmd = tx.begin(5);
        assert_eq!(cmd, TimerCmd::Arm(5 * BIT));
        let fired = run_timers(&mut tx, cmd);
        assert_eq!(fired[0], 5 * BIT);
        assert_eq!(tx.line.written.len(), 4);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut tx = Transmitter::new(
            RecordingLine::new(),
            PatternTransport::new(&[LineLevel::Low]),
            timing(),
        );
        assert_eq!(tx.stop(), TimerCmd::Keep);
        tx.begin(1);
        assert_eq!(tx.stop(), TimerCmd::Stop);
        assert_eq!(tx.stop(), TimerCmd::Keep);
        // stopped transmitter writes nothing on a stale expiry
        assert_eq!(tx.on_timer(), TimerCmd::Keep);
        assert!(tx.line.written.is_empty());
    }
}
