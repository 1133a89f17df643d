//! Bus timing constants
//!
//! Every interval is derived from one configuration value, the bus
//! bit rate. The debounce window is the exception: it is an
//! empirically chosen settle time for edge bounce and does not scale
//! with the bit rate.

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Default bus bit rate in bits/second (SeaTalk runs at 4800).
pub const DEFAULT_BIT_RATE: u32 = 4800;

/// Default debounce window in nanoseconds.
pub const DEFAULT_DEBOUNCE_NANOS: u64 = 60_000;

/// Command for the host one-shot timer, produced by synchronizer
/// transitions.
///
/// The core never owns a timer. Whatever does (an hrtimer, an
/// embassy `Timer`, a test harness) executes these commands against
/// its own scheduling primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerCmd {
    /// (Re)arm the one-shot to fire this many nanoseconds from now,
    /// replacing any pending expiry.
    Arm(u64),
    /// Cancel the timer; nothing further is scheduled.
    Stop,
    /// Leave the timer exactly as it is.
    Keep,
}

/// Derived timing for one bus line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitTiming {
    /// One bit cell on the wire, in nanoseconds.
    pub bit_period_ns: u64,
    /// Offset into a bit cell at which the level is sampled, giving
    /// slow logic transitions time to settle.
    pub start_sample_offset_ns: u64,
    /// Quiet period after the last bit of a byte during which edge
    /// events are ignored.
    pub debounce_ns: u64,
}

impl BitTiming {
    /// Derive timing from a bit rate in bits/second.
    pub fn from_bit_rate(bit_rate: u32) -> Self {
        let bit_period_ns = NANOS_PER_SEC / bit_rate as u64;
        Self {
            bit_period_ns,
            start_sample_offset_ns: bit_period_ns / 4,
            debounce_ns: DEFAULT_DEBOUNCE_NANOS,
        }
    }

    /// Derive timing from the full bus configuration.
    pub fn from_config(config: &crate::config::BusConfig) -> Self {
        let mut timing = Self::from_bit_rate(config.bit_rate);
        timing.debounce_ns = config.debounce_window_nanos;
        timing
    }

    /// Delay from the start-bit edge to the first data-bit sample:
    /// one full period plus the settling offset, so the sample lands
    /// inside the bit cell rather than on its leading edge.
    pub fn first_sample_delay_ns(&self) -> u64 {
        self.bit_period_ns + self.start_sample_offset_ns
    }

    /// Bus-silence guard before a transmission asserts the wire,
    /// expressed in whole bit periods.
    pub fn guard_delay_ns(&self, periods: u32) -> u64 {
        self.bit_period_ns * periods as u64
    }
}

impl Default for BitTiming {
    fn default() -> Self {
        Self::from_bit_rate(DEFAULT_BIT_RATE)
    }
}
