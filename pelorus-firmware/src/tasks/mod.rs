//! Embassy async tasks
//!
//! One task per synchronizer. A task is single-threaded and
//! alternates between its edge and timer await points, which
//! provides the edge/timer mutual exclusion the shared synchronizer
//! state requires.

use embassy_time::Duration;

pub mod rx;
pub mod tx;
pub mod words;

pub use rx::rx_task;
pub use tx::tx_task;
pub use words::word_log_task;

/// Convert a `TimerCmd::Arm` delay to an embassy duration.
///
/// The time driver ticks at 1 MHz, so deadlines are scheduled in
/// whole microseconds; the sub-microsecond remainder is far inside
/// the bus jitter tolerance.
pub(crate) fn arm_delay(delay_ns: u64) -> Duration {
    Duration::from_micros(delay_ns / 1_000)
}
