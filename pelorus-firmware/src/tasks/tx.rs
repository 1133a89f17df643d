//! Transmit task
//!
//! Woken by the protocol engine through `TX_BEGIN` with a guard
//! delay in bit periods; emits one bit per period until the
//! transport runs dry. A new `TX_BEGIN` while sending cancels the
//! in-flight schedule and starts over - exactly one transmit timer
//! is ever active.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use embassy_time::{Instant, Timer};

use pelorus_core::config::BusConfig;
use pelorus_core::timing::{BitTiming, TimerCmd};
use pelorus_drivers::bus::Transmitter;
use pelorus_drivers::line::{OutputPin, TxLine};

use crate::channels::{TX_BEGIN, TX_WORDS};
use crate::transport::WordFeeder;

use super::arm_delay;

/// Newtype so the embassy pin can implement the driver pin trait.
pub struct TxdPin(pub Output<'static>);

impl OutputPin for TxdPin {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }
}

/// Transmit task - guard delay and per-bit emission
///
/// The protocol engine queues words on `TX_WORDS`, then signals
/// `TX_BEGIN` with the bus-silence guard it wants.
#[embassy_executor::task]
pub async fn tx_task(txd: Output<'static>, config: BusConfig, timing: BitTiming) {
    info!("Transmit task started");

    let line = TxLine::new(TxdPin(txd), config.logic_inversion);
    let feeder = WordFeeder::new(&TX_WORDS);
    let mut transmitter = Transmitter::new(line, feeder, timing);

    loop {
        let guard_periods = TX_BEGIN.wait().await;
        trace!("transmit begin, guard {} bit periods", guard_periods);

        let mut cmd = transmitter.begin(guard_periods);
        let mut deadline = Instant::now();
        while let TimerCmd::Arm(delay_ns) = cmd {
            deadline += arm_delay(delay_ns);
            cmd = match select(Timer::at(deadline), TX_BEGIN.wait()).await {
                Either::First(()) => transmitter.on_timer(),
                Either::Second(guard) => {
                    // re-begin cancels the pending expiry outright
                    trace!("transmit re-begin, guard {} bit periods", guard);
                    deadline = Instant::now();
                    transmitter.begin(guard)
                }
            };
        }
        trace!("transmitter idle");
    }
}
