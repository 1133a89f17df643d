//! Receive task
//!
//! Provides the two callback sources the receive synchronizer needs:
//! the GPIO edge for start-bit detection and the one-shot bit timer.
//! While a byte is in flight the task sits in the timer loop and
//! never awaits the edge, so mid-byte and bounce edges are dropped
//! by construction as well as by the debounce guard.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Instant, Timer};

use pelorus_core::config::BusConfig;
use pelorus_core::timing::{BitTiming, TimerCmd};
use pelorus_drivers::bus::Receiver;
use pelorus_drivers::line::{InputPin, RxLine};

use crate::channels::RX_WORDS;
use crate::transport::WordCollector;

use super::arm_delay;

/// Newtype so the embassy pin can implement the driver pin trait.
pub struct RxdPin(pub Input<'static>);

impl InputPin for RxdPin {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Wait for the idle-to-active logic transition that may be a start
/// bit. With an inverting level translator that is an electrical
/// rising edge.
async fn wait_start_edge(pin: &mut RxdPin, inverted: bool) {
    if inverted {
        pin.0.wait_for_rising_edge().await;
    } else {
        pin.0.wait_for_falling_edge().await;
    }
}

/// Receive task - edge detection and per-bit sampling
#[embassy_executor::task]
pub async fn rx_task(rxd: Input<'static>, config: BusConfig, timing: BitTiming) {
    info!("Receive task started");

    let inverted = config.logic_inversion;
    let line = RxLine::new(RxdPin(rxd), inverted);
    let transport = WordCollector::new(&RX_WORDS);
    let mut receiver = Receiver::new(line, transport, timing);

    loop {
        wait_start_edge(receiver.line_mut().pin_mut(), inverted).await;

        let mut cmd = receiver.on_edge();
        let mut deadline = Instant::now();
        while let TimerCmd::Arm(delay_ns) = cmd {
            // next deadline fixed before the bit work runs, to bound
            // jitter on slow paths
            deadline += arm_delay(delay_ns);
            Timer::at(deadline).await;
            cmd = receiver.on_timer();
        }
        trace!("receiver idle");
    }
}
