//! Pelorus - SeaTalk-style single-wire bus signal layer firmware
//!
//! RP2040 binary that binds the bit synchronization engine to real
//! hardware: a GPIO edge for start-bit detection and the embassy
//! time driver as the one-shot bit timer. Byte framing and the
//! command grammar belong to the protocol engine that attaches
//! through the `transport` shims.
//!
//! The bus wire carries +12V; an external level translator splits it
//! into a 3.3V receive line and a transmit line, and may invert the
//! electrical sense of both. USE AT YOUR OWN RISK: if you fry your
//! hardware it's on you.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use pelorus_core::config::BusConfig;
use pelorus_core::timing::BitTiming;

mod channels;
mod tasks;
mod transport;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Pelorus firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = BusConfig::default();
    let timing = BitTiming::from_config(&config);
    info!(
        "Bus timing: {} bps, bit period {} ns, start sample offset {} ns, debounce {} ns",
        config.bit_rate, timing.bit_period_ns, timing.start_sample_offset_ns, timing.debounce_ns
    );

    // The level translator splits the bus wire into separate receive
    // and transmit lines. Pin assignments are board-specific
    // (GPIO 23 RxD, GPIO 24 TxD on this board); the translator
    // defines the line levels, so no internal pull on the input.
    let rxd = Input::new(p.PIN_23, Pull::None);

    // At-rest electrical level for the transmit pin is the one that
    // releases the bus (logic high through the polarity mapping).
    let idle = if config.logic_inversion {
        Level::Low
    } else {
        Level::High
    };
    let txd = Output::new(p.PIN_24, idle);

    info!("Bus line pins initialized");

    // Spawn tasks
    spawner.spawn(tasks::rx_task(rxd, config, timing)).unwrap();
    spawner.spawn(tasks::tx_task(txd, config, timing)).unwrap();
    spawner.spawn(tasks::word_log_task()).unwrap();

    info!("All tasks spawned, driver running");

    // Main task has nothing else to do - all work happens in the
    // spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
