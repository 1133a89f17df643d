//! Raw word log task
//!
//! Downstream stand-in for the protocol engine: drains the received
//! raw bit windows and logs them.

use defmt::*;

use crate::channels::RX_WORDS;

/// Word log task - drains and logs received raw words
#[embassy_executor::task]
pub async fn word_log_task() {
    info!("Word log task started");

    loop {
        let word = RX_WORDS.receive().await;
        info!("rx word: {} ({} bits)", word.bits, word.len);
    }
}
