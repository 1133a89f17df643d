//! Inter-task communication channels
//!
//! Defines the static channels used for communication between
//! Embassy tasks. Uses embassy-sync primitives for safe async
//! communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use crate::transport::RawWord;

/// Channel capacity for raw words in either direction
const WORD_CHANNEL_SIZE: usize = 8;

/// Channel of raw bit windows, in either direction
pub type WordChannel = Channel<CriticalSectionRawMutex, RawWord, WORD_CHANNEL_SIZE>;

/// Raw bit windows assembled by the receive shim, for the protocol
/// engine (and the log task) to consume
pub static RX_WORDS: WordChannel = Channel::new();

/// Outgoing raw words queued for the transmit shim
pub static TX_WORDS: WordChannel = Channel::new();

/// Wake-up for the transmitter: guard delay in whole bit periods of
/// bus silence to insert before asserting the wire
pub static TX_BEGIN: Signal<CriticalSectionRawMutex, u32> = Signal::new();
