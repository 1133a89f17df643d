//! Board-agnostic bit synchronization engine for the Pelorus marine
//! bus driver
//!
//! A SeaTalk-style bus shares a single open-drain wire among every
//! device, with no clock line. This crate contains the logic that
//! keeps a receiver and a transmitter phase-locked to that wire:
//!
//! - Timing constants derived from the bus bit rate
//! - The debounce guard that swallows stop-edge signal bounce
//! - The receive synchronizer (start-bit detection, per-bit sampling)
//! - The transmit synchronizer (guard delay, per-bit emission)
//! - Seam traits for the line hardware and for the byte-level
//!   protocol engine sitting above this layer
//!
//! Everything here is a pure state machine driven by two external
//! callback sources, an edge notification and a one-shot timer; the
//! concrete scheduling primitive lives in the firmware crate.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod debounce;
pub mod rx;
pub mod timing;
pub mod traits;
pub mod tx;
