//! Driver implementations binding the Pelorus core synchronizers to
//! concrete line hardware
//!
//! Everything here is still board-agnostic and host-testable: the
//! GPIO line types are generic over infallible pin traits, and the
//! receiver/transmitter drivers speak `TimerCmd` to whatever
//! scheduling primitive the firmware provides.

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod line;
