//! Receiver and transmitter drivers
//!
//! Each driver composes one core synchronizer with a line half and
//! the transport collaborator, exposing the interrupt-context entry
//! points the firmware wires to its edge source and one-shot timer.

pub mod receiver;
pub mod transmitter;

pub use receiver::Receiver;
pub use transmitter::Transmitter;
