//! Line interface implementations

pub mod gpio;

pub use gpio::{InputPin, OutputPin, RxLine, TxLine};
