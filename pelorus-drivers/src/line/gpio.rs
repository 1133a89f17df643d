//! GPIO bus line halves
//!
//! The external level translator splits the single bus wire into a
//! receive line and a transmit line, and may invert the electrical
//! sense of either. These types apply the configuration-time
//! polarity mapping so that everything above them deals in logic
//! levels only.

use pelorus_core::traits::{LineLevel, LineReader, LineWriter};

/// Trait for GPIO input pin abstraction
pub trait InputPin {
    /// Check if the pin reads electrically high
    fn is_high(&self) -> bool;
}

/// Trait for GPIO output pin abstraction
pub trait OutputPin {
    /// Set the pin high
    fn set_high(&mut self);

    /// Set the pin low
    fn set_low(&mut self);
}

/// Receive half of the bus line.
pub struct RxLine<P> {
    pin: P,
    /// If true, logic high is electrical low.
    inverted: bool,
}

impl<P: InputPin> RxLine<P> {
    /// Wrap an input pin with the given polarity.
    pub fn new(pin: P, inverted: bool) -> Self {
        Self { pin, inverted }
    }

    /// Access the raw pin, for edge registration by the platform.
    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }
}

impl<P: InputPin> LineReader for RxLine<P> {
    fn read_bit(&mut self) -> LineLevel {
        LineLevel::from_high(self.pin.is_high() != self.inverted)
    }
}

/// Transmit half of the bus line.
pub struct TxLine<P> {
    pin: P,
    /// If true, logic high is electrical low.
    inverted: bool,
}

impl<P: OutputPin> TxLine<P> {
    /// Wrap an output pin with the given polarity and release the
    /// bus (the at-rest level is logic high).
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut line = Self { pin, inverted };
        line.write_bit(LineLevel::High);
        line
    }
}

impl<P: OutputPin> LineWriter for TxLine<P> {
    fn write_bit(&mut self, level: LineLevel) {
        if level.is_high() != self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }
}
