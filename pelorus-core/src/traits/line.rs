//! Bus line level and access traits
//!
//! Values here are *logic* levels: any electrical inversion done by
//! the external level translator is normalized away inside the line
//! implementation, so the synchronizers never reference polarity.

/// Instantaneous logic level of the bus wire.
///
/// The wire is pulled high when no device asserts it; a device
/// transmits by pulling it low. The level carries no history - the
/// synchronizers interpret history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineLevel {
    /// Asserted (a device is pulling the wire down).
    Low,
    /// Idle / released.
    High,
}

impl LineLevel {
    /// Logic level from a boolean where `true` means high.
    pub fn from_high(high: bool) -> Self {
        if high {
            Self::High
        } else {
            Self::Low
        }
    }

    /// Whether this is the idle (high) level.
    pub fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

/// Read side of the line interface.
pub trait LineReader {
    /// Sample the wire instantaneously.
    ///
    /// Non-blocking, total; a hardware fault is out of scope.
    fn read_bit(&mut self) -> LineLevel;
}

/// Write side of the line interface.
pub trait LineWriter {
    /// Drive the wire to the requested logic level.
    ///
    /// Non-blocking, side-effect-only.
    fn write_bit(&mut self, level: LineLevel);
}
