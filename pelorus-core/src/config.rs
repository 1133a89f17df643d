//! Configuration types
//!
//! Board-agnostic configuration for one physical bus line. Pin and
//! timer handles are platform resources and stay in the firmware
//! crate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::timing::{DEFAULT_BIT_RATE, DEFAULT_DEBOUNCE_NANOS};

/// Bus line configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BusConfig {
    /// Bus bit rate in bits/second
    pub bit_rate: u32,
    /// Whether the external level translator inverts the electrical
    /// sense of the wire
    pub logic_inversion: bool,
    /// Debounce window after the last bit of a byte, in nanoseconds
    pub debounce_window_nanos: u64,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            bit_rate: DEFAULT_BIT_RATE,
            // The reference level translator presents the +12V bus
            // inverted to the GPIO side
            logic_inversion: true,
            debounce_window_nanos: DEFAULT_DEBOUNCE_NANOS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BusConfig::default();
        assert_eq!(config.bit_rate, 4800);
        assert!(config.logic_inversion);
        assert_eq!(config.debounce_window_nanos, 60_000);
    }
}
