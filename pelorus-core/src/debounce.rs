//! Stop-edge debounce guard
//!
//! The trailing (stop) edge of a byte on this bus bounces, and every
//! bounce looks like a fresh start-bit edge to the receiver. Once
//! armed, the guard makes the edge path a pure no-op until the
//! receive timer clears it at the end of the quiet window.

/// Boolean latch consulted by the edge path before any other work.
///
/// Armed by the receive synchronizer at the instant the last
/// expected bit of a byte was sampled; cleared when the debounce
/// window expires. Exactly one arm/disarm cycle per byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceGuard {
    armed: bool,
}

impl DebounceGuard {
    /// Create a disarmed guard.
    pub const fn new() -> Self {
        Self { armed: false }
    }

    /// Arm the latch. Edge events are ignored until [`disarm`].
    ///
    /// [`disarm`]: DebounceGuard::disarm
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Clear the latch. A no-op when already disarmed.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Whether edge events are currently being ignored.
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_disarmed() {
        assert!(!DebounceGuard::new().is_armed());
        assert!(!DebounceGuard::default().is_armed());
    }

    #[test]
    fn test_arm_disarm_cycle() {
        let mut guard = DebounceGuard::new();
        guard.arm();
        assert!(guard.is_armed());
        guard.disarm();
        assert!(!guard.is_armed());
    }

    #[test]
    fn test_disarm_is_idempotent() {
        let mut guard = DebounceGuard::new();
        guard.disarm();
        assert!(!guard.is_armed());
        guard.arm();
        guard.disarm();
        guard.disarm();
        assert!(!guard.is_armed());
    }
}
