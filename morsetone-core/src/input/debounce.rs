//! Timestamp debounce for the symbol buttons
//!
//! Records when the last press was accepted and rejects presses that
//! arrive within the minimum interval. Nothing blocks, so a bouncing
//! button never delays the other button or the decode loop.

/// Per-input debouncer
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    /// Minimum spacing between accepted events (ms)
    interval_ms: u32,
    /// Timestamp of the last accepted event
    last_accepted_ms: Option<u32>,
}

impl Debouncer {
    /// Create a debouncer with the given minimum interval
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_accepted_ms: None,
        }
    }

    /// Decide whether an edge at `now_ms` counts as a press
    ///
    /// `now_ms` is a free-running millisecond clock; wrap-around is handled.
    pub fn accept(&mut self, now_ms: u32) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms.wrapping_sub(last) < self.interval_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }
}
