//! Word-break detection from the ambient light level
//!
//! Covering the light sensor ends the group being entered. The detector is
//! fed one sample per decode-loop iteration.

use crate::config::WordBreakTrigger;

/// Light-level word-break detector
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WordBreakDetector {
    /// Levels strictly below this raise a word break
    threshold: u16,
    /// Edge or level triggering
    trigger: WordBreakTrigger,
    /// Set while the level is below threshold and the break already fired
    latched: bool,
}

impl WordBreakDetector {
    /// Create a detector
    pub const fn new(threshold: u16, trigger: WordBreakTrigger) -> Self {
        Self {
            threshold,
            trigger,
            latched: false,
        }
    }

    /// Feed one light sample
    ///
    /// Returns `true` when the current group should be finalized.
    /// In [`WordBreakTrigger::Level`] mode this keeps returning `true` for
    /// as long as the sensor stays dark.
    pub fn sample(&mut self, level: u16) -> bool {
        let dark = level < self.threshold;

        match self.trigger {
            WordBreakTrigger::Level => dark,
            WordBreakTrigger::Edge => {
                if !dark {
                    self.latched = false;
                    false
                } else if self.latched {
                    false
                } else {
                    self.latched = true;
                    true
                }
            }
        }
    }

}
