//! A clamped hit point track.

use serde::{Deserialize, Serialize};

/// Current and maximum hit points. `0 <= current <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPoints {
    /// Current hit points.
    pub current: i32,
    /// Maximum hit points.
    pub max: i32,
}

impl HitPoints {
    /// A full track with the given maximum (at least 1).
    pub fn full(max: i32) -> Self {
        let max = max.max(1);
        Self { current: max, max }
    }

    /// Restore up to `amount`, never beyond max.
    pub fn heal(self, amount: u32) -> Self {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        Self {
            current: self.current.saturating_add(amount).clamp(0, self.max),
            max: self.max,
        }
    }

    /// Remove up to `amount`, never below zero.
    pub fn damage(self, amount: u32) -> Self {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        Self {
            current: self.current.saturating_sub(amount).clamp(0, self.max),
            max: self.max,
        }
    }

    /// Raise both current and max by `amount`.
    pub fn increase_max(self, amount: i32) -> Self {
        let max = self.max.saturating_add(amount).max(1);
        Self {
            current: self.current.saturating_add(amount).clamp(0, max),
            max,
        }
    }

    /// Back to max.
    pub fn restore(self) -> Self {
        Self {
            current: self.max,
            max: self.max,
        }
    }

    /// Whether current equals max.
    pub fn is_full(self) -> bool {
        self.current >= self.max
    }

    /// Whether any hit points remain.
    pub fn is_alive(self) -> bool {
        self.current > 0
    }
}

impl std::fmt::Display for HitPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}
