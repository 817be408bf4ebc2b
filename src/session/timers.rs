//! One-shot, supersedable timers for the session's transient effects.
//!
//! Each effect lives in a [`TransientSlot`]. Arming a slot replaces its value,
//! pushes its deadline out and bumps a generation counter. A [`TimerToken`]
//! remembers the generation it was issued for, so a stale token can never
//! clear a value set by a later event.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// The deferred effects a session schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Rejected-field cue in wizard mode.
    Shake,
    /// Success banner.
    Message,
}

/// Handle for a scheduled expiry, handed to whoever drives the timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    pub effect: EffectKind,
    pub generation: u64,
    pub deadline: DateTime<Utc>,
}

/// How long each transient effect stays active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransientTimings {
    pub message: Duration,
    pub shake: Duration,
}

impl TransientTimings {
    pub const DEFAULT_MESSAGE_MS: u64 = 3000;
    pub const DEFAULT_SHAKE_MS: u64 = 500;

    pub fn from_millis(message_ms: u64, shake_ms: u64) -> Self {
        Self {
            message: millis(message_ms),
            shake: millis(shake_ms),
        }
    }
}

impl Default for TransientTimings {
    fn default() -> Self {
        Self::from_millis(Self::DEFAULT_MESSAGE_MS, Self::DEFAULT_SHAKE_MS)
    }
}

fn millis(value: u64) -> Duration {
    Duration::milliseconds(i64::try_from(value).unwrap_or(i64::MAX))
}

/// A value that clears itself at a deadline unless re-armed first.
#[derive(Debug, Clone)]
pub struct TransientSlot<T> {
    effect: EffectKind,
    value: Option<T>,
    deadline: Option<DateTime<Utc>>,
    generation: u64,
}

impl<T> TransientSlot<T> {
    pub fn new(effect: EffectKind) -> Self {
        Self {
            effect,
            value: None,
            deadline: None,
            generation: 0,
        }
    }

    /// Sets the value and restarts the timer, superseding any pending one.
    pub fn arm(&mut self, value: T, now: DateTime<Utc>, ttl: Duration) -> TimerToken {
        let deadline = now
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.generation += 1;
        self.value = Some(value);
        self.deadline = Some(deadline);
        TimerToken {
            effect: self.effect,
            generation: self.generation,
            deadline,
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.value.is_some()
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Clears the value if `token` is the most recent arm of this slot.
    /// Returns whether anything was cleared.
    pub fn fire(&mut self, token: &TimerToken) -> bool {
        if token.effect != self.effect || token.generation != self.generation {
            return false;
        }
        self.clear()
    }

    /// Clears the value once its deadline is at or before `now`.
    pub fn expire(&mut self, now: DateTime<Utc>) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => self.clear(),
            _ => false,
        }
    }

    /// Drops the value and invalidates every outstanding token.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.clear();
    }

    fn clear(&mut self) -> bool {
        self.deadline = None;
        self.value.take().is_some()
    }
}
