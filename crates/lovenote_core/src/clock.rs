//! Time sources for timer-driven state.
//!
//! # Responsibility
//! - Provide epoch-millisecond time to stores and schedulers.
//! - Allow tests and the CLI to drive time deterministically.
//!
//! # Invariants
//! - Core code never reads wall-clock time directly; it always asks a `Clock`.
//! - `ManualClock` clones share one underlying time value.
//! - `SystemClock` never goes backwards once constructed.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Unix epoch milliseconds, matching the timestamp unit used across core.
pub type EpochMillis = i64;

/// Source of current time for core components.
pub trait Clock {
    /// Returns current time in epoch milliseconds.
    fn now_ms(&self) -> EpochMillis;
}

/// Production time source.
///
/// Reads the wall clock once at construction and advances from there on a
/// monotonic `Instant`, so device clock steps never move timer deadlines.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    anchor: Instant,
    anchor_ms: EpochMillis,
}

impl SystemClock {
    /// Anchors at the current wall-clock time.
    pub fn new() -> Self {
        // A clock set before 1970 reads as epoch zero.
        let wall_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0);
        Self::anchored_at(wall_ms)
    }

    /// Anchors at an explicit epoch time; later reads add monotonic elapsed time.
    pub fn anchored_at(anchor_ms: EpochMillis) -> Self {
        Self {
            anchor: Instant::now(),
            anchor_ms,
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> EpochMillis {
        let elapsed = i64::try_from(self.anchor.elapsed().as_millis()).unwrap_or(i64::MAX);
        self.anchor_ms.saturating_add(elapsed)
    }
}

/// Manually advanced time source.
///
/// Cloned handles observe the same time, so a test can keep one handle while
/// a store owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    /// Creates a clock frozen at `start_ms`.
    pub fn new(start_ms: EpochMillis) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(start_ms)),
        }
    }

    /// Moves time to an absolute value.
    pub fn set(&self, now_ms: EpochMillis) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    /// Moves time forward by `delta_ms` and returns the new time.
    pub fn advance(&self, delta_ms: u64) -> EpochMillis {
        let delta = i64::try_from(delta_ms).unwrap_or(i64::MAX);
        self.now.fetch_add(delta, Ordering::SeqCst) + delta
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> EpochMillis {
        self.now.load(Ordering::SeqCst)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> EpochMillis {
        (**self).now_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, ManualClock, SystemClock};

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(1_000);
        let handle = clock.clone();

        assert_eq!(handle.advance(250), 1_250);
        assert_eq!(clock.now_ms(), 1_250);

        clock.set(5_000);
        assert_eq!(handle.now_ms(), 5_000);
    }

    #[test]
    fn system_clock_starts_at_wall_time() {
        assert!(SystemClock::new().now_ms() > 1_577_836_800_000);
    }

    #[test]
    fn system_clock_advances_from_its_anchor_only() {
        let clock = SystemClock::anchored_at(1_000);
        let first = clock.now_ms();
        let second = clock.now_ms();

        assert!(first >= 1_000);
        assert!(second >= first);
        assert!(second < 1_000 + 60_000);
    }
}
