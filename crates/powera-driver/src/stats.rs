//! Per-session report counters.
//!
//! Incremented on the report delivery path, so every update is a single
//! relaxed `fetch_add`: no allocation, no lock.

use core::sync::atomic::{AtomicU64, Ordering};

/// Counter values at one point in time, returned by [`SessionStats::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    /// Reports decoded and emitted as a full batch
    pub reports_emitted: u64,
    /// Reports dropped for wrong length or tag
    pub reports_ignored: u64,
    /// Reports dropped because the session was not active
    pub reports_not_ready: u64,
}

impl StatsSnapshot {
    /// Every report the session has been handed.
    pub fn total(&self) -> u64 {
        self.reports_emitted
            .saturating_add(self.reports_ignored)
            .saturating_add(self.reports_not_ready)
    }
}

#[derive(Debug, Default)]
pub struct SessionStats {
    reports_emitted: AtomicU64,
    reports_ignored: AtomicU64,
    reports_not_ready: AtomicU64,
}

impl SessionStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reports_emitted: AtomicU64::new(0),
            reports_ignored: AtomicU64::new(0),
            reports_not_ready: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn inc_emitted(&self) {
        self.reports_emitted.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn inc_ignored(&self) {
        self.reports_ignored.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn inc_not_ready(&self) {
        self.reports_not_ready.fetch_add(1, Ordering::Relaxed);
    }

    /// Read all counters. Each load is independent, so a snapshot taken while
    /// reports are flowing may be off by the reports in flight.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            reports_emitted: self.reports_emitted.load(Ordering::Relaxed),
            reports_ignored: self.reports_ignored.load(Ordering::Relaxed),
            reports_not_ready: self.reports_not_ready.load(Ordering::Relaxed),
        }
    }
}
