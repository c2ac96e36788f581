//! Per-device session gate.
//!
//! A [`ControllerSession`] decides whether a raw report may be decoded and
//! emitted. Its state is read lock-free on every report; the sink lives behind
//! a [`parking_lot::Mutex`] held only for decode, emission and the sync marker.
//!
//! ```text
//! Uninitialized --activate--> Active --teardown--> TornDown
//!        \__________________teardown_________________/
//! ```

use core::sync::atomic::{AtomicU8, Ordering};

use hid_powera_protocol::{ReportError, parse_input_report, validate_report};
use parking_lot::Mutex;
use powera_errors::{DriverError, DriverResult};
use powera_hid_common::InputSink;
use tracing::{debug, trace};

use crate::emitter::emit_state;
use crate::stats::{SessionStats, StatsSnapshot};

/// Lifecycle state of a [`ControllerSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Created, no registered sink yet. Reports are dropped.
    Uninitialized,
    /// Sink registered. Reports are decoded and emitted.
    Active,
    /// Detached. Reports are dropped and the sink has been released.
    TornDown,
}

impl SessionState {
    const fn as_u8(self) -> u8 {
        match self {
            SessionState::Uninitialized => 0,
            SessionState::Active => 1,
            SessionState::TornDown => 2,
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => SessionState::Uninitialized,
            1 => SessionState::Active,
            _ => SessionState::TornDown,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SessionState::Uninitialized => "Uninitialized",
            SessionState::Active => "Active",
            SessionState::TornDown => "TornDown",
        }
    }
}

/// What [`ControllerSession::handle_raw_report`] did with a report.
///
/// None of these is an error: the delivery path never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Decoded; a full batch ending in a sync marker was emitted.
    Emitted,
    /// Session not active; dropped before decode and without locking.
    NotReady,
    /// Wrong length or tag; dropped without locking.
    Ignored(ReportError),
}

impl ReportOutcome {
    pub fn is_emitted(&self) -> bool {
        matches!(self, ReportOutcome::Emitted)
    }
}

/// Session for one attached controller.
///
/// Shared between the report delivery context and the attach/detach path,
/// typically as `Arc<ControllerSession<S>>`.
#[derive(Debug)]
pub struct ControllerSession<S> {
    state: AtomicU8,
    sink: Mutex<Option<S>>,
    stats: SessionStats,
}

impl<S> Default for ControllerSession<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ControllerSession<S> {
    /// New session in [`SessionState::Uninitialized`], holding no sink.
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(SessionState::Uninitialized.as_u8()),
            sink: Mutex::new(None),
            stats: SessionStats::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        SessionState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn is_active(&self) -> bool {
        self.state() == SessionState::Active
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Move from Uninitialized to Active, taking ownership of the registered sink.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::InvalidTransition`] if the session was already
    /// activated or torn down. The sink is dropped in that case.
    pub fn activate(&self, sink: S) -> DriverResult {
        let mut slot = self.sink.lock();
        match self.state.compare_exchange(
            SessionState::Uninitialized.as_u8(),
            SessionState::Active.as_u8(),
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => {
                *slot = Some(sink);
                debug!("Session transition Uninitialized -> Active");
                Ok(())
            }
            Err(current) => Err(DriverError::InvalidTransition {
                from: SessionState::from_u8(current).name(),
                to: SessionState::Active.name(),
            }),
        }
    }

    /// Stop accepting reports and release the sink.
    ///
    /// Blocks until any in-flight decode and emission has finished. Returns the
    /// sink on the first call and `None` afterwards.
    pub fn teardown(&self) -> Option<S> {
        let previous = SessionState::from_u8(
            self.state
                .swap(SessionState::TornDown.as_u8(), Ordering::AcqRel),
        );
        let sink = self.sink.lock().take();
        if previous != SessionState::TornDown {
            debug!("Session transition {} -> TornDown", previous.name());
        }
        sink
    }
}

impl<S: InputSink> ControllerSession<S> {
    /// Handle one raw report from the transport.
    ///
    /// The state check and the framing check run before the lock is taken, so
    /// reports arriving before activation or with a bad length or tag never
    /// contend with a report being emitted.
    pub fn handle_raw_report(&self, data: &[u8]) -> ReportOutcome {
        if !self.is_active() {
            self.stats.inc_not_ready();
            return ReportOutcome::NotReady;
        }

        if let Err(err) = validate_report(data) {
            trace!("Dropping report: {}", err);
            self.stats.inc_ignored();
            return ReportOutcome::Ignored(err);
        }

        let mut slot = self.sink.lock();
        // Teardown may have started while this report waited for the guard.
        let sink = match slot.as_mut() {
            Some(sink) if self.is_active() => sink,
            _ => {
                self.stats.inc_not_ready();
                return ReportOutcome::NotReady;
            }
        };

        match parse_input_report(data) {
            Ok(state) => emit_state(sink, &state),
            Err(err) => {
                self.stats.inc_ignored();
                return ReportOutcome::Ignored(err);
            }
        }
        drop(slot);

        self.stats.inc_emitted();
        ReportOutcome::Emitted
    }
}
