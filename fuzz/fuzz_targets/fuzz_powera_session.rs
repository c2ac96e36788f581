//! Fuzzes the session gate with a stream of arbitrary reports.
//!
//! The input is split into chunks on `0xFF` separators and each chunk is
//! delivered as one report.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_powera_session
#![no_main]
use libfuzzer_sys::fuzz_target;
use powera_driver::{ControllerSession, EVENTS_PER_REPORT, ReportOutcome};
use powera_hid_common::mock::EventLog;

fuzz_target!(|data: &[u8]| {
    let log = EventLog::new();
    let session = ControllerSession::new();
    if session.activate(log.sink()).is_err() {
        return;
    }

    let mut emitted = 0usize;
    for report in data.split(|b| *b == 0xFF).filter(|c| !c.is_empty()) {
        if session.handle_raw_report(report) == ReportOutcome::Emitted {
            emitted += 1;
        }
    }

    assert_eq!(log.sync_count(), emitted);
    assert_eq!(log.events().len(), emitted * EVENTS_PER_REPORT);
    drop(session.teardown());
    assert_eq!(log.live_sinks(), 0);
});
