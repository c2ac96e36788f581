//! Concurrent report delivery and teardown against one session.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use hid_powera_protocol::Button;
use powera_driver::{ControllerSession, EVENTS_PER_REPORT, ReportOutcome, SessionState};
use powera_hid_common::InputEvent;
use powera_hid_common::mock::{EventLog, RecordingSink};

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Join a worker, turning a panic into a test error that carries its payload.
fn join<T>(handle: JoinHandle<T>) -> Result<T, Box<dyn std::error::Error>> {
    handle
        .join()
        .map_err(|payload| format!("worker thread panicked: {payload:?}").into())
}

const THREADS: usize = 4;
const REPORTS_PER_THREAD: usize = 250;

/// Report with only button bit `bit` of byte 1 pressed.
fn report_for(bit: usize) -> [u8; 12] {
    [0x3F, 1 << bit, 0x00, 0x08, 0, 0x80, 0, 0x80, 0, 0x80, 0, 0x80]
}

/// Every batch is 21 events, ends with its only sync marker, and carries the
/// presses of exactly one report.
fn assert_batches_whole(events: &[InputEvent]) {
    assert_eq!(events.len() % EVENTS_PER_REPORT, 0, "partial batch emitted");
    for batch in events.chunks(EVENTS_PER_REPORT) {
        assert_eq!(batch.last(), Some(&InputEvent::Sync));
        assert_eq!(batch.iter().filter(|e| e.is_sync()).count(), 1);

        let pressed: Vec<u16> = batch
            .iter()
            .filter_map(|e| match e {
                InputEvent::Key {
                    code,
                    pressed: true,
                } => Some(*code),
                _ => None,
            })
            .collect();
        assert_eq!(pressed.len(), 1, "batch mixes reports: {pressed:?}");
    }
}

fn active_session(log: &EventLog) -> Result<Arc<ControllerSession<RecordingSink>>, Box<dyn std::error::Error>> {
    let session = Arc::new(ControllerSession::new());
    session.activate(log.sink())?;
    Ok(session)
}

#[test]
fn test_parallel_reports_never_interleave() -> TestResult {
    let log = EventLog::new();
    let session = active_session(&log)?;

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let session = Arc::clone(&session);
            thread::spawn(move || {
                let report = report_for(t);
                (0..REPORTS_PER_THREAD)
                    .filter(|_| session.handle_raw_report(&report).is_emitted())
                    .count()
            })
        })
        .collect();

    let mut emitted = 0;
    for handle in handles {
        emitted += join(handle)?;
    }

    assert_eq!(emitted, THREADS * REPORTS_PER_THREAD);
    assert_eq!(log.sync_count(), THREADS * REPORTS_PER_THREAD);
    assert_batches_whole(&log.events());

    // Each thread's button shows up once per report it sent.
    let events = log.events();
    for t in 0..THREADS {
        let code = Button::ALL.get(t).map(|b| b.code()).ok_or("button index")?;
        let count = events
            .iter()
            .filter(|e| **e == InputEvent::key(code, true))
            .count();
        assert_eq!(count, REPORTS_PER_THREAD);
    }
    Ok(())
}

#[test]
fn test_teardown_during_delivery() -> TestResult {
    let log = EventLog::new();
    let session = active_session(&log)?;
    let started = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let session = Arc::clone(&session);
            let started = Arc::clone(&started);
            thread::spawn(move || {
                let report = report_for(t);
                started.fetch_add(1, Ordering::SeqCst);
                while session.handle_raw_report(&report) != ReportOutcome::NotReady {}
            })
        })
        .collect();

    while started.load(Ordering::SeqCst) < THREADS {
        thread::yield_now();
    }
    thread::sleep(Duration::from_millis(5));

    let sink = session.teardown();
    assert!(sink.is_some());
    drop(sink);
    let after_teardown = log.events().len();

    for handle in handles {
        join(handle)?;
    }

    assert_eq!(session.state(), SessionState::TornDown);
    assert_eq!(log.live_sinks(), 0);
    assert_eq!(log.events().len(), after_teardown, "emitted after teardown");
    assert_batches_whole(&log.events());
    Ok(())
}

#[test]
fn test_malformed_reports_alongside_valid_ones() -> TestResult {
    let log = EventLog::new();
    let session = active_session(&log)?;

    let good = {
        let session = Arc::clone(&session);
        thread::spawn(move || {
            for _ in 0..REPORTS_PER_THREAD {
                session.handle_raw_report(&report_for(0));
            }
        })
    };
    let bad = {
        let session = Arc::clone(&session);
        thread::spawn(move || {
            let mut short = [0x3Fu8; 12];
            for i in 0..REPORTS_PER_THREAD {
                short[0] = if i % 2 == 0 { 0x3F } else { 0x30 };
                let len = if i % 2 == 0 { 11 } else { 12 };
                session.handle_raw_report(short.get(..len).unwrap_or(&[]));
            }
        })
    };

    join(good)?;
    join(bad)?;

    assert_eq!(log.sync_count(), REPORTS_PER_THREAD);
    assert_batches_whole(&log.events());

    let stats = session.stats();
    assert_eq!(stats.reports_emitted, REPORTS_PER_THREAD as u64);
    assert_eq!(stats.reports_ignored, REPORTS_PER_THREAD as u64);
    Ok(())
}

#[test]
fn test_reports_before_activation_are_dropped() -> TestResult {
    let log = EventLog::new();
    let session: Arc<ControllerSession<RecordingSink>> = Arc::new(ControllerSession::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let session = Arc::clone(&session);
            thread::spawn(move || {
                (0..REPORTS_PER_THREAD)
                    .map(|_| session.handle_raw_report(&report_for(t)))
                    .all(|outcome| outcome == ReportOutcome::NotReady)
            })
        })
        .collect();

    for handle in handles {
        assert!(join(handle)?);
    }
    assert!(log.events().is_empty());
    assert_eq!(
        session.stats().reports_not_ready,
        (THREADS * REPORTS_PER_THREAD) as u64
    );
    Ok(())
}
