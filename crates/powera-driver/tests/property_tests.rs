//! Property-based tests for the session gate and event emission.

use hid_powera_protocol::{Button, REPORT_LEN, REPORT_TAG, ReportError, capabilities};
use powera_driver::{ControllerSession, EVENTS_PER_REPORT, ReportOutcome};
use powera_hid_common::InputEvent;
use powera_hid_common::mock::{EventLog, RecordingSink};
use proptest::prelude::*;

fn active_session(log: &EventLog) -> Result<ControllerSession<RecordingSink>, TestCaseError> {
    let session = ControllerSession::new();
    session
        .activate(log.sink())
        .map_err(|e| TestCaseError::fail(e.to_string()))?;
    Ok(session)
}

fn valid_report() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), REPORT_LEN - 1).prop_map(|rest| {
        let mut data = Vec::with_capacity(REPORT_LEN);
        data.push(REPORT_TAG);
        data.extend_from_slice(&rest);
        data
    })
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(300))]

    /// Any length other than 12 emits nothing, not even a sync marker.
    #[test]
    fn prop_wrong_length_emits_nothing(
        data in proptest::collection::vec(any::<u8>(), 0..=64usize)
            .prop_filter("not 12 bytes", |d| d.len() != REPORT_LEN),
    ) {
        let log = EventLog::new();
        let session = active_session(&log)?;

        prop_assert_eq!(
            session.handle_raw_report(&data),
            ReportOutcome::Ignored(ReportError::InvalidLength(data.len()))
        );
        prop_assert!(log.events().is_empty());
    }

    /// A wrong leading tag emits nothing, at any length.
    #[test]
    fn prop_wrong_tag_emits_nothing(
        tag in any::<u8>().prop_filter("not the tag", |t| *t != REPORT_TAG),
        rest in proptest::collection::vec(any::<u8>(), 0..=32usize),
    ) {
        let log = EventLog::new();
        let session = active_session(&log)?;
        let mut data = vec![tag];
        data.extend_from_slice(&rest);

        prop_assert!(!session.handle_raw_report(&data).is_emitted());
        prop_assert_eq!(log.sync_count(), 0);
    }

    /// Nothing is emitted before activation, whatever the buffer.
    #[test]
    fn prop_uninitialized_emits_nothing(
        reports in proptest::collection::vec(valid_report(), 1..8usize),
    ) {
        let log = EventLog::new();
        let session = ControllerSession::<RecordingSink>::new();

        for report in &reports {
            prop_assert_eq!(session.handle_raw_report(report), ReportOutcome::NotReady);
        }
        prop_assert!(log.events().is_empty());
    }

    /// Every valid report yields one whole batch reflecting its button bits.
    #[test]
    fn prop_valid_report_emits_one_batch(data in valid_report()) {
        let log = EventLog::new();
        let session = active_session(&log)?;

        prop_assert_eq!(session.handle_raw_report(&data), ReportOutcome::Emitted);

        let events = log.events();
        prop_assert_eq!(events.len(), EVENTS_PER_REPORT);
        prop_assert_eq!(events.last(), Some(&InputEvent::Sync));

        let byte1 = data.get(1).copied().unwrap_or_default();
        for (bit, button) in Button::ALL.iter().take(8).enumerate() {
            let pressed = byte1 & (1 << bit) != 0;
            prop_assert!(events.contains(&InputEvent::key(button.code(), pressed)));
        }

        let caps = capabilities();
        for event in &events {
            if let InputEvent::Abs { code, value } = event {
                let spec = caps.axis(*code);
                prop_assert!(spec.is_some_and(|s| s.contains(*value)), "{:?} out of range", event);
            }
        }
    }

    /// Malformed reports between valid ones do not disturb the stream.
    #[test]
    fn prop_noise_does_not_affect_later_reports(
        good in valid_report(),
        noise in proptest::collection::vec(any::<u8>(), 0..=11usize),
    ) {
        let log = EventLog::new();
        let session = active_session(&log)?;

        session.handle_raw_report(&good);
        let first = log.events();
        log.clear();

        session.handle_raw_report(&noise);
        prop_assert!(log.events().is_empty());

        session.handle_raw_report(&good);
        prop_assert_eq!(log.events(), first);
    }
}
