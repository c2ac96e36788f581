//! Property-based tests for driver error classification.

use powera_errors::{DriverError, ErrorCategory, ErrorSeverity, TransportStage};
use proptest::prelude::*;

fn stage_strategy() -> impl Strategy<Value = TransportStage> {
    prop_oneof![
        Just(TransportStage::Parse),
        Just(TransportStage::Start),
        Just(TransportStage::Open),
    ]
}

proptest! {
    #[test]
    fn test_not_a_match_never_a_fault(name in ".*", vid in any::<u16>(), pid in any::<u16>()) {
        let err = DriverError::not_a_match(name, vid, pid);
        prop_assert!(err.is_not_a_match());
        prop_assert!(!err.is_attach_fault());
        prop_assert_eq!(err.severity(), ErrorSeverity::Info);
        prop_assert_eq!(err.category(), ErrorCategory::Match);
    }

    #[test]
    fn test_not_a_match_message_contains_ids(vid: u16, pid: u16) {
        let msg = DriverError::not_a_match("pad", vid, pid).to_string();
        let vid_hex = format!("{vid:#06x}");
        let pid_hex = format!("{pid:#06x}");
        prop_assert!(msg.contains(&vid_hex));
        prop_assert!(msg.contains(&pid_hex));
    }

    #[test]
    fn test_transport_errors_are_faults(stage in stage_strategy(), reason in "[a-z ]{1,32}") {
        let err = DriverError::transport(stage, reason.clone());
        prop_assert!(err.is_attach_fault());
        prop_assert_eq!(err.category(), ErrorCategory::Transport);
        prop_assert!(err.to_string().contains(&reason));
        prop_assert!(err.to_string().contains(&stage.to_string()));
    }

    #[test]
    fn test_input_errors_at_least_error_severity(reason in ".*") {
        let alloc = DriverError::resource_exhaustion(reason.clone());
        let register = DriverError::sink_registration(reason);
        prop_assert!(alloc.severity() >= ErrorSeverity::Error);
        prop_assert!(register.severity() >= ErrorSeverity::Error);
        prop_assert_eq!(alloc.category(), ErrorCategory::Input);
        prop_assert_eq!(register.category(), ErrorCategory::Input);
    }
}
