//! Fuzzes the PowerA input report decoder.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_powera_input
#![no_main]
use hid_powera_protocol::{REPORT_LEN, REPORT_TAG, parse_input_report, validate_report};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic on arbitrary bytes.
    let framed = validate_report(data).is_ok();
    let parsed = parse_input_report(data);
    assert_eq!(framed, parsed.is_ok());
    if let Ok(state) = parsed {
        assert_eq!(data.len(), REPORT_LEN);
        assert_eq!(data.first(), Some(&REPORT_TAG));
        assert!((-1..=1).contains(&state.hat.x));
        assert!((-1..=1).contains(&state.hat.y));
    }
});
