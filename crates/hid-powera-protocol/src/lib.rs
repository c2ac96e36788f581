//! PowerA Nintendo Switch controller HID protocol.
//!
//! PowerA wired and wireless Switch pads enumerate under VID `0x20D6`
//! (PID `0xC006` for the Advantage/Enhanced line). Over Bluetooth some units
//! report generic identifiers and are only recognisable by their name, e.g.
//! "Lic3 Pro Controller".
//!
//! # Input report
//! A single 12-byte report, tag byte `0x3F`:
//!
//! | Offset | Size | Field        | Encoding                               |
//! |--------|------|--------------|----------------------------------------|
//! | 0      | u8   | tag          | always `0x3F`                          |
//! | 1      | u8   | buttons      | B A Y X L R ZL ZR (bit 0 → bit 7)      |
//! | 2      | u8   | buttons      | − + LS RS Home Capture (bit 0 → bit 5) |
//! | 3      | u8   | d-pad        | 0 = up, clockwise, 8 = neutral         |
//! | 4–5    | u16  | left stick X | LE, high byte used                     |
//! | 6–7    | u16  | left stick Y | LE, high byte used, inverted           |
//! | 8–9    | u16  | right stick X| LE, high byte used                     |
//! | 10–11  | u16  | right stick Y| LE, high byte used, inverted           |
//!
//! Everything in this crate is pure: no I/O, no allocation, no state.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod ids;
pub mod input;
pub mod types;

pub use ids::{
    ANY_ID, DEVICE_TABLE, DeviceIdEntry, NAME_FRAGMENTS, OUTPUT_DEVICE_NAME, PRODUCT_ID,
    VENDOR_ID, in_device_table, is_powera_controller,
};
pub use input::{
    Axis, Button, ControllerState, DpadPosition, FaceButtons, Hat, ShoulderButtons,
    SystemButtons, invert_axis, parse_input_report, truncate_sample, validate_report,
};
pub use types::{STICK_FLAT, STICK_FUZZ, axis_spec, capabilities, output_device_spec};

use powera_hid_common::HidCommonError;
use thiserror::Error;

/// Input report length in bytes.
pub const REPORT_LEN: usize = 12;

/// Tag byte every input report starts with.
pub const REPORT_TAG: u8 = 0x3F;

/// Why a raw buffer was not decoded.
///
/// These are expected transport noise, not faults: callers drop the report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Invalid report size: expected 12, got {0}")]
    InvalidLength(usize),

    #[error("Invalid report tag: expected 0x3f, got {0:#04x}")]
    InvalidTag(u8),

    /// A field read ran past the end of the buffer.
    #[error("Truncated report: {0}")]
    Truncated(#[from] HidCommonError),
}
