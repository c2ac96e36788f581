//! PowerA Switch controller input driver.
//!
//! Ties the pure decoder in [`hid_powera_protocol`] to the host through the
//! seams in [`powera_hid_common`]:
//!
//! - [`PowerADriver::probe`] matches the device, brings up the HID transport,
//!   allocates and registers the output device and activates a session
//! - [`ControllerSession::handle_raw_report`] gates each raw report, decodes it
//!   and emits one batch of events closed by a sync marker
//! - [`PowerADriver::remove`] tears the session down and releases the transport
//!
//! # Example
//!
//! ```
//! use powera_driver::{PowerADriver, ReportOutcome};
//! use powera_hid_common::HidDeviceInfo;
//! use powera_hid_common::mock::{MockHidTransport, MockInputBackend};
//!
//! let info = HidDeviceInfo::new(0x20D6, 0xC006, "PowerA Wired Controller");
//! let mut backend = MockInputBackend::new();
//! let events = backend.log();
//!
//! let controller = PowerADriver::probe(info, MockHidTransport::new(), &mut backend)?;
//! let report = [0x3F, 0x01, 0x00, 0x08, 0, 0x80, 0, 0x80, 0, 0x80, 0, 0x80];
//! assert_eq!(controller.handle_raw_report(&report), ReportOutcome::Emitted);
//! assert_eq!(events.sync_count(), 1);
//!
//! PowerADriver::remove(controller);
//! # Ok::<(), powera_errors::DriverError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod driver;
pub mod emitter;
pub mod session;
pub mod stats;

pub use driver::{AttachedController, PowerADriver};
pub use emitter::{EVENTS_PER_REPORT, emit_state};
pub use session::{ControllerSession, ReportOutcome, SessionState};
pub use stats::{SessionStats, StatsSnapshot};
