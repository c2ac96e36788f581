//! Common HID and input-subsystem abstractions for the PowerA driver
//!
//! The driver core never talks to hardware or to the host input subsystem
//! directly. It sees them through the traits in this crate:
//!
//! - [`HidTransport`]: bring-up and teardown of the raw HID channel
//! - [`InputBackend`]: allocation and capability registration of the output device
//! - [`InputSink`]: the registered output device, receiving [`InputEvent`]s
//!
//! [`mock`] provides recording implementations of all three for tests.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod capabilities;
pub mod codes;
pub mod device_info;
pub mod event;
pub mod hid_traits;
pub mod report_reader;

pub use capabilities::*;
pub use device_info::*;
pub use event::*;
pub use hid_traits::*;
pub use report_reader::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HidCommonError {
    #[error("Unexpected end of report at offset {offset} (length {len})")]
    UnexpectedEnd { offset: usize, len: usize },

    #[error("HID transport error: {0}")]
    Transport(String),

    #[error("Input device allocation failed: {0}")]
    Allocation(String),

    #[error("Input device registration failed: {0}")]
    Registration(String),
}

pub type HidCommonResult<T> = Result<T, HidCommonError>;
