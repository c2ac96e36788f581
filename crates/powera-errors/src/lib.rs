//! Error types for the PowerA controller input driver.
//!
//! Only the attach path can fail. The data path (raw report delivery) never
//! produces an error: malformed reports are dropped silently by the session
//! gate, so nothing in this crate describes them.
//!
//! # Architecture
//!
//! - [`common`]: severity and category classification shared by all errors
//! - [`driver`]: [`DriverError`], one variant per attach-time failure
//!
//! # Example
//!
//! ```
//! use powera_errors::prelude::*;
//!
//! fn check(vendor_id: u16, product_id: u16) -> DriverResult<()> {
//!     if (vendor_id, product_id) != (0x20D6, 0xC006) {
//!         return Err(DriverError::not_a_match("Generic Pad", vendor_id, product_id));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(0x20D6, 0xC006).is_ok());
//! assert!(check(0x045E, 0x028E).is_err_and(|e| e.is_not_a_match()));
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod driver;
pub mod prelude;

pub use common::{ErrorCategory, ErrorSeverity};
pub use driver::{DriverError, TransportStage};

/// A specialized `Result` type for driver attach/detach operations.
pub type DriverResult<T = ()> = std::result::Result<T, DriverError>;
