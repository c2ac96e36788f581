//! Prelude module for convenient error handling imports.
//!
//! ```
//! use powera_errors::prelude::*;
//!
//! fn register() -> DriverResult {
//!     Err(DriverError::sink_registration("capability table rejected"))
//! }
//!
//! assert_eq!(register().map_err(|e| e.category()), Err(ErrorCategory::Input));
//! ```

pub use crate::{
    DriverResult,
    common::{ErrorCategory, ErrorSeverity},
    driver::{DriverError, TransportStage},
};
