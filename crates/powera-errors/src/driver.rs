//! Attach-time driver errors.
//!
//! Every variant is terminal for the attach attempt that produced it. The
//! driver releases whatever it had acquired, in reverse order, before the
//! error is returned to the host.

use core::fmt;

use crate::common::{ErrorCategory, ErrorSeverity};

/// Step of HID transport bring-up that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportStage {
    /// Parsing the device's report descriptor
    Parse,
    /// Starting the hardware transport
    Start,
    /// Opening the hardware transport for input delivery
    Open,
}

impl fmt::Display for TransportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportStage::Parse => write!(f, "parse"),
            TransportStage::Start => write!(f, "start"),
            TransportStage::Open => write!(f, "open"),
        }
    }
}

/// Errors surfaced to the host while attaching or managing a controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DriverError {
    /// Device failed the matcher predicate; not handled by this driver
    #[error("Not a PowerA controller: '{name}' (vendor={vendor_id:#06x}, product={product_id:#06x})")]
    NotAMatch {
        /// Device name as reported by enumeration
        name: String,
        /// USB vendor ID
        vendor_id: u16,
        /// USB product ID
        product_id: u16,
    },

    /// HID transport bring-up failed
    #[error("HID transport {stage} failed: {reason}")]
    Transport {
        /// Step that failed
        stage: TransportStage,
        /// Reason reported by the transport
        reason: String,
    },

    /// Output sink (host input device) could not be allocated
    #[error("Failed to allocate input device: {0}")]
    ResourceExhaustion(String),

    /// Host input subsystem rejected the capability registration
    #[error("Failed to register input device: {0}")]
    SinkRegistrationFailure(String),

    /// Session asked to make a transition its current state does not allow
    #[error("Invalid session transition from {from} to {to}")]
    InvalidTransition {
        /// State the session was in
        from: &'static str,
        /// State that was requested
        to: &'static str,
    },
}

impl DriverError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            DriverError::NotAMatch { .. } => ErrorCategory::Match,
            DriverError::Transport { .. } => ErrorCategory::Transport,
            DriverError::ResourceExhaustion(_) | DriverError::SinkRegistrationFailure(_) => {
                ErrorCategory::Input
            }
            DriverError::InvalidTransition { .. } => ErrorCategory::Session,
        }
    }

    /// Get the error severity level.
    ///
    /// A non-matching device is not a fault, so it only rates as informational.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DriverError::NotAMatch { .. } => ErrorSeverity::Info,
            DriverError::Transport { .. } => ErrorSeverity::Error,
            DriverError::ResourceExhaustion(_) => ErrorSeverity::Critical,
            DriverError::SinkRegistrationFailure(_) => ErrorSeverity::Error,
            DriverError::InvalidTransition { .. } => ErrorSeverity::Warning,
        }
    }

    /// Check if the host should try another driver for this device.
    pub fn is_not_a_match(&self) -> bool {
        matches!(self, DriverError::NotAMatch { .. })
    }

    /// Check if this error ended an attach attempt after resources were touched.
    pub fn is_attach_fault(&self) -> bool {
        matches!(
            self,
            DriverError::Transport { .. }
                | DriverError::ResourceExhaustion(_)
                | DriverError::SinkRegistrationFailure(_)
        )
    }

    /// Create a not-a-match error.
    pub fn not_a_match(name: impl Into<String>, vendor_id: u16, product_id: u16) -> Self {
        DriverError::NotAMatch {
            name: name.into(),
            vendor_id,
            product_id,
        }
    }

    /// Create a transport error for the given bring-up step.
    pub fn transport(stage: TransportStage, reason: impl Into<String>) -> Self {
        DriverError::Transport {
            stage,
            reason: reason.into(),
        }
    }

    /// Create a resource exhaustion error.
    pub fn resource_exhaustion(reason: impl Into<String>) -> Self {
        DriverError::ResourceExhaustion(reason.into())
    }

    /// Create a sink registration error.
    pub fn sink_registration(reason: impl Into<String>) -> Self {
        DriverError::SinkRegistrationFailure(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_error_severity() {
        assert_eq!(
            DriverError::not_a_match("pad", 0x1234, 0x5678).severity(),
            ErrorSeverity::Info
        );
        assert_eq!(
            DriverError::resource_exhaustion("oom").severity(),
            ErrorSeverity::Critical
        );
        assert_eq!(
            DriverError::transport(TransportStage::Open, "busy").severity(),
            ErrorSeverity::Error
        );
    }

    #[test]
    fn test_driver_error_category() {
        assert_eq!(
            DriverError::sink_registration("rejected").category(),
            ErrorCategory::Input
        );
        assert_eq!(
            DriverError::transport(TransportStage::Parse, "bad descriptor").category(),
            ErrorCategory::Transport
        );
    }

    #[test]
    fn test_not_a_match_is_not_a_fault() {
        let err = DriverError::not_a_match("Xbox Pad", 0x045E, 0x028E);
        assert!(err.is_not_a_match());
        assert!(!err.is_attach_fault());
    }

    #[test]
    fn test_attach_faults() {
        assert!(DriverError::resource_exhaustion("oom").is_attach_fault());
        assert!(DriverError::sink_registration("rejected").is_attach_fault());
        assert!(DriverError::transport(TransportStage::Start, "stalled").is_attach_fault());
        let err = DriverError::InvalidTransition {
            from: "Active",
            to: "Active",
        };
        assert!(!err.is_attach_fault());
    }

    #[test]
    fn test_driver_error_display() {
        let err = DriverError::not_a_match("Foo", 0x20D6, 0x0001);
        let msg = err.to_string();
        assert!(msg.contains("Foo"));
        assert!(msg.contains("0x20d6"));
        assert!(msg.contains("0x0001"));
    }

    #[test]
    fn test_driver_error_is_std_error() {
        let err = DriverError::resource_exhaustion("oom");
        let _: &dyn std::error::Error = &err;
    }
}
