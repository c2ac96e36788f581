//! Error classification shared by every driver error.

use core::fmt;

/// Which collaborator an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// The device is not a PowerA controller
    Match = 0,
    /// HID transport bring-up (parse, start, open)
    Transport = 1,
    /// Host input subsystem (allocation, capability registration)
    Input = 2,
    /// Session lifecycle misuse
    Session = 3,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Match => write!(f, "Match"),
            ErrorCategory::Transport => write!(f, "Transport"),
            ErrorCategory::Input => write!(f, "Input"),
            ErrorCategory::Session => write!(f, "Session"),
        }
    }
}

/// Error severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// Informational, no action required
    Info = 0,
    /// Warning, may require attention
    Warning = 1,
    /// Error, the attach attempt failed
    Error = 2,
    /// Critical, the device instance is unusable
    Critical = 3,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
