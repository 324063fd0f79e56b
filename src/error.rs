//! Error types for the genip library

use std::io;
use thiserror::Error;

/// Main error type for genip operations
#[derive(Error, Debug)]
pub enum GenipError {
    /// No IP core device node found on the system
    #[error("No IP core device found")]
    NoDevice,

    /// Failed to open device
    #[error("Failed to open device: {0}")]
    DeviceOpen(io::Error),

    /// Device node name does not match any known model
    #[error("No model table entry for device: {0}")]
    UnknownModel(String),

    /// Invalid parameter or configuration
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// IOCTL execution failed
    #[error("IOCTL execution failed: {0}")]
    IoctlFailed(io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// System permission error
    #[error("Permission denied: {0}")]
    Permission(String),

    /// Unknown error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<io::Error> for GenipError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => GenipError::Permission(err.to_string()),
            io::ErrorKind::NotFound => GenipError::NoDevice,
            _ => GenipError::DeviceOpen(err),
        }
    }
}

impl GenipError {
    /// True when the underlying ioctl failed with ENOTTY, i.e. the node
    /// exists but does not speak this driver's command set
    pub fn is_unrecognized_command(&self) -> bool {
        match self {
            GenipError::IoctlFailed(err) => err.raw_os_error() == Some(libc::ENOTTY),
            _ => false,
        }
    }
}

/// Result type for genip operations
pub type GenipResult<T> = std::result::Result<T, GenipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_kinds_map_to_variants() {
        let not_found = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert!(matches!(GenipError::from(not_found), GenipError::NoDevice));

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "no");
        assert!(matches!(
            GenipError::from(denied),
            GenipError::Permission(_)
        ));

        let other = io::Error::new(io::ErrorKind::Interrupted, "eintr");
        assert!(matches!(
            GenipError::from(other),
            GenipError::DeviceOpen(_)
        ));
    }

    #[test]
    fn enotty_is_reported_as_unrecognized_command() {
        let err = GenipError::IoctlFailed(io::Error::from_raw_os_error(libc::ENOTTY));
        assert!(err.is_unrecognized_command());
        let err = GenipError::IoctlFailed(io::Error::from_raw_os_error(libc::EFAULT));
        assert!(!err.is_unrecognized_command());
    }
}
