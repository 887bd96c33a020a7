//! Error types for cluster configuration assembly.

use kiln_core::AddressFormatError;
use std::path::PathBuf;

/// Errors that can occur while loading, validating or assembling
/// cluster configuration.
#[derive(Debug, thiserror::Error)]
pub enum ClusterConfigError {
    /// A member address specification could not be expanded.
    #[error("invalid member address: {0}")]
    Address(#[from] AddressFormatError),

    /// A property value failed validation.
    #[error("invalid property '{field}': {reason}")]
    InvalidProperty { field: String, reason: String },

    /// A property source could not be parsed.
    #[error("parse error in {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClusterConfigError {
    /// Creates a new invalid property error.
    pub fn invalid_property(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidProperty {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new parse error.
    pub fn parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if this error came from member address expansion.
    pub fn is_address_error(&self) -> bool {
        matches!(self, Self::Address(_))
    }

    /// Returns true if this error came from property validation.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::InvalidProperty { .. })
    }
}
