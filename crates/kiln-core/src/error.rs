//! Error types for Kiln Core.
//!
//! This module defines the error surface of the member-address
//! expansion. All errors implement the standard `std::error::Error`
//! trait via `thiserror`.
//!
//! # Error Handling Philosophy
//!
//! Kiln follows Rust's explicit error handling approach:
//! - Functions that can fail return `Result<T, AddressFormatError>`
//! - Errors are values, not control flow
//! - A malformed address never panics; the caller decides whether a
//!   bad configuration entry is fatal to startup or skippable
//!
//! # Example
//!
//! ```
//! use kiln_core::{AddressFormatError, expand_members};
//!
//! let specs = vec!["10.0.0.1:5701[5701-5700]".to_string()];
//!
//! match expand_members(&specs, None) {
//!     Ok(members) => println!("Expanded {} members", members.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error raised when a member address specification is malformed.
///
/// This enum covers every way an address specification can fail to
/// expand. Each variant carries the offending specification (and,
/// where applicable, the port group and token) so callers can report
/// precisely what was wrong and where.
///
/// # Example
///
/// ```
/// use kiln_core::AddressFormatError;
///
/// let error = AddressFormatError::invalid_port("10.0.0.1:0[x]", "x", "x");
/// assert!(error.is_invalid_port());
/// println!("{}", error); // "Invalid port 'x'..."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressFormatError {
    /// The address specification was empty.
    #[error("Empty address specification")]
    EmptySpec,

    /// An address specification is missing the host/port separator.
    #[error("Missing ':' separator in address '{spec}'")]
    MissingSeparator {
        /// The offending specification
        spec: String,
    },

    /// A grouped specification has a `[` without a matching `]`.
    #[error("Unbalanced bracket in address '{spec}'")]
    UnbalancedBracket {
        /// The offending specification
        spec: String,
    },

    /// A bracket interior or one of its port groups was empty.
    #[error("Empty port group in address '{spec}'")]
    EmptyGroup {
        /// The offending specification
        spec: String,
    },

    /// A port token is not a valid port number.
    #[error("Invalid port '{token}' in group '{group}' of address '{spec}'")]
    InvalidPort {
        /// The offending specification
        spec: String,
        /// The port group containing the token
        group: String,
        /// The token that failed to parse
        token: String,
    },

    /// A range group has its bounds inverted.
    #[error("Inverted port range '{group}' in address '{spec}': {low} > {high}")]
    InvertedRange {
        /// The offending specification
        spec: String,
        /// The offending range group
        group: String,
        /// Lower bound as written
        low: u16,
        /// Upper bound as written
        high: u16,
    },

    /// A port group contains more than one range separator.
    #[error("Malformed port group '{group}' in address '{spec}'")]
    MalformedGroup {
        /// The offending specification
        spec: String,
        /// The offending group
        group: String,
    },
}

impl AddressFormatError {
    // ============================================
    // Convenience constructors
    // ============================================

    /// Creates a MissingSeparator error.
    pub fn missing_separator(spec: impl Into<String>) -> Self {
        Self::MissingSeparator { spec: spec.into() }
    }

    /// Creates an UnbalancedBracket error.
    pub fn unbalanced_bracket(spec: impl Into<String>) -> Self {
        Self::UnbalancedBracket { spec: spec.into() }
    }

    /// Creates an EmptyGroup error.
    pub fn empty_group(spec: impl Into<String>) -> Self {
        Self::EmptyGroup { spec: spec.into() }
    }

    /// Creates an InvalidPort error.
    pub fn invalid_port(
        spec: impl Into<String>,
        group: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self::InvalidPort {
            spec: spec.into(),
            group: group.into(),
            token: token.into(),
        }
    }

    /// Creates an InvertedRange error.
    pub fn inverted_range(
        spec: impl Into<String>,
        group: impl Into<String>,
        low: u16,
        high: u16,
    ) -> Self {
        Self::InvertedRange {
            spec: spec.into(),
            group: group.into(),
            low,
            high,
        }
    }

    /// Creates a MalformedGroup error.
    pub fn malformed_group(spec: impl Into<String>, group: impl Into<String>) -> Self {
        Self::MalformedGroup {
            spec: spec.into(),
            group: group.into(),
        }
    }

    // ============================================
    // Query methods
    // ============================================

    /// Returns true if this error reports a non-numeric port token.
    pub fn is_invalid_port(&self) -> bool {
        matches!(self, Self::InvalidPort { .. })
    }

    /// Returns true if this error reports an inverted range.
    pub fn is_inverted_range(&self) -> bool {
        matches!(self, Self::InvertedRange { .. })
    }

    /// Returns the offending specification, if the error carries one.
    pub fn spec(&self) -> Option<&str> {
        match self {
            Self::EmptySpec => None,
            Self::MissingSeparator { spec }
            | Self::UnbalancedBracket { spec }
            | Self::EmptyGroup { spec }
            | Self::InvalidPort { spec, .. }
            | Self::InvertedRange { spec, .. }
            | Self::MalformedGroup { spec, .. } => Some(spec),
        }
    }
}

/// Type alias for Results with AddressFormatError.
pub type Result<T> = std::result::Result<T, AddressFormatError>;
