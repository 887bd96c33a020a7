//! # Kiln Core
//!
//! Core domain types for Kiln Config: the grouped member-address
//! notation and its expansion into flat `host:port` lists.
//!
//! The expansion is a pure, synchronous transformation with no shared
//! state; it is safe to call concurrently without coordination.
//!
//! ## Example
//!
//! ```
//! use kiln_core::expand_members;
//!
//! let specs = vec!["10.0.0.1:0[5701;5703-5705]".to_string()];
//! let members = expand_members(&specs, None)?;
//!
//! assert_eq!(members.len(), 4);
//! # Ok::<(), kiln_core::AddressFormatError>(())
//! ```

pub mod error;
pub mod member;
pub mod types;

// Re-exports
pub use error::{AddressFormatError, Result};
pub use member::expand_members;
pub use types::Endpoint;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
