//! Common type definitions and newtypes for Kiln Config.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cluster endpoint identifier.
///
/// Represents a single `host:port` network address, the unit in which
/// cluster members are listed and compared. The value is kept as the
/// exact string form used in configuration; no normalization is
/// applied.
///
/// # Example
///
/// ```
/// use kiln_core::Endpoint;
///
/// let endpoint = Endpoint::new("10.0.0.1:5701");
/// assert_eq!(endpoint.as_str(), "10.0.0.1:5701");
///
/// let endpoint = Endpoint::from_parts("10.0.0.1", 5701);
/// assert_eq!(endpoint.as_str(), "10.0.0.1:5701");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Endpoint(String);

impl Endpoint {
    /// Creates a new Endpoint from a `host:port` string.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Creates a new Endpoint from a host and a port.
    pub fn from_parts(host: &str, port: u16) -> Self {
        Self(format!("{}:{}", host, port))
    }

    /// Returns the endpoint as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Endpoint {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Endpoint {
    fn from(s: String) -> Self {
        Self(s)
    }
}
