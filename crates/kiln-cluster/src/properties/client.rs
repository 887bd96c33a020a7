//! Client-mode configuration properties.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration properties for a cache client instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProperties {
    /// Addresses of the cluster servers the client will connect to,
    /// e.g. `10.10.20.20:5701`.
    #[serde(default)]
    server_addresses: Vec<String>,

    /// Timeout for nodes to accept client connection requests.
    #[serde(default = "default_connection_timeout", with = "super::duration_secs")]
    connection_timeout: Duration,

    /// Smart-routing configuration.
    #[serde(default)]
    smart_routing: SmartRoutingProperties,
}

fn default_connection_timeout() -> Duration {
    Duration::from_secs(5)
}

impl Default for ClientProperties {
    fn default() -> Self {
        Self {
            server_addresses: Vec::new(),
            connection_timeout: default_connection_timeout(),
            smart_routing: SmartRoutingProperties::default(),
        }
    }
}

impl ClientProperties {
    /// Creates a new builder for ClientProperties.
    pub fn builder() -> ClientPropertiesBuilder {
        ClientPropertiesBuilder::default()
    }

    /// Returns the configured server addresses.
    pub fn server_addresses(&self) -> &[String] {
        &self.server_addresses
    }

    /// Returns the connection timeout.
    pub fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }

    /// Returns the smart-routing configuration.
    pub fn smart_routing(&self) -> &SmartRoutingProperties {
        &self.smart_routing
    }

    pub(crate) fn set_server_addresses(&mut self, addresses: Vec<String>) {
        self.server_addresses = addresses;
    }
}

/// Smart-routing configuration.
///
/// With smart routing the client connects to every cluster member and
/// routes each operation to the member owning the key; without it all
/// traffic goes through a single member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartRoutingProperties {
    /// Whether to enable smart-routing. Default value is true.
    #[serde(default = "default_true")]
    enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SmartRoutingProperties {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl SmartRoutingProperties {
    /// Returns whether smart-routing is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

/// Builder for ClientProperties.
#[derive(Debug, Default)]
pub struct ClientPropertiesBuilder {
    server_addresses: Vec<String>,
    connection_timeout: Option<Duration>,
    smart_routing: Option<bool>,
}

impl ClientPropertiesBuilder {
    /// Adds a server address.
    pub fn server_address(mut self, address: impl Into<String>) -> Self {
        self.server_addresses.push(address.into());
        self
    }

    /// Sets the server addresses.
    pub fn server_addresses(mut self, addresses: Vec<impl Into<String>>) -> Self {
        self.server_addresses = addresses.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the connection timeout.
    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = Some(timeout);
        self
    }

    /// Sets whether smart-routing is enabled.
    pub fn smart_routing(mut self, enabled: bool) -> Self {
        self.smart_routing = Some(enabled);
        self
    }

    /// Builds the client properties.
    pub fn build(self) -> ClientProperties {
        ClientProperties {
            server_addresses: self.server_addresses,
            connection_timeout: self
                .connection_timeout
                .unwrap_or_else(default_connection_timeout),
            smart_routing: SmartRoutingProperties {
                enabled: self.smart_routing.unwrap_or(true),
            },
        }
    }
}
