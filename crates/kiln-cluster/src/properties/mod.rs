//! Typed configuration properties for the cache layer.
//!
//! This is the user-facing property tree: it deserializes from a YAML
//! property file (camelCase keys), fills in defaults for everything
//! that is not configured, and validates the result before any
//! settings are assembled from it.

mod client;
mod server;

pub use client::{ClientProperties, ClientPropertiesBuilder, SmartRoutingProperties};
pub use server::{
    ClusterProperties, MulticastProperties, MulticastPropertiesBuilder,
    PortAutoIncrementProperties, ServerProperties, ServerPropertiesBuilder,
};

use serde::{Deserialize, Serialize};

use crate::error::ClusterConfigError;

/// Whether the cache instance joins a cluster as a server member or
/// connects to an existing cluster as a client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Connect to an existing cluster as a client.
    Client,
    /// Run a full cluster member. This is the default.
    #[default]
    Server,
}

/// Root configuration properties for the cache layer.
///
/// Mirrors the property file layout: a shared section (mode, cluster
/// name, instance name) plus a `client` and a `server` subtree, of
/// which only the one matching `mode` is consulted during assembly.
///
/// # Example
///
/// ```
/// use kiln_cluster::CacheProperties;
///
/// let properties = CacheProperties::builder()
///     .cluster_name("orders")
///     .instance_name("orders-1")
///     .build();
///
/// assert_eq!(properties.cluster_name(), Some("orders"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheProperties {
    /// Whether to configure the cache in 'client' or 'server' mode.
    #[serde(default)]
    mode: Mode,

    /// Name of the cluster this instance belongs or connects to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cluster_name: Option<String>,

    /// Name of this client / server instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instance_name: Option<String>,

    /// Client configuration subtree.
    #[serde(default)]
    client: ClientProperties,

    /// Server configuration subtree.
    #[serde(default)]
    server: ServerProperties,
}

impl CacheProperties {
    /// Creates a new builder for CacheProperties.
    pub fn builder() -> CachePropertiesBuilder {
        CachePropertiesBuilder::default()
    }

    /// Returns the configured mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the cluster name, if configured.
    pub fn cluster_name(&self) -> Option<&str> {
        self.cluster_name.as_deref()
    }

    /// Returns the instance name, if configured.
    pub fn instance_name(&self) -> Option<&str> {
        self.instance_name.as_deref()
    }

    /// Returns the client configuration subtree.
    pub fn client(&self) -> &ClientProperties {
        &self.client
    }

    /// Returns the server configuration subtree.
    pub fn server(&self) -> &ServerProperties {
        &self.server
    }

    /// Validates the property tree.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending property when a value is
    /// out of range or a required companion value is missing.
    pub fn validate(&self) -> Result<(), ClusterConfigError> {
        if self.mode == Mode::Client && self.client.server_addresses().is_empty() {
            return Err(ClusterConfigError::invalid_property(
                "client.serverAddresses",
                "at least one server address is required in client mode",
            ));
        }

        let multicast = self.server.multicast();
        if multicast.time_to_live() > 255 {
            return Err(ClusterConfigError::invalid_property(
                "server.multicast.timeToLive",
                "must be a value between 0 and 255",
            ));
        }

        let cluster = self.server.cluster();
        if cluster.enabled() && cluster.members().is_empty() {
            return Err(ClusterConfigError::invalid_property(
                "server.cluster.members",
                "clustering is enabled but no well-known members are configured",
            ));
        }

        Ok(())
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub(crate) fn set_cluster_name(&mut self, name: String) {
        self.cluster_name = Some(name);
    }

    pub(crate) fn set_instance_name(&mut self, name: String) {
        self.instance_name = Some(name);
    }

    pub(crate) fn client_mut(&mut self) -> &mut ClientProperties {
        &mut self.client
    }

    pub(crate) fn server_mut(&mut self) -> &mut ServerProperties {
        &mut self.server
    }
}

/// Builder for CacheProperties.
#[derive(Debug, Default)]
pub struct CachePropertiesBuilder {
    mode: Mode,
    cluster_name: Option<String>,
    instance_name: Option<String>,
    client: ClientProperties,
    server: ServerProperties,
}

impl CachePropertiesBuilder {
    /// Sets the mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the cluster name.
    pub fn cluster_name(mut self, name: impl Into<String>) -> Self {
        self.cluster_name = Some(name.into());
        self
    }

    /// Sets the instance name.
    pub fn instance_name(mut self, name: impl Into<String>) -> Self {
        self.instance_name = Some(name.into());
        self
    }

    /// Sets the client configuration subtree.
    pub fn client(mut self, client: ClientProperties) -> Self {
        self.client = client;
        self
    }

    /// Sets the server configuration subtree.
    pub fn server(mut self, server: ServerProperties) -> Self {
        self.server = server;
        self
    }

    /// Builds the properties. Every field has a default, so this
    /// cannot fail.
    pub fn build(self) -> CacheProperties {
        CacheProperties {
            mode: self.mode,
            cluster_name: self.cluster_name,
            instance_name: self.instance_name,
            client: self.client,
            server: self.server,
        }
    }
}

pub(crate) mod duration_secs {
    use serde::{self, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let properties = CacheProperties::default();

        assert_eq!(properties.mode(), Mode::Server);
        assert_eq!(properties.cluster_name(), None);
        assert_eq!(properties.instance_name(), None);
    }

    #[test]
    fn test_builder() {
        let properties = CacheProperties::builder()
            .mode(Mode::Client)
            .cluster_name("orders")
            .instance_name("orders-1")
            .build();

        assert_eq!(properties.mode(), Mode::Client);
        assert_eq!(properties.cluster_name(), Some("orders"));
        assert_eq!(properties.instance_name(), Some("orders-1"));
    }

    #[test]
    fn test_default_properties_validate() {
        assert!(CacheProperties::default().validate().is_ok());
    }

    #[test]
    fn test_client_mode_without_addresses_is_invalid() {
        let properties = CacheProperties::builder().mode(Mode::Client).build();

        let error = properties.validate().unwrap_err();
        assert!(error.is_validation_error());
        assert!(error.to_string().contains("client.serverAddresses"));
    }

    #[test]
    fn test_clustering_without_members_is_invalid() {
        let properties = CacheProperties::builder()
            .server(ServerProperties::builder().clustering(true).build())
            .build();

        let error = properties.validate().unwrap_err();
        assert!(error.to_string().contains("server.cluster.members"));
    }

    #[test]
    fn test_mode_serde_names() {
        let json = serde_json::to_string(&Mode::Server).unwrap();
        assert_eq!(json, "\"server\"");

        let mode: Mode = serde_json::from_str("\"client\"").unwrap();
        assert_eq!(mode, Mode::Client);
    }
}
