//! Server-mode configuration properties.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration properties for a cache server instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerProperties {
    /// Server port. Default value is 5701.
    #[serde(default = "default_port")]
    port: u16,

    /// Primary server address, broadcast to other cluster members.
    #[serde(default = "default_primary_address")]
    primary_address: String,

    /// Alternate network addresses the server will bind to in
    /// addition to the primary address.
    #[serde(default)]
    secondary_addresses: Vec<String>,

    /// Port auto-increment configuration.
    #[serde(default)]
    port_auto_increment: PortAutoIncrementProperties,

    /// Clustering configuration.
    #[serde(default)]
    cluster: ClusterProperties,

    /// Multicast configuration.
    #[serde(default)]
    multicast: MulticastProperties,
}

fn default_port() -> u16 {
    5701
}

fn default_primary_address() -> String {
    "127.0.0.1".to_string()
}

impl Default for ServerProperties {
    fn default() -> Self {
        Self {
            port: default_port(),
            primary_address: default_primary_address(),
            secondary_addresses: Vec::new(),
            port_auto_increment: PortAutoIncrementProperties::default(),
            cluster: ClusterProperties::default(),
            multicast: MulticastProperties::default(),
        }
    }
}

impl ServerProperties {
    /// Creates a new builder for ServerProperties.
    pub fn builder() -> ServerPropertiesBuilder {
        ServerPropertiesBuilder::default()
    }

    /// Returns the server port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the primary server address.
    pub fn primary_address(&self) -> &str {
        &self.primary_address
    }

    /// Returns the secondary bind addresses.
    pub fn secondary_addresses(&self) -> &[String] {
        &self.secondary_addresses
    }

    /// Returns the port auto-increment configuration.
    pub fn port_auto_increment(&self) -> &PortAutoIncrementProperties {
        &self.port_auto_increment
    }

    /// Returns the clustering configuration.
    pub fn cluster(&self) -> &ClusterProperties {
        &self.cluster
    }

    /// Returns the multicast configuration.
    pub fn multicast(&self) -> &MulticastProperties {
        &self.multicast
    }

    pub(crate) fn set_port(&mut self, port: u16) {
        self.port = port;
    }

    pub(crate) fn set_primary_address(&mut self, address: String) {
        self.primary_address = address;
    }

    pub(crate) fn set_members(&mut self, members: Vec<String>) {
        self.cluster.members = members;
    }

    pub(crate) fn set_clustering(&mut self, enabled: bool) {
        self.cluster.enabled = enabled;
    }
}

/// Port auto-increment configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortAutoIncrementProperties {
    /// Whether to try successive ports when the configured port is
    /// taken. Default value is false.
    #[serde(default)]
    enabled: bool,
}

impl PortAutoIncrementProperties {
    /// Returns whether port auto-increment is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

/// Clustering configuration: the well-known member list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterProperties {
    /// Whether to enable clustering mode. Default value is false.
    #[serde(default)]
    enabled: bool,

    /// Well-known cluster members, in plain `host:port` form or the
    /// grouped `host:port[group;group]` notation.
    #[serde(default)]
    members: Vec<String>,
}

impl ClusterProperties {
    /// Returns whether clustering is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the configured member specifications.
    pub fn members(&self) -> &[String] {
        &self.members
    }
}

/// Multicast discovery configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MulticastProperties {
    /// Whether to enable multicast discovery. Default value is false.
    #[serde(default)]
    enabled: bool,

    /// Name of the multicast group.
    #[serde(default = "default_group_name")]
    group_name: String,

    /// Multicast port. Default is 5710.
    #[serde(default = "default_multicast_port")]
    port: u16,

    /// Trusted network interfaces, e.g. `10.10.20.*`. Wildcard `*`
    /// can be used to trust an entire subnet range.
    #[serde(default)]
    trusted_interfaces: IndexSet<String>,

    /// Time a node waits for a valid multicast response.
    #[serde(default = "default_multicast_timeout", with = "super::duration_secs")]
    timeout: Duration,

    /// Time to live for multicast packets; a value between 0..255.
    /// Default value is 32.
    #[serde(default = "default_time_to_live")]
    time_to_live: u32,
}

fn default_group_name() -> String {
    "multicastGroup".to_string()
}

fn default_multicast_port() -> u16 {
    5710
}

fn default_multicast_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_time_to_live() -> u32 {
    32
}

impl Default for MulticastProperties {
    fn default() -> Self {
        Self {
            enabled: false,
            group_name: default_group_name(),
            port: default_multicast_port(),
            trusted_interfaces: IndexSet::new(),
            timeout: default_multicast_timeout(),
            time_to_live: default_time_to_live(),
        }
    }
}

impl MulticastProperties {
    /// Creates a new builder for MulticastProperties.
    pub fn builder() -> MulticastPropertiesBuilder {
        MulticastPropertiesBuilder::default()
    }

    /// Returns whether multicast discovery is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the multicast group name.
    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    /// Returns the multicast port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the trusted network interfaces.
    pub fn trusted_interfaces(&self) -> &IndexSet<String> {
        &self.trusted_interfaces
    }

    /// Returns the multicast response timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the multicast packet time-to-live.
    pub fn time_to_live(&self) -> u32 {
        self.time_to_live
    }
}

/// Builder for ServerProperties.
#[derive(Debug, Default)]
pub struct ServerPropertiesBuilder {
    port: Option<u16>,
    primary_address: Option<String>,
    secondary_addresses: Vec<String>,
    port_auto_increment: bool,
    cluster_enabled: bool,
    members: Vec<String>,
    multicast: Option<MulticastProperties>,
}

impl ServerPropertiesBuilder {
    /// Sets the server port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the primary server address.
    pub fn primary_address(mut self, address: impl Into<String>) -> Self {
        self.primary_address = Some(address.into());
        self
    }

    /// Adds a secondary bind address.
    pub fn secondary_address(mut self, address: impl Into<String>) -> Self {
        self.secondary_addresses.push(address.into());
        self
    }

    /// Sets whether port auto-increment is enabled.
    pub fn port_auto_increment(mut self, enabled: bool) -> Self {
        self.port_auto_increment = enabled;
        self
    }

    /// Sets whether clustering is enabled.
    pub fn clustering(mut self, enabled: bool) -> Self {
        self.cluster_enabled = enabled;
        self
    }

    /// Adds a well-known member specification.
    pub fn member(mut self, spec: impl Into<String>) -> Self {
        self.members.push(spec.into());
        self
    }

    /// Sets the well-known member specifications.
    pub fn members(mut self, specs: Vec<impl Into<String>>) -> Self {
        self.members = specs.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the multicast configuration.
    pub fn multicast(mut self, multicast: MulticastProperties) -> Self {
        self.multicast = Some(multicast);
        self
    }

    /// Builds the server properties.
    pub fn build(self) -> ServerProperties {
        ServerProperties {
            port: self.port.unwrap_or_else(default_port),
            primary_address: self.primary_address.unwrap_or_else(default_primary_address),
            secondary_addresses: self.secondary_addresses,
            port_auto_increment: PortAutoIncrementProperties {
                enabled: self.port_auto_increment,
            },
            cluster: ClusterProperties {
                enabled: self.cluster_enabled,
                members: self.members,
            },
            multicast: self.multicast.unwrap_or_default(),
        }
    }
}

/// Builder for MulticastProperties.
#[derive(Debug, Default)]
pub struct MulticastPropertiesBuilder {
    enabled: bool,
    group_name: Option<String>,
    port: Option<u16>,
    trusted_interfaces: IndexSet<String>,
    timeout: Option<Duration>,
    time_to_live: Option<u32>,
}

impl MulticastPropertiesBuilder {
    /// Sets whether multicast discovery is enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the multicast group name.
    pub fn group_name(mut self, name: impl Into<String>) -> Self {
        self.group_name = Some(name.into());
        self
    }

    /// Sets the multicast port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Adds a trusted network interface.
    pub fn trusted_interface(mut self, interface: impl Into<String>) -> Self {
        self.trusted_interfaces.insert(interface.into());
        self
    }

    /// Sets the multicast response timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the multicast packet time-to-live.
    pub fn time_to_live(mut self, ttl: u32) -> Self {
        self.time_to_live = Some(ttl);
        self
    }

    /// Builds the multicast properties.
    pub fn build(self) -> MulticastProperties {
        MulticastProperties {
            enabled: self.enabled,
            group_name: self.group_name.unwrap_or_else(default_group_name),
            port: self.port.unwrap_or_else(default_multicast_port),
            trusted_interfaces: self.trusted_interfaces,
            timeout: self.timeout.unwrap_or_else(default_multicast_timeout),
            time_to_live: self.time_to_live.unwrap_or_else(default_time_to_live),
        }
    }
}
