//! Server settings assembly.

use indexmap::{IndexMap, IndexSet};
use kiln_core::Endpoint;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

use super::members::well_known_members;
use crate::error::ClusterConfigError;
use crate::properties::CacheProperties;
use crate::regions::{CacheConfigurer, NoOpCacheConfigurer, RegionSettings};

/// Network bind settings for a server instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSettings {
    /// Server port.
    pub port: u16,

    /// Address published to other cluster members.
    pub public_address: String,

    /// Whether to try successive ports when the configured one is
    /// taken.
    pub port_auto_increment: bool,

    /// Whether the interface list below is consulted.
    pub interfaces_enabled: bool,

    /// Additional addresses to bind to.
    pub interfaces: Vec<String>,
}

/// Multicast discovery settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MulticastSettings {
    /// Whether multicast discovery is enabled.
    pub enabled: bool,

    /// Multicast group name.
    pub group_name: String,

    /// Multicast port.
    pub port: u16,

    /// Trusted network interfaces.
    pub trusted_interfaces: IndexSet<String>,

    /// Time to wait for a valid multicast response.
    pub timeout: Duration,

    /// Time to live for multicast packets.
    pub time_to_live: u32,
}

/// TCP/IP join settings: the well-known member list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TcpIpSettings {
    /// Whether joining over well-known members is enabled.
    pub enabled: bool,

    /// Expanded peer endpoints, this node excluded.
    pub members: Vec<Endpoint>,
}

/// Cluster join settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinSettings {
    /// Whether the engine may auto-detect a join mechanism. Always
    /// disabled; joining is configured explicitly.
    pub auto_detection_enabled: bool,

    /// Multicast discovery settings.
    pub multicast: MulticastSettings,

    /// TCP/IP join settings.
    pub tcp_ip: TcpIpSettings,
}

/// Settings for a cache server instance.
///
/// Assembled from validated [`CacheProperties`]; handed to the engine
/// adapter that starts the actual cluster member.
///
/// # Example
///
/// ```
/// use kiln_cluster::{CacheProperties, ServerSettings};
///
/// let settings = ServerSettings::from_properties(&CacheProperties::default())?;
///
/// assert_eq!(settings.network.port, 5701);
/// assert!(!settings.join.auto_detection_enabled);
/// # Ok::<(), kiln_cluster::ClusterConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSettings {
    /// Name of the cluster this member belongs to.
    pub cluster_name: Option<String>,

    /// Name of this server instance.
    pub instance_name: Option<String>,

    /// Network bind settings.
    pub network: NetworkSettings,

    /// Cluster join settings.
    pub join: JoinSettings,

    /// Named cache regions, in registration order.
    pub regions: IndexMap<String, RegionSettings>,
}

impl ServerSettings {
    /// Assembles server settings from the given properties, with no
    /// custom cache regions.
    pub fn from_properties(properties: &CacheProperties) -> Result<Self, ClusterConfigError> {
        Self::from_properties_with(properties, &NoOpCacheConfigurer)
    }

    /// Assembles server settings from the given properties, letting
    /// `configurer` register cache regions on the result.
    ///
    /// # Errors
    ///
    /// Fails if the properties do not validate or if a well-known
    /// member specification is malformed.
    pub fn from_properties_with(
        properties: &CacheProperties,
        configurer: &dyn CacheConfigurer,
    ) -> Result<Self, ClusterConfigError> {
        properties.validate()?;

        let server = properties.server();
        let multicast = server.multicast();
        let cluster = server.cluster();

        let mut settings = Self {
            cluster_name: properties.cluster_name().map(String::from),
            instance_name: properties.instance_name().map(String::from),
            network: NetworkSettings {
                port: server.port(),
                public_address: server.primary_address().to_string(),
                port_auto_increment: server.port_auto_increment().enabled(),
                // Interfaces are only consulted when secondary
                // addresses are configured
                interfaces_enabled: !server.secondary_addresses().is_empty(),
                interfaces: server.secondary_addresses().to_vec(),
            },
            join: JoinSettings {
                auto_detection_enabled: false,
                multicast: MulticastSettings {
                    enabled: multicast.enabled(),
                    group_name: multicast.group_name().to_string(),
                    port: multicast.port(),
                    trusted_interfaces: multicast.trusted_interfaces().clone(),
                    timeout: multicast.timeout(),
                    time_to_live: multicast.time_to_live(),
                },
                tcp_ip: TcpIpSettings {
                    enabled: cluster.enabled(),
                    members: well_known_members(server)?,
                },
            },
            regions: IndexMap::new(),
        };

        configurer.configure(&mut settings);

        info!(
            "Assembled server settings for cluster '{}' on port {} with {} well-known members",
            settings.cluster_name.as_deref().unwrap_or("default"),
            settings.network.port,
            settings.join.tcp_ip.members.len()
        );

        Ok(settings)
    }

    /// Registers a named cache region.
    ///
    /// A region registered under an existing name replaces the
    /// previous settings but keeps its original position.
    pub fn add_region(&mut self, name: impl Into<String>, settings: RegionSettings) {
        self.regions.insert(name.into(), settings);
    }
}
