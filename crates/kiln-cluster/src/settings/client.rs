//! Client settings assembly.

use kiln_core::Endpoint;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

use crate::error::ClusterConfigError;
use crate::properties::CacheProperties;

/// How a client routes operations across the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RoutingMode {
    /// Connect to every member and route each operation to the owner
    /// of the key.
    AllMembers,
    /// Send all traffic through one member.
    SingleMember,
}

/// Settings for a cache client instance.
///
/// Assembled from validated [`CacheProperties`]; handed to the engine
/// adapter that opens the actual connections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSettings {
    /// Name of the cluster the client connects to.
    pub cluster_name: Option<String>,

    /// Name of this client instance.
    pub instance_name: Option<String>,

    /// Addresses of the cluster servers.
    pub addresses: Vec<Endpoint>,

    /// Timeout for connection attempts.
    pub connection_timeout: Duration,

    /// Operation routing mode, derived from smart-routing.
    pub routing_mode: RoutingMode,

    /// Upper bound on how long the client keeps retrying to connect
    /// to the cluster. `None` means retry indefinitely.
    pub cluster_connect_timeout: Option<Duration>,
}

impl ClientSettings {
    /// Assembles client settings from the given properties.
    ///
    /// # Errors
    ///
    /// Fails if the properties do not validate, e.g. when no server
    /// address is configured.
    pub fn from_properties(properties: &CacheProperties) -> Result<Self, ClusterConfigError> {
        properties.validate()?;

        let client = properties.client();

        let routing_mode = if client.smart_routing().enabled() {
            RoutingMode::AllMembers
        } else {
            RoutingMode::SingleMember
        };

        let settings = Self {
            cluster_name: properties.cluster_name().map(String::from),
            instance_name: properties.instance_name().map(String::from),
            addresses: client
                .server_addresses()
                .iter()
                .map(|address| Endpoint::new(address.clone()))
                .collect(),
            connection_timeout: client.connection_timeout(),
            // Retry connecting to the cluster indefinitely
            cluster_connect_timeout: None,
            routing_mode,
        };

        info!(
            "Assembled client settings for cluster '{}' with {} server addresses",
            settings.cluster_name.as_deref().unwrap_or("default"),
            settings.addresses.len()
        );

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{ClientProperties, Mode};

    fn client_properties() -> CacheProperties {
        CacheProperties::builder()
            .mode(Mode::Client)
            .cluster_name("orders")
            .instance_name("orders-client-1")
            .client(
                ClientProperties::builder()
                    .server_address("10.10.20.20:5701")
                    .server_address("10.10.20.30:5701")
                    .build(),
            )
            .build()
    }

    #[test]
    fn test_assembly() {
        let settings = ClientSettings::from_properties(&client_properties()).unwrap();

        assert_eq!(settings.cluster_name.as_deref(), Some("orders"));
        assert_eq!(settings.instance_name.as_deref(), Some("orders-client-1"));
        assert_eq!(
            settings.addresses,
            [
                Endpoint::new("10.10.20.20:5701"),
                Endpoint::new("10.10.20.30:5701")
            ]
        );
        assert_eq!(settings.connection_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_smart_routing_maps_to_all_members() {
        let settings = ClientSettings::from_properties(&client_properties()).unwrap();
        assert_eq!(settings.routing_mode, RoutingMode::AllMembers);
    }

    #[test]
    fn test_disabled_smart_routing_maps_to_single_member() {
        let properties = CacheProperties::builder()
            .mode(Mode::Client)
            .client(
                ClientProperties::builder()
                    .server_address("10.10.20.20:5701")
                    .smart_routing(false)
                    .build(),
            )
            .build();

        let settings = ClientSettings::from_properties(&properties).unwrap();
        assert_eq!(settings.routing_mode, RoutingMode::SingleMember);
    }

    #[test]
    fn test_cluster_connect_retries_indefinitely() {
        let settings = ClientSettings::from_properties(&client_properties()).unwrap();
        assert_eq!(settings.cluster_connect_timeout, None);
    }

    #[test]
    fn test_client_mode_without_addresses_fails() {
        let properties = CacheProperties::builder().mode(Mode::Client).build();

        let error = ClientSettings::from_properties(&properties).unwrap_err();
        assert!(error.is_validation_error());
    }
}
