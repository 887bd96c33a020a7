//! Property loading from files and the environment.
//!
//! Properties come from an optional YAML file, with a set of `KILN_*`
//! environment variables layered on top. Environment values always
//! win over file values; anything not configured keeps its default.

use std::path::Path;

use tracing::{debug, info};

use crate::error::ClusterConfigError;
use crate::properties::{CacheProperties, Mode};

/// Environment variables recognized as property overrides.
const ENV_MODE: &str = "KILN_CACHE_MODE";
const ENV_CLUSTER_NAME: &str = "KILN_CLUSTER_NAME";
const ENV_INSTANCE_NAME: &str = "KILN_INSTANCE_NAME";
const ENV_SERVER_PORT: &str = "KILN_SERVER_PORT";
const ENV_PRIMARY_ADDRESS: &str = "KILN_PRIMARY_ADDRESS";
const ENV_CLUSTER_ENABLED: &str = "KILN_CLUSTER_ENABLED";
const ENV_CLUSTER_MEMBERS: &str = "KILN_CLUSTER_MEMBERS";
const ENV_CLIENT_ADDRESSES: &str = "KILN_CLIENT_ADDRESSES";

impl CacheProperties {
    /// Parses properties from YAML content.
    pub fn from_yaml_str(content: &str) -> Result<Self, ClusterConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ClusterConfigError::parse("properties", e.to_string()))
    }

    /// Parses properties from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ClusterConfigError> {
        let content = std::fs::read_to_string(path)?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            ClusterConfigError::Parse { reason, .. } => ClusterConfigError::parse(path, reason),
            other => other,
        })
    }

    /// Loads properties from an optional file plus environment
    /// overrides.
    ///
    /// With no file and no relevant environment variables set, the
    /// result is the default property tree.
    pub fn load(path: Option<&Path>) -> Result<Self, ClusterConfigError> {
        let mut properties = match path {
            Some(path) => {
                let properties = Self::from_yaml_file(path)?;
                info!("Loaded cache properties from {:?}", path);
                properties
            }
            None => Self::default(),
        };

        properties.apply_env_overrides()?;

        Ok(properties)
    }

    /// Applies `KILN_*` environment variables on top of the current
    /// values.
    pub fn apply_env_overrides(&mut self) -> Result<(), ClusterConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup. Split out from
    /// [`apply_env_overrides`](Self::apply_env_overrides) so override
    /// handling stays testable without touching the process
    /// environment.
    fn apply_overrides(
        &mut self,
        get: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ClusterConfigError> {
        if let Some(mode) = get(ENV_MODE) {
            let mode = match mode.as_str() {
                "client" => Mode::Client,
                "server" => Mode::Server,
                other => {
                    return Err(ClusterConfigError::invalid_property(
                        ENV_MODE,
                        format!("unknown mode '{}', expected 'client' or 'server'", other),
                    ));
                }
            };
            self.set_mode(mode);
            debug!("Applied override {}", ENV_MODE);
        }

        if let Some(name) = get(ENV_CLUSTER_NAME) {
            self.set_cluster_name(name);
            debug!("Applied override {}", ENV_CLUSTER_NAME);
        }

        if let Some(name) = get(ENV_INSTANCE_NAME) {
            self.set_instance_name(name);
            debug!("Applied override {}", ENV_INSTANCE_NAME);
        }

        if let Some(port) = get(ENV_SERVER_PORT) {
            let port = port.parse::<u16>().map_err(|_| {
                ClusterConfigError::invalid_property(ENV_SERVER_PORT, "must be a valid port number")
            })?;
            self.server_mut().set_port(port);
            debug!("Applied override {}", ENV_SERVER_PORT);
        }

        if let Some(address) = get(ENV_PRIMARY_ADDRESS) {
            self.server_mut().set_primary_address(address);
            debug!("Applied override {}", ENV_PRIMARY_ADDRESS);
        }

        if let Some(enabled) = get(ENV_CLUSTER_ENABLED) {
            let enabled = enabled.parse::<bool>().map_err(|_| {
                ClusterConfigError::invalid_property(
                    ENV_CLUSTER_ENABLED,
                    "must be 'true' or 'false'",
                )
            })?;
            self.server_mut().set_clustering(enabled);
            debug!("Applied override {}", ENV_CLUSTER_ENABLED);
        }

        if let Some(members) = get(ENV_CLUSTER_MEMBERS) {
            self.server_mut().set_members(split_list(&members));
            debug!("Applied override {}", ENV_CLUSTER_MEMBERS);
        }

        if let Some(addresses) = get(ENV_CLIENT_ADDRESSES) {
            self.client_mut().set_server_addresses(split_list(&addresses));
            debug!("Applied override {}", ENV_CLIENT_ADDRESSES);
        }

        Ok(())
    }
}

/// Splits a comma-separated list value, trimming each entry.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
