//! # Kiln Cluster
//!
//! Cluster configuration assembly for Kiln Config.
//!
//! This crate binds a typed property tree to the client/server
//! settings of an embedded distributed cache. It owns parsing,
//! defaulting and validation of the properties plus the expansion of
//! grouped well-known-member notation; the cache engine consuming the
//! assembled settings is an external collaborator.
//!
//! ## Features
//!
//! - Serde-typed property tree with per-field defaults
//! - Property loading from YAML files with `KILN_*` environment
//!   overrides
//! - Client and server settings assembly, including well-known member
//!   expansion with self-exclusion
//! - A configurer seam for registering named cache regions
//!
//! ## Example
//!
//! ```
//! use kiln_cluster::{CacheProperties, ServerSettings};
//!
//! let yaml = r#"
//! clusterName: orders
//! server:
//!   primaryAddress: 10.0.0.1
//!   cluster:
//!     enabled: true
//!     members:
//!       - 10.0.0.1:0[5701-5702]
//!       - 10.0.0.2:5701
//! "#;
//!
//! let properties = CacheProperties::from_yaml_str(yaml)?;
//! let settings = ServerSettings::from_properties(&properties)?;
//!
//! // 10.0.0.1:5701 is this node's own endpoint and is excluded
//! assert_eq!(settings.join.tcp_ip.members.len(), 2);
//! # Ok::<(), kiln_cluster::ClusterConfigError>(())
//! ```

pub mod error;
pub mod properties;
pub mod regions;
pub mod settings;

mod load;

// Re-exports
pub use error::ClusterConfigError;
pub use properties::{
    CacheProperties, CachePropertiesBuilder, ClientProperties, ClientPropertiesBuilder,
    ClusterProperties, Mode, MulticastProperties, MulticastPropertiesBuilder,
    PortAutoIncrementProperties, ServerProperties, ServerPropertiesBuilder,
    SmartRoutingProperties,
};
pub use regions::{
    CacheConfigurer, EvictionPolicy, MaxSizePolicy, NoOpCacheConfigurer, RegionSettings,
    RegionSettingsBuilder,
};
pub use settings::{
    ClientSettings, JoinSettings, MulticastSettings, NetworkSettings, RoutingMode,
    ServerSettings, TcpIpSettings, well_known_members,
};

// Re-export kiln_core for consumers
pub use kiln_core;
