//! Named cache-region settings and the configurer seam.
//!
//! Applications add per-region configuration (retention, size bounds)
//! by implementing [`CacheConfigurer`] and handing it to server
//! settings assembly. When no configurer is provided the
//! [`NoOpCacheConfigurer`] fallback leaves the region map empty.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::settings::ServerSettings;

/// Eviction policy hint for a cache region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionPolicy {
    /// Least recently used entries are evicted first. This is the
    /// default.
    #[default]
    Lru,
    /// Least frequently used entries are evicted first.
    Lfu,
    /// No eviction; writes fail once the region is full.
    None,
}

/// Interpretation of a region's max-size value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaxSizePolicy {
    /// Maximum number of entries per cluster member. This is the
    /// default.
    #[default]
    PerNode,
    /// Maximum used heap size in megabytes.
    UsedHeapSize,
    /// Maximum used heap size as a percentage.
    UsedHeapPercentage,
}

/// Configuration for one named cache region.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use kiln_cluster::RegionSettings;
///
/// let region = RegionSettings::builder()
///     .time_to_live(Duration::from_secs(300))
///     .max_size(10_000)
///     .build();
///
/// assert_eq!(region.time_to_live, Duration::from_secs(300));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSettings {
    /// Maximum duration for which values are retained. Zero means no
    /// time-based expiry.
    #[serde(with = "crate::properties::duration_secs")]
    pub time_to_live: Duration,

    /// Maximum region size, interpreted per `max_size_policy`. Zero
    /// disables the bound.
    pub max_size: u32,

    /// Interpretation of the max-size value.
    pub max_size_policy: MaxSizePolicy,

    /// Eviction policy applied once the size bound is reached.
    pub eviction_policy: EvictionPolicy,
}

impl Default for RegionSettings {
    fn default() -> Self {
        Self {
            time_to_live: Duration::ZERO,
            max_size: 0,
            max_size_policy: MaxSizePolicy::PerNode,
            eviction_policy: EvictionPolicy::Lru,
        }
    }
}

impl RegionSettings {
    /// Creates a new builder for RegionSettings.
    pub fn builder() -> RegionSettingsBuilder {
        RegionSettingsBuilder::default()
    }
}

/// Builder for RegionSettings.
#[derive(Debug, Default)]
pub struct RegionSettingsBuilder {
    settings: RegionSettings,
}

impl RegionSettingsBuilder {
    /// Sets the retention duration.
    pub fn time_to_live(mut self, ttl: Duration) -> Self {
        self.settings.time_to_live = ttl;
        self
    }

    /// Sets the maximum region size.
    pub fn max_size(mut self, size: u32) -> Self {
        self.settings.max_size = size;
        self
    }

    /// Sets the interpretation of the max-size value.
    pub fn max_size_policy(mut self, policy: MaxSizePolicy) -> Self {
        self.settings.max_size_policy = policy;
        self
    }

    /// Sets the eviction policy.
    pub fn eviction_policy(mut self, policy: EvictionPolicy) -> Self {
        self.settings.eviction_policy = policy;
        self
    }

    /// Builds the region settings.
    pub fn build(self) -> RegionSettings {
        self.settings
    }
}

/// Hook for adding custom cache-region configuration during server
/// settings assembly.
///
/// Implementations receive the assembled [`ServerSettings`] and may
/// register named regions on it.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use kiln_cluster::{CacheConfigurer, RegionSettings, ServerSettings};
///
/// struct SessionRegions;
///
/// impl CacheConfigurer for SessionRegions {
///     fn configure(&self, settings: &mut ServerSettings) {
///         settings.add_region(
///             "sessions",
///             RegionSettings::builder()
///                 .time_to_live(Duration::from_secs(1800))
///                 .max_size(50_000)
///                 .build(),
///         );
///     }
/// }
/// ```
pub trait CacheConfigurer {
    /// Configures cache regions on the assembled settings.
    fn configure(&self, settings: &mut ServerSettings);
}

/// No-op implementation of [`CacheConfigurer`].
///
/// Used as fallback when no other configurer is provided.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCacheConfigurer;

impl CacheConfigurer for NoOpCacheConfigurer {
    fn configure(&self, _settings: &mut ServerSettings) {
        // No-op
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::CacheProperties;

    #[test]
    fn test_region_defaults() {
        let region = RegionSettings::default();

        assert_eq!(region.time_to_live, Duration::ZERO);
        assert_eq!(region.max_size, 0);
        assert_eq!(region.max_size_policy, MaxSizePolicy::PerNode);
        assert_eq!(region.eviction_policy, EvictionPolicy::Lru);
    }

    #[test]
    fn test_region_builder() {
        let region = RegionSettings::builder()
            .time_to_live(Duration::from_secs(600))
            .max_size(1_000)
            .max_size_policy(MaxSizePolicy::UsedHeapSize)
            .eviction_policy(EvictionPolicy::Lfu)
            .build();

        assert_eq!(region.time_to_live, Duration::from_secs(600));
        assert_eq!(region.max_size, 1_000);
        assert_eq!(region.max_size_policy, MaxSizePolicy::UsedHeapSize);
        assert_eq!(region.eviction_policy, EvictionPolicy::Lfu);
    }

    #[test]
    fn test_noop_configurer_adds_nothing() {
        let properties = CacheProperties::default();
        let settings =
            ServerSettings::from_properties_with(&properties, &NoOpCacheConfigurer).unwrap();

        assert!(settings.regions.is_empty());
    }

    #[test]
    fn test_custom_configurer_registers_regions() {
        struct TwoRegions;

        impl CacheConfigurer for TwoRegions {
            fn configure(&self, settings: &mut ServerSettings) {
                settings.add_region("sessions", RegionSettings::default());
                settings.add_region(
                    "catalog",
                    RegionSettings::builder().max_size(500).build(),
                );
            }
        }

        let properties = CacheProperties::default();
        let settings = ServerSettings::from_properties_with(&properties, &TwoRegions).unwrap();

        // Registration order is preserved
        let names: Vec<_> = settings.regions.keys().cloned().collect();
        assert_eq!(names, ["sessions", "catalog"]);
        assert_eq!(settings.regions["catalog"].max_size, 500);
    }

    #[test]
    fn test_policy_serde_names() {
        let json = serde_json::to_string(&MaxSizePolicy::UsedHeapSize).unwrap();
        assert_eq!(json, "\"usedHeapSize\"");

        let json = serde_json::to_string(&EvictionPolicy::Lru).unwrap();
        assert_eq!(json, "\"lru\"");
    }
}
