//! Configuration types shared across the orchestrator and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::Capability;

/// Global configuration for the `Vidash` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VidashConfig {
    /// Timeout for individual connector requests.
    pub provider_timeout: Duration,
    /// Optional overall deadline for a full dashboard aggregation.
    /// If set, the whole fan-out is bounded by this deadline.
    pub request_timeout: Option<Duration>,
}

impl Default for VidashConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(5),
            request_timeout: None,
        }
    }
}

/// Staleness bounds for the caching middleware, one TTL per freshness class.
///
/// Frequently changing data (channel counters, search-ordered video lists,
/// per-video statistics) tolerates only a short window; comment threads and
/// recency-ordered lists move slowly and may be served stale for an hour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// TTL for statistics and search-ordered results.
    pub stats_ttl: Duration,
    /// TTL for comment threads and recent-video lists.
    pub list_ttl: Duration,
    /// Maximum number of cached entries across all classes.
    pub capacity: u64,
}

impl CacheConfig {
    /// TTL class for a capability, or `None` when that capability must not
    /// be cached at all.
    ///
    /// Credential-gated analytics are never cached: responses are private to
    /// the bearer of the token that fetched them.
    #[must_use]
    pub fn ttl_for(&self, cap: Capability) -> Option<Duration> {
        match cap {
            Capability::ChannelStats
            | Capability::ChannelInfo
            | Capability::PopularVideos
            | Capability::VideoStatistics
            | Capability::ChannelSearch => Some(self.stats_ttl),
            Capability::RecentVideos | Capability::Comments => Some(self.list_ttl),
            Capability::Revenue
            | Capability::ViewsSeries
            | Capability::GeoViews
            | Capability::VideoRetention => None,
            _ => None,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stats_ttl: Duration::from_secs(60),
            list_ttl: Duration::from_secs(3600),
            capacity: 1024,
        }
    }
}
