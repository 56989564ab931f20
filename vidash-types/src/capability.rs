use core::fmt;

use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, caching, and telemetry.
///
/// These map one-to-one with connector role traits and allow consistent
/// Display formatting and match-exhaustive handling when adding new
/// capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Public counters for a channel (subscribers, videos, views).
    ChannelStats,
    /// Full channel record (title, description, thumbnails, counters).
    ChannelInfo,
    /// Videos of a channel ordered by view count.
    PopularVideos,
    /// Videos of a channel ordered by publish date.
    RecentVideos,
    /// Batched per-video public statistics.
    VideoStatistics,
    /// Top-level comment threads for a single video.
    Comments,
    /// Free-text channel search.
    ChannelSearch,

    /// Credential-gated estimated revenue.
    Revenue,
    /// Credential-gated daily views time series.
    ViewsSeries,
    /// Credential-gated per-country view breakdown.
    GeoViews,
    /// Credential-gated per-video retention metrics.
    VideoRetention,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ChannelStats => "channel-stats",
            Self::ChannelInfo => "channel-info",
            Self::PopularVideos => "popular-videos",
            Self::RecentVideos => "recent-videos",
            Self::VideoStatistics => "video-statistics",
            Self::Comments => "comments",
            Self::ChannelSearch => "channel-search",
            Self::Revenue => "revenue",
            Self::ViewsSeries => "views-series",
            Self::GeoViews => "geo-views",
            Self::VideoRetention => "video-retention",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
