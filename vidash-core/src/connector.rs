use async_trait::async_trait;

pub use vidash_types::ConnectorKey;
use vidash_types::{
    AccessToken, ChannelHit, ChannelId, ChannelSnapshot, ChannelStats, Comment, GeoPoint,
    RawVideoRef, TimeSeriesPoint, TimeWindow, VideoRetention, VideoStatsRow, VidashError,
};

/// Focused role trait for connectors that provide channel data.
#[async_trait]
pub trait ChannelProvider: Send + Sync {
    /// Fetch headline counters for the given channel.
    async fn channel_statistics(&self, channel: &ChannelId) -> Result<ChannelStats, VidashError>;

    /// Fetch the full channel record, branding metadata included.
    async fn channel_info(&self, channel: &ChannelId) -> Result<ChannelSnapshot, VidashError>;
}

/// Focused role trait for connectors that list a channel's videos.
#[async_trait]
pub trait VideoListProvider: Send + Sync {
    /// Fetch up to `max` videos ordered by view count, most viewed first.
    async fn most_popular(
        &self,
        channel: &ChannelId,
        max: u32,
    ) -> Result<Vec<RawVideoRef>, VidashError>;

    /// Fetch up to `max` videos ordered by upload date, newest first.
    async fn most_recent(
        &self,
        channel: &ChannelId,
        max: u32,
    ) -> Result<Vec<RawVideoRef>, VidashError>;
}

/// Focused role trait for connectors that provide per-video counters.
#[async_trait]
pub trait VideoStatsProvider: Send + Sync {
    /// Fetch counters for all the given video ids in a single batched call.
    ///
    /// The result may omit rows for ids the upstream does not know; callers
    /// join by id rather than by position.
    async fn video_statistics(&self, ids: &[String]) -> Result<Vec<VideoStatsRow>, VidashError>;
}

/// Focused role trait for connectors that provide video comments.
#[async_trait]
pub trait CommentsProvider: Send + Sync {
    /// Fetch up to `max` top-level comments for one video.
    async fn comments(&self, video_id: &str, max: u32) -> Result<Vec<Comment>, VidashError>;
}

/// Focused role trait for connectors that search channels by name.
#[async_trait]
pub trait ChannelSearchProvider: Send + Sync {
    /// Search channels matching `query`, joined with their counters.
    async fn search_channels(&self, query: &str, max: u32)
    -> Result<Vec<ChannelHit>, VidashError>;
}

/// Focused role trait for connectors that report estimated revenue.
#[async_trait]
pub trait RevenueProvider: Send + Sync {
    /// Total estimated revenue over the window, in the provider's native
    /// currency (USD).
    async fn estimated_revenue(
        &self,
        token: &AccessToken,
        window: &TimeWindow,
    ) -> Result<f64, VidashError>;
}

/// Focused role trait for connectors that report the daily views series.
#[async_trait]
pub trait ViewsSeriesProvider: Send + Sync {
    /// Per-day views over the window, in day order.
    async fn daily_views(
        &self,
        token: &AccessToken,
        window: &TimeWindow,
    ) -> Result<Vec<TimeSeriesPoint>, VidashError>;
}

/// Focused role trait for connectors that report views by country.
#[async_trait]
pub trait GeoViewsProvider: Send + Sync {
    /// Per-country views over the window, most viewed first, alpha-2 coded.
    async fn geo_views(
        &self,
        token: &AccessToken,
        window: &TimeWindow,
    ) -> Result<Vec<GeoPoint>, VidashError>;
}

/// Focused role trait for connectors that report per-video retention.
#[async_trait]
pub trait VideoRetentionProvider: Send + Sync {
    /// Watch-time metrics for one video over the window.
    async fn video_retention(
        &self,
        token: &AccessToken,
        video_id: &str,
        window: &TimeWindow,
    ) -> Result<VideoRetention, VidashError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
#[async_trait]
pub trait VidashConnector: Send + Sync {
    /// A stable identifier for logs and error attribution (e.g., "vidash-youtube").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise channel capability by returning a usable trait object reference when supported.
    fn as_channel_provider(&self) -> Option<&dyn ChannelProvider> {
        None
    }

    /// Advertise video-listing capability.
    fn as_video_list_provider(&self) -> Option<&dyn VideoListProvider> {
        None
    }

    /// Advertise batched video-statistics capability.
    fn as_video_stats_provider(&self) -> Option<&dyn VideoStatsProvider> {
        None
    }

    /// Advertise comments capability.
    fn as_comments_provider(&self) -> Option<&dyn CommentsProvider> {
        None
    }

    /// Advertise channel-search capability.
    fn as_channel_search_provider(&self) -> Option<&dyn ChannelSearchProvider> {
        None
    }

    /// Advertise revenue-reporting capability.
    fn as_revenue_provider(&self) -> Option<&dyn RevenueProvider> {
        None
    }

    /// Advertise daily-views-series capability.
    fn as_views_series_provider(&self) -> Option<&dyn ViewsSeriesProvider> {
        None
    }

    /// Advertise geographic-views capability.
    fn as_geo_views_provider(&self) -> Option<&dyn GeoViewsProvider> {
        None
    }

    /// Advertise per-video retention capability.
    fn as_video_retention_provider(&self) -> Option<&dyn VideoRetentionProvider> {
        None
    }
}

/// Generate `as_*_provider` accessors for a wrapper that implements
/// `VidashConnector` by delegating to an inner field.
#[macro_export]
macro_rules! vidash_connector_accessors {
    ($inner:ident) => {
        fn as_channel_provider(&self) -> Option<&dyn $crate::connector::ChannelProvider> {
            if self.$inner.as_channel_provider().is_some() {
                Some(self as &dyn $crate::connector::ChannelProvider)
            } else {
                None
            }
        }
        fn as_video_list_provider(&self) -> Option<&dyn $crate::connector::VideoListProvider> {
            if self.$inner.as_video_list_provider().is_some() {
                Some(self as &dyn $crate::connector::VideoListProvider)
            } else {
                None
            }
        }
        fn as_video_stats_provider(&self) -> Option<&dyn $crate::connector::VideoStatsProvider> {
            if self.$inner.as_video_stats_provider().is_some() {
                Some(self as &dyn $crate::connector::VideoStatsProvider)
            } else {
                None
            }
        }
        fn as_comments_provider(&self) -> Option<&dyn $crate::connector::CommentsProvider> {
            if self.$inner.as_comments_provider().is_some() {
                Some(self as &dyn $crate::connector::CommentsProvider)
            } else {
                None
            }
        }
        fn as_channel_search_provider(
            &self,
        ) -> Option<&dyn $crate::connector::ChannelSearchProvider> {
            if self.$inner.as_channel_search_provider().is_some() {
                Some(self as &dyn $crate::connector::ChannelSearchProvider)
            } else {
                None
            }
        }
        fn as_revenue_provider(&self) -> Option<&dyn $crate::connector::RevenueProvider> {
            if self.$inner.as_revenue_provider().is_some() {
                Some(self as &dyn $crate::connector::RevenueProvider)
            } else {
                None
            }
        }
        fn as_views_series_provider(&self) -> Option<&dyn $crate::connector::ViewsSeriesProvider> {
            if self.$inner.as_views_series_provider().is_some() {
                Some(self as &dyn $crate::connector::ViewsSeriesProvider)
            } else {
                None
            }
        }
        fn as_geo_views_provider(&self) -> Option<&dyn $crate::connector::GeoViewsProvider> {
            if self.$inner.as_geo_views_provider().is_some() {
                Some(self as &dyn $crate::connector::GeoViewsProvider)
            } else {
                None
            }
        }
        fn as_video_retention_provider(
            &self,
        ) -> Option<&dyn $crate::connector::VideoRetentionProvider> {
            if self.$inner.as_video_retention_provider().is_some() {
                Some(self as &dyn $crate::connector::VideoRetentionProvider)
            } else {
                None
            }
        }
    };
}
