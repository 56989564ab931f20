//! vidash-youtube
//!
//! Connector that implements `VidashConnector` on top of the YouTube Data API
//! (key-authenticated catalog calls) and the YouTube Analytics API
//! (bearer-token-authenticated owner reports).
#![warn(missing_docs)]

mod analytics;
mod builder;
mod catalog;

pub use builder::YtConnectorBuilder;

use async_trait::async_trait;

use vidash_core::connector::{
    ChannelProvider, ChannelSearchProvider, CommentsProvider, ConnectorKey, GeoViewsProvider,
    RevenueProvider, VideoListProvider, VideoRetentionProvider, VideoStatsProvider,
    ViewsSeriesProvider,
};
use vidash_core::{VidashConnector, geo};
use vidash_types::{
    AccessToken, ChannelHit, ChannelId, ChannelSnapshot, ChannelStats, Comment, GeoPoint,
    RawVideoRef, TimeSeriesPoint, TimeWindow, VideoRetention, VideoStatsRow, VidashError,
};

/// Connector backed by the public YouTube APIs.
///
/// Catalog calls carry the configured API key; analytics calls carry the
/// caller's bearer token and are always scoped to `channel==MINE`.
pub struct YtConnector {
    http: reqwest::Client,
    api_key: String,
    catalog_base: String,
    analytics_base: String,
}

impl YtConnector {
    /// Static connector key for log and error attribution.
    pub const KEY: ConnectorKey = ConnectorKey::new("vidash-youtube");

    /// Start building a connector. An API key is required.
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> YtConnectorBuilder {
        YtConnectorBuilder::new(api_key)
    }

    pub(crate) fn new(
        http: reqwest::Client,
        api_key: String,
        catalog_base: String,
        analytics_base: String,
    ) -> Self {
        Self {
            http,
            api_key,
            catalog_base,
            analytics_base,
        }
    }

    fn upstream(msg: impl Into<String>) -> VidashError {
        VidashError::upstream(Self::KEY.as_str(), msg)
    }
}

#[async_trait]
impl ChannelProvider for YtConnector {
    async fn channel_statistics(&self, channel: &ChannelId) -> Result<ChannelStats, VidashError> {
        catalog::fetch_channel_statistics(self, channel).await
    }

    async fn channel_info(&self, channel: &ChannelId) -> Result<ChannelSnapshot, VidashError> {
        catalog::fetch_channel_info(self, channel).await
    }
}

#[async_trait]
impl VideoListProvider for YtConnector {
    async fn most_popular(
        &self,
        channel: &ChannelId,
        max: u32,
    ) -> Result<Vec<RawVideoRef>, VidashError> {
        catalog::fetch_video_list(self, channel, "viewCount", max).await
    }

    async fn most_recent(
        &self,
        channel: &ChannelId,
        max: u32,
    ) -> Result<Vec<RawVideoRef>, VidashError> {
        catalog::fetch_video_list(self, channel, "date", max).await
    }
}

#[async_trait]
impl VideoStatsProvider for YtConnector {
    async fn video_statistics(&self, ids: &[String]) -> Result<Vec<VideoStatsRow>, VidashError> {
        catalog::fetch_video_statistics(self, ids).await
    }
}

#[async_trait]
impl CommentsProvider for YtConnector {
    async fn comments(&self, video_id: &str, max: u32) -> Result<Vec<Comment>, VidashError> {
        catalog::fetch_comments(self, video_id, max).await
    }
}

#[async_trait]
impl ChannelSearchProvider for YtConnector {
    async fn search_channels(
        &self,
        query: &str,
        max: u32,
    ) -> Result<Vec<ChannelHit>, VidashError> {
        catalog::search_channels(self, query, max).await
    }
}

#[async_trait]
impl RevenueProvider for YtConnector {
    async fn estimated_revenue(
        &self,
        token: &AccessToken,
        window: &TimeWindow,
    ) -> Result<f64, VidashError> {
        analytics::fetch_estimated_revenue(self, token, window).await
    }
}

#[async_trait]
impl ViewsSeriesProvider for YtConnector {
    async fn daily_views(
        &self,
        token: &AccessToken,
        window: &TimeWindow,
    ) -> Result<Vec<TimeSeriesPoint>, VidashError> {
        analytics::fetch_daily_views(self, token, window).await
    }
}

#[async_trait]
impl GeoViewsProvider for YtConnector {
    async fn geo_views(
        &self,
        token: &AccessToken,
        window: &TimeWindow,
    ) -> Result<Vec<GeoPoint>, VidashError> {
        let mut points = analytics::fetch_geo_views(self, token, window).await?;
        for point in &mut points {
            point.id = geo::to_alpha2(&point.id);
        }
        Ok(points)
    }
}

#[async_trait]
impl VideoRetentionProvider for YtConnector {
    async fn video_retention(
        &self,
        token: &AccessToken,
        video_id: &str,
        window: &TimeWindow,
    ) -> Result<VideoRetention, VidashError> {
        analytics::fetch_video_retention(self, token, video_id, window).await
    }
}

impl VidashConnector for YtConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "YouTube"
    }

    fn as_channel_provider(&self) -> Option<&dyn ChannelProvider> {
        Some(self)
    }

    fn as_video_list_provider(&self) -> Option<&dyn VideoListProvider> {
        Some(self)
    }

    fn as_video_stats_provider(&self) -> Option<&dyn VideoStatsProvider> {
        Some(self)
    }

    fn as_comments_provider(&self) -> Option<&dyn CommentsProvider> {
        Some(self)
    }

    fn as_channel_search_provider(&self) -> Option<&dyn ChannelSearchProvider> {
        Some(self)
    }

    fn as_revenue_provider(&self) -> Option<&dyn RevenueProvider> {
        Some(self)
    }

    fn as_views_series_provider(&self) -> Option<&dyn ViewsSeriesProvider> {
        Some(self)
    }

    fn as_geo_views_provider(&self) -> Option<&dyn GeoViewsProvider> {
        Some(self)
    }

    fn as_video_retention_provider(&self) -> Option<&dyn VideoRetentionProvider> {
        Some(self)
    }
}
