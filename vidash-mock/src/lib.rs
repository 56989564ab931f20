//! vidash-mock
//!
//! Deterministic fixture connector for CI-safe tests and demos. Recognizes
//! the channel `UC_MOCK`; a handful of magic identifiers force failure paths:
//!
//! - channel `UC_FAIL` fails every channel call
//! - video `vid-broken` fails comment fetches
//! - batches containing `vid-batch-fail` fail the statistics call

use async_trait::async_trait;

use vidash_core::VidashConnector;
use vidash_core::connector::{
    ChannelProvider, ChannelSearchProvider, CommentsProvider, GeoViewsProvider, RevenueProvider,
    VideoListProvider, VideoRetentionProvider, VideoStatsProvider, ViewsSeriesProvider,
};
use vidash_types::{
    AccessToken, ChannelHit, ChannelId, ChannelSnapshot, ChannelStats, Comment, GeoPoint,
    RawVideoRef, TimeSeriesPoint, TimeWindow, VideoRetention, VideoStatsRow, VidashError,
};

mod fixtures;

/// Mock connector providing deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Create the connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn forced_failure(capability: &str) -> VidashError {
        VidashError::upstream("vidash-mock", format!("forced failure: {capability}"))
    }

    fn check_channel(channel: &ChannelId, capability: &str) -> Result<(), VidashError> {
        if channel.as_str() == "UC_FAIL" {
            return Err(Self::forced_failure(capability));
        }
        Ok(())
    }
}

impl VidashConnector for MockConnector {
    fn name(&self) -> &'static str {
        "vidash-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_channel_provider(&self) -> Option<&dyn ChannelProvider> {
        Some(self as &dyn ChannelProvider)
    }
    fn as_video_list_provider(&self) -> Option<&dyn VideoListProvider> {
        Some(self as &dyn VideoListProvider)
    }
    fn as_video_stats_provider(&self) -> Option<&dyn VideoStatsProvider> {
        Some(self as &dyn VideoStatsProvider)
    }
    fn as_comments_provider(&self) -> Option<&dyn CommentsProvider> {
        Some(self as &dyn CommentsProvider)
    }
    fn as_channel_search_provider(&self) -> Option<&dyn ChannelSearchProvider> {
        Some(self as &dyn ChannelSearchProvider)
    }
    fn as_revenue_provider(&self) -> Option<&dyn RevenueProvider> {
        Some(self as &dyn RevenueProvider)
    }
    fn as_views_series_provider(&self) -> Option<&dyn ViewsSeriesProvider> {
        Some(self as &dyn ViewsSeriesProvider)
    }
    fn as_geo_views_provider(&self) -> Option<&dyn GeoViewsProvider> {
        Some(self as &dyn GeoViewsProvider)
    }
    fn as_video_retention_provider(&self) -> Option<&dyn VideoRetentionProvider> {
        Some(self as &dyn VideoRetentionProvider)
    }
}

#[async_trait]
impl ChannelProvider for MockConnector {
    async fn channel_statistics(&self, channel: &ChannelId) -> Result<ChannelStats, VidashError> {
        Self::check_channel(channel, "channel-stats")?;
        fixtures::channel::stats_by_id(channel.as_str())
            .ok_or_else(|| VidashError::not_found(format!("channel {channel}")))
    }

    async fn channel_info(&self, channel: &ChannelId) -> Result<ChannelSnapshot, VidashError> {
        Self::check_channel(channel, "channel-info")?;
        fixtures::channel::snapshot_by_id(channel.as_str())
            .ok_or_else(|| VidashError::not_found(format!("channel {channel}")))
    }
}

#[async_trait]
impl VideoListProvider for MockConnector {
    async fn most_popular(
        &self,
        channel: &ChannelId,
        max: u32,
    ) -> Result<Vec<RawVideoRef>, VidashError> {
        Self::check_channel(channel, "popular-videos")?;
        let mut refs = fixtures::videos::popular();
        refs.truncate(max as usize);
        Ok(refs)
    }

    async fn most_recent(
        &self,
        channel: &ChannelId,
        max: u32,
    ) -> Result<Vec<RawVideoRef>, VidashError> {
        Self::check_channel(channel, "recent-videos")?;
        let mut refs = fixtures::videos::recent();
        refs.truncate(max as usize);
        Ok(refs)
    }
}

#[async_trait]
impl VideoStatsProvider for MockConnector {
    async fn video_statistics(&self, ids: &[String]) -> Result<Vec<VideoStatsRow>, VidashError> {
        if ids.iter().any(|id| id == "vid-batch-fail") {
            return Err(Self::forced_failure("video-statistics"));
        }
        Ok(fixtures::videos::statistics_for(ids))
    }
}

#[async_trait]
impl CommentsProvider for MockConnector {
    async fn comments(&self, video_id: &str, max: u32) -> Result<Vec<Comment>, VidashError> {
        if video_id == "vid-broken" {
            return Err(Self::forced_failure("comments"));
        }
        let mut comments = fixtures::comments::for_video(video_id);
        comments.truncate(max as usize);
        Ok(comments)
    }
}

#[async_trait]
impl ChannelSearchProvider for MockConnector {
    async fn search_channels(
        &self,
        query: &str,
        max: u32,
    ) -> Result<Vec<ChannelHit>, VidashError> {
        let mut hits = fixtures::channel::search(query);
        hits.truncate(max as usize);
        Ok(hits)
    }
}

#[async_trait]
impl RevenueProvider for MockConnector {
    async fn estimated_revenue(
        &self,
        _token: &AccessToken,
        _window: &TimeWindow,
    ) -> Result<f64, VidashError> {
        Ok(fixtures::analytics::REVENUE_USD)
    }
}

#[async_trait]
impl ViewsSeriesProvider for MockConnector {
    async fn daily_views(
        &self,
        _token: &AccessToken,
        window: &TimeWindow,
    ) -> Result<Vec<TimeSeriesPoint>, VidashError> {
        Ok(fixtures::analytics::daily_views(window))
    }
}

#[async_trait]
impl GeoViewsProvider for MockConnector {
    async fn geo_views(
        &self,
        _token: &AccessToken,
        _window: &TimeWindow,
    ) -> Result<Vec<GeoPoint>, VidashError> {
        Ok(fixtures::analytics::geo_views())
    }
}

#[async_trait]
impl VideoRetentionProvider for MockConnector {
    async fn video_retention(
        &self,
        _token: &AccessToken,
        video_id: &str,
        _window: &TimeWindow,
    ) -> Result<VideoRetention, VidashError> {
        Ok(fixtures::analytics::retention_for(video_id))
    }
}
