#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering::SeqCst;

use async_trait::async_trait;
use tokio::time::{Duration, sleep};

use vidash_core::VidashConnector;
use vidash_core::connector::{
    ChannelProvider, ChannelSearchProvider, CommentsProvider, GeoViewsProvider, RevenueProvider,
    VideoListProvider, VideoRetentionProvider, VideoStatsProvider, ViewsSeriesProvider,
};
use vidash_types::{
    AccessToken, ChannelHit, ChannelId, ChannelSnapshot, ChannelStats, Comment, GeoPoint,
    RawVideoRef, TimeSeriesPoint, TimeWindow, VideoRetention, VideoStatsRow, VidashError,
};

/// Simple in-memory connector used by integration tests.
///
/// Each capability is advertised only when its closure is set, so tests can
/// model connectors with missing capabilities. Call counters track how often
/// the orchestrator actually reaches the provider.
pub struct MockConnector {
    pub name: &'static str,
    pub delay_ms: u64,

    pub channel_stats_fn:
        Option<Arc<dyn Fn(&ChannelId) -> Result<ChannelStats, VidashError> + Send + Sync>>,
    pub channel_info_fn:
        Option<Arc<dyn Fn(&ChannelId) -> Result<ChannelSnapshot, VidashError> + Send + Sync>>,
    pub popular_fn: Option<
        Arc<dyn Fn(&ChannelId, u32) -> Result<Vec<RawVideoRef>, VidashError> + Send + Sync>,
    >,
    pub recent_fn: Option<
        Arc<dyn Fn(&ChannelId, u32) -> Result<Vec<RawVideoRef>, VidashError> + Send + Sync>,
    >,
    pub video_stats_fn:
        Option<Arc<dyn Fn(&[String]) -> Result<Vec<VideoStatsRow>, VidashError> + Send + Sync>>,
    pub comments_fn:
        Option<Arc<dyn Fn(&str, u32) -> Result<Vec<Comment>, VidashError> + Send + Sync>>,
    pub search_fn:
        Option<Arc<dyn Fn(&str, u32) -> Result<Vec<ChannelHit>, VidashError> + Send + Sync>>,
    pub revenue_fn: Option<Arc<dyn Fn(&TimeWindow) -> Result<f64, VidashError> + Send + Sync>>,
    pub daily_views_fn:
        Option<Arc<dyn Fn(&TimeWindow) -> Result<Vec<TimeSeriesPoint>, VidashError> + Send + Sync>>,
    pub geo_views_fn:
        Option<Arc<dyn Fn(&TimeWindow) -> Result<Vec<GeoPoint>, VidashError> + Send + Sync>>,
    pub retention_fn:
        Option<Arc<dyn Fn(&str, &TimeWindow) -> Result<VideoRetention, VidashError> + Send + Sync>>,

    pub stats_batch_calls: AtomicUsize,
    pub comments_calls: AtomicUsize,
    pub revenue_calls: AtomicUsize,
    pub retention_calls: AtomicUsize,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self {
            name: "default_mock",
            delay_ms: 0,

            channel_stats_fn: None,
            channel_info_fn: None,
            popular_fn: None,
            recent_fn: None,
            video_stats_fn: None,
            comments_fn: None,
            search_fn: None,
            revenue_fn: None,
            daily_views_fn: None,
            geo_views_fn: None,
            retention_fn: None,

            stats_batch_calls: AtomicUsize::new(0),
            comments_calls: AtomicUsize::new(0),
            revenue_calls: AtomicUsize::new(0),
            retention_calls: AtomicUsize::new(0),
        }
    }
}

impl MockConnector {
    async fn maybe_delay(&self) {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }
}

#[async_trait]
impl ChannelProvider for MockConnector {
    async fn channel_statistics(&self, channel: &ChannelId) -> Result<ChannelStats, VidashError> {
        self.maybe_delay().await;
        match &self.channel_stats_fn {
            Some(f) => (f)(channel),
            None => Err(VidashError::unsupported("channel-stats")),
        }
    }

    async fn channel_info(&self, channel: &ChannelId) -> Result<ChannelSnapshot, VidashError> {
        self.maybe_delay().await;
        match &self.channel_info_fn {
            Some(f) => (f)(channel),
            None => Err(VidashError::unsupported("channel-info")),
        }
    }
}

#[async_trait]
impl VideoListProvider for MockConnector {
    async fn most_popular(
        &self,
        channel: &ChannelId,
        max: u32,
    ) -> Result<Vec<RawVideoRef>, VidashError> {
        self.maybe_delay().await;
        match &self.popular_fn {
            Some(f) => (f)(channel, max),
            None => Err(VidashError::unsupported("popular-videos")),
        }
    }

    async fn most_recent(
        &self,
        channel: &ChannelId,
        max: u32,
    ) -> Result<Vec<RawVideoRef>, VidashError> {
        self.maybe_delay().await;
        match &self.recent_fn {
            Some(f) => (f)(channel, max),
            None => Err(VidashError::unsupported("recent-videos")),
        }
    }
}

#[async_trait]
impl VideoStatsProvider for MockConnector {
    async fn video_statistics(&self, ids: &[String]) -> Result<Vec<VideoStatsRow>, VidashError> {
        self.stats_batch_calls.fetch_add(1, SeqCst);
        self.maybe_delay().await;
        match &self.video_stats_fn {
            Some(f) => (f)(ids),
            None => Err(VidashError::unsupported("video-statistics")),
        }
    }
}

#[async_trait]
impl CommentsProvider for MockConnector {
    async fn comments(&self, video_id: &str, max: u32) -> Result<Vec<Comment>, VidashError> {
        self.comments_calls.fetch_add(1, SeqCst);
        self.maybe_delay().await;
        match &self.comments_fn {
            Some(f) => (f)(video_id, max),
            None => Err(VidashError::unsupported("comments")),
        }
    }
}

#[async_trait]
impl ChannelSearchProvider for MockConnector {
    async fn search_channels(
        &self,
        query: &str,
        max: u32,
    ) -> Result<Vec<ChannelHit>, VidashError> {
        self.maybe_delay().await;
        match &self.search_fn {
            Some(f) => (f)(query, max),
            None => Err(VidashError::unsupported("channel-search")),
        }
    }
}

#[async_trait]
impl RevenueProvider for MockConnector {
    async fn estimated_revenue(
        &self,
        _token: &AccessToken,
        window: &TimeWindow,
    ) -> Result<f64, VidashError> {
        self.revenue_calls.fetch_add(1, SeqCst);
        self.maybe_delay().await;
        match &self.revenue_fn {
            Some(f) => (f)(window),
            None => Err(VidashError::unsupported("revenue")),
        }
    }
}

#[async_trait]
impl ViewsSeriesProvider for MockConnector {
    async fn daily_views(
        &self,
        _token: &AccessToken,
        window: &TimeWindow,
    ) -> Result<Vec<TimeSeriesPoint>, VidashError> {
        self.maybe_delay().await;
        match &self.daily_views_fn {
            Some(f) => (f)(window),
            None => Err(VidashError::unsupported("views-series")),
        }
    }
}

#[async_trait]
impl GeoViewsProvider for MockConnector {
    async fn geo_views(
        &self,
        _token: &AccessToken,
        window: &TimeWindow,
    ) -> Result<Vec<GeoPoint>, VidashError> {
        self.maybe_delay().await;
        match &self.geo_views_fn {
            Some(f) => (f)(window),
            None => Err(VidashError::unsupported("geo-views")),
        }
    }
}

#[async_trait]
impl VideoRetentionProvider for MockConnector {
    async fn video_retention(
        &self,
        _token: &AccessToken,
        video_id: &str,
        window: &TimeWindow,
    ) -> Result<VideoRetention, VidashError> {
        self.retention_calls.fetch_add(1, SeqCst);
        self.maybe_delay().await;
        match &self.retention_fn {
            Some(f) => (f)(video_id, window),
            None => Err(VidashError::unsupported("video-retention")),
        }
    }
}

impl VidashConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_channel_provider(&self) -> Option<&dyn ChannelProvider> {
        (self.channel_stats_fn.is_some() || self.channel_info_fn.is_some())
            .then_some(self as &dyn ChannelProvider)
    }

    fn as_video_list_provider(&self) -> Option<&dyn VideoListProvider> {
        (self.popular_fn.is_some() || self.recent_fn.is_some())
            .then_some(self as &dyn VideoListProvider)
    }

    fn as_video_stats_provider(&self) -> Option<&dyn VideoStatsProvider> {
        self.video_stats_fn
            .is_some()
            .then_some(self as &dyn VideoStatsProvider)
    }

    fn as_comments_provider(&self) -> Option<&dyn CommentsProvider> {
        self.comments_fn
            .is_some()
            .then_some(self as &dyn CommentsProvider)
    }

    fn as_channel_search_provider(&self) -> Option<&dyn ChannelSearchProvider> {
        self.search_fn
            .is_some()
            .then_some(self as &dyn ChannelSearchProvider)
    }

    fn as_revenue_provider(&self) -> Option<&dyn RevenueProvider> {
        self.revenue_fn
            .is_some()
            .then_some(self as &dyn RevenueProvider)
    }

    fn as_views_series_provider(&self) -> Option<&dyn ViewsSeriesProvider> {
        self.daily_views_fn
            .is_some()
            .then_some(self as &dyn ViewsSeriesProvider)
    }

    fn as_geo_views_provider(&self) -> Option<&dyn GeoViewsProvider> {
        self.geo_views_fn
            .is_some()
            .then_some(self as &dyn GeoViewsProvider)
    }

    fn as_video_retention_provider(&self) -> Option<&dyn VideoRetentionProvider> {
        self.retention_fn
            .is_some()
            .then_some(self as &dyn VideoRetentionProvider)
    }
}
