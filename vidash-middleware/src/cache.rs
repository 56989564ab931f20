use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;

use vidash_core::connector::{
    ChannelProvider, ChannelSearchProvider, CommentsProvider, GeoViewsProvider, RevenueProvider,
    VideoListProvider, VideoRetentionProvider, VideoStatsProvider, ViewsSeriesProvider,
};
use vidash_core::{VidashConnector, vidash_connector_accessors};
use vidash_types::{
    AccessToken, CacheConfig, Capability, ChannelHit, ChannelId, ChannelSnapshot, ChannelStats,
    Comment, GeoPoint, RawVideoRef, TimeSeriesPoint, TimeWindow, VideoRetention, VideoStatsRow,
    VidashError,
};

/// Identity of a bounded listing call for caching discrimination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ListKey {
    id: String,
    max: u32,
}

impl ListKey {
    fn new(id: &str, max: u32) -> Self {
        Self {
            id: id.to_string(),
            max,
        }
    }
}

// Per-capability typed stores; `None` means the capability is uncached.
struct Stores {
    channel_stats: Option<Cache<String, Arc<ChannelStats>>>,
    channel_info: Option<Cache<String, Arc<ChannelSnapshot>>>,
    popular: Option<Cache<ListKey, Arc<Vec<RawVideoRef>>>>,
    recent: Option<Cache<ListKey, Arc<Vec<RawVideoRef>>>>,
    video_stats: Option<Cache<String, Arc<Vec<VideoStatsRow>>>>,
    comments: Option<Cache<ListKey, Arc<Vec<Comment>>>>,
    search: Option<Cache<ListKey, Arc<Vec<ChannelHit>>>>,
}

/// Declarative wrapper that applies caching when building a connector stack.
pub struct CacheMiddleware {
    cfg: CacheConfig,
}

impl CacheMiddleware {
    /// Create a cache layer with the given staleness bounds.
    #[must_use]
    pub const fn new(cfg: CacheConfig) -> Self {
        Self { cfg }
    }
}

impl vidash_core::Middleware for CacheMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn VidashConnector>) -> Arc<dyn VidashConnector> {
        let Self { cfg } = *self;
        Arc::new(CachingConnector::new(inner, &cfg))
    }

    fn name(&self) -> &'static str {
        "CachingMiddleware"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "stats_ttl_ms": self.cfg.stats_ttl.as_millis() as u64,
            "list_ttl_ms": self.cfg.list_ttl.as_millis() as u64,
            "capacity": self.cfg.capacity,
        })
    }
}

/// Connector wrapper that serves repeated catalog calls from memory.
///
/// Credential-gated analytics are forwarded untouched: cached analytics would
/// leak one caller's private data to the next.
pub struct CachingConnector {
    inner: Arc<dyn VidashConnector>,
    stores: Stores,
}

impl CachingConnector {
    fn maybe_store<K, V>(cfg: &CacheConfig, cap: Capability) -> Option<Cache<K, V>>
    where
        K: std::hash::Hash + Eq + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        let ttl: Duration = cfg.ttl_for(cap)?;
        Some(
            Cache::builder()
                .max_capacity(cfg.capacity)
                .time_to_live(ttl)
                .build(),
        )
    }

    /// Wrap `inner` with per-capability caches sized and aged per `cfg`.
    #[must_use]
    pub fn new(inner: Arc<dyn VidashConnector>, cfg: &CacheConfig) -> Self {
        let stores = Stores {
            channel_stats: Self::maybe_store(cfg, Capability::ChannelStats),
            channel_info: Self::maybe_store(cfg, Capability::ChannelInfo),
            popular: Self::maybe_store(cfg, Capability::PopularVideos),
            recent: Self::maybe_store(cfg, Capability::RecentVideos),
            video_stats: Self::maybe_store(cfg, Capability::VideoStatistics),
            comments: Self::maybe_store(cfg, Capability::Comments),
            search: Self::maybe_store(cfg, Capability::ChannelSearch),
        };
        Self { inner, stores }
    }
}

impl VidashConnector for CachingConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    vidash_connector_accessors!(inner);
}

#[async_trait]
impl ChannelProvider for CachingConnector {
    async fn channel_statistics(&self, channel: &ChannelId) -> Result<ChannelStats, VidashError> {
        if let Some(store) = &self.stores.channel_stats {
            let key = channel.as_str().to_string();
            if let Some(v) = store.get(&key).await {
                return Ok(*v);
            }
            let inner = self
                .inner
                .as_channel_provider()
                .ok_or_else(|| VidashError::unsupported("channel-stats"))?;
            let value = inner.channel_statistics(channel).await?;
            store.insert(key, Arc::new(value)).await;
            return Ok(value);
        }
        self.inner
            .as_channel_provider()
            .ok_or_else(|| VidashError::unsupported("channel-stats"))?
            .channel_statistics(channel)
            .await
    }

    async fn channel_info(&self, channel: &ChannelId) -> Result<ChannelSnapshot, VidashError> {
        if let Some(store) = &self.stores.channel_info {
            let key = channel.as_str().to_string();
            if let Some(v) = store.get(&key).await {
                return Ok((*v).clone());
            }
            let inner = self
                .inner
                .as_channel_provider()
                .ok_or_else(|| VidashError::unsupported("channel-info"))?;
            let value = inner.channel_info(channel).await?;
            store.insert(key, Arc::new(value.clone())).await;
            return Ok(value);
        }
        self.inner
            .as_channel_provider()
            .ok_or_else(|| VidashError::unsupported("channel-info"))?
            .channel_info(channel)
            .await
    }
}

#[async_trait]
impl VideoListProvider for CachingConnector {
    async fn most_popular(
        &self,
        channel: &ChannelId,
        max: u32,
    ) -> Result<Vec<RawVideoRef>, VidashError> {
        if let Some(store) = &self.stores.popular {
            let key = ListKey::new(channel.as_str(), max);
            if let Some(v) = store.get(&key).await {
                return Ok((*v).clone());
            }
            let inner = self
                .inner
                .as_video_list_provider()
                .ok_or_else(|| VidashError::unsupported("popular-videos"))?;
            let value = inner.most_popular(channel, max).await?;
            store.insert(key, Arc::new(value.clone())).await;
            return Ok(value);
        }
        self.inner
            .as_video_list_provider()
            .ok_or_else(|| VidashError::unsupported("popular-videos"))?
            .most_popular(channel, max)
            .await
    }

    async fn most_recent(
        &self,
        channel: &ChannelId,
        max: u32,
    ) -> Result<Vec<RawVideoRef>, VidashError> {
        if let Some(store) = &self.stores.recent {
            let key = ListKey::new(channel.as_str(), max);
            if let Some(v) = store.get(&key).await {
                return Ok((*v).clone());
            }
            let inner = self
                .inner
                .as_video_list_provider()
                .ok_or_else(|| VidashError::unsupported("recent-videos"))?;
            let value = inner.most_recent(channel, max).await?;
            store.insert(key, Arc::new(value.clone())).await;
            return Ok(value);
        }
        self.inner
            .as_video_list_provider()
            .ok_or_else(|| VidashError::unsupported("recent-videos"))?
            .most_recent(channel, max)
            .await
    }
}

#[async_trait]
impl VideoStatsProvider for CachingConnector {
    async fn video_statistics(&self, ids: &[String]) -> Result<Vec<VideoStatsRow>, VidashError> {
        if let Some(store) = &self.stores.video_stats {
            let key = ids.join(",");
            if let Some(v) = store.get(&key).await {
                return Ok((*v).clone());
            }
            let inner = self
                .inner
                .as_video_stats_provider()
                .ok_or_else(|| VidashError::unsupported("video-statistics"))?;
            let value = inner.video_statistics(ids).await?;
            store.insert(key, Arc::new(value.clone())).await;
            return Ok(value);
        }
        self.inner
            .as_video_stats_provider()
            .ok_or_else(|| VidashError::unsupported("video-statistics"))?
            .video_statistics(ids)
            .await
    }
}

#[async_trait]
impl CommentsProvider for CachingConnector {
    async fn comments(&self, video_id: &str, max: u32) -> Result<Vec<Comment>, VidashError> {
        if let Some(store) = &self.stores.comments {
            let key = ListKey::new(video_id, max);
            if let Some(v) = store.get(&key).await {
                return Ok((*v).clone());
            }
            let inner = self
                .inner
                .as_comments_provider()
                .ok_or_else(|| VidashError::unsupported("comments"))?;
            let value = inner.comments(video_id, max).await?;
            store.insert(key, Arc::new(value.clone())).await;
            return Ok(value);
        }
        self.inner
            .as_comments_provider()
            .ok_or_else(|| VidashError::unsupported("comments"))?
            .comments(video_id, max)
            .await
    }
}

#[async_trait]
impl ChannelSearchProvider for CachingConnector {
    async fn search_channels(
        &self,
        query: &str,
        max: u32,
    ) -> Result<Vec<ChannelHit>, VidashError> {
        if let Some(store) = &self.stores.search {
            let key = ListKey::new(query, max);
            if let Some(v) = store.get(&key).await {
                return Ok((*v).clone());
            }
            let inner = self
                .inner
                .as_channel_search_provider()
                .ok_or_else(|| VidashError::unsupported("channel-search"))?;
            let value = inner.search_channels(query, max).await?;
            store.insert(key, Arc::new(value.clone())).await;
            return Ok(value);
        }
        self.inner
            .as_channel_search_provider()
            .ok_or_else(|| VidashError::unsupported("channel-search"))?
            .search_channels(query, max)
            .await
    }
}

#[async_trait]
impl RevenueProvider for CachingConnector {
    async fn estimated_revenue(
        &self,
        token: &AccessToken,
        window: &TimeWindow,
    ) -> Result<f64, VidashError> {
        self.inner
            .as_revenue_provider()
            .ok_or_else(|| VidashError::unsupported("revenue"))?
            .estimated_revenue(token, window)
            .await
    }
}

#[async_trait]
impl ViewsSeriesProvider for CachingConnector {
    async fn daily_views(
        &self,
        token: &AccessToken,
        window: &TimeWindow,
    ) -> Result<Vec<TimeSeriesPoint>, VidashError> {
        self.inner
            .as_views_series_provider()
            .ok_or_else(|| VidashError::unsupported("views-series"))?
            .daily_views(token, window)
            .await
    }
}

#[async_trait]
impl GeoViewsProvider for CachingConnector {
    async fn geo_views(
        &self,
        token: &AccessToken,
        window: &TimeWindow,
    ) -> Result<Vec<GeoPoint>, VidashError> {
        self.inner
            .as_geo_views_provider()
            .ok_or_else(|| VidashError::unsupported("geo-views"))?
            .geo_views(token, window)
            .await
    }
}

#[async_trait]
impl VideoRetentionProvider for CachingConnector {
    async fn video_retention(
        &self,
        token: &AccessToken,
        video_id: &str,
        window: &TimeWindow,
    ) -> Result<VideoRetention, VidashError> {
        self.inner
            .as_video_retention_provider()
            .ok_or_else(|| VidashError::unsupported("video-retention"))?
            .video_retention(token, video_id, window)
            .await
    }
}
