use chrono::Utc;
use tracing::warn;

use vidash_core::money;
use vidash_types::{
    AccessToken, Capability, ChannelId, DashboardSnapshot, GeoPoint, TimeRange, TimeSeriesPoint,
    TimeWindow, VideoRetention, VidashError,
};

use crate::Vidash;
use crate::core::with_request_deadline;
use crate::router::videos::{POPULAR_VIDEOS, RECENT_VIDEOS};

impl Vidash {
    /// Assemble everything the dashboard view needs in one aggregation.
    ///
    /// Catalog sections (channel counters, video listings, their enrichment)
    /// are required and fail the whole call. Analytics sections are gated on
    /// `token`: without one, or when the analytics upstream fails, revenue
    /// reads `Rp 0`, the series and geographic breakdowns come back empty, and
    /// no retention is attached.
    ///
    /// Retention is fetched for the most popular video only and attached to
    /// that video's `private_stats`.
    ///
    /// # Errors
    /// Fails on unknown channels, catalog upstream failures, and the optional
    /// whole-request deadline.
    pub async fn dashboard(
        &self,
        channel: &ChannelId,
        token: Option<&AccessToken>,
        range: TimeRange,
    ) -> Result<DashboardSnapshot, VidashError> {
        with_request_deadline(
            self.cfg.request_timeout,
            "dashboard",
            self.dashboard_inner(channel, token, range),
        )
        .await
    }

    async fn dashboard_inner(
        &self,
        channel: &ChannelId,
        token: Option<&AccessToken>,
        range: TimeRange,
    ) -> Result<DashboardSnapshot, VidashError> {
        let now = Utc::now();
        let window = range.resolve(now);
        let revenue_window = range.resolve_for_revenue(now);

        // Wave 1: everything that has no data dependency.
        let (stats, total_revenue, popular, analytics_data, geo_data) = tokio::join!(
            self.channel_statistics(channel),
            self.revenue_display(token, &revenue_window),
            self.most_popular(channel, POPULAR_VIDEOS),
            self.daily_views_or_empty(token, &window),
            self.geo_views_or_empty(token, &window),
        );
        let stats = stats?;
        let popular = popular?;

        // Wave 2 needs the popular listing: retention targets its first id.
        let first_id = popular
            .first()
            .and_then(|v| v.id.canonical())
            .map(str::to_string);
        let (retention, combined) = tokio::join!(
            self.retention_or_none(token, first_id.as_deref(), &window),
            self.enrich_videos(popular),
        );
        let mut combined_videos = combined?;
        if let (Some(retention), Some(first)) = (retention, combined_videos.first_mut()) {
            first.private_stats = Some(retention);
        }

        let recent = self.most_recent(channel, RECENT_VIDEOS).await?;
        let all_videos_complete = self.enrich_videos(recent).await?;

        Ok(DashboardSnapshot {
            channel_stats: stats,
            total_revenue,
            analytics_data,
            geo_data,
            combined_videos,
            all_videos_complete,
        })
    }

    async fn revenue_display(&self, token: Option<&AccessToken>, window: &TimeWindow) -> String {
        let Some(token) = token else {
            return money::zero_revenue();
        };
        let Some(provider) = self.connector.as_revenue_provider() else {
            warn!("connector lacks revenue reporting");
            return money::zero_revenue();
        };
        match Self::provider_call_with_timeout(
            self.connector.name(),
            Capability::Revenue.as_str(),
            self.cfg.provider_timeout,
            provider.estimated_revenue(token, window),
        )
        .await
        {
            Ok(native_usd) => money::revenue_display(native_usd),
            Err(e) => {
                warn!(error = %e, "revenue unavailable, reporting zero");
                money::zero_revenue()
            }
        }
    }

    async fn daily_views_or_empty(
        &self,
        token: Option<&AccessToken>,
        window: &TimeWindow,
    ) -> Vec<TimeSeriesPoint> {
        let Some(token) = token else {
            return Vec::new();
        };
        let Some(provider) = self.connector.as_views_series_provider() else {
            return Vec::new();
        };
        match Self::provider_call_with_timeout(
            self.connector.name(),
            Capability::ViewsSeries.as_str(),
            self.cfg.provider_timeout,
            provider.daily_views(token, window),
        )
        .await
        {
            Ok(series) => series,
            Err(e) => {
                warn!(error = %e, "views series unavailable");
                Vec::new()
            }
        }
    }

    async fn geo_views_or_empty(
        &self,
        token: Option<&AccessToken>,
        window: &TimeWindow,
    ) -> Vec<GeoPoint> {
        let Some(token) = token else {
            return Vec::new();
        };
        let Some(provider) = self.connector.as_geo_views_provider() else {
            return Vec::new();
        };
        match Self::provider_call_with_timeout(
            self.connector.name(),
            Capability::GeoViews.as_str(),
            self.cfg.provider_timeout,
            provider.geo_views(token, window),
        )
        .await
        {
            Ok(points) => points,
            Err(e) => {
                warn!(error = %e, "geographic views unavailable");
                Vec::new()
            }
        }
    }

    async fn retention_or_none(
        &self,
        token: Option<&AccessToken>,
        video_id: Option<&str>,
        window: &TimeWindow,
    ) -> Option<VideoRetention> {
        let token = token?;
        let video_id = video_id?;
        let provider = self.connector.as_video_retention_provider()?;
        match Self::provider_call_with_timeout(
            self.connector.name(),
            Capability::VideoRetention.as_str(),
            self.cfg.provider_timeout,
            provider.video_retention(token, video_id, window),
        )
        .await
        {
            Ok(retention) => Some(retention),
            Err(e) => {
                warn!(video = video_id, error = %e, "retention unavailable");
                None
            }
        }
    }
}
