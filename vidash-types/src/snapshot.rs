use serde::{Deserialize, Serialize};

use crate::channel::ChannelStats;
use crate::video::{EnrichedVideo, GeoPoint, TimeSeriesPoint};

/// Everything the dashboard view needs, assembled in one pass.
///
/// Credential-gated sections degrade to their zero values rather than
/// failing the whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Headline channel counters.
    pub channel_stats: ChannelStats,
    /// Display-formatted revenue for the requested range.
    pub total_revenue: String,
    /// Daily views series, empty when unauthenticated.
    pub analytics_data: Vec<TimeSeriesPoint>,
    /// Per-country views, empty when unauthenticated.
    pub geo_data: Vec<GeoPoint>,
    /// Most popular videos, enriched.
    pub combined_videos: Vec<EnrichedVideo>,
    /// Most recent videos, enriched.
    pub all_videos_complete: Vec<EnrichedVideo>,
}
