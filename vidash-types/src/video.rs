use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A video identifier as it appears on the wire.
///
/// Search listings wrap the id in an object while plain video listings carry a
/// bare string. Both shapes canonicalize to the same string; anything else is
/// preserved for diagnostics but treated as malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VideoId {
    /// Bare string id.
    Plain(String),
    /// Object-wrapped id, as produced by search endpoints.
    Wrapped {
        /// The inner id.
        #[serde(rename = "videoId")]
        video_id: String,
    },
    /// Anything that matched neither accepted shape.
    Malformed(serde_json::Value),
}

impl VideoId {
    /// The canonical id string, or `None` for a malformed value.
    #[must_use]
    pub fn canonical(&self) -> Option<&str> {
        match self {
            Self::Plain(id) => Some(id),
            Self::Wrapped { video_id } => Some(video_id),
            Self::Malformed(_) => None,
        }
    }

    /// The canonical id, with malformed values collapsing to `""`.
    #[must_use]
    pub fn canonical_or_empty(&self) -> &str {
        self.canonical().unwrap_or("")
    }
}

/// A single thumbnail rendition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Thumbnail {
    /// Image URL.
    #[serde(default)]
    pub url: String,
    /// Pixel width, when the upstream reports one.
    #[serde(default)]
    pub width: Option<u32>,
    /// Pixel height, when the upstream reports one.
    #[serde(default)]
    pub height: Option<u32>,
}

/// The thumbnail set attached to a snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Thumbnails {
    /// Default (smallest) rendition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Thumbnail>,
    /// Medium rendition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<Thumbnail>,
    /// High rendition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<Thumbnail>,
}

/// Descriptive metadata for a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    /// Video title.
    #[serde(default)]
    pub title: String,
    /// Video description.
    #[serde(default)]
    pub description: String,
    /// Publication timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// Thumbnail set.
    #[serde(default)]
    pub thumbnails: Thumbnails,
    /// Owning channel title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_title: Option<String>,
}

/// A video reference as returned by listing calls, before enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawVideoRef {
    /// Union-shaped identifier.
    pub id: VideoId,
    /// Listing snippet, when the call requested one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<VideoSnippet>,
}

/// Public counters for a single video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    /// Total views.
    pub view_count: u64,
    /// Total likes.
    pub like_count: u64,
    /// Total comments.
    pub comment_count: u64,
}

/// One row of a batched statistics response: id plus counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoStatsRow {
    /// Canonical video id.
    pub id: String,
    /// Parsed counters.
    pub statistics: VideoStatistics,
}

/// A flattened top-level comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment thread id.
    pub id: String,
    /// Author display name.
    pub name: String,
    /// Publication date, pre-formatted for display.
    pub date: String,
    /// Comment text.
    pub content: String,
    /// Author avatar URL.
    pub image_url: String,
}

/// Views attributed to one country, alpha-2 coded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Alpha-2 country code.
    pub id: String,
    /// View count for that country.
    pub value: u64,
}

/// One day of the views time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Calendar day.
    pub date: NaiveDate,
    /// Views on that day.
    pub views: u64,
}

/// Credential-gated per-video engagement metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoRetention {
    /// Average watch time in seconds.
    pub average_view_duration: u64,
    /// Average fraction of the video watched, in `0.0..=1.0`.
    pub click_ratio: f64,
}

/// A video after the enrichment join: listing data plus per-video
/// statistics and comments, with optional private metrics attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedVideo {
    /// Canonical id (empty string when the source id was malformed).
    pub id: String,
    /// Listing snippet, if the source carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<VideoSnippet>,
    /// Batched statistics, `None` when no counters could be matched.
    pub statistics: Option<VideoStatistics>,
    /// Top comments, empty when the fetch failed or none exist.
    pub comments: Vec<Comment>,
    /// Credential-gated metrics, attached only where available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_stats: Option<VideoRetention>,
}
