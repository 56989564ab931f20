use serde::{Deserialize, Serialize};

use crate::video::Thumbnails;

/// Headline counters for a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
    /// Subscriber count.
    pub subscriber_count: u64,
    /// Uploaded video count.
    pub video_count: u64,
    /// Total channel views.
    pub view_count: u64,
}

/// Full channel record: branding metadata plus counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSnapshot {
    /// Channel id.
    pub id: String,
    /// Channel title.
    pub title: String,
    /// Channel description.
    #[serde(default)]
    pub description: String,
    /// Vanity handle, when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<String>,
    /// Channel avatar set.
    #[serde(default)]
    pub thumbnails: Thumbnails,
    /// Subscriber count.
    pub subscriber_count: u64,
    /// Uploaded video count.
    pub video_count: u64,
    /// Total channel views.
    pub view_count: u64,
}

/// One result of a channel search, already joined with its counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelHit {
    /// Channel id.
    pub id: String,
    /// Channel title.
    pub name: String,
    /// Subscriber count.
    pub subscribers: u64,
    /// Avatar URL, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Channel description.
    #[serde(default)]
    pub description: String,
}
