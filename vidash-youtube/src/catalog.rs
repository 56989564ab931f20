//! Wire models and requests for the key-authenticated Data API.

use chrono::DateTime;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use vidash_types::{
    ChannelHit, ChannelId, ChannelSnapshot, ChannelStats, Comment, RawVideoRef, Thumbnails,
    VideoStatistics, VideoStatsRow, VidashError,
};

use crate::YtConnector;

#[derive(Deserialize)]
struct ItemsEnvelope<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Deserialize)]
struct ChannelItem {
    id: String,
    #[serde(default)]
    snippet: Option<ChannelSnippetWire>,
    #[serde(default)]
    statistics: ChannelStatisticsWire,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ChannelSnippetWire {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    custom_url: Option<String>,
    #[serde(default)]
    thumbnails: Thumbnails,
}

// Counters arrive as decimal strings on the wire.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ChannelStatisticsWire {
    #[serde(default)]
    subscriber_count: String,
    #[serde(default)]
    video_count: String,
    #[serde(default)]
    view_count: String,
}

impl ChannelStatisticsWire {
    fn into_stats(self) -> ChannelStats {
        ChannelStats {
            subscriber_count: count(&self.subscriber_count),
            video_count: count(&self.video_count),
            view_count: count(&self.view_count),
        }
    }
}

#[derive(Deserialize)]
struct VideoItem {
    id: String,
    #[serde(default)]
    statistics: VideoStatisticsWire,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct VideoStatisticsWire {
    #[serde(default)]
    view_count: String,
    #[serde(default)]
    like_count: String,
    #[serde(default)]
    comment_count: String,
}

#[derive(Deserialize)]
struct CommentThreadItem {
    id: String,
    snippet: ThreadSnippetWire,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreadSnippetWire {
    top_level_comment: TopLevelCommentWire,
}

#[derive(Deserialize)]
struct TopLevelCommentWire {
    snippet: CommentSnippetWire,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct CommentSnippetWire {
    #[serde(default)]
    author_display_name: String,
    #[serde(default)]
    author_profile_image_url: String,
    #[serde(default)]
    text_original: String,
    #[serde(default)]
    published_at: String,
}

#[derive(Deserialize)]
struct ChannelSearchItem {
    id: ChannelRefWire,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelRefWire {
    channel_id: String,
}

fn count(s: &str) -> u64 {
    s.parse().unwrap_or_default()
}

// e.g. "12 Mar 2024"; unparseable timestamps pass through untouched.
fn display_date(published_at: &str) -> String {
    DateTime::parse_from_rfc3339(published_at)
        .map(|dt| dt.format("%d %b %Y").to_string())
        .unwrap_or_else(|_| published_at.to_string())
}

async fn get_json<T: DeserializeOwned>(
    conn: &YtConnector,
    path: &str,
    query: &[(&str, &str)],
) -> Result<T, VidashError> {
    let url = format!("{}/{}", conn.catalog_base, path);
    let resp = conn
        .http
        .get(&url)
        .query(query)
        .query(&[("key", conn.api_key.as_str())])
        .send()
        .await
        .map_err(|e| YtConnector::upstream(format!("{path}: {e}")))?;
    if !resp.status().is_success() {
        return Err(YtConnector::upstream(format!(
            "{path} returned HTTP {}",
            resp.status()
        )));
    }
    resp.json::<T>()
        .await
        .map_err(|e| VidashError::Data(format!("decoding {path} response: {e}")))
}

pub(crate) async fn fetch_channel_statistics(
    conn: &YtConnector,
    channel: &ChannelId,
) -> Result<ChannelStats, VidashError> {
    let envelope: ItemsEnvelope<ChannelItem> = get_json(
        conn,
        "channels",
        &[("part", "statistics"), ("id", channel.as_str())],
    )
    .await?;
    let item = envelope
        .items
        .into_iter()
        .next()
        .ok_or_else(|| VidashError::not_found(format!("channel {channel}")))?;
    Ok(item.statistics.into_stats())
}

pub(crate) async fn fetch_channel_info(
    conn: &YtConnector,
    channel: &ChannelId,
) -> Result<ChannelSnapshot, VidashError> {
    let envelope: ItemsEnvelope<ChannelItem> = get_json(
        conn,
        "channels",
        &[("part", "snippet,statistics"), ("id", channel.as_str())],
    )
    .await?;
    let item = envelope
        .items
        .into_iter()
        .next()
        .ok_or_else(|| VidashError::not_found(format!("channel {channel}")))?;
    let snippet = item.snippet.unwrap_or_default();
    let stats = item.statistics.into_stats();
    Ok(ChannelSnapshot {
        id: item.id,
        title: snippet.title,
        description: snippet.description,
        custom_url: snippet.custom_url,
        thumbnails: snippet.thumbnails,
        subscriber_count: stats.subscriber_count,
        video_count: stats.video_count,
        view_count: stats.view_count,
    })
}

pub(crate) async fn fetch_video_list(
    conn: &YtConnector,
    channel: &ChannelId,
    order: &str,
    max: u32,
) -> Result<Vec<RawVideoRef>, VidashError> {
    let max = max.to_string();
    let envelope: ItemsEnvelope<RawVideoRef> = get_json(
        conn,
        "search",
        &[
            ("part", "snippet,id"),
            ("channelId", channel.as_str()),
            ("order", order),
            ("maxResults", &max),
            ("type", "video"),
        ],
    )
    .await?;
    Ok(envelope.items)
}

pub(crate) async fn fetch_video_statistics(
    conn: &YtConnector,
    ids: &[String],
) -> Result<Vec<VideoStatsRow>, VidashError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let joined = ids.join(",");
    let envelope: ItemsEnvelope<VideoItem> = get_json(
        conn,
        "videos",
        &[("part", "statistics"), ("id", &joined)],
    )
    .await?;
    Ok(envelope
        .items
        .into_iter()
        .map(|item| VideoStatsRow {
            id: item.id,
            statistics: VideoStatistics {
                view_count: count(&item.statistics.view_count),
                like_count: count(&item.statistics.like_count),
                comment_count: count(&item.statistics.comment_count),
            },
        })
        .collect())
}

pub(crate) async fn fetch_comments(
    conn: &YtConnector,
    video_id: &str,
    max: u32,
) -> Result<Vec<Comment>, VidashError> {
    let max = max.to_string();
    let envelope: ItemsEnvelope<CommentThreadItem> = get_json(
        conn,
        "commentThreads",
        &[
            ("part", "snippet"),
            ("videoId", video_id),
            ("maxResults", &max),
        ],
    )
    .await?;
    Ok(envelope
        .items
        .into_iter()
        .map(|item| {
            let c = item.snippet.top_level_comment.snippet;
            Comment {
                id: item.id,
                name: c.author_display_name,
                date: display_date(&c.published_at),
                content: c.text_original,
                image_url: c.author_profile_image_url,
            }
        })
        .collect())
}

/// Two-step search: name matches first, then one batched counters lookup.
/// The joined result preserves search relevance order.
pub(crate) async fn search_channels(
    conn: &YtConnector,
    query: &str,
    max: u32,
) -> Result<Vec<ChannelHit>, VidashError> {
    let max = max.to_string();
    let matches: ItemsEnvelope<ChannelSearchItem> = get_json(
        conn,
        "search",
        &[
            ("part", "snippet"),
            ("q", query),
            ("type", "channel"),
            ("maxResults", &max),
        ],
    )
    .await?;
    let ids: Vec<String> = matches
        .items
        .into_iter()
        .map(|item| item.id.channel_id)
        .collect();
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let joined = ids.join(",");
    let details: ItemsEnvelope<ChannelItem> = get_json(
        conn,
        "channels",
        &[("part", "snippet,statistics"), ("id", &joined)],
    )
    .await?;
    let mut by_id: std::collections::HashMap<String, ChannelHit> = details
        .items
        .into_iter()
        .map(|item| {
            let snippet = item.snippet.unwrap_or_default();
            let hit = ChannelHit {
                id: item.id.clone(),
                name: snippet.title,
                subscribers: count(&item.statistics.subscriber_count),
                profile_image: snippet
                    .thumbnails
                    .medium
                    .or(snippet.thumbnails.default)
                    .map(|t| t.url),
                description: snippet.description,
            };
            (item.id, hit)
        })
        .collect();
    Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
}
