// Re-export helpers so tests can `use helpers::*;`
pub mod mock_connector;

pub use mock_connector::MockConnector;

use serde_json::json;
use std::sync::Arc;

use vidash::{Vidash, VidashConnector};
use vidash_types::{
    ChannelId, ChannelStats, Comment, RawVideoRef, VideoId, VideoSnippet, VideoStatistics,
    VideoStatsRow,
};

/// Channel id used across tests.
pub const CHANNEL: &str = "UC_TEST";

#[allow(dead_code)]
pub fn channel() -> ChannelId {
    ChannelId::new(CHANNEL).expect("valid static test id")
}

pub fn orchestrator(mock: Arc<MockConnector>) -> Vidash {
    Vidash::builder()
        .with_connector(mock as Arc<dyn VidashConnector>)
        .build()
        .expect("connector is registered")
}

pub fn channel_stats() -> ChannelStats {
    ChannelStats {
        subscriber_count: 5_000,
        video_count: 120,
        view_count: 1_000_000,
    }
}

/// A listing reference with a bare string id.
pub fn plain_ref(id: &str) -> RawVideoRef {
    RawVideoRef {
        id: VideoId::Plain(id.to_string()),
        snippet: Some(snippet(id)),
    }
}

/// A listing reference with an object-wrapped id, as search endpoints emit.
pub fn wrapped_ref(id: &str) -> RawVideoRef {
    RawVideoRef {
        id: VideoId::Wrapped {
            video_id: id.to_string(),
        },
        snippet: Some(snippet(id)),
    }
}

/// A listing reference whose id matches neither accepted shape.
pub fn malformed_ref() -> RawVideoRef {
    RawVideoRef {
        id: VideoId::Malformed(json!({ "kind": "youtube#playlist" })),
        snippet: None,
    }
}

fn snippet(id: &str) -> VideoSnippet {
    VideoSnippet {
        title: format!("title of {id}"),
        ..VideoSnippet::default()
    }
}

pub fn stats_row(id: &str, views: u64) -> VideoStatsRow {
    VideoStatsRow {
        id: id.to_string(),
        statistics: VideoStatistics {
            view_count: views,
            like_count: views / 20,
            comment_count: views / 100,
        },
    }
}

#[allow(dead_code)]
pub fn comment(video_id: &str, n: usize) -> Comment {
    Comment {
        id: format!("{video_id}-c{n}"),
        name: format!("viewer{n}"),
        date: "01 Jan 2025".to_string(),
        content: format!("comment {n} on {video_id}"),
        image_url: "https://img.test/avatar.jpg".to_string(),
    }
}
