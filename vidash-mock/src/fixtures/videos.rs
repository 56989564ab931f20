use serde_json::json;

use vidash_types::{
    RawVideoRef, Thumbnails, VideoId, VideoSnippet, VideoStatistics, VideoStatsRow,
};

fn reference(id: VideoId, title: &str) -> RawVideoRef {
    RawVideoRef {
        id,
        snippet: Some(VideoSnippet {
            title: title.to_string(),
            description: format!("Description of {title}"),
            published_at: None,
            thumbnails: Thumbnails::default(),
            channel_title: Some("Mock Creator".to_string()),
        }),
    }
}

/// Five popular videos with mixed identifier shapes, most viewed first.
/// The last entry is deliberately malformed.
pub fn popular() -> Vec<RawVideoRef> {
    vec![
        reference(
            VideoId::Wrapped {
                video_id: "vid-alpha".to_string(),
            },
            "Alpha",
        ),
        reference(VideoId::Plain("vid-beta".to_string()), "Beta"),
        reference(
            VideoId::Wrapped {
                video_id: "vid-gamma".to_string(),
            },
            "Gamma",
        ),
        reference(VideoId::Plain("vid-delta".to_string()), "Delta"),
        reference(
            VideoId::Malformed(json!({ "kind": "youtube#playlist" })),
            "Broken reference",
        ),
    ]
}

/// Nine recent uploads, newest first.
pub fn recent() -> Vec<RawVideoRef> {
    (1..=9)
        .map(|n| {
            reference(
                VideoId::Plain(format!("vid-recent-{n}")),
                &format!("Upload {n}"),
            )
        })
        .collect()
}

/// Counters for known ids. Unknown ids get no row, mirroring the real
/// upstream, and the malformed placeholder never matches.
pub fn statistics_for(ids: &[String]) -> Vec<VideoStatsRow> {
    ids.iter()
        .filter_map(|id| {
            let statistics = match id.as_str() {
                "vid-alpha" => VideoStatistics {
                    view_count: 2_000_000,
                    like_count: 95_000,
                    comment_count: 8_100,
                },
                "vid-beta" => VideoStatistics {
                    view_count: 1_400_000,
                    like_count: 61_000,
                    comment_count: 4_900,
                },
                "vid-gamma" => VideoStatistics {
                    view_count: 870_000,
                    like_count: 39_000,
                    comment_count: 2_750,
                },
                other if other.starts_with("vid-recent-") => VideoStatistics {
                    view_count: 12_000,
                    like_count: 800,
                    comment_count: 45,
                },
                _ => return None,
            };
            Some(VideoStatsRow {
                id: id.clone(),
                statistics,
            })
        })
        .collect()
}
