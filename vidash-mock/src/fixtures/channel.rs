use vidash_types::{ChannelHit, ChannelSnapshot, ChannelStats, Thumbnail, Thumbnails};

pub fn stats_by_id(id: &str) -> Option<ChannelStats> {
    match id {
        "UC_MOCK" => Some(ChannelStats {
            subscriber_count: 125_000,
            video_count: 340,
            view_count: 48_500_000,
        }),
        _ => None,
    }
}

pub fn snapshot_by_id(id: &str) -> Option<ChannelSnapshot> {
    match id {
        "UC_MOCK" => Some(ChannelSnapshot {
            id: "UC_MOCK".to_string(),
            title: "Mock Creator".to_string(),
            description: "Deterministic channel used in tests and demos.".to_string(),
            custom_url: Some("@mockcreator".to_string()),
            thumbnails: avatar("https://img.mock/creator.jpg"),
            subscriber_count: 125_000,
            video_count: 340,
            view_count: 48_500_000,
        }),
        _ => None,
    }
}

pub fn search(query: &str) -> Vec<ChannelHit> {
    let q = query.to_ascii_lowercase();
    let all = [
        ChannelHit {
            id: "UC_MOCK".to_string(),
            name: "Mock Creator".to_string(),
            subscribers: 125_000,
            profile_image: Some("https://img.mock/creator.jpg".to_string()),
            description: "Deterministic channel used in tests and demos.".to_string(),
        },
        ChannelHit {
            id: "UC_OTHER".to_string(),
            name: "Other Mock Channel".to_string(),
            subscribers: 4_200,
            profile_image: None,
            description: "A second channel for search results.".to_string(),
        },
    ];
    all.into_iter()
        .filter(|hit| hit.name.to_ascii_lowercase().contains(&q))
        .collect()
}

fn avatar(url: &str) -> Thumbnails {
    Thumbnails {
        default: Some(Thumbnail {
            url: url.to_string(),
            width: Some(88),
            height: Some(88),
        }),
        medium: None,
        high: None,
    }
}
