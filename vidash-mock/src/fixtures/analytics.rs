use chrono::Days;

use vidash_types::{GeoPoint, TimeSeriesPoint, TimeWindow, VideoRetention};

/// Native USD revenue reported for any window.
pub const REVENUE_USD: f64 = 12.5;

/// One point per day across the window, capped at a week of data.
pub fn daily_views(window: &TimeWindow) -> Vec<TimeSeriesPoint> {
    let days = (window.end - window.start).num_days().clamp(0, 7) as u64;
    (0..=days)
        .filter_map(|offset| {
            let date = window.start.checked_add_days(Days::new(offset))?;
            Some(TimeSeriesPoint {
                date,
                views: 1_000 + offset * 250,
            })
        })
        .collect()
}

pub fn geo_views() -> Vec<GeoPoint> {
    vec![
        GeoPoint {
            id: "ID".to_string(),
            value: 9_000,
        },
        GeoPoint {
            id: "US".to_string(),
            value: 4_200,
        },
        GeoPoint {
            id: "UK".to_string(),
            value: 1_100,
        },
    ]
}

pub fn retention_for(video_id: &str) -> VideoRetention {
    match video_id {
        "vid-alpha" => VideoRetention {
            average_view_duration: 145,
            click_ratio: 0.425,
        },
        _ => VideoRetention::default(),
    }
}
