//! Wire models and requests for the bearer-authenticated Analytics API.
//!
//! Reports come back as positional rows: `rows[i][0]` is the dimension value
//! and subsequent columns hold the requested metrics in request order.

use chrono::NaiveDate;
use serde::Deserialize;

use vidash_types::{
    AccessToken, GeoPoint, TimeSeriesPoint, TimeWindow, VideoRetention, VidashError,
};

use crate::YtConnector;

#[derive(Deserialize)]
struct ReportResponse {
    #[serde(default)]
    rows: Option<Vec<Vec<serde_json::Value>>>,
}

impl ReportResponse {
    fn rows(self) -> Vec<Vec<serde_json::Value>> {
        self.rows.unwrap_or_default()
    }
}

fn as_u64(v: Option<&serde_json::Value>) -> u64 {
    v.and_then(serde_json::Value::as_f64).unwrap_or_default() as u64
}

fn as_f64(v: Option<&serde_json::Value>) -> f64 {
    v.and_then(serde_json::Value::as_f64).unwrap_or_default()
}

async fn fetch_report(
    conn: &YtConnector,
    token: &AccessToken,
    window: &TimeWindow,
    extra: &[(&str, &str)],
) -> Result<ReportResponse, VidashError> {
    let resp = conn
        .http
        .get(&conn.analytics_base)
        .bearer_auth(token.as_str())
        .query(&[
            ("ids", "channel==MINE"),
            ("startDate", &window.start_param()),
            ("endDate", &window.end_param()),
        ])
        .query(extra)
        .send()
        .await
        .map_err(|e| YtConnector::upstream(format!("analytics report: {e}")))?;
    if !resp.status().is_success() {
        return Err(YtConnector::upstream(format!(
            "analytics report returned HTTP {}",
            resp.status()
        )));
    }
    resp.json::<ReportResponse>()
        .await
        .map_err(|e| VidashError::Data(format!("decoding analytics report: {e}")))
}

pub(crate) async fn fetch_estimated_revenue(
    conn: &YtConnector,
    token: &AccessToken,
    window: &TimeWindow,
) -> Result<f64, VidashError> {
    let report = fetch_report(conn, token, window, &[("metrics", "estimatedRevenue")]).await?;
    Ok(report
        .rows()
        .first()
        .map(|row| as_f64(row.first()))
        .unwrap_or_default())
}

pub(crate) async fn fetch_daily_views(
    conn: &YtConnector,
    token: &AccessToken,
    window: &TimeWindow,
) -> Result<Vec<TimeSeriesPoint>, VidashError> {
    let report = fetch_report(
        conn,
        token,
        window,
        &[("metrics", "views"), ("dimensions", "day"), ("sort", "day")],
    )
    .await?;
    Ok(report
        .rows()
        .iter()
        .filter_map(|row| {
            let day = row.first()?.as_str()?;
            let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()?;
            Some(TimeSeriesPoint {
                date,
                views: as_u64(row.get(1)),
            })
        })
        .collect())
}

pub(crate) async fn fetch_geo_views(
    conn: &YtConnector,
    token: &AccessToken,
    window: &TimeWindow,
) -> Result<Vec<GeoPoint>, VidashError> {
    let report = fetch_report(
        conn,
        token,
        window,
        &[
            ("metrics", "views"),
            ("dimensions", "country"),
            ("sort", "-views"),
        ],
    )
    .await?;
    Ok(report
        .rows()
        .iter()
        .filter_map(|row| {
            let country = row.first()?.as_str()?;
            Some(GeoPoint {
                id: country.to_string(),
                value: as_u64(row.get(1)),
            })
        })
        .collect())
}

pub(crate) async fn fetch_video_retention(
    conn: &YtConnector,
    token: &AccessToken,
    video_id: &str,
    window: &TimeWindow,
) -> Result<VideoRetention, VidashError> {
    let filter = format!("video=={video_id}");
    let report = fetch_report(
        conn,
        token,
        window,
        &[
            ("metrics", "averageViewDuration,averageViewPercentage"),
            ("filters", &filter),
        ],
    )
    .await?;
    // No rows means no watch data for the window; report zeros rather than
    // failing the caller.
    let rows = report.rows();
    let Some(row) = rows.first() else {
        return Ok(VideoRetention::default());
    };
    Ok(VideoRetention {
        average_view_duration: as_u64(row.first()),
        click_ratio: as_f64(row.get(1)) / 100.0,
    })
}
