use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use vidash::{Vidash, VidashConnector};
use vidash_mock::MockConnector;

fn app() -> Router {
    let connector = Arc::new(MockConnector::new()) as Arc<dyn VidashConnector>;
    let vidash = Arc::new(
        Vidash::builder()
            .with_connector(connector)
            .build()
            .expect("connector is registered"),
    );
    vidash_server::router(vidash)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn dashboard_requires_channel_id() {
    let response = app()
        .oneshot(Request::get("/dashboard").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("channelId"));
}

#[tokio::test]
async fn dashboard_rejects_unknown_range() {
    let response = app()
        .oneshot(
            Request::get("/dashboard?channelId=UC_MOCK&timeRange=fortnight")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dashboard_without_token_degrades_analytics() {
    let response = app()
        .oneshot(
            Request::get("/dashboard?channelId=UC_MOCK&timeRange=30d")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["totalRevenue"], "Rp 0");
    assert_eq!(body["analyticsData"].as_array().unwrap().len(), 0);
    assert_eq!(body["geoData"].as_array().unwrap().len(), 0);
    assert_eq!(body["combinedVideos"].as_array().unwrap().len(), 5);
    assert_eq!(body["allVideosComplete"].as_array().unwrap().len(), 9);
    assert_eq!(body["channelStats"]["subscriberCount"], 125_000);
}

#[tokio::test]
async fn dashboard_with_bearer_token_reports_revenue() {
    let response = app()
        .oneshot(
            Request::get("/dashboard?channelId=UC_MOCK&timeRange=30d")
                .header("authorization", "Bearer fixture-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["totalRevenue"], "Rp 200.000");
    assert!(!body["analyticsData"].as_array().unwrap().is_empty());
    let first = &body["combinedVideos"][0];
    assert_eq!(first["id"], "vid-alpha");
    assert_eq!(first["privateStats"]["averageViewDuration"], 145);
    // Retention stays off the rest of the listing.
    assert!(body["combinedVideos"][1].get("privateStats").is_none());
}

#[tokio::test]
async fn time_range_parameter_narrows_the_series() {
    let response = app()
        .oneshot(
            Request::get("/dashboard?channelId=UC_MOCK&timeRange=24h")
                .header("authorization", "Bearer fixture-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // A 24-hour window spans two calendar days, one series point each; the
    // lifetime default would return the fixture's full week instead.
    let body = body_json(response).await;
    assert_eq!(body["analyticsData"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn channel_endpoint_returns_the_record() {
    let response = app()
        .oneshot(
            Request::get("/channel?channelId=UC_MOCK")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Mock Creator");
    assert_eq!(body["customUrl"], "@mockcreator");
}

#[tokio::test]
async fn unknown_channel_is_404() {
    let response = app()
        .oneshot(
            Request::get("/channel?channelId=UC_NOBODY")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn upstream_failure_is_500_with_error_body() {
    let response = app()
        .oneshot(
            Request::get("/channel?channelId=UC_FAIL")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("vidash-mock"));
}

#[tokio::test]
async fn videos_endpoint_returns_enriched_recent_uploads() {
    let response = app()
        .oneshot(
            Request::get("/videos?channelId=UC_MOCK")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let videos = body["videos"].as_array().unwrap();
    assert_eq!(videos.len(), 9);
    assert!(videos[0]["statistics"]["viewCount"].is_u64());
}

#[tokio::test]
async fn videos_rejects_an_unknown_time_range() {
    let response = app()
        .oneshot(
            Request::get("/videos?channelId=UC_MOCK&timeRange=fortnight")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_requires_a_query() {
    let response = app()
        .oneshot(Request::get("/search-channels").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let blank = app()
        .oneshot(
            Request::get("/search-channels?q=%20%20")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_returns_matching_channels() {
    let response = app()
        .oneshot(
            Request::get("/search-channels?q=mock")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let hits = body["items"].as_array().unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0]["id"], "UC_MOCK");
    assert_eq!(hits[0]["subscribers"], 125_000);
}
