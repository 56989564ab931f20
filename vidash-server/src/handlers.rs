use axum::Json;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};

use vidash_types::{
    AccessToken, ChannelHit, ChannelId, ChannelSnapshot, DashboardSnapshot, EnrichedVideo,
    TimeRange,
};

use crate::AppState;
use crate::error::ApiError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChannelParams {
    channel_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DashboardParams {
    channel_id: Option<String>,
    time_range: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct SearchParams {
    q: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct VideosResponse {
    videos: Vec<EnrichedVideo>,
}

#[derive(Serialize)]
pub(crate) struct SearchResponse {
    items: Vec<ChannelHit>,
}

fn require_channel(raw: Option<String>) -> Result<ChannelId, ApiError> {
    let raw = raw.ok_or_else(|| ApiError::bad_request("channelId is required"))?;
    ChannelId::new(raw).map_err(ApiError::from)
}

fn parse_time_range(raw: Option<String>) -> Result<TimeRange, ApiError> {
    match raw {
        Some(raw) => raw.parse::<TimeRange>().map_err(ApiError::from),
        None => Ok(TimeRange::default()),
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<AccessToken> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    AccessToken::new(value.strip_prefix("Bearer ")?)
}

pub(crate) async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
    headers: HeaderMap,
) -> Result<Json<DashboardSnapshot>, ApiError> {
    let channel = require_channel(params.channel_id)?;
    let range = parse_time_range(params.time_range)?;
    let token = bearer_token(&headers);
    let snapshot = state
        .vidash
        .dashboard(&channel, token.as_ref(), range)
        .await?;
    Ok(Json(snapshot))
}

pub(crate) async fn channel(
    State(state): State<AppState>,
    Query(params): Query<ChannelParams>,
) -> Result<Json<ChannelSnapshot>, ApiError> {
    let channel = require_channel(params.channel_id)?;
    let snapshot = state.vidash.channel(&channel).await?;
    Ok(Json(snapshot))
}

pub(crate) async fn videos(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<VideosResponse>, ApiError> {
    let channel = require_channel(params.channel_id)?;
    // The recent-uploads listing is range-independent, but the parameter is
    // still part of the interface and a bad value is rejected up front.
    parse_time_range(params.time_range)?;
    let videos = state.vidash.videos(&channel).await?;
    Ok(Json(VideosResponse { videos }))
}

pub(crate) async fn search_channels(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = params
        .q
        .ok_or_else(|| ApiError::bad_request("q is required"))?;
    let items = state.vidash.search_channels(&query).await?;
    Ok(Json(SearchResponse { items }))
}
