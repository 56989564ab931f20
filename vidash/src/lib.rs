//! Vidash assembles a creator dashboard from pluggable video platform
//! connectors.
//!
//! Overview
//! - Routes catalog calls (channel data, video listings, statistics, comments,
//!   search) through a single registered connector, optionally wrapped by the
//!   caching middleware.
//! - Gates analytics calls (revenue, views series, geographic breakdown,
//!   retention) on the presence of a bearer token; absent or failing
//!   credentials degrade those sections to zero values instead of failing the
//!   whole aggregation.
//! - Joins listing results with batched statistics and per-video comments in
//!   one pass, preserving listing order and length.
//! - Applies a per-provider-call timeout and an optional whole-request
//!   deadline.
//!
//! Building an orchestrator and fetching a dashboard:
//! ```rust,ignore
//! use std::sync::Arc;
//! use vidash::{TimeRange, Vidash};
//! use vidash_youtube::YtConnector;
//!
//! let yt = Arc::new(YtConnector::builder(api_key).build());
//! let vidash = Vidash::builder().with_connector(yt).build()?;
//! let snapshot = vidash
//!     .dashboard(&channel, token.as_ref(), TimeRange::Last30Days)
//!     .await?;
//! ```
#![warn(missing_docs)]

mod core;
mod router;

pub use crate::core::{Vidash, VidashBuilder};
pub use vidash_core::VidashConnector;
pub use vidash_middleware::ConnectorBuilder;
pub use vidash_types::{
    AccessToken, ChannelHit, ChannelId, ChannelSnapshot, ChannelStats, DashboardSnapshot,
    EnrichedVideo, TimeRange, VidashConfig, VidashError,
};
