//! Vidash-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod auth;
mod capability;
mod channel;
mod config;
mod connector;
mod error;
mod range;
mod snapshot;
mod video;

pub use auth::{AccessToken, ChannelId};
pub use capability::Capability;
pub use channel::{ChannelHit, ChannelSnapshot, ChannelStats};
pub use config::{CacheConfig, VidashConfig};
pub use connector::ConnectorKey;
pub use error::VidashError;
pub use range::{LIFETIME_START, TimeRange, TimeWindow};
pub use snapshot::DashboardSnapshot;
pub use video::{
    Comment, EnrichedVideo, GeoPoint, RawVideoRef, Thumbnail, Thumbnails, TimeSeriesPoint,
    VideoId, VideoRetention, VideoSnippet, VideoStatistics, VideoStatsRow,
};
