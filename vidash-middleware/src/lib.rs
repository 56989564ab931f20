//! vidash-middleware
//!
//! Connector wrappers that layer cross-cutting behavior over a raw
//! `VidashConnector`, plus a builder for composing them.

mod builder;
mod cache;

pub use crate::builder::ConnectorBuilder;
pub use crate::cache::{CacheMiddleware, CachingConnector};
