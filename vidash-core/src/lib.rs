//! vidash-core
//!
//! Connector traits and shared utilities for the vidash ecosystem.
//!
//! - `connector`: the `VidashConnector` trait and capability provider traits.
//! - `middleware`: the trait implemented by connector wrappers.
//! - `geo`: country-code normalization for geographic breakdowns.
//! - `money`: revenue conversion and display formatting.
//!
//! This crate assumes the Tokio ecosystem as the async runtime: all provider
//! traits are `async_trait` and are exercised through `tokio::join!` fan-outs
//! in the orchestrator.
#![warn(missing_docs)]

/// Connector capability traits and the primary `VidashConnector` interface.
pub mod connector;
/// Country-code normalization helpers.
pub mod geo;
/// Middleware trait implemented by connector wrappers.
pub mod middleware;
/// Revenue conversion and display formatting.
pub mod money;

pub use connector::VidashConnector;
pub use middleware::Middleware;
