//! Builder for composing connectors with middleware layers.
//!
//! Middleware layers form an "onion" around the raw connector: the `layers`
//! vector stores them in outermost-first order for intuitive builder
//! semantics, and `build()` applies them in reverse so that
//! `layers[0](layers[1](...(raw)))` is the result.

use std::sync::Arc;

use vidash_core::Middleware;
use vidash_core::connector::VidashConnector;
use vidash_types::CacheConfig;

/// Generic middleware builder for composing a connector with layered wrappers.
pub struct ConnectorBuilder {
    raw: Arc<dyn VidashConnector>,
    /// Middleware layers in outermost-first order.
    layers: Vec<Box<dyn Middleware>>,
}

impl ConnectorBuilder {
    /// Create a new builder from a raw, unwrapped connector.
    #[must_use]
    pub fn new(raw: Arc<dyn VidashConnector>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add or replace the caching layer.
    ///
    /// Caching sits innermost so that outer layers observe cache hits too.
    /// If a cache layer already exists, it is removed and replaced.
    #[must_use]
    pub fn with_cache(mut self, cfg: &CacheConfig) -> Self {
        self.layers.retain(|m| m.name() != "CachingMiddleware");
        self.layers
            .push(Box::new(crate::cache::CacheMiddleware::new(cfg.clone())));
        self
    }

    /// Remove the caching layer if present.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.layers.retain(|m| m.name() != "CachingMiddleware");
        self
    }

    /// Apply all layers, innermost to outermost, and return the wrapped connector.
    #[must_use]
    pub fn build(self) -> Arc<dyn VidashConnector> {
        let mut connector = self.raw;
        for layer in self.layers.into_iter().rev() {
            connector = layer.apply(connector);
        }
        connector
    }
}
