use std::sync::Arc;
use std::time::Duration;

use vidash_core::VidashConnector;
use vidash_types::{VidashConfig, VidashError};

/// Orchestrator that aggregates dashboard data from a registered connector.
pub struct Vidash {
    pub(crate) connector: Arc<dyn VidashConnector>,
    pub(crate) cfg: VidashConfig,
}

impl std::fmt::Debug for Vidash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vidash")
            .field("connector", &self.connector.name())
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing a `Vidash` orchestrator with custom configuration.
pub struct VidashBuilder {
    connector: Option<Arc<dyn VidashConnector>>,
    cfg: VidashConfig,
}

impl Default for VidashBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VidashBuilder {
    /// Create a new builder with default timeouts and no connector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cfg: VidashConfig::default(),
        }
    }

    /// Register the provider connector. Required.
    ///
    /// Wrap the connector with `vidash_middleware::ConnectorBuilder` first if
    /// response caching is wanted.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn VidashConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Set the timeout applied to every individual provider call.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Bound a whole aggregation by a single deadline.
    #[must_use]
    pub const fn request_timeout(mut self, deadline: Duration) -> Self {
        self.cfg.request_timeout = Some(deadline);
        self
    }

    /// Finalize the orchestrator.
    ///
    /// # Errors
    /// Fails when no connector was registered.
    pub fn build(self) -> Result<Vidash, VidashError> {
        let connector = self
            .connector
            .ok_or_else(|| VidashError::InvalidArg("a connector is required".to_string()))?;
        Ok(Vidash {
            connector,
            cfg: self.cfg,
        })
    }
}

impl Vidash {
    /// Start building a new `Vidash` instance.
    #[must_use]
    pub fn builder() -> VidashBuilder {
        VidashBuilder::new()
    }

    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, VidashError>
    where
        Fut: std::future::Future<Output = Result<T, VidashError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(VidashError::provider_timeout(connector_name, capability)))
    }
}

/// Bound `fut` by an optional whole-request deadline.
pub(crate) async fn with_request_deadline<T, Fut>(
    deadline: Option<Duration>,
    capability: &'static str,
    fut: Fut,
) -> Result<T, VidashError>
where
    Fut: std::future::Future<Output = Result<T, VidashError>>,
{
    match deadline {
        None => fut.await,
        Some(d) => (tokio::time::timeout(d, fut).await)
            .unwrap_or_else(|_| Err(VidashError::request_timeout(capability))),
    }
}
