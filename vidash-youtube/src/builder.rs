use crate::YtConnector;

const CATALOG_BASE: &str = "https://www.googleapis.com/youtube/v3";
const ANALYTICS_BASE: &str = "https://youtubeanalytics.googleapis.com/v2/reports";

/// Builder for [`YtConnector`].
///
/// Base URLs are overridable so tests can point the connector at a local
/// mock server.
pub struct YtConnectorBuilder {
    api_key: String,
    catalog_base: String,
    analytics_base: String,
    http: Option<reqwest::Client>,
}

impl YtConnectorBuilder {
    pub(crate) fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            catalog_base: CATALOG_BASE.to_string(),
            analytics_base: ANALYTICS_BASE.to_string(),
            http: None,
        }
    }

    /// Override the Data API base URL.
    #[must_use]
    pub fn catalog_base(mut self, base: impl Into<String>) -> Self {
        self.catalog_base = base.into();
        self
    }

    /// Override the Analytics API reports URL.
    #[must_use]
    pub fn analytics_base(mut self, base: impl Into<String>) -> Self {
        self.analytics_base = base.into();
        self
    }

    /// Supply a preconfigured HTTP client.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Finalize the connector.
    #[must_use]
    pub fn build(self) -> YtConnector {
        let http = self.http.unwrap_or_default();
        YtConnector::new(http, self.api_key, self.catalog_base, self.analytics_base)
    }
}
