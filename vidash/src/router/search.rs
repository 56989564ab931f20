use vidash_types::{Capability, ChannelHit, VidashError};

use crate::Vidash;

const SEARCH_RESULTS: u32 = 3;

impl Vidash {
    /// Search channels by name, each joined with its subscriber count.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a blank query and `Upstream` when the
    /// provider call fails. An empty result set is not an error.
    pub async fn search_channels(&self, query: &str) -> Result<Vec<ChannelHit>, VidashError> {
        if query.trim().is_empty() {
            return Err(VidashError::InvalidArg(
                "search query must not be empty".to_string(),
            ));
        }
        let provider = self
            .connector
            .as_channel_search_provider()
            .ok_or_else(|| VidashError::unsupported(Capability::ChannelSearch.as_str()))?;
        Self::provider_call_with_timeout(
            self.connector.name(),
            Capability::ChannelSearch.as_str(),
            self.cfg.provider_timeout,
            provider.search_channels(query, SEARCH_RESULTS),
        )
        .await
    }
}
