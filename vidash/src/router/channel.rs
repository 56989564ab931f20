use vidash_types::{Capability, ChannelId, ChannelSnapshot, ChannelStats, VidashError};

use crate::Vidash;

impl Vidash {
    /// Fetch the full channel record: branding metadata plus counters.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown channel and `Upstream` when the
    /// provider call fails.
    pub async fn channel(&self, channel: &ChannelId) -> Result<ChannelSnapshot, VidashError> {
        let provider = self
            .connector
            .as_channel_provider()
            .ok_or_else(|| VidashError::unsupported(Capability::ChannelInfo.as_str()))?;
        Self::provider_call_with_timeout(
            self.connector.name(),
            Capability::ChannelInfo.as_str(),
            self.cfg.provider_timeout,
            provider.channel_info(channel),
        )
        .await
    }

    pub(crate) async fn channel_statistics(
        &self,
        channel: &ChannelId,
    ) -> Result<ChannelStats, VidashError> {
        let provider = self
            .connector
            .as_channel_provider()
            .ok_or_else(|| VidashError::unsupported(Capability::ChannelStats.as_str()))?;
        Self::provider_call_with_timeout(
            self.connector.name(),
            Capability::ChannelStats.as_str(),
            self.cfg.provider_timeout,
            provider.channel_statistics(channel),
        )
        .await
    }
}
