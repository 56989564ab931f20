use vidash_types::{Capability, ChannelId, EnrichedVideo, RawVideoRef, VidashError};

use crate::Vidash;

/// How many videos the popular listing requests.
pub(crate) const POPULAR_VIDEOS: u32 = 5;
/// How many videos the recent listing requests.
pub(crate) const RECENT_VIDEOS: u32 = 9;

impl Vidash {
    /// Fetch the channel's most recent uploads, enriched with statistics and
    /// comments.
    ///
    /// # Errors
    /// Fails when the listing itself cannot be fetched; enrichment sections
    /// degrade individually instead of erroring.
    pub async fn videos(&self, channel: &ChannelId) -> Result<Vec<EnrichedVideo>, VidashError> {
        let recent = self.most_recent(channel, RECENT_VIDEOS).await?;
        self.enrich_videos(recent).await
    }

    pub(crate) async fn most_popular(
        &self,
        channel: &ChannelId,
        max: u32,
    ) -> Result<Vec<RawVideoRef>, VidashError> {
        let provider = self
            .connector
            .as_video_list_provider()
            .ok_or_else(|| VidashError::unsupported(Capability::PopularVideos.as_str()))?;
        Self::provider_call_with_timeout(
            self.connector.name(),
            Capability::PopularVideos.as_str(),
            self.cfg.provider_timeout,
            provider.most_popular(channel, max),
        )
        .await
    }

    pub(crate) async fn most_recent(
        &self,
        channel: &ChannelId,
        max: u32,
    ) -> Result<Vec<RawVideoRef>, VidashError> {
        let provider = self
            .connector
            .as_video_list_provider()
            .ok_or_else(|| VidashError::unsupported(Capability::RecentVideos.as_str()))?;
        Self::provider_call_with_timeout(
            self.connector.name(),
            Capability::RecentVideos.as_str(),
            self.cfg.provider_timeout,
            provider.most_recent(channel, max),
        )
        .await
    }
}
