use std::collections::HashMap;

use futures::future::join_all;
use tracing::warn;

use vidash_types::{
    Capability, Comment, EnrichedVideo, RawVideoRef, VideoStatistics, VidashError,
};

use crate::Vidash;

/// How many comments each video is enriched with.
pub(crate) const COMMENTS_PER_VIDEO: u32 = 3;

impl Vidash {
    /// Join listing references with batched statistics and per-video comments.
    ///
    /// The output is length-preserving and keeps listing order. Statistics come
    /// from one batched call for all usable ids; a failure there degrades every
    /// video's statistics to `None`. Comment fetches run concurrently and fail
    /// per video, degrading to an empty list. Malformed identifiers are skipped
    /// for fetching but keep their slot in the output.
    ///
    /// # Errors
    /// Currently infallible beyond the `Result` shape; sections degrade rather
    /// than erroring so one bad video cannot sink the whole join.
    pub async fn enrich_videos(
        &self,
        refs: Vec<RawVideoRef>,
    ) -> Result<Vec<EnrichedVideo>, VidashError> {
        if refs.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = refs
            .iter()
            .filter_map(|r| match r.id.canonical() {
                Some(id) => Some(id.to_string()),
                None => {
                    warn!(id = ?r.id, "skipping malformed video identifier");
                    None
                }
            })
            .collect();

        let stats_fut = self.batched_statistics(&ids);
        let comment_futs = refs.iter().map(|r| self.comments_or_empty(r.id.canonical()));
        let (stats_rows, comment_lists) = tokio::join!(stats_fut, join_all(comment_futs));

        let by_id: HashMap<String, VideoStatistics> = stats_rows
            .into_iter()
            .map(|row| (row.id, row.statistics))
            .collect();

        Ok(refs
            .into_iter()
            .zip(comment_lists)
            .map(|(r, comments)| {
                let id = r.id.canonical_or_empty().to_string();
                let statistics = by_id.get(&id).copied();
                EnrichedVideo {
                    id,
                    snippet: r.snippet,
                    statistics,
                    comments,
                    private_stats: None,
                }
            })
            .collect())
    }

    async fn batched_statistics(&self, ids: &[String]) -> Vec<vidash_types::VideoStatsRow> {
        if ids.is_empty() {
            return Vec::new();
        }
        let Some(provider) = self.connector.as_video_stats_provider() else {
            warn!("connector lacks batched video statistics");
            return Vec::new();
        };
        match Self::provider_call_with_timeout(
            self.connector.name(),
            Capability::VideoStatistics.as_str(),
            self.cfg.provider_timeout,
            provider.video_statistics(ids),
        )
        .await
        {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "batched video statistics unavailable");
                Vec::new()
            }
        }
    }

    async fn comments_or_empty(&self, video_id: Option<&str>) -> Vec<Comment> {
        let Some(video_id) = video_id else {
            return Vec::new();
        };
        let Some(provider) = self.connector.as_comments_provider() else {
            return Vec::new();
        };
        match Self::provider_call_with_timeout(
            self.connector.name(),
            Capability::Comments.as_str(),
            self.cfg.provider_timeout,
            provider.comments(video_id, COMMENTS_PER_VIDEO),
        )
        .await
        {
            Ok(comments) => comments,
            Err(e) => {
                warn!(video = video_id, error = %e, "comments unavailable");
                Vec::new()
            }
        }
    }
}
