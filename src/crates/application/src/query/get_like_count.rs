use crate::query::QueryError;
use domain::value::PostId;
use model::post_stats::{PostStats, PostStatsRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct GetLikeCount {
    stats_repository: Arc<dyn PostStatsRepository>,
}

impl GetLikeCount {
    pub fn new(stats_repository: Arc<dyn PostStatsRepository>) -> Self {
        Self { stats_repository }
    }

    /// A post without a stats row has zero likes.
    pub async fn handle(&self, post_id: &str) -> Result<i64, QueryError> {
        let post_id = PostId::parse(post_id)?;
        let stats = self
            .stats_repository
            .find_by_post_id(&post_id)
            .await?
            .unwrap_or_else(|| PostStats::empty(post_id));
        Ok(stats.like_count)
    }
}
