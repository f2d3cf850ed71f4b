use crate::ModelError;
use domain::value::PostId;

/// 帖子点赞计数（由点赞/取消点赞事务同步维护的冗余聚合）
#[derive(Debug, Clone, PartialEq)]
pub struct PostStats {
    pub post_id: PostId,
    pub like_count: i64,
}

impl PostStats {
    /// Stats for a post nobody has liked yet.
    pub fn empty(post_id: PostId) -> Self {
        Self {
            post_id,
            like_count: 0,
        }
    }
}

use async_trait::async_trait;

#[async_trait]
pub trait PostStatsRepository: Send + Sync {
    async fn find_by_post_id(&self, post_id: &PostId) -> Result<Option<PostStats>, ModelError>;
}
