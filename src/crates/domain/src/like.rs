use crate::value::{PostId, UserId};
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LikeError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("User {user_id} already liked post {post_id}")]
    Conflict { user_id: UserId, post_id: PostId },
    #[error("User {user_id} has not liked post {post_id}")]
    LikeNotFound { user_id: UserId, post_id: PostId },
    #[error("Post stats not found: {0}")]
    StatsNotFound(PostId),
    #[error("Database error: {0}")]
    DbErr(String),
}

impl LikeError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LikeError::LikeNotFound { .. } | LikeError::StatsNotFound(_)
        )
    }
}

/// 用户对帖子的一次点赞。(user_id, post_id) 唯一。
#[derive(Debug, Clone, PartialEq)]
pub struct LikeRecord {
    pub user_id: UserId,
    pub post_id: PostId,
    pub created_at: NaiveDateTime,
}

impl LikeRecord {
    pub fn new(user_id: UserId, post_id: PostId) -> Self {
        Self {
            user_id,
            post_id,
            created_at: Utc::now().naive_utc(),
        }
    }
}

// 仓储接口
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Inserts the record and bumps the post's like count in one transaction.
    /// Fails with `Conflict` when the pair already exists.
    async fn add(&self, record: LikeRecord) -> Result<(), LikeError>;

    /// Deletes the record and decrements the post's like count in one transaction.
    /// Nothing is written unless both statements hit a row.
    async fn remove(&self, user_id: &UserId, post_id: &PostId) -> Result<(), LikeError>;

    async fn exists(&self, user_id: &UserId, post_id: &PostId) -> Result<bool, LikeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        let user_id = UserId::parse("u1").unwrap();
        let post_id = PostId::parse("p1").unwrap();

        assert!(LikeError::LikeNotFound {
            user_id: user_id.clone(),
            post_id: post_id.clone()
        }
        .is_not_found());
        assert!(LikeError::StatsNotFound(post_id.clone()).is_not_found());
        assert!(!LikeError::Conflict { user_id, post_id }.is_not_found());
        assert!(!LikeError::DbErr("timeout".to_string()).is_not_found());
    }
}
