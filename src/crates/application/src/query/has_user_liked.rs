use crate::query::QueryError;
use domain::like::LikeRepository;
use domain::value::{PostId, UserId};
use std::sync::Arc;

#[derive(Clone)]
pub struct HasUserLiked {
    like_repository: Arc<dyn LikeRepository>,
}

impl HasUserLiked {
    pub fn new(like_repository: Arc<dyn LikeRepository>) -> Self {
        Self { like_repository }
    }

    pub async fn handle(&self, user_id: &str, post_id: &str) -> Result<bool, QueryError> {
        let user_id = UserId::parse(user_id)?;
        let post_id = PostId::parse(post_id)?;
        let liked = self.like_repository.exists(&user_id, &post_id).await?;
        Ok(liked)
    }
}
