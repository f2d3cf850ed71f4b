use crate::error::AppError;
use domain::like::{LikeRecord, LikeRepository};
use domain::value::{PostId, UserId};
use log::{info, warn};
use std::sync::Arc;

#[derive(Debug)]
pub struct LikeCmd {
    pub user_id: String,
    pub post_id: String,
}

#[derive(Debug)]
pub struct UnlikeCmd {
    pub user_id: String,
    pub post_id: String,
}

#[derive(Clone)]
pub struct LikeService {
    like_repository: Arc<dyn LikeRepository>,
}

impl LikeService {
    pub fn new(like_repository: Arc<dyn LikeRepository>) -> Self {
        Self { like_repository }
    }

    pub async fn add_like(&self, cmd: LikeCmd) -> Result<(), AppError> {
        let user_id = UserId::parse(cmd.user_id)?;
        let post_id = PostId::parse(cmd.post_id)?;
        info!("user {} likes post {}", user_id, post_id);

        let record = LikeRecord::new(user_id.clone(), post_id.clone());
        if let Err(e) = self.like_repository.add(record).await {
            warn!("like failed: user {} post {}: {}", user_id, post_id, e);
            return Err(e.into());
        }

        info!("like stored: user {} post {}", user_id, post_id);
        Ok(())
    }

    pub async fn remove_like(&self, cmd: UnlikeCmd) -> Result<(), AppError> {
        let user_id = UserId::parse(cmd.user_id)?;
        let post_id = PostId::parse(cmd.post_id)?;
        info!("user {} unlikes post {}", user_id, post_id);

        if let Err(e) = self.like_repository.remove(&user_id, &post_id).await {
            if e.is_not_found() {
                info!("nothing to unlike: user {} post {}: {}", user_id, post_id, e);
            } else {
                warn!("unlike failed: user {} post {}: {}", user_id, post_id, e);
            }
            return Err(e.into());
        }

        info!("like removed: user {} post {}", user_id, post_id);
        Ok(())
    }
}
