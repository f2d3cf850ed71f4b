use crate::repository::postgres::command::db_data::post_stats as stat_db;
use async_trait::async_trait;
use domain::value::PostId;
use model::post_stats::{PostStats, PostStatsRepository};
use model::ModelError;
use sea_orm::*;

pub struct PostStatsRepositoryImpl {
    db: DatabaseConnection,
}

impl PostStatsRepositoryImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostStatsRepository for PostStatsRepositoryImpl {
    async fn find_by_post_id(&self, post_id: &PostId) -> Result<Option<PostStats>, ModelError> {
        let row = stat_db::Entity::find_by_id(post_id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| ModelError::DbErr(e.to_string()))?;
        Ok(row.map(|row| row.into_stats(post_id.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::postgres::test_db;

    #[tokio::test]
    async fn test_find_by_post_id() {
        let db = test_db::connect().await;
        let repo = PostStatsRepositoryImpl::new(db.clone());
        let post_id = PostId::parse("p1").unwrap();

        assert_eq!(repo.find_by_post_id(&post_id).await.unwrap(), None);

        stat_db::Entity::insert(stat_db::ActiveModel {
            post_id: Set("p1".to_string()),
            like_count: Set(3),
        })
        .exec_without_returning(&db)
        .await
        .unwrap();

        let stats = repo.find_by_post_id(&post_id).await.unwrap().unwrap();
        assert_eq!(stats.like_count, 3);
        assert_eq!(stats.post_id, post_id);
    }

    #[tokio::test]
    async fn test_count_beyond_i32_range() {
        let db = test_db::connect().await;
        let repo = PostStatsRepositoryImpl::new(db.clone());
        let post_id = PostId::parse("viral").unwrap();
        let big = i64::from(i32::MAX) + 10;

        stat_db::Entity::insert(stat_db::ActiveModel {
            post_id: Set("viral".to_string()),
            like_count: Set(big),
        })
        .exec_without_returning(&db)
        .await
        .unwrap();

        let stats = repo.find_by_post_id(&post_id).await.unwrap().unwrap();
        assert_eq!(stats.like_count, big);
    }
}
