use super::db_data::{like_record, post_stats};
use async_trait::async_trait;
use domain::like::{LikeError, LikeRecord, LikeRepository};
use domain::value::{PostId, UserId};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::*;

fn db_err(e: DbErr) -> LikeError {
    LikeError::DbErr(e.to_string())
}

/// 主键冲突说明另一事务已写入同一对 (user, post)
fn map_insert_err(e: DbErr, record: &LikeRecord) -> LikeError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => LikeError::Conflict {
            user_id: record.user_id.clone(),
            post_id: record.post_id.clone(),
        },
        _ => db_err(e),
    }
}

fn from_transaction_error(e: TransactionError<LikeError>) -> LikeError {
    match e {
        TransactionError::Connection(e) => db_err(e),
        TransactionError::Transaction(e) => e,
    }
}

/// 点赞记录与帖子计数的事务仓储。两张表只经由这里写入。
#[derive(Clone)]
pub struct LikeRepositoryImpl {
    db: sea_orm::DbConn,
}

impl LikeRepositoryImpl {
    pub fn new(db: sea_orm::DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LikeRepository for LikeRepositoryImpl {
    async fn add(&self, record: LikeRecord) -> Result<(), LikeError> {
        self.db
            .transaction::<_, (), LikeError>(move |txn| {
                Box::pin(async move {
                    let existing = like_record::Entity::find_by_id((
                        record.user_id.to_string(),
                        record.post_id.to_string(),
                    ))
                    .one(txn)
                    .await
                    .map_err(db_err)?;
                    if existing.is_some() {
                        return Err(LikeError::Conflict {
                            user_id: record.user_id.clone(),
                            post_id: record.post_id.clone(),
                        });
                    }

                    // 并发插入同一对 (user, post) 时由主键约束裁决，失败方映射为 Conflict
                    let active_model: like_record::ActiveModel = (&record).into();
                    like_record::Entity::insert(active_model)
                        .exec_without_returning(txn)
                        .await
                        .map_err(|e| map_insert_err(e, &record))?;

                    let stats = post_stats::ActiveModel {
                        post_id: Set(record.post_id.to_string()),
                        like_count: Set(1),
                    };
                    post_stats::Entity::insert(stats)
                        .on_conflict(
                            OnConflict::column(post_stats::Column::PostId)
                                .value(
                                    post_stats::Column::LikeCount,
                                    Expr::col((post_stats::Entity, post_stats::Column::LikeCount))
                                        .add(1),
                                )
                                .to_owned(),
                        )
                        .exec_without_returning(txn)
                        .await
                        .map_err(db_err)?;
                    Ok(())
                })
            })
            .await
            .map_err(from_transaction_error)
    }

    async fn remove(&self, user_id: &UserId, post_id: &PostId) -> Result<(), LikeError> {
        let user_id = user_id.clone();
        let post_id = post_id.clone();
        self.db
            .transaction::<_, (), LikeError>(move |txn| {
                Box::pin(async move {
                    let deleted = like_record::Entity::delete_many()
                        .filter(like_record::Column::UserId.eq(user_id.as_str()))
                        .filter(like_record::Column::PostId.eq(post_id.as_str()))
                        .exec(txn)
                        .await
                        .map_err(db_err)?;
                    if deleted.rows_affected == 0 {
                        return Err(LikeError::LikeNotFound { user_id, post_id });
                    }

                    // 计数行缺失（或已为 0）时整个事务回滚，删除也不会生效
                    let updated = post_stats::Entity::update_many()
                        .col_expr(
                            post_stats::Column::LikeCount,
                            Expr::col(post_stats::Column::LikeCount).sub(1),
                        )
                        .filter(post_stats::Column::PostId.eq(post_id.as_str()))
                        .filter(post_stats::Column::LikeCount.gt(0))
                        .exec(txn)
                        .await
                        .map_err(db_err)?;
                    if updated.rows_affected == 0 {
                        return Err(LikeError::StatsNotFound(post_id));
                    }
                    Ok(())
                })
            })
            .await
            .map_err(from_transaction_error)
    }

    async fn exists(&self, user_id: &UserId, post_id: &PostId) -> Result<bool, LikeError> {
        let row = like_record::Entity::find_by_id((user_id.to_string(), post_id.to_string()))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(row.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::postgres::query::post_stats::PostStatsRepositoryImpl;
    use crate::repository::postgres::test_db;
    use model::post_stats::PostStatsRepository;

    fn ids(user_id: &str, post_id: &str) -> (UserId, PostId) {
        (UserId::parse(user_id).unwrap(), PostId::parse(post_id).unwrap())
    }

    async fn count(db: &DatabaseConnection, post_id: &str) -> i64 {
        PostStatsRepositoryImpl::new(db.clone())
            .find_by_post_id(&PostId::parse(post_id).unwrap())
            .await
            .unwrap()
            .map_or(0, |s| s.like_count)
    }

    #[tokio::test]
    async fn test_like_unlike_scenario() {
        let db = test_db::connect().await;
        let repo = LikeRepositoryImpl::new(db.clone());
        let (u1, p1) = ids("u1", "p1");
        let (u2, _) = ids("u2", "p1");

        assert_eq!(count(&db, "p1").await, 0);

        repo.add(LikeRecord::new(u1.clone(), p1.clone())).await.unwrap();
        assert_eq!(count(&db, "p1").await, 1);
        assert!(repo.exists(&u1, &p1).await.unwrap());

        repo.add(LikeRecord::new(u2.clone(), p1.clone())).await.unwrap();
        assert_eq!(count(&db, "p1").await, 2);

        repo.remove(&u1, &p1).await.unwrap();
        assert_eq!(count(&db, "p1").await, 1);
        assert!(!repo.exists(&u1, &p1).await.unwrap());
        assert!(repo.exists(&u2, &p1).await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_like_conflicts_and_keeps_count() {
        let db = test_db::connect().await;
        let repo = LikeRepositoryImpl::new(db.clone());
        let (u1, p1) = ids("u1", "p1");

        repo.add(LikeRecord::new(u1.clone(), p1.clone())).await.unwrap();
        let err = repo
            .add(LikeRecord::new(u1.clone(), p1.clone()))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            LikeError::Conflict {
                user_id: u1,
                post_id: p1
            }
        );
        assert_eq!(count(&db, "p1").await, 1);
    }

    #[tokio::test]
    async fn test_unlike_missing_like_is_not_found() {
        let db = test_db::connect().await;
        let repo = LikeRepositoryImpl::new(db.clone());
        let (u1, p1) = ids("u1", "p1");
        let (u2, _) = ids("u2", "p1");

        // 帖子没有任何计数行
        let err = repo.remove(&u1, &p1).await.unwrap_err();
        assert!(matches!(err, LikeError::LikeNotFound { .. }));

        // 帖子有别人的点赞，计数保持不变
        repo.add(LikeRecord::new(u2, p1.clone())).await.unwrap();
        let err = repo.remove(&u1, &p1).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(count(&db, "p1").await, 1);
    }

    #[tokio::test]
    async fn test_missing_stats_row_rolls_back_unlike() {
        let db = test_db::connect().await;
        let repo = LikeRepositoryImpl::new(db.clone());
        let (u1, p1) = ids("u1", "p1");

        repo.add(LikeRecord::new(u1.clone(), p1.clone())).await.unwrap();
        post_stats::Entity::delete_by_id("p1".to_string())
            .exec(&db)
            .await
            .unwrap();

        let err = repo.remove(&u1, &p1).await.unwrap_err();
        assert_eq!(err, LikeError::StatsNotFound(p1.clone()));
        // 删除语句已执行但随事务回滚，点赞记录仍在
        assert!(repo.exists(&u1, &p1).await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_likes() {
        let db = test_db::connect().await;
        let repo = LikeRepositoryImpl::new(db.clone());
        let (u1, p1) = ids("u1", "p1");

        let (first, second) = tokio::join!(
            repo.add(LikeRecord::new(u1.clone(), p1.clone())),
            repo.add(LikeRecord::new(u1.clone(), p1.clone())),
        );

        let results = [first, second];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert_eq!(
            results
                .iter()
                .filter(|r| matches!(r, Err(LikeError::Conflict { .. })))
                .count(),
            1
        );
        assert_eq!(count(&db, "p1").await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_insert_maps_to_conflict() {
        let db = test_db::connect().await;
        let (u1, p1) = ids("u1", "p1");
        let record = LikeRecord::new(u1.clone(), p1.clone());

        // 绕过事务内的存在性检查，直接让第二次插入撞上主键
        like_record::Entity::insert(like_record::ActiveModel::from(&record))
            .exec_without_returning(&db)
            .await
            .unwrap();
        let err = like_record::Entity::insert(like_record::ActiveModel::from(&record))
            .exec_without_returning(&db)
            .await
            .unwrap_err();

        assert_eq!(
            map_insert_err(err, &record),
            LikeError::Conflict {
                user_id: u1,
                post_id: p1
            }
        );
    }

    #[test]
    fn test_other_insert_errors_stay_db_errors() {
        let (u1, p1) = ids("u1", "p1");
        let record = LikeRecord::new(u1, p1);
        let err = map_insert_err(DbErr::Custom("disk full".to_string()), &record);
        assert!(matches!(err, LikeError::DbErr(_)));
    }

    #[tokio::test]
    async fn test_likes_are_counted_per_post() {
        let db = test_db::connect().await;
        let repo = LikeRepositoryImpl::new(db.clone());
        let (u1, p1) = ids("u1", "p1");
        let (_, p2) = ids("u1", "p2");

        repo.add(LikeRecord::new(u1.clone(), p1.clone())).await.unwrap();
        repo.add(LikeRecord::new(u1.clone(), p2.clone())).await.unwrap();
        repo.remove(&u1, &p2).await.unwrap();

        assert_eq!(count(&db, "p1").await, 1);
        assert_eq!(count(&db, "p2").await, 0);
        assert!(repo.exists(&u1, &p1).await.unwrap());
    }
}
