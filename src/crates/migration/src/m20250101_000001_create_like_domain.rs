use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // (user_id, post_id) 复合主键保证同一用户对同一帖子最多一条点赞记录
        manager
            .create_table(
                Table::create()
                    .table(LikeRecord::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LikeRecord::UserId)
                            .string_len(191)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LikeRecord::PostId)
                            .string_len(191)
                            .not_null(),
                    )
                    .col(ColumnDef::new(LikeRecord::CreatedAt).date_time().not_null())
                    .primary_key(
                        Index::create()
                            .col(LikeRecord::UserId)
                            .col(LikeRecord::PostId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_like_record_post_id")
                    .table(LikeRecord::Table)
                    .col(LikeRecord::PostId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PostStats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PostStats::PostId)
                            .string_len(191)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PostStats::LikeCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostStats::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LikeRecord::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum LikeRecord {
    Table,
    UserId,
    PostId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PostStats {
    Table,
    PostId,
    LikeCount,
}
