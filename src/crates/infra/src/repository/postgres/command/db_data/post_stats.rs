use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use domain::value::PostId;
use model::post_stats::PostStats;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, DeriveEntityModel, Default)]
#[sea_orm(table_name = "post_stats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub post_id: String,

    pub like_count: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 行里的 post_id 已经是合法标识，这里直接复用调用方持有的 PostId
    pub fn into_stats(self, post_id: PostId) -> PostStats {
        PostStats {
            post_id,
            like_count: self.like_count,
        }
    }
}
