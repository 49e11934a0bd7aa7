use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 点赞成员表，(wallpaper_id, device_id) 唯一
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wallpaper_likes")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[sea_orm(column_type = "BigInteger")]
    pub id: i64,

    pub wallpaper_id: Uuid,

    pub device_id: String,

    pub created_at: chrono::NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
