use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wallpaper_stats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub wallpaper_id: Uuid,

    #[sea_orm(column_type = "BigInteger")]
    pub views: i64,

    #[sea_orm(column_type = "BigInteger")]
    pub likes: i64,

    #[sea_orm(column_type = "BigInteger")]
    pub downloads: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
