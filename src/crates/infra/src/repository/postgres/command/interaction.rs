use crate::repository::postgres::db_data::{
    wallpaper_like as like_db, wallpaper_stats as stats_db,
};
use async_trait::async_trait;
use chrono::Utc;
use domain::interaction::{InteractionError, LikeRepository, WallpaperStatsRepository};
use domain::value::{DeviceId, WallpaperId};
use log::warn;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::*;

pub struct WallpaperStatsRepositoryImpl {
    db: DatabaseConnection,
}

impl WallpaperStatsRepositoryImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upsert a single counter column: insert the row with the counter
    /// at `initial`, or on conflict apply `expr` to the existing row.
    async fn upsert_counter(
        &self,
        id: WallpaperId,
        active_model: stats_db::ActiveModel,
        column: stats_db::Column,
        expr: sea_orm::sea_query::SimpleExpr,
    ) -> Result<i64, InteractionError> {
        let on_conflict = OnConflict::column(stats_db::Column::WallpaperId)
            .value(column, expr)
            .to_owned();

        stats_db::Entity::insert(active_model)
            .on_conflict(on_conflict)
            .exec(&self.db)
            .await
            .map_err(|e| {
                warn!("counter upsert failed for wallpaper {}: {}", id, e);
                InteractionError::DbErr(e.to_string())
            })?;

        let row = stats_db::Entity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(|e| InteractionError::DbErr(e.to_string()))?
            .ok_or_else(|| {
                warn!("stats row missing right after upsert for wallpaper {}", id);
                InteractionError::RepositoryError(format!("stats row vanished for {}", id))
            })?;
        Ok(match column {
            stats_db::Column::Views => row.views,
            stats_db::Column::Likes => row.likes,
            stats_db::Column::Downloads => row.downloads,
            stats_db::Column::WallpaperId => 0,
        })
    }
}

#[async_trait]
impl WallpaperStatsRepository for WallpaperStatsRepositoryImpl {
    async fn create_empty(&self, id: WallpaperId) -> Result<(), InteractionError> {
        let active_model = stats_db::ActiveModel {
            wallpaper_id: Set(id.as_uuid()),
            views: Set(0),
            likes: Set(0),
            downloads: Set(0),
        };
        let result = stats_db::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(stats_db::Column::WallpaperId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&self.db)
            .await;
        match result {
            Ok(_) => Ok(()),
            // already present is fine, the row just stays as-is
            Err(DbErr::RecordNotInserted) => Ok(()),
            Err(e) => {
                warn!("stats row creation failed for wallpaper {}: {}", id, e);
                Err(InteractionError::DbErr(e.to_string()))
            }
        }
    }

    async fn increment_downloads(&self, id: WallpaperId) -> Result<i64, InteractionError> {
        let active_model = stats_db::ActiveModel {
            wallpaper_id: Set(id.as_uuid()),
            views: Set(0),
            likes: Set(0),
            downloads: Set(1),
        };
        self.upsert_counter(
            id,
            active_model,
            stats_db::Column::Downloads,
            Expr::col((stats_db::Entity, stats_db::Column::Downloads)).add(1),
        )
        .await
    }

    async fn increment_views(&self, id: WallpaperId) -> Result<i64, InteractionError> {
        let active_model = stats_db::ActiveModel {
            wallpaper_id: Set(id.as_uuid()),
            views: Set(1),
            likes: Set(0),
            downloads: Set(0),
        };
        self.upsert_counter(
            id,
            active_model,
            stats_db::Column::Views,
            Expr::col((stats_db::Entity, stats_db::Column::Views)).add(1),
        )
        .await
    }

    async fn adjust_likes(&self, id: WallpaperId, delta: i64) -> Result<i64, InteractionError> {
        let active_model = stats_db::ActiveModel {
            wallpaper_id: Set(id.as_uuid()),
            views: Set(0),
            likes: Set(delta.max(0)),
            downloads: Set(0),
        };
        // counter stays at zero or above even if membership and counter drift
        self.upsert_counter(
            id,
            active_model,
            stats_db::Column::Likes,
            Expr::cust_with_values("GREATEST(likes + $1, 0)", vec![delta]),
        )
        .await
    }

    async fn delete(&self, id: WallpaperId) -> Result<(), InteractionError> {
        stats_db::Entity::delete_by_id(id.as_uuid())
            .exec(&self.db)
            .await
            .map_err(|e| InteractionError::DbErr(e.to_string()))?;
        Ok(())
    }
}

pub struct LikeRepositoryImpl {
    db: DatabaseConnection,
}

impl LikeRepositoryImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LikeRepository for LikeRepositoryImpl {
    async fn is_liked(
        &self,
        id: WallpaperId,
        device: &DeviceId,
    ) -> Result<bool, InteractionError> {
        let row = like_db::Entity::find()
            .filter(like_db::Column::WallpaperId.eq(id.as_uuid()))
            .filter(like_db::Column::DeviceId.eq(device.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| InteractionError::DbErr(e.to_string()))?;
        Ok(row.is_some())
    }

    async fn insert(
        &self,
        id: WallpaperId,
        device: &DeviceId,
    ) -> Result<bool, InteractionError> {
        let active_model = like_db::ActiveModel {
            wallpaper_id: Set(id.as_uuid()),
            device_id: Set(device.as_str().to_string()),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        // 唯一索引兜底，重复点赞不会写出第二行
        let inserted = like_db::Entity::insert(active_model)
            .on_conflict(
                OnConflict::columns([like_db::Column::WallpaperId, like_db::Column::DeviceId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                warn!("like insert failed for wallpaper {}: {}", id, e);
                InteractionError::DbErr(e.to_string())
            })?;
        Ok(inserted > 0)
    }

    async fn remove(
        &self,
        id: WallpaperId,
        device: &DeviceId,
    ) -> Result<bool, InteractionError> {
        let result = like_db::Entity::delete_many()
            .filter(like_db::Column::WallpaperId.eq(id.as_uuid()))
            .filter(like_db::Column::DeviceId.eq(device.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| InteractionError::DbErr(e.to_string()))?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_for_wallpaper(&self, id: WallpaperId) -> Result<(), InteractionError> {
        like_db::Entity::delete_many()
            .filter(like_db::Column::WallpaperId.eq(id.as_uuid()))
            .exec(&self.db)
            .await
            .map_err(|e| InteractionError::DbErr(e.to_string()))?;
        Ok(())
    }
}
