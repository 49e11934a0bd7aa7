use crate::repository::postgres::db_data::{
    wallpaper as wallpaper_db, wallpaper_like as like_db, wallpaper_stats as stats_db,
};
use application::query::dao::WallpaperStatsDao;
use application::query::QueryError;
use async_trait::async_trait;
use model::wallpaper_stats::WallpaperStats;
use sea_orm::*;
use std::collections::HashSet;
use uuid::Uuid;

pub struct WallpaperStatsDaoImpl {
    db: DatabaseConnection,
}

impl WallpaperStatsDaoImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WallpaperStatsDao for WallpaperStatsDaoImpl {
    async fn get_by_wallpaper_id(&self, id: Uuid) -> Result<Option<WallpaperStats>, QueryError> {
        let row = stats_db::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;
        Ok(row.map(|row| WallpaperStats {
            wallpaper_id: row.wallpaper_id,
            views: row.views,
            likes: row.likes,
            downloads: row.downloads,
        }))
    }

    async fn is_liked(&self, id: Uuid, device_id: &str) -> Result<bool, QueryError> {
        let row = like_db::Entity::find()
            .filter(like_db::Column::WallpaperId.eq(id))
            .filter(like_db::Column::DeviceId.eq(device_id))
            .one(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;
        Ok(row.is_some())
    }

    async fn count_all(&self) -> Result<i64, QueryError> {
        let total = stats_db::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;
        Ok(total as i64)
    }

    async fn get_orphaned(&self) -> Result<Vec<Uuid>, QueryError> {
        // 两张表的 id 集合在内存里做差，admin 工具的数据量撑得住
        let wallpaper_ids: HashSet<Uuid> = wallpaper_db::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?
            .into_iter()
            .map(|row| row.id)
            .collect();

        let orphaned = stats_db::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?
            .into_iter()
            .map(|row| row.wallpaper_id)
            .filter(|id| !wallpaper_ids.contains(id))
            .collect();
        Ok(orphaned)
    }
}
