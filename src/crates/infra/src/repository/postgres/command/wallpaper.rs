use crate::repository::postgres::db_data::wallpaper as wallpaper_db;
use async_trait::async_trait;
use chrono::Utc;
use domain::value::WallpaperId;
use domain::wallpaper::{NewWallpaper, WallpaperError, WallpaperPatch, WallpaperRepository};
use sea_orm::*;

pub struct WallpaperRepositoryImpl {
    db: DatabaseConnection,
}

impl WallpaperRepositoryImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WallpaperRepository for WallpaperRepositoryImpl {
    async fn insert(
        &self,
        id: WallpaperId,
        wallpaper: NewWallpaper,
    ) -> Result<(), WallpaperError> {
        let active_model = wallpaper_db::ActiveModel {
            id: Set(id.as_uuid()),
            title: Set(wallpaper.title),
            description: Set(wallpaper.description),
            category: Set(wallpaper.category),
            tags: Set(wallpaper.tags),
            image_url: Set(wallpaper.image_url),
            thumbnail_url: Set(wallpaper.thumbnail_url),
            medium_url: Set(wallpaper.medium_url),
            large_url: Set(wallpaper.large_url),
            original_url: Set(wallpaper.original_url),
            created_at: Set(Utc::now().naive_utc()),
        };
        wallpaper_db::Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| WallpaperError::DbErr(e.to_string()))?;
        Ok(())
    }

    async fn update(&self, id: WallpaperId, patch: WallpaperPatch) -> Result<(), WallpaperError> {
        // 只 Set 补丁里出现的列，其余保持不变
        let mut active_model = wallpaper_db::ActiveModel {
            id: Set(id.as_uuid()),
            ..Default::default()
        };
        if let Some(title) = patch.title {
            active_model.title = Set(title);
        }
        if let Some(description) = patch.description {
            active_model.description = Set(Some(description));
        }
        if let Some(category) = patch.category {
            active_model.category = Set(Some(category));
        }
        if let Some(tags) = patch.tags {
            active_model.tags = Set(tags);
        }
        if let Some(image_url) = patch.image_url {
            active_model.image_url = Set(image_url);
        }
        if let Some(thumbnail_url) = patch.thumbnail_url {
            active_model.thumbnail_url = Set(Some(thumbnail_url));
        }
        if let Some(medium_url) = patch.medium_url {
            active_model.medium_url = Set(Some(medium_url));
        }
        if let Some(large_url) = patch.large_url {
            active_model.large_url = Set(Some(large_url));
        }
        if let Some(original_url) = patch.original_url {
            active_model.original_url = Set(Some(original_url));
        }

        wallpaper_db::Entity::update(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => {
                    WallpaperError::NotFound(format!("wallpaper not found: {}", id))
                }
                other => WallpaperError::DbErr(other.to_string()),
            })?;
        Ok(())
    }

    async fn delete(&self, id: WallpaperId) -> Result<(), WallpaperError> {
        wallpaper_db::Entity::delete_by_id(id.as_uuid())
            .exec(&self.db)
            .await
            .map_err(|e| WallpaperError::DbErr(e.to_string()))?;
        Ok(())
    }

    async fn exists(&self, id: WallpaperId) -> Result<bool, WallpaperError> {
        let row = wallpaper_db::Entity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(|e| WallpaperError::DbErr(e.to_string()))?;
        Ok(row.is_some())
    }
}
