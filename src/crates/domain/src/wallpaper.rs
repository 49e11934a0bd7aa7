use crate::value::WallpaperId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WallpaperError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
    #[error("Entity not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Database error: {0}")]
    DbErr(String),
}

/// 发布壁纸时的写模型（publisher 提交的全部元数据）
#[derive(Debug, Clone)]
pub struct NewWallpaper {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub image_url: String,
    pub thumbnail_url: Option<String>,
    pub medium_url: Option<String>,
    pub large_url: Option<String>,
    pub original_url: Option<String>,
}

impl NewWallpaper {
    /// Title and image_url are mandatory; everything else is optional
    /// metadata the publisher may fill in later.
    pub fn validate(&self) -> Result<(), WallpaperError> {
        if self.title.trim().is_empty() {
            return Err(WallpaperError::ValidationError(
                "title must not be empty".to_string(),
            ));
        }
        if self.image_url.trim().is_empty() {
            return Err(WallpaperError::ValidationError(
                "image_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Partial metadata update. `None` means "leave the column unchanged".
#[derive(Debug, Clone, Default)]
pub struct WallpaperPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub medium_url: Option<String>,
    pub large_url: Option<String>,
    pub original_url: Option<String>,
}

#[async_trait]
pub trait WallpaperRepository: Send + Sync {
    async fn insert(&self, id: WallpaperId, wallpaper: NewWallpaper)
        -> Result<(), WallpaperError>;
    async fn update(&self, id: WallpaperId, patch: WallpaperPatch) -> Result<(), WallpaperError>;
    async fn delete(&self, id: WallpaperId) -> Result<(), WallpaperError>;
    async fn exists(&self, id: WallpaperId) -> Result<bool, WallpaperError>;
}
