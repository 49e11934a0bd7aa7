use crate::value::{DeviceId, WallpaperId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InteractionError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
    #[error("Entity not found: {0}")]
    NotFound(String),
    #[error("Database error: {0}")]
    DbErr(String),
}

/// Write side of the persisted counters. Increments are upserts: the
/// first touch of a wallpaper creates its row.
#[async_trait]
pub trait WallpaperStatsRepository: Send + Sync {
    async fn create_empty(&self, id: WallpaperId) -> Result<(), InteractionError>;
    async fn increment_downloads(&self, id: WallpaperId) -> Result<i64, InteractionError>;
    async fn increment_views(&self, id: WallpaperId) -> Result<i64, InteractionError>;
    /// delta is +1 on like, -1 on unlike; the counter never goes below zero.
    async fn adjust_likes(&self, id: WallpaperId, delta: i64) -> Result<i64, InteractionError>;
    async fn delete(&self, id: WallpaperId) -> Result<(), InteractionError>;
}

/// Like-membership rows. Invariant: at most one row per
/// (wallpaper_id, device_id) pair.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn is_liked(&self, id: WallpaperId, device: &DeviceId)
        -> Result<bool, InteractionError>;
    /// Returns false if the pair already existed (no duplicate row created).
    async fn insert(&self, id: WallpaperId, device: &DeviceId) -> Result<bool, InteractionError>;
    /// Returns false if there was nothing to remove.
    async fn remove(&self, id: WallpaperId, device: &DeviceId) -> Result<bool, InteractionError>;
    async fn delete_for_wallpaper(&self, id: WallpaperId) -> Result<(), InteractionError>;
}
