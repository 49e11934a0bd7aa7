use std::sync::Arc;

use crate::error::AppError;
use domain::interaction::{LikeRepository, WallpaperStatsRepository};
use domain::value::{DeviceId, WallpaperId};
use domain::wallpaper::WallpaperRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeOutcome {
    pub liked: bool,
    pub likes: i64,
}

/// Device-scoped engagement writes: like toggling and counter bumps.
pub struct InteractionService {
    wallpaper_repo: Arc<dyn WallpaperRepository>,
    stats_repo: Arc<dyn WallpaperStatsRepository>,
    like_repo: Arc<dyn LikeRepository>,
}

impl InteractionService {
    pub fn new(
        wallpaper_repo: Arc<dyn WallpaperRepository>,
        stats_repo: Arc<dyn WallpaperStatsRepository>,
        like_repo: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            wallpaper_repo,
            stats_repo,
            like_repo,
        }
    }

    async fn ensure_exists(&self, id: WallpaperId) -> Result<(), AppError> {
        if !self.wallpaper_repo.exists(id).await? {
            return Err(AppError::AggregateNotFound(
                "wallpaper".to_string(),
                id.to_string(),
            ));
        }
        Ok(())
    }

    /// Flip the like state for (wallpaper, device) and keep the counter
    /// in step. The membership table enforces at most one row per pair,
    /// so a lost race at worst repeats a toggle, never double-counts.
    pub async fn toggle_like(
        &self,
        id: WallpaperId,
        device: &DeviceId,
    ) -> Result<LikeOutcome, AppError> {
        self.ensure_exists(id).await?;

        if self.like_repo.is_liked(id, device).await? {
            let removed = self.like_repo.remove(id, device).await?;
            let likes = if removed {
                self.stats_repo.adjust_likes(id, -1).await?
            } else {
                self.stats_repo.adjust_likes(id, 0).await?
            };
            Ok(LikeOutcome {
                liked: false,
                likes,
            })
        } else {
            let inserted = self.like_repo.insert(id, device).await?;
            let likes = if inserted {
                self.stats_repo.adjust_likes(id, 1).await?
            } else {
                self.stats_repo.adjust_likes(id, 0).await?
            };
            Ok(LikeOutcome { liked: true, likes })
        }
    }

    pub async fn record_download(&self, id: WallpaperId) -> Result<i64, AppError> {
        self.ensure_exists(id).await?;
        Ok(self.stats_repo.increment_downloads(id).await?)
    }

    pub async fn record_view(&self, id: WallpaperId) -> Result<i64, AppError> {
        self.ensure_exists(id).await?;
        Ok(self.stats_repo.increment_views(id).await?)
    }
}
