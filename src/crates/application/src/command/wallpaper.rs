use std::sync::Arc;

use super::shared::IdGenerator;
use crate::error::AppError;
use domain::interaction::{LikeRepository, WallpaperStatsRepository};
use domain::value::WallpaperId;
use domain::wallpaper::{NewWallpaper, WallpaperPatch, WallpaperRepository};
use log::info;

/// Content-management service behind the admin endpoints. Publishing a
/// wallpaper also creates its zeroed stats row so the analytics path
/// never has to special-case brand-new records; unpublishing removes
/// the stats and like rows first so no orphans are left behind.
pub struct WallpaperService {
    wallpaper_repo: Arc<dyn WallpaperRepository>,
    stats_repo: Arc<dyn WallpaperStatsRepository>,
    like_repo: Arc<dyn LikeRepository>,
    id_generator: Arc<dyn IdGenerator>,
}

impl WallpaperService {
    pub fn new(
        wallpaper_repo: Arc<dyn WallpaperRepository>,
        stats_repo: Arc<dyn WallpaperStatsRepository>,
        like_repo: Arc<dyn LikeRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            wallpaper_repo,
            stats_repo,
            like_repo,
            id_generator,
        }
    }

    pub async fn publish(&self, wallpaper: NewWallpaper) -> Result<WallpaperId, AppError> {
        wallpaper.validate()?;
        let id = self.id_generator.next_id().await?;
        self.wallpaper_repo.insert(id, wallpaper).await?;
        self.stats_repo.create_empty(id).await?;
        info!("published wallpaper {}", id);
        Ok(id)
    }

    pub async fn update(&self, id: WallpaperId, patch: WallpaperPatch) -> Result<(), AppError> {
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(AppError::InvalidInput(
                    "title must not be empty".to_string(),
                ));
            }
        }
        if let Some(image_url) = &patch.image_url {
            if image_url.trim().is_empty() {
                return Err(AppError::InvalidInput(
                    "image_url must not be empty".to_string(),
                ));
            }
        }
        self.wallpaper_repo.update(id, patch).await?;
        Ok(())
    }

    pub async fn unpublish(&self, id: WallpaperId) -> Result<(), AppError> {
        if !self.wallpaper_repo.exists(id).await? {
            return Err(AppError::AggregateNotFound(
                "wallpaper".to_string(),
                id.to_string(),
            ));
        }
        // stats 和点赞行先删，壁纸行最后删
        self.like_repo.delete_for_wallpaper(id).await?;
        self.stats_repo.delete(id).await?;
        self.wallpaper_repo.delete(id).await?;
        info!("unpublished wallpaper {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use domain::interaction::{InteractionError, LikeRepository};
    use domain::value::DeviceId;
    use domain::wallpaper::WallpaperError;
    use std::sync::Mutex;
    use tokio::runtime::Runtime;
    use uuid::Uuid;

    #[derive(Default)]
    struct RecordingStore {
        exists: bool,
        calls: Mutex<Vec<&'static str>>,
    }

    impl RecordingStore {
        fn with_wallpaper() -> Self {
            Self {
                exists: true,
                ..Default::default()
            }
        }

        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl WallpaperRepository for RecordingStore {
        async fn insert(
            &self,
            _id: WallpaperId,
            _wallpaper: NewWallpaper,
        ) -> Result<(), WallpaperError> {
            self.record("wallpaper.insert");
            Ok(())
        }

        async fn update(
            &self,
            _id: WallpaperId,
            _patch: WallpaperPatch,
        ) -> Result<(), WallpaperError> {
            self.record("wallpaper.update");
            Ok(())
        }

        async fn delete(&self, _id: WallpaperId) -> Result<(), WallpaperError> {
            self.record("wallpaper.delete");
            Ok(())
        }

        async fn exists(&self, _id: WallpaperId) -> Result<bool, WallpaperError> {
            Ok(self.exists)
        }
    }

    #[async_trait]
    impl WallpaperStatsRepository for RecordingStore {
        async fn create_empty(&self, _id: WallpaperId) -> Result<(), InteractionError> {
            self.record("stats.create_empty");
            Ok(())
        }

        async fn increment_downloads(&self, _id: WallpaperId) -> Result<i64, InteractionError> {
            Ok(0)
        }

        async fn increment_views(&self, _id: WallpaperId) -> Result<i64, InteractionError> {
            Ok(0)
        }

        async fn adjust_likes(
            &self,
            _id: WallpaperId,
            _delta: i64,
        ) -> Result<i64, InteractionError> {
            Ok(0)
        }

        async fn delete(&self, _id: WallpaperId) -> Result<(), InteractionError> {
            self.record("stats.delete");
            Ok(())
        }
    }

    #[async_trait]
    impl LikeRepository for RecordingStore {
        async fn is_liked(
            &self,
            _id: WallpaperId,
            _device: &DeviceId,
        ) -> Result<bool, InteractionError> {
            Ok(false)
        }

        async fn insert(
            &self,
            _id: WallpaperId,
            _device: &DeviceId,
        ) -> Result<bool, InteractionError> {
            Ok(true)
        }

        async fn remove(
            &self,
            _id: WallpaperId,
            _device: &DeviceId,
        ) -> Result<bool, InteractionError> {
            Ok(true)
        }

        async fn delete_for_wallpaper(&self, _id: WallpaperId) -> Result<(), InteractionError> {
            self.record("likes.delete_for_wallpaper");
            Ok(())
        }
    }

    struct FixedIdGenerator(Uuid);

    #[async_trait]
    impl IdGenerator for FixedIdGenerator {
        async fn next_id(&self) -> Result<WallpaperId, AppError> {
            Ok(WallpaperId::from(self.0))
        }
    }

    fn new_wallpaper(title: &str, image_url: &str) -> NewWallpaper {
        NewWallpaper {
            title: title.to_string(),
            description: None,
            category: None,
            tags: vec![],
            image_url: image_url.to_string(),
            thumbnail_url: None,
            medium_url: None,
            large_url: None,
            original_url: None,
        }
    }

    fn service(store: Arc<RecordingStore>, id: Uuid) -> WallpaperService {
        WallpaperService::new(
            store.clone(),
            store.clone(),
            store,
            Arc::new(FixedIdGenerator(id)),
        )
    }

    #[test]
    fn test_publish_creates_wallpaper_and_stats_row() {
        let rt = Runtime::new().unwrap();
        let store = Arc::new(RecordingStore::default());
        let id = Uuid::new_v4();

        let published = rt
            .block_on(
                service(store.clone(), id).publish(new_wallpaper("Aurora", "https://cdn/a.webp")),
            )
            .unwrap();
        assert_eq!(published.as_uuid(), id);
        assert_eq!(
            *store.calls.lock().unwrap(),
            vec!["wallpaper.insert", "stats.create_empty"]
        );
    }

    #[test]
    fn test_publish_rejects_blank_title() {
        let rt = Runtime::new().unwrap();
        let store = Arc::new(RecordingStore::default());

        let result = rt.block_on(
            service(store.clone(), Uuid::new_v4()).publish(new_wallpaper("  ", "https://cdn/a.webp")),
        );
        assert!(matches!(
            result,
            Err(AppError::WallpaperError(WallpaperError::ValidationError(_)))
        ));
        assert!(store.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_update_rejects_blank_image_url() {
        let rt = Runtime::new().unwrap();
        let store = Arc::new(RecordingStore::with_wallpaper());
        let patch = WallpaperPatch {
            image_url: Some("".to_string()),
            ..Default::default()
        };

        let result =
            rt.block_on(service(store, Uuid::new_v4()).update(WallpaperId::from(Uuid::new_v4()), patch));
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_unpublish_removes_engagement_rows_first() {
        let rt = Runtime::new().unwrap();
        let store = Arc::new(RecordingStore::with_wallpaper());

        rt.block_on(service(store.clone(), Uuid::new_v4()).unpublish(WallpaperId::from(Uuid::new_v4())))
            .unwrap();
        assert_eq!(
            *store.calls.lock().unwrap(),
            vec![
                "likes.delete_for_wallpaper",
                "stats.delete",
                "wallpaper.delete"
            ]
        );
    }

    #[test]
    fn test_unpublish_unknown_wallpaper_is_not_found() {
        let rt = Runtime::new().unwrap();
        let store = Arc::new(RecordingStore::default());

        let result = rt.block_on(
            service(store.clone(), Uuid::new_v4()).unpublish(WallpaperId::from(Uuid::new_v4())),
        );
        assert!(matches!(result, Err(AppError::AggregateNotFound(_, _))));
        assert!(store.calls.lock().unwrap().is_empty());
    }
}
