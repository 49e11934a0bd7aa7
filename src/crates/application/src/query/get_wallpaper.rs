use crate::query::dao::{WallpaperDao, WallpaperStatsDao};
use crate::query::shared::parse_wallpaper_id;
use crate::query::QueryError;
use crate::stats::display::format_count;
use crate::stats::{mock, DerivedStats, StatsMode};
use log::warn;
use model::wallpaper::Wallpaper;
use model::wallpaper_stats::WallpaperStats;
use std::sync::Arc;

/// Wallpaper record merged with its display stats, derived or real
/// depending on the configured [`StatsMode`].
#[derive(Debug, Clone)]
pub struct WallpaperDetail {
    pub wallpaper: Wallpaper,
    pub stats: DerivedStats,
}

#[derive(Clone)]
pub struct GetWallpaper {
    wallpaper_dao: Arc<dyn WallpaperDao + Send + Sync>,
    stats_dao: Arc<dyn WallpaperStatsDao + Send + Sync>,
    mode: StatsMode,
}

impl GetWallpaper {
    pub fn new(
        wallpaper_dao: Arc<dyn WallpaperDao + Send + Sync>,
        stats_dao: Arc<dyn WallpaperStatsDao + Send + Sync>,
        mode: StatsMode,
    ) -> Self {
        Self {
            wallpaper_dao,
            stats_dao,
            mode,
        }
    }

    pub async fn handle(&self, id: &str) -> Result<WallpaperDetail, QueryError> {
        let wallpaper_id = parse_wallpaper_id(id)?;

        let wallpaper = self
            .wallpaper_dao
            .get_by_id(wallpaper_id)
            .await?
            .ok_or_else(|| QueryError::NotFound(format!("wallpaper not found: {}", id)))?;

        // 缺 title 或 image_url 的行不可展示，按数据完整性问题处理
        if !wallpaper.is_displayable() {
            warn!("wallpaper {} fails the display invariant", wallpaper_id);
            return Err(QueryError::NotFound(format!(
                "wallpaper not displayable: {}",
                id
            )));
        }

        let stats = match self.mode {
            StatsMode::Mock => mock::derive(id),
            StatsMode::Persisted => {
                let row = self
                    .stats_dao
                    .get_by_wallpaper_id(wallpaper_id)
                    .await?
                    .unwrap_or_else(|| WallpaperStats::empty(wallpaper_id));
                DerivedStats {
                    downloads: format_count(row.downloads),
                    likes: format_count(row.likes),
                    views: format_count(row.views),
                    featured: row.views > 100,
                }
            }
        };

        Ok(WallpaperDetail { wallpaper, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio::runtime::Runtime;
    use uuid::Uuid;

    const ID: &str = "f47ac10b-58cc-4372-a567-0e02b2c3d479";

    fn record(title: &str, image_url: &str) -> Wallpaper {
        Wallpaper {
            id: Uuid::parse_str(ID).unwrap(),
            title: title.to_string(),
            description: None,
            category: Some("nature".to_string()),
            tags: vec!["wallpaper".to_string()],
            image_url: image_url.to_string(),
            thumbnail_url: None,
            medium_url: None,
            large_url: None,
            original_url: None,
            created_at: None,
        }
    }

    struct FakeWallpaperDao {
        row: Option<Wallpaper>,
    }

    #[async_trait]
    impl WallpaperDao for FakeWallpaperDao {
        async fn get_by_id(&self, _id: Uuid) -> Result<Option<Wallpaper>, QueryError> {
            Ok(self.row.clone())
        }

        async fn get_by_newest(
            &self,
            _category: Option<&str>,
            _offset: i32,
            _limit: i32,
        ) -> Result<(Vec<Wallpaper>, i64), QueryError> {
            Ok((vec![], 0))
        }

        async fn count_all(&self) -> Result<i64, QueryError> {
            Ok(0)
        }

        async fn get_not_displayable(&self) -> Result<Vec<Uuid>, QueryError> {
            Ok(vec![])
        }
    }

    struct FakeStatsDao {
        row: Option<WallpaperStats>,
    }

    #[async_trait]
    impl WallpaperStatsDao for FakeStatsDao {
        async fn get_by_wallpaper_id(
            &self,
            _id: Uuid,
        ) -> Result<Option<WallpaperStats>, QueryError> {
            Ok(self.row.clone())
        }

        async fn is_liked(&self, _id: Uuid, _device_id: &str) -> Result<bool, QueryError> {
            Ok(false)
        }

        async fn count_all(&self) -> Result<i64, QueryError> {
            Ok(0)
        }

        async fn get_orphaned(&self) -> Result<Vec<Uuid>, QueryError> {
            Ok(vec![])
        }
    }

    fn query(
        wallpaper: Option<Wallpaper>,
        stats: Option<WallpaperStats>,
        mode: StatsMode,
    ) -> GetWallpaper {
        GetWallpaper::new(
            Arc::new(FakeWallpaperDao { row: wallpaper }),
            Arc::new(FakeStatsDao { row: stats }),
            mode,
        )
    }

    #[test]
    fn test_invalid_id_rejected_before_lookup() {
        let rt = Runtime::new().unwrap();
        let result = rt.block_on(query(None, None, StatsMode::Mock).handle("abc"));
        assert!(matches!(result, Err(QueryError::InvalidInput(_))));
    }

    #[test]
    fn test_missing_record_is_not_found() {
        let rt = Runtime::new().unwrap();
        let result = rt.block_on(query(None, None, StatsMode::Mock).handle(ID));
        assert!(matches!(result, Err(QueryError::NotFound(_))));
    }

    #[test]
    fn test_record_missing_image_url_is_not_found() {
        let rt = Runtime::new().unwrap();
        let result =
            rt.block_on(query(Some(record("Aurora", "")), None, StatsMode::Mock).handle(ID));
        assert!(matches!(result, Err(QueryError::NotFound(_))));
    }

    #[test]
    fn test_mock_mode_merges_derived_stats() {
        let rt = Runtime::new().unwrap();
        let detail = rt
            .block_on(
                query(
                    Some(record("Aurora", "https://cdn.example/a.webp")),
                    None,
                    StatsMode::Mock,
                )
                .handle(ID),
            )
            .unwrap();
        assert_eq!(detail.stats, mock::derive(ID));
    }

    #[test]
    fn test_persisted_mode_formats_real_counters() {
        let rt = Runtime::new().unwrap();
        let stats = WallpaperStats {
            wallpaper_id: Uuid::parse_str(ID).unwrap(),
            views: 250,
            likes: 1500,
            downloads: 999,
        };
        let detail = rt
            .block_on(
                query(
                    Some(record("Aurora", "https://cdn.example/a.webp")),
                    Some(stats),
                    StatsMode::Persisted,
                )
                .handle(ID),
            )
            .unwrap();
        assert_eq!(detail.stats.downloads, "999");
        assert_eq!(detail.stats.likes, "1.5K");
        assert_eq!(detail.stats.views, "250");
        assert!(detail.stats.featured);
    }

    #[test]
    fn test_persisted_mode_without_row_is_not_featured() {
        let rt = Runtime::new().unwrap();
        let detail = rt
            .block_on(
                query(
                    Some(record("Aurora", "https://cdn.example/a.webp")),
                    None,
                    StatsMode::Persisted,
                )
                .handle(ID),
            )
            .unwrap();
        assert_eq!(detail.stats.views, "0");
        assert!(!detail.stats.featured);
    }
}
