use crate::query::dao::WallpaperStatsDao;
use crate::query::shared::parse_wallpaper_id;
use crate::query::QueryError;
use crate::stats::display::format_count;
use domain::value::DeviceId;
use log::warn;
use model::wallpaper_stats::WallpaperStats;
use std::sync::Arc;

/// Aggregated read of the persisted counters for one wallpaper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallpaperStatsView {
    pub downloads: i64,
    pub likes: i64,
    pub views: i64,
    pub is_liked: bool,
}

impl WallpaperStatsView {
    /// Human display strings for the raw counters.
    pub fn formatted(&self) -> (String, String, String) {
        (
            format_count(self.downloads),
            format_count(self.likes),
            format_count(self.views),
        )
    }

    /// A wallpaper with real engagement is featured past 100 views.
    pub fn featured(&self) -> bool {
        self.views > 100
    }
}

#[derive(Clone)]
pub struct GetWallpaperStats {
    stats_dao: Arc<dyn WallpaperStatsDao + Send + Sync>,
}

impl GetWallpaperStats {
    pub fn new(stats_dao: Arc<dyn WallpaperStatsDao + Send + Sync>) -> Self {
        Self { stats_dao }
    }

    /// 读取统计行与点赞标记。两次查询互不依赖，并发执行。
    ///
    /// A missing stats row means zero engagement, not an error. The
    /// like-membership check is supplementary: any failure there is
    /// downgraded to `is_liked = false` instead of failing the response,
    /// because "unknown" and "not liked" look the same to the caller.
    pub async fn handle(
        &self,
        id: &str,
        device: Option<&DeviceId>,
    ) -> Result<WallpaperStatsView, QueryError> {
        let wallpaper_id = parse_wallpaper_id(id)?;

        let stats_fut = self.stats_dao.get_by_wallpaper_id(wallpaper_id);
        let liked_fut = async {
            match device {
                Some(device) => match self.stats_dao.is_liked(wallpaper_id, device.as_str()).await
                {
                    Ok(liked) => liked,
                    Err(e) => {
                        warn!(
                            "like lookup failed for wallpaper {} device {}: {}",
                            wallpaper_id, device, e
                        );
                        false
                    }
                },
                None => false,
            }
        };
        let (stats, is_liked) = futures::join!(stats_fut, liked_fut);

        let stats = stats?.unwrap_or_else(|| WallpaperStats::empty(wallpaper_id));
        Ok(WallpaperStatsView {
            downloads: stats.downloads,
            likes: stats.likes,
            views: stats.views,
            is_liked,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::dao::WallpaperStatsDao;
    use async_trait::async_trait;
    use tokio::runtime::Runtime;
    use uuid::Uuid;

    const ID: &str = "f47ac10b-58cc-4372-a567-0e02b2c3d479";

    struct FakeStatsDao {
        row: Option<WallpaperStats>,
        liked: Result<bool, ()>,
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
            self.liked
                .map_err(|_| QueryError::DbError("like table unavailable".to_string()))
        }

        async fn count_all(&self) -> Result<i64, QueryError> {
            Ok(0)
        }

        async fn get_orphaned(&self) -> Result<Vec<Uuid>, QueryError> {
            Ok(vec![])
        }
    }

    fn query(row: Option<WallpaperStats>, liked: Result<bool, ()>) -> GetWallpaperStats {
        GetWallpaperStats::new(Arc::new(FakeStatsDao { row, liked }))
    }

    #[test]
    fn test_missing_row_yields_zeros() {
        let rt = Runtime::new().unwrap();
        let view = rt.block_on(query(None, Ok(false)).handle(ID, None)).unwrap();
        assert_eq!(view.downloads, 0);
        assert_eq!(view.likes, 0);
        assert_eq!(view.views, 0);
        assert!(!view.is_liked);
    }

    #[test]
    fn test_present_row_formats_counters() {
        let rt = Runtime::new().unwrap();
        let row = WallpaperStats {
            wallpaper_id: Uuid::parse_str(ID).unwrap(),
            views: 150,
            likes: 12,
            downloads: 12345,
        };
        let view = rt
            .block_on(query(Some(row), Ok(false)).handle(ID, None))
            .unwrap();
        let (downloads, likes, views) = view.formatted();
        assert_eq!(downloads, "12.3K");
        assert_eq!(likes, "12");
        assert_eq!(views, "150");
        assert!(view.featured());
    }

    #[test]
    fn test_no_device_means_not_liked() {
        let rt = Runtime::new().unwrap();
        // even when the dao would say true, no device id means false
        let view = rt.block_on(query(None, Ok(true)).handle(ID, None)).unwrap();
        assert!(!view.is_liked);
    }

    #[test]
    fn test_device_with_matching_row() {
        let rt = Runtime::new().unwrap();
        let device = DeviceId::new("device-1");
        let view = rt
            .block_on(query(None, Ok(true)).handle(ID, Some(&device)))
            .unwrap();
        assert!(view.is_liked);
    }

    #[test]
    fn test_like_lookup_failure_downgrades_to_false() {
        let rt = Runtime::new().unwrap();
        let device = DeviceId::new("device-1");
        let view = rt
            .block_on(query(None, Err(())).handle(ID, Some(&device)))
            .unwrap();
        assert!(!view.is_liked);
    }

    #[test]
    fn test_malformed_id_is_rejected() {
        let rt = Runtime::new().unwrap();
        let result = rt.block_on(query(None, Ok(false)).handle("abc", None));
        assert!(matches!(result, Err(QueryError::InvalidInput(_))));
    }
}
