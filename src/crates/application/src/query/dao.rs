use crate::query::QueryError;
use async_trait::async_trait;
use model::wallpaper::Wallpaper;
use model::wallpaper_stats::WallpaperStats;
use uuid::Uuid;

#[async_trait]
pub trait WallpaperDao {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Wallpaper>, QueryError>;
    /// 最新壁纸列表（按 created_at 降序），可按分类过滤，返回总数用于分页
    async fn get_by_newest(
        &self,
        category: Option<&str>,
        offset: i32,
        limit: i32,
    ) -> Result<(Vec<Wallpaper>, i64), QueryError>;
    async fn count_all(&self) -> Result<i64, QueryError>;
    /// Ids of rows that fail the display invariant (empty title or image_url).
    async fn get_not_displayable(&self) -> Result<Vec<Uuid>, QueryError>;
}

#[async_trait]
pub trait WallpaperStatsDao {
    async fn get_by_wallpaper_id(&self, id: Uuid) -> Result<Option<WallpaperStats>, QueryError>;
    async fn is_liked(&self, id: Uuid, device_id: &str) -> Result<bool, QueryError>;
    async fn count_all(&self) -> Result<i64, QueryError>;
    /// Stats rows whose wallpaper no longer exists.
    async fn get_orphaned(&self) -> Result<Vec<Uuid>, QueryError>;
}
