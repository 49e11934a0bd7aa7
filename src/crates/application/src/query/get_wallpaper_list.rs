use crate::query::dao::WallpaperDao;
use crate::query::QueryError;
use model::wallpaper::Wallpaper;
use std::sync::Arc;

#[derive(Clone)]
pub struct GetWallpaperList {
    wallpaper_dao: Arc<dyn WallpaperDao + Send + Sync>,
}

impl GetWallpaperList {
    pub fn new(wallpaper_dao: Arc<dyn WallpaperDao + Send + Sync>) -> Self {
        Self { wallpaper_dao }
    }

    /// 最新壁纸分页列表，可按分类过滤
    pub async fn handle(
        &self,
        category: Option<&str>,
        offset: i32,
        size: i32,
    ) -> Result<(Vec<Wallpaper>, i64), QueryError> {
        if offset < 0 {
            return Err(QueryError::InvalidParameter(
                "offset must not be negative".to_string(),
            ));
        }
        let limit = size.clamp(1, 100);
        self.wallpaper_dao
            .get_by_newest(category, offset, limit)
            .await
    }
}
