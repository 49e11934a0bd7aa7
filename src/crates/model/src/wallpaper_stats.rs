use serde::Serialize;
use uuid::Uuid;

/// 持久化统计读模型，一行对应一张壁纸
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperStats {
    pub wallpaper_id: Uuid,
    pub views: i64,
    pub likes: i64,
    pub downloads: i64,
}

impl WallpaperStats {
    /// Zeroed counters for a wallpaper that has no stats row yet.
    /// A wallpaper with zero engagement is valid, not an error.
    pub fn empty(wallpaper_id: Uuid) -> Self {
        Self {
            wallpaper_id,
            views: 0,
            likes: 0,
            downloads: 0,
        }
    }
}
