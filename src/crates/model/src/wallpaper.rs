use serde::Serialize;
use uuid::Uuid;

/// Wallpaper 读模型（列表页和详情页共用）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallpaper {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub image_url: String,
    pub thumbnail_url: Option<String>,
    pub medium_url: Option<String>,
    pub large_url: Option<String>,
    pub original_url: Option<String>,
    pub created_at: Option<chrono::NaiveDateTime>,
}

impl Wallpaper {
    /// A record is only displayable when title and image_url are present.
    /// Missing either one is a data-integrity problem, not a recoverable state.
    pub fn is_displayable(&self) -> bool {
        !self.title.trim().is_empty() && !self.image_url.trim().is_empty()
    }
}
