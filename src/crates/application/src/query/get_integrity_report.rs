use crate::query::dao::{WallpaperDao, WallpaperStatsDao};
use crate::query::QueryError;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// Cross-table health report for the admin dashboard: row counts plus
/// the two consistency problems the content tooling runs into in
/// practice (stats rows whose wallpaper is gone, and wallpapers that
/// fail the display invariant).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityReport {
    pub wallpaper_count: i64,
    pub stats_count: i64,
    pub orphaned_stats: Vec<Uuid>,
    pub not_displayable: Vec<Uuid>,
    pub issues: Vec<String>,
}

#[derive(Clone)]
pub struct GetIntegrityReport {
    wallpaper_dao: Arc<dyn WallpaperDao + Send + Sync>,
    stats_dao: Arc<dyn WallpaperStatsDao + Send + Sync>,
}

impl GetIntegrityReport {
    pub fn new(
        wallpaper_dao: Arc<dyn WallpaperDao + Send + Sync>,
        stats_dao: Arc<dyn WallpaperStatsDao + Send + Sync>,
    ) -> Self {
        Self {
            wallpaper_dao,
            stats_dao,
        }
    }

    pub async fn handle(&self) -> Result<IntegrityReport, QueryError> {
        let wallpaper_count = self.wallpaper_dao.count_all().await?;
        let stats_count = self.stats_dao.count_all().await?;
        let orphaned_stats = self.stats_dao.get_orphaned().await?;
        let not_displayable = self.wallpaper_dao.get_not_displayable().await?;

        let mut issues = Vec::new();
        if !orphaned_stats.is_empty() {
            issues.push(format!(
                "{} orphaned wallpaper_stats records",
                orphaned_stats.len()
            ));
        }
        if !not_displayable.is_empty() {
            issues.push(format!(
                "{} wallpapers missing title or image_url",
                not_displayable.len()
            ));
        }

        Ok(IntegrityReport {
            wallpaper_count,
            stats_count,
            orphaned_stats,
            not_displayable,
            issues,
        })
    }
}
