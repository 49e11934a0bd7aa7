use crate::consts;
use crate::error::ApiError;
use crate::AppState;
use actix_web::http::header;
use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use application::command::interaction::InteractionService;
use application::query::get_wallpaper::GetWallpaper;
use application::query::get_wallpaper_list::GetWallpaperList;
use application::query::get_wallpaper_stats::GetWallpaperStats;
use application::query::shared::parse_wallpaper_id;
use application::stats::DerivedStats;
use domain::value::{DeviceId, WallpaperId};
use infra::config::StatsConfig;
use infra::repository::postgres::command::interaction::{
    LikeRepositoryImpl, WallpaperStatsRepositoryImpl,
};
use infra::repository::postgres::command::wallpaper::WallpaperRepositoryImpl;
use infra::repository::postgres::query::stats::WallpaperStatsDaoImpl;
use infra::repository::postgres::query::wallpaper::WallpaperDaoImpl;
use model::wallpaper::Wallpaper;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn configure_service(svc: &mut web::ServiceConfig) {
    svc.service(
        web::scope(consts::URL_PATH_API)
            .route("/wallpapers", web::get().to(list_wallpapers))
            .route("/wallpapers/{id}", web::get().to(get_wallpaper))
            .route("/wallpapers/{id}/stats", web::get().to(get_wallpaper_stats))
            .route("/wallpapers/{id}/like", web::post().to(toggle_like))
            .route("/wallpapers/{id}/download", web::post().to(record_download))
            .route("/wallpapers/{id}/view", web::post().to(record_view)),
    );
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub category: Option<String>,
    pub offset: Option<i32>,
    pub size: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WallpaperListResponse {
    wallpapers: Vec<Wallpaper>,
    total: i64,
}

async fn list_wallpapers(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<web::Json<WallpaperListResponse>, ApiError> {
    let dao = Arc::new(WallpaperDaoImpl::new(state.db.clone()));
    let (wallpapers, total) = GetWallpaperList::new(dao)
        .handle(
            query.category.as_deref(),
            query.offset.unwrap_or(0),
            query.size.unwrap_or(24),
        )
        .await?;
    Ok(web::Json(WallpaperListResponse { wallpapers, total }))
}

#[derive(Serialize)]
struct WallpaperDetailResponse {
    #[serde(flatten)]
    wallpaper: Wallpaper,
    stats: DerivedStats,
}

async fn get_wallpaper(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<web::Json<WallpaperDetailResponse>, ApiError> {
    let wallpaper_dao = Arc::new(WallpaperDaoImpl::new(state.db.clone()));
    let stats_dao = Arc::new(WallpaperStatsDaoImpl::new(state.db.clone()));
    let detail = GetWallpaper::new(wallpaper_dao, stats_dao, state.stats_mode)
        .handle(&path.into_inner())
        .await?;
    Ok(web::Json(WallpaperDetailResponse {
        wallpaper: detail.wallpaper,
        stats: detail.stats,
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceQuery {
    pub device_id: Option<String>,
}

/// 请求上下文里的设备标识优先，query 参数兜底
fn resolve_device(req: &HttpRequest, query: &DeviceQuery) -> Option<DeviceId> {
    req.extensions().get::<DeviceId>().cloned().or_else(|| {
        query
            .device_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(DeviceId::new)
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FormattedCounters {
    downloads: String,
    likes: String,
    views: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WallpaperStatsResponse {
    downloads: i64,
    likes: i64,
    views: i64,
    is_liked: bool,
    formatted: FormattedCounters,
}

/// Callers may see up to `max-age + swr` seconds of staleness; the
/// counters are cosmetic enough that this is fine.
fn stats_cache_control(cfg: &StatsConfig) -> String {
    format!(
        "public, max-age={}, stale-while-revalidate={}",
        cfg.cache_max_age_secs, cfg.cache_swr_secs
    )
}

async fn get_wallpaper_stats(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<DeviceQuery>,
) -> Result<HttpResponse, ApiError> {
    let device = resolve_device(&req, &query);
    let stats_dao = Arc::new(WallpaperStatsDaoImpl::new(state.db.clone()));
    let view = GetWallpaperStats::new(stats_dao)
        .handle(&path.into_inner(), device.as_ref())
        .await?;

    let (downloads, likes, views) = view.formatted();
    let body = WallpaperStatsResponse {
        downloads: view.downloads,
        likes: view.likes,
        views: view.views,
        is_liked: view.is_liked,
        formatted: FormattedCounters {
            downloads,
            likes,
            views,
        },
    };
    Ok(HttpResponse::Ok()
        .insert_header((
            header::CACHE_CONTROL,
            stats_cache_control(&state.app_cfg.stats()),
        ))
        .json(body))
}

fn interaction_service(state: &AppState) -> InteractionService {
    InteractionService::new(
        Arc::new(WallpaperRepositoryImpl::new(state.db.clone())),
        Arc::new(WallpaperStatsRepositoryImpl::new(state.db.clone())),
        Arc::new(LikeRepositoryImpl::new(state.db.clone())),
    )
}

fn parse_path_id(raw: &str) -> Result<WallpaperId, ApiError> {
    Ok(WallpaperId::from(parse_wallpaper_id(raw)?))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LikeResponse {
    liked: bool,
    likes: i64,
}

async fn toggle_like(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<DeviceQuery>,
) -> Result<web::Json<LikeResponse>, ApiError> {
    let id = parse_path_id(&path.into_inner())?;
    let device = resolve_device(&req, &query)
        .ok_or_else(|| ApiError::Validation("device id is required to like".to_string()))?;

    let outcome = interaction_service(&state).toggle_like(id, &device).await?;
    Ok(web::Json(LikeResponse {
        liked: outcome.liked,
        likes: outcome.likes,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DownloadResponse {
    downloads: i64,
}

async fn record_download(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<web::Json<DownloadResponse>, ApiError> {
    let id = parse_path_id(&path.into_inner())?;
    let downloads = interaction_service(&state).record_download(id).await?;
    Ok(web::Json(DownloadResponse { downloads }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewResponse {
    views: i64,
}

async fn record_view(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<web::Json<ViewResponse>, ApiError> {
    let id = parse_path_id(&path.into_inner())?;
    let views = interaction_service(&state).record_view(id).await?;
    Ok(web::Json(ViewResponse { views }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_cache_control_directive() {
        let cfg = StatsConfig {
            mode: "persisted".to_string(),
            cache_max_age_secs: 10,
            cache_swr_secs: 30,
        };
        assert_eq!(
            stats_cache_control(&cfg),
            "public, max-age=10, stale-while-revalidate=30"
        );
    }
}
