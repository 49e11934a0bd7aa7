use crate::consts;
use crate::error::ApiError;
use crate::AppState;
use actix_web::{web, HttpResponse};
use application::command::wallpaper::WallpaperService;
use application::query::get_integrity_report::{GetIntegrityReport, IntegrityReport};
use application::query::shared::parse_wallpaper_id;
use domain::value::WallpaperId;
use domain::wallpaper::{NewWallpaper, WallpaperPatch};
use infra::id_generator::UuidIdGenerator;
use infra::repository::postgres::command::interaction::{
    LikeRepositoryImpl, WallpaperStatsRepositoryImpl,
};
use infra::repository::postgres::command::wallpaper::WallpaperRepositoryImpl;
use infra::repository::postgres::query::stats::WallpaperStatsDaoImpl;
use infra::repository::postgres::query::wallpaper::WallpaperDaoImpl;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

pub fn configure_service(svc: &mut web::ServiceConfig) {
    svc.service(
        web::scope(consts::URL_PATH_ADMIN_API)
            .route("/wallpapers", web::post().to(publish))
            .route("/wallpapers/{id}", web::put().to(update))
            .route("/wallpapers/{id}", web::delete().to(unpublish))
            .route("/integrity", web::get().to(integrity)),
    );
}

fn wallpaper_service(state: &AppState) -> WallpaperService {
    WallpaperService::new(
        Arc::new(WallpaperRepositoryImpl::new(state.db.clone())),
        Arc::new(WallpaperStatsRepositoryImpl::new(state.db.clone())),
        Arc::new(LikeRepositoryImpl::new(state.db.clone())),
        Arc::new(UuidIdGenerator::new()),
    )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image_url: String,
    pub thumbnail_url: Option<String>,
    pub medium_url: Option<String>,
    pub large_url: Option<String>,
    pub original_url: Option<String>,
}

#[derive(Serialize)]
struct PublishResponse {
    id: Uuid,
}

async fn publish(
    state: web::Data<AppState>,
    body: web::Json<PublishRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let id = wallpaper_service(&state)
        .publish(NewWallpaper {
            title: body.title,
            description: body.description,
            category: body.category,
            tags: body.tags,
            image_url: body.image_url,
            thumbnail_url: body.thumbnail_url,
            medium_url: body.medium_url,
            large_url: body.large_url,
            original_url: body.original_url,
        })
        .await?;
    Ok(HttpResponse::Created().json(PublishResponse { id: id.as_uuid() }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub medium_url: Option<String>,
    pub large_url: Option<String>,
    pub original_url: Option<String>,
}

fn parse_path_id(raw: &str) -> Result<WallpaperId, ApiError> {
    Ok(WallpaperId::from(parse_wallpaper_id(raw)?))
}

async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_path_id(&path.into_inner())?;
    let body = body.into_inner();
    wallpaper_service(&state)
        .update(
            id,
            WallpaperPatch {
                title: body.title,
                description: body.description,
                category: body.category,
                tags: body.tags,
                image_url: body.image_url,
                thumbnail_url: body.thumbnail_url,
                medium_url: body.medium_url,
                large_url: body.large_url,
                original_url: body.original_url,
            },
        )
        .await?;
    Ok(HttpResponse::Ok().finish())
}

async fn unpublish(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_path_id(&path.into_inner())?;
    wallpaper_service(&state).unpublish(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn integrity(
    state: web::Data<AppState>,
) -> Result<web::Json<IntegrityReport>, ApiError> {
    let wallpaper_dao = Arc::new(WallpaperDaoImpl::new(state.db.clone()));
    let stats_dao = Arc::new(WallpaperStatsDaoImpl::new(state.db.clone()));
    let report = GetIntegrityReport::new(wallpaper_dao, stats_dao)
        .handle()
        .await?;
    Ok(web::Json(report))
}
