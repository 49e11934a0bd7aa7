pub mod wallpaper;
pub mod wallpaper_stats;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Projection error: {0}")]
    ProjectionError(String),
    #[error("Database error: {0}")]
    DbErr(String),
}
