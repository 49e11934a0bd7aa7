use domain::interaction::InteractionError;
use domain::wallpaper::WallpaperError;
use model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Repository error: {0}: {1}")]
    RepositoryError(String, String),
    #[error("Wallpaper error: {0}")]
    WallpaperError(#[from] WallpaperError),
    #[error("Interaction error: {0}")]
    InteractionError(#[from] InteractionError),
    #[error("Aggregate not found: {0}: {1}")]
    AggregateNotFound(String, String),
    #[error("Model error: {0}")]
    ModelError(#[from] ModelError),
    #[error("Unknown error: {0}")]
    UnknownError(String),
}
