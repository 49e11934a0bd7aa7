use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use application::error::AppError;
use application::query::QueryError;
use domain::wallpaper::WallpaperError;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static DEV_MODE: AtomicBool = AtomicBool::new(false);

/// 开发模式下 500 响应携带错误详情，线上一律隐藏
pub fn set_dev_mode(enabled: bool) {
    DEV_MODE.store(enabled, Ordering::SeqCst);
}

#[derive(Debug)]
pub enum ApiError {
    /// Malformed request input, never retried.
    Validation(String),
    /// Well-formed id with no matching displayable record.
    NotFound(String),
    /// Anything that went wrong in the data store.
    Store(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "validation error: {}", msg),
            ApiError::NotFound(msg) => write!(f, "not found: {}", msg),
            ApiError::Store(msg) => write!(f, "store error: {}", msg),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::Store(detail) => {
                log::error!("store failure: {}", detail);
                if DEV_MODE.load(Ordering::SeqCst) {
                    detail.clone()
                } else {
                    "internal error".to_string()
                }
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { error: message })
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::InvalidInput(msg) | QueryError::InvalidParameter(msg) => {
                ApiError::Validation(msg)
            }
            QueryError::NotFound(msg) => ApiError::NotFound(msg),
            QueryError::ExecutionError(msg) | QueryError::DbError(msg) => ApiError::Store(msg),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::InvalidInput(msg) => ApiError::Validation(msg),
            AppError::AggregateNotFound(kind, id) => {
                ApiError::NotFound(format!("{} not found: {}", kind, id))
            }
            AppError::WallpaperError(WallpaperError::ValidationError(msg)) => {
                ApiError::Validation(msg)
            }
            AppError::WallpaperError(WallpaperError::NotFound(msg)) => ApiError::NotFound(msg),
            other => ApiError::Store(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("bad id".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("gone".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Store("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_query_error_mapping() {
        let err: ApiError = QueryError::InvalidInput("bad".to_string()).into();
        assert!(matches!(err, ApiError::Validation(_)));
        let err: ApiError = QueryError::NotFound("gone".to_string()).into();
        assert!(matches!(err, ApiError::NotFound(_)));
        let err: ApiError = QueryError::DbError("down".to_string()).into();
        assert!(matches!(err, ApiError::Store(_)));
    }

    #[test]
    fn test_app_error_mapping() {
        let err: ApiError =
            AppError::AggregateNotFound("wallpaper".to_string(), "x".to_string()).into();
        assert!(matches!(err, ApiError::NotFound(_)));
        let err: ApiError =
            AppError::WallpaperError(WallpaperError::ValidationError("empty".to_string())).into();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
