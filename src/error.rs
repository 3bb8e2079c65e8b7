use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::{
    ERR_MISSING_FIELDS, ERR_RECIPE_NOT_FOUND, ERR_RECIPE_NOT_FOUND_OR_UNCHANGED, ERR_SERVER,
};

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Codec error: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Recipe not found")]
    RecipeNotFound,

    #[error("Recipe not found or unchanged")]
    RecipeNotFoundOrUnchanged,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Codec(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MissingFields | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::RecipeNotFound | AppError::RecipeNotFoundOrUnchanged => {
                StatusCode::NOT_FOUND
            }
        }
    }
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                ERR_SERVER
            }
            AppError::Codec(ref e) => {
                tracing::error!("Codec error: {:?}", e);
                ERR_SERVER
            }
            AppError::MissingFields => ERR_MISSING_FIELDS,
            AppError::InvalidInput(ref msg) => msg.as_str(),
            AppError::RecipeNotFound => ERR_RECIPE_NOT_FOUND,
            AppError::RecipeNotFoundOrUnchanged => ERR_RECIPE_NOT_FOUND_OR_UNCHANGED,
        };

        let body = Json(json!({
            "message": message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::InvalidInput("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::RecipeNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::RecipeNotFoundOrUnchanged.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_errors_hide_detail() {
        let response = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
