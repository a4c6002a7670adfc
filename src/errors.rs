// src/errors.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt '{field}' cell for pledge '{pledge}': {source}")]
    CorruptCell {
        pledge: String,
        field: &'static str,
        source: serde_json::Error,
    },

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Multipart error: {0}")]
    Multipart(String),

    #[error("Pledge not found")]
    PledgeNotFound,

    #[error("Invalid pledge data")]
    InvalidPledgeData,

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Csv(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Store error".to_string()),
            AppError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO error".to_string()),
            AppError::CorruptCell { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Corrupt pledge data".to_string(),
            ),
            AppError::Json(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Encoding error".to_string(),
            ),
            AppError::Multipart(_) => (
                StatusCode::BAD_REQUEST,
                "Invalid multipart data".to_string(),
            ),
            AppError::PledgeNotFound => (StatusCode::NOT_FOUND, "Pledge not found".to_string()),
            AppError::InvalidPledgeData => {
                (StatusCode::BAD_REQUEST, "Invalid pledge data".to_string())
            }
            AppError::ValidationError(_) => {
                (StatusCode::BAD_REQUEST, "Validation failed".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "message": self.to_string(),
            "success": false,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));

        (status, body).into_response()
    }
}

// Manual From implementations
impl From<axum_extra::extract::multipart::MultipartError> for AppError {
    fn from(err: axum_extra::extract::multipart::MultipartError) -> Self {
        AppError::Multipart(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::ValidationError(format!("Amount parsing error: {}", err))
    }
}

impl AppError {
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
