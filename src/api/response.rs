use crate::utils::error::StatsError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

/// Success envelope: `{success: true, count?, data}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            count: None,
            data,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn list(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(data.len()),
            data,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NotFoundBody {
    pub success: bool,
    pub error: String,
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthBody {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
}

/// A failed operation, reported as HTTP 500 with the operation as `error`.
#[derive(Debug)]
pub struct ApiError {
    context: &'static str,
    source: StatsError,
}

impl ApiError {
    pub fn new(context: &'static str, source: StatsError) -> Self {
        Self { context, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(
            "❌ {}: {} (Category: {:?})",
            self.context,
            self.source,
            self.source.category()
        );
        let body = ErrorBody {
            success: false,
            error: self.context.to_string(),
            message: self.source.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
