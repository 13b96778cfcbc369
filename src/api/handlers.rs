use crate::api::response::{ApiError, ApiResponse, HealthBody, NotFoundBody};
use crate::core::service::ProfessorService;
use crate::domain::model::{EnrichedProfessorView, ProfessorRecord, StatisticsSummary};
use crate::domain::ports::ProfessorStore;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Json,
};
use std::sync::Arc;

pub type SharedService<S> = Arc<ProfessorService<S>>;

/// GET /health
pub async fn health_check() -> Json<HealthBody> {
    Json(HealthBody {
        success: true,
        message: "Server is running".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    })
}

/// GET /api/professors
pub async fn get_all_professors<S: ProfessorStore + 'static>(
    State(service): State<SharedService<S>>,
) -> Result<Json<ApiResponse<Vec<ProfessorRecord>>>, ApiError> {
    let professors = service
        .get_all_professors()
        .await
        .map_err(|e| ApiError::new("Failed to fetch professors", e))?;
    Ok(Json(ApiResponse::list(professors)))
}

/// GET /api/professors/statistics
pub async fn get_statistics<S: ProfessorStore + 'static>(
    State(service): State<SharedService<S>>,
) -> Result<Json<ApiResponse<StatisticsSummary>>, ApiError> {
    let statistics = service
        .get_statistics()
        .await
        .map_err(|e| ApiError::new("Failed to compute statistics", e))?;
    Ok(Json(ApiResponse::success(statistics)))
}

/// GET /api/professors/experience
pub async fn get_professors_with_experience<S: ProfessorStore + 'static>(
    State(service): State<SharedService<S>>,
) -> Result<Json<ApiResponse<Vec<EnrichedProfessorView>>>, ApiError> {
    let professors = service
        .get_professors_with_experience()
        .await
        .map_err(|e| ApiError::new("Failed to fetch professors with experience", e))?;
    Ok(Json(ApiResponse::list(professors)))
}

pub async fn not_found(uri: Uri) -> (StatusCode, Json<NotFoundBody>) {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    tracing::warn!("⚠️ Route not found: {}", path);

    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            success: false,
            error: "Route not found".to_string(),
            path,
        }),
    )
}
