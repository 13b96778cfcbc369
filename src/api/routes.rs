use crate::api::handlers::{
    get_all_professors, get_professors_with_experience, get_statistics, health_check, not_found,
    SharedService,
};
use crate::domain::ports::ProfessorStore;
use crate::utils::error::{Result, StatsError};
use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use std::time::Instant;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub const API_BASE_PATH: &str = "/api/professors";

pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer> {
    let origin = if allowed_origin == "*" {
        AllowOrigin::any()
    } else {
        // 瀏覽器送出的 Origin 不含結尾斜線
        let value = HeaderValue::from_str(allowed_origin.trim_end_matches('/')).map_err(|e| {
            StatsError::InvalidConfigValueError {
                field: "cors.allowed_origin".to_string(),
                value: allowed_origin.to_string(),
                reason: e.to_string(),
            }
        })?;
        AllowOrigin::exact(value)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        "📨 {} {} -> {} ({:?})",
        method,
        path,
        response.status().as_u16(),
        started.elapsed()
    );
    response
}

pub fn build_router<S: ProfessorStore + 'static>(
    service: SharedService<S>,
    cors: CorsLayer,
) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(API_BASE_PATH, get(get_all_professors::<S>))
        .route(
            &format!("{}/statistics", API_BASE_PATH),
            get(get_statistics::<S>),
        )
        .route(
            &format!("{}/experience", API_BASE_PATH),
            get(get_professors_with_experience::<S>),
        )
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(cors)
        .layer(middleware::from_fn(log_requests))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_accepts_wildcard_and_origin() {
        assert!(cors_layer("*").is_ok());
        assert!(cors_layer("https://dashboard.example.com/").is_ok());
    }

    #[test]
    fn test_cors_layer_rejects_invalid_header() {
        assert!(matches!(
            cors_layer("https://bad\nhost"),
            Err(StatsError::InvalidConfigValueError { .. })
        ));
    }
}
