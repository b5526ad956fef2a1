use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

pub fn router() -> Router {
    Router::new()
        .route("/", get(get_service_banner))
        .route("/health", get(get_health_check))
}

/// Plain-text liveness banner.
async fn get_service_banner() -> &'static str {
    "API Wisata"
}

/// Misc endpoint for individual use case
async fn get_health_check() -> Result<StatusCode, StatusCode>
{
    Ok(StatusCode::OK)
}
