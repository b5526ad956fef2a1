use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tracing::info;
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::repositories::model_repo::TourismModel;
use crate::repositories::places_repo::PlacesRepo;

pub mod health_check;
pub mod recommendation_controller;
pub mod search_controller;

/// Everything loaded once at startup and shared read-only across requests:
/// the cached dataset behind the places repo, and the model artifact that no
/// handler exercises yet.
#[derive(Clone)]
pub struct AppState {
    pub places_repo: Arc<PlacesRepo>,
    pub model: Arc<TourismModel>,
}

pub async fn serve(
    app_state: AppState,
    config: &Config,
) -> anyhow::Result<()> {
    let origins: Vec<HeaderValue> = config
        .origin_urls
        .split(',')
        .map(|s| s.parse().unwrap())
        .collect::<Vec<HeaderValue>>();

    let application = router_endpoints(app_state.clone())
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::OPTIONS
                        ])
                        .allow_origin(origins)
                        .allow_headers([CONTENT_TYPE])
                )
                .layer(CompressionLayer::new())
                // Keeps the loaded model resident for the process lifetime.
                .layer(Extension(app_state.model))
        );

    let port = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("API server listening on port: {}", port);
    axum::Server::bind(&port)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the API server")
}

pub fn router_endpoints(app_state: AppState) -> Router {
    Router::new()
        .merge(health_check::router())
        .nest(
            "/api",
            recommendation_controller::router(app_state.clone())
                .merge(search_controller::router(app_state)),
        )
        .fallback(page_not_found_handler)
}
