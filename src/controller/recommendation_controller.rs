use std::sync::Arc;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};
use crate::controller::AppState;
use crate::models::popular::popular_destinations;
use crate::repositories::places_repo::PlacesRepo;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/recommendations", get(get_recommendations))
        .route_layer(Extension(app_state.places_repo))
}

/// Coordinates arrive as raw strings so that junk input degrades instead of
/// being rejected: an absent or unparsable value becomes NaN, which matches
/// no radius downstream.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct RecommendationParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

pub async fn get_recommendations(
    Extension(places_repo): Extension<Arc<PlacesRepo>>,
    Query(query): Query<RecommendationParams>,
) -> impl IntoResponse {
    let lat = parse_coordinate(query.lat.as_deref());
    let lon = parse_coordinate(query.lon.as_deref());
    debug!("Query parameters: [{}, {}]", lat, lon);

    let nearby_res = places_repo.nearby_recommendations(lat, lon);

    return match nearby_res {
        Ok(nearby) => {
            (
                StatusCode::OK,
                Json(json!({
                    "error": false,
                    "message": "success",
                    "nearby": nearby,
                    "popularDestinations": popular_destinations(),
                })),
            ).into_response()
        }
        Err(e) => {
            warn!("Something went wrong building recommendations due to: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": true, "message": e.to_string() })),
            ).into_response()
        }
    };
}

fn parse_coordinate(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::parse_coordinate;

    #[test]
    fn parses_a_plain_float() {
        assert_eq!(parse_coordinate(Some("-8.7183")), -8.7183);
        assert_eq!(parse_coordinate(Some(" 115.1691 ")), 115.1691);
    }

    #[test]
    fn absent_or_junk_input_degrades_to_nan() {
        assert!(parse_coordinate(None).is_nan());
        assert!(parse_coordinate(Some("")).is_nan());
        assert!(parse_coordinate(Some("south of the lake")).is_nan());
    }
}
