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
use crate::repositories::places_repo::PlacesRepo;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/search", get(search_places))
        .route_layer(Extension(app_state.places_repo))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SearchPlacesParams {
    pub name: Option<String>,
    #[serde(rename = "ratingRange")]
    pub rating_range: Option<String>,
    pub r#type: Option<String>,
    pub region: Option<String>,
}

pub async fn search_places(
    Extension(places_repo): Extension<Arc<PlacesRepo>>,
    Query(query): Query<SearchPlacesParams>,
) -> impl IntoResponse {
    debug!(
        "Search parameters: name={:?} ratingRange={:?} type={:?} region={:?}",
        query.name, query.rating_range, query.r#type, query.region
    );

    let results_res = places_repo.search_places(
        non_empty(query.name.as_deref()),
        non_empty(query.rating_range.as_deref()),
        non_empty(query.r#type.as_deref()),
        non_empty(query.region.as_deref()),
    );

    return match results_res {
        Ok(results) => {
            (
                StatusCode::OK,
                Json(json!({
                    "error": false,
                    "message": "success",
                    "results": results,
                })),
            ).into_response()
        }
        Err(e) => {
            warn!("Something went wrong searching places due to: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": true, "message": e.to_string() })),
            ).into_response()
        }
    };
}

/// A present-but-empty parameter does not activate its filter: `?name=` is
/// the same as no name parameter at all. Whitespace still counts as a value.
fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::non_empty;

    #[test]
    fn keeps_a_real_value() {
        assert_eq!(non_empty(Some("kuta")), Some("kuta"));
        assert_eq!(non_empty(Some(" ")), Some(" "));
    }

    #[test]
    fn empty_or_absent_deactivates_the_filter() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("")), None);
    }
}
