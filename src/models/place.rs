use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One attraction from the dataset, cached in memory for the process
/// lifetime. Numeric fields have already been coerced at load time, so a
/// missing or unparsable value is `None` here, never `NaN`.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Place {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub region: Option<String>,
    pub vicinity: Option<String>,
    pub types: Option<String>,
    pub user_rating_total: Option<i64>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub photos: Value,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// A place decorated for the recommendations response: the original fields
/// plus the computed distance to the query point (km, two decimals) and a
/// Google Maps link. The fixed popular destinations share this shape and
/// simply carry no distance.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct RecommendationItem {
    pub place_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub region: Option<String>,
    pub vicinity: Option<String>,
    pub types: Option<String>,
    pub user_rating_total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub photos: Value,
    #[serde(rename = "locationUrl")]
    pub location_url: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// A place reshaped for the search response.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SearchResultItem {
    pub title: Option<String>,
    pub place_id: String,
    #[serde(default)]
    pub photos: Value,
    pub description: Option<String>,
    pub region: Option<String>,
    pub vicinity: Option<String>,
    pub link: String,
    pub types: Option<String>,
    pub rating: Option<f64>,
    pub user_rating_total: Option<i64>,
    #[serde(rename = "formattedAddress")]
    pub formatted_address: Option<String>,
    pub coordinates: Coordinates,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Coordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
