use crate::helpers::geo::calculate_distance;
use crate::models::place::{Coordinates, Place, RecommendationItem, SearchResultItem};

/// Radius around the query point, in kilometers, that a place must fall
/// within to count as a nearby recommendation.
pub const NEARBY_RADIUS_KM: f64 = 5.0;

/// In-memory engine over the dataset loaded at startup. The dataset is
/// read-only after construction, so the repo can be shared across requests
/// without any locking.
pub struct PlacesRepo {
    places: Vec<Place>,
    max_nearby_results: usize,
}

impl PlacesRepo {
    pub fn new(places: Vec<Place>, max_nearby_results: usize) -> Self {
        Self {
            places,
            max_nearby_results,
        }
    }

    /// Ranks the dataset against a query coordinate: every place is
    /// decorated with its distance, kept when it falls inside
    /// `NEARBY_RADIUS_KM`, ordered best rating first (closest first among
    /// equal ratings) and truncated to the configured cap.
    ///
    /// A place sitting exactly at the query point has no distance after
    /// decoration and therefore never shows up, same as a place without
    /// coordinates. A NaN query coordinate (unparsable input) matches no
    /// radius and yields an empty list rather than an error.
    pub fn nearby_recommendations(
        &self,
        lat: f64,
        lon: f64,
    ) -> anyhow::Result<Vec<RecommendationItem>> {
        let mut nearby = self
            .places
            .iter()
            .map(|place| map_place_into_recommendation(place, lat, lon))
            .filter(|item| {
                item.distance
                    .map_or(false, |distance| distance <= NEARBY_RADIUS_KM)
            })
            .collect::<Vec<RecommendationItem>>();

        nearby.sort_by(|a, b| {
            b.rating
                .unwrap_or(0.0)
                .total_cmp(&a.rating.unwrap_or(0.0))
                .then_with(|| {
                    a.distance
                        .unwrap_or(f64::MAX)
                        .total_cmp(&b.distance.unwrap_or(f64::MAX))
                })
        });
        nearby.truncate(self.max_nearby_results);

        Ok(nearby)
    }

    /// Conjunctive filter over the dataset. Each predicate only constrains
    /// when its own parameter is present; with no parameters at all every
    /// record matches. Matches are reshaped for the search response, in
    /// dataset order, uncapped.
    pub fn search_places(
        &self,
        name: Option<&str>,
        rating_range: Option<&str>,
        place_type: Option<&str>,
        region: Option<&str>,
    ) -> anyhow::Result<Vec<SearchResultItem>> {
        let rating_bounds = rating_range.map(parse_rating_range);

        let results = self
            .places
            .iter()
            .filter(|place| {
                let matches_name = match name {
                    Some(filter) => contains_ignore_case(place.name.as_deref(), filter),
                    None => true,
                };
                let matches_region = match region {
                    Some(filter) => contains_ignore_case(place.region.as_deref(), filter),
                    None => true,
                };
                let matches_rating = match rating_bounds {
                    Some(bounds) => matches_rating_range(place.rating, bounds),
                    None => true,
                };
                let matches_type = match place_type {
                    Some(filter) => contains_ignore_case(place.types.as_deref(), filter),
                    None => true,
                };

                matches_name && matches_region && matches_rating && matches_type
            })
            .map(reshape_place_into_search_result)
            .collect::<Vec<SearchResultItem>>();

        Ok(results)
    }
}

fn map_place_into_recommendation(
    place: &Place,
    query_lat: f64,
    query_lon: f64,
) -> RecommendationItem {
    // An exact-zero raw distance is dropped like a missing one, so the
    // place located at the query point itself is excluded from nearby.
    let distance = calculate_distance(Some(query_lat), Some(query_lon), place.lat, place.lon)
        .filter(|raw| *raw != 0.0)
        .map(round_to_two_decimals);

    RecommendationItem {
        place_id: place.id.clone(),
        name: place.name.clone(),
        description: place.description.clone(),
        region: place.region.clone(),
        vicinity: place.vicinity.clone(),
        types: place.types.clone(),
        user_rating_total: place.user_rating_total,
        distance,
        rating: place.rating,
        photos: place.photos.clone(),
        location_url: maps_link(place.lat, place.lon),
        lat: place.lat,
        lon: place.lon,
    }
}

fn reshape_place_into_search_result(place: &Place) -> SearchResultItem {
    SearchResultItem {
        title: place.name.clone(),
        place_id: place.id.clone(),
        photos: place.photos.clone(),
        description: place.description.clone(),
        region: place.region.clone(),
        vicinity: place.vicinity.clone(),
        link: maps_link(place.lat, place.lon),
        types: place.types.clone(),
        rating: place.rating,
        user_rating_total: place.user_rating_total,
        formatted_address: place.vicinity.clone(),
        coordinates: Coordinates {
            latitude: place.lat,
            longitude: place.lon,
        },
    }
}

/// Parses a `min-max` rating filter. Both bounds have to parse; a malformed
/// range matches no record instead of raising.
fn parse_rating_range(raw: &str) -> Option<(f64, f64)> {
    let (min, max) = raw.split_once('-')?;
    let min = min.trim().parse::<f64>().ok()?;
    let max = max.trim().parse::<f64>().ok()?;
    Some((min, max))
}

fn matches_rating_range(rating: Option<f64>, bounds: Option<(f64, f64)>) -> bool {
    match (rating, bounds) {
        (Some(rating), Some((min, max))) => rating >= min && rating < max,
        _ => false,
    }
}

fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    match haystack {
        Some(value) => value.to_lowercase().contains(&needle.to_lowercase()),
        None => false,
    }
}

fn maps_link(lat: Option<f64>, lon: Option<f64>) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={},{}",
        format_coordinate(lat),
        format_coordinate(lon)
    )
}

fn format_coordinate(value: Option<f64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "null".to_string(),
    }
}

fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
