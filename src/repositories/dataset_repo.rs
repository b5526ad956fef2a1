use std::fs;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnError, DisplayFromStr, PickFirst};
use tracing::info;

use crate::models::place::Place;

/// One entry of the dataset file: every scraped place sits nested under a
/// `place` key.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PlaceEntry {
    pub place: SourcePlace,
}

/// A place as it appears on disk. The scrape left the numeric fields in a
/// mixed state (sometimes JSON numbers, sometimes numeric strings, sometimes
/// junk), so each of them tolerates both encodings and collapses to `None`
/// on anything unparsable instead of failing the whole load.
#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SourcePlace {
    pub place_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub region: Option<String>,
    pub vicinity: Option<String>,
    pub types: Option<String>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    pub user_ratings_total: Option<i64>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub photos: Value,
    #[serde(default)]
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    pub latitude: Option<f64>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    pub longitude: Option<f64>,
}

impl From<SourcePlace> for Place {
    fn from(source: SourcePlace) -> Self {
        Place {
            id: source.place_id,
            name: source.name,
            description: source.description,
            region: source.region,
            vicinity: source.vicinity,
            types: source.types,
            user_rating_total: source.user_ratings_total,
            rating: source.rating,
            photos: source.photos,
            lat: source.latitude,
            lon: source.longitude,
        }
    }
}

/// Reads the dataset file and coerces every record into a `Place`. This is
/// the only point where numeric coercion happens; after it the dataset is
/// immutable for the rest of the process lifetime.
pub fn load_places(path: &str) -> anyhow::Result<Vec<Place>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file at {}", path))?;
    let entries: Vec<PlaceEntry> = serde_json::from_str(&content)
        .with_context(|| format!("Dataset file at {} is not a valid place record array", path))?;

    let places = entries
        .into_iter()
        .map(|entry| Place::from(entry.place))
        .collect::<Vec<Place>>();

    info!("Loaded {} place records from {}", places.len(), path);
    Ok(places)
}

/// Serializes source-form entries back to the dataset file. Offline
/// companion to `load_places` for (re)building the dataset; nothing on the
/// request path writes.
pub fn store_places(path: &str, entries: &[PlaceEntry]) -> anyhow::Result<()> {
    let content =
        serde_json::to_string_pretty(entries).context("Failed to serialize place records")?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write dataset file at {}", path))?;
    Ok(())
}
