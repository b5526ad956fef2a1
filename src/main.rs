use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;

use wisata_api::config::Config;
use wisata_api::controller::{self, AppState};
use wisata_api::repositories::dataset_repo;
use wisata_api::repositories::model_repo;
use wisata_api::repositories::places_repo::PlacesRepo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();

    // The service is unusable without its dataset and model, so a failed
    // load aborts startup instead of limping along.
    let places = dataset_repo::load_places(&config.dataset_path)?;
    let model = model_repo::load_model(&config.model_path)?;

    let app_state = AppState {
        places_repo: Arc::new(PlacesRepo::new(places, config.max_nearby_results)),
        model: Arc::new(model),
    };

    controller::serve(app_state, &config).await
}
