pub mod dataset_repo;
pub mod model_repo;
pub mod places_repo;
