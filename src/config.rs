use clap::Parser;

#[derive(Parser, Clone)]
pub struct Config {
    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    #[clap(env, long, default_value = "data/bali_final.json")]
    pub dataset_path: String,

    #[clap(env, long, default_value = "models/my_model.json")]
    pub model_path: String,

    #[clap(env, long, default_value_t = 10)]
    pub max_nearby_results: usize,

    #[clap(env, long, default_value = "http://localhost:5173")]
    pub origin_urls: String,
}