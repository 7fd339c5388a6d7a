use clap::Parser;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,
    #[clap(env, long, default_value = "0.0.0.0")]
    pub host: String,
    #[clap(env, long, default_value_t = 5000)]
    pub port: u16,
    /// Comma separated list of origins allowed through CORS
    #[clap(env, long, default_value = "http://localhost:5000")]
    pub origin_urls: String,
    #[clap(env, long, default_value_t = 256)]
    pub max_concurrent_requests: usize,
}
