use std::sync::Arc;
use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;
use crate::config::Config;
use crate::controller::AppState;
use crate::repositories::submission_repo::SubmissionRepo;

pub mod config;
pub mod controller;
pub mod helpers;
pub mod models;
pub mod repositories;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    let app_state = AppState::new(Arc::new(SubmissionRepo::new()));

    controller::serve(app_state, &config).await
}
