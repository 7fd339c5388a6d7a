use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower::limit::ConcurrencyLimit;
use tower::make::Shared;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::repositories::submission_repo::SubmissionRepo;

pub mod catalog_controller;
pub mod feedback_controller;
pub mod health_check;
pub mod reservation_controller;

#[derive(Clone)]
pub struct AppState {
    pub submission_repo: Arc<SubmissionRepo>,
}

impl AppState {
    pub fn new(submission_repo: Arc<SubmissionRepo>) -> Self {
        Self {
            submission_repo
        }
    }
}

pub async fn serve(
    app_state: AppState,
    config: &Config,
) -> anyhow::Result<()> {
    let origins: Vec<HeaderValue> = config
        .origin_urls
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(header_value) => Some(header_value),
            Err(e) => {
                warn!("Skipping invalid CORS origin {} due to: {}", origin, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    let application = router_endpoints(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::OPTIONS
                        ])
                        .allow_origin(origins)
                        .allow_headers([ACCEPT, CONTENT_TYPE])
                )
                .layer(CompressionLayer::new())
        );
    let application = limit_concurrency(application, config.max_concurrent_requests);

    let address: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid host or port for the API server")?;
    info!("API server listening on {} ({})", address, config.environment);
    axum::Server::bind(&address)
        .serve(Shared::new(application))
        .await
        .context("Error spinning up the API server")
}

/// Bounds in-flight requests across the whole server with one shared semaphore.
pub fn limit_concurrency(
    application: Router,
    max_concurrent_requests: usize,
) -> ConcurrencyLimit<Router> {
    ServiceBuilder::new()
        .concurrency_limit(max_concurrent_requests)
        .service(application)
}

pub fn router_endpoints(app_state: AppState) -> Router {
    Router::new()
        .merge(health_check::router())
        .merge(catalog_controller::router())
        .nest("/reservation", reservation_controller::router(app_state.clone()))
        .nest("/feedback", feedback_controller::router(app_state))
        .fallback(page_not_found_handler)
}
