mod config;
mod decoder;
mod engine;
mod error;
mod labels;
mod serving_engine;
mod types;

use std::sync::Arc;

use axum::{
    Router,
    extract::{DefaultBodyLimit, Multipart, State},
    response::Json,
    routing::{get, post},
};
use axum_prometheus::PrometheusMetricLayer;
use clap::Parser;
use metrics::counter;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use config::Config;
use engine::Engine;
use error::GatewayError;
use serving_engine::ServingEngine;
use types::{Classification, PredictResponse};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,blightwatch=debug".into()),
        )
        .init();

    let config = Config::parse();
    tracing::info!("Starting inference gateway with config: {:?}", config);

    let engine = ServingEngine::new(config.serving_endpoint.clone());
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let app = router(AppState::new(Arc::new(engine)))
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(prometheus_layer)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.server_address()).await?;
    tracing::info!("Server running on http://{}", config.server_address());
    tracing::info!("Forwarding predictions to {}", config.serving_endpoint);

    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Clone)]
struct AppState {
    engine: Arc<dyn Engine>,
}

impl AppState {
    fn new(engine: Arc<dyn Engine>) -> Self {
        Self { engine }
    }
}

fn router(state: AppState) -> Router {
    // Uploads come straight from browser dashboards: CORS mirrors any
    // origin with credentials, and no body-size cap is enforced.
    Router::new()
        .route("/ping", get(ping_handler))
        .route("/predict", post(predict_handler))
        .layer(DefaultBodyLimit::disable())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn ping_handler() -> &'static str {
    "Hello, I am alive"
}

#[tracing::instrument(skip_all)]
async fn predict_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Json<PredictResponse> {
    counter!("prediction_requests_total").increment(1);

    let outcome = run_prediction(&state, multipart).await;
    if let Err(error) = &outcome {
        tracing::warn!(%error, "Prediction failed");
    }
    // Failures still answer 200; clients inspect the body for `error`.
    Json(outcome.into())
}

async fn run_prediction(
    state: &AppState,
    mut multipart: Multipart,
) -> Result<Classification, GatewayError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| GatewayError::Unexpected(err.to_string()))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|err| GatewayError::Unexpected(err.to_string()))?;
            upload = Some(bytes);
            break;
        }
    }
    let upload =
        upload.ok_or_else(|| GatewayError::Unexpected("missing `file` form field".to_string()))?;

    let image = decoder::decode(&upload)?;
    state.engine.predict(image).await
}
