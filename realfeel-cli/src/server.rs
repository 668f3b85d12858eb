//! HTTP API: `/api/realfeel` and `/api/cities`.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use realfeel_core::{
    CityCatalog, Config, RealFeelError, RealFeelService, WeatherMeasurement, provider_from_config,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, Clone)]
pub struct AppState {
    pub service: Arc<RealFeelService>,
    pub catalog: Arc<CityCatalog>,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let provider = provider_from_config(config)?;

        Ok(Self {
            service: Arc::new(RealFeelService::new(Arc::from(provider))),
            catalog: Arc::new(config.catalog()),
        })
    }
}

/// Query parameters are kept as raw strings; parsing is the validator's job.
#[derive(Debug, Deserialize)]
pub struct RealFeelQuery {
    lat: Option<String>,
    lon: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealFeelResponse {
    success: bool,
    real_feel: f64,
    weather_data: WeatherMeasurement,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    code: &'static str,
    message: &'static str,
}

/// Maps pipeline failures onto HTTP responses.
#[derive(Debug)]
pub struct ApiError(RealFeelError);

impl From<RealFeelError> for ApiError {
    fn from(err: RealFeelError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            RealFeelError::InvalidCoordinate { .. } => StatusCode::BAD_REQUEST,
            RealFeelError::ProviderUnavailable { .. } | RealFeelError::MalformedWeatherData { .. } => {
                StatusCode::BAD_GATEWAY
            }
        };

        let body = ErrorBody { success: false, code: self.0.code(), message: self.0.user_message() };
        (status, Json(body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/realfeel", get(real_feel))
        .route("/cities", get(cities));

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(cors)
}

async fn real_feel(
    State(state): State<AppState>,
    Query(query): Query<RealFeelQuery>,
) -> Result<Json<RealFeelResponse>, ApiError> {
    let result = state
        .service
        .get_real_feel(
            query.lat.as_deref().unwrap_or_default(),
            query.lon.as_deref().unwrap_or_default(),
        )
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "real feel request failed"))?;

    Ok(Json(RealFeelResponse {
        success: true,
        real_feel: result.real_feel,
        weather_data: result.measurements,
    }))
}

async fn cities(State(state): State<AppState>) -> Response {
    if state.catalog.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    Json(state.catalog.all()).into_response()
}

pub async fn run(config: &Config) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;
    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
