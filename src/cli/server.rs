//! HTTP server mode for the search proxy

use axum::{
    body::Bytes,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ProxyConfig;
use crate::engine::{EngineConfig, PaginationEngine, SearchResponse};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, UpstreamClient};
use crate::validate::{RawSearchRequest, RequestValidator};

/// App state shared across handlers
///
/// Everything here is immutable; per-request state lives in the engine call.
#[derive(Clone)]
pub struct AppState {
    validator: RequestValidator,
    engine: PaginationEngine,
    client: Arc<dyn UpstreamClient>,
}

impl AppState {
    /// Build state from configuration and an upstream client
    pub fn new(config: &ProxyConfig, client: Arc<dyn UpstreamClient>) -> Self {
        Self {
            validator: RequestValidator::new(config.server.credential_source),
            engine: PaginationEngine::new(EngineConfig::from(&config.upstream)),
            client,
        }
    }
}

/// Error body returned to callers
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            warn!("Request failed: {self}");
        }

        let body = ErrorBody {
            error: self.summary(),
            message: self.detail(),
        };
        (status, Json(body)).into_response()
    }
}

/// Build the router
pub fn router(state: AppState) -> Router {
    // Allow all origins, the proxy is called from browser clients.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ping", get(ping))
        .route("/health", get(health))
        .route("/soma", post(soma))
        .route("/search", post(search))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: ProxyConfig) -> Result<()> {
    let client = HttpClient::with_config(
        HttpClientConfig::builder()
            .base_url(&config.upstream.base_url)
            .timeout(config.upstream.timeout())
            .user_agent(&config.upstream.user_agent)
            .build(),
    )?;

    let app = router(AppState::new(&config, Arc::new(client)));

    let host = config.server.host.as_str();
    let port = config.server.port;

    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .map_err(|e| Error::config(format!("Failed to bind to {host}:{port}: {e}")))?;

    info!(
        "Starting HTTP server on http://{}:{} (credential via {:?}, max {} pages)",
        host, port, config.server.credential_source, config.upstream.max_pages
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

/// Liveness check
async fn ping() -> impl IntoResponse {
    Json(json!({ "pong": true }))
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "version": crate::VERSION }))
}

/// Increment endpoint: `{"valor": n}` -> `{"resultado": n + 1}`
async fn soma(body: Bytes) -> Result<Json<Value>> {
    let payload: Value = if body.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&body).map_err(|_| Error::validation("invalid request body"))?
    };

    let resultado = match payload.get("valor") {
        None | Some(Value::Null) => json!(1),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i.checked_add(1)
                    .map(Value::from)
                    .ok_or_else(|| Error::validation("valor is out of range"))?
            } else if let Some(f) = n.as_f64() {
                json!(f + 1.0)
            } else {
                return Err(Error::validation("valor is out of range"));
            }
        }
        Some(_) => return Err(Error::validation("valor must be a number")),
    };

    Ok(Json(json!({ "resultado": resultado })))
}

/// Aggregated search endpoint
async fn search(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SearchResponse>> {
    let raw: RawSearchRequest = if body.is_empty() {
        RawSearchRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|_| Error::validation("invalid request body"))?
    };

    let authorization = headers
        .get(AUTHORIZATION)
        .map(|v| {
            v.to_str()
                .map_err(|_| Error::validation("malformed credential"))
        })
        .transpose()?;

    let request = state.validator.validate(&raw, authorization)?;
    info!(
        "Search for '{}' (coordinates: {})",
        request.query(),
        request.coordinates().unwrap_or("-")
    );

    let response = state.engine.search(state.client.as_ref(), &request).await?;
    Ok(Json(response))
}
