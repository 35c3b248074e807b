//! Web API for Button Studio widget layouts.
//!
//! This module exposes the server-persisted widget layouts over JSON/HTTP so
//! the designer frontend and the admin layout manager can share them.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/widget-layouts/default` - Built-in default layout
//! - `GET /api/widget-layouts` - List stored layouts
//! - `POST /api/widget-layouts` - Store a new layout
//! - `GET /api/widget-layouts/{id}` - Load a layout
//! - `PUT /api/widget-layouts/{id}` - Replace a layout
//! - `DELETE /api/widget-layouts/{id}` - Delete a layout
//! - `GET /api/widget-layouts/{id}/render` - Render plan of a layout

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::models::{default_layout, LayoutConfiguration};
use crate::render::{render_plan, RenderPlan};
use crate::services::LayoutRepository;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Server-side layout storage
    repository: Arc<LayoutRepository>,
}

impl AppState {
    /// Creates a new application state using the configured layouts directory.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let layouts_dir = config.layouts_dir()?;
        Ok(Self::with_repository(config, LayoutRepository::new(layouts_dir)))
    }

    /// Creates a new application state around an existing repository.
    #[must_use]
    pub fn with_repository(config: Config, repository: LayoutRepository) -> Self {
        Self {
            config: Arc::new(config),
            repository: Arc::new(repository),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the layout repository.
    #[must_use]
    pub fn repository(&self) -> &LayoutRepository {
        &self.repository
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Layout list response.
#[derive(Debug, Serialize)]
pub struct LayoutListResponse {
    /// List of layout summaries.
    pub layouts: Vec<LayoutSummary>,
}

/// Summary of a stored layout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSummary {
    /// Layout id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Number of widgets in the layout.
    pub widget_count: usize,
    /// Last modified timestamp (RFC 3339 format).
    pub updated_at: String,
}

impl From<&LayoutConfiguration> for LayoutSummary {
    fn from(layout: &LayoutConfiguration) -> Self {
        Self {
            id: layout.id.clone(),
            name: layout.name.clone(),
            description: layout.description.clone(),
            widget_count: layout.widget_count(),
            updated_at: layout.updated_at.to_rfc3339(),
        }
    }
}

/// Response to a layout creation.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    /// Id of the stored layout.
    pub id: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

fn internal_error(error: &str, e: &anyhow::Error) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::with_details(error, format!("{e:#}"))),
    )
}

fn not_found(id: &str) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(format!("Widget layout not found: {id}"))),
    )
}

// ============================================================================
// Validation
// ============================================================================

/// Validates a layout id taken from the request path.
fn validate_layout_id(id: &str) -> Result<&str, ApiError> {
    if id.is_empty() {
        return Err(ApiError::new("Layout id cannot be empty"));
    }

    if id.contains("..") || id.contains('/') || id.contains('\\') {
        return Err(ApiError::new("Invalid layout id: path traversal not allowed"));
    }

    if id.starts_with('.') {
        return Err(ApiError::new("Invalid layout id: hidden names not allowed"));
    }

    if crate::storage::validate_key(id).is_err() {
        return Err(ApiError::new(
            "Invalid layout id: only letters, digits, '-', '_' and '.' are allowed",
        ));
    }

    Ok(id)
}

/// Checks structure and column widths of an incoming layout.
fn validate_layout(layout: &LayoutConfiguration) -> Result<(), ApiError> {
    layout
        .validate()
        .map_err(|e| ApiError::with_details("Invalid layout", e.to_string()))?;

    if !layout.column_widths.is_within_budget() {
        return Err(ApiError::with_details(
            "Invalid layout",
            format!(
                "Column widths add up to {}%, at most 100% allowed",
                layout.column_widths.total()
            ),
        ));
    }

    Ok(())
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/widget-layouts/default - Built-in default layout.
async fn get_default_layout() -> Json<LayoutConfiguration> {
    Json(default_layout())
}

/// GET /api/widget-layouts - List stored layouts.
async fn list_layouts(State(state): State<AppState>) -> ApiResult<Json<LayoutListResponse>> {
    let layouts = state
        .repository
        .list()
        .map_err(|e| internal_error("Failed to list widget layouts", &e))?;

    Ok(Json(LayoutListResponse {
        layouts: layouts.iter().map(LayoutSummary::from).collect(),
    }))
}

/// POST /api/widget-layouts - Store a new layout.
async fn create_layout(
    State(state): State<AppState>,
    Json(mut layout): Json<LayoutConfiguration>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    validate_layout(&layout).map_err(|e| (StatusCode::BAD_REQUEST, Json(e)))?;

    layout.touch();
    let id = state
        .repository
        .create(layout)
        .map_err(|e| internal_error("Failed to store widget layout", &e))?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /api/widget-layouts/{id} - Load a layout.
async fn get_layout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<LayoutConfiguration>> {
    let id = validate_layout_id(&id).map_err(|e| (StatusCode::BAD_REQUEST, Json(e)))?;

    let layout = state
        .repository
        .load(id)
        .map_err(|e| internal_error("Failed to load widget layout", &e))?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(layout))
}

/// PUT /api/widget-layouts/{id} - Replace a layout.
async fn update_layout(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut layout): Json<LayoutConfiguration>,
) -> ApiResult<StatusCode> {
    let id = validate_layout_id(&id).map_err(|e| (StatusCode::BAD_REQUEST, Json(e)))?;

    validate_layout(&layout).map_err(|e| (StatusCode::BAD_REQUEST, Json(e)))?;

    // The path decides which document is written.
    layout.id = id.to_string();
    layout.touch();
    let updated = state
        .repository
        .update_if_exists(&layout)
        .map_err(|e| internal_error("Failed to save widget layout", &e))?;
    if !updated {
        return Err(not_found(id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/widget-layouts/{id} - Delete a layout.
async fn delete_layout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = validate_layout_id(&id).map_err(|e| (StatusCode::BAD_REQUEST, Json(e)))?;

    let deleted = state
        .repository
        .delete(id)
        .map_err(|e| internal_error("Failed to delete widget layout", &e))?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// GET /api/widget-layouts/{id}/render - Render plan of a layout.
async fn render_layout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<RenderPlan>> {
    let id = validate_layout_id(&id).map_err(|e| (StatusCode::BAD_REQUEST, Json(e)))?;

    let layout = state
        .repository
        .load(id)
        .map_err(|e| internal_error("Failed to load widget layout", &e))?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(render_plan(&layout)))
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // The designer frontend is served from a different origin during development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/widget-layouts/default", get(get_default_layout))
        .route(
            "/api/widget-layouts",
            get(list_layouts).post(create_layout),
        )
        .route(
            "/api/widget-layouts/{id}",
            get(get_layout).put(update_layout).delete(delete_layout),
        )
        .route("/api/widget-layouts/{id}/render", get(render_layout))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the server fails to bind or stops unexpectedly.
pub async fn run_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    info!(
        "Serving widget layouts from {}",
        state.repository.root().display()
    );
    let app = create_router(state);

    info!("Starting Button Studio web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
