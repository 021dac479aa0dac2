//! Axum route handlers for the Lens API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::lenses::catalog::{lens_catalog, LensDescriptor};
use crate::lenses::generator::generate_lenses;
use crate::lenses::store::{ActiveView, StoreSnapshot};
use crate::models::ActiveLens;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub raw_text: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectLensRequest {
    pub lens: ActiveLens,
}

#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub active_lens: ActiveLens,
    pub revision: u64,
    #[serde(flatten)]
    pub view: ActiveView,
}

async fn current_view(state: &AppState) -> ViewResponse {
    let snapshot = state.store.snapshot().await;
    ViewResponse {
        active_lens: snapshot.active_lens,
        revision: snapshot.revision,
        view: ActiveView::derive(&snapshot.project, snapshot.active_lens),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/lenses
pub async fn handle_list_lenses() -> Json<Vec<LensDescriptor>> {
    Json(lens_catalog())
}

/// GET /api/v1/project
pub async fn handle_get_project(State(state): State<AppState>) -> Json<StoreSnapshot> {
    Json(state.store.snapshot().await)
}

/// GET /api/v1/view
///
/// The active lens with its body split into sections, or the home view.
pub async fn handle_get_view(State(state): State<AppState>) -> Json<ViewResponse> {
    Json(current_view(&state).await)
}

/// PUT /api/v1/view/lens
pub async fn handle_select_lens(
    State(state): State<AppState>,
    Json(request): Json<SelectLensRequest>,
) -> Json<ViewResponse> {
    state.store.select_lens(request.lens).await;
    Json(current_view(&state).await)
}

/// POST /api/v1/lenses/generate
///
/// Restructures raw case-study text into a new project. On success the store
/// is replaced and the recruiter lens becomes active; on failure nothing changes.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<ViewResponse>, AppError> {
    if request.raw_text.trim().is_empty() {
        return Err(AppError::Validation("raw_text cannot be empty".to_string()));
    }

    let _permit = state
        .generation_gate
        .try_acquire()
        .map_err(|_| AppError::GenerationInProgress)?;

    let project = generate_lenses(&request.raw_text, state.llm.as_ref(), state.schema_mode).await?;

    let revision = state.store.replace(project).await;
    info!(revision, "Content store replaced");

    Ok(Json(current_view(&state).await))
}
