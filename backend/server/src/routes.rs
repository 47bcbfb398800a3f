use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use catalog::{Interaction, ReactionKind, Vlog};
use tracing::info;

use crate::{
    error::AppError,
    state::State as AppState,
    utils::{delta, get_new_vlog, parse_body},
};

pub async fn health_handler() -> impl IntoResponse {
    "VlogSphere API is running..."
}

pub async fn list_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Vlog>>, AppError> {
    Ok(Json(state.store.list().await?))
}

pub async fn create_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let new_vlog = get_new_vlog(&body)?;
    let vlog = state.store.create(new_vlog).await?;

    info!("Created vlog {}", vlog.id);

    Ok((StatusCode::CREATED, Json(vlog)))
}

pub async fn like_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Vlog>, AppError> {
    react(&state, &id, ReactionKind::Like, &body).await
}

pub async fn dislike_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Vlog>, AppError> {
    react(&state, &id, ReactionKind::Dislike, &body).await
}

async fn react(
    state: &AppState,
    id: &str,
    kind: ReactionKind,
    body: &Bytes,
) -> Result<Json<Vlog>, AppError> {
    let interaction = parse_body::<Interaction>(body)?;

    let vlog = state
        .store
        .apply_delta(id, kind, delta(interaction))
        .await?
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;

    info!(
        "{} {} on {id}, now {}",
        if interaction.active { "+1" } else { "-1" },
        kind.field(),
        vlog.counter(kind)
    );

    Ok(Json(vlog))
}
