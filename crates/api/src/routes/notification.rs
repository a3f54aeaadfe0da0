use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use notifeed_models::Notification;
use notifeed_services::{
    BadgeView, FeedQuery, ListView, Mutation, MutationOutcome, OverlayTab,
    surface::{overlay_view, page_view},
};
use serde::Deserialize;

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct OverlayParams {
    #[serde(default)]
    pub tab: OverlayTab,
    pub limit: Option<usize>,
}

pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<FeedQuery>, QueryRejection>,
) -> Result<Json<ListView>, ApiError> {
    let Query(query) = query?;
    let feed = state.notifications.snapshot();
    Ok(Json(page_view(&feed, &query)))
}

pub async fn overlay(
    State(state): State<AppState>,
    params: Result<Query<OverlayParams>, QueryRejection>,
) -> Result<Json<ListView>, ApiError> {
    let Query(params) = params?;
    let limit = params
        .limit
        .unwrap_or(state.settings.surface.overlay_limit);
    let feed = state.notifications.snapshot();
    Ok(Json(overlay_view(&feed, params.tab, limit)))
}

pub async fn badge(State(state): State<AppState>) -> Json<BadgeView> {
    Json(BadgeView::from_feed(&state.notifications.snapshot()))
}

pub async fn mark_read(
    State(state): State<AppState>,
    Path(notification_id): Path<String>,
) -> Result<Json<MutationOutcome>, ApiError> {
    let id: u64 = notification_id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid notification_id".to_string()))?;

    // Stale ids are not an error; the outcome just reports nothing changed.
    let outcome = state.notifications.apply(Mutation::MarkAsRead(id))?;
    Ok(Json(outcome))
}

pub async fn mark_all_read(
    State(state): State<AppState>,
) -> Result<Json<MutationOutcome>, ApiError> {
    Ok(Json(state.notifications.apply(Mutation::MarkAllAsRead)?))
}

pub async fn clear_all(State(state): State<AppState>) -> Result<Json<MutationOutcome>, ApiError> {
    Ok(Json(state.notifications.apply(Mutation::ClearAll)?))
}

/// Incremental delivery: appends entries after the current ones.
pub async fn deliver(
    State(state): State<AppState>,
    Json(entries): Json<Vec<Notification>>,
) -> Result<(StatusCode, Json<MutationOutcome>), ApiError> {
    let outcome = state.notifications.apply(Mutation::Append(entries))?;
    Ok((StatusCode::CREATED, Json(outcome)))
}
