//! Bug CRUD handlers: list, read, create, update, delete.

use crate::config::UpdatePolicy;
use crate::error::AppError;
use crate::extractors::{BugId, JsonBody, JsonObject};
use crate::model::Status;
use crate::response::{created, message, ok};
use crate::service::{parse_new_bug, parse_patch, BugValidator};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::collections::HashMap;

/// `GET /api/bugs` with optional exact-match `status` / `priority` filters. Other keys are
/// ignored; a repeated key keeps its last value.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let status = params.get("status").map(String::as_str).filter(|s| !s.is_empty());
    let priority = params.get("priority").map(String::as_str).filter(|p| !p.is_empty());
    let store = state.read_store()?;
    let bugs = match status.map(Status::parse) {
        // A status outside the enumeration cannot match any record.
        Some(None) => Vec::new(),
        Some(Some(s)) => store.list_filtered(Some(s), priority),
        None => store.list_filtered(None, priority),
    };
    Ok(ok(bugs))
}

pub async fn read(State(state): State<AppState>, BugId(id): BugId) -> Result<impl IntoResponse, AppError> {
    let bug = state.read_store()?.get_by_id(id).ok_or_else(AppError::bug_not_found)?;
    Ok(ok(bug))
}

pub async fn create(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let new_bug = parse_new_bug(&body).inspect_err(|e| tracing::warn!(error = %e, "create rejected"))?;
    let bug = state.write_store()?.create(new_bug);
    tracing::info!(id = bug.id, "bug created");
    Ok(created(bug))
}

pub async fn update(
    State(state): State<AppState>,
    BugId(id): BugId,
    body: JsonBody,
) -> Result<impl IntoResponse, AppError> {
    if !state.read_store()?.contains(id) {
        return Err(AppError::bug_not_found());
    }
    let body = body.into_object()?;
    let patch = parse_patch(&body).inspect_err(|e| tracing::warn!(id, error = %e, "update rejected"))?;
    let mut store = state.write_store()?;
    let bug = match state.update_policy {
        UpdatePolicy::Lenient => store.update(id, patch).ok_or_else(AppError::bug_not_found)?,
        UpdatePolicy::Strict => store
            .try_update(id, patch, |merged| BugValidator::validate_record(merged).into_result())
            .ok_or_else(AppError::bug_not_found)??,
    };
    Ok(ok(bug))
}

pub async fn delete(State(state): State<AppState>, BugId(id): BugId) -> Result<impl IntoResponse, AppError> {
    if !state.write_store()?.delete(id) {
        return Err(AppError::bug_not_found());
    }
    tracing::info!(id, "bug deleted");
    Ok(message(StatusCode::OK, "Bug deleted successfully"))
}
