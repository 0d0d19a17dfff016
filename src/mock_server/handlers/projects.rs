//! Project endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;
use crate::ProjectInfo;

const NOT_FOUND_MESSAGE: &str = "The project could not be found.";

/// Query parameters for looking up a project.
#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    pub name: String,
    pub version: String,
}

/// Count the request and answer it early if auth fails or a status is forced.
fn intercept(state: &mut MockState, headers: &HeaderMap) -> Option<Response> {
    state.requests += 1;

    if let Some(ref expected) = state.required_api_key {
        let provided = headers.get("x-api-key").and_then(|v| v.to_str().ok());
        if provided != Some(expected.as_str()) {
            return Some((StatusCode::UNAUTHORIZED, "Unauthorized").into_response());
        }
    }

    state
        .forced_status
        .and_then(|s| StatusCode::from_u16(s).ok())
        .map(IntoResponse::into_response)
}

/// GET /api/v1/project/lookup?name=&version=
pub async fn lookup_project(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Query(query): Query<LookupQuery>,
) -> Response {
    let mut state = state.write().await;
    if let Some(response) = intercept(&mut state, &headers) {
        return response;
    }

    match state.lookup_project(&query.name, &query.version) {
        Some(project) => (StatusCode::OK, Json(project.clone())).into_response(),
        None => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
    }
}

/// PATCH /api/v1/project/{uuid}
pub async fn patch_project(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(uuid): Path<String>,
    Json(info): Json<ProjectInfo>,
) -> Response {
    let mut state = state.write().await;
    if let Some(response) = intercept(&mut state, &headers) {
        return response;
    }

    match state.patch_project(&uuid, &info) {
        Some(project) => (StatusCode::OK, Json(project.clone())).into_response(),
        None => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
    }
}

/// DELETE /api/v1/project/{uuid}
pub async fn delete_project(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(uuid): Path<String>,
) -> Response {
    let mut state = state.write().await;
    if let Some(response) = intercept(&mut state, &headers) {
        return response;
    }

    match state.delete_project(&uuid) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
    }
}
