//! Image endpoint handlers.

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
use crate::Image;

/// Query parameters for the search endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub has_breeds: Option<u8>,
    /// Comma separated breed ids.
    pub breed_ids: Option<String>,
}

fn api_key(headers: &HeaderMap) -> Option<&str> {
    headers.get("x-api-key").and_then(|v| v.to_str().ok())
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "message": "AUTHENTICATION_ERROR - invalid api key" })),
    )
        .into_response()
}

/// GET /images/search
pub async fn search_images(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Response {
    let mut state = state.write().await;
    state.search_requests += 1;

    if !state.accepts_key(api_key(&headers)) {
        return unauthorized();
    }

    if let Some(status) = state.search_failure {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (
            status,
            Json(serde_json::json!({ "message": "search unavailable" })),
        )
            .into_response();
    }

    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(1);
    let breed_ids: Vec<&str> = query
        .breed_ids
        .as_deref()
        .map(|ids| ids.split(',').map(str::trim).filter(|id| !id.is_empty()).collect())
        .unwrap_or_default();

    let images: Vec<Image> = state
        .search_page(page, limit, query.has_breeds == Some(1), &breed_ids)
        .into_iter()
        .cloned()
        .collect();

    (StatusCode::OK, Json(images)).into_response()
}

/// GET /images/{id}
pub async fn get_image(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let state = state.read().await;

    if !state.accepts_key(api_key(&headers)) {
        return unauthorized();
    }

    match state.get_image(&id) {
        Some(image) => (StatusCode::OK, Json(image.clone())).into_response(),
        None => (StatusCode::BAD_REQUEST, "Couldn't find an image matching the passed 'id'")
            .into_response(),
    }
}
