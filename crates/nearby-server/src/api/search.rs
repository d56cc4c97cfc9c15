use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension,
};
use nearby_core::{SearchError, SearchRequest, SearchResultItem};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

/// Raw query string for `GET /search`. Every field is optional here so that
/// missing values surface as validation errors rather than extractor
/// rejections.
#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
}

pub(super) async fn search_items(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params.map_err(|rejection| {
        tracing::info!(error = %rejection, "rejected search query string");
        ApiError::new(req_id.0.clone(), "validation_error", rejection.body_text())
    })?;
    let request = SearchRequest::from_raw(
        params.search_term.as_deref(),
        params.lat.as_deref(),
        params.lng.as_deref(),
    )
    .map_err(|e| map_search_error(req_id.0.clone(), &SearchError::from(e)))?;

    let ranked = nearby_core::search(state.store.as_ref(), &request, &state.search)
        .await
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    let data: Vec<SearchResultItem> = ranked.into_iter().map(SearchResultItem::from).collect();
    let body = serde_json::to_vec(&ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0.clone()),
    })
    .map_err(|e| {
        tracing::error!(error = %e, "failed to encode search results");
        ApiError::new(req_id.0, "serialization_error", "failed to encode response")
    })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        body,
    )
        .into_response())
}

/// Store failures are reported as client errors, the same status as
/// validation failures.
fn map_search_error(request_id: String, error: &SearchError) -> ApiError {
    match error {
        SearchError::Validation(e) => {
            tracing::info!(error = %e, "rejected search request");
            ApiError::new(request_id, "validation_error", e.to_string())
        }
        SearchError::Store(e) => {
            tracing::warn!(error = %e, "item store failed during search");
            ApiError::new(request_id, "bad_request", e.to_string())
        }
    }
}
