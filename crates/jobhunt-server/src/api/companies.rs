//! `GET /api/companies`: the full company collection, unfiltered.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use jobhunt_core::Company;
use serde::Serialize;

use crate::middleware::RequestId;

use super::AppState;

const FETCH_FAILED: &str = "Failed to fetch data";

/// Body of every failed listing. Store details never reach the caller.
#[derive(Debug, Serialize)]
pub(super) struct FetchFailed {
    error: &'static str,
}

impl IntoResponse for FetchFailed {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

pub(super) async fn list_companies(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<Vec<Company>>, FetchFailed> {
    let companies = state.store.list_companies().await.map_err(|e| {
        tracing::error!(request_id = %req_id.0, error = %e, "company listing failed");
        FetchFailed {
            error: FETCH_FAILED,
        }
    })?;

    tracing::debug!(request_id = %req_id.0, count = companies.len(), "served company listing");
    Ok(Json(companies))
}
