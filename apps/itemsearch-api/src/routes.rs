use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use itemsearch_service::{Error as ServiceError, SearchRequest, SearchResponse};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/items", get(search_items))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn search_items(
	State(state): State<AppState>,
	Query(params): Query<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = state.service.search(params).await?;
	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}

impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match &err {
			ServiceError::InvalidRequest { .. } =>
				Self::new(StatusCode::BAD_REQUEST, "invalid_request", err.to_string()),
			ServiceError::UnsupportedLocale { .. } =>
				Self::new(StatusCode::BAD_REQUEST, "unsupported_locale", err.to_string()),
			// Server-side faults are coarse to the caller; the full
			// diagnostic goes to the log only.
			ServiceError::MissingLocaleVariant { .. } => {
				tracing::error!(%err, "Stored document is missing a locale variant.");
				Self::new(
					StatusCode::INTERNAL_SERVER_ERROR,
					"incomplete_document",
					"A matching document could not be localized.",
				)
			},
			ServiceError::EngineUnavailable { .. } => {
				tracing::error!(%err, "Search engine is unreachable.");
				Self::new(
					StatusCode::SERVICE_UNAVAILABLE,
					"engine_unavailable",
					"Search engine is unavailable.",
				)
			},
			ServiceError::Engine { .. } => {
				tracing::error!(%err, "Search engine reported a query failure.");
				Self::new(
					StatusCode::BAD_GATEWAY,
					"engine_error",
					"Search engine failed to execute the query.",
				)
			},
			ServiceError::Decode { .. } => {
				tracing::error!(%err, "Engine response did not match the expected shape.");
				Self::new(
					StatusCode::INTERNAL_SERVER_ERROR,
					"decode_error",
					"Internal server error.",
				)
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };
		(self.status, Json(body)).into_response()
	}
}
