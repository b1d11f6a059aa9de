// Shared HTTP shapes for the product routes.
//
// Responsibilities
// - Request bodies for create, update and stock changes (camelCase JSON).
// - The error body and the mapping from ProductError to a status code.
// - Turning extractor rejections (bad JSON, bad id, bad query string) into the same error body.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::modules::products::core::errors::ProductError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBody {
    pub name: String,
    pub description: Option<String>,
    pub stock_quantity: i64,
    pub low_stock_threshold: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct StockUpdateBody {
    pub quantity: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

pub fn status_for(error: &ProductError) -> StatusCode {
    match error {
        ProductError::NotFound(_) => StatusCode::NOT_FOUND,
        ProductError::DuplicateName(_)
        | ProductError::InvalidArgument(_)
        | ProductError::InvalidStock(_)
        | ProductError::InsufficientStock { .. } => StatusCode::BAD_REQUEST,
        ProductError::ConcurrentConflict(_) => StatusCode::CONFLICT,
        ProductError::StorageFault(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_body(status: StatusCode, message: String, uri: &Uri) -> Response {
    let body = ErrorBody {
        timestamp: Utc::now().to_rfc3339(),
        status: status.as_u16(),
        error: status.canonical_reason().unwrap_or("Error").to_string(),
        message,
        path: uri.path().to_string(),
    };
    (status, Json(body)).into_response()
}

pub fn error_response(error: ProductError, uri: &Uri) -> Response {
    let status = status_for(&error);
    if status.is_server_error() {
        warn!(path = uri.path(), kind = error.kind(), "request failed on the storage side");
    }
    error_body(status, error.to_string(), uri)
}

pub fn json_rejection_response(rejection: JsonRejection, uri: &Uri) -> Response {
    error_body(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text(), uri)
}

pub fn path_rejection_response(rejection: PathRejection, uri: &Uri) -> Response {
    error_body(StatusCode::BAD_REQUEST, rejection.body_text(), uri)
}

pub fn query_rejection_response(rejection: QueryRejection, uri: &Uri) -> Response {
    error_body(StatusCode::BAD_REQUEST, rejection.body_text(), uri)
}
