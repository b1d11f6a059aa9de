use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::Uri,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::modules::products::adapters::inbound::http::{
    StockUpdateBody, error_response, json_rejection_response, path_rejection_response,
};
use crate::modules::products::core::errors::ProductError;
use crate::modules::products::core::product::ProductView;
use crate::shell::state::AppState;

pub async fn increase(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    uri: Uri,
    body: Result<Json<StockUpdateBody>, JsonRejection>,
) -> Response {
    let (id, quantity) = match parts(id, body, &uri) {
        Ok(parts) => parts,
        Err(response) => return response,
    };
    respond(state.products.increase_stock(id, quantity).await, &uri)
}

pub async fn decrease(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    uri: Uri,
    body: Result<Json<StockUpdateBody>, JsonRejection>,
) -> Response {
    let (id, quantity) = match parts(id, body, &uri) {
        Ok(parts) => parts,
        Err(response) => return response,
    };
    respond(state.products.decrease_stock(id, quantity).await, &uri)
}

fn parts(
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<StockUpdateBody>, JsonRejection>,
    uri: &Uri,
) -> Result<(Uuid, i64), Response> {
    let Path(id) = id.map_err(|rejection| path_rejection_response(rejection, uri))?;
    let Json(body) = body.map_err(|rejection| json_rejection_response(rejection, uri))?;
    Ok((id, body.quantity))
}

fn respond(result: Result<ProductView, ProductError>, uri: &Uri) -> Response {
    match result {
        Ok(view) => Json(view).into_response(),
        Err(error) => error_response(error, uri),
    }
}
