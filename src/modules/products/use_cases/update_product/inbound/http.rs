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
    ProductBody, error_response, json_rejection_response, path_rejection_response,
};
use crate::modules::products::use_cases::update_product::command::UpdateProduct;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    uri: Uri,
    body: Result<Json<ProductBody>, JsonRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(p) => p,
        Err(rejection) => return path_rejection_response(rejection, &uri),
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return json_rejection_response(rejection, &uri),
    };

    let command = UpdateProduct {
        id,
        name: body.name,
        description: body.description,
        stock_quantity: body.stock_quantity,
        low_stock_threshold: body.low_stock_threshold,
    };

    match state.products.update_product(command).await {
        Ok(view) => Json(view).into_response(),
        Err(error) => error_response(error, &uri),
    }
}
