use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::modules::products::adapters::inbound::http::{
    ProductBody, error_response, json_rejection_response,
};
use crate::modules::products::use_cases::create_product::command::CreateProduct;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    uri: Uri,
    body: Result<Json<ProductBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return json_rejection_response(rejection, &uri),
    };

    let command = CreateProduct {
        name: body.name,
        description: body.description,
        stock_quantity: body.stock_quantity,
        low_stock_threshold: body.low_stock_threshold,
    };

    match state.products.create_product(command).await {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(error) => error_response(error, &uri),
    }
}
