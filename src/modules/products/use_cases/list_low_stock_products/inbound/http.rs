use axum::{
    Json,
    extract::State,
    http::Uri,
    response::{IntoResponse, Response},
};

use crate::modules::products::adapters::inbound::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, uri: Uri) -> Response {
    match state.products.list_low_stock_products().await {
        Ok(products) => Json(products).into_response(),
        Err(error) => error_response(error, &uri),
    }
}
