use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::Uri,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::modules::products::adapters::inbound::http::{error_response, path_rejection_response};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    uri: Uri,
) -> Response {
    let Path(id) = match id {
        Ok(p) => p,
        Err(rejection) => return path_rejection_response(rejection, &uri),
    };

    match state.products.get_product(id).await {
        Ok(view) => Json(view).into_response(),
        Err(error) => error_response(error, &uri),
    }
}
