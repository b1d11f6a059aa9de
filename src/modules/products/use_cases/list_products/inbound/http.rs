use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::Uri,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::products::adapters::inbound::http::{error_response, query_rejection_response};
use crate::modules::products::core::errors::ProductError;
use crate::modules::products::core::product::ProductPageRequest;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListProductsParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    uri: Uri,
    params: Result<Query<ListProductsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(q) => q,
        Err(rejection) => return query_rejection_response(rejection, &uri),
    };
    let request =
        match ProductPageRequest::from_query(params.page, params.size, params.sort.as_deref()) {
            Ok(r) => r,
            Err(error) => return error_response(ProductError::from(error), &uri),
        };

    match state.products.list_products(request).await {
        Ok(page) => Json(page).into_response(),
        Err(error) => error_response(error, &uri),
    }
}
