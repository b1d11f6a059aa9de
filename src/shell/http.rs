use axum::{
    Router,
    routing::{get, patch},
};
use tower_http::trace::TraceLayer;

use crate::modules::products::use_cases::adjust_stock::inbound::http as adjust_stock_http;
use crate::modules::products::use_cases::create_product::inbound::http as create_http;
use crate::modules::products::use_cases::delete_product::inbound::http as delete_http;
use crate::modules::products::use_cases::get_product::inbound::http as get_http;
use crate::modules::products::use_cases::list_low_stock_products::inbound::http as low_stock_http;
use crate::modules::products::use_cases::list_products::inbound::http as list_http;
use crate::modules::products::use_cases::update_product::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(list_http::handle).post(create_http::handle),
        )
        .route("/api/products/low-stock", get(low_stock_http::handle))
        .route(
            "/api/products/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .route(
            "/api/products/{id}/increase-stock",
            patch(adjust_stock_http::increase),
        )
        .route(
            "/api/products/{id}/decrease-stock",
            patch(adjust_stock_http::decrease),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
