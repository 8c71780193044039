//! "Has category" requirement handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Requirement routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Admin configuration
        .route(
            "/discounts/{discount_id}/requirements/has-category",
            get(handler::get_configuration).post(handler::save_configuration),
        )
        .route("/categories/friendly-names", post(handler::category_friendly_names))
        // Checkout
        .route(
            "/requirements/{requirement_id}/evaluate",
            post(handler::evaluate_requirement),
        )
}
