//! Requirement handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::ValidationRequest,
    services::ConfigureService,
    state::AppState,
};

use super::{
    request::{ConfigureQuery, EvaluateRequest, FriendlyNamesRequest, SaveRequirementRequest},
    response::{
        EvaluateResponse, FriendlyNamesResponse, RequirementConfigResponse,
        SaveRequirementResponse,
    },
};

/// Load the restricted categories of a discount requirement
pub async fn get_configuration(
    State(state): State<AppState>,
    Path(discount_id): Path<i32>,
    Query(query): Query<ConfigureQuery>,
) -> AppResult<Json<RequirementConfigResponse>> {
    let config =
        ConfigureService::get_configuration(state.requirements(), discount_id, query.requirement_id)
            .await?;

    Ok(Json(config))
}

/// Save the restricted categories, creating the requirement if needed
pub async fn save_configuration(
    State(state): State<AppState>,
    Path(discount_id): Path<i32>,
    Json(payload): Json<SaveRequirementRequest>,
) -> AppResult<Json<SaveRequirementResponse>> {
    payload.validate()?;

    let saved =
        ConfigureService::save_configuration(state.requirements(), discount_id, payload).await?;

    Ok(Json(saved))
}

/// Names of the categories referenced by a configuration
pub async fn category_friendly_names(
    State(state): State<AppState>,
    Json(payload): Json<FriendlyNamesRequest>,
) -> AppResult<Json<FriendlyNamesResponse>> {
    let text = ConfigureService::category_friendly_names(state.db(), &payload.category_ids).await?;
    Ok(Json(FriendlyNamesResponse { text }))
}

/// Check a customer's cart against a requirement; unknown requirements are 404
pub async fn evaluate_requirement(
    State(state): State<AppState>,
    Path(requirement_id): Path<i32>,
    Json(payload): Json<EvaluateRequest>,
) -> AppResult<Json<EvaluateResponse>> {
    let request = ValidationRequest {
        requirement_id,
        customer_id: payload.customer_id,
        store_id: payload
            .store_id
            .unwrap_or(state.config().rules.default_store_id),
    };

    let result = state.requirements().evaluate(&request).await?;

    Ok(Json(EvaluateResponse {
        requirement_id,
        is_valid: result.is_valid,
    }))
}
