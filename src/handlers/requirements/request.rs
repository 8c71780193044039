//! Requirement request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{constants::MAX_CATEGORY_IDS_LENGTH, utils::validation::validate_category_ids};

/// Query of the configuration page
#[derive(Debug, Deserialize)]
pub struct ConfigureQuery {
    /// Absent when a new requirement is being added
    pub requirement_id: Option<i32>,
}

/// Save restricted categories request
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequirementRequest {
    /// Zero (or absent) creates a new requirement
    #[serde(default)]
    pub requirement_id: i32,

    #[validate(
        length(max = MAX_CATEGORY_IDS_LENGTH),
        custom(function = "validate_category_ids")
    )]
    pub category_ids: String,
}

/// Evaluate requirement request
#[derive(Debug, Default, Deserialize)]
pub struct EvaluateRequest {
    /// Current customer, if any
    pub customer_id: Option<i32>,
    /// Defaults to the configured store
    pub store_id: Option<i32>,
}

/// Category friendly names request
#[derive(Debug, Deserialize)]
pub struct FriendlyNamesRequest {
    #[serde(default)]
    pub category_ids: String,
}
