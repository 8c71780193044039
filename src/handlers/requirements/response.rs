//! Requirement response DTOs

use category_rules::ConstraintList;
use serde::Serialize;

/// Configuration page model
#[derive(Debug, Serialize)]
pub struct RequirementConfigResponse {
    pub discount_id: i32,
    pub requirement_id: i32,
    pub category_ids: Option<String>,
    /// Parsed form of `category_ids`, when it parses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<ConstraintList>,
}

/// Save restricted categories response
#[derive(Debug, Serialize)]
pub struct SaveRequirementResponse {
    pub new_requirement_id: i32,
}

/// Evaluate requirement response
#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub requirement_id: i32,
    pub is_valid: bool,
}

/// Category friendly names response
#[derive(Debug, Serialize)]
pub struct FriendlyNamesResponse {
    pub text: String,
}
