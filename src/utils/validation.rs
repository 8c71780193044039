//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

/// Any character that cannot appear in a restricted-categories configuration
static FORBIDDEN_CATEGORY_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9 ,:\-]").expect("valid category ids pattern"));

/// Check the characters of a restricted-categories configuration.
///
/// Only digits, spaces, commas, colons and hyphens are allowed. This is a
/// character check only; the rule engine decides what the terms mean.
pub fn check_category_ids_format(value: &str) -> Result<(), &'static str> {
    if FORBIDDEN_CATEGORY_CHARS.is_match(value) {
        return Err(
            "Invalid format for Categories selection. Format should be comma-separated list of \
             Category identifiers (e.g. 77, 123, 156), optionally with quantities \
             ({Category ID}:{Quantity}, e.g. 77:1) or quantity ranges \
             ({Category ID}:{Min quantity}-{Max quantity}, e.g. 77:1-3)",
        );
    }
    Ok(())
}

/// `validator` adapter for [`check_category_ids_format`]
pub fn validate_category_ids(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("Categories are required".into());
        return Err(err);
    }

    check_category_ids_format(value).map_err(|message| {
        let mut err = ValidationError::new("invalid_format");
        err.message = Some(message.into());
        err
    })
}

/// Validate a discount identifier
pub fn validate_discount_id(id: i32) -> Result<(), ValidationError> {
    if id == 0 {
        let mut err = ValidationError::new("required");
        err.message = Some("Discount is required".into());
        return Err(err);
    }
    Ok(())
}
