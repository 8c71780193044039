//! Discount and discount requirement models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Discount database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Discount {
    pub id: i32,
    pub name: String,
}

/// Discount requirement database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DiscountRequirement {
    pub id: i32,
    pub discount_id: i32,
    pub rule_system_name: String,
}

/// Everything needed to check one requirement for one customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    pub requirement_id: i32,
    /// `None` when there is no current customer
    pub customer_id: Option<i32>,
    pub store_id: i32,
}
