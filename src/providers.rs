//! Collaborator interfaces the requirement service depends on.
//!
//! The service never talks to storage directly; it is handed a settings
//! store, a cart provider and a discount store. PostgreSQL implementations
//! live in [`crate::db::providers`].

use async_trait::async_trait;
use category_rules::CartSnapshot;

use crate::{
    error::AppResult,
    models::{Discount, DiscountRequirement},
};

/// Key-value settings store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Stored value for `key`, or `None` when nothing is stored.
    async fn get_setting(&self, key: &str) -> AppResult<Option<String>>;

    /// Insert or replace the value for `key`.
    async fn set_setting(&self, key: &str, value: &str) -> AppResult<()>;
}

/// Source of cart contents and product category memberships.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartProvider: Send + Sync {
    /// The customer's shopping cart in `store_id`, with each product's
    /// categories resolved in one batch.
    async fn cart_snapshot(&self, customer_id: i32, store_id: i32) -> AppResult<CartSnapshot>;
}

/// Discounts and the requirements attached to them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiscountStore: Send + Sync {
    async fn find_discount(&self, discount_id: i32) -> AppResult<Option<Discount>>;

    async fn find_requirement(&self, requirement_id: i32)
    -> AppResult<Option<DiscountRequirement>>;

    /// Attach a new requirement for `rule_system_name` to the discount.
    async fn create_requirement(
        &self,
        discount_id: i32,
        rule_system_name: &str,
    ) -> AppResult<DiscountRequirement>;
}
