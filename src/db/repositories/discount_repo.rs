//! Discount repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Discount, DiscountRequirement},
};

/// Repository for discount and discount requirement database operations
pub struct DiscountRepository;

impl DiscountRepository {
    /// Find discount by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> AppResult<Option<Discount>> {
        let discount = sqlx::query_as::<_, Discount>(r#"SELECT id, name FROM discounts WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(discount)
    }

    /// Find discount requirement by ID
    pub async fn find_requirement(pool: &PgPool, id: i32) -> AppResult<Option<DiscountRequirement>> {
        let requirement = sqlx::query_as::<_, DiscountRequirement>(
            r#"SELECT id, discount_id, rule_system_name FROM discount_requirements WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(requirement)
    }

    /// Create a requirement on a discount
    pub async fn create_requirement(
        pool: &PgPool,
        discount_id: i32,
        rule_system_name: &str,
    ) -> AppResult<DiscountRequirement> {
        let requirement = sqlx::query_as::<_, DiscountRequirement>(
            r#"
            INSERT INTO discount_requirements (discount_id, rule_system_name)
            VALUES ($1, $2)
            RETURNING id, discount_id, rule_system_name
            "#,
        )
        .bind(discount_id)
        .bind(rule_system_name)
        .fetch_one(pool)
        .await?;

        Ok(requirement)
    }
}
