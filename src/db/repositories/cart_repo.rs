//! Shopping cart repository

use sqlx::PgPool;

use crate::{error::AppResult, models::ShoppingCartItem};

/// Repository for shopping cart reads
pub struct CartRepository;

impl CartRepository {
    /// Items of one cart type for a customer in a store, in insertion order
    pub async fn list_items(
        pool: &PgPool,
        customer_id: i32,
        store_id: i32,
        cart_type: i32,
    ) -> AppResult<Vec<ShoppingCartItem>> {
        let items = sqlx::query_as::<_, ShoppingCartItem>(
            r#"
            SELECT id, product_id, quantity
            FROM shopping_cart_items
            WHERE customer_id = $1 AND store_id = $2 AND shopping_cart_type = $3
            ORDER BY id
            "#,
        )
        .bind(customer_id)
        .bind(store_id)
        .bind(cart_type)
        .fetch_all(pool)
        .await?;

        Ok(items)
    }
}
