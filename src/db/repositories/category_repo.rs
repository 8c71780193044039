//! Category repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Category, ProductCategory},
};

/// Repository for category database operations
pub struct CategoryRepository;

impl CategoryRepository {
    /// Category memberships of many products in one query.
    ///
    /// Rows carry the category's `published` and `deleted` flags; callers
    /// decide what counts as visible.
    pub async fn memberships_for_products(
        pool: &PgPool,
        product_ids: &[i32],
    ) -> AppResult<Vec<ProductCategory>> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, ProductCategory>(
            r#"
            SELECT pcm.product_id, pcm.category_id, c.published, c.deleted
            FROM product_category_mappings pcm
            INNER JOIN categories c ON c.id = pcm.category_id
            WHERE pcm.product_id = ANY($1)
            "#,
        )
        .bind(product_ids)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Find non-deleted categories by IDs, in the order requested
    pub async fn find_by_ids(pool: &PgPool, ids: &[i32]) -> AppResult<Vec<Category>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, published, deleted
            FROM categories
            WHERE id = ANY($1) AND NOT deleted
            ORDER BY array_position($1, id)
            "#,
        )
        .bind(ids)
        .fetch_all(pool)
        .await?;

        Ok(categories)
    }
}
