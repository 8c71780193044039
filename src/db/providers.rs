//! PostgreSQL implementations of the requirement service collaborators.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use category_rules::CartSnapshot;
use sqlx::PgPool;

use crate::{
    constants::cart_types,
    db::repositories::{
        CartRepository, CategoryRepository, DiscountRepository, SettingRepository,
    },
    error::AppResult,
    models::{Discount, DiscountRequirement, ProductCategory, ShoppingCartItem},
    providers::{CartProvider, DiscountStore, SettingsStore},
};

/// Settings stored in the `settings` table, shared across stores.
#[derive(Clone)]
pub struct PgSettingsStore {
    pool: PgPool,
    store_id: i32,
}

impl PgSettingsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool, store_id: 0 }
    }
}

#[async_trait]
impl SettingsStore for PgSettingsStore {
    async fn get_setting(&self, key: &str) -> AppResult<Option<String>> {
        SettingRepository::find_value(&self.pool, key, self.store_id).await
    }

    async fn set_setting(&self, key: &str, value: &str) -> AppResult<()> {
        SettingRepository::upsert(&self.pool, key, value, self.store_id).await
    }
}

/// Carts from `shopping_cart_items`, categories from the product mapping.
#[derive(Clone)]
pub struct PgCartProvider {
    pool: PgPool,
}

impl PgCartProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartProvider for PgCartProvider {
    async fn cart_snapshot(&self, customer_id: i32, store_id: i32) -> AppResult<CartSnapshot> {
        let items = CartRepository::list_items(
            &self.pool,
            customer_id,
            store_id,
            cart_types::SHOPPING_CART,
        )
        .await?;

        let product_ids = distinct_product_ids(&items);
        let memberships =
            CategoryRepository::memberships_for_products(&self.pool, &product_ids).await?;

        tracing::debug!(
            customer_id,
            store_id,
            items = items.len(),
            products = product_ids.len(),
            "Loaded cart snapshot"
        );

        Ok(snapshot_from_rows(&items, memberships))
    }
}

/// Discounts and requirements from their tables.
#[derive(Clone)]
pub struct PgDiscountStore {
    pool: PgPool,
}

impl PgDiscountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DiscountStore for PgDiscountStore {
    async fn find_discount(&self, discount_id: i32) -> AppResult<Option<Discount>> {
        DiscountRepository::find_by_id(&self.pool, discount_id).await
    }

    async fn find_requirement(
        &self,
        requirement_id: i32,
    ) -> AppResult<Option<DiscountRequirement>> {
        DiscountRepository::find_requirement(&self.pool, requirement_id).await
    }

    async fn create_requirement(
        &self,
        discount_id: i32,
        rule_system_name: &str,
    ) -> AppResult<DiscountRequirement> {
        DiscountRepository::create_requirement(&self.pool, discount_id, rule_system_name).await
    }
}

/// Product ids of the cart, each once, for the batch category lookup
fn distinct_product_ids(items: &[ShoppingCartItem]) -> Vec<i32> {
    let mut product_ids: Vec<i32> = items.iter().map(|item| item.product_id).collect();
    product_ids.sort_unstable();
    product_ids.dedup();
    product_ids
}

/// Build the snapshot, keeping only visible category memberships.
fn snapshot_from_rows(
    items: &[ShoppingCartItem],
    memberships: impl IntoIterator<Item = ProductCategory>,
) -> CartSnapshot {
    let mut categories: HashMap<i32, BTreeSet<i32>> = HashMap::new();
    for row in memberships.into_iter().filter(ProductCategory::is_visible) {
        categories
            .entry(row.product_id)
            .or_default()
            .insert(row.category_id);
    }

    CartSnapshot::from_items(
        items.iter().map(|item| (item.product_id, item.quantity)),
        &categories,
    )
}
