//! Catalog models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Category database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub published: bool,
    pub deleted: bool,
}

/// One row of the product/category mapping, with the category's visibility
#[derive(Debug, Clone, Copy, FromRow)]
pub struct ProductCategory {
    pub product_id: i32,
    pub category_id: i32,
    pub published: bool,
    pub deleted: bool,
}

impl ProductCategory {
    /// Hidden categories never count towards a requirement
    pub fn is_visible(&self) -> bool {
        self.published && !self.deleted
    }
}

/// Shopping cart item database model
#[derive(Debug, Clone, Copy, FromRow)]
pub struct ShoppingCartItem {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
}
