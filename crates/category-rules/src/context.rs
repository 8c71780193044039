//! Context types for requirement evaluation.
//!
//! A [`CartSnapshot`] is the materialized cart handed over by the host; a
//! [`CategoryTally`] is the per-category aggregate constraints are checked
//! against.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Category identifier type
pub type CategoryId = i32;

/// Product identifier type
pub type ProductId = i32;

/// One cart item together with the categories of its product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: i32,
    pub categories: BTreeSet<CategoryId>,
}

impl CartLine {
    pub fn new(
        product_id: ProductId,
        quantity: i32,
        categories: impl IntoIterator<Item = CategoryId>,
    ) -> Self {
        Self {
            product_id,
            quantity,
            categories: categories.into_iter().collect(),
        }
    }
}

/// Read-only view of a cart for a single evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    lines: Vec<CartLine>,
}

impl CartSnapshot {
    pub fn new(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// Assemble a snapshot from cart items and a product → categories lookup.
    ///
    /// Products missing from `categories` belong to no category.
    pub fn from_items(
        items: impl IntoIterator<Item = (ProductId, i32)>,
        categories: &HashMap<ProductId, BTreeSet<CategoryId>>,
    ) -> Self {
        let lines = items
            .into_iter()
            .map(|(product_id, quantity)| CartLine {
                product_id,
                quantity,
                categories: categories.get(&product_id).cloned().unwrap_or_default(),
            })
            .collect();
        Self { lines }
    }

    pub fn with_line(
        mut self,
        product_id: ProductId,
        quantity: i32,
        categories: impl IntoIterator<Item = CategoryId>,
    ) -> Self {
        self.lines.push(CartLine::new(product_id, quantity, categories));
        self
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn tally(&self) -> CategoryTally {
        CategoryTally::from_snapshot(self)
    }
}

/// Per-category quantity totals, computed once per snapshot.
///
/// A product in several categories counts towards each of them.
#[derive(Debug, Clone, Default)]
pub struct CategoryTally {
    totals: HashMap<CategoryId, i64>,
}

impl CategoryTally {
    pub fn from_snapshot(snapshot: &CartSnapshot) -> Self {
        let mut totals: HashMap<CategoryId, i64> = HashMap::new();
        for line in snapshot.lines() {
            for category_id in &line.categories {
                *totals.entry(*category_id).or_default() += i64::from(line.quantity);
            }
        }
        Self { totals }
    }

    /// Whether any cart line maps to the category.
    pub fn contains(&self, category_id: CategoryId) -> bool {
        self.totals.contains_key(&category_id)
    }

    /// Summed quantity for the category, zero when absent.
    pub fn quantity(&self, category_id: CategoryId) -> i64 {
        self.totals.get(&category_id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cart() -> CartSnapshot {
        CartSnapshot::default()
            .with_line(1, 2, [77])
            .with_line(2, 3, [77, 123])
            .with_line(3, 1, [156])
    }

    #[test]
    fn test_tally_sums_quantities_per_category() {
        let tally = sample_cart().tally();
        assert_eq!(tally.quantity(77), 5);
        assert_eq!(tally.quantity(123), 3);
        assert_eq!(tally.quantity(156), 1);
        assert_eq!(tally.quantity(999), 0);
        assert!(!tally.contains(999));
    }

    #[test]
    fn test_zero_quantity_line_still_counts_as_present() {
        let tally = CartSnapshot::default().with_line(1, 0, [77]).tally();
        assert!(tally.contains(77));
        assert_eq!(tally.quantity(77), 0);
    }

    #[test]
    fn test_from_items_uses_lookup() {
        let mut categories = HashMap::new();
        categories.insert(10, BTreeSet::from([5, 6]));

        let snapshot = CartSnapshot::from_items([(10, 1), (11, 4)], &categories);
        assert_eq!(snapshot.lines().len(), 2);
        assert!(snapshot.lines()[0].categories.contains(&6));
        assert!(snapshot.lines()[1].categories.is_empty());
    }
}
