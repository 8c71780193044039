//! Test utilities: in-memory collaborators for the requirement service

pub mod memory {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use category_rules::CartSnapshot;

    use crate::error::AppResult;
    use crate::models::{Discount, DiscountRequirement};
    use crate::providers::{CartProvider, DiscountStore, SettingsStore};

    /// Settings kept in a map
    #[derive(Default)]
    pub struct MemorySettingsStore {
        values: Mutex<HashMap<String, String>>,
    }

    impl MemorySettingsStore {
        pub fn insert(&self, key: &str, value: &str) {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }
    }

    #[async_trait]
    impl SettingsStore for MemorySettingsStore {
        async fn get_setting(&self, key: &str) -> AppResult<Option<String>> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        async fn set_setting(&self, key: &str, value: &str) -> AppResult<()> {
            self.insert(key, value);
            Ok(())
        }
    }

    /// Carts keyed by (customer, store); unknown pairs have an empty cart
    #[derive(Default)]
    pub struct MemoryCartProvider {
        carts: HashMap<(i32, i32), CartSnapshot>,
    }

    impl MemoryCartProvider {
        pub fn with_cart(mut self, customer_id: i32, store_id: i32, cart: CartSnapshot) -> Self {
            self.carts.insert((customer_id, store_id), cart);
            self
        }
    }

    #[async_trait]
    impl CartProvider for MemoryCartProvider {
        async fn cart_snapshot(&self, customer_id: i32, store_id: i32) -> AppResult<CartSnapshot> {
            Ok(self
                .carts
                .get(&(customer_id, store_id))
                .cloned()
                .unwrap_or_default())
        }
    }

    /// Discounts and requirements kept in maps; created requirements get
    /// ids after the highest one seen
    #[derive(Default)]
    pub struct MemoryDiscountStore {
        discounts: HashMap<i32, Discount>,
        requirements: Mutex<HashMap<i32, DiscountRequirement>>,
    }

    impl MemoryDiscountStore {
        pub fn with_discount(mut self, id: i32, name: &str) -> Self {
            self.discounts.insert(
                id,
                Discount {
                    id,
                    name: name.to_string(),
                },
            );
            self
        }

        pub fn with_requirement(self, id: i32, discount_id: i32, rule_system_name: &str) -> Self {
            self.requirements.lock().unwrap().insert(
                id,
                DiscountRequirement {
                    id,
                    discount_id,
                    rule_system_name: rule_system_name.to_string(),
                },
            );
            self
        }
    }

    #[async_trait]
    impl DiscountStore for MemoryDiscountStore {
        async fn find_discount(&self, discount_id: i32) -> AppResult<Option<Discount>> {
            Ok(self.discounts.get(&discount_id).cloned())
        }

        async fn find_requirement(
            &self,
            requirement_id: i32,
        ) -> AppResult<Option<DiscountRequirement>> {
            Ok(self.requirements.lock().unwrap().get(&requirement_id).cloned())
        }

        async fn create_requirement(
            &self,
            discount_id: i32,
            rule_system_name: &str,
        ) -> AppResult<DiscountRequirement> {
            let mut requirements = self.requirements.lock().unwrap();
            let id = requirements.keys().max().copied().unwrap_or(0) + 1;
            let requirement = DiscountRequirement {
                id,
                discount_id,
                rule_system_name: rule_system_name.to_string(),
            };
            requirements.insert(id, requirement.clone());
            Ok(requirement)
        }
    }
}
