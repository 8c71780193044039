//! Requirement service
//!
//! Resolves a "has category" requirement, reads its restricted categories
//! from the settings store, fetches the customer's cart when there is
//! something to check, and hands both to the rule engine.

use category_rules::{ValidationResult, check_requirement, parser::is_unrestricted};
use sqlx::PgPool;

use crate::{
    constants::{SYSTEM_NAME, settings_key},
    db::{PgCartProvider, PgDiscountStore, PgSettingsStore},
    error::{AppError, AppResult},
    models::{Discount, DiscountRequirement, ValidationRequest},
    providers::{CartProvider, DiscountStore, SettingsStore},
    utils::validation::validate_discount_id,
};

/// Requirement service backed by PostgreSQL
pub type PgRequirementService =
    RequirementService<PgSettingsStore, PgCartProvider, PgDiscountStore>;

/// "Has category" requirement service
pub struct RequirementService<S, C, D> {
    settings: S,
    carts: C,
    discounts: D,
}

impl<S, C, D> RequirementService<S, C, D>
where
    S: SettingsStore,
    C: CartProvider,
    D: DiscountStore,
{
    pub fn new(settings: S, carts: C, discounts: D) -> Self {
        Self {
            settings,
            carts,
            discounts,
        }
    }

    /// Load a discount, rejecting the zero id
    pub async fn discount(&self, discount_id: i32) -> AppResult<Discount> {
        validate_discount_id(discount_id).map_err(|e| AppError::Validation(e.to_string()))?;

        self.discounts
            .find_discount(discount_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Discount could not be loaded".to_string()))
    }

    /// Load a requirement that belongs to this rule.
    ///
    /// Unknown ids and requirements of other rules are both not found.
    pub async fn requirement(&self, requirement_id: i32) -> AppResult<DiscountRequirement> {
        let requirement = self
            .discounts
            .find_requirement(requirement_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Failed to load requirement".to_string()))?;

        ensure_category_rule(requirement)
    }

    /// Existing requirement for `requirement_id`, or a new one on `discount`
    pub async fn find_or_create_requirement(
        &self,
        discount: &Discount,
        requirement_id: i32,
    ) -> AppResult<DiscountRequirement> {
        if let Some(requirement) = self.discounts.find_requirement(requirement_id).await? {
            return ensure_category_rule(requirement);
        }

        let created = self
            .discounts
            .create_requirement(discount.id, SYSTEM_NAME)
            .await?;

        tracing::info!(
            discount_id = discount.id,
            requirement_id = created.id,
            "Created category requirement"
        );
        Ok(created)
    }

    /// Stored configuration of a requirement
    pub async fn get_configuration(&self, requirement_id: i32) -> AppResult<Option<String>> {
        self.settings.get_setting(&settings_key(requirement_id)).await
    }

    /// Store a requirement's configuration as given.
    ///
    /// Format checks belong to the caller; see
    /// [`validate_category_ids`](crate::utils::validation::validate_category_ids).
    pub async fn set_configuration(&self, requirement_id: i32, raw: &str) -> AppResult<()> {
        self.settings
            .set_setting(&settings_key(requirement_id), raw)
            .await?;

        tracing::info!(requirement_id, config = raw, "Saved restricted categories");
        Ok(())
    }

    /// Check whether the customer's cart meets the requirement.
    ///
    /// The requirement must exist and belong to this rule. Storage failures
    /// are errors; a malformed or unmet configuration is an invalid result.
    /// The cart is only loaded when a customer is present and a restriction
    /// is configured.
    pub async fn evaluate(&self, request: &ValidationRequest) -> AppResult<ValidationResult> {
        self.requirement(request.requirement_id).await?;

        let raw = self.get_configuration(request.requirement_id).await?;

        if is_unrestricted(raw.as_deref()) {
            return Ok(ValidationResult::valid());
        }

        let cart = match request.customer_id {
            Some(customer_id) => Some(
                self.carts
                    .cart_snapshot(customer_id, request.store_id)
                    .await?,
            ),
            None => None,
        };

        let result = check_requirement(raw.as_deref(), cart.as_ref());

        tracing::debug!(
            requirement_id = request.requirement_id,
            customer_id = ?request.customer_id,
            store_id = request.store_id,
            is_valid = result.is_valid,
            "Evaluated category requirement"
        );

        Ok(result)
    }
}

impl PgRequirementService {
    pub fn from_pool(pool: &PgPool) -> Self {
        Self::new(
            PgSettingsStore::new(pool.clone()),
            PgCartProvider::new(pool.clone()),
            PgDiscountStore::new(pool.clone()),
        )
    }
}

fn ensure_category_rule(requirement: DiscountRequirement) -> AppResult<DiscountRequirement> {
    if requirement.rule_system_name != SYSTEM_NAME {
        return Err(AppError::NotFound(format!(
            "Requirement {} is not a category requirement",
            requirement.id
        )));
    }
    Ok(requirement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{MockCartProvider, MockDiscountStore, MockSettingsStore};
    use crate::test_utils::memory::{
        MemoryCartProvider, MemoryDiscountStore, MemorySettingsStore,
    };
    use category_rules::CartSnapshot;
    use mockall::predicate::eq;

    fn request(customer_id: Option<i32>) -> ValidationRequest {
        ValidationRequest {
            requirement_id: 7,
            customer_id,
            store_id: 1,
        }
    }

    fn known_requirement() -> MockDiscountStore {
        let mut discounts = MockDiscountStore::new();
        discounts
            .expect_find_requirement()
            .with(eq(7))
            .returning(|id| {
                Ok(Some(DiscountRequirement {
                    id,
                    discount_id: 3,
                    rule_system_name: SYSTEM_NAME.to_string(),
                }))
            });
        discounts
    }

    fn service_with(
        config: Option<&str>,
        cart: CartSnapshot,
    ) -> RequirementService<MemorySettingsStore, MemoryCartProvider, MemoryDiscountStore> {
        let settings = MemorySettingsStore::default();
        if let Some(config) = config {
            settings.insert(&settings_key(7), config);
        }
        RequirementService::new(
            settings,
            MemoryCartProvider::default().with_cart(42, 1, cart),
            MemoryDiscountStore::default()
                .with_discount(3, "Category promo")
                .with_requirement(7, 3, SYSTEM_NAME),
        )
    }

    #[tokio::test]
    async fn test_unconfigured_requirement_is_valid() {
        let service = service_with(None, CartSnapshot::default());
        assert!(service.evaluate(&request(Some(42))).await.unwrap().is_valid);
        assert!(service.evaluate(&request(None)).await.unwrap().is_valid);
    }

    #[tokio::test]
    async fn test_unknown_requirement_is_not_found() {
        let service = RequirementService::new(
            MemorySettingsStore::default(),
            MemoryCartProvider::default(),
            MemoryDiscountStore::default(),
        );

        for customer_id in [None, Some(42)] {
            let err = service
                .evaluate(&ValidationRequest {
                    requirement_id: 999_999,
                    customer_id,
                    store_id: 0,
                })
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)));
        }
    }

    #[tokio::test]
    async fn test_requirement_of_another_rule_is_rejected() {
        let settings = MemorySettingsStore::default();
        settings.insert(&settings_key(7), "77");
        let service = RequirementService::new(
            settings,
            MemoryCartProvider::default(),
            MemoryDiscountStore::default()
                .with_discount(3, "Category promo")
                .with_requirement(7, 3, "DiscountRequirement.MustBeAssignedToCustomerRole"),
        );

        let err = service.evaluate(&request(Some(42))).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_blank_configuration_skips_cart() {
        let mut settings = MockSettingsStore::new();
        settings
            .expect_get_setting()
            .with(eq(settings_key(7)))
            .returning(|_| Ok(Some("   ".to_string())));
        // No expectations: any cart lookup panics.
        let carts = MockCartProvider::new();

        let service = RequirementService::new(settings, carts, known_requirement());
        assert!(service.evaluate(&request(Some(42))).await.unwrap().is_valid);
    }

    #[tokio::test]
    async fn test_missing_customer_is_invalid_without_cart_lookup() {
        let mut settings = MockSettingsStore::new();
        settings
            .expect_get_setting()
            .returning(|_| Ok(Some("77".to_string())));
        let carts = MockCartProvider::new();

        let service = RequirementService::new(settings, carts, known_requirement());
        assert!(!service.evaluate(&request(None)).await.unwrap().is_valid);
    }

    #[tokio::test]
    async fn test_cart_is_loaded_for_customer_and_store() {
        let mut settings = MockSettingsStore::new();
        settings
            .expect_get_setting()
            .returning(|_| Ok(Some("77:2".to_string())));
        let mut carts = MockCartProvider::new();
        carts
            .expect_cart_snapshot()
            .with(eq(42), eq(1))
            .times(1)
            .returning(|_, _| Ok(CartSnapshot::default().with_line(5, 2, [77])));

        let service = RequirementService::new(settings, carts, known_requirement());
        assert!(service.evaluate(&request(Some(42))).await.unwrap().is_valid);
    }

    #[tokio::test]
    async fn test_quantity_rules_against_cart() {
        let cart = CartSnapshot::default()
            .with_line(1, 2, [77])
            .with_line(2, 1, [123]);

        let cases = [
            ("77", true),
            ("78", false),
            ("77:2", true),
            ("77:3", false),
            ("77:1-3", true),
            ("77:3-5", false),
            ("77:3-5, 123:1", true),
            ("77,abc:1", false),
            (",", false),
        ];
        for (config, expected) in cases {
            let service = service_with(Some(config), cart.clone());
            let result = service.evaluate(&request(Some(42))).await.unwrap();
            assert_eq!(result.is_valid, expected, "config {:?}", config);
        }
    }

    #[tokio::test]
    async fn test_empty_cart_is_invalid() {
        let service = service_with(Some("77"), CartSnapshot::default());
        assert!(!service.evaluate(&request(Some(42))).await.unwrap().is_valid);
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let mut settings = MockSettingsStore::new();
        settings
            .expect_get_setting()
            .returning(|_| Err(AppError::Database("connection reset".to_string())));

        let service =
            RequirementService::new(settings, MockCartProvider::new(), known_requirement());
        let err = service.evaluate(&request(Some(42))).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn test_set_then_get_configuration() {
        let service = service_with(None, CartSnapshot::default());
        service.set_configuration(7, "77:1-3, 5").await.unwrap();
        assert_eq!(
            service.get_configuration(7).await.unwrap().as_deref(),
            Some("77:1-3, 5")
        );
        assert_eq!(service.get_configuration(8).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_zero_discount_id_is_a_validation_error() {
        let service = service_with(None, CartSnapshot::default());
        let err = service.discount(0).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
