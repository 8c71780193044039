//! Configuration service
//!
//! The admin side of the requirement: loading and saving a discount
//! requirement's restricted categories.

use category_rules::{ConstraintList, parser};
use sqlx::PgPool;

use crate::{
    db::repositories::CategoryRepository,
    error::AppResult,
    handlers::requirements::{
        request::SaveRequirementRequest,
        response::{RequirementConfigResponse, SaveRequirementResponse},
    },
    models::Category,
    providers::{CartProvider, DiscountStore, SettingsStore},
    services::RequirementService,
};

/// Configuration service for business logic
pub struct ConfigureService;

impl ConfigureService {
    /// Load the configuration page model.
    ///
    /// Without a requirement id this describes a requirement about to be
    /// created and carries whatever is stored under id 0.
    pub async fn get_configuration<S, C, D>(
        requirements: &RequirementService<S, C, D>,
        discount_id: i32,
        requirement_id: Option<i32>,
    ) -> AppResult<RequirementConfigResponse>
    where
        S: SettingsStore,
        C: CartProvider,
        D: DiscountStore,
    {
        requirements.discount(discount_id).await?;

        if let Some(id) = requirement_id {
            requirements.requirement(id).await?;
        }

        let requirement_id = requirement_id.unwrap_or(0);
        let category_ids = requirements.get_configuration(requirement_id).await?;
        let constraints = category_ids
            .as_deref()
            .and_then(|raw| raw.parse::<ConstraintList>().ok())
            .filter(|constraints| !constraints.is_empty());

        Ok(RequirementConfigResponse {
            discount_id,
            requirement_id,
            category_ids,
            constraints,
        })
    }

    /// Save restricted categories, creating the requirement when it does
    /// not exist yet. The payload must already be validated.
    pub async fn save_configuration<S, C, D>(
        requirements: &RequirementService<S, C, D>,
        discount_id: i32,
        payload: SaveRequirementRequest,
    ) -> AppResult<SaveRequirementResponse>
    where
        S: SettingsStore,
        C: CartProvider,
        D: DiscountStore,
    {
        let discount = requirements.discount(discount_id).await?;
        let requirement = requirements
            .find_or_create_requirement(&discount, payload.requirement_id)
            .await?;

        warn_on_dead_terms(requirement.id, &payload.category_ids);

        requirements
            .set_configuration(requirement.id, &payload.category_ids)
            .await?;

        Ok(SaveRequirementResponse {
            new_requirement_id: requirement.id,
        })
    }

    /// Comma-separated names of the categories a configuration mentions.
    ///
    /// Quantities are ignored and unknown categories are skipped.
    pub async fn category_friendly_names(pool: &PgPool, raw: &str) -> AppResult<String> {
        if raw.trim().is_empty() {
            return Ok(String::new());
        }

        let ids = parser::category_ids(raw);
        let categories = CategoryRepository::find_by_ids(pool, &ids).await?;

        Ok(join_names(&categories))
    }
}

/// Saved configurations are kept as typed; terms that can never match or
/// do not parse are only reported.
fn warn_on_dead_terms(requirement_id: i32, raw: &str) {
    match raw.parse::<ConstraintList>() {
        Ok(constraints) => {
            let dead: Vec<String> = constraints
                .iter()
                .filter(|constraint| !constraint.is_satisfiable())
                .map(ToString::to_string)
                .collect();
            if !dead.is_empty() {
                tracing::warn!(
                    requirement_id,
                    terms = constraints.len(),
                    unsatisfiable = ?dead,
                    "Requirement has terms no cart can satisfy"
                );
            }
        }
        Err(e) => {
            tracing::warn!(requirement_id, error = %e, "Saved requirement does not parse");
        }
    }
}

fn join_names(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|category| category.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
