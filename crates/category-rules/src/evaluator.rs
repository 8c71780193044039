//! Evaluation of a constraint list against a cart snapshot.

use serde::{Deserialize, Serialize};

use crate::constraint::{Constraint, ConstraintList};
use crate::context::CartSnapshot;
use crate::parser;

/// Outcome of checking a requirement. Invalid unless proven otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self { is_valid: true }
    }

    pub fn invalid() -> Self {
        Self::default()
    }
}

impl From<bool> for ValidationResult {
    fn from(is_valid: bool) -> Self {
        Self { is_valid }
    }
}

/// The constraint that satisfied a cart, with its position in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Satisfied {
    pub index: usize,
    pub constraint: Constraint,
}

/// Find the first constraint the cart satisfies.
pub fn evaluate_detailed(constraints: &ConstraintList, cart: &CartSnapshot) -> Option<Satisfied> {
    let tally = cart.tally();
    constraints
        .any_of()
        .first_satisfied(&tally)
        .map(|(index, constraint)| Satisfied {
            index,
            constraint: *constraint,
        })
}

/// Evaluate an already parsed list. An empty list is never satisfied.
pub fn evaluate(constraints: &ConstraintList, cart: &CartSnapshot) -> ValidationResult {
    let hit = evaluate_detailed(constraints, cart);
    if let Some(hit) = &hit {
        tracing::debug!(
            index = hit.index,
            constraint = %hit.constraint,
            "Category requirement satisfied"
        );
    }
    hit.is_some().into()
}

/// Check a stored configuration against a cart.
///
/// `raw` is the stored configuration (absent means nothing stored); `cart`
/// is `None` when there is no customer to take a cart from. A blank
/// configuration passes regardless of the cart. Anything else needs a cart,
/// a configuration that parses completely, and at least one term.
pub fn check_requirement(raw: Option<&str>, cart: Option<&CartSnapshot>) -> ValidationResult {
    if parser::is_unrestricted(raw) {
        return ValidationResult::valid();
    }
    let raw = raw.unwrap_or_default();

    let Some(cart) = cart else {
        return ValidationResult::invalid();
    };

    let constraints = match parser::parse_constraints(raw) {
        Ok(constraints) => constraints,
        Err(e) => {
            tracing::warn!(error = %e, config = raw, "Malformed category requirement");
            return ValidationResult::invalid();
        }
    };

    if constraints.is_empty() {
        return ValidationResult::invalid();
    }

    evaluate(&constraints, cart)
}
