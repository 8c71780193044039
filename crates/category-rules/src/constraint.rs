//! Category constraints and their satisfaction rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::context::{CategoryId, CategoryTally};
use crate::parser::{self, ParseError};
use crate::specification::{AnyOf, Specification};

/// One restricted-category term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    /// The category only has to be present in the cart
    Unbounded { category_id: CategoryId },
    /// The category's total quantity must equal `quantity`
    Exact {
        category_id: CategoryId,
        quantity: i32,
    },
    /// The category's total quantity must lie within `min..=max`
    Range {
        category_id: CategoryId,
        min: i32,
        max: i32,
    },
}

impl Constraint {
    pub fn category_id(&self) -> CategoryId {
        match *self {
            Constraint::Unbounded { category_id }
            | Constraint::Exact { category_id, .. }
            | Constraint::Range { category_id, .. } => category_id,
        }
    }

    /// Whether the quantity bounds can ever be met.
    ///
    /// Exact quantities and range minimums must be positive, and a range's
    /// minimum may not exceed its maximum.
    pub fn is_satisfiable(&self) -> bool {
        match *self {
            Constraint::Unbounded { .. } => true,
            Constraint::Exact { quantity, .. } => quantity > 0,
            Constraint::Range { min, max, .. } => min > 0 && min <= max,
        }
    }
}

impl Specification<CategoryTally> for Constraint {
    fn is_satisfied_by(&self, tally: &CategoryTally) -> bool {
        let category_id = self.category_id();
        if !tally.contains(category_id) {
            return false;
        }

        let total = tally.quantity(category_id);
        match *self {
            Constraint::Unbounded { .. } => true,
            Constraint::Exact { quantity, .. } => quantity > 0 && total == i64::from(quantity),
            Constraint::Range { min, max, .. } => {
                min > 0 && i64::from(min) <= total && total <= i64::from(max)
            }
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Unbounded { category_id } => write!(f, "{}", category_id),
            Constraint::Exact {
                category_id,
                quantity,
            } => write!(f, "{}:{}", category_id, quantity),
            Constraint::Range {
                category_id,
                min,
                max,
            } => write!(f, "{}:{}-{}", category_id, min, max),
        }
    }
}

impl FromStr for Constraint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_term(s.trim())
    }
}

/// Ordered list of constraints; satisfied when any member is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstraintList(Vec<Constraint>);

impl ConstraintList {
    pub fn new(constraints: Vec<Constraint>) -> Self {
        Self(constraints)
    }

    pub fn as_slice(&self) -> &[Constraint] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn any_of(&self) -> AnyOf<'_, Constraint> {
        AnyOf::new(&self.0)
    }
}

impl FromStr for ConstraintList {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_constraints(s)
    }
}

impl fmt::Display for ConstraintList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, constraint) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", constraint)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ConstraintList {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
