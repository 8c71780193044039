//! Restricted-category requirement engine.
//!
//! Parses a restricted-categories configuration such as `77, 123:2, 156:3-8`
//! into [`Constraint`]s and checks a [`CartSnapshot`] against them. The
//! requirement holds when any one constraint holds.
//!
//! # Example
//!
//! ```
//! use category_rules::prelude::*;
//!
//! let cart = CartSnapshot::default()
//!     .with_line(10, 2, [77])
//!     .with_line(11, 1, [123]);
//!
//! assert!(check_requirement(Some("77:1-3, 123:5"), Some(&cart)).is_valid);
//! assert!(!check_requirement(Some("77:5"), Some(&cart)).is_valid);
//! // Nothing configured means nothing to enforce.
//! assert!(check_requirement(Some(" "), None).is_valid);
//! ```
//!
//! Everything here is synchronous and free of shared state; the caller
//! fetches the configuration and the cart beforehand.

pub mod constraint;
pub mod context;
pub mod evaluator;
pub mod parser;
pub mod specification;

pub use constraint::{Constraint, ConstraintList};
pub use context::{CartLine, CartSnapshot, CategoryId, CategoryTally, ProductId};
pub use evaluator::{ValidationResult, check_requirement, evaluate};
pub use parser::ParseError;

/// Prelude module - import everything you need with `use category_rules::prelude::*`
pub mod prelude {
    pub use crate::constraint::{Constraint, ConstraintList};
    pub use crate::context::{CartLine, CartSnapshot, CategoryId, CategoryTally, ProductId};
    pub use crate::evaluator::{
        Satisfied, ValidationResult, check_requirement, evaluate, evaluate_detailed,
    };
    pub use crate::parser::{ParseError, category_ids, is_unrestricted, parse_constraints};
    pub use crate::specification::{AnyOf, Specification};
}
