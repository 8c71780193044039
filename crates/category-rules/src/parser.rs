//! Parser for the restricted-categories configuration string.
//!
//! The format is a comma-separated list of terms, each one of:
//!
//! - `{Category ID}`, e.g. `77`
//! - `{Category ID}:{Quantity}`, e.g. `77:1`
//! - `{Category ID}:{Min quantity}-{Max quantity}`, e.g. `77:1-3`
//!
//! Whitespace around commas and around the parts of a term is ignored, and
//! empty terms are dropped. One malformed term fails the whole list.

use std::fmt;

use crate::constraint::{Constraint, ConstraintList};
use crate::context::CategoryId;

/// Separator between terms
pub const TERM_SEPARATOR: char = ',';

/// Separator between the category and its quantity
pub const QUANTITY_SEPARATOR: char = ':';

/// Separator between the bounds of a quantity range
pub const RANGE_SEPARATOR: char = '-';

/// Which part of a term failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermPart {
    CategoryId,
    Quantity,
    MinQuantity,
    MaxQuantity,
}

impl fmt::Display for TermPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermPart::CategoryId => write!(f, "category id"),
            TermPart::Quantity => write!(f, "quantity"),
            TermPart::MinQuantity => write!(f, "min quantity"),
            TermPart::MaxQuantity => write!(f, "max quantity"),
        }
    }
}

/// Configuration parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid {part} '{value}' in term '{term}'")]
    InvalidNumber {
        term: String,
        part: TermPart,
        value: String,
    },
}

/// True when the configuration imposes no restriction at all.
pub fn is_unrestricted(raw: Option<&str>) -> bool {
    raw.is_none_or(|raw| raw.trim().is_empty())
}

/// Parse the whole configuration string.
///
/// Blank input yields an empty list; so does input made only of separators
/// (`","`). Callers distinguish the two with [`is_unrestricted`].
pub fn parse_constraints(raw: &str) -> Result<ConstraintList, ParseError> {
    raw.split(TERM_SEPARATOR)
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(parse_term)
        .collect::<Result<Vec<_>, _>>()
        .map(ConstraintList::new)
}

/// Parse a single, already trimmed term.
pub fn parse_term(term: &str) -> Result<Constraint, ParseError> {
    let Some((category, quantity)) = term.split_once(QUANTITY_SEPARATOR) else {
        return Ok(Constraint::Unbounded {
            category_id: parse_part(term, term, TermPart::CategoryId)?,
        });
    };

    let category_id = parse_part(term, category, TermPart::CategoryId)?;

    match quantity.split_once(RANGE_SEPARATOR) {
        Some((min, max)) => Ok(Constraint::Range {
            category_id,
            min: parse_part(term, min, TermPart::MinQuantity)?,
            max: parse_part(term, max, TermPart::MaxQuantity)?,
        }),
        None => Ok(Constraint::Exact {
            category_id,
            quantity: parse_part(term, quantity, TermPart::Quantity)?,
        }),
    }
}

/// Category identifiers referenced by a configuration, for display.
///
/// Unlike [`parse_constraints`] this never fails: terms whose category part
/// is not a number are skipped.
pub fn category_ids(raw: &str) -> Vec<CategoryId> {
    raw.split(TERM_SEPARATOR)
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .filter_map(|term| {
            let category = term
                .split(QUANTITY_SEPARATOR)
                .find(|part| !part.is_empty())
                .unwrap_or(term);
            category.trim().parse().ok()
        })
        .collect()
}

fn parse_part(term: &str, value: &str, part: TermPart) -> Result<i32, ParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidNumber {
            term: term.to_string(),
            part,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_three_kinds() {
        let list = parse_constraints("77, 123:2, 156:3-8").unwrap();
        assert_eq!(
            list.as_slice(),
            &[
                Constraint::Unbounded { category_id: 77 },
                Constraint::Exact { category_id: 123, quantity: 2 },
                Constraint::Range { category_id: 156, min: 3, max: 8 },
            ]
        );
    }

    #[test]
    fn test_whitespace_inside_terms_is_tolerated() {
        let list = parse_constraints("  77 : 1 - 3 ,\t12 ").unwrap();
        assert_eq!(
            list.as_slice(),
            &[
                Constraint::Range { category_id: 77, min: 1, max: 3 },
                Constraint::Unbounded { category_id: 12 },
            ]
        );
    }

    #[test]
    fn test_empty_terms_are_dropped() {
        assert!(parse_constraints("").unwrap().is_empty());
        assert!(parse_constraints(",").unwrap().is_empty());
        assert!(parse_constraints(" , ").unwrap().is_empty());
        assert_eq!(parse_constraints("77,,").unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_term_fails_whole_list() {
        let err = parse_constraints("77,abc:1").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                term: "abc:1".to_string(),
                part: TermPart::CategoryId,
                value: "abc".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_shapes() {
        assert!(parse_term("abc").is_err());
        assert!(parse_term("77:").is_err());
        assert!(parse_term("77:x").is_err());
        assert!(parse_term("77:1-").is_err());
        assert!(parse_term("77:-3").is_err());
        assert!(parse_term("77:1:2").is_err());
        assert!(parse_term("77:1-3-5").is_err());
        assert!(parse_term(":3").is_err());
    }

    #[test]
    fn test_error_names_the_failing_part() {
        let err = parse_term("77:1-x").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidNumber { part: TermPart::MaxQuantity, .. }
        ));
        assert_eq!(err.to_string(), "Invalid max quantity 'x' in term '77:1-x'");
    }

    #[test]
    fn test_hyphen_before_colon_is_a_sign() {
        assert_eq!(
            parse_term("-5:3").unwrap(),
            Constraint::Exact { category_id: -5, quantity: 3 }
        );
    }

    #[test]
    fn test_zero_and_inverted_bounds_still_parse() {
        assert_eq!(
            parse_term("77:0").unwrap(),
            Constraint::Exact { category_id: 77, quantity: 0 }
        );
        assert_eq!(
            parse_term("77:5-1").unwrap(),
            Constraint::Range { category_id: 77, min: 5, max: 1 }
        );
    }

    #[test]
    fn test_is_unrestricted() {
        assert!(is_unrestricted(None));
        assert!(is_unrestricted(Some("")));
        assert!(is_unrestricted(Some("  \t ")));
        assert!(!is_unrestricted(Some(",")));
        assert!(!is_unrestricted(Some("77")));
    }

    #[test]
    fn test_category_ids_for_display() {
        assert_eq!(category_ids("77, 123:2, 156:3-8"), vec![77, 123, 156]);
        assert_eq!(category_ids("77, abc, 5:x"), vec![77, 5]);
        assert!(category_ids(" , ").is_empty());
    }
}
