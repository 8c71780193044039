//! Core Specification trait and the `AnyOf` combinator.

/// Composable predicate over an evaluation context.
///
/// Constraints of a category requirement are specifications over a
/// [`CategoryTally`](crate::context::CategoryTally); the list of them is an
/// [`AnyOf`].
pub trait Specification<Ctx>: Send + Sync {
    /// Check if the specification is satisfied by the given context.
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool;
}

/// Satisfied when any specification in the collection is satisfied.
///
/// Checks run in order and stop at the first match. An empty collection is
/// never satisfied.
#[derive(Debug)]
pub struct AnyOf<'a, S> {
    specs: &'a [S],
}

impl<'a, S> AnyOf<'a, S> {
    pub fn new(specs: &'a [S]) -> Self {
        AnyOf { specs }
    }

    /// Index and value of the first satisfied specification.
    pub fn first_satisfied<Ctx>(&self, ctx: &Ctx) -> Option<(usize, &'a S)>
    where
        S: Specification<Ctx>,
    {
        self.specs
            .iter()
            .enumerate()
            .find(|(_, spec)| spec.is_satisfied_by(ctx))
    }
}

impl<Ctx, S: Specification<Ctx>> Specification<Ctx> for AnyOf<'_, S> {
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.first_satisfied(ctx).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Const(bool);

    impl Specification<()> for Const {
        fn is_satisfied_by(&self, _ctx: &()) -> bool {
            self.0
        }
    }

    struct Counting {
        hits: Arc<AtomicUsize>,
        answer: bool,
    }

    impl Specification<()> for Counting {
        fn is_satisfied_by(&self, _ctx: &()) -> bool {
            self.hits.fetch_add(1, Ordering::SeqCst);
            self.answer
        }
    }

    #[test]
    fn test_any_of_empty_is_unsatisfied() {
        let specs: AnyOf<'_, Const> = AnyOf::new(&[]);
        assert!(!specs.is_satisfied_by(&()));
    }

    #[test]
    fn test_any_of_reports_first_match() {
        let specs = [Const(false), Const(true), Const(true)];
        let specs = AnyOf::new(&specs);
        let (index, _) = specs.first_satisfied(&()).unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn test_any_of_short_circuits() {
        let hits = Arc::new(AtomicUsize::new(0));
        let specs: Vec<Counting> = [false, true, true]
            .into_iter()
            .map(|answer| Counting { hits: hits.clone(), answer })
            .collect();
        assert!(AnyOf::new(&specs).is_satisfied_by(&()));
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
