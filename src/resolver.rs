// The resolver driver: converts the three-continuation engine into a lazy
// Iterator of solutions.
//
// Grounded on the run()/resolve() pair this engine's design was distilled
// from: resolve(goal) starts the search over a fresh, empty substitution and
// hands back something the host can simply iterate, pulling exactly as many
// solutions as it asks for and no more.

use crate::goal::{failure_leaf, success_leaf, Bounce, Goal};
use crate::subst::{Proxy, Subst};

/// A lazy stream of solutions to a [`Goal`], each a read-only [`Proxy`] over
/// the substitution that satisfies it.
///
/// Pulling the next element resumes exactly where the previous one left
/// off; dropping a `Solutions` mid-stream simply releases its held
/// continuation — there is no cleanup callback to run (§5: "the host
/// cancels iteration by simply stopping to request more solutions").
pub struct Solutions {
    pending: Option<Bounce>,
}

impl Solutions {
    fn new(goal: &Goal) -> Solutions {
        let step = goal.apply(Subst::empty());
        let bounce = step(success_leaf(), failure_leaf(), failure_leaf());
        Solutions {
            pending: Some(bounce),
        }
    }
}

impl Iterator for Solutions {
    type Item = Proxy;

    fn next(&mut self) -> Option<Proxy> {
        let mut bounce = self.pending.take()?;
        loop {
            match bounce {
                Bounce::Step(thunk) => bounce = thunk(),
                Bounce::Emit(s, resume) => {
                    self.pending = Some(Bounce::Step(Box::new(move || resume())));
                    return Some(s.proxy());
                }
                Bounce::Stop => return None,
            }
        }
    }
}

/// Starts resolving `goal` against a fresh, empty substitution, returning a
/// lazy stream of solutions.
pub fn resolve(goal: &Goal) -> Solutions {
    Solutions::new(goal)
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::combinators::{amb, cut, seq, unit};
    use crate::term::Term;
    use crate::unify::unify_one;
    use crate::variable::{fresh_var, reset_var_counter};
    use serial_test::serial;

    #[test]
    fn resolve_unit_yields_one_solution() {
        let results: Vec<_> = resolve(&unit()).collect();
        assert_eq!(results.len(), 1);
    }

    #[test]
    #[serial]
    fn resolve_is_lazy_and_supports_early_stop() {
        reset_var_counter();
        let x = fresh_var();
        let g = amb(vec![
            unify_one(Term::Var(x), Term::int(1)),
            unify_one(Term::Var(x), Term::int(2)),
            unify_one(Term::Var(x), Term::int(3)),
        ]);
        let mut iter = resolve(&g);
        let first = iter.next().unwrap();
        assert_eq!(first.get(x), Term::int(1));
        // Dropping `iter` here releases the rest of the search; nothing
        // special is required of the caller.
    }

    #[test]
    #[serial]
    fn resolve_respects_cut() {
        reset_var_counter();
        let x = fresh_var();
        let g = amb(vec![
            seq(vec![unify_one(Term::Var(x), Term::int(1)), cut()]),
            unify_one(Term::Var(x), Term::int(2)),
        ]);
        let results: Vec<Term> = resolve(&g).map(|p| p.get(x)).collect();
        assert_eq!(results, vec![Term::int(1)]);
    }

    #[test]
    fn resolve_amb_empty_yields_nothing() {
        let results: Vec<_> = resolve(&amb(vec![])).collect();
        assert!(results.is_empty());
    }
}
