// Testable properties 3, 6, 7, 9: associativity, non-commutativity,
// unification symmetry, and double negation.
//
// Properties 1, 2, 4, 5, 8, 10 are covered by #[cfg(test)] unit tests
// alongside the combinators/subst modules they exercise most directly.

use serial_test::serial;
use sld::combinators::{no, seq};
use sld::resolve;
use sld::term::Term;
use sld::unify::unify;
use sld::variable::{fresh_var, reset_var_counter};

#[test]
#[serial]
fn seq_is_associative() {
    reset_var_counter();
    let x = fresh_var();
    let y = fresh_var();
    let z = fresh_var();
    let g1 = unify(vec![(Term::Var(x), Term::int(1))]);
    let g2 = unify(vec![(Term::Var(y), Term::int(2))]);
    let g3 = unify(vec![(Term::Var(z), Term::int(3))]);

    let left = seq(vec![g1.clone(), seq(vec![g2.clone(), g3.clone()])]);
    let right = seq(vec![seq(vec![g1, g2]), g3]);

    let left_results: Vec<_> = resolve(&left).map(|p| (p.get(x), p.get(y), p.get(z))).collect();
    let right_results: Vec<_> = resolve(&right).map(|p| (p.get(x), p.get(y), p.get(z))).collect();
    assert_eq!(left_results, right_results);
}

#[test]
#[serial]
fn amb_order_depends_on_argument_order() {
    reset_var_counter();
    let x = fresh_var();
    let a = sld::combinators::amb(vec![
        sld::unify::unify_one(Term::Var(x), Term::int(1)),
        sld::unify::unify_one(Term::Var(x), Term::int(2)),
    ]);
    let b = sld::combinators::amb(vec![
        sld::unify::unify_one(Term::Var(x), Term::int(2)),
        sld::unify::unify_one(Term::Var(x), Term::int(1)),
    ]);
    let a_results: Vec<Term> = resolve(&a).map(|p| p.get(x)).collect();
    let b_results: Vec<Term> = resolve(&b).map(|p| p.get(x)).collect();
    assert_ne!(a_results, b_results);
    assert_eq!(a_results, vec![Term::int(1), Term::int(2)]);
    assert_eq!(b_results, vec![Term::int(2), Term::int(1)]);
}

#[test]
#[serial]
fn unify_is_symmetric_in_its_arguments() {
    reset_var_counter();
    let x = fresh_var();
    let forward = unify(vec![(Term::Var(x), Term::atom("t"))]);
    let x2 = fresh_var();
    let backward = unify(vec![(Term::atom("t"), Term::Var(x2))]);
    assert_eq!(resolve(&forward).count(), resolve(&backward).count());
}

#[test]
#[serial]
fn double_negation_matches_a_single_success() {
    reset_var_counter();
    let x = fresh_var();
    let g = unify(vec![(Term::Var(x), Term::atom("t"))]);
    // no(no(g)) re-derives success, but without re-establishing g's own
    // bindings (negation as failure does not commit to a witness).
    let double_negated = no(no(g));
    assert_eq!(resolve(&double_negated).count(), 1);
}
