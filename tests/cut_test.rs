// Scenario 6: cut prunes remaining amb alternatives.

use serial_test::serial;
use sld::combinators::{amb, cut, no, seq};
use sld::resolve;
use sld::term::Term;
use sld::unify::unify_one;
use sld::variable::{fresh_var, reset_var_counter};

#[test]
#[serial]
fn cut_prunes_the_second_alternative() {
    reset_var_counter();
    let x = fresh_var();
    let goal = amb(vec![
        seq(vec![unify_one(Term::Var(x), Term::int(1)), cut()]),
        unify_one(Term::Var(x), Term::int(2)),
    ]);
    let results: Vec<Term> = resolve(&goal).map(|p| p.get(x)).collect();
    assert_eq!(results, vec![Term::int(1)]);
}

#[test]
#[serial]
fn without_cut_both_alternatives_are_produced() {
    reset_var_counter();
    let x = fresh_var();
    let goal = amb(vec![
        unify_one(Term::Var(x), Term::int(1)),
        unify_one(Term::Var(x), Term::int(2)),
    ]);
    let results: Vec<Term> = resolve(&goal).map(|p| p.get(x)).collect();
    assert_eq!(results, vec![Term::int(1), Term::int(2)]);
}

#[test]
#[serial]
fn cut_inside_no_is_contained_by_no_own_choice_point() {
    // A cut used inside the goal passed to `no` must not prune alternatives
    // outside the `no(...)` call — `no`'s own `amb` is the barrier.
    reset_var_counter();
    let x = fresh_var();
    let inner = unify_one(Term::Var(x), Term::atom("fluffy"));
    let outer = amb(vec![
        seq(vec![unify_one(Term::Var(x), Term::atom("bob")), no(inner)]),
        unify_one(Term::Var(x), Term::atom("daisy")),
    ]);
    let results: Vec<Term> = resolve(&outer).map(|p| p.get(x)).collect();
    assert_eq!(results, vec![Term::atom("bob"), Term::atom("daisy")]);
}
