//! A small family-tree / mortality demo for the `sld` resolution engine.
//!
//! Not part of the library crate (see `sld`'s own crate docs for the
//! engine itself) — this is a standalone binary showing how a host wires
//! up `amb`, `seq`, `predicate` and `no` into recursive predicates, the
//! same way `descendant`/`mortal` are built in the original combinator
//! library this engine's design comes from.

use sld::combinators::{amb, no, predicate, seq};
use sld::resolve;
use sld::term::Term;
use sld::unify::{unify, unify_any};
use sld::variable::fresh_var;
use sld::Goal;

/// Socrates, Plato and Archimedes are human.
fn human(a: Term) -> Goal {
    unify_any(
        a,
        vec![
            Term::atom("socrates"),
            Term::atom("plato"),
            Term::atom("archimedes"),
        ],
    )
}

/// Fluffy, Daisy and Fifi are dogs.
fn dog(a: Term) -> Goal {
    unify_any(
        a,
        vec![Term::atom("fluffy"), Term::atom("daisy"), Term::atom("fifi")],
    )
}

/// `a` is a child of `b`.
fn child(a: Term, b: Term) -> Goal {
    amb(vec![
        unify(vec![(a.clone(), Term::atom("jim")), (b.clone(), Term::atom("bob"))]),
        unify(vec![(a.clone(), Term::atom("joe")), (b.clone(), Term::atom("bob"))]),
        unify(vec![(a.clone(), Term::atom("ian")), (b.clone(), Term::atom("jim"))]),
        unify(vec![(a.clone(), Term::atom("fifi")), (b.clone(), Term::atom("fluffy"))]),
        unify(vec![(a, Term::atom("fluffy")), (b, Term::atom("daisy"))]),
    ])
}

/// `a` is a descendant of `c`: either a direct child, or a child of some
/// descendant of `c`. Wrapped in `predicate` so the recursive call is
/// deferred until resolution actually reaches it, not expanded eagerly at
/// goal-construction time.
fn descendant(a: Term, c: Term) -> Goal {
    predicate(move || {
        let b = Term::Var(fresh_var());
        amb(vec![
            child(a.clone(), c.clone()),
            seq(vec![child(a.clone(), b.clone()), descendant(b, c.clone())]),
        ])
    })
}

/// `a` is mortal iff it is human, a dog, or descends from something mortal.
fn mortal(a: Term) -> Goal {
    predicate(move || {
        let b = Term::Var(fresh_var());
        amb(vec![
            human(a.clone()),
            dog(a.clone()),
            seq(vec![descendant(a.clone(), b.clone()), mortal(b)]),
        ])
    })
}

fn main() {
    let x = Term::Var(fresh_var());
    let y = Term::Var(fresh_var());

    for proxy in resolve(&child(x.clone(), y.clone())) {
        println!("{} is a descendant of {}.", proxy.resolve(&x), proxy.resolve(&y));
    }
    println!();

    for proxy in resolve(&seq(vec![mortal(x.clone()), no(dog(x.clone()))])) {
        println!("{} is mortal and no dog.", proxy.resolve(&x));
    }
}
