// The combinator library: unit, fail, cut, bind, then, seq, choice, amb, no,
// predicate.
//
// Translated continuation-for-continuation from the three-continuation
// combinator library this engine's design was distilled from. Every
// continuation constructed here (the "glue" closures passed as on_success /
// on_failure below) returns Bounce::Step(thunk) rather than doing its work
// inline, so that a long chain of backtracking steps never grows the native
// call stack -- only the trampoline's own loop does.

use std::rc::Rc;

use crate::goal::{Bounce, Failure, Goal, Step, Success};
use crate::subst::Subst;

/// Succeeds once with `s`, leaving ordinary backtracking (`n`) as the path
/// to further solutions.
///
/// Left/right identity of [`seq`] (testable properties 1, 2, 8).
pub fn unit() -> Goal {
    Goal::new(|s: Subst| -> Step { Rc::new(move |y: Success, n: Failure, _e: Failure| y(s.clone(), n)) })
}

/// Never succeeds; immediately backtracks.
///
/// Left zero of [`seq`], right identity of [`amb`]'s underlying `choice`
/// fold (testable properties 4, 5).
pub fn fail() -> Goal {
    Goal::new(|_s: Subst| -> Step { Rc::new(move |_y: Success, n: Failure, _e: Failure| n()) })
}

/// Succeeds once with `s`, but commits to this branch: installs the current
/// escape continuation as the new backtracking path, so that any subsequent
/// `fail` on this branch prunes past the nearest enclosing [`amb`] rather
/// than trying its remaining alternatives.
pub fn cut() -> Goal {
    Goal::new(|s: Subst| -> Step { Rc::new(move |y: Success, _n: Failure, e: Failure| y(s.clone(), e)) })
}

/// Applies `mf` to every solution `ma` produces, threading backtracking and
/// escape paths through unchanged.
pub fn bind(ma: Step, mf: Goal) -> Step {
    Rc::new(move |y: Success, n: Failure, e: Failure| {
        let mf = mf.clone();
        let y2 = y.clone();
        let e2 = e.clone();
        let on_success: Success = Rc::new(move |s: Subst, b: Failure| {
            let mf = mf.clone();
            let y2 = y2.clone();
            let e2 = e2.clone();
            Bounce::Step(Box::new(move || mf.apply(s)(y2, b, e2)))
        });
        ma(on_success, n, e)
    })
}

/// Runs `g1`, then `g2` against every solution of `g1`.
pub fn then(g1: Goal, g2: Goal) -> Goal {
    Goal::new(move |s: Subst| -> Step { bind(g1.apply(s), g2.clone()) })
}

/// Runs a sequence of goals left to right, each seeing the bindings
/// produced by its predecessors. The empty sequence is [`unit`].
pub fn seq(goals: Vec<Goal>) -> Goal {
    goals.into_iter().fold(unit(), then)
}

/// Succeeds if either `g1` or `g2` succeeds; offers `g1`'s solutions first.
pub fn choice(g1: Goal, g2: Goal) -> Goal {
    Goal::new(move |s: Subst| -> Step {
        let g1 = g1.clone();
        let g2 = g2.clone();
        let s2 = s.clone();
        Rc::new(move |y: Success, n: Failure, e: Failure| {
            let g2 = g2.clone();
            let s2 = s2.clone();
            let y2 = y.clone();
            let n2 = n.clone();
            let e2 = e.clone();
            let on_failure: Failure = Rc::new(move || {
                let g2 = g2.clone();
                let s2 = s2.clone();
                let y2 = y2.clone();
                let n2 = n2.clone();
                let e2 = e2.clone();
                Bounce::Step(Box::new(move || g2.apply(s2)(y2, n2, e2)))
            });
            g1.apply(s.clone())(y, on_failure, e)
        })
    })
}

/// Explores `g1`, `g2`, … in order, creating a choice point: a `cut` inside
/// any branch prunes the remaining, not-yet-tried branches. The empty
/// sequence is [`fail`].
pub fn amb(goals: Vec<Goal>) -> Goal {
    let joined = goals.into_iter().fold(fail(), choice);
    Goal::new(move |s: Subst| -> Step {
        let joined = joined.clone();
        Rc::new(move |y: Success, n: Failure, _e: Failure| {
            // The failure path becomes the pruning target for any cut
            // inside the branches: joined is run with n standing in for
            // both backtracking and escape.
            joined.apply(s.clone())(y, n.clone(), n)
        })
    })
}

/// Negation as failure: succeeds once, with no new bindings, iff `g` has no
/// solution; fails iff `g` has at least one.
///
/// `amb`'s own choice point is what contains a `cut` inside `g` to this
/// `no(g)` — it does not prune alternatives outside it.
pub fn no(g: Goal) -> Goal {
    amb(vec![seq(vec![g, cut(), fail()]), unit()])
}

/// Defers evaluation of a goal-returning closure until it is applied to a
/// substitution.
///
/// Necessary for recursive predicates (e.g. a family-tree "descendant"
/// relation) that would otherwise recurse at goal-construction time, before
/// resolution even starts, and overflow the stack. The host closes over a
/// predicate's own arguments in a `move` closure at the call site:
///
/// ```
/// use sld::combinators::{amb, predicate, seq};
/// use sld::term::Term;
/// use sld::unify::unify_one;
/// use sld::variable::fresh_var;
///
/// fn descendant(a: Term, c: Term) -> sld::goal::Goal {
///     predicate(move || {
///         let b = Term::Var(fresh_var());
///         amb(vec![
///             unify_one(a.clone(), c.clone()),
///             seq(vec![unify_one(a.clone(), b.clone()), descendant(b, c.clone())]),
///         ])
///     })
/// }
/// ```
pub fn predicate(f: impl Fn() -> Goal + 'static) -> Goal {
    Goal::new(move |s: Subst| -> Step { f().apply(s) })
}
