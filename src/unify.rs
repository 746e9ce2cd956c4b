// Structural unification: building a Goal from one or more pairs of terms.
//
// Grounded on the _unify/unify/unify_any functions this engine's design was
// distilled from, adapted to this crate's Term representation. Each pair's
// two sides are dereferenced against the substitution live when its goal
// actually runs, not one snapshotted at construction time -- so a later
// pair in a multi-pair unify() sees the bindings the earlier pairs produced.

use crate::combinators::{amb, fail, seq, unit};
use crate::goal::{Goal, Step};
use crate::subst::Subst;
use crate::term::Term;

/// Builds a goal that unifies `a` and `b` against whatever substitution is
/// live when it runs.
///
/// Per the unification rules: equal terms unify trivially; an unbound
/// variable on either side binds to the other; same-tag, same-length
/// compounds unify element-wise; anything else fails. No occurs check is
/// performed — binding a variable to a compound containing it is permitted
/// (a later [`Subst::smooth`] of such a term would not terminate, a known,
/// documented limitation).
pub fn unify_one(a: Term, b: Term) -> Goal {
    Goal::new(move |s: Subst| -> Step {
        let a = s.deref(&a);
        let b = s.deref(&b);
        unify_cases(a, b).apply(s)
    })
}

fn unify_cases(a: Term, b: Term) -> Goal {
    if a == b {
        return unit();
    }
    match (&a, &b) {
        (Term::Var(_), _) => bind_var(a, b),
        (_, Term::Var(_)) => bind_var(b, a),
        _ => match (a.compound_shape(), b.compound_shape()) {
            (Some(shape_a), Some(shape_b)) if shape_a == shape_b => {
                let items_a = a.compound_items().unwrap().to_vec();
                let items_b = b.compound_items().unwrap().to_vec();
                seq(items_a
                    .into_iter()
                    .zip(items_b)
                    .map(|(x, y)| unify_one(x, y))
                    .collect())
            }
            _ => fail(),
        },
    }
}

fn bind_var(var_term: Term, other: Term) -> Goal {
    let v = match var_term {
        Term::Var(v) => v,
        _ => unreachable!("bind_var called with a non-variable"),
    };
    Goal::new(move |s: Subst| -> Step { unit().apply(s.bind(v, other.clone())) })
}

/// Builds a goal that unifies `pairs` in sequence, each pair seeing the
/// bindings produced by the ones before it.
pub fn unify(pairs: Vec<(Term, Term)>) -> Goal {
    seq(pairs.into_iter().map(|(a, b)| unify_one(a, b)).collect())
}

/// Convenience: `amb` over unifying `v` with each of `values` in turn.
pub fn unify_any(v: Term, values: Vec<Term>) -> Goal {
    amb(values.into_iter().map(|value| unify_one(v.clone(), value)).collect())
}
