// The substitution environment: a persistent chain map from Variables to
// Terms.
//
// Modeled directly on Subst(ChainMap) in the original combinator library
// this engine's design was distilled from: each binding pushes one small
// layer on top of the current chain, and abandoning a choice point is simply
// dropping the Rc to a child layer --- the parent chain is untouched and
// needs no explicit "pop".

use std::rc::Rc;

use crate::term::Term;
use crate::variable::Variable;

struct Layer {
    var: Variable,
    term: Term,
    parent: Subst,
}

/// A scoped mapping from [`Variable`] to [`Term`], organized as a stack of
/// single-binding layers.
///
/// `Subst` is cheap to clone (an `Rc` bump) and immutable: [`Subst::bind`]
/// returns a new `Subst` sharing the old one as its parent rather than
/// mutating in place, which is what makes backtracking free — a branch that
/// fails just drops its `Subst` handle.
#[derive(Clone, Default)]
pub struct Subst(Option<Rc<Layer>>);

impl Subst {
    /// An empty substitution with no bindings.
    pub fn empty() -> Subst {
        Subst(None)
    }

    /// Returns a new substitution equal to `self` plus the binding
    /// `v ↦ t`, in a freshly pushed layer. Does not mutate `self`.
    pub fn bind(&self, v: Variable, t: Term) -> Subst {
        Subst(Some(Rc::new(Layer {
            var: v,
            term: t,
            parent: self.clone(),
        })))
    }

    /// Newest-first search through layers for a binding of `v`.
    pub fn lookup(&self, v: Variable) -> Option<&Term> {
        let mut layer = self.0.as_deref();
        while let Some(l) = layer {
            if l.var == v {
                return Some(&l.term);
            }
            layer = l.parent.0.as_deref();
        }
        None
    }

    /// Chases a variable's binding chain one step at a time until a
    /// non-variable or an unbound variable is reached.
    ///
    /// Never descends into compound structure — see [`Subst::smooth`] for
    /// the recursive variant.
    pub fn deref(&self, t: &Term) -> Term {
        let mut current = t.clone();
        loop {
            match &current {
                Term::Var(v) => match self.lookup(*v) {
                    Some(bound) => current = bound.clone(),
                    None => return current,
                },
                _ => return current,
            }
        }
    }

    /// Recursively resolves `t` through the substitution: variables are
    /// chased via [`Subst::deref`], and compound children are `smooth`ed in
    /// turn.
    ///
    /// Terminates because variable chains are acyclic by construction and
    /// compound depth is finite — unless the host has built a cyclic term
    /// via the engine's occurs-check-free unification (a documented, known
    /// limitation: see `unify.rs`).
    pub fn smooth(&self, t: &Term) -> Term {
        match self.deref(t) {
            Term::Compound(tag, items) => {
                let resolved: Vec<Term> = items.iter().map(|item| self.smooth(item)).collect();
                Term::Compound(tag, Rc::from(resolved))
            }
            other => other,
        }
    }

    /// Wraps this substitution in a read-only [`Proxy`] for the host.
    pub fn proxy(&self) -> Proxy {
        Proxy(self.clone())
    }
}

/// An immutable, read-only view over a [`Subst`], the only form of
/// substitution ever exposed outside the engine.
///
/// Looking up a variable returns its deeply resolved ([`Subst::smooth`])
/// term.
pub struct Proxy(Subst);

impl Proxy {
    /// Returns the fully resolved term bound to `v`, or `v` itself
    /// (wrapped back up as a `Term::Var`) if it is unbound.
    pub fn get(&self, v: Variable) -> Term {
        self.0.smooth(&Term::Var(v))
    }

    /// Resolves an arbitrary term (not just a bare variable) through this
    /// proxy's substitution.
    pub fn resolve(&self, t: &Term) -> Term {
        self.0.smooth(t)
    }
}
