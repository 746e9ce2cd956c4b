// The three-continuation trampolined engine core.
//
// A Goal is a function from a substitution to a Step: something that, given
// a success continuation, a failure (backtracking) continuation, and an
// escape (cut) continuation, drives the search and eventually reports either
// a solution or exhaustion.
//
// The engine never recurses synchronously across a backtracking step:
// continuations constructed by the combinators in combinators.rs return a
// deferred Bounce::Step(thunk) rather than performing the next step inline,
// and the trampoline in resolver.rs repeatedly unwraps these thunks. This
// bounds native stack growth to the depth of a single goal's own structure,
// not to the depth of the search (needed for predicates that recurse, like a
// family-tree "descendant" relation).

use std::rc::Rc;

use crate::subst::Subst;

/// Deferred work: a computation that, when run, produces the next
/// [`Bounce`].
pub type Thunk = Box<dyn FnOnce() -> Bounce>;

/// The result of running one step of resolution.
pub enum Bounce {
    /// More work remains; the driver must call the thunk to continue.
    Step(Thunk),
    /// A solution was found: `Subst` is the satisfying substitution, and the
    /// `Failure` continuation resumes the search for further solutions.
    Emit(Subst, Failure),
    /// The search is exhausted; there are no more solutions.
    Stop,
}

/// Called with a successful substitution and the failure continuation that
/// resumes the search past it.
pub type Success = Rc<dyn Fn(Subst, Failure) -> Bounce>;

/// Called to report that the current branch has no (further) solutions.
/// Triggers ordinary backtracking.
pub type Failure = Rc<dyn Fn() -> Bounce>;

/// A goal applied to a substitution, awaiting its three continuations.
pub type Step = Rc<dyn Fn(Success, Failure, Failure) -> Bounce>;

/// A composable logical condition: a function from a substitution to a
/// [`Step`].
///
/// Goals are immutable values and may be freely cloned/shared (cloning is an
/// `Rc` bump).
#[derive(Clone)]
pub struct Goal(Rc<dyn Fn(Subst) -> Step>);

impl Goal {
    /// Builds a goal from its underlying substitution-to-step function.
    pub fn new(f: impl Fn(Subst) -> Step + 'static) -> Goal {
        Goal(Rc::new(f))
    }

    /// Applies this goal to a substitution, producing the [`Step`] that
    /// drives resolution from there.
    pub fn apply(&self, s: Subst) -> Step {
        (self.0)(s)
    }
}

/// The leaf success continuation: reports a solution upstream to the
/// driver, remembering `resume` as the path to further solutions.
pub fn success_leaf() -> Success {
    Rc::new(|s: Subst, resume: Failure| Bounce::Emit(s, resume))
}

/// The leaf failure continuation: signals that the whole search is
/// exhausted.
pub fn failure_leaf() -> Failure {
    Rc::new(|| Bounce::Stop)
}
