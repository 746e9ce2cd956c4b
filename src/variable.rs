// Logic variables: opaque, globally unique handles bound to terms during resolution.
//
// Identity is the only property a Variable carries; it is never mutated and
// never rebound. The counter backing fresh_var() is atomic so that hosts may
// construct terms from more than one thread, per the concurrency model: the
// counter is the one piece of process-wide state the engine keeps, and it
// must never hand out two variables with the same id.

use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_VAR_ID: AtomicUsize = AtomicUsize::new(0);

/// A unique, opaque placeholder that may be bound to a [`crate::term::Term`]
/// during resolution.
///
/// Two variables are the same variable iff their ids are equal. Variables
/// carry no binding themselves; bindings live in a [`crate::subst::Subst`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(pub(crate) usize);

impl Variable {
    /// Returns this variable's globally unique id.
    pub fn id(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_G{}", self.0)
    }
}

/// Creates a new [`Variable`] with an id never previously issued by this
/// process (barring a prior [`reset_var_counter`] call).
pub fn fresh_var() -> Variable {
    Variable(NEXT_VAR_ID.fetch_add(1, Ordering::Relaxed))
}

/// Resets the global variable-id counter to zero.
///
/// Test-only utility: resolution results that print variable ids (as the
/// scenarios in this crate's test suite do) are only deterministic if every
/// test starts from a known counter value. Never call this from library code
/// that shares a process with other resolution in progress.
pub fn reset_var_counter() {
    NEXT_VAR_ID.store(0, Ordering::Relaxed);
}
