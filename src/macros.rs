//! Convenience macros for building [`Term`](crate::term::Term)s and
//! combining [`Goal`](crate::goal::Goal)s tersely.
//!
//! [atom!](../macro.atom.html) - Creates an atom Term from a string, int,
//! float or bool.<br>
//! [tlist!](../macro.tlist.html) - Creates a list-tagged compound Term.<br>
//! [ttuple!](../macro.ttuple.html) - Creates a tuple-tagged compound
//! Term.<br>
//! [goal_seq!](../macro.goal_seq.html) - Shorthand for
//! [`seq`](crate::combinators::seq) over a list of goals.<br>
//! [goal_amb!](../macro.goal_amb.html) - Shorthand for
//! [`amb`](crate::combinators::amb) over a list of goals.<br>

/// Creates an atom [`Term`](crate::term::Term) from a string literal, an
/// integer, a float, or a bool.
///
/// # Usage
/// ```
/// use sld::atom;
/// use sld::term::Term;
///
/// let a = atom!("socrates");
/// let n = atom!(42);
/// assert_eq!(a, Term::atom("socrates"));
/// assert_eq!(n, Term::int(42));
/// ```
#[macro_export]
macro_rules! atom {
    ($s:literal) => {
        $crate::term::Term::atom_value($s)
    };
}

/// Creates a list-tagged compound [`Term`](crate::term::Term) from a
/// comma-separated sequence of terms.
///
/// # Usage
/// ```
/// use sld::{atom, tlist};
/// use sld::term::Term;
///
/// let l = tlist!(atom!("a"), atom!("b"));
/// assert_eq!(l, Term::list(vec![Term::atom("a"), Term::atom("b")]));
/// ```
#[macro_export]
macro_rules! tlist {
    ($($t:expr),* $(,)?) => {
        $crate::term::Term::list(vec![$($t),*])
    };
}

/// Creates a tuple-tagged compound [`Term`](crate::term::Term) from a
/// comma-separated sequence of terms.
#[macro_export]
macro_rules! ttuple {
    ($($t:expr),* $(,)?) => {
        $crate::term::Term::tuple(vec![$($t),*])
    };
}

/// Shorthand for [`seq`](crate::combinators::seq) over a comma-separated
/// list of goals.
///
/// # Usage
/// ```
/// use sld::{atom, goal_seq};
/// use sld::combinators::unit;
///
/// let g = goal_seq!(unit(), unit());
/// ```
#[macro_export]
macro_rules! goal_seq {
    ($($g:expr),* $(,)?) => {
        $crate::combinators::seq(vec![$($g),*])
    };
}

/// Shorthand for [`amb`](crate::combinators::amb) over a comma-separated
/// list of goals, creating a choice point.
#[macro_export]
macro_rules! goal_amb {
    ($($g:expr),* $(,)?) => {
        $crate::combinators::amb(vec![$($g),*])
    };
}
