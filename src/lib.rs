//! # sld
//!
//! `sld` is a small embedded logic-programming resolution engine: syntactic
//! unification, SLD-style depth-first resolution with backtracking,
//! conjunction and disjunction, Prolog-style cut, and negation-as-failure —
//! built as a library of composable goal combinators rather than a
//! standalone language with its own parser and knowledge base.
//!
//! ## Briefly
//!
//! A host program builds [`term::Term`]s programmatically, composes
//! [`goal::Goal`]s out of the combinators in [`combinators`] and
//! [`unify`], then calls [`resolver::resolve`] to lazily enumerate every
//! substitution that satisfies the goal.
//!
//! Unlike a Prolog implementation, there is no clause database, no
//! assert/retract, and no text-format source file: predicates are ordinary
//! Rust functions returning a `Goal`, and recursive predicates are wrapped
//! in [`combinators::predicate`] to defer their own recursive calls until
//! resolution actually reaches them.
//!
//! A fact:
//!
//! ```
//! use sld::combinators::amb;
//! use sld::term::Term;
//! use sld::unify::unify_one;
//!
//! fn human(x: Term) -> sld::goal::Goal {
//!     amb(vec![
//!         unify_one(x.clone(), Term::atom("socrates")),
//!         unify_one(x.clone(), Term::atom("plato")),
//!         unify_one(x, Term::atom("bob")),
//!     ])
//! }
//! ```
//!
//! A query:
//!
//! ```
//! use sld::resolver::resolve;
//! use sld::term::Term;
//! use sld::variable::{fresh_var, reset_var_counter};
//! # use sld::combinators::amb;
//! # use sld::unify::unify_one;
//! # fn human(x: Term) -> sld::goal::Goal {
//! #     amb(vec![
//! #         unify_one(x.clone(), Term::atom("socrates")),
//! #         unify_one(x.clone(), Term::atom("plato")),
//! #         unify_one(x, Term::atom("bob")),
//! #     ])
//! # }
//!
//! reset_var_counter();
//! let x = fresh_var();
//! let names: Vec<Term> = resolve(&human(Term::Var(x))).map(|p| p.get(x)).collect();
//! assert_eq!(names, vec![Term::atom("socrates"), Term::atom("plato"), Term::atom("bob")]);
//! ```
//!
//! ## Folder structure
//!
//! - `src/` — the engine: [`variable`], [`term`], [`subst`], [`goal`],
//!   [`combinators`], [`unify`], [`resolver`], and the [`macros`]
//!   convenience layer.
//! - `tests/` — integration tests, one file per behavior family.
//! - `benches/` — a `criterion` benchmark of deep recursive resolution and
//!   bulk list unification.
//! - `demos/` — a small standalone demo binary exercising a family-tree
//!   predicate set; not part of this crate.
//!
//! ## What this crate deliberately does not do
//!
//! No I/O, no blocking, no timeouts inside the engine. No arithmetic, no
//! occurs check, no constraint propagation, no parallel search, no
//! assert/retract. A host wanting any of those builds them on top, the same
//! way it builds its own `Term` vocabulary on top of [`term::Value`].

pub mod combinators;
pub mod goal;
pub mod macros;
pub mod resolver;
pub mod subst;
pub mod term;
pub mod unify;
pub mod variable;

pub use combinators::{amb, bind, choice, cut, fail, no, predicate, seq, then, unit};
pub use goal::Goal;
pub use resolver::{resolve, Solutions};
pub use subst::{Proxy, Subst};
pub use term::{Tag, Term, Value};
pub use unify::{unify, unify_any, unify_one};
pub use variable::{fresh_var, reset_var_counter, Variable};
