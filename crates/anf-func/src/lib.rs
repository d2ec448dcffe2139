//! # anf-func
//!
//! Boolean functions and substitutions on top of the Boolean polynomial
//! core: truth tables, algebraic normal forms, Walsh–Hadamard spectra,
//! and the translation of an S-box into the ideal describing its graph.
//!
//! This crate is a consumer of the Gröbner engine, not part of it: it
//! turns combinatorial objects into polynomial systems and back.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod boolfunc;
pub mod subst;

pub use boolfunc::BoolFunc;
pub use subst::{DiffKind, Subst};
