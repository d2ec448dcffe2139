//! # anf-poly
//!
//! Polynomials over the Boolean ring F₂[x₀,…,x_{n-1}] / (x_i² − x_i).
//!
//! Every variable is idempotent, so a monomial is just the set of
//! variables it contains — a [`Monom`] is a bit vector — and a polynomial
//! is a XOR-set of distinct monomials kept sorted under a chosen
//! [`MonomOrder`]. The [`Geobucket`] accumulator makes the
//! "extract leading term, subtract a multiple of a divisor" loops of
//! division and reduction run in near-linear time.
//!
//! Provided orders: [`Lex`], [`Grlex`], [`Grevlex`], the matrix order
//! [`Alex`], and the combinators [`Rev`], [`Graded`], [`ProductLr`] and
//! [`ProductRl`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod geobucket;
pub mod monom;
pub mod order;
pub mod parse;
pub mod poly;

mod proptests;

pub use geobucket::Geobucket;
pub use monom::Monom;
pub use order::{
    Alex, Graded, Grevlex, Grlex, Lex, MonomOrder, MonomSuccessor, ProductLr, ProductRl, Rev,
};
pub use parse::ParseError;
pub use poly::{Poly, ReduceError};
