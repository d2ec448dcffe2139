//! # anf-groebner
//!
//! Ideals of the Boolean polynomial ring and a Buchberger engine for
//! their reduced Gröbner bases.
//!
//! The engine treats the field equations x_i² − x_i implicitly through
//! dedicated critical pairs, prunes the pair queue with the
//! Gebauer–Möller criteria A, B and C plus Buchberger's first criterion,
//! and applies the r-criterion that exiles reducible basis elements into
//! a reserve list.
//!
//! ```
//! use anf_groebner::{Buchberger, Ideal};
//! use anf_poly::Grevlex;
//!
//! let ideal = Ideal::parse(2, Grevlex, "{ x0 x1 + x0 }").unwrap();
//! let mut engine = Buchberger::new(2, Grevlex);
//! engine.update_ideal(&ideal);
//! engine.process();
//! let basis = engine.done();
//! assert!(basis.is_groebner());
//! assert_eq!(basis.quotient_basis_dim().to_u64(), Some(3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod engine;
pub mod ideal;
pub mod pair;
pub mod slab;

pub use engine::{AcceptAll, Buchberger, Stats, Validate};
pub use ideal::Ideal;
pub use pair::CritPair;
pub use slab::{PolyId, PolySlab};
