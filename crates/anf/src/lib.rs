//! # anf
//!
//! Computing over the Boolean polynomial ring
//! F₂[x₀,…,x_{n-1}] / (x_i² − x_i): every variable is idempotent, a
//! monomial is a bit vector, and a polynomial is its algebraic normal
//! form. The headline capability is the reduced Gröbner basis of an
//! ideal under a chosen monomial order, together with the dimension of
//! the quotient algebra — the solution count of the corresponding
//! Boolean system.
//!
//! ```
//! use anf::prelude::*;
//!
//! // the graph of a 3-bit S-box as an ideal on 6 variables
//! let sbox = Subst::from_table(&[1, 2, 3, 4, 6, 7, 5, 0]);
//! let ideal = sbox.ideal(Grevlex);
//!
//! let mut engine = Buchberger::new(6, Grevlex);
//! engine.update_ideal(&ideal);
//! engine.process();
//! let basis = engine.done();
//!
//! assert!(basis.is_groebner());
//! assert_eq!(basis.quotient_basis_dim().to_u64(), Some(8));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use anf_bits as bits;
pub use anf_func as func;
pub use anf_groebner as groebner;
pub use anf_poly as poly;

/// Convenient imports for the common workflow.
pub mod prelude {
    pub use anf_bits::{BitWord, Nat};
    pub use anf_func::{BoolFunc, DiffKind, Subst};
    pub use anf_groebner::{AcceptAll, Buchberger, Ideal, Validate};
    pub use anf_poly::{
        Alex, Geobucket, Graded, Grevlex, Grlex, Lex, Monom, MonomOrder, MonomSuccessor, Poly,
        ProductLr, ProductRl, Rev,
    };
}
