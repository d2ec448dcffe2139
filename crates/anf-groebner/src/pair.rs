//! Critical pairs of the Buchberger engine.
//!
//! A pair couples either two basis polynomials or a field equation
//! x_v² − x_v with a basis polynomial; the second member is always the
//! newer one. The lcm of the leading monomials is cached and drives the
//! pair order, equality and divisibility tests — for a field-equation
//! pair the cached value is implicitly multiplied by x_v, so such a pair
//! divides another only when the variables coincide.

use anf_poly::{Monom, MonomOrder, Poly};

use crate::slab::{PolyId, PolySlab};

/// The first member of a critical pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairLeft {
    /// The field equation x_v² − x_v.
    Field(usize),
    /// An explicit polynomial.
    Basis(PolyId),
}

/// A pending S-polynomial of the engine.
#[derive(Clone, Debug)]
pub struct CritPair {
    left: PairLeft,
    right: PolyId,
    lm1: Monom,
    lm2: Monom,
    lcm: Monom,
}

impl CritPair {
    /// A pair of two basis polynomials; `p2` is the newer member.
    #[must_use]
    pub fn from_polys<O: MonomOrder>(slab: &PolySlab<O>, p1: PolyId, p2: PolyId) -> Self {
        let lm1 = slab.get(p1).lm().clone();
        let lm2 = slab.get(p2).lm().clone();
        let lcm = Monom::lcm(&lm1, &lm2);
        Self {
            left: PairLeft::Basis(p1),
            right: p2,
            lm1,
            lm2,
            lcm,
        }
    }

    /// A pair of the field equation x_var² − x_var with a basis
    /// polynomial.
    #[must_use]
    pub fn from_field<O: MonomOrder>(var: usize, slab: &PolySlab<O>, p2: PolyId) -> Self {
        let lm2 = slab.get(p2).lm().clone();
        let lm1 = Monom::var(lm2.nvars(), var);
        let lcm = Monom::lcm(&lm1, &lm2);
        Self {
            left: PairLeft::Field(var),
            right: p2,
            lm1,
            lm2,
            lcm,
        }
    }

    /// The first member.
    #[must_use]
    pub fn left(&self) -> PairLeft {
        self.left
    }

    /// The newer member.
    #[must_use]
    pub fn right(&self) -> PolyId {
        self.right
    }

    /// Leading monomial of the first member (x_v for a field pair).
    #[must_use]
    pub fn lm1(&self) -> &Monom {
        &self.lm1
    }

    /// Leading monomial of the second member.
    #[must_use]
    pub fn lm2(&self) -> &Monom {
        &self.lm2
    }

    /// The cached lcm of the leading monomials.
    #[must_use]
    pub fn lcm(&self) -> &Monom {
        &self.lcm
    }

    /// Equality by (field variable, lcm).
    #[must_use]
    pub fn same(&self, other: &CritPair) -> bool {
        self.field_var() == other.field_var() && self.lcm == other.lcm
    }

    /// Divisibility of the cached lcms; a field-equation pair divides
    /// only pairs with the same variable.
    #[must_use]
    pub fn divides(&self, other: &CritPair) -> bool {
        (self.field_var().is_none() || self.field_var() == other.field_var())
            && self.lcm.divides(&other.lcm)
    }

    /// True when the leading monomials are coprime (no coupling).
    #[must_use]
    pub fn is_coprime(&self) -> bool {
        match self.left {
            PairLeft::Field(var) => !self.lm2.test(var),
            PairLeft::Basis(_) => Monom::gcd(&self.lm1, &self.lm2).is_one(),
        }
    }

    /// True for an r-pair: the second leading monomial divides the
    /// first.
    #[must_use]
    pub fn is_r_pair(&self) -> bool {
        self.lm2.divides(&self.lm1)
    }

    fn field_var(&self) -> Option<usize> {
        match self.left {
            PairLeft::Field(var) => Some(var),
            PairLeft::Basis(_) => None,
        }
    }

    /// Forms the S-polynomial of the pair.
    ///
    /// For a field-equation pair this is x_v·f with the trivial part
    /// cancelled whenever the leading monomial already contained x_v.
    #[must_use]
    pub fn s_poly<O: MonomOrder>(&self, slab: &PolySlab<O>) -> Poly<O> {
        let f2 = slab.get(self.right);
        match self.left {
            PairLeft::Basis(p1) => Poly::s_poly(f2, slab.get(p1)),
            PairLeft::Field(var) => {
                let mut spoly = Poly::s_poly_field(var, f2);
                if !spoly.is_empty() && spoly.lm() == f2.lm() {
                    spoly.sym_diff_poly(f2);
                }
                spoly
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anf_poly::Grevlex;

    fn slab_with(texts: &[&str]) -> (PolySlab<Grevlex>, Vec<PolyId>) {
        let mut slab = PolySlab::new();
        let ids = texts
            .iter()
            .map(|t| slab.insert(Poly::parse(4, Grevlex, t).unwrap()))
            .collect();
        (slab, ids)
    }

    #[test]
    fn test_poly_pair_lcm_and_spoly() {
        let (slab, ids) = slab_with(&["x0 x1 + x2", "x1 x3 + x0"]);
        let pair = CritPair::from_polys(&slab, ids[0], ids[1]);
        assert_eq!(*pair.lcm(), Monom::from_vars(4, &[0, 1, 3]));
        assert!(!pair.is_coprime());
        assert!(!pair.is_r_pair());
        let s = pair.s_poly(&slab);
        // x3*(x2) + x0*(x0) = x2 x3 + x0
        assert_eq!(s, Poly::parse(4, Grevlex, "x2 x3 + x0").unwrap());
    }

    #[test]
    fn test_field_pair_spoly() {
        let (slab, ids) = slab_with(&["x0 x1 + x2"]);
        // x0 divides the leading monomial, but x0 x2 overtakes it
        let pair = CritPair::from_field(0, &slab, ids[0]);
        assert!(!pair.is_coprime());
        let s = pair.s_poly(&slab);
        assert_eq!(s, Poly::parse(4, Grevlex, "x0 x2 + x0 x1").unwrap());
    }

    #[test]
    fn test_field_pair_spoly_cancels_trivial_part() {
        let (slab, ids) = slab_with(&["x0 x2 + x0 + x1"]);
        // x0*f keeps the leading monomial x0 x2, so f cancels through
        let pair = CritPair::from_field(0, &slab, ids[0]);
        let s = pair.s_poly(&slab);
        // x0*f = x0 x2 + x0 x1 + x0; adding f leaves x0 x1 + x1
        assert_eq!(s, Poly::parse(4, Grevlex, "x0 x1 + x1").unwrap());
    }

    #[test]
    fn test_field_pair_divides_only_same_variable() {
        let (slab, ids) = slab_with(&["x0 x1 + x2", "x0 x1 x3 + x2"]);
        let f0 = CritPair::from_field(0, &slab, ids[0]);
        let f0_big = CritPair::from_field(0, &slab, ids[1]);
        let f1 = CritPair::from_field(1, &slab, ids[1]);
        assert!(f0.divides(&f0_big));
        assert!(!f0.divides(&f1));
        // a polynomial pair divides a field pair when the lcms divide
        let pp = CritPair::from_polys(&slab, ids[0], ids[1]);
        assert!(pp.divides(&f1) || !pp.lcm().divides(f1.lcm()));
    }

    #[test]
    fn test_r_pair() {
        let (slab, ids) = slab_with(&["x0 x1 x2 + x3", "x0 x1 + x3"]);
        // right is the newer polynomial whose lm divides the older's
        let pair = CritPair::from_polys(&slab, ids[0], ids[1]);
        assert!(pair.is_r_pair());
    }
}
