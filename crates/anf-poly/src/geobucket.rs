//! Geobucket accumulators for repeated polynomial addition.
//!
//! A geobucket keeps a polynomial as a list of buckets B₀, B₁, … with
//! geometrically growing capacities |Bₖ| ≤ d^(k+1). Additions land in the
//! smallest bucket that fits and spill forward by XOR-merging, so a long
//! sequence of "add a polynomial, extract the leading monomial" steps runs
//! in time roughly linear in the output size times (d+2)/ln d.
//!
//! Reference: Yan, "The Geobucket Data Structure for Polynomials" (1998).
//!
//! Callers choose the growth factor: 3 when only accumulating, 4 when
//! leading monomials are extracted between additions (division,
//! reduction).

use std::cmp::Ordering;

use crate::monom::Monom;
use crate::order::MonomOrder;
use crate::poly::Poly;

/// A bucket list accumulating one polynomial.
pub struct Geobucket<O: MonomOrder> {
    nvars: usize,
    order: O,
    buckets: Vec<Poly<O>>,
    caps: Vec<usize>,
    d: usize,
}

fn two_muts<T>(v: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (lo, hi) = v.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = v.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

impl<O: MonomOrder> Geobucket<O> {
    /// An empty geobucket with growth factor `d`.
    ///
    /// # Panics
    ///
    /// Panics if `d < 2`.
    #[must_use]
    pub fn new(nvars: usize, order: O, d: usize) -> Self {
        assert!(d >= 2, "growth factor must be at least 2");
        Self {
            nvars,
            buckets: vec![Poly::zero(nvars, order.clone())],
            caps: vec![d],
            order,
            d,
        }
    }

    /// A geobucket seeded with a polynomial, which is drained.
    #[must_use]
    pub fn from_poly(poly: &mut Poly<O>, d: usize) -> Self {
        let mut gb = Self::new(poly.nvars(), poly.order().clone(), d);
        gb.sym_diff_drain(poly);
        gb
    }

    fn grow(&mut self) {
        let last = *self.caps.last().expect("at least one bucket");
        self.buckets
            .push(Poly::zero(self.nvars, self.order.clone()));
        self.caps.push(last * self.d);
    }

    /// Toggles a single monomial.
    pub fn sym_diff(&mut self, m: &Monom) {
        self.buckets[0].sym_diff(m);
        let mut i = 0;
        while self.buckets[0].len() > self.caps[i] {
            if i + 1 == self.caps.len() {
                self.grow();
            }
            i += 1;
            let (first, other) = two_muts(&mut self.buckets, 0, i);
            first.sym_diff_drain(other);
        }
        if i != 0 {
            self.buckets.swap(0, i);
        }
    }

    /// Adds a consistent polynomial over F₂, draining its terms.
    pub fn sym_diff_drain(&mut self, poly: &mut Poly<O>) {
        debug_assert!(self.buckets[0].is_consistent(poly));
        let mut i = 0;
        while poly.len() > self.caps[i] {
            i += 1;
            if i == self.caps.len() {
                self.grow();
            }
        }
        let j = i;
        self.buckets[j].sym_diff_drain(poly);
        while self.buckets[j].len() > self.caps[i] {
            if i + 1 == self.caps.len() {
                self.grow();
            }
            i += 1;
            let (dst, src) = two_muts(&mut self.buckets, j, i);
            dst.sym_diff_drain(src);
        }
        if i != j {
            self.buckets.swap(i, j);
        }
    }

    /// Removes and returns the leading monomial of the held polynomial,
    /// cancelling equal leading monomials across buckets on the way.
    ///
    /// Returns `None` when the held polynomial is zero.
    pub fn pop_lm(&mut self) -> Option<Monom> {
        let mut best: Option<(usize, Monom)> = None;
        let mut j = self.buckets.len();
        while j > 0 {
            j -= 1;
            if self.buckets[j].is_empty() {
                continue;
            }
            let cmp = match &best {
                None => Ordering::Greater,
                Some((_, lm)) => self.order.compare(self.buckets[j].lm(), lm),
            };
            match cmp {
                Ordering::Greater => best = Some((j, self.buckets[j].lm().clone())),
                Ordering::Equal => {
                    let (i, _) = best.take().expect("candidate present on equality");
                    self.buckets[i].pop_lm();
                    self.buckets[j].pop_lm();
                    j = self.buckets.len();
                }
                Ordering::Less => {}
            }
        }
        let (i, lm) = best?;
        self.buckets[i].pop_lm();
        Some(lm)
    }

    /// Collects the held polynomial into `out`, emptying the buckets.
    pub fn mount(&mut self, out: &mut Poly<O>) {
        out.clear();
        for bucket in &mut self.buckets {
            out.sym_diff_drain(bucket);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Grlex;

    fn p(s: &str) -> Poly<Grlex> {
        Poly::parse(6, Grlex, s).unwrap()
    }

    #[test]
    fn test_accumulates_like_plain_addition() {
        let parts = ["x0 + x1", "x1 + x2 x3", "x0 x1 + x2 x3", "1 + x0"];
        let mut gb = Geobucket::new(6, Grlex, 3);
        let mut direct = Poly::zero(6, Grlex);
        for s in parts {
            let mut part = p(s);
            direct.sym_diff_poly(&part);
            gb.sym_diff_drain(&mut part);
        }
        let mut mounted = Poly::zero(6, Grlex);
        gb.mount(&mut mounted);
        assert_eq!(mounted, direct);
    }

    #[test]
    fn test_pop_lm_streams_in_order() {
        let mut gb = Geobucket::new(6, Grlex, 4);
        let mut total = Poly::zero(6, Grlex);
        for s in ["x0 x1 x2 + x3", "x3 + x4", "x0 + x1 + x2"] {
            let mut part = p(s);
            total.sym_diff_poly(&part);
            gb.sym_diff_drain(&mut part);
        }
        let mut popped = Vec::new();
        while let Some(lm) = gb.pop_lm() {
            popped.push(lm);
        }
        let expect: Vec<_> = total.terms().to_vec();
        assert_eq!(popped, expect);
    }

    #[test]
    fn test_cross_bucket_cancellation() {
        let mut gb = Geobucket::new(6, Grlex, 2);
        // force the same monomials into different buckets
        let mut a = p("x0 x1 x2 x3 + x0 + x1 + x2 + x3 + 1");
        gb.sym_diff_drain(&mut a);
        let mut b = p("x0 x1 x2 x3");
        gb.sym_diff_drain(&mut b);
        // the top monomial cancels; the next one must surface
        let lm = gb.pop_lm().unwrap();
        assert_eq!(lm, Monom::var(6, 3));
    }

    #[test]
    fn test_single_monomials() {
        let mut gb = Geobucket::new(6, Grlex, 3);
        for i in 0..6 {
            gb.sym_diff(&Monom::var(6, i));
        }
        for i in 0..6 {
            if i % 2 == 0 {
                gb.sym_diff(&Monom::var(6, i));
            }
        }
        let mut out = Poly::zero(6, Grlex);
        gb.mount(&mut out);
        assert_eq!(out, p("x1 + x3 + x5"));
    }

    #[test]
    fn test_bucket_bound_holds() {
        let mut gb = Geobucket::new(6, Grlex, 2);
        let mut poly = Poly::zero(6, Grlex);
        anf_bits::env::seed(11);
        poly.randomize();
        let total = poly.clone();
        gb.sym_diff_drain(&mut poly);
        for (k, bucket) in gb.buckets.iter().enumerate() {
            assert!(bucket.len() <= gb.caps[k]);
        }
        let mut out = Poly::zero(6, Grlex);
        gb.mount(&mut out);
        assert_eq!(out, total);
    }
}
