//! Ideals as normalised systems of polynomials.
//!
//! An [`Ideal`] holds distinct nonzero polynomials sorted strictly
//! increasing under the polynomial order induced by the ambient monomial
//! order (leading term first). Besides the set operations it provides
//! normal-form reduction with a geobucket dividend, self-reduction, the
//! Gröbner-basis test and the quotient-algebra basis with its dimension.

use std::cmp::Ordering;
use std::fmt;

use anf_bits::Nat;
use anf_poly::{Geobucket, Monom, MonomOrder, ParseError, Poly, ReduceError};
use rustc_hash::FxHashSet;

/// Normal form of `poly` against divisors sorted increasing, leading
/// term first. With `minimize` the loop stops at the first irreducible
/// leading monomial instead of scanning the whole dividend.
pub(crate) fn reduce_with<O: MonomOrder>(
    divisors: &[&Poly<O>],
    poly: &mut Poly<O>,
    minimize: bool,
) -> bool {
    let nvars = poly.nvars();
    let order = poly.order().clone();
    // leading terms are extracted repeatedly, so growth factor 4
    let mut gb = Geobucket::from_poly(poly, 4);
    let mut changed = false;
    let mut remainder = Vec::new();
    'outer: while let Some(mut lm) = gb.pop_lm() {
        for d in divisors {
            // divisors grow with their leading monomials, so once one
            // exceeds lm none of the rest can divide it
            if order.compare(d.lm(), &lm) == Ordering::Greater {
                break;
            }
            if d.lm().divides(&lm) {
                changed = true;
                let mut multiple = (*d).clone();
                multiple.pop_lm();
                lm.div_assign(d.lm());
                multiple.mul_monom(&lm);
                gb.sym_diff_drain(&mut multiple);
                continue 'outer;
            }
        }
        if minimize {
            gb.sym_diff(&lm);
            break;
        }
        remainder.push(lm);
    }
    if minimize {
        gb.mount(poly);
    } else {
        // leading monomials stream out strictly decreasing
        *poly = Poly::from_terms(nvars, order, remainder);
    }
    changed
}

/// A normalised system of generators of an ideal.
#[derive(Clone, Debug)]
pub struct Ideal<O: MonomOrder> {
    nvars: usize,
    order: O,
    polys: Vec<Poly<O>>,
}

impl<O: MonomOrder> Ideal<O> {
    /// The empty system.
    #[must_use]
    pub fn new(nvars: usize, order: O) -> Self {
        Self {
            nvars,
            order,
            polys: Vec::new(),
        }
    }

    /// Builds a system from arbitrary polynomials.
    #[must_use]
    pub fn from_polys(nvars: usize, order: O, polys: Vec<Poly<O>>) -> Self {
        let mut ideal = Self::new(nvars, order);
        for poly in &polys {
            if !poly.is_empty() {
                ideal.insert(poly);
            }
        }
        ideal
    }

    /// Number of variables of the ambient ring.
    #[must_use]
    pub fn nvars(&self) -> usize {
        self.nvars
    }

    /// The ambient monomial order.
    #[must_use]
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Replaces the order everywhere and re-sorts.
    pub fn set_order(&mut self, order: O) {
        if self.order != order {
            for poly in &mut self.polys {
                poly.set_order(order.clone());
            }
            self.order = order;
            self.polys.sort_by(Poly::compare);
        }
    }

    /// Number of polynomials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// True for the empty system.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// The polynomials, strictly increasing.
    #[must_use]
    pub fn polys(&self) -> &[Poly<O>] {
        &self.polys
    }

    /// The polynomial at `idx`.
    #[must_use]
    pub fn get(&self, idx: usize) -> &Poly<O> {
        &self.polys[idx]
    }

    /// Minimum degree over the members, −1 for the empty system.
    #[must_use]
    pub fn min_deg(&self) -> i32 {
        self.polys.iter().map(Poly::deg).min().unwrap_or(-1)
    }

    /// Maximum degree over the members, −1 for the empty system.
    #[must_use]
    pub fn max_deg(&self) -> i32 {
        self.polys.iter().map(Poly::deg).max().unwrap_or(-1)
    }

    fn search(&self, poly: &Poly<O>) -> Result<usize, usize> {
        self.polys.binary_search_by(|p| p.compare(poly))
    }

    /// Position of `poly`, or the insertion point keeping the system
    /// sorted; order parameters are reconciled first if they differ.
    pub fn find(&self, poly: &Poly<O>) -> Result<usize, usize> {
        if self.order == *poly.order() {
            self.search(poly)
        } else {
            let mut tmp = poly.clone();
            tmp.set_order(self.order.clone());
            self.search(&tmp)
        }
    }

    /// Membership probe.
    #[must_use]
    pub fn contains(&self, poly: &Poly<O>) -> bool {
        self.find(poly).is_ok()
    }

    /// Inserts a nonzero polynomial; a no-op when already present.
    ///
    /// Returns the polynomial's position.
    ///
    /// # Panics
    ///
    /// Panics on the zero polynomial.
    pub fn insert(&mut self, poly: &Poly<O>) -> usize {
        assert!(!poly.is_empty(), "the zero polynomial never generates");
        let mut poly = poly.clone();
        poly.set_order(self.order.clone());
        match self.search(&poly) {
            Ok(pos) => pos,
            Err(pos) => {
                self.polys.insert(pos, poly);
                pos
            }
        }
    }

    /// Inserts every polynomial of another system.
    pub fn insert_ideal(&mut self, other: &Ideal<O>) {
        for poly in &other.polys {
            self.insert(poly);
        }
    }

    /// Removes the polynomial if present.
    pub fn remove(&mut self, poly: &Poly<O>) {
        if let Ok(pos) = self.find(poly) {
            self.polys.remove(pos);
        }
    }

    /// Removes the polynomial at `idx`.
    pub fn remove_at(&mut self, idx: usize) -> Poly<O> {
        self.polys.remove(idx)
    }

    /// Re-sorts, removes duplicates and drops zero polynomials.
    pub fn normalize(&mut self) {
        self.polys.sort_by(Poly::compare);
        self.polys.dedup_by(|a, b| a == b);
        self.polys.retain(|p| !p.is_empty());
    }

    /// True if the members are distinct, nonzero and strictly
    /// increasing.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        if self.polys.iter().any(Poly::is_empty) {
            return false;
        }
        self.polys
            .windows(2)
            .all(|w| w[0].compare(&w[1]) == Ordering::Less)
    }

    /// The product of every variable occurring in the system.
    #[must_use]
    pub fn gather_vars(&self) -> Monom {
        let mut vars = Monom::one(self.nvars);
        for poly in &self.polys {
            for t in poly.terms() {
                vars.mul_assign(t);
            }
        }
        vars
    }

    /// All monomials of the system collected into one polynomial.
    #[must_use]
    pub fn gather_mons(&self) -> Poly<O> {
        let mut mons = Poly::zero(self.nvars, self.order.clone());
        for poly in &self.polys {
            mons.union_poly(poly);
        }
        mons
    }

    /// The leading monomials of the system.
    #[must_use]
    pub fn gather_lms(&self) -> Poly<O> {
        let mut mons = Poly::zero(self.nvars, self.order.clone());
        for poly in &self.polys {
            mons.union(poly.lm());
        }
        mons
    }

    /// The minimal leading monomials: those not divisible by any other
    /// leading monomial.
    #[must_use]
    pub fn gather_min_lms(&self) -> Poly<O> {
        let lms = self.gather_lms();
        let terms = lms.terms();
        let mut keep = Vec::new();
        for (i, m) in terms.iter().enumerate() {
            // a proper divisor is strictly smaller, hence further right
            if !terms[i + 1..].iter().any(|t| t.divides(m)) {
                keep.push(m.clone());
            }
        }
        Poly::from_terms(self.nvars, self.order.clone(), keep)
    }

    /// The largest leading monomial over the members.
    ///
    /// # Panics
    ///
    /// Panics on the empty system.
    #[must_use]
    pub fn lm(&self) -> &Monom {
        assert!(!self.is_empty(), "empty system has no leading monomial");
        let mut best = self.polys[0].lm();
        for poly in &self.polys[1..] {
            if self.order.greater(poly.lm(), best) {
                best = poly.lm();
            }
        }
        best
    }

    /// Normal form of `poly` modulo the system: each monomial divisible
    /// by some leading monomial is eliminated, smallest divisors tried
    /// first.
    ///
    /// Returns `true` iff `poly` changed.
    ///
    /// # Errors
    ///
    /// [`ReduceError::EmptyIdeal`] on the empty system.
    pub fn reduce(&self, poly: &mut Poly<O>) -> Result<bool, ReduceError> {
        if self.is_empty() {
            return Err(ReduceError::EmptyIdeal);
        }
        let divisors: Vec<&Poly<O>> = self.polys.iter().collect();
        Ok(reduce_with(&divisors, poly, false))
    }

    /// Like [`reduce`](Self::reduce) but stops as soon as the leading
    /// monomial of `poly` is irreducible.
    ///
    /// # Errors
    ///
    /// [`ReduceError::EmptyIdeal`] on the empty system.
    pub fn minimize(&self, poly: &mut Poly<O>) -> Result<bool, ReduceError> {
        if self.is_empty() {
            return Err(ReduceError::EmptyIdeal);
        }
        let divisors: Vec<&Poly<O>> = self.polys.iter().collect();
        Ok(reduce_with(&divisors, poly, true))
    }

    /// Reduces the member at `idx` by all the others, in place.
    ///
    /// The caller must afterwards drop the member if it became zero, or
    /// relocate it to restore the sorted invariant.
    pub fn reduce_at(&mut self, idx: usize) -> bool {
        self.reduce_member(idx, false)
    }

    /// Minimizes the member at `idx` by all the others, in place.
    pub fn minimize_at(&mut self, idx: usize) -> bool {
        self.reduce_member(idx, true)
    }

    fn reduce_member(&mut self, idx: usize, minimize: bool) -> bool {
        let mut poly = std::mem::replace(
            &mut self.polys[idx],
            Poly::zero(self.nvars, self.order.clone()),
        );
        let divisors: Vec<&Poly<O>> = self
            .polys
            .iter()
            .enumerate()
            .filter(|(i, p)| *i != idx && !p.is_empty())
            .map(|(_, p)| p)
            .collect();
        let changed = reduce_with(&divisors, &mut poly, minimize);
        self.polys[idx] = poly;
        changed
    }

    fn relocate(&mut self, idx: usize) {
        let poly = self.polys.remove(idx);
        let at = match self.search(&poly) {
            Ok(i) | Err(i) => i,
        };
        self.polys.insert(at, poly);
    }

    /// Replaces every member by its normal form modulo the others until
    /// nothing changes; zero forms are dropped.
    pub fn self_reduce(&mut self) {
        self.run_to_fixpoint(false);
    }

    /// Minimizes every member modulo the others until nothing changes.
    pub fn self_minimize(&mut self) {
        self.run_to_fixpoint(true);
    }

    fn run_to_fixpoint(&mut self, minimize: bool) {
        debug_assert!(self.is_normalized());
        loop {
            let mut changed = false;
            let mut pos = self.polys.len();
            while pos > 0 {
                pos -= 1;
                if self.reduce_member(pos, minimize) {
                    changed = true;
                    if self.polys[pos].is_empty() {
                        self.polys.remove(pos);
                    } else {
                        self.relocate(pos);
                    }
                }
            }
            if !changed {
                break;
            }
        }
    }

    /// Substitutes a polynomial for the variable `var` in every member.
    pub fn replace(&mut self, var: usize, replacement: &Poly<O>) {
        for poly in &mut self.polys {
            poly.replace(var, replacement);
        }
        self.normalize();
    }

    /// Renames the variable `var` to `var2` in every member.
    pub fn replace_var(&mut self, var: usize, var2: usize) {
        for poly in &mut self.polys {
            poly.replace_var(var, var2);
        }
        self.normalize();
    }

    /// Specialises the variable `var` to a constant in every member.
    pub fn assign_var(&mut self, var: usize, val: bool) {
        for poly in &mut self.polys {
            poly.assign_var(var, val);
        }
        self.normalize();
    }

    /// The Gröbner-basis test: every S-polynomial of two distinct
    /// members with coupled leading monomials, and of a member with a
    /// field equation of one of its leading variables, reduces to zero.
    #[must_use]
    pub fn is_groebner(&self) -> bool {
        let divisors: Vec<&Poly<O>> = self.polys.iter().collect();
        for (i, f) in self.polys.iter().enumerate().rev() {
            for var in 0..self.nvars {
                if f.lm().test(var) {
                    // x_var * f is f plus the S-polynomial of the pair
                    let mut spoly = Poly::s_poly_field(var, f);
                    reduce_with(&divisors, &mut spoly, false);
                    if !spoly.is_empty() {
                        return false;
                    }
                }
            }
            for g in self.polys[..i].iter().rev() {
                if !f.lm().is_coprime(g.lm()) {
                    let mut spoly = Poly::s_poly(f, g);
                    reduce_with(&divisors, &mut spoly, false);
                    if !spoly.is_empty() {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// The monomials not divisible by any leading monomial of the
    /// system, restricted to the variables that actually occur.
    ///
    /// When the system is a Gröbner basis this is an F₂-basis of the
    /// quotient algebra.
    #[must_use]
    pub fn quotient_basis(&self) -> Poly<O> {
        let mut qb = Poly::zero(self.nvars, self.order.clone());
        if self.is_empty() {
            return qb;
        }
        let vars = self.gather_vars();
        if vars.deg() == 0 {
            return qb;
        }
        let mons = self.gather_min_lms();
        let mut tosee = Poly::from_monom(self.nvars, self.order.clone(), &Monom::one(self.nvars));
        let mut seen: FxHashSet<Monom> = FxHashSet::default();
        seen.insert(Monom::one(self.nvars));
        while !tosee.is_empty() {
            // smallest queued monomial first
            let mon = tosee.terms()[tosee.len() - 1].clone();
            tosee.diff(&mon);
            if mons.terms().iter().any(|lm| lm.divides(&mon)) {
                continue;
            }
            qb.union(&mon);
            for var in 0..self.nvars {
                if vars.test(var) && !mon.test(var) {
                    let mut next = mon.clone();
                    next.set(var, true);
                    if seen.insert(next.clone()) {
                        tosee.union(&next);
                    }
                }
            }
        }
        qb
    }

    /// The dimension of the quotient algebra: the number of solutions of
    /// the system over the essential variables.
    ///
    /// The count splits recursively on a leading variable instead of
    /// enumerating the basis, so it stays cheap even for wide systems.
    #[must_use]
    pub fn quotient_basis_dim(&self) -> Nat {
        let width = self.nvars + 1;
        let mut dim = Nat::new(width);
        if self.is_empty() {
            return dim;
        }
        let mons = self.gather_min_lms();
        if mons.is_one() {
            return dim;
        }
        let vars = self.gather_vars();
        let mut stack = vec![(vars, mons)];
        while let Some((vars, mons)) = stack.pop() {
            if mons.is_empty() {
                dim += &Nat::power_of_two(width, vars.deg());
            } else if mons.len() == 1 {
                let free = vars.deg();
                let deg = mons.lm().deg();
                let mut term = Nat::power_of_two(width, free);
                term -= &Nat::power_of_two(width, free - deg);
                dim += &term;
            } else {
                // prefer a trivial equation x_var = 0; otherwise branch
                // on a variable of the largest leading monomial
                let eq = mons
                    .terms()
                    .iter()
                    .rev()
                    .find(|m| m.deg() == 1)
                    .unwrap_or_else(|| mons.lm())
                    .clone();
                let var = (0..self.nvars)
                    .find(|&v| eq.test(v))
                    .expect("a leading monomial is never constant here");
                let mut vars0 = vars.clone();
                vars0.set(var, false);
                let mut mons0 = mons.clone();
                mons0.assign_var(var, false);
                stack.push((vars0.clone(), mons0.clone()));
                if eq.deg() > 1 {
                    // var = 1: monomials containing var drop it
                    let mut mons1 = mons0;
                    for t in mons.terms() {
                        if t.test(var) {
                            let mut t1 = t.clone();
                            t1.set(var, false);
                            mons1.union(&t1);
                        }
                    }
                    stack.push((vars0, mons1));
                }
            }
        }
        dim
    }

    /// Parses the `{ p, q, … }` grammar.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on malformed input.
    pub fn parse(nvars: usize, order: O, s: &str) -> Result<Self, ParseError> {
        let trimmed = s.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0b'));
        let inner = trimmed
            .strip_prefix('{')
            .and_then(|t| t.strip_suffix('}'))
            .ok_or(ParseError::Braces)?;
        let mut ideal = Ideal::new(nvars, order.clone());
        if inner
            .chars()
            .all(|c| matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0b'))
        {
            return Ok(ideal);
        }
        for part in inner.split(',') {
            let poly = Poly::parse(nvars, order.clone(), part)?;
            if !poly.is_empty() {
                ideal.insert(&poly);
            }
        }
        Ok(ideal)
    }
}

impl<O: MonomOrder> PartialEq for Ideal<O> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && other.polys.iter().all(|p| self.contains(p))
    }
}

impl<O: MonomOrder> Eq for Ideal<O> {}

impl<O: MonomOrder> fmt::Display for Ideal<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }
        f.write_str("{")?;
        for (i, poly) in self.polys.iter().enumerate() {
            f.write_str(if i == 0 { "\n  " } else { ",\n  " })?;
            write!(f, "{poly}")?;
        }
        f.write_str("\n}")
    }
}
