//! The Buchberger engine.
//!
//! The engine keeps an evolving basis, a reserve of polynomials exiled by
//! the r-criterion, and a queue of critical pairs sorted by increasing
//! lcm (the normal strategy). Pair generation prunes with Gebauer–Möller
//! criteria A, B and C plus Buchberger's first criterion; the field
//! equations x_i² − x_i enter through dedicated pairs rather than as
//! basis elements.
//!
//! References: Gebauer, Möller, "On an Installation of Buchberger's
//! Algorithm" (1987); Agievich, "An improvement of the Buchberger
//! algorithm" (2012).

use std::cmp::Ordering;
use std::fmt;

use anf_poly::{Monom, MonomOrder, Poly};
use smallvec::SmallVec;

use crate::ideal::{reduce_with, Ideal};
use crate::pair::CritPair;
use crate::slab::{PolyId, PolySlab};

/// Acceptance hooks for freshly formed S-polynomials.
///
/// `validate_pre` runs before the S-polynomial is reduced by the basis,
/// `validate` after. Both default to accepting everything; rejecting a
/// polynomial is allowed but voids the guarantee that the final basis is
/// a Gröbner basis (the engine only records the fact in its statistics).
pub trait Validate<O: MonomOrder> {
    /// Called on an S-polynomial before reduction.
    fn validate_pre(&mut self, _poly: &Poly<O>) -> bool {
        true
    }

    /// Called on a reduced S-polynomial before it joins the basis.
    fn validate(&mut self, _poly: &Poly<O>) -> bool {
        true
    }
}

/// The default validator: accepts every polynomial.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl<O: MonomOrder> Validate<O> for AcceptAll {}

/// Counters describing one engine session.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    /// Critical pairs consumed by [`Buchberger::process`].
    pub pairs_processed: usize,
    /// S-polynomials that reduced to zero.
    pub reductions_to_zero: usize,
    /// Maximum degree over the reduced S-polynomials that joined the
    /// basis.
    pub max_spoly_deg: i32,
    /// Pairs eliminated by criterion A.
    pub a_criterion: usize,
    /// Pairs eliminated by criterion B.
    pub b_criterion: usize,
    /// Pairs eliminated by criterion C.
    pub c_criterion: usize,
    /// Pairs eliminated by Buchberger's first criterion.
    pub buch_criterion: usize,
    /// Polynomials moved to the reserve by the r-criterion.
    pub r_criterion: usize,
    /// Polynomials refused by the validation hooks.
    pub validation_rejects: usize,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} critical pairs processed", self.pairs_processed)?;
        writeln!(
            f,
            "{} S-polynomials were reduced to 0",
            self.reductions_to_zero
        )?;
        writeln!(f, "{} - max degree of S-polynomials", self.max_spoly_deg)?;
        writeln!(
            f,
            "{}/{}/{} times the A/B/C criteria were applied",
            self.a_criterion, self.b_criterion, self.c_criterion
        )?;
        writeln!(
            f,
            "{} applications of the 1st Buchberger criterion",
            self.buch_criterion
        )?;
        write!(
            f,
            "{} polynomials were moved to the reserve",
            self.r_criterion
        )
    }
}

/// A Buchberger session computing a reduced Gröbner basis.
pub struct Buchberger<O: MonomOrder, V: Validate<O> = AcceptAll> {
    nvars: usize,
    order: O,
    slab: PolySlab<O>,
    basis: Vec<PolyId>,
    reserve: Vec<PolyId>,
    pairs: Vec<CritPair>,
    processed: Vec<CritPair>,
    stats: Stats,
    validator: V,
}

impl<O: MonomOrder> Buchberger<O, AcceptAll> {
    /// A fresh session with the default validator.
    #[must_use]
    pub fn new(nvars: usize, order: O) -> Self {
        Self::with_validator(nvars, order, AcceptAll)
    }
}

impl<O: MonomOrder, V: Validate<O>> Buchberger<O, V> {
    /// A fresh session with a custom validator.
    #[must_use]
    pub fn with_validator(nvars: usize, order: O, validator: V) -> Self {
        Self {
            nvars,
            order,
            slab: PolySlab::new(),
            basis: Vec::new(),
            reserve: Vec::new(),
            pairs: Vec::new(),
            processed: Vec::new(),
            stats: Stats::default(),
            validator,
        }
    }

    /// Resets the session: empty basis and reserve, empty pair lists,
    /// zero statistics.
    pub fn init(&mut self) {
        self.slab.clear();
        self.basis.clear();
        self.reserve.clear();
        self.pairs.clear();
        self.processed.clear();
        self.stats = Stats::default();
    }

    /// Resets the session and loads an existing Gröbner basis: no pairs
    /// are built and no validation runs. The session adopts `gb`'s
    /// order.
    pub fn init_with(&mut self, gb: &Ideal<O>) {
        self.init();
        self.order = gb.order().clone();
        for poly in gb.polys() {
            let id = self.slab.insert(poly.clone());
            self.basis.push(id);
        }
    }

    /// The ambient monomial order.
    #[must_use]
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Session statistics.
    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Number of polynomials currently in the basis.
    #[must_use]
    pub fn basis_len(&self) -> usize {
        self.basis.len()
    }

    /// Number of polynomials exiled to the reserve.
    #[must_use]
    pub fn reserve_len(&self) -> usize {
        self.reserve.len()
    }

    /// Number of pending critical pairs.
    #[must_use]
    pub fn pairs_len(&self) -> usize {
        self.pairs.len()
    }

    /// Number of archived (already consumed) critical pairs.
    #[must_use]
    pub fn processed_len(&self) -> usize {
        self.processed.len()
    }

    fn basis_search(&self, poly: &Poly<O>) -> Result<usize, usize> {
        self.basis
            .binary_search_by(|id| self.slab.get(*id).compare(poly))
    }

    /// Reduces the polynomial at `id` by the rest of the basis.
    fn reduce_member(&mut self, id: PolyId) -> bool {
        let mut poly = self.slab.take(id);
        let divisors: Vec<&Poly<O>> = self
            .basis
            .iter()
            .filter(|&&b| b != id)
            .map(|b| self.slab.get(*b))
            .collect();
        let changed = reduce_with(&divisors, &mut poly, false);
        self.slab.put(id, poly);
        changed
    }

    fn reduce_by_basis(&self, poly: &mut Poly<O>) {
        let divisors: Vec<&Poly<O>> = self.basis.iter().map(|b| self.slab.get(*b)).collect();
        reduce_with(&divisors, poly, false);
    }

    fn relocate(&mut self, id: PolyId, pos: usize) {
        self.basis.remove(pos);
        let at = {
            let poly = self.slab.get(id);
            match self
                .basis
                .binary_search_by(|b| self.slab.get(*b).compare(poly))
            {
                Ok(i) | Err(i) => i,
            }
        };
        self.basis.insert(at, id);
    }

    /// Merges a sorted batch of pairs into the queue, existing pairs
    /// first on equal lcms.
    fn merge_pairs(&mut self, new: SmallVec<[CritPair; 8]>) {
        let order = &self.order;
        let old = std::mem::take(&mut self.pairs);
        let mut out = Vec::with_capacity(old.len() + new.len());
        let mut a = old.into_iter().peekable();
        let mut b = new.into_iter().peekable();
        loop {
            match (a.peek(), b.peek()) {
                (Some(x), Some(y)) => {
                    if order.compare(y.lcm(), x.lcm()) == Ordering::Less {
                        out.push(b.next().expect("peeked"));
                    } else {
                        out.push(a.next().expect("peeked"));
                    }
                }
                (Some(_), None) => out.push(a.next().expect("peeked")),
                (None, Some(_)) => out.push(b.next().expect("peeked")),
                (None, None) => break,
            }
        }
        self.pairs = out;
    }

    /// Pair generation and pruning around the new basis element `g`.
    fn update_pairs(&mut self, g: PolyId) {
        let lm_g = self.slab.get(g).lm().clone();
        let order = self.order.clone();

        // criterion A: pending pairs whose lcm the new leading monomial
        // divides are redundant, unless they are r-pairs
        let stats = &mut self.stats;
        self.pairs.retain(|p| {
            if lm_g.divides(p.lcm()) && !p.is_r_pair() {
                stats.a_criterion += 1;
                false
            } else {
                true
            }
        });

        // r-criterion: basis elements whose leading monomial the new one
        // divides move to the reserve and leave one critical pair behind;
        // the rest shrink by g, which cannot disturb their leading
        // monomials nor any pending lcm
        let g_poly = self.slab.get(g).clone();
        let mut rpairs: SmallVec<[CritPair; 8]> = SmallVec::new();
        let mut i = 0;
        while i < self.basis.len() {
            let f = self.basis[i];
            if f == g {
                i += 1;
                continue;
            }
            if lm_g.divides(self.slab.get(f).lm()) {
                self.basis.remove(i);
                self.reserve.push(f);
                rpairs.push(CritPair::from_polys(&self.slab, f, g));
                self.stats.r_criterion += 1;
            } else {
                let mut poly = self.slab.take(f);
                reduce_with(&[&g_poly], &mut poly, false);
                self.slab.put(f, poly);
                i += 1;
            }
        }
        rpairs.sort_by(|a, b| order.compare(a.lcm(), b.lcm()));
        self.merge_pairs(rpairs);

        // field-equation candidates; variables outside the leading
        // monomial are coprime and die by Buchberger's first criterion
        let mut cands: SmallVec<[CritPair; 8]> = SmallVec::new();
        for var in 0..self.nvars {
            if lm_g.test(var) {
                cands.push(CritPair::from_field(var, &self.slab, g));
            }
        }

        // criteria B and C against the candidate list
        for idx in 0..self.basis.len() {
            let f = self.basis[idx];
            if f == g {
                continue;
            }
            let lm_f = self.slab.get(f).lm().clone();
            let newpair = CritPair::from_polys(&self.slab, f, g);
            let mut dropped = false;
            let mut k = 0;
            while k < cands.len() {
                let cand = &cands[k];
                if cand.divides(&newpair) && !lm_g.divides(&Monom::lcm(cand.lm1(), &lm_f)) {
                    if !cand.same(&newpair) {
                        // criterion B: a strictly smaller lcm supersedes
                        self.stats.b_criterion += 1;
                        dropped = true;
                        break;
                    }
                    // criterion C: equal lcms, keep only one pair;
                    // a coprime pair dies first, then the older one
                    self.stats.c_criterion += 1;
                    if cand.is_coprime() || !newpair.is_coprime() {
                        dropped = true;
                        break;
                    }
                    cands.remove(k);
                } else {
                    k += 1;
                }
            }
            if dropped {
                continue;
            }
            // the new pair may itself eliminate queued candidates
            let mut k = 0;
            while k < cands.len() {
                let cand = &cands[k];
                if newpair.divides(cand)
                    && !newpair.same(cand)
                    && !lm_g.divides(&Monom::lcm(cand.lm1(), &lm_f))
                {
                    cands.remove(k);
                    self.stats.b_criterion += 1;
                } else {
                    k += 1;
                }
            }
            cands.push(newpair);
        }

        // Buchberger's first criterion: coprime leading monomials
        let stats = &mut self.stats;
        cands.retain(|p| {
            if p.is_coprime() {
                stats.buch_criterion += 1;
                false
            } else {
                true
            }
        });
        cands.sort_by(|a, b| order.compare(a.lcm(), b.lcm()));
        self.merge_pairs(cands);
    }

    /// Reduces `poly` by the basis and, if it survives nonzero and
    /// validated, inserts it and rebuilds the pair queue around it.
    pub fn update(&mut self, poly: &Poly<O>) {
        if poly.is_empty() {
            return;
        }
        let mut poly = poly.clone();
        poly.set_order(self.order.clone());
        if self.basis_search(&poly).is_ok() {
            return;
        }
        if !self.validator.validate_pre(&poly) {
            self.stats.validation_rejects += 1;
            return;
        }
        let id = self.slab.insert(poly);
        let pos = match self.basis_search(self.slab.get(id)) {
            Ok(pos) | Err(pos) => pos,
        };
        self.basis.insert(pos, id);
        self.reduce_member(id);
        let keep = {
            let (validator, slab) = (&mut self.validator, &self.slab);
            !slab.get(id).is_empty() && validator.validate(slab.get(id))
        };
        if keep {
            self.relocate(id, pos);
            self.update_pairs(id);
        } else {
            if !self.slab.get(id).is_empty() {
                self.stats.validation_rejects += 1;
            }
            self.basis.remove(pos);
            self.slab.remove(id);
        }
    }

    /// Self-reduces a system and feeds every member through
    /// [`update`](Self::update)-style insertion.
    pub fn update_ideal(&mut self, ideal: &Ideal<O>) {
        let mut polys = ideal.clone();
        polys.set_order(self.order.clone());
        polys.self_reduce();
        while !polys.is_empty() {
            let mut poly = polys.remove_at(0);
            if !self.validator.validate_pre(&poly) {
                self.stats.validation_rejects += 1;
                continue;
            }
            self.reduce_by_basis(&mut poly);
            if poly.is_empty() {
                continue;
            }
            if !self.validator.validate(&poly) {
                self.stats.validation_rejects += 1;
                continue;
            }
            if self.basis_search(&poly).is_err() {
                let id = self.slab.insert(poly);
                let pos = match self.basis_search(self.slab.get(id)) {
                    Ok(pos) | Err(pos) => pos,
                };
                self.basis.insert(pos, id);
                self.update_pairs(id);
            }
        }
    }

    /// Consumes the pair queue: forms each S-polynomial in increasing
    /// lcm order, reduces it by the basis, and grows the basis with
    /// every nonzero survivor until no pairs remain.
    pub fn process(&mut self) {
        while !self.pairs.is_empty() {
            let pair = self.pairs.remove(0);
            let mut spoly = pair.s_poly(&self.slab);
            self.stats.pairs_processed += 1;
            self.processed.push(pair);
            let order = self.order.clone();
            self.pairs.sort_by(|a, b| order.compare(a.lcm(), b.lcm()));
            if spoly.is_empty() {
                continue;
            }
            if !self.validator.validate_pre(&spoly) {
                self.stats.validation_rejects += 1;
                continue;
            }
            self.reduce_by_basis(&mut spoly);
            if spoly.is_empty() {
                self.stats.reductions_to_zero += 1;
            } else if self.validator.validate(&spoly) {
                let deg = spoly.deg();
                if self.basis_search(&spoly).is_err() {
                    let id = self.slab.insert(spoly);
                    let pos = match self.basis_search(self.slab.get(id)) {
                        Ok(pos) | Err(pos) => pos,
                    };
                    self.basis.insert(pos, id);
                    self.stats.max_spoly_deg = self.stats.max_spoly_deg.max(deg);
                    self.update_pairs(id);
                }
            } else {
                self.stats.validation_rejects += 1;
            }
        }
    }

    /// Copies the current basis out.
    #[must_use]
    pub fn done(&self) -> Ideal<O> {
        let mut out = Ideal::new(self.nvars, self.order.clone());
        for id in &self.basis {
            out.insert(self.slab.get(*id));
        }
        out
    }
}
