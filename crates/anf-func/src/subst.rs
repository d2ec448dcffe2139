//! Substitutions on Boolean n-tuples.
//!
//! A [`Subst`] is a map {0,1}^n → {0,1}^n given by its value table, with
//! points and values read little-endian. Besides the combinatorial
//! operations (bijectivity, inversion, coordinate extraction) it exports
//! the cryptographic characteristics of an S-box and the translation of
//! its graph into an ideal on 2n variables, y_k = S_k(x).

use anf_poly::{Monom, MonomOrder, Poly};

use anf_groebner::Ideal;

use crate::boolfunc::BoolFunc;

/// Which difference is tracked on each side of an S-box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiffKind {
    /// XOR differences in, XOR differences out.
    XorXor,
    /// XOR differences in, modular differences out.
    XorAdd,
    /// Modular differences in, XOR differences out.
    AddXor,
    /// Modular differences in, modular differences out.
    AddAdd,
}

/// A substitution table on Boolean n-tuples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subst {
    nvars: usize,
    table: Vec<u64>,
}

impl Subst {
    /// The identity substitution on `nvars`-bit blocks.
    ///
    /// # Panics
    ///
    /// Panics if `nvars` is 0 or at least 28.
    #[must_use]
    pub fn identity(nvars: usize) -> Self {
        assert!(nvars > 0 && nvars < 28, "table of 2^{nvars} entries");
        Self {
            nvars,
            table: (0..1u64 << nvars).collect(),
        }
    }

    /// Builds a substitution from a value table of length 2^n.
    ///
    /// # Panics
    ///
    /// Panics if the length is not a power of two matching an `nvars`
    /// below 28, or if a value is out of range.
    #[must_use]
    pub fn from_table(table: &[u64]) -> Self {
        let size = table.len();
        assert!(size.is_power_of_two() && size > 1, "bad table length");
        let nvars = size.trailing_zeros() as usize;
        assert!(nvars < 28);
        assert!(
            table.iter().all(|&v| v < size as u64),
            "value out of range"
        );
        Self {
            nvars,
            table: table.to_vec(),
        }
    }

    /// Block width in bits.
    #[must_use]
    pub fn nvars(&self) -> usize {
        self.nvars
    }

    /// Table size 2^n.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false: the table never has size zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Value at the point `x`.
    #[must_use]
    pub fn get(&self, x: usize) -> u64 {
        self.table[x]
    }

    /// Overwrites the value at the point `x`.
    ///
    /// # Panics
    ///
    /// Panics if `val` does not fit the block width.
    pub fn set(&mut self, x: usize, val: u64) {
        assert!(val < self.table.len() as u64);
        self.table[x] = val;
    }

    /// True if the substitution is a bijection.
    #[must_use]
    pub fn is_bijection(&self) -> bool {
        let mut seen = vec![false; self.len()];
        for &v in &self.table {
            if std::mem::replace(&mut seen[v as usize], true) {
                return false;
            }
        }
        true
    }

    /// The inverse substitution, or `None` when not a bijection.
    #[must_use]
    pub fn inverse(&self) -> Option<Subst> {
        if !self.is_bijection() {
            return None;
        }
        let mut table = vec![0u64; self.len()];
        for (x, &v) in self.table.iter().enumerate() {
            table[v as usize] = x as u64;
        }
        Some(Subst {
            nvars: self.nvars,
            table,
        })
    }

    /// The k-th coordinate function x ↦ S(x)_k.
    #[must_use]
    pub fn coordinate(&self, k: usize) -> BoolFunc {
        assert!(k < self.nvars);
        let mut f = BoolFunc::new(self.nvars);
        for (x, &v) in self.table.iter().enumerate() {
            f.set(x, v >> k & 1 == 1);
        }
        f
    }

    /// The linear combination of coordinates selected by `mask`:
    /// x ↦ parity(S(x) & mask).
    #[must_use]
    pub fn component(&self, mask: u64) -> BoolFunc {
        let mut f = BoolFunc::new(self.nvars);
        for (x, &v) in self.table.iter().enumerate() {
            f.set(x, (v & mask).count_ones() % 2 == 1);
        }
        f
    }

    /// Maximum algebraic degree over the coordinate functions.
    #[must_use]
    pub fn algebraic_degree(&self) -> i32 {
        (0..self.nvars)
            .map(|k| self.coordinate(k).algebraic_degree())
            .max()
            .unwrap_or(-1)
    }

    /// Minimum algebraic degree over the nonzero components.
    #[must_use]
    pub fn degree_span(&self) -> i32 {
        (1..self.len() as u64)
            .map(|mask| self.component(mask).algebraic_degree())
            .min()
            .unwrap_or(-1)
    }

    /// Minimum nonlinearity over the nonzero components.
    #[must_use]
    pub fn nonlinearity(&self) -> usize {
        (1..self.len() as u64)
            .map(|mask| self.component(mask).nonlinearity())
            .min()
            .unwrap_or(0)
    }

    /// The differential characteristic: the largest number of inputs
    /// mapping a fixed nonzero input difference to one output
    /// difference.
    #[must_use]
    pub fn diff_char(&self, kind: DiffKind) -> usize {
        let size = self.len();
        let mut record = 0;
        for alpha in 1..size {
            let mut count = vec![0usize; size];
            for x in 0..size {
                let out = match kind {
                    DiffKind::XorXor => self.table[x ^ alpha] ^ self.table[x],
                    DiffKind::XorAdd => self.table[x ^ alpha]
                        .wrapping_sub(self.table[x])
                        & (size as u64 - 1),
                    DiffKind::AddXor => self.table[(x + alpha) % size] ^ self.table[x],
                    DiffKind::AddAdd => self.table[(x + alpha) % size]
                        .wrapping_sub(self.table[x])
                        & (size as u64 - 1),
                };
                count[out as usize] += 1;
            }
            record = record.max(*count.iter().max().expect("nonempty"));
        }
        record
    }

    /// The ideal of the graph of the substitution on 2n variables:
    /// the polynomials y_k + S_k(x₀,…,x_{n-1}) with y_k = x_{n+k}.
    #[must_use]
    pub fn ideal<O: MonomOrder>(&self, order: O) -> Ideal<O> {
        let n = self.nvars;
        let mut ideal = Ideal::new(2 * n, order.clone());
        for k in 0..n {
            let mut terms: Vec<Monom> = self
                .coordinate(k)
                .anf_support()
                .into_iter()
                .map(|m| {
                    let mut mono = Monom::one(2 * n);
                    for i in 0..n {
                        if m >> i & 1 == 1 {
                            mono.set(i, true);
                        }
                    }
                    mono
                })
                .collect();
            terms.push(Monom::var(2 * n, n + k));
            ideal.insert(&Poly::from_terms(2 * n, order.clone(), terms));
        }
        ideal
    }
}
