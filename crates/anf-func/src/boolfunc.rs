//! Boolean functions as truth tables.
//!
//! A [`BoolFunc`] on n variables stores its 2^n values in a bit vector;
//! the value at the point x is bit x, with the point's coordinates read
//! little-endian (coordinate i is bit i of x). Conversion to and from the
//! algebraic normal form uses the Möbius transform, the spectrum the fast
//! Walsh–Hadamard transform.

use anf_bits::BitWord;
use anf_poly::{Monom, MonomOrder, Poly};

/// A Boolean function {0,1}^n → {0,1} given by its truth table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoolFunc {
    nvars: usize,
    table: BitWord,
}

impl BoolFunc {
    /// The constant-zero function on `nvars` variables.
    ///
    /// # Panics
    ///
    /// Panics if `nvars` is 0 or large enough for the table not to fit
    /// in memory.
    #[must_use]
    pub fn new(nvars: usize) -> Self {
        assert!(nvars > 0 && nvars < 28, "table of 2^{nvars} bits");
        Self {
            nvars,
            table: BitWord::zeros(1 << nvars),
        }
    }

    /// Builds the function from the truth table of a polynomial.
    #[must_use]
    pub fn from_poly<O: MonomOrder>(poly: &Poly<O>) -> Self {
        let mut f = Self::new(poly.nvars());
        for x in 0..f.len() {
            let point = BitWord::from_u64(f.nvars, x as u64);
            f.set(x, poly.eval(&point));
        }
        f
    }

    /// Number of variables.
    #[must_use]
    pub fn nvars(&self) -> usize {
        self.nvars
    }

    /// Table size 2^n.
    #[must_use]
    pub fn len(&self) -> usize {
        1 << self.nvars
    }

    /// Always false: the table never has size zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Value at the point `x`.
    #[must_use]
    pub fn get(&self, x: usize) -> bool {
        self.table.get(x)
    }

    /// Sets the value at the point `x`.
    pub fn set(&mut self, x: usize, val: bool) {
        self.table.set(x, val);
    }

    /// Number of ones in the truth table.
    #[must_use]
    pub fn weight(&self) -> usize {
        self.table.weight()
    }

    /// True if the function takes both values equally often.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        2 * self.weight() == self.len()
    }

    /// Fills the table at random.
    pub fn randomize(&mut self) {
        self.table.randomize();
    }

    /// The exponents of the algebraic normal form: the set of points m
    /// with a nonzero Möbius coefficient, each encoding a monomial.
    #[must_use]
    pub fn anf_support(&self) -> Vec<u64> {
        let size = self.len();
        let mut coeffs: Vec<bool> = (0..size).map(|x| self.get(x)).collect();
        for i in 0..self.nvars {
            let step = 1usize << i;
            for x in 0..size {
                if x & step != 0 {
                    coeffs[x] ^= coeffs[x ^ step];
                }
            }
        }
        (0..size as u64).filter(|&m| coeffs[m as usize]).collect()
    }

    /// The algebraic normal form as a polynomial in the given order.
    #[must_use]
    pub fn to_poly<O: MonomOrder>(&self, order: O) -> Poly<O> {
        let terms = self
            .anf_support()
            .into_iter()
            .map(|m| Monom::from_bits(BitWord::from_u64(self.nvars, m)))
            .collect();
        Poly::from_terms(self.nvars, order, terms)
    }

    /// Algebraic degree, −1 for the zero function.
    #[must_use]
    pub fn algebraic_degree(&self) -> i32 {
        self.anf_support()
            .iter()
            .map(|m| i32::try_from(m.count_ones()).unwrap_or(i32::MAX))
            .max()
            .unwrap_or(-1)
    }

    /// The Walsh–Hadamard spectrum: W(u) = Σ_x (−1)^(f(x) + u·x).
    #[must_use]
    pub fn walsh(&self) -> Vec<i32> {
        let size = self.len();
        let mut spec: Vec<i32> = (0..size)
            .map(|x| if self.get(x) { -1 } else { 1 })
            .collect();
        for i in 0..self.nvars {
            let step = 1usize << i;
            let mut j = 0;
            while j < size {
                for k in j..j + step {
                    let t = spec[k];
                    spec[k] += spec[k + step];
                    spec[k + step] = t - spec[k + step];
                }
                j += 2 * step;
            }
        }
        spec
    }

    /// Maximum absolute Walsh–Hadamard coefficient.
    #[must_use]
    pub fn max_walsh(&self) -> u32 {
        self.walsh()
            .iter()
            .map(|w| w.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Distance to the set of affine functions.
    #[must_use]
    pub fn nonlinearity(&self) -> usize {
        (self.len() - self.max_walsh() as usize) / 2
    }

    /// True for a bent function: n even and every Walsh–Hadamard
    /// coefficient of magnitude 2^(n/2).
    #[must_use]
    pub fn is_bent(&self) -> bool {
        if self.nvars % 2 != 0 {
            return false;
        }
        let flat = 1u32 << (self.nvars / 2);
        self.walsh().iter().all(|w| w.unsigned_abs() == flat)
    }

    /// True for a plateaued function of order `r`: every nonzero
    /// Walsh–Hadamard coefficient has magnitude 2^(n − r/2).
    #[must_use]
    pub fn is_plateaued(&self, r: usize) -> bool {
        if r % 2 != 0 || r / 2 > self.nvars {
            return false;
        }
        let level = 1u32 << (self.nvars - r / 2);
        self.walsh()
            .iter()
            .all(|w| *w == 0 || w.unsigned_abs() == level)
    }

    /// The dual of a bent function: the sign pattern of its spectrum.
    ///
    /// # Panics
    ///
    /// Panics if the function is not bent.
    #[must_use]
    pub fn dual(&self) -> BoolFunc {
        assert!(self.is_bent(), "only bent functions have a dual");
        let spec = self.walsh();
        let mut out = BoolFunc::new(self.nvars);
        for (u, w) in spec.iter().enumerate() {
            out.set(u, *w < 0);
        }
        out
    }

    /// Largest deviation, over single-bit flips, of the number of value
    /// changes from the balanced half; zero means the function satisfies
    /// the propagation criterion of degree one.
    #[must_use]
    pub fn pc1(&self) -> usize {
        let size = self.len();
        let mut record = 0;
        for i in 0..self.nvars {
            let mask = 1usize << i;
            let count = (0..size).filter(|&x| self.get(x) != self.get(x ^ mask)).count();
            record = record.max(count.abs_diff(size / 2));
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anf_bits::env;
    use anf_poly::{Grlex, Lex};

    #[test]
    fn test_anf_round_trip() {
        env::seed(3);
        let mut f = BoolFunc::new(6);
        f.randomize();
        let poly = f.to_poly(Grlex);
        let back = BoolFunc::from_poly(&poly);
        assert_eq!(f, back);
    }

    #[test]
    fn test_anf_of_simple_polys() {
        let p = Poly::parse(3, Lex, "x0 x1 + x2").unwrap();
        let f = BoolFunc::from_poly(&p);
        assert_eq!(f.to_poly(Lex), p);
        assert_eq!(f.algebraic_degree(), 2);
        // truth table: f(x) = x0 x1 ^ x2
        assert!(!f.get(0b001));
        assert!(f.get(0b011)); // x0 = x1 = 1
        assert!(f.get(0b100)); // x2 = 1
        assert!(!f.get(0b111));
    }

    #[test]
    fn test_walsh_of_linear_function_is_peaked() {
        // f(x) = x0: W(u) = ±2^n at u in {0?, e0}... exactly one peak
        let p = Poly::parse(4, Lex, "x0").unwrap();
        let f = BoolFunc::from_poly(&p);
        let spec = f.walsh();
        let peaks: Vec<_> = (0..spec.len()).filter(|&u| spec[u] != 0).collect();
        assert_eq!(peaks, vec![1]); // u = e0
        assert_eq!(spec[1], 16);
        assert!(f.is_balanced());
        assert_eq!(f.nonlinearity(), 0);
    }

    #[test]
    fn test_parseval_identity() {
        env::seed(9);
        let mut f = BoolFunc::new(5);
        f.randomize();
        let spec = f.walsh();
        let sum: i64 = spec.iter().map(|&w| i64::from(w) * i64::from(w)).sum();
        assert_eq!(sum, 1 << (2 * 5)); // Σ W(u)^2 = 2^(2n)
    }

    #[test]
    fn test_quadratic_bent_function() {
        // x0 x1 is bent on 2 variables
        let p = Poly::parse(2, Lex, "x0 x1").unwrap();
        let f = BoolFunc::from_poly(&p);
        assert!(f.is_bent());
        // x0 is not
        let l = BoolFunc::from_poly(&Poly::parse(2, Lex, "x0").unwrap());
        assert!(!l.is_bent());
    }

    #[test]
    fn test_plateaued_levels() {
        // a bent function is plateaued of order n
        let f = BoolFunc::from_poly(&Poly::parse(2, Lex, "x0 x1").unwrap());
        assert!(f.is_plateaued(2));
        // an affine function is plateaued of order 0
        let l = BoolFunc::from_poly(&Poly::parse(3, Lex, "x1 + 1").unwrap());
        assert!(l.is_plateaued(0));
        assert!(!l.is_plateaued(2));
    }

    #[test]
    fn test_dual_is_an_involution() {
        let f = BoolFunc::from_poly(&Poly::parse(4, Lex, "x0 x2 + x1 x3").unwrap());
        assert!(f.is_bent());
        let dual = f.dual();
        assert!(dual.is_bent());
        assert_eq!(dual.dual(), f);
    }

    #[test]
    fn test_pc1() {
        // x0 x1: flipping x0 changes the value only when x1 = 1
        let f = BoolFunc::from_poly(&Poly::parse(2, Lex, "x0 x1").unwrap());
        assert_eq!(f.pc1(), 0);
        // a function ignoring x0 has the worst possible deviation
        let g = BoolFunc::from_poly(&Poly::parse(2, Lex, "x1").unwrap());
        assert_eq!(g.pc1(), 2);
    }
}
