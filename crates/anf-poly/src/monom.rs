//! Square-free monomials encoded as exponent bit vectors.
//!
//! Over the Boolean ring x_i² = x_i, so the exponent of every variable is
//! 0 or 1 and a monomial is exactly the set of variables it mentions.
//! Multiplication is bitwise OR, gcd is AND, divisibility is set
//! inclusion, and the exact quotient is AND-NOT. The all-zero exponent is
//! the constant monomial 1; there is no zero monomial.

use std::fmt;

use anf_bits::BitWord;

use crate::parse::{self, ParseError};

/// A monomial over `nvars` Boolean variables.
///
/// Bit `i` of the exponent word is set iff the monomial contains `x_i`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Monom {
    bits: BitWord,
}

impl Monom {
    /// The constant monomial 1 over `nvars` variables.
    #[must_use]
    pub fn one(nvars: usize) -> Self {
        Self {
            bits: BitWord::zeros(nvars),
        }
    }

    /// The monomial `x_i`.
    #[must_use]
    pub fn var(nvars: usize, i: usize) -> Self {
        let mut m = Self::one(nvars);
        m.bits.set(i, true);
        m
    }

    /// The product of the listed variables.
    #[must_use]
    pub fn from_vars(nvars: usize, vars: &[usize]) -> Self {
        let mut m = Self::one(nvars);
        for &i in vars {
            m.bits.set(i, true);
        }
        m
    }

    /// Wraps an exponent vector.
    #[must_use]
    pub fn from_bits(bits: BitWord) -> Self {
        Self { bits }
    }

    /// The exponent vector.
    #[must_use]
    pub fn bits(&self) -> &BitWord {
        &self.bits
    }

    /// Mutable access to the exponent vector.
    pub fn bits_mut(&mut self) -> &mut BitWord {
        &mut self.bits
    }

    /// Number of variables of the ambient ring.
    #[must_use]
    pub fn nvars(&self) -> usize {
        self.bits.len()
    }

    /// Total degree (number of variables present).
    #[must_use]
    pub fn deg(&self) -> usize {
        self.bits.weight()
    }

    /// True for the constant monomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.bits.is_zero()
    }

    /// True if the monomial contains `x_i`.
    #[must_use]
    pub fn test(&self, i: usize) -> bool {
        self.bits.get(i)
    }

    /// Adds or removes `x_i`.
    pub fn set(&mut self, i: usize, val: bool) {
        self.bits.set(i, val);
    }

    /// Toggles `x_i`.
    pub fn flip(&mut self, i: usize) {
        self.bits.flip(i);
    }

    /// A copy over a wider variable universe (zero-extended exponent).
    #[must_use]
    pub fn widened(&self, nvars: usize) -> Self {
        debug_assert!(nvars >= self.nvars());
        Self {
            bits: self.bits.resized(nvars),
        }
    }

    /// Product of two monomials; the result lives in the larger universe.
    #[must_use]
    pub fn mul(&self, other: &Monom) -> Monom {
        Monom {
            bits: &self.bits | &other.bits,
        }
    }

    /// In-place product; widens to the larger universe.
    pub fn mul_assign(&mut self, other: &Monom) {
        if other.nvars() > self.nvars() {
            self.bits.resize(other.nvars());
        }
        self.bits |= &other.bits;
    }

    /// Least common multiple (bitwise OR).
    #[must_use]
    pub fn lcm(a: &Monom, b: &Monom) -> Monom {
        a.mul(b)
    }

    /// Greatest common divisor (bitwise AND).
    #[must_use]
    pub fn gcd(a: &Monom, b: &Monom) -> Monom {
        Monom {
            bits: &a.bits & &b.bits,
        }
    }

    /// True if `self` divides `other` (set inclusion, zero-extended).
    #[must_use]
    pub fn divides(&self, other: &Monom) -> bool {
        for pos in 0..self.bits.word_len() {
            let o = if pos < other.bits.word_len() {
                other.bits.word(pos)
            } else {
                0
            };
            if self.bits.word(pos) & !o != 0 {
                return false;
            }
        }
        true
    }

    /// True if `other` divides `self`.
    #[must_use]
    pub fn is_divisible_by(&self, other: &Monom) -> bool {
        other.divides(self)
    }

    /// True if the monomials share no variable.
    #[must_use]
    pub fn is_coprime(&self, other: &Monom) -> bool {
        let top = self.bits.word_len().min(other.bits.word_len());
        (0..top).all(|pos| self.bits.word(pos) & other.bits.word(pos) == 0)
    }

    /// Exact quotient `self / other`.
    ///
    /// Requires `other | self` (debug-asserted); the quotient is AND-NOT.
    #[must_use]
    pub fn div_exact(&self, other: &Monom) -> Monom {
        debug_assert!(other.divides(self), "inexact monomial division");
        let mut out = self.clone();
        out.div_assign(other);
        out
    }

    /// In-place exact quotient.
    pub fn div_assign(&mut self, other: &Monom) {
        debug_assert!(other.divides(self), "inexact monomial division");
        let top = self.bits.word_len().min(other.bits.word_len());
        for pos in 0..top {
            let w = self.bits.word(pos) & !other.bits.word(pos);
            self.bits.set_word(pos, w);
        }
    }

    /// Evaluates the monomial at a Boolean point: ∏ point_i ^ e_i.
    ///
    /// The point is zero-extended if shorter than the exponent vector.
    #[must_use]
    pub fn eval(&self, point: &BitWord) -> bool {
        for pos in 0..self.bits.word_len() {
            let p = if pos < point.word_len() {
                point.word(pos)
            } else {
                0
            };
            if p | !self.bits.word(pos) != u64::MAX {
                return false;
            }
        }
        true
    }

    /// Parses a monomial over `nvars` variables from its text form:
    /// `"1"` or whitespace-separated `x<index>` factors with distinct
    /// in-range indices.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on malformed input.
    pub fn parse(nvars: usize, s: &str) -> Result<Self, ParseError> {
        parse::monom(nvars, s)
    }
}

impl fmt::Display for Monom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return f.write_str("1");
        }
        let mut first = true;
        for pos in 0..self.nvars() {
            if self.test(pos) {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "x{pos}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_is_or() {
        let a = Monom::from_vars(5, &[0, 2]);
        let b = Monom::from_vars(5, &[2, 4]);
        let p = a.mul(&b);
        assert_eq!(p, Monom::from_vars(5, &[0, 2, 4]));
        assert_eq!(p.deg(), 3);
        // idempotence
        assert_eq!(a.mul(&a), a);
    }

    #[test]
    fn test_divisibility_and_quotient() {
        let m = Monom::from_vars(6, &[1, 3, 4]);
        let d = Monom::from_vars(6, &[1, 4]);
        assert!(d.divides(&m));
        assert!(!m.divides(&d));
        assert_eq!(m.div_exact(&d), Monom::var(6, 3));
        // m | (m * n) and (m * n) / m == n for coprime n
        let n = Monom::var(6, 5);
        let prod = m.mul(&n);
        assert!(m.divides(&prod));
        assert_eq!(prod.div_exact(&m), n);
    }

    #[test]
    fn test_lcm_gcd() {
        let a = Monom::from_vars(4, &[0, 1]);
        let b = Monom::from_vars(4, &[1, 2]);
        assert_eq!(Monom::lcm(&a, &b), Monom::from_vars(4, &[0, 1, 2]));
        assert_eq!(Monom::gcd(&a, &b), Monom::var(4, 1));
        assert!(!a.is_coprime(&b));
        assert!(a.is_coprime(&Monom::var(4, 3)));
    }

    #[test]
    fn test_widening_product() {
        let a = Monom::var(3, 2);
        let b = Monom::var(8, 7);
        let p = a.mul(&b);
        assert_eq!(p.nvars(), 8);
        assert!(p.test(2) && p.test(7));
    }

    #[test]
    fn test_eval() {
        let m = Monom::from_vars(4, &[0, 2]);
        let mut point = BitWord::zeros(4);
        point.set(0, true);
        assert!(!m.eval(&point));
        point.set(2, true);
        assert!(m.eval(&point));
        // the constant 1 evaluates to 1 everywhere
        assert!(Monom::one(4).eval(&BitWord::zeros(4)));
    }

    #[test]
    fn test_display_and_parse() {
        let m = Monom::from_vars(12, &[0, 3, 11]);
        assert_eq!(m.to_string(), "x0 x3 x11");
        assert_eq!(Monom::parse(12, "x0 x3 x11").unwrap(), m);
        assert_eq!(Monom::parse(12, "x11 x03 x0").unwrap(), m);
        assert_eq!(Monom::parse(12, "1").unwrap(), Monom::one(12));
        assert!(Monom::parse(12, "x12").is_err());
        assert!(Monom::parse(12, "x3 x3").is_err());
        assert!(Monom::parse(12, "").is_err());
    }
}
