//! Fixed-width unsigned integers over [`BitWord`].
//!
//! A [`Nat`] reads its bit vector as a little-endian integer (bit 0 least
//! significant). Arithmetic wraps modulo 2^width, mirroring machine
//! integers of arbitrary width. Decimal and hexadecimal text forms round
//! trip for every in-range value.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{One, Zero};
use thiserror::Error;

use crate::word::{BitWord, WORD_BITS};

/// Error produced when parsing a [`Nat`] from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseNatError {
    /// The input contained no digits.
    #[error("empty integer literal")]
    Empty,
    /// A character outside the digit alphabet was encountered.
    #[error("invalid digit {0:?} in integer literal")]
    InvalidDigit(char),
}

/// An unsigned integer of fixed bit width with wrapping arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Nat {
    bits: BitWord,
}

impl Nat {
    /// The zero value of the given width.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            bits: BitWord::zeros(width),
        }
    }

    /// A value of the given width from the low bits of `value`.
    #[must_use]
    pub fn from_u64(width: usize, value: u64) -> Self {
        Self {
            bits: BitWord::from_u64(width, value),
        }
    }

    /// Wraps an existing bit vector.
    #[must_use]
    pub fn from_bits(bits: BitWord) -> Self {
        Self { bits }
    }

    /// Bit width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// The underlying bit vector.
    #[must_use]
    pub fn bits(&self) -> &BitWord {
        &self.bits
    }

    /// True if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.bits.is_zero()
    }

    /// The value as `u64` when it fits.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if (1..self.bits.word_len()).any(|p| self.bits.word(p) != 0) {
            return None;
        }
        Some(self.bits.word(0))
    }

    /// Integer comparison; widths may differ.
    #[must_use]
    pub fn compare(&self, other: &Nat) -> Ordering {
        self.bits.compare(&other.bits)
    }

    /// Multiplies by 2^k (shift toward high indices), wrapping.
    pub fn shl_assign(&mut self, k: usize) {
        self.bits.sh_hi(k);
    }

    /// Divides by 2^k (shift toward low indices).
    pub fn shr_assign(&mut self, k: usize) {
        self.bits.sh_lo(k);
    }

    /// Returns 2^k of the given width (zero when `k >= width`).
    #[must_use]
    pub fn power_of_two(width: usize, k: usize) -> Self {
        let mut n = Self::from_u64(width, 1);
        n.shl_assign(k);
        n
    }

    /// Multiplies in place by a small constant, wrapping.
    pub fn mul_small(&mut self, m: u32) {
        let mut carry = 0u64;
        for pos in 0..self.bits.word_len() {
            let prod = u128::from(self.bits.word(pos)) * u128::from(m) + u128::from(carry);
            self.bits.set_word(pos, prod as u64);
            carry = (prod >> WORD_BITS) as u64;
        }
    }

    /// Divides in place by a small nonzero constant, returning the
    /// remainder.
    ///
    /// # Panics
    ///
    /// Panics if `m` is zero.
    pub fn divmod_small(&mut self, m: u32) -> u32 {
        assert!(m != 0, "division by zero");
        let mut rem = 0u64;
        for pos in (0..self.bits.word_len()).rev() {
            let cur = (u128::from(rem) << WORD_BITS) | u128::from(self.bits.word(pos));
            self.bits.set_word(pos, (cur / u128::from(m)) as u64);
            rem = (cur % u128::from(m)) as u64;
        }
        rem as u32
    }
}

impl PartialOrd for Nat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for Nat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl AddAssign<&Nat> for Nat {
    fn add_assign(&mut self, rhs: &Nat) {
        let mut carry = false;
        for pos in 0..self.bits.word_len() {
            let r = if pos < rhs.bits.word_len() {
                rhs.bits.word(pos)
            } else {
                0
            };
            let (sum, c1) = self.bits.word(pos).overflowing_add(r);
            let (sum, c2) = sum.overflowing_add(u64::from(carry));
            self.bits.set_word(pos, sum);
            carry = c1 || c2;
        }
    }
}

impl SubAssign<&Nat> for Nat {
    fn sub_assign(&mut self, rhs: &Nat) {
        let mut borrow = false;
        for pos in 0..self.bits.word_len() {
            let r = if pos < rhs.bits.word_len() {
                rhs.bits.word(pos)
            } else {
                0
            };
            let (diff, b1) = self.bits.word(pos).overflowing_sub(r);
            let (diff, b2) = diff.overflowing_sub(u64::from(borrow));
            self.bits.set_word(pos, diff);
            borrow = b1 || b2;
        }
    }
}

impl Add for Nat {
    type Output = Nat;
    fn add(self, rhs: Nat) -> Nat {
        let width = self.width().max(rhs.width());
        let mut out = Nat::from_bits(self.bits.resized(width));
        out += &rhs;
        out
    }
}

impl Sub for Nat {
    type Output = Nat;
    fn sub(self, rhs: Nat) -> Nat {
        let mut out = self;
        out -= &rhs;
        out
    }
}

impl Mul for Nat {
    type Output = Nat;
    fn mul(self, rhs: Nat) -> Nat {
        let width = self.width().max(rhs.width());
        let mut acc = Nat::new(width);
        let wide = Nat::from_bits(self.bits.resized(width));
        for pos in 0..rhs.width() {
            if rhs.bits.get(pos) {
                let mut term = wide.clone();
                term.shl_assign(pos);
                acc += &term;
            }
        }
        acc
    }
}

impl Zero for Nat {
    fn zero() -> Self {
        Nat::new(1)
    }
    fn is_zero(&self) -> bool {
        Nat::is_zero(self)
    }
}

impl One for Nat {
    fn one() -> Self {
        Nat::from_u64(1, 1)
    }
}

impl fmt::Display for Nat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = Vec::new();
        let mut cur = self.clone();
        while !cur.is_zero() {
            digits.push(b'0' + cur.divmod_small(10) as u8);
            if digits.len() > 4 * self.width() {
                break; // unreachable, defensive bound
            }
        }
        if digits.is_empty() {
            digits.push(b'0');
        }
        digits.reverse();
        f.write_str(std::str::from_utf8(&digits).expect("ascii digits"))
    }
}

impl fmt::LowerHex for Nat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = Vec::new();
        let mut cur = self.clone();
        while !cur.is_zero() {
            let d = cur.divmod_small(16) as u8;
            digits.push(if d < 10 { b'0' + d } else { b'a' + d - 10 });
        }
        if digits.is_empty() {
            digits.push(b'0');
        }
        digits.reverse();
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(std::str::from_utf8(&digits).expect("ascii digits"))
    }
}

impl FromStr for Nat {
    type Err = ParseNatError;

    /// Parses a decimal literal, or a hexadecimal one with a `0x`/`0X`
    /// prefix. The width is the smallest multiple of four bits covering
    /// the digits read; the value wraps into it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(rest) => (rest, 16u32),
            None => (s, 10u32),
        };
        if digits.is_empty() {
            return Err(ParseNatError::Empty);
        }
        let width = 4 * digits.len();
        let mut out = Nat::new(width);
        for c in digits.chars() {
            let d = c
                .to_digit(radix)
                .ok_or(ParseNatError::InvalidDigit(c))?;
            out.mul_small(radix);
            out += &Nat::from_u64(width, u64::from(d));
        }
        Ok(out)
    }
}
