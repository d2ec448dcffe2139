//! Text grammar for monomials and polynomials.
//!
//! ```text
//! monom      := "1" | var (ws+ var)*
//! var        := "x" digits              (decimal, 0 <= value < n, unique)
//! polynomial := term (ws* "+" ws* term)* | "0"
//! term       := monom | "0"
//! ```
//!
//! Whitespace is any of space, tab, CR, LF, VT. Parsing is all-or-nothing:
//! on error no partial value is produced.

use thiserror::Error;

use crate::monom::Monom;
use crate::order::MonomOrder;
use crate::poly::Poly;

/// Error produced by the monomial, polynomial and ideal parsers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was empty where a value was required.
    #[error("empty input")]
    Empty,
    /// A variable index was at least the number of variables.
    #[error("variable index {index} out of range (n = {nvars})")]
    VarOutOfRange {
        /// The offending index.
        index: usize,
        /// The ambient variable count.
        nvars: usize,
    },
    /// The same variable occurred twice in one monomial.
    #[error("variable x{0} repeated in a monomial")]
    DuplicateVar(usize),
    /// A token that fits no grammar rule.
    #[error("unexpected token {0:?}")]
    Unexpected(String),
    /// An ideal was not enclosed in braces.
    #[error("ideal must be enclosed in {{ }}")]
    Braces,
}

pub(crate) fn is_ws(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0b')
}

/// Parses a monomial over `nvars` variables.
pub(crate) fn monom(nvars: usize, s: &str) -> Result<Monom, ParseError> {
    let mut m = Monom::one(nvars);
    let mut tokens = s.split(is_ws).filter(|t| !t.is_empty()).peekable();
    let first = tokens.next().ok_or(ParseError::Empty)?;
    if first == "1" {
        return match tokens.next() {
            None => Ok(m),
            Some(t) => Err(ParseError::Unexpected(t.to_string())),
        };
    }
    let mut token = first;
    loop {
        let index = token
            .strip_prefix('x')
            .and_then(|digits| digits.parse::<usize>().ok())
            .ok_or_else(|| ParseError::Unexpected(token.to_string()))?;
        if index >= nvars {
            return Err(ParseError::VarOutOfRange { index, nvars });
        }
        if m.test(index) {
            return Err(ParseError::DuplicateVar(index));
        }
        m.set(index, true);
        match tokens.next() {
            None => return Ok(m),
            Some(t) => token = t,
        }
    }
}

/// Parses a polynomial over `nvars` variables in the given order.
pub(crate) fn poly<O: MonomOrder>(nvars: usize, order: O, s: &str) -> Result<Poly<O>, ParseError> {
    let trimmed = s.trim_matches(is_ws);
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut terms = Vec::new();
    for part in trimmed.split('+') {
        let part = part.trim_matches(is_ws);
        if part == "0" {
            continue;
        }
        terms.push(monom(nvars, part)?);
    }
    Ok(Poly::from_terms(nvars, order, terms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Lex;

    #[test]
    fn test_zero_terms_are_allowed() {
        let p = poly(3, Lex, "x0 + 0 + x1").unwrap();
        assert_eq!(p.len(), 2);
        let z = poly(3, Lex, "0").unwrap();
        assert!(z.is_empty());
        let z2 = poly(3, Lex, "0 + 0").unwrap();
        assert!(z2.is_empty());
    }

    #[test]
    fn test_whitespace_liberal() {
        let p = poly(4, Lex, "  x0\tx1 +\n x2  ").unwrap();
        assert_eq!(p.to_string(), "x2 + x0 x1");
    }

    #[test]
    fn test_repeated_terms_cancel() {
        let p = poly(3, Lex, "x0 + x0").unwrap();
        assert!(p.is_empty());
        let q = poly(3, Lex, "x0 + x0 + x0").unwrap();
        assert_eq!(q.to_string(), "x0");
    }

    #[test]
    fn test_errors() {
        assert_eq!(poly::<Lex>(3, Lex, ""), Err(ParseError::Empty));
        assert!(matches!(
            poly::<Lex>(3, Lex, "x0 + y1"),
            Err(ParseError::Unexpected(_))
        ));
        assert_eq!(
            poly::<Lex>(3, Lex, "x7"),
            Err(ParseError::VarOutOfRange { index: 7, nvars: 3 })
        );
        assert_eq!(
            monom(3, "x1 x1"),
            Err(ParseError::DuplicateVar(1))
        );
        // "1" must stand alone in a monomial
        assert!(monom(3, "1 x0").is_err());
    }
}
