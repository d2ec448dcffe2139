//! Property-based tests for monomials and polynomials.
