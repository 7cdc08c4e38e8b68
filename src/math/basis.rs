//! Monomial basis for the polynomial least-squares fit.
//!
//! The fit uses the first two monomials:
//!
//! - `basis(0, x) = 1`
//! - `basis(m, x) = x` for `m >= 1`
//!
//! so a basis size of 2 models `y = c0 + c1·x`. Larger indices deliberately
//! stay at degree 1; the normal-equation builder accepts any basis size, but
//! every current caller fits a line.

/// Evaluate the `m`-th basis function at `x`.
pub fn monomial(m: usize, x: f64) -> f64 {
    if m == 0 { 1.0 } else { x }
}
