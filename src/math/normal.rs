//! Normal-equation construction for polynomial least squares.
//!
//! For a basis size `n` and samples `(x_r, y_r)` we build:
//!
//! ```text
//! A[i][j] = Σ_r basis(i, x_r) · basis(j, x_r)    (n × n)
//! b[i]    = Σ_r basis(i, x_r) · y_r              (length n)
//! ```
//!
//! The builder is pure: it allocates and returns the matrices without
//! touching any shared state. Solving is left to [`crate::math::ols`].

use nalgebra::{DMatrix, DVector};

use crate::error::FitError;
use crate::math::basis::monomial;

/// Build the `n × n` Gram matrix of basis products over `xs`.
///
/// Fails with `InvalidInput` when `xs` is empty.
pub fn normal_matrix(n: usize, xs: &[f64]) -> Result<DMatrix<f64>, FitError> {
    if xs.is_empty() {
        return Err(FitError::too_few_points("normal equations", 1, 0));
    }

    let mut a = DMatrix::<f64>::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            a[(i, j)] = xs.iter().map(|&x| monomial(i, x) * monomial(j, x)).sum();
        }
    }
    Ok(a)
}

/// Build the length-`n` right-hand side of basis/observation products.
///
/// Fails with `InvalidInput` when `xs` is empty. `xs` and `ys` are paired
/// positionally; extra entries on either side are ignored.
pub fn normal_rhs(n: usize, xs: &[f64], ys: &[f64]) -> Result<DVector<f64>, FitError> {
    if xs.is_empty() {
        return Err(FitError::too_few_points("normal equations", 1, 0));
    }

    let mut b = DVector::<f64>::zeros(n);
    for i in 0..n {
        b[i] = xs
            .iter()
            .zip(ys.iter())
            .map(|(&x, &y)| monomial(i, x) * y)
            .sum();
    }
    Ok(b)
}
