//! Rank-tolerant least-squares solver.
//!
//! Every fit in this project reduces to a small dense solve:
//!
//! - the global line fit solves the 2×2 normal equations
//! - each spline window solves an 8×8 constraint system
//!
//! Both are usually exactly determined, but degenerate data (repeated or
//! nearly repeated positions) can make them rank deficient. We solve via SVD
//! so those cases fall back to the minimum-norm least-squares solution
//! instead of failing.

use nalgebra::{DMatrix, DVector};

/// Solve `A·c = b` in the least-squares sense using SVD.
///
/// Returns `None` only when no tolerance yields a finite solution.
pub fn solve_least_squares(a: &DMatrix<f64>, b: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = a.clone().svd(true, true);

    // Try progressively looser singular-value cutoffs; a strict cutoff gives
    // the most faithful solution, a looser one rescues near-singular systems.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(c) = svd.solve(b, tol) {
            if c.iter().all(|v| v.is_finite()) {
                return Some(c);
            }
        }
    }

    None
}
