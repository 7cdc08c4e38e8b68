//! Global least-squares line fit.
//!
//! Builds the normal equations `A·c = b` over the monomial basis and solves
//! them with the rank-tolerant SVD solver. The result is a single segment
//! spanning the dataset domain with coefficients in absolute `x`
//! (`origin = 0`).

use crate::domain::{Dataset, FitMethod, PiecewiseResult, Segment};
use crate::error::FitError;
use crate::fit::Fitter;
use crate::math::{normal_matrix, normal_rhs, solve_least_squares};

/// Fits `y = c0 + c1·x + ...` over the whole dataset.
#[derive(Debug, Clone, Copy)]
pub struct LeastSquaresFitter {
    basis_size: usize,
}

impl LeastSquaresFitter {
    pub fn new(basis_size: usize) -> Self {
        LeastSquaresFitter { basis_size }
    }

    /// Solve for the coefficient vector only (no interval bookkeeping).
    pub fn coefficients(&self, data: &Dataset) -> Result<Vec<f64>, FitError> {
        let method = self.method().display_name();
        if data.is_empty() {
            return Err(FitError::too_few_points(method, 1, 0));
        }

        let xs = data.xs();
        let ys = data.ys();
        let a = normal_matrix(self.basis_size, &xs)?;
        let b = normal_rhs(self.basis_size, &xs, &ys)?;

        let c = solve_least_squares(&a, &b).ok_or_else(|| {
            FitError::InvalidInput(format!("{method} produced a non-finite solution"))
        })?;
        Ok(c.iter().copied().collect())
    }
}

impl Default for LeastSquaresFitter {
    /// Basis size 2: fit a line.
    fn default() -> Self {
        LeastSquaresFitter::new(2)
    }
}

impl Fitter for LeastSquaresFitter {
    fn method(&self) -> FitMethod {
        FitMethod::LeastSquares
    }

    fn fit(&self, data: &Dataset) -> Result<PiecewiseResult, FitError> {
        let coefficients = self.coefficients(data)?;
        Ok(PiecewiseResult {
            method: self.method(),
            segments: vec![Segment {
                x_left: data.x_min(),
                x_right: data.x_max(),
                origin: 0.0,
                coefficients,
            }],
        })
    }
}
