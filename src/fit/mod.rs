//! Fitting strategies.
//!
//! Three independent strategies over the same dataset shape:
//!
//! - [`LeastSquaresFitter`]: one global line via the normal equations
//! - [`PiecewiseLinearFitter`]: one exact segment per consecutive pair
//! - [`CubicSplineFitter`]: two cubic segments per 3-point sliding window
//!
//! They share no state; each consumes a [`Dataset`] and produces an
//! independent [`PiecewiseResult`].

pub mod least_squares;
pub mod piecewise;
pub mod spline;

pub use least_squares::*;
pub use piecewise::*;
pub use spline::*;

use crate::domain::{Dataset, FitMethod, PiecewiseResult};
use crate::error::FitError;

/// Common capability implemented by every fitting strategy.
pub trait Fitter {
    fn method(&self) -> FitMethod;

    /// Fit the dataset, returning the segments of the approximating function.
    ///
    /// Fails with `InvalidInput` when the dataset is smaller than
    /// `self.method().min_points()`.
    fn fit(&self, data: &Dataset) -> Result<PiecewiseResult, FitError>;
}

/// Construct the fitter for a method.
pub fn fitter_for(method: FitMethod, basis_size: usize) -> Box<dyn Fitter> {
    match method {
        FitMethod::LeastSquares => Box::new(LeastSquaresFitter::new(basis_size)),
        FitMethod::PiecewiseLinear => Box::new(PiecewiseLinearFitter),
        FitMethod::CubicSpline => Box::new(CubicSplineFitter),
    }
}
