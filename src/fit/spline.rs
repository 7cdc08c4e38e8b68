//! Piecewise cubic spline fit over sliding 3-point windows.
//!
//! The dataset is processed as overlapping windows `(p0, p1, p2)` advancing
//! one point per iteration; every window contributes two cubic segments, for
//! `2(k-2)` segments in total. Within a window the two cubics
//!
//! ```text
//! S0(t) = a0 + a1 t + a2 t^2 + a3 t^3,   t = x - x0,   on [x0, x1)
//! S1(u) = b0 + b1 u + b2 u^2 + b3 u^3,   u = x - x1,   on [x1, x2)
//! ```
//!
//! satisfy value interpolation at all three knots, first- and
//! second-derivative continuity at `x1`, and natural (zero curvature)
//! boundaries at `x0` and `x2`.
//!
//! Because every window applies its own natural boundaries, curvature is
//! pinned to zero at every interior knot too, not just at the dataset ends.
//! That per-window behavior is intentional and kept as-is; a single global
//! tridiagonal natural spline would give a different (smoother) curve.

use nalgebra::{DMatrix, DVector};

use crate::domain::{Dataset, FitMethod, PiecewiseResult, Segment};
use crate::error::FitError;
use crate::fit::Fitter;
use crate::math::solve_least_squares;

/// Fits two cubic segments per 3-point sliding window.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubicSplineFitter;

impl Fitter for CubicSplineFitter {
    fn method(&self) -> FitMethod {
        FitMethod::CubicSpline
    }

    fn fit(&self, data: &Dataset) -> Result<PiecewiseResult, FitError> {
        let points = data.points();
        if points.len() < 3 {
            return Err(FitError::too_few_points(
                self.method().display_name(),
                3,
                points.len(),
            ));
        }

        let mut segments = Vec::with_capacity(2 * (points.len() - 2));
        for w in 0..points.len() - 2 {
            let (left, right) = fit_window(
                self.method().display_name(),
                points[w],
                points[w + 1],
                points[w + 2],
            )?;
            segments.push(left);
            segments.push(right);
        }

        Ok(PiecewiseResult {
            method: self.method(),
            segments,
        })
    }
}

/// Solve one window's 8x8 constraint system and split the solution into the
/// two cubic segments.
fn fit_window(
    method: &str,
    p0: (f64, f64),
    p1: (f64, f64),
    p2: (f64, f64),
) -> Result<(Segment, Segment), FitError> {
    let (x0, y0) = p0;
    let (x1, y1) = p1;
    let (x2, y2) = p2;
    let h0 = x1 - x0;
    let h1 = x2 - x1;

    // Unknowns: [a0, a1, a2, a3, b0, b1, b2, b3].
    // Rows, in order:
    //   S0(0)  = y0
    //   S1(0)  = y1
    //   S0(h0) = y1
    //   S1(h1) = y2
    //   S0'(h0) - S1'(0)  = 0
    //   S0''(h0) - S1''(0) = 0
    //   S0''(0)  = 0
    //   S1''(h1) = 0
    #[rustfmt::skip]
    let a = DMatrix::from_row_slice(8, 8, &[
        1.0, 0.0, 0.0,      0.0,          0.0, 0.0, 0.0,      0.0,
        0.0, 0.0, 0.0,      0.0,          1.0, 0.0, 0.0,      0.0,
        1.0, h0,  h0 * h0,  h0 * h0 * h0, 0.0, 0.0, 0.0,      0.0,
        0.0, 0.0, 0.0,      0.0,          1.0, h1,  h1 * h1,  h1 * h1 * h1,
        0.0, 1.0, 2.0 * h0, 3.0 * h0 * h0, 0.0, -1.0, 0.0,    0.0,
        0.0, 0.0, 2.0,      6.0 * h0,     0.0, 0.0, -2.0,     0.0,
        0.0, 0.0, 2.0,      0.0,          0.0, 0.0, 0.0,      0.0,
        0.0, 0.0, 0.0,      0.0,          0.0, 0.0, 2.0,      6.0 * h1,
    ]);

    let b = DVector::from_row_slice(&[y0, y1, y1, y2, 0.0, 0.0, 0.0, 0.0]);

    let c = solve_least_squares(&a, &b).ok_or_else(|| {
        FitError::InvalidInput(format!("{method} produced a non-finite solution"))
    })?;

    let left = Segment {
        x_left: x0,
        x_right: x1,
        origin: x0,
        coefficients: c.as_slice()[..4].to_vec(),
    };
    let right = Segment {
        x_left: x1,
        x_right: x2,
        origin: x1,
        coefficients: c.as_slice()[4..].to_vec(),
    };
    Ok((left, right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burden_data() -> Dataset {
        Dataset::from_pairs(vec![(1.0, 2.0), (2.0, 3.0), (3.0, 5.0)])
    }

    #[test]
    fn recovers_textbook_natural_spline() {
        // Natural spline through {1:2, 2:3, 3:5} (Burden, Numerical Analysis):
        //   S0(x) = 2 + 3/4 (x-1) + 1/4 (x-1)^3           on [1, 2)
        //   S1(x) = 3 + 3/2 (x-2) + 3/4 (x-2)^2 - 1/4 (x-2)^3  on [2, 3)
        let fit = CubicSplineFitter.fit(&burden_data()).unwrap();
        assert_eq!(fit.segments.len(), 2);

        let s0 = &fit.segments[0];
        assert_eq!((s0.x_left, s0.x_right, s0.origin), (1.0, 2.0, 1.0));
        let want0 = [2.0, 0.75, 0.0, 0.25];
        for (c, want) in s0.coefficients.iter().zip(want0.iter()) {
            assert!((c - want).abs() < 1e-9, "S0 coefficients {:?}", s0.coefficients);
        }

        let s1 = &fit.segments[1];
        assert_eq!((s1.x_left, s1.x_right, s1.origin), (2.0, 3.0, 2.0));
        let want1 = [3.0, 1.5, 0.75, -0.25];
        for (c, want) in s1.coefficients.iter().zip(want1.iter()) {
            assert!((c - want).abs() < 1e-9, "S1 coefficients {:?}", s1.coefficients);
        }
    }

    #[test]
    fn window_count_is_two_per_triple() {
        let data = Dataset::from_pairs(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 8.0), (3.0, 18.0)]);
        let fit = CubicSplineFitter.fit(&data).unwrap();
        // k = 4 points: 2 windows, 2 segments each.
        assert_eq!(fit.segments.len(), 4);
        assert_eq!(fit.x_min(), 0.0);
        assert_eq!(fit.x_max(), 3.0);
    }

    #[test]
    fn window_segments_interpolate_and_join_smoothly() {
        let data = Dataset::from_pairs(vec![(0.0, 1.0), (0.5, -1.0), (2.0, 4.0)]);
        let fit = CubicSplineFitter.fit(&data).unwrap();
        let (s0, s1) = (&fit.segments[0], &fit.segments[1]);

        // Value interpolation at all three knots.
        assert!((s0.evaluate(0.0) - 1.0).abs() < 1e-9);
        assert!((s0.evaluate(0.5) - (-1.0)).abs() < 1e-9);
        assert!((s1.evaluate(0.5) - (-1.0)).abs() < 1e-9);
        assert!((s1.evaluate(2.0) - 4.0).abs() < 1e-9);

        // First-derivative continuity at the middle knot:
        // S0'(h0) = a1 + 2 a2 h0 + 3 a3 h0^2 must equal S1'(0) = b1.
        let h0 = 0.5;
        let a = &s0.coefficients;
        let d0 = a[1] + 2.0 * a[2] * h0 + 3.0 * a[3] * h0 * h0;
        assert!((d0 - s1.coefficients[1]).abs() < 1e-8);

        // Natural boundaries: zero curvature at both window ends.
        assert!(s0.coefficients[2].abs() < 1e-9);
        let h1 = 1.5;
        let b = &s1.coefficients;
        assert!((2.0 * b[2] + 6.0 * b[3] * h1).abs() < 1e-8);
    }

    #[test]
    fn three_points_suffice_two_do_not() {
        assert!(CubicSplineFitter.fit(&burden_data()).is_ok());

        let too_small = Dataset::from_pairs(vec![(1.0, 2.0), (2.0, 3.0)]);
        let err = CubicSplineFitter.fit(&too_small).unwrap_err();
        assert!(matches!(err, FitError::InvalidInput(_)));
    }

    #[test]
    fn fit_is_deterministic() {
        let data = burden_data();
        assert_eq!(
            CubicSplineFitter.fit(&data).unwrap(),
            CubicSplineFitter.fit(&data).unwrap()
        );
    }
}
