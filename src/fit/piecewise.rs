//! Piecewise linear interpolation.
//!
//! One segment per consecutive sample pair, passing exactly through both
//! endpoints. Only values match at shared knots; derivatives are free.

use crate::domain::{Dataset, FitMethod, PiecewiseResult, Segment};
use crate::error::FitError;
use crate::fit::Fitter;

/// Connects consecutive samples with exact two-point lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct PiecewiseLinearFitter;

impl Fitter for PiecewiseLinearFitter {
    fn method(&self) -> FitMethod {
        FitMethod::PiecewiseLinear
    }

    fn fit(&self, data: &Dataset) -> Result<PiecewiseResult, FitError> {
        let points = data.points();
        if points.len() < 2 {
            return Err(FitError::too_few_points(
                self.method().display_name(),
                2,
                points.len(),
            ));
        }

        let mut segments = Vec::with_capacity(points.len() - 1);
        for i in 0..points.len() - 1 {
            let (x0, y0) = points[i];
            let (x1, y1) = points[i + 1];

            // The unique line through both points, in absolute x. Works for
            // either ordering of x0 and x1; only x0 == x1 is degenerate, and
            // the dataset contract rules that out.
            let slope = (y1 - y0) / (x1 - x0);
            let intercept = y0 - slope * x0;

            segments.push(Segment {
                x_left: x0,
                x_right: x1,
                origin: 0.0,
                coefficients: vec![intercept, slope],
            });
        }

        Ok(PiecewiseResult {
            method: self.method(),
            segments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lecture_data() -> Dataset {
        Dataset::from_pairs(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 8.0), (3.0, 18.0)])
    }

    #[test]
    fn recovers_known_segments() {
        // Known answer: [2x, 6x-4, 10x-12].
        let fit = PiecewiseLinearFitter.fit(&lecture_data()).unwrap();
        assert_eq!(fit.segments.len(), 3);

        let expected = [[0.0, 2.0], [-4.0, 6.0], [-12.0, 10.0]];
        for (seg, want) in fit.segments.iter().zip(expected.iter()) {
            assert!((seg.coefficients[0] - want[0]).abs() < 1e-9);
            assert!((seg.coefficients[1] - want[1]).abs() < 1e-9);
        }
    }

    #[test]
    fn segments_partition_the_domain() {
        let data = lecture_data();
        let fit = PiecewiseLinearFitter.fit(&data).unwrap();

        assert_eq!(fit.segments.len(), data.len() - 1);
        assert_eq!(fit.x_min(), data.x_min());
        assert_eq!(fit.x_max(), data.x_max());
        for pair in fit.segments.windows(2) {
            assert_eq!(pair[0].x_right, pair[1].x_left);
        }
    }

    #[test]
    fn each_segment_passes_through_its_endpoints() {
        let data = lecture_data();
        let fit = PiecewiseLinearFitter.fit(&data).unwrap();

        for (i, seg) in fit.segments.iter().enumerate() {
            let (x0, y0) = data.points()[i];
            let (x1, y1) = data.points()[i + 1];
            assert!((seg.evaluate(x0) - y0).abs() < 1e-9);
            assert!((seg.evaluate(x1) - y1).abs() < 1e-9);
        }
    }

    #[test]
    fn two_points_suffice_one_point_does_not() {
        let ok = Dataset::from_pairs(vec![(0.0, 1.0), (1.0, 4.0)]);
        let fit = PiecewiseLinearFitter.fit(&ok).unwrap();
        assert_eq!(fit.segments.len(), 1);

        let too_small = Dataset::from_pairs(vec![(0.0, 1.0)]);
        let err = PiecewiseLinearFitter.fit(&too_small).unwrap_err();
        assert!(matches!(err, FitError::InvalidInput(_)));
    }
}
