//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON/CSV
//! - reloaded later for comparisons

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which fitting strategies to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MethodSpec {
    /// Run all three fitters.
    All,
    /// Global least-squares line over the whole channel.
    LeastSquares,
    /// One line segment per consecutive sample pair.
    Linear,
    /// Piecewise cubic with continuity constraints.
    Spline,
}

impl MethodSpec {
    /// Concrete methods selected by this setting, in a fixed order.
    pub fn methods(self) -> Vec<FitMethod> {
        match self {
            MethodSpec::All => vec![
                FitMethod::LeastSquares,
                FitMethod::PiecewiseLinear,
                FitMethod::CubicSpline,
            ],
            MethodSpec::LeastSquares => vec![FitMethod::LeastSquares],
            MethodSpec::Linear => vec![FitMethod::PiecewiseLinear],
            MethodSpec::Spline => vec![FitMethod::CubicSpline],
        }
    }
}

/// Concrete fitting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitMethod {
    LeastSquares,
    PiecewiseLinear,
    CubicSpline,
}

impl FitMethod {
    /// Human-readable label used in reports and formatted segments.
    pub fn display_name(self) -> &'static str {
        match self {
            FitMethod::LeastSquares => "least-squares",
            FitMethod::PiecewiseLinear => "piecewise-linear",
            FitMethod::CubicSpline => "cubic-spline",
        }
    }

    /// Minimum dataset size the method can fit.
    pub fn min_points(self) -> usize {
        match self {
            FitMethod::LeastSquares => 1,
            FitMethod::PiecewiseLinear => 2,
            FitMethod::CubicSpline => 3,
        }
    }
}

/// An ordered sequence of `(position, value)` samples for one channel.
///
/// Positions are expected to be strictly increasing with no duplicates;
/// the ingest layer guarantees this by deriving positions from the row
/// index and a fixed time step. The fitters themselves only rely on
/// consecutive positions being distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    points: Vec<(f64, f64)>,
}

impl Dataset {
    /// Build a dataset from explicit `(position, value)` pairs.
    pub fn from_pairs(points: Vec<(f64, f64)>) -> Self {
        Dataset { points }
    }

    /// Build a dataset from evenly spaced values: sample `i` sits at
    /// position `i * step`.
    pub fn from_series(values: &[f64], step: f64) -> Self {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64 * step, v))
            .collect();
        Dataset { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Positions in dataset order.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|&(x, _)| x).collect()
    }

    /// Values in dataset order.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, y)| y).collect()
    }

    pub fn x_min(&self) -> f64 {
        self.points.iter().map(|&(x, _)| x).fold(f64::INFINITY, f64::min)
    }

    pub fn x_max(&self) -> f64 {
        self.points
            .iter()
            .map(|&(x, _)| x)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// One fitted polynomial piece, valid on the half-open interval
/// `[x_left, x_right)`.
///
/// `coefficients[i]` multiplies `(x - origin)^i`. The global and
/// piecewise-linear fits use `origin = 0` (coefficients in absolute `x`);
/// spline segments expand around their left knot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x_left: f64,
    pub x_right: f64,
    pub origin: f64,
    pub coefficients: Vec<f64>,
}

impl Segment {
    /// Whether `x` falls inside this segment's half-open interval.
    pub fn contains(&self, x: f64) -> bool {
        self.x_left <= x && x < self.x_right
    }

    /// Evaluate the polynomial at `x` (Horner form around the origin).
    pub fn evaluate(&self, x: f64) -> f64 {
        let t = x - self.origin;
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * t + c)
    }
}

/// An ordered sequence of fitted segments for one method on one channel.
///
/// For the linear fits, segment intervals partition the dataset domain.
/// The spline fitter re-covers interior intervals (each window emits two
/// segments, and consecutive windows share a knot span); evaluation picks
/// the first segment containing `x`, which is the earliest window's piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiecewiseResult {
    pub method: FitMethod,
    pub segments: Vec<Segment>,
}

impl PiecewiseResult {
    pub fn x_min(&self) -> f64 {
        self.segments
            .iter()
            .map(|s| s.x_left)
            .fold(f64::INFINITY, f64::min)
    }

    pub fn x_max(&self) -> f64 {
        self.segments
            .iter()
            .map(|s| s.x_right)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Evaluate the piecewise function at `x`.
    ///
    /// Intervals are half-open, except that the right edge of the domain
    /// belongs to the final covering segment. Returns `None` outside the
    /// fitted domain.
    pub fn evaluate(&self, x: f64) -> Option<f64> {
        if let Some(seg) = self.segments.iter().find(|s| s.contains(x)) {
            return Some(seg.evaluate(x));
        }
        let right_edge = self.x_max();
        if x == right_edge {
            let seg = self.segments.iter().rfind(|s| s.x_right == right_edge)?;
            return Some(seg.evaluate(x));
        }
        None
    }
}

/// All fits computed for a single channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelFit {
    pub channel: usize,
    pub fits: Vec<PiecewiseResult>,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub input_path: PathBuf,
    /// Seconds between consecutive sample rows.
    pub step_seconds: f64,
    /// Fit a single channel (0-based) or all channels.
    pub channel: Option<usize>,
    pub method_spec: MethodSpec,
    /// Basis size for the least-squares fit (2 = line).
    pub basis_size: usize,

    pub export_segments: Option<PathBuf>,
    pub export_fit: Option<PathBuf>,
    /// Sample count for the exported fit grid.
    pub grid_points: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_result() -> PiecewiseResult {
        PiecewiseResult {
            method: FitMethod::PiecewiseLinear,
            segments: vec![
                Segment {
                    x_left: 0.0,
                    x_right: 1.0,
                    origin: 0.0,
                    coefficients: vec![0.0, 2.0],
                },
                Segment {
                    x_left: 1.0,
                    x_right: 2.0,
                    origin: 0.0,
                    coefficients: vec![-4.0, 6.0],
                },
            ],
        }
    }

    #[test]
    fn segment_evaluates_around_origin() {
        // 2 + 0.75(x-1) + 0.25(x-1)^3 at x = 2.
        let seg = Segment {
            x_left: 1.0,
            x_right: 2.0,
            origin: 1.0,
            coefficients: vec![2.0, 0.75, 0.0, 0.25],
        };
        assert!((seg.evaluate(2.0) - 3.0).abs() < 1e-12);
        assert!((seg.evaluate(1.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn intervals_are_half_open() {
        let seg = &line_result().segments[0];
        assert!(seg.contains(0.0));
        assert!(seg.contains(0.999));
        assert!(!seg.contains(1.0));
    }

    #[test]
    fn evaluate_picks_covering_segment_and_closes_right_edge() {
        let result = line_result();
        assert_eq!(result.evaluate(0.5), Some(1.0));
        assert_eq!(result.evaluate(1.0), Some(2.0));
        // Right edge of the domain uses the final segment: -4 + 6·2 = 8.
        assert_eq!(result.evaluate(2.0), Some(8.0));
        assert_eq!(result.evaluate(2.5), None);
        assert_eq!(result.evaluate(-0.1), None);
    }

    #[test]
    fn dataset_from_series_spaces_positions_by_step() {
        let data = Dataset::from_series(&[40.0, 41.5, 39.0], 30.0);
        assert_eq!(data.len(), 3);
        assert_eq!(data.points()[1], (30.0, 41.5));
        assert_eq!(data.x_min(), 0.0);
        assert_eq!(data.x_max(), 60.0);
    }

    #[test]
    fn method_spec_expansion_order_is_fixed() {
        assert_eq!(
            MethodSpec::All.methods(),
            vec![
                FitMethod::LeastSquares,
                FitMethod::PiecewiseLinear,
                FitMethod::CubicSpline
            ]
        );
        assert_eq!(MethodSpec::Spline.methods(), vec![FitMethod::CubicSpline]);
    }
}
