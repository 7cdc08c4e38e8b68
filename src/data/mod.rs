//! Built-in reference datasets with known closed-form fits.
//!
//! Used by the `check` subcommand and by tests to confirm the fitters
//! against hand-worked answers.

use crate::domain::Dataset;

/// Four points whose line fits are known exactly:
///
/// - least squares: `p = -2 + 6x`
/// - piecewise linear: `[2x, 6x-4, 10x-12]`
pub fn line_reference() -> Dataset {
    Dataset::from_pairs(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 8.0), (3.0, 18.0)])
}

/// Three points whose natural cubic spline is worked in Burden,
/// *Numerical Analysis*:
///
/// - `S0(x) = 2 + 3/4 (x-1) + 1/4 (x-1)^3` on `[1, 2)`
/// - `S1(x) = 3 + 3/2 (x-2) + 3/4 (x-2)^2 - 1/4 (x-2)^3` on `[2, 3)`
pub fn spline_reference() -> Dataset {
    Dataset::from_pairs(vec![(1.0, 2.0), (2.0, 3.0), (3.0, 5.0)])
}
