//! Whitespace-delimited sample ingest and normalization.
//!
//! The input format is one row per time step, one numeric column per sensor
//! channel. Rows are `step_seconds` apart, so channel `c` becomes a dataset
//! of `(row_index * step, value)` pairs.
//!
//! Design goals:
//! - **Row-level validation**: skip bad rows, but report what happened
//! - **Deterministic behavior**: channel count fixed by the first usable row
//! - **Separation of concerns**: no fitting logic here
//!
//! Token parsing is lenient about trailing junk: `"58.0C"` reads as `58.0`,
//! matching logger exports that glue a unit onto the number.

use std::fs;
use std::path::Path;

use crate::domain::Dataset;
use crate::error::AppError;

/// Summary stats about the samples actually used for fitting.
#[derive(Debug, Clone)]
pub struct SampleStats {
    pub rows_read: usize,
    pub rows_used: usize,
    pub n_channels: usize,
    pub time_min: f64,
    pub time_max: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

/// A row-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: one dataset per channel + stats + row errors.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub channels: Vec<Dataset>,
    pub step_seconds: f64,
    pub stats: SampleStats,
    pub row_errors: Vec<RowError>,
}

/// Load a sample file and split it into per-channel datasets.
pub fn load_samples(path: &Path, step_seconds: f64) -> Result<IngestedData, AppError> {
    let text = fs::read_to_string(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to read samples '{}': {e}", path.display()),
        )
    })?;
    parse_samples(&text, step_seconds)
}

/// Parse sample text into per-channel datasets.
///
/// The first row that parses fixes the channel count; later rows with a
/// different count are recorded as row errors and skipped. Positions are
/// assigned to *used* rows only, so a skipped row does not leave a gap.
pub fn parse_samples(text: &str, step_seconds: f64) -> Result<IngestedData, AppError> {
    let mut series: Vec<Vec<f64>> = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        rows_read += 1;

        let values: Vec<Option<f64>> = line
            .split_whitespace()
            .map(parse_leading_float)
            .collect();

        if values.iter().any(|v| v.is_none()) {
            row_errors.push(RowError {
                line: line_no,
                message: "Non-numeric token".to_string(),
            });
            continue;
        }
        let values: Vec<f64> = values.into_iter().flatten().collect();

        if series.is_empty() {
            series = vec![Vec::new(); values.len()];
        } else if values.len() != series.len() {
            row_errors.push(RowError {
                line: line_no,
                message: format!(
                    "Expected {} column(s), got {}",
                    series.len(),
                    values.len()
                ),
            });
            continue;
        }

        for (channel, value) in series.iter_mut().zip(values) {
            channel.push(value);
        }
    }

    let rows_used = series.first().map_or(0, Vec::len);
    if rows_used == 0 {
        return Err(AppError::new(3, "No usable sample rows in input."));
    }

    let temp_min = series
        .iter()
        .flatten()
        .copied()
        .fold(f64::INFINITY, f64::min);
    let temp_max = series
        .iter()
        .flatten()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    let stats = SampleStats {
        rows_read,
        rows_used,
        n_channels: series.len(),
        time_min: 0.0,
        time_max: (rows_used - 1) as f64 * step_seconds,
        temp_min,
        temp_max,
    };

    let channels = series
        .iter()
        .map(|values| Dataset::from_series(values, step_seconds))
        .collect();

    Ok(IngestedData {
        channels,
        step_seconds,
        stats,
        row_errors,
    })
}

/// Parse the leading numeric prefix of a token: optional sign, digits,
/// optional fractional part. Trailing non-numeric characters are ignored;
/// a token with no numeric prefix yields `None`.
fn parse_leading_float(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            end = frac_end;
        }
    }

    token[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_numeric_prefix() {
        assert_eq!(parse_leading_float("61.0"), Some(61.0));
        assert_eq!(parse_leading_float("+58"), Some(58.0));
        assert_eq!(parse_leading_float("-3.5"), Some(-3.5));
        assert_eq!(parse_leading_float("67C"), Some(67.0));
        assert_eq!(parse_leading_float("42.75degC"), Some(42.75));
        assert_eq!(parse_leading_float("abc"), None);
        assert_eq!(parse_leading_float(""), None);
        // A bare trailing dot does not consume the dot.
        assert_eq!(parse_leading_float("12."), Some(12.0));
    }

    #[test]
    fn splits_rows_into_channel_series() {
        let text = "61.0 63.0 50.0 58.0\n80.0 81.0 68.0 77.0\n62.0 63.0 52.0 60.0\n";
        let ingest = parse_samples(text, 30.0).unwrap();

        assert_eq!(ingest.stats.n_channels, 4);
        assert_eq!(ingest.stats.rows_read, 3);
        assert_eq!(ingest.stats.rows_used, 3);
        assert_eq!(ingest.stats.time_max, 60.0);
        assert!(ingest.row_errors.is_empty());

        let ch2 = &ingest.channels[2];
        assert_eq!(ch2.points(), &[(0.0, 50.0), (30.0, 68.0), (60.0, 52.0)]);
    }

    #[test]
    fn bad_rows_are_skipped_and_reported() {
        let text = "61.0 63.0\njunk row\n62.0 64.0 65.0\n70.0 71.0\n";
        let ingest = parse_samples(text, 30.0).unwrap();

        assert_eq!(ingest.stats.n_channels, 2);
        assert_eq!(ingest.stats.rows_read, 4);
        assert_eq!(ingest.stats.rows_used, 2);
        assert_eq!(ingest.row_errors.len(), 2);
        assert_eq!(ingest.row_errors[0].line, 2);
        assert_eq!(ingest.row_errors[1].line, 3);

        // Used rows stay contiguous in time.
        assert_eq!(ingest.channels[0].points(), &[(0.0, 61.0), (30.0, 70.0)]);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(parse_samples("", 30.0).is_err());
        assert!(parse_samples("\n  \n", 30.0).is_err());
        assert!(parse_samples("x y z\n", 30.0).is_err());
    }

    #[test]
    fn stats_cover_all_channels() {
        let text = "10.0 90.0\n20.0 80.0\n";
        let ingest = parse_samples(text, 1.0).unwrap();
        assert_eq!(ingest.stats.temp_min, 10.0);
        assert_eq!(ingest.stats.temp_max, 90.0);
    }
}
