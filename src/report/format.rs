//! Render fitted results and sample tables as printable text.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized
//!
//! Segment lines use the fixed shape
//! `<x_low> <= x < <x_high>; y = <coefficients>; <method name>`
//! with 3-decimal coefficients, so downstream scripts can grep them.

use crate::domain::{ChannelFit, FitConfig, PiecewiseResult, Segment};
use crate::io::ingest::IngestedData;

/// Format one segment as a single report line.
pub fn format_segment(seg: &Segment, method_name: &str) -> String {
    format!(
        "{:.3} <= x < {:.3}; y = {}; {method_name}",
        seg.x_left,
        seg.x_right,
        fmt_coefficients(&seg.coefficients),
    )
}

/// Format a whole fit, one line per segment.
pub fn format_result(result: &PiecewiseResult) -> String {
    let mut out = String::new();
    for seg in &result.segments {
        out.push_str(&format_segment(seg, result.method.display_name()));
        out.push('\n');
    }
    out
}

/// Format the run summary (input stats + per-channel fit overview).
pub fn format_run_summary(ingest: &IngestedData, fits: &[ChannelFit], config: &FitConfig) -> String {
    let mut out = String::new();

    out.push_str("=== tempfit - temperature series approximation ===\n");
    out.push_str(&format!("Input: {}\n", config.input_path.display()));
    out.push_str(&format!(
        "Rows: read={} used={} | channels={} | step={:.0}s\n",
        ingest.stats.rows_read,
        ingest.stats.rows_used,
        ingest.stats.n_channels,
        ingest.step_seconds,
    ));
    out.push_str(&format!(
        "Range: t=[{:.0}, {:.0}]s | temp=[{:.2}, {:.2}]\n",
        ingest.stats.time_min,
        ingest.stats.time_max,
        ingest.stats.temp_min,
        ingest.stats.temp_max,
    ));

    for err in &ingest.row_errors {
        out.push_str(&format!("  (skipped line {}) {}\n", err.line, err.message));
    }

    for channel_fit in fits {
        out.push_str(&format!("\nChannel C{}:\n", channel_fit.channel + 1));
        for fit in &channel_fit.fits {
            out.push_str(&format_result(fit));
        }
    }

    out
}

/// Format the parsed sample table (the `show` subcommand).
pub fn format_sample_table(ingest: &IngestedData) -> String {
    let mut out = String::new();

    out.push_str("time(sec)\ttemperature (C)\n");
    out.push('\t');
    for c in 0..ingest.stats.n_channels {
        out.push_str(&format!("\tC{}", c + 1));
    }
    out.push('\n');

    for row in 0..ingest.stats.rows_used {
        let time = row as f64 * ingest.step_seconds;
        out.push_str(&format!("{time:.0}\t"));
        for channel in &ingest.channels {
            out.push_str(&format!("\t{:.2}", channel.points()[row].1));
        }
        out.push('\n');
    }

    out
}

fn fmt_coefficients(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{x:.3}")).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FitMethod;

    #[test]
    fn segment_line_has_fixed_shape() {
        let seg = Segment {
            x_left: 1.0,
            x_right: 2.0,
            origin: 1.0,
            coefficients: vec![2.0, 0.75, 0.0, 0.25],
        };
        assert_eq!(
            format_segment(&seg, "cubic-spline"),
            "1.000 <= x < 2.000; y = [2.000, 0.750, 0.000, 0.250]; cubic-spline"
        );
    }

    #[test]
    fn result_emits_one_line_per_segment() {
        let result = PiecewiseResult {
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
        };
        let text = format_result(&result);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "0.000 <= x < 1.000; y = [0.000, 2.000]; piecewise-linear");
        assert_eq!(lines[1], "1.000 <= x < 2.000; y = [-4.000, 6.000]; piecewise-linear");
    }

    #[test]
    fn sample_table_lists_channels_in_columns() {
        let ingest = crate::io::ingest::parse_samples("61.0 50.0\n62.5 51.0\n", 30.0).unwrap();
        let table = format_sample_table(&ingest);
        assert!(table.contains("C1"));
        assert!(table.contains("C2"));
        assert!(table.contains("30\t"));
        assert!(table.contains("62.50"));
    }
}
