//! Export fitted segments to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts: one row per segment, coefficient columns padded to the cubic
//! width.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::ChannelFit;
use crate::error::AppError;

const MAX_COEFFICIENTS: usize = 4;

/// Write every fitted segment to a CSV file.
pub fn write_segments_csv(path: &Path, fits: &[ChannelFit]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create export CSV '{}': {e}", path.display()),
        )
    })?;

    writeln!(file, "channel,method,segment,x_left,x_right,origin,c0,c1,c2,c3")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for channel_fit in fits {
        for fit in &channel_fit.fits {
            for (i, seg) in fit.segments.iter().enumerate() {
                let mut coeffs: Vec<String> = seg
                    .coefficients
                    .iter()
                    .map(|c| format!("{c:.10}"))
                    .collect();
                coeffs.resize(MAX_COEFFICIENTS, String::new());

                writeln!(
                    file,
                    "{},{},{},{:.10},{:.10},{:.10},{}",
                    channel_fit.channel,
                    fit.method.display_name(),
                    i,
                    seg.x_left,
                    seg.x_right,
                    seg.origin,
                    coeffs.join(","),
                )
                .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
            }
        }
    }

    Ok(())
}
