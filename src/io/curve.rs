//! Write fit JSON files.
//!
//! Fit JSON is the "portable" representation of a run:
//! - per-channel fitted segments for each method
//! - run metadata (time step)
//! - a precomputed sample grid per fit for quick plotting

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{ChannelFit, PiecewiseResult, Segment};
use crate::error::AppError;

/// Top-level fit JSON schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitFile {
    pub tool: String,
    pub step_seconds: f64,
    pub channels: Vec<ChannelFitFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelFitFile {
    pub channel: usize,
    pub fits: Vec<FitEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitEntry {
    pub method: String,
    pub segments: Vec<Segment>,
    pub grid: FitGrid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitGrid {
    pub time_seconds: Vec<f64>,
    pub temperature: Vec<f64>,
}

/// Write a fit JSON file covering every fitted channel.
pub fn write_fit_json(
    path: &Path,
    fits: &[ChannelFit],
    step_seconds: f64,
    grid_points: usize,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create fit JSON '{}': {e}", path.display()),
        )
    })?;

    let channels = fits
        .iter()
        .map(|channel_fit| ChannelFitFile {
            channel: channel_fit.channel,
            fits: channel_fit
                .fits
                .iter()
                .map(|fit| FitEntry {
                    method: fit.method.display_name().to_string(),
                    segments: fit.segments.clone(),
                    grid: build_grid(fit, grid_points),
                })
                .collect(),
        })
        .collect();

    let out = FitFile {
        tool: "tempfit".to_string(),
        step_seconds,
        channels,
    };

    serde_json::to_writer_pretty(file, &out)
        .map_err(|e| AppError::new(2, format!("Failed to write fit JSON: {e}")))?;

    Ok(())
}

fn build_grid(fit: &PiecewiseResult, n: usize) -> FitGrid {
    let n = n.max(2);
    let x0 = fit.x_min();
    let x1 = fit.x_max();

    let mut time_seconds = Vec::with_capacity(n);
    let mut temperature = Vec::with_capacity(n);

    for i in 0..n {
        let u = i as f64 / (n as f64 - 1.0);
        let x = x0 + u * (x1 - x0);
        time_seconds.push(x);
        temperature.push(fit.evaluate(x).unwrap_or(f64::NAN));
    }

    FitGrid {
        time_seconds,
        temperature,
    }
}
