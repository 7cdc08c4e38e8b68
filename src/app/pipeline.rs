//! Shared "fit pipeline" logic used by every front-end path.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! ingest -> per-channel fits -> (reporting / exports)
//!
//! Channels are independent, so they are fitted in parallel; results come
//! back in channel order regardless.

use rayon::prelude::*;

use crate::domain::{ChannelFit, Dataset, FitConfig};
use crate::error::AppError;
use crate::fit::fitter_for;
use crate::io::ingest::{IngestedData, load_samples};

/// All computed outputs of a single `tempfit fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedData,
    pub fits: Vec<ChannelFit>,
}

/// Execute the full fitting pipeline and return the computed outputs.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    let ingest = load_samples(&config.input_path, config.step_seconds)?;
    let fits = fit_channels(&ingest, config)?;
    Ok(RunOutput { ingest, fits })
}

/// Fit the selected channels of already-ingested data.
pub fn fit_channels(ingest: &IngestedData, config: &FitConfig) -> Result<Vec<ChannelFit>, AppError> {
    let selected: Vec<usize> = match config.channel {
        Some(c) => {
            if c >= ingest.channels.len() {
                return Err(AppError::new(
                    3,
                    format!(
                        "Channel C{} does not exist; input has {} channel(s).",
                        c + 1,
                        ingest.channels.len()
                    ),
                ));
            }
            vec![c]
        }
        None => (0..ingest.channels.len()).collect(),
    };

    selected
        .par_iter()
        .map(|&c| fit_channel(&ingest.channels[c], c, config))
        .collect()
}

fn fit_channel(data: &Dataset, channel: usize, config: &FitConfig) -> Result<ChannelFit, AppError> {
    let mut fits = Vec::new();
    for method in config.method_spec.methods() {
        let fitter = fitter_for(method, config.basis_size);
        fits.push(fitter.fit(data)?);
    }
    Ok(ChannelFit { channel, fits })
}
