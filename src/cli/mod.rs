//! Command-line parsing for the temperature-series fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::MethodSpec;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "tempfit", version, about = "Temperature time-series function approximation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit approximating functions to a sample file and print the segments.
    Fit(FitArgs),
    /// Print the parsed sample table without fitting.
    Show(ShowArgs),
    /// Run the fitters against the built-in reference datasets.
    Check,
}

/// Common options for fitting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Whitespace-delimited sample file (one row per time step, one column
    /// per channel).
    pub file: PathBuf,

    /// Seconds between consecutive sample rows.
    #[arg(long, default_value_t = 30.0)]
    pub step: f64,

    /// Fit a single channel, numbered from 1 as in the report labels
    /// (C1, C2, ...); default is all channels.
    #[arg(short = 'c', long)]
    pub channel: Option<usize>,

    /// Which fitting strategies to run.
    #[arg(short = 'm', long, value_enum, default_value_t = MethodSpec::All)]
    pub method: MethodSpec,

    /// Basis size for the least-squares fit (2 = line).
    #[arg(long, default_value_t = 2)]
    pub basis: usize,

    /// Export per-segment results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export fits (segments + sampled grid) to JSON.
    #[arg(long = "export-fit")]
    pub export_fit: Option<PathBuf>,

    /// Sample count for the exported fit grid.
    #[arg(long, default_value_t = 101)]
    pub grid_points: usize,
}

/// Options for printing the sample table.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Whitespace-delimited sample file.
    pub file: PathBuf,

    /// Seconds between consecutive sample rows.
    #[arg(long, default_value_t = 30.0)]
    pub step: f64,
}
