//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the fit pipeline
//! - prints reports
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, FitArgs, ShowArgs};
use crate::domain::{FitConfig, MethodSpec};
use crate::error::AppError;
use crate::fit::fitter_for;

pub mod pipeline;

/// Entry point for the `tempfit` binary.
pub fn run() -> Result<(), AppError> {
    // We want `tempfit data.txt` to behave like `tempfit fit data.txt`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while keeping the short invocation.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Show(args) => handle_show(args),
        Command::Check => handle_check(),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args)?;
    let run = pipeline::run_fit(&config)?;

    println!(
        "{}",
        crate::report::format_run_summary(&run.ingest, &run.fits, &config)
    );

    if let Some(path) = &config.export_segments {
        crate::io::export::write_segments_csv(path, &run.fits)?;
    }
    if let Some(path) = &config.export_fit {
        crate::io::curve::write_fit_json(path, &run.fits, config.step_seconds, config.grid_points)?;
    }

    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let ingest = crate::io::ingest::load_samples(&args.file, args.step)?;
    print!("{}", crate::report::format_sample_table(&ingest));
    Ok(())
}

/// Fit the built-in reference datasets and print the known-answer results.
fn handle_check() -> Result<(), AppError> {
    let line_data = crate::data::line_reference();
    let spline_data = crate::data::spline_reference();

    let mut fits = Vec::new();
    for method in MethodSpec::All.methods() {
        let data = match method {
            crate::domain::FitMethod::CubicSpline => &spline_data,
            _ => &line_data,
        };
        fits.push(fitter_for(method, 2).fit(data)?);
    }

    println!("=== tempfit check - reference datasets ===");
    for fit in &fits {
        print!("{}", crate::report::format_result(fit));
    }
    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> Result<FitConfig, AppError> {
    // The flag is 1-based to match the C1, C2, ... labels in reports;
    // internally channels are 0-indexed.
    let channel = match args.channel {
        Some(0) => {
            return Err(AppError::new(2, "Channels are numbered from 1 (C1, C2, ...)."));
        }
        Some(c) => Some(c - 1),
        None => None,
    };

    Ok(FitConfig {
        input_path: args.file.clone(),
        step_seconds: args.step,
        channel,
        method_spec: args.method,
        basis_size: args.basis,
        export_segments: args.export.clone(),
        export_fit: args.export_fit.clone(),
        grid_points: args.grid_points,
    })
}

/// Rewrite argv so `tempfit <file>` defaults to `tempfit fit <file>`.
///
/// Rules:
/// - `tempfit data.txt ...`        -> `tempfit fit data.txt ...`
/// - `tempfit --help/--version/-h` -> unchanged (top-level help/version)
/// - explicit subcommands          -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "show" | "check");
    if is_subcommand {
        return argv;
    }

    // Anything else (a file path or a flag) is treated as `fit` input.
    argv.insert(1, "fit".to_string());
    argv
}
