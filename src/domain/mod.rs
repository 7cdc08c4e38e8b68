//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the sample container (`Dataset`)
//! - fitted output types (`Segment`, `PiecewiseResult`, `ChannelFit`)
//! - configuration enums and the run configuration (`MethodSpec`, `FitConfig`)

pub mod types;

pub use types::*;
