//! Reporting utilities: formatted terminal output for fits and samples.

pub mod format;

pub use format::*;
