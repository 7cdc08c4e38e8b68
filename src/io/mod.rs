//! Input/output helpers.
//!
//! - whitespace-delimited sample ingest + validation (`ingest`)
//! - per-segment CSV export (`export`)
//! - fit JSON write (`curve`)

pub mod curve;
pub mod export;
pub mod ingest;

pub use curve::*;
pub use export::*;
pub use ingest::*;
