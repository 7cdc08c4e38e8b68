//! Mathematical utilities: basis functions, normal equations, and least squares.

pub mod basis;
pub mod normal;
pub mod ols;

pub use basis::*;
pub use normal::*;
pub use ols::*;
