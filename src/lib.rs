//! Bivariate KZG with hiding, and the BingoVSS high-threshold verifiable
//! secret sharing protocol built on top of it.

pub mod curve;
pub mod error;
pub mod kzg;
pub mod poly;
pub mod vss;

pub use error::{BingoError, Result};
