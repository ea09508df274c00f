//! # Coffee Shop Config CLI
//!
//! Loads a deployment target the same way the front end does at startup,
//! fails fast on any configuration mistake, and prints what was loaded.

pub mod cli;
pub mod error;

pub use cli::*;
pub use error::*;
