//! # Coffee Shop Common
//!
//! Error taxonomy and logging initialization shared by every Coffee Shop crate.

pub mod error;
pub mod logging;

pub use error::{ConfigurationError, NotInitializedError};
