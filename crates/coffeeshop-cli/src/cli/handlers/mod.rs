//! Command handlers for the configuration CLI
//!
//! Handlers receive the loaded configuration explicitly and return the text
//! to print, so they never reach for the process-wide holder themselves.

pub mod config;
pub mod targets;
