//! Shared plumbing: errors, logging setup, and diagnostic formatting.

pub mod error;
pub mod output;
pub mod telemetry;
