//! csv2graph: turn a node list and an edge list into one graph document.
//!
//! Reads two CSV files and writes a single JSON object of the shape
//! `{"nodes": [{"name", "group"}], "edges": [{"source", "target", "value"}]}`
//! as consumed by force-directed graph renderers.
//!
//! # Pipeline
//!
//! 1. **Load**: each CSV becomes an ordered list of column→cell rows.
//! 2. **Normalize**: rows become typed [`graph::Node`]/[`graph::Edge`] records;
//!    every edge endpoint missing from the node file is appended as a node in
//!    the default group.
//! 3. **Write**: the document is serialized and atomically moved into place.
//!
//! All cell values stay strings; `"42"` is never emitted as a JSON number.
//!
//! # Examples
//!
//! ```bash
//! csv2graph nodes.csv edges.csv graph.json
//! RUST_LOG=info csv2graph nodes.csv edges.csv graph.json
//! ```
//!
//! Library callers can tune output through [`graph::ConvertOptions`]; the
//! binary always uses the defaults.
//!
//! # Crate Structure
//!
//! - [`core`]: errors, logging setup, diagnostic formatting
//! - [`graph`]: record types and the load/normalize/write stages

pub mod core;
pub mod graph;

mod cli;

use anyhow::Context;
use clap::Parser;

use crate::core::telemetry::{self, TRACING_TARGET_CLI};

/// Entry point for the `csv2graph` binary.
pub fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    telemetry::init_tracing()?;
    tracing::debug!(
        target: TRACING_TARGET_CLI,
        version = env!("CARGO_PKG_VERSION"),
        nodes = %cli.nodes_csv.display(),
        edges = %cli.edges_csv.display(),
        output = %cli.output_json.display(),
        "starting conversion"
    );

    let summary = graph::convert_files(
        &cli.nodes_csv,
        &cli.edges_csv,
        &cli.output_json,
        &graph::ConvertOptions::default(),
    )
    .with_context(|| {
        format!(
            "failed to convert {} + {} into {}",
            cli.nodes_csv.display(),
            cli.edges_csv.display(),
            cli.output_json.display()
        )
    })?;

    tracing::info!(
        target: TRACING_TARGET_CLI,
        declared_nodes = summary.declared_nodes,
        compensated_nodes = summary.compensated_nodes,
        edges = summary.edges,
        bytes = summary.bytes_written,
        "conversion complete"
    );
    Ok(())
}
