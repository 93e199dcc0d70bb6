#![forbid(unsafe_code)]

use colored::Colorize;
use std::process;

/// Exit status 1 on conversion failure (clap exits 2 on usage errors).
///
/// Once logging is up, the failure is always reported as an ERROR event on
/// stderr; the default filter never hides that level. The plain `error:` line
/// covers the case where the subscriber could not be installed.
fn main() {
    let Err(error) = csv2graph::run() else {
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: csv2graph::core::telemetry::TRACING_TARGET_CLI,
            error = %format!("{error:#}"),
            "conversion failed"
        );
    } else {
        eprintln!("{} {error:#}", "error:".bright_red().bold());
    }

    process::exit(1);
}
