use crate::cli::report::render;
use crate::infra::{LocatorConfig, locate_compose_file};
use crate::services::StatusService;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;
use tracing::debug;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Locates the compose file, collects the report and prints it to `out`.
///
/// Nothing is written when any step fails, so a failed query never leaves a
/// partial report behind.
pub fn run<W: Write>(config: &LocatorConfig, service: &StatusService, out: &mut W) -> Result<()> {
    let compose_file = locate_compose_file(config)?;
    debug!("Reading services from {:?}", compose_file);

    let report = service.collect(&compose_file)?;

    render(out, &report, &compose_file, &service.query_command())
        .context("writing status report")?;
    out.flush().context("flushing status report")
}

/// Maps the outcome of [`run`] to a process exit status.
///
/// Failures are reported as a single `Error: ...` line on `stderr`.
pub fn exit_status<E: Write>(result: Result<()>, stderr: &mut E) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            let message = format!("{err:#}").replace('\n', " ");
            // stderr may already be gone; the exit status still reports the failure
            let _ = writeln!(stderr, "{} {message}", "Error:".bold().bright_red());
            EXIT_FAILURE
        }
    }
}
