//! Main application orchestrator.
//!
//! Coordinates one run:
//! 1. Initializes logging (unless quiet).
//! 2. Validates the input path.
//! 3. Loads the graph description via `processing::load_graph`.
//! 4. Enumerates routes via `processing::find_routes`.
//! 5. Prints the report and optionally writes it to `--output`.
//!
//! The verbose log is flushed after each stage so it stays useful when a
//! later stage fails.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println};
use crate::path::TraversalLimits;

/// Runs the application for the parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` for unreadable input, malformed descriptions, unknown
/// endpoints, exceeded limits, or a failed report write.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // The run continues without a verbose log.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let result = run_stages(&cli);

    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "{}", e);
    }
    flush_log(quiet_mode, "final");
    result
}

fn run_stages(cli: &Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    let input_path = file_handler::validate_input_file(&cli.input, quiet_mode)?;

    let loaded = processing::load_graph(
        &input_path,
        cli.max_nodes,
        cli.start.as_deref(),
        cli.end.as_deref(),
        quiet_mode,
    )?;
    flush_log(quiet_mode, "graph loading");

    let limits = TraversalLimits {
        max_depth: cli.max_depth,
        max_paths: cli.max_paths,
    };
    let routes = processing::find_routes(&loaded, limits, quiet_mode)?;
    flush_log(quiet_mode, "route search");

    let report = processing::render_report(&loaded, &routes, quiet_mode);
    print!("{}", report);

    if let Some(output_path) = &cli.output {
        match file_handler::write_content_to_file(output_path, &report) {
            Ok(()) => {
                verbose_println!(
                    quiet_mode,
                    "\n[INFO] Report written to {}",
                    output_path.display()
                );
            }
            Err(e) => {
                verbose_eprintln!(
                    quiet_mode,
                    "[ERROR] Failed to write report ({}): {}",
                    output_path.display(),
                    e
                );
                return Err(AppError::Io(e));
            }
        }
    }

    Ok(())
}

fn flush_log(quiet_mode: bool, stage: &str) {
    if quiet_mode {
        return;
    }
    if let Err(e) = logger::flush_global_logger() {
        // Reported on stderr since the log itself is what failed.
        eprintln!("[WARNING] Failed to flush verbose log after {}: {}", stage, e);
    }
}
