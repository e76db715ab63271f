use anyhow::Context;
use clap::Parser;
use snakedoc_core::{interrupt, Config, SnakedocError};
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process;

mod cli;
mod logging;
mod run;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose, cli.quiet, cli.no_color) {
        eprintln!("Warning: {e:#}");
    }

    // Ctrl-C and SIGTERM stop the copy loop before its next file
    if let Err(e) = ctrlc::set_handler(interrupt::request_interrupt) {
        tracing::warn!("could not install SIGINT handler: {e}");
    }
    // SAFETY: the handler only stores to an atomic flag
    let sigterm = unsafe {
        signal_hook::low_level::register(signal_hook::consts::SIGTERM, interrupt::request_interrupt)
    };
    if let Err(e) = sigterm {
        tracing::warn!("could not install SIGTERM handler: {e}");
    }

    let use_color = !cli.no_color && io::stdout().is_terminal();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }

    let result = Config::load(Path::new("."))
        .and_then(|config| run::handle_run(&cli, &config, use_color));

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

/// 2 for bad invocation (missing directories), 130 for interruption, 1 otherwise.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<SnakedocError>() {
        Some(SnakedocError::Interrupted { .. }) => 130,
        Some(e) if e.is_invalid_input() => 2,
        _ => 1,
    }
}
