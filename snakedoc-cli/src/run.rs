use anyhow::Result;
use snakedoc_core::{
    render_progress_line, run_operation, Config, OutputFormat, OutputFormatter, PlanOptions,
};

use crate::cli::Cli;

/// Merge command-line flags over the config file's defaults.
pub fn plan_options(cli: &Cli, config: &Config) -> PlanOptions {
    let defaults = &config.defaults;

    let mut excludes = defaults.exclude.clone();
    excludes.extend(cli.exclude.iter().cloned());

    PlanOptions {
        source_dir: cli
            .source
            .clone()
            .unwrap_or_else(|| defaults.source_dir.clone()),
        destination_dir: cli
            .dest
            .clone()
            .unwrap_or_else(|| defaults.destination_dir.clone()),
        extension: cli
            .extension
            .clone()
            .unwrap_or_else(|| defaults.extension.clone()),
        excludes,
    }
}

pub fn output_format(cli: &Cli, config: &Config) -> OutputFormat {
    if let Some(arg) = cli.output {
        return arg.into();
    }

    config
        .defaults
        .output_format
        .parse()
        .unwrap_or_else(|e: String| {
            tracing::warn!("{e} in config, falling back to summary");
            OutputFormat::Summary
        })
}

pub fn handle_run(cli: &Cli, config: &Config, use_color: bool) -> Result<()> {
    let options = plan_options(cli, config);
    let format = output_format(cli, config);

    let result = run_operation(&options, cli.dry_run, None, |op| {
        if format == OutputFormat::Summary {
            println!("{}", render_progress_line(op, use_color));
        }
    })?;

    match format {
        OutputFormat::Json => println!("{}", result.format_json()),
        OutputFormat::Summary => {
            if !cli.quiet {
                eprint!("{}", result.format_summary());
            }
        },
    }

    Ok(())
}
