use clap::Parser;
use std::path::PathBuf;

use super::types::OutputArg;

/// Copy AsciiDoc files into a flat directory under snake_case names
#[derive(Parser, Debug)]
#[command(name = "snakedoc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory tree to read documentation from [default: userguide]
    #[arg(short = 's', long = "source", value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Existing directory to copy renamed files into [default: foo]
    #[arg(short = 'd', long = "dest", value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// File name suffix of the files to copy [default: .adoc]
    #[arg(short = 'e', long = "extension", value_name = "EXT")]
    pub extension: Option<String>,

    /// Glob patterns (relative to the source directory) to skip
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Print what would be copied without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputArg>,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors and skip the closing summary
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,
}
