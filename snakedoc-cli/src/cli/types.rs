use clap::ValueEnum;
use snakedoc_core::OutputFormat;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputArg {
    /// One `<source>----><destination>` line per copied file
    Summary,
    /// A single JSON document describing the run
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Summary => Self::Summary,
            OutputArg::Json => Self::Json,
        }
    }
}
