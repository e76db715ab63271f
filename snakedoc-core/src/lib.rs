#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod apply;
pub mod case_model;
pub mod config;
pub mod error;
pub mod interrupt;
pub mod operations;
pub mod output;
pub mod scanner;

pub use apply::{apply_plan, copy_file_with_metadata, ApplyOptions, CopyRecord};
pub use case_model::{has_extension, to_snake_name};
pub use config::Config;
pub use error::SnakedocError;
pub use operations::run_operation;
pub use output::{progress_line, render_progress_line, OutputFormat, OutputFormatter, RunResult};
pub use scanner::{build_globset, collect_sources, plan_copies, Collision, CopyOp, Plan, PlanOptions};
