pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::config::cli::LocalFile;
pub use crate::core::{
    checker::PairChecker, engine::CheckEngine, lines::split_lines, patterns::LinePatterns,
};
pub use crate::domain::model::{CheckSummary, Opcode, OperationRecord, ResultRecord};
pub use crate::domain::ports::TraceSource;
pub use crate::utils::error::{CheckError, ErrorCategory, Result};
