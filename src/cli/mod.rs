//! Command-line analyzer: options, logging setup, report rendering and runner.

mod command;
mod loglevel;
mod opts;
mod report;

pub use command::{run, CliError};
pub use loglevel::LogLevel;
pub use opts::Opts;
pub use report::write_report;
