//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;
mod targets;

pub use check::{CheckReport, FileSummary, GroupSummary};
pub use generate::{
    FileFailure, GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};
pub use output::{Report, TerminalOutput};
pub use targets::TargetsReport;
