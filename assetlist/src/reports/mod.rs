//! Report data structures for commands.
//!
//! Operations build reports; commands render them to an [`Output`] target.

mod check;
mod generate;
mod list;
mod output;

pub use check::{CheckReport, Freshness};
pub use generate::{GenerateReport, GenerationResult};
pub use list::ListReport;
pub use output::{Report, TerminalOutput};
