//! Core types for the assetlist generator.
//!
//! This crate provides directory scanning ([`Collector`]) and atomic file
//! writing ([`GeneratedFile`]) shared by the code generators and the CLI.

mod collect;
mod error;
mod file;
mod utils;

// Source scanning
pub use collect::{Collector, PathList, SourceFile, UnsafeNames, default_prefix};
pub use error::{Error, Result};
// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{escape_single_quoted, needs_escaping};
