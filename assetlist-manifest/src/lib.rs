//! Parsing and validation of `assetlist.toml`.
//!
//! Errors are [`miette`] diagnostics carrying the source text, so the CLI can
//! point at the offending key.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::*;
