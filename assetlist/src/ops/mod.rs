//! Core operations.
//!
//! This module contains the business logic for assetlist commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod list;

pub use check::check;
pub use generate::generate;
pub use list::list;

use assetlist_core::PathList;
use assetlist_manifest::Manifest;
use eyre::{Context, Result};

/// Scan the configured source directory.
fn collect(manifest: &Manifest) -> Result<PathList> {
    manifest
        .collector()
        .collect()
        .wrap_err_with(|| format!("Failed to scan {}", manifest.source.dir.display()))
}
