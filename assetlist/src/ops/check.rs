//! Check operation - compare the module on disk with a fresh render.

use std::{fs, io, path::Path};

use assetlist_codegen::Generator;
use assetlist_manifest::Manifest;
use eyre::{Context, Result};
use tracing::debug;

use crate::reports::{CheckReport, Freshness};

/// Render in memory and compare against the existing module. Never writes.
pub fn check(manifest: &Manifest, base: &Path) -> Result<CheckReport> {
    let paths = super::collect(manifest)?;
    let generator = Generator::new(manifest, &paths);
    let target = generator.target(base);

    let status = match fs::read_to_string(&target) {
        Ok(existing) if existing == generator.render() => Freshness::UpToDate,
        Ok(_) => Freshness::Stale,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Freshness::Missing,
        Err(e) => {
            return Err(e).wrap_err_with(|| format!("Failed to read {}", target.display()));
        }
    };
    debug!(path = %target.display(), ?status, "checked module");

    Ok(CheckReport {
        path: target,
        file_count: paths.len(),
        status,
    })
}
