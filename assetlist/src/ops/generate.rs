//! Generate operation - scan, render and write the module.

use std::path::Path;

use assetlist_codegen::Generator;
use assetlist_manifest::Manifest;
use eyre::{Context, Result};

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the configured output path is resolved against.
    pub base: &'a Path,
    /// Whether to preview without writing the file.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Scanning happens before anything is written, so a missing source
/// directory leaves an existing module untouched.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let paths = super::collect(manifest)?;

    let escaped = paths
        .escaped()
        .map(|f| f.file_name().to_string())
        .collect();

    let generator = Generator::new(manifest, &paths);
    let result = if opts.dry_run {
        let preview = generator.preview();
        GenerationResult::Preview {
            path: generator.target(opts.base),
            content: preview.content,
        }
    } else {
        let written = generator
            .generate(opts.base)
            .wrap_err("Failed to write generated module")?;
        GenerationResult::Written { path: written.path }
    };

    Ok(GenerateReport {
        paths: paths.paths().map(str::to_string).collect(),
        escaped,
        result,
    })
}
