use std::path::{Path, PathBuf};

use assetlist_core::needs_escaping;
use assetlist_manifest::{MANIFEST_FILE, Manifest, ModuleKind};
use clap::Args;
use eyre::{Result, ensure};

use super::UnwrapOrExit;

/// Manifest location and the `[source]` overrides shared by every command
/// that scans.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Path to assetlist.toml (defaults to ./assetlist.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory to scan (overrides source.dir)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Web prefix for generated paths (overrides source.prefix)
    #[arg(long)]
    pub prefix: Option<String>,
}

impl SourceArgs {
    /// Load the manifest and apply flag overrides.
    ///
    /// Manifest diagnostics are printed and end the process with status 1.
    pub fn load(&self) -> Result<Manifest> {
        let mut manifest =
            Manifest::load(self.config.as_deref(), Path::new(MANIFEST_FILE)).unwrap_or_exit();

        if let Some(source) = &self.source {
            manifest.source.dir = source.clone();
        }
        if let Some(prefix) = &self.prefix {
            ensure!(
                prefix.is_empty() || prefix.starts_with('/'),
                "--prefix must start with '/' (got '{}')",
                prefix
            );
            ensure!(
                !needs_escaping(prefix),
                "--prefix must not contain quotes, backslashes or control characters"
            );
            manifest.source.prefix = Some(prefix.clone());
        }
        Ok(manifest)
    }
}

/// `[output]` overrides for commands that render the module.
#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// File to generate (overrides output.path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Module kind to generate (overrides output.kind)
    #[arg(long)]
    pub kind: Option<ModuleKind>,
}

impl OutputArgs {
    pub fn apply(&self, manifest: &mut Manifest) {
        if let Some(output) = &self.output {
            manifest.output.path = output.clone();
        }
        if let Some(kind) = self.kind {
            manifest.output.kind = kind;
        }
    }
}
