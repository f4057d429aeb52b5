//! Manifest types and parsing for assetlist.toml files.

mod kind;
mod parse;
mod sections;
mod validate;

use std::path::Path;

use assetlist_core::{Collector, default_prefix};
pub use kind::ModuleKind;
pub use sections::{
    FileId, MetadataConfig, OptionsConfig, OutputConfig, SourceConfig, UploadConfig,
};
use serde::Deserialize;
use tracing::debug;
pub use validate::ParseContext;

use crate::Result;

/// Conventional manifest file name, looked up in the working directory.
pub const MANIFEST_FILE: &str = "assetlist.toml";

/// Root manifest for assetlist.toml
///
/// Every section is optional; an empty file (or no file at all) yields the
/// defaults, which reproduce the sticker uploader layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub upload: UploadConfig,

    #[serde(default)]
    pub options: OptionsConfig,

    /// Present only when the upload module should also write documents
    #[serde(default)]
    pub metadata: Option<MetadataConfig>,
}

impl Manifest {
    /// Load the manifest for a run.
    ///
    /// An explicit path must exist. Without one, `default_path` is used when it
    /// exists and the built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>, default_path: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if default_path.is_file() => Self::from_file(default_path),
            None => {
                debug!(path = %default_path.display(), "no manifest, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// The effective web prefix for logical paths.
    pub fn prefix(&self) -> String {
        self.source
            .prefix
            .clone()
            .unwrap_or_else(|| default_prefix(&self.source.dir))
    }

    /// A collector configured from the `[source]` section.
    pub fn collector(&self) -> Collector {
        Collector::new(&self.source.dir)
            .extensions(&self.source.extensions)
            .prefix(self.prefix())
            .unsafe_names(self.source.unsafe_names)
    }
}
