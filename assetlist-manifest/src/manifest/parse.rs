//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{MANIFEST_FILE, Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse an assetlist.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    let source = ctx.push("source");
    source.validate_extensions(&manifest.source.extensions)?;
    if let Some(prefix) = &manifest.source.prefix {
        source.validate_prefix(prefix)?;
    }

    let upload = ctx.push("upload");
    upload.validate_identifier(&manifest.upload.bucket_const, "bucket_const")?;
    upload.validate_identifier(&manifest.upload.list_name, "list_name")?;
    upload.validate_identifier(&manifest.upload.function_name, "function_name")?;
    upload.validate_identifier(&manifest.upload.client_name, "client_name")?;
    upload.validate_module(&manifest.upload.client_module, "client_module")?;
    upload.validate_module(&manifest.upload.sdk_module, "sdk_module")?;

    ctx.push("options")
        .validate_identifier(&manifest.options.name, "name")?;

    if let Some(metadata) = &manifest.metadata {
        let section = ctx.push("metadata");
        let mut taken = vec![
            manifest.upload.bucket_const.as_str(),
            manifest.upload.list_name.as_str(),
            manifest.upload.function_name.as_str(),
            manifest.upload.client_name.as_str(),
        ];
        for (key, value) in [
            ("database_const", &metadata.database_const),
            ("collection_const", &metadata.collection_const),
            ("client_name", &metadata.client_name),
        ] {
            section.validate_identifier(value, key)?;
            section.validate_distinct(value, key, &taken)?;
            taken.push(value);
        }
    }

    Ok(())
}
