use std::path::PathBuf;

use assetlist_core::UnsafeNames;
use serde::Deserialize;

use super::ModuleKind;

/// `[source]`: where images are discovered
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Directory scanned for images (non-recursive)
    #[serde(default = "default_source_dir")]
    pub dir: PathBuf,

    /// Matched extensions, without dots
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Web prefix for logical paths; defaults to `/` + last component of `dir`
    pub prefix: Option<String>,

    /// Policy for names containing quotes, backslashes or control characters
    #[serde(default)]
    pub unsafe_names: UnsafeNames,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: default_source_dir(),
            extensions: default_extensions(),
            prefix: None,
            unsafe_names: UnsafeNames::default(),
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("public/learnwithleon")
}

fn default_extensions() -> Vec<String> {
    vec!["png".to_string()]
}

/// `[output]`: where and what to generate
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Destination of the generated module
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    #[serde(default)]
    pub kind: ModuleKind,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            kind: ModuleKind::default(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("src/lib/uploadStickers.ts")
}

/// `[upload]`: names used by the generated upload module
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UploadConfig {
    /// Placeholder bucket identifier
    pub bucket_id: String,
    pub bucket_const: String,
    pub list_name: String,
    pub function_name: String,
    /// Module exporting the configured storage client
    pub client_module: String,
    pub client_name: String,
    /// Module providing `ID` (and `Permission`/`Role`)
    pub sdk_module: String,
    /// Pass read/update/delete permissions to `createFile`
    pub permissions: bool,
    pub file_id: FileId,
}

/// ID given to each uploaded file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileId {
    /// A fresh `ID.unique()` per upload
    #[default]
    Unique,
    /// The file name without its extension, stable across runs
    Stem,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            bucket_id: "stickers".to_string(),
            bucket_const: "STICKERS_BUCKET_ID".to_string(),
            list_name: "STICKER_PATHS".to_string(),
            function_name: "uploadStickers".to_string(),
            client_module: "./appwrite".to_string(),
            client_name: "storage".to_string(),
            sdk_module: "appwrite".to_string(),
            permissions: false,
            file_id: FileId::default(),
        }
    }
}

/// `[metadata]`: one database document per uploaded file, recording its ID,
/// name and collection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetadataConfig {
    /// Placeholder database identifier
    pub database_id: String,
    pub database_const: String,
    /// Placeholder collection identifier
    pub collection_id: String,
    pub collection_const: String,
    /// Databases client exported by `upload.client_module`
    pub client_name: String,
    /// Value of each document's `collection` field
    pub collection: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            database_id: "stickers".to_string(),
            database_const: "DATABASE_ID".to_string(),
            collection_id: "sticker-metadata".to_string(),
            collection_const: "STICKER_METADATA_COLLECTION_ID".to_string(),
            client_name: "databases".to_string(),
            collection: "stickers".to_string(),
        }
    }
}

/// `[options]`: names used by the generated options module
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionsConfig {
    pub name: String,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            name: "STICKER_OPTIONS".to_string(),
        }
    }
}
