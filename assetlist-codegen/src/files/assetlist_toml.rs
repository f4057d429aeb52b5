//! Scaffolded `assetlist.toml`.

use std::path::{Path, PathBuf};

use assetlist_core::{FileRules, GeneratedFile, Overwrite};
use assetlist_manifest::MANIFEST_FILE;

const TEMPLATE: &str = r#"# assetlist configuration
#
# Every key is optional; the values below are the defaults.

[source]
# Directory scanned for images (not recursive)
dir = "public/learnwithleon"
# Extensions to collect, without the dot; matching ignores case
extensions = ["png"]
# Web prefix for generated paths; defaults to "/" + the last component of dir
# prefix = "/learnwithleon"
# "escape" quotes and backslashes in file names, or "reject" them
unsafe_names = "escape"

[output]
path = "src/lib/uploadStickers.ts"
# "upload" for the Appwrite upload module, "options" for a list of file names
kind = "upload"

[upload]
bucket_id = "stickers"
bucket_const = "STICKERS_BUCKET_ID"
list_name = "STICKER_PATHS"
function_name = "uploadStickers"
client_module = "./appwrite"
client_name = "storage"
sdk_module = "appwrite"
permissions = false
# "unique" for ID.unique(), "stem" to reuse the file name without its extension
file_id = "unique"

[options]
name = "STICKER_OPTIONS"

# Uncomment to also create one database document per uploaded file
# [metadata]
# database_id = "stickers"
# database_const = "DATABASE_ID"
# collection_id = "sticker-metadata"
# collection_const = "STICKER_METADATA_COLLECTION_ID"
# client_name = "databases"
# collection = "stickers"
"#;

/// Default configuration written by `assetlist init`.
pub struct AssetlistToml {
    path: Option<PathBuf>,
    force: bool,
}

impl AssetlistToml {
    pub fn new() -> Self {
        Self {
            path: None,
            force: false,
        }
    }

    /// Write somewhere other than `<base>/assetlist.toml`.
    pub fn at(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Replace an existing file instead of skipping it.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

impl Default for AssetlistToml {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratedFile for AssetlistToml {
    fn path(&self, base: &Path) -> PathBuf {
        match &self.path {
            Some(path) => base.join(path),
            None => base.join(MANIFEST_FILE),
        }
    }

    fn rules(&self) -> FileRules {
        let mut rules = FileRules::create_once();
        if self.force {
            rules.overwrite = Overwrite::Always;
        }
        rules
    }

    fn render(&self) -> String {
        TEMPLATE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use assetlist_core::WriteResult;
    use assetlist_manifest::Manifest;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_template_parses_to_defaults() {
        let manifest: Manifest = AssetlistToml::new().render().parse().unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_existing_file_is_kept() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(MANIFEST_FILE);
        fs::write(&path, "[source]\n").unwrap();

        let result = AssetlistToml::new().write(temp.path()).unwrap();
        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "[source]\n");
    }

    #[test]
    fn test_force_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(MANIFEST_FILE);
        fs::write(&path, "[source]\n").unwrap();

        let result = AssetlistToml::new().force(true).write(temp.path()).unwrap();
        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), TEMPLATE);
    }

    #[test]
    fn test_custom_location_creates_dirs() {
        let temp = TempDir::new().unwrap();
        let file = AssetlistToml::new().at("config/assets.toml");
        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
        assert!(temp.path().join("config/assets.toml").is_file());
    }
}
