//! Renders and writes the configured module.

use std::path::{Path, PathBuf};

use assetlist_core::{GeneratedFile, PathList, Result, WriteResult};
use assetlist_manifest::{Manifest, ModuleKind};
use tracing::{debug, info};

use crate::{
    files::{OptionsTs, UploadTs},
    mime::MimeStrategy,
};

/// A rendered file that has not been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Destination, as configured
    pub path: PathBuf,
    pub content: String,
}

/// Outcome of [`Generator::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Destination joined onto the base directory
    pub path: PathBuf,
    pub write: WriteResult,
}

/// Produces the module selected by `output.kind` from a manifest and the
/// collected paths.
///
/// Rendering is pure: the same manifest and paths always give the same text.
pub struct Generator<'a> {
    manifest: &'a Manifest,
    paths: &'a PathList,
}

impl<'a> Generator<'a> {
    pub fn new(manifest: &'a Manifest, paths: &'a PathList) -> Self {
        Self { manifest, paths }
    }

    pub fn kind(&self) -> ModuleKind {
        self.manifest.output.kind
    }

    /// Destination of the module under `base`.
    pub fn target(&self, base: &Path) -> PathBuf {
        self.file().path(base)
    }

    pub fn render(&self) -> String {
        self.file().render()
    }

    /// Render without touching the filesystem.
    pub fn preview(&self) -> PreviewFile {
        PreviewFile {
            path: self.manifest.output.path.clone(),
            content: self.render(),
        }
    }

    /// Render and atomically write the module under `base`.
    pub fn generate(&self, base: &Path) -> Result<GenerateResult> {
        let file = self.file();
        let path = file.path(base);
        debug!(kind = %self.kind(), path = %path.display(), files = self.paths.len(), "rendering");

        let write = file.write(base)?;
        info!(path = %path.display(), "generated module");
        Ok(GenerateResult { path, write })
    }

    fn file(&self) -> Box<dyn GeneratedFile + 'a> {
        let manifest = self.manifest;
        let output = &manifest.output.path;
        match manifest.output.kind {
            ModuleKind::Upload => Box::new(UploadTs::new(
                output,
                &manifest.upload,
                self.paths,
                MimeStrategy::for_extensions(&manifest.source.extensions),
            )
            .metadata(manifest.metadata.as_ref())),
            ModuleKind::Options => {
                Box::new(OptionsTs::new(output, &manifest.options, self.paths))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use assetlist_core::SourceFile;
    use tempfile::TempDir;

    use super::*;

    fn paths() -> PathList {
        PathList::from_files(
            ["a.png", "b.png"]
                .into_iter()
                .map(|n| SourceFile::new("/learnwithleon", n)),
        )
    }

    #[test]
    fn test_render_is_deterministic() {
        let manifest = Manifest::default();
        let paths = paths();
        let generator = Generator::new(&manifest, &paths);
        assert_eq!(generator.render(), generator.render());
    }

    #[test]
    fn test_preview_uses_configured_path() {
        let manifest = Manifest::default();
        let paths = paths();
        let preview = Generator::new(&manifest, &paths).preview();
        assert_eq!(preview.path, PathBuf::from("src/lib/uploadStickers.ts"));
        assert!(preview.content.contains("'/learnwithleon/a.png',"));
    }

    #[test]
    fn test_generate_writes_under_base() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src/lib")).unwrap();
        let manifest = Manifest::default();
        let paths = paths();
        let generator = Generator::new(&manifest, &paths);

        let result = generator.generate(temp.path()).unwrap();

        assert_eq!(result.path, temp.path().join("src/lib/uploadStickers.ts"));
        assert_eq!(result.write, WriteResult::Written);
        assert_eq!(fs::read_to_string(&result.path).unwrap(), generator.render());
    }

    #[test]
    fn test_generate_missing_dir_fails_without_writing() {
        let temp = TempDir::new().unwrap();
        let manifest = Manifest::default();
        let paths = paths();

        let err = Generator::new(&manifest, &paths)
            .generate(temp.path())
            .unwrap_err();

        assert!(matches!(err, assetlist_core::Error::Write { .. }));
        assert!(!temp.path().join("src").exists());
    }

    #[test]
    fn test_metadata_section_reaches_upload_module() {
        let mut manifest = Manifest::default();
        manifest.metadata = Some(Default::default());
        let paths = paths();
        let code = Generator::new(&manifest, &paths).render();
        assert!(code.contains("await databases.createDocument("));

        manifest.output.kind = ModuleKind::Options;
        let code = Generator::new(&manifest, &paths).render();
        assert!(!code.contains("databases"));
    }

    #[test]
    fn test_options_kind() {
        let mut manifest = Manifest::default();
        manifest.output.kind = ModuleKind::Options;
        let paths = paths();
        let code = Generator::new(&manifest, &paths).render();
        assert!(code.starts_with("export const STICKER_OPTIONS = ["));
        assert!(code.contains("'a.png',"));
    }
}
