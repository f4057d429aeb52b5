//! List operation - scan only.

use assetlist_manifest::Manifest;
use eyre::Result;

use crate::reports::ListReport;

/// Collect the logical paths without rendering or writing anything.
pub fn list(manifest: &Manifest) -> Result<ListReport> {
    let paths = super::collect(manifest)?;
    Ok(ListReport {
        source: manifest.source.dir.clone(),
        paths: paths.paths().map(str::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_list_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("stickers");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("b.PNG"), "").unwrap();
        fs::write(dir.join("a.png"), "").unwrap();
        fs::write(dir.join("readme.md"), "").unwrap();
        fs::create_dir(dir.join("nested.png")).unwrap();

        let mut manifest = Manifest::default();
        manifest.source.dir = dir;

        let report = list(&manifest).unwrap();
        assert_eq!(report.paths, vec!["/stickers/a.png", "/stickers/b.PNG"]);
    }

    #[test]
    fn test_list_missing_dir_is_an_error() {
        let temp = TempDir::new().unwrap();
        let mut manifest = Manifest::default();
        manifest.source.dir = temp.path().join("nope");

        let err = list(&manifest).unwrap_err();
        assert!(err.to_string().contains("Failed to scan"));
    }
}
