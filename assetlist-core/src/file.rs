use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::{Error, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        write_with_rules(&self.path(base), &self.render(), &self.rules())
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
    /// Create missing parent directories before writing.
    pub create_dirs: bool,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist (config scaffolding)
    IfMissing,
}

impl FileRules {
    /// Rules for a file that is regenerated on every run into an existing directory.
    pub fn generated() -> Self {
        Self {
            overwrite: Overwrite::Always,
            create_dirs: false,
        }
    }

    /// Rules for a scaffolded file that must not clobber user edits.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
            create_dirs: true,
        }
    }
}

impl Default for FileRules {
    fn default() -> Self {
        Self::generated()
    }
}

fn write_with_rules(path: &Path, content: &str, rules: &FileRules) -> Result<WriteResult> {
    if rules.overwrite == Overwrite::IfMissing && path.exists() {
        debug!(path = %path.display(), "exists, skipping");
        return Ok(WriteResult::Skipped);
    }
    write_file(path, content, rules.create_dirs)?;
    Ok(WriteResult::Written)
}

/// Atomically replace `path` with `content`.
///
/// The content is written to a temporary file next to the destination and
/// renamed over it, so readers observe either the old or the new file. A
/// symlinked destination is written through: its target is replaced and the
/// link is kept.
fn write_file(path: &Path, content: &str, create_dirs: bool) -> Result<()> {
    let resolved = resolve_link(path)?;
    let path = resolved.as_path();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if create_dirs {
        fs::create_dir_all(parent).map_err(|e| Error::write(path, e))?;
    }

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| Error::write(path, e))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| Error::write(path, e))?;
    if let Some(perms) = target_permissions(path) {
        tmp.as_file()
            .set_permissions(perms)
            .map_err(|e| Error::write(path, e))?;
    }
    tmp.persist(path).map_err(|e| Error::write(path, e.error))?;

    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Follow `path` if it is a symlink. A dangling link resolves to where its
/// target would be.
fn resolve_link(path: &Path) -> Result<PathBuf> {
    let is_link = fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink());
    if !is_link {
        return Ok(path.to_path_buf());
    }
    if let Ok(real) = fs::canonicalize(path) {
        return Ok(real);
    }
    let target = fs::read_link(path).map_err(|e| Error::write(path, e))?;
    Ok(path.parent().unwrap_or(Path::new("")).join(target))
}

/// Keep the mode of an existing destination; new files get 0644 rather than
/// the temp file's 0600.
fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "hello", false).unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_creates_parent_dirs_when_asked() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.txt");

        write_file(&path, "nested", true).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_missing_parent_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("test.txt");

        let err = write_file(&path, "nope", false).unwrap_err();

        assert!(matches!(err, Error::Write { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "first", false).unwrap();
        write_file(&path, "second", false).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_file_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.ts");

        write_file(&path, "content", false).unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_failed_write_keeps_existing_artifact() {
        let temp = TempDir::new().unwrap();
        // A non-empty directory cannot be renamed over
        let path = temp.path().join("out.ts");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.ts"), "old").unwrap();

        let err = write_file(&path, "new", false).unwrap_err();

        assert!(matches!(err, Error::Write { .. }));
        assert_eq!(fs::read_to_string(path.join("keep.ts")).unwrap(), "old");
        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("out.ts")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_file_through_symlink() {
        let temp = TempDir::new().unwrap();
        let real = temp.path().join("real.ts");
        let link = temp.path().join("link.ts");
        fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_file(&link, "new", false).unwrap();

        assert_eq!(fs::read_to_string(&real).unwrap(), "new");
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_file_through_dangling_symlink() {
        let temp = TempDir::new().unwrap();
        let link = temp.path().join("link.ts");
        std::os::unix::fs::symlink("real.ts", &link).unwrap();

        write_file(&link, "new", false).unwrap();

        assert_eq!(fs::read_to_string(temp.path().join("real.ts")).unwrap(), "new");
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_file_new_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.ts");

        write_file(&path, "content", false).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    /// Fixed content at a fixed name under the base directory.
    struct Fixed {
        name: &'static str,
        content: &'static str,
        rules: FileRules,
    }

    impl GeneratedFile for Fixed {
        fn path(&self, base: &Path) -> PathBuf {
            base.join(self.name)
        }

        fn rules(&self) -> FileRules {
            self.rules.clone()
        }

        fn render(&self) -> String {
            self.content.to_string()
        }
    }

    #[test]
    fn test_generated_rules_always_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");
        fs::write(&path, "original").unwrap();

        let file = Fixed {
            name: "test.txt",
            content: "updated",
            rules: FileRules::generated(),
        };
        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_create_once_creates_new_with_dirs() {
        let temp = TempDir::new().unwrap();

        let file = Fixed {
            name: "conf/new.toml",
            content: "new content",
            rules: FileRules::create_once(),
        };
        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("conf/new.toml")).unwrap(),
            "new content"
        );
    }

    #[test]
    fn test_create_once_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("existing.txt");
        fs::write(&path, "original").unwrap();

        let file = Fixed {
            name: "existing.txt",
            content: "should not write",
            rules: FileRules::create_once(),
        };
        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_generated_does_not_create_parent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("out.ts");

        let file = Fixed {
            name: "missing/out.ts",
            content: "new",
            rules: FileRules::generated(),
        };
        assert!(file.write(temp.path()).is_err());
        assert!(!path.exists());
    }
}
