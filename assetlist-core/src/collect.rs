//! Source directory scanning.
//!
//! The [`Collector`] enumerates the files of a single directory (non-recursive)
//! whose extension matches one of a configured set, and turns each into a
//! [`SourceFile`] carrying its logical (web-servable) path. The resulting
//! [`PathList`] is always sorted by logical path so rendering is deterministic.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{Error, Result, utils::needs_escaping};

/// What to do with file names that cannot be embedded verbatim in a
/// single-quoted string literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsafeNames {
    /// Escape the offending characters in generated code.
    #[default]
    Escape,
    /// Fail collection with [`Error::UnsafeName`].
    Reject,
}

/// An image file discovered in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    file_name: String,
    extension: String,
    logical_path: String,
}

impl SourceFile {
    /// Build a source file entry under the given web prefix.
    pub fn new(prefix: &str, file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let extension = Path::new(&file_name)
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let logical_path = format!("{}/{}", prefix.trim_end_matches('/'), file_name);
        Self {
            file_name,
            extension,
            logical_path,
        }
    }

    /// The bare file name, e.g. `a.png`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The lower-cased extension without the dot, e.g. `png`.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The web path, e.g. `/learnwithleon/a.png`.
    pub fn logical_path(&self) -> &str {
        &self.logical_path
    }

    /// Whether the name has to be escaped to appear in a string literal.
    pub fn needs_escaping(&self) -> bool {
        needs_escaping(&self.logical_path)
    }
}

/// Ordered list of discovered files, sorted ascending by logical path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathList {
    files: Vec<SourceFile>,
}

impl PathList {
    /// Build a list from arbitrary entries, sorting and de-duplicating them.
    pub fn from_files(files: impl IntoIterator<Item = SourceFile>) -> Self {
        let mut files: Vec<SourceFile> = files.into_iter().collect();
        files.sort_by(|a, b| a.logical_path.cmp(&b.logical_path));
        files.dedup_by(|a, b| a.logical_path == b.logical_path);
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SourceFile> {
        self.files.iter()
    }

    /// Logical paths in order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(SourceFile::logical_path)
    }

    /// File names in the same order as [`PathList::paths`].
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(SourceFile::file_name)
    }

    /// Entries whose names will be escaped in generated code.
    pub fn escaped(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter().filter(|f| f.needs_escaping())
    }
}

impl<'a> IntoIterator for &'a PathList {
    type Item = &'a SourceFile;
    type IntoIter = std::slice::Iter<'a, SourceFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Default web prefix for a source directory: `/` followed by its last component.
///
/// `public/learnwithleon` becomes `/learnwithleon`. A directory without a
/// usable final component (such as `.`) maps to the empty prefix, so paths come
/// out as `/<file>`.
pub fn default_prefix(dir: &Path) -> String {
    dir.file_name()
        .and_then(OsStr::to_str)
        .map(|name| format!("/{}", name))
        .unwrap_or_default()
}

/// Scans a directory for files with matching extensions.
#[derive(Debug, Clone)]
pub struct Collector {
    dir: PathBuf,
    extensions: Vec<String>,
    prefix: String,
    unsafe_names: UnsafeNames,
}

impl Collector {
    /// Create a collector for `dir` matching `png` files under the default prefix.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let prefix = default_prefix(&dir);
        Self {
            dir,
            extensions: vec!["png".to_string()],
            prefix,
            unsafe_names: UnsafeNames::default(),
        }
    }

    /// Replace the set of matched extensions (case-insensitive, without dots).
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    /// Override the web prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the policy for names that need escaping.
    pub fn unsafe_names(mut self, policy: UnsafeNames) -> Self {
        self.unsafe_names = policy;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read the directory and return the sorted list of matching files.
    ///
    /// Fails if the directory cannot be read; an existing directory without
    /// matches yields an empty list.
    pub fn collect(&self) -> Result<PathList> {
        debug!(dir = %self.dir.display(), extensions = ?self.extensions, "scanning");
        let entries = fs::read_dir(&self.dir).map_err(|e| Error::read_dir(&self.dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::read_dir(&self.dir, e))?;
            let path = entry.path();

            if !self.matches_extension(&path) {
                trace!(path = %path.display(), "skipping: extension");
                continue;
            }

            // Follows symlinks; broken links and directories are skipped
            if !fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false) {
                trace!(path = %path.display(), "skipping: not a regular file");
                continue;
            }

            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                return Err(Error::NonUtf8Name { path });
            };

            let file = SourceFile::new(&self.prefix, name);
            if self.unsafe_names == UnsafeNames::Reject && needs_escaping(&file.file_name) {
                return Err(Error::UnsafeName {
                    name: file.file_name,
                });
            }
            files.push(file);
        }

        let list = PathList::from_files(files);
        debug!(count = list.len(), "collected");
        Ok(list)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|wanted| ext.eq_ignore_ascii_case(wanted))
            })
    }
}
