//! The options module: an `as const` list of file names.

use std::path::{Path, PathBuf};

use assetlist_core::{FileRules, GeneratedFile, PathList};
use assetlist_manifest::OptionsConfig;

use crate::{
    CodeFile,
    ast::{Const, JsArray},
};

/// Generated TypeScript module exporting the discovered file names, for
/// pickers and type-level checks.
pub struct OptionsTs<'a> {
    output: PathBuf,
    config: &'a OptionsConfig,
    paths: &'a PathList,
}

impl<'a> OptionsTs<'a> {
    pub fn new(output: impl Into<PathBuf>, config: &'a OptionsConfig, paths: &'a PathList) -> Self {
        Self {
            output: output.into(),
            config,
            paths,
        }
    }
}

impl GeneratedFile for OptionsTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.output)
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        let names = JsArray::from_strings(self.paths.file_names()).as_const();
        CodeFile::new()
            .add(Const::new(&self.config.name, names.build()))
            .render()
    }
}
