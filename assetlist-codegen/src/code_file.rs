//! A whole TypeScript module: an import block, then body items.

use crate::{
    ast::Import,
    builder::{CodeFragment, CodeWriter, Renderable},
};

/// Imports come first. Each body item is preceded by a blank line, except
/// the first item of a file without imports.
///
/// ```
/// use assetlist_codegen::{CodeFile, ast::{Const, Import}};
///
/// let code = CodeFile::new()
///     .imports([Import::new("./appwrite", ["storage"])])
///     .add(Const::new("x", "1").private())
///     .render();
///
/// assert_eq!(code, "import { storage } from './appwrite';\n\nconst x = 1;\n");
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    items: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, item: impl Renderable) -> Self {
        self.items.push(item.to_fragments());
        self
    }

    pub fn add_opt(self, item: Option<impl Renderable>) -> Self {
        match item {
            Some(item) => self.add(item),
            None => self,
        }
    }

    pub fn render(&self) -> String {
        let mut w = CodeWriter::default();
        self.imports.iter().for_each(|import| w.emit(import));

        let mut needs_gap = !self.imports.is_empty();
        for item in &self.items {
            if needs_gap {
                w.blank();
            }
            w.emit(item.as_slice());
            needs_gap = true;
        }

        w.finish()
    }
}
