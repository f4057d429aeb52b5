//! Line-oriented output for the TypeScript nodes in [`crate::ast`].
//!
//! Nodes describe themselves as [`CodeFragment`]s and a [`CodeWriter`] lays
//! them out with one [`Indent`] unit per nesting level.

mod fragment;
mod indent;
mod writer;

pub use fragment::{CodeFragment, Renderable};
pub use indent::Indent;
pub use writer::CodeWriter;

/// Lay out a single node on its own.
#[cfg(test)]
pub(crate) fn render<R: Renderable + ?Sized>(node: &R) -> String {
    let mut w = CodeWriter::default();
    w.emit(node);
    w.finish()
}
