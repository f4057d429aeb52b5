//! TypeScript syntax builders for imports, constants, literals and functions.
//!
//! Nodes implement [`Renderable`](crate::builder::Renderable) and are
//! assembled into files by [`CodeFile`](crate::CodeFile). All string literals
//! use single quotes.

mod arrays;
mod consts;
mod fns;
mod imports;
mod objects;

use assetlist_core::escape_single_quoted;

pub use arrays::JsArray;
pub use consts::Const;
pub use fns::Fn;
pub use imports::Import;
pub use objects::JsObject;

/// Render `s` as a single-quoted string literal, escaping as needed.
pub fn quote(s: &str) -> String {
    format!("'{}'", escape_single_quoted(s))
}
