//! TypeScript generation for assetlist.
//!
//! Turns a [`PathList`](assetlist_core::PathList) and a
//! [`Manifest`](assetlist_manifest::Manifest) into one of two modules:
//!
//! - **upload**: imports, a bucket constant, the path list and an async
//!   function that fetches each path and uploads it to Appwrite storage;
//! - **options**: an exported `as const` list of file names.
//!
//! ```ignore
//! use assetlist_codegen::Generator;
//!
//! let paths = manifest.collector().collect()?;
//! let generator = Generator::new(&manifest, &paths);
//! let result = generator.generate(Path::new("."))?;
//! ```

mod code_file;
mod generator;
mod mime;

pub mod ast;
pub mod builder;
pub mod files;

pub use code_file::CodeFile;
pub use generator::{GenerateResult, Generator, PreviewFile};
pub use mime::{MimeStrategy, OCTET_STREAM, mime_for_extension};
