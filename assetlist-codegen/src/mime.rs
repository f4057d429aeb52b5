//! MIME types for the image formats the upload module knows about.

use std::collections::BTreeMap;

/// Fallback for extensions without a known image type.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// MIME type for a (lowercase, dot-less) extension.
pub fn mime_for_extension(ext: &str) -> &'static str {
    match ext {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        _ => OCTET_STREAM,
    }
}

/// How the upload module picks a file's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MimeStrategy {
    /// Every extension shares one type; emit it as a literal.
    Single(&'static str),
    /// Look the type up by extension, keyed in sorted order.
    Lookup(BTreeMap<String, &'static str>),
}

impl MimeStrategy {
    /// Pick a strategy for the configured extensions.
    pub fn for_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let table: BTreeMap<String, &'static str> = extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.as_ref().trim_start_matches('.').to_ascii_lowercase();
                let mime = mime_for_extension(&ext);
                (ext, mime)
            })
            .collect();

        let mut types = table.values();
        match types.next() {
            None => Self::Single(OCTET_STREAM),
            Some(first) if types.all(|t| t == first) => Self::Single(first),
            Some(_) => Self::Lookup(table),
        }
    }
}
