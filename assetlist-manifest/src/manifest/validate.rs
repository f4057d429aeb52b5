//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use assetlist_core::needs_escaping;
use miette::SourceSpan;

use crate::{Error, Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the source content and the current table path (e.g. `["upload"]`)
/// so errors can name the offending key and point into the file.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "assetlist.toml");
/// ctx.push("upload").validate_identifier("STICKER_PATHS", "list_name")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Table path segments (e.g., ["upload"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Fully qualified key, e.g. `upload.list_name`.
    pub fn key_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path.join("."), key)
        }
    }

    /// Validate that `value` (the value of `key`) is a usable JavaScript identifier.
    pub fn validate_identifier(&self, value: &str, key: &str) -> Result<()> {
        let span = find_value_span(self.src(), key, value);

        let name = value.to_string();
        let key = self.key_path(key);

        if is_reserved_word(value) {
            return Err(self.source.at(span, |src, span| Error::ReservedKeyword {
                src,
                span,
                name,
                key,
            }));
        }

        match identifier_error(value) {
            Some(reason) => Err(self.source.at(span, |src, span| Error::InvalidIdentifier {
                src,
                span,
                name,
                key,
                reason: reason.to_string(),
            })),
            None => Ok(()),
        }
    }

    /// Validate the `extensions` list: non-empty, bare extensions only.
    pub fn validate_extensions(&self, extensions: &[String]) -> Result<()> {
        if extensions.is_empty() {
            return Err(self.source.invalid(
                format!(
                    "'{}' needs at least one extension",
                    self.key_path("extensions")
                ),
                find_key_span(self.src(), "extensions"),
            ));
        }

        for ext in extensions {
            let problem = if ext.is_empty() {
                Some("extensions must not be empty")
            } else if ext.starts_with('.') {
                Some("write extensions without the leading dot")
            } else if ext.contains(['/', '\\', '*']) {
                Some("extensions must be plain names, not paths or patterns")
            } else {
                None
            };

            if let Some(message) = problem {
                let span = find_quoted_span(self.src(), ext)
                    .or_else(|| find_key_span(self.src(), "extensions"));
                return Err(self.source.invalid(message, span));
            }
        }

        Ok(())
    }

    /// Validate a web prefix: empty or absolute, and nothing that would need
    /// escaping in a string literal.
    pub fn validate_prefix(&self, prefix: &str) -> Result<()> {
        let problem = if !(prefix.is_empty() || prefix.starts_with('/')) {
            Some("must start with '/'")
        } else if needs_escaping(prefix) {
            Some("must not contain quotes, backslashes or control characters")
        } else {
            None
        };

        match problem {
            Some(problem) => Err(self.source.invalid(
                format!("'{}' {}", self.key_path("prefix"), problem),
                find_value_span(self.src(), "prefix", prefix),
            )),
            None => Ok(()),
        }
    }

    /// Reject a name already used elsewhere in the generated module.
    pub fn validate_distinct(&self, value: &str, key: &str, taken: &[&str]) -> Result<()> {
        if !taken.contains(&value) {
            return Ok(());
        }
        Err(self.source.invalid(
            format!(
                "'{}' = '{}' clashes with another generated name",
                self.key_path(key),
                value
            ),
            find_value_span(self.src(), key, value),
        ))
    }

    /// Validate a module specifier that ends up in an import statement.
    pub fn validate_module(&self, module: &str, key: &str) -> Result<()> {
        let problem = if module.trim().is_empty() {
            Some("must not be empty")
        } else if module.contains(['\'', '"', '\\', '\n', '\r']) {
            Some("must not contain quotes, backslashes or newlines")
        } else {
            None
        };

        match problem {
            Some(problem) => Err(self.source.invalid(
                format!("'{}' {}", self.key_path(key), problem),
                find_value_span(self.src(), key, module),
            )),
            None => Ok(()),
        }
    }
}

/// JavaScript reserved words (including strict mode and TypeScript-reserved names)
pub(crate) const JS_RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "import", "in", "instanceof", "new", "null", "return", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
    // Strict mode
    "implements", "interface", "let", "package", "private", "protected", "public", "static",
    "arguments", "eval",
];

pub(crate) fn is_reserved_word(name: &str) -> bool {
    JS_RESERVED_WORDS.contains(&name)
}

/// Returns None if `name` is a valid (ASCII) JavaScript identifier, Some(reason) otherwise
pub(crate) fn identifier_error(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Some("identifier cannot be empty");
    };

    if first.is_ascii_digit() {
        return Some("identifier cannot start with a digit");
    }
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return Some("identifier must start with a letter, '_' or '$'");
    }
    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '$')) {
        return Some("identifier contains invalid characters");
    }
    None
}

/// Span of `value` in a `key = "value"` (or single-quoted) assignment.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        for sep in [" = ", "="] {
            let pattern = format!("{}{}{}{}{}", key, sep, quote, value, quote);
            if let Some(pos) = src.find(&pattern) {
                let start = pos + key.len() + sep.len() + 1;
                return Some(SourceSpan::from((start, value.len())));
            }
        }
    }
    None
}

/// Span of the first quoted occurrence of `value`.
pub(crate) fn find_quoted_span(src: &str, value: &str) -> Option<SourceSpan> {
    ['"', '\''].into_iter().find_map(|quote| {
        let pattern = format!("{}{}{}", quote, value, quote);
        src.find(&pattern)
            .map(|pos| SourceSpan::from((pos + 1, value.len())))
    })
}

/// Span of a bare key at the start of a line.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let is_assignment = trimmed
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if is_assignment {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::from((start, key.len())));
        }
        offset += line.len();
    }
    None
}
