use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Boxed, since the diagnostics carry a copy of the source text.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The manifest text and its display name, shared by every diagnostic raised
/// while reading one file.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Build a diagnostic that points at `span` in this source.
    pub fn at<F>(&self, span: Option<SourceSpan>, build: F) -> Box<Error>
    where
        F: FnOnce(NamedSource<String>, Option<SourceSpan>) -> Error,
    {
        Box::new(build(self.named_source(), span))
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        self.at(span, |src, span| Error::Parse { src, span, source })
    }

    /// A free-form validation failure.
    pub fn invalid(&self, message: impl Into<String>, span: Option<SourceSpan>) -> Box<Error> {
        let message = message.into();
        self.at(span, |src, span| Error::Validation { src, span, message })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot read {}", path.display())]
    #[diagnostic(
        code(assetlist::io),
        help("run 'assetlist init' to write a default assetlist.toml")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("assetlist.toml is not valid TOML for this tool")]
    #[diagnostic(code(assetlist::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(assetlist::invalid))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is reserved in JavaScript and cannot be used for {key}")]
    #[diagnostic(
        code(assetlist::reserved_word),
        help("pick a different name, e.g. '{name}Value'")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved word")]
        span: Option<SourceSpan>,
        name: String,
        key: String,
    },

    #[error("{key} = '{name}' is not a JavaScript identifier: {reason}")]
    #[diagnostic(
        code(assetlist::identifier),
        help("identifiers use letters, digits, '_' and '$' and do not start with a digit")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("not an identifier")]
        span: Option<SourceSpan>,
        name: String,
        key: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_carries_span_and_name() {
        let ctx = SourceContext::new("[source]\nextensions = []\n", "assets.toml");
        let err = ctx.invalid("needs an extension", Some(SourceSpan::from((9, 10))));
        match *err {
            Error::Validation { src, span, message } => {
                assert_eq!(src.name(), "assets.toml");
                assert_eq!(span.map(|s| s.offset()), Some(9));
                assert_eq!(message, "needs an extension");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_identifier_message() {
        let ctx = SourceContext::new("", "assetlist.toml");
        let err = ctx.at(None, |src, span| Error::InvalidIdentifier {
            src,
            span,
            name: "2x".to_string(),
            key: "upload.list_name".to_string(),
            reason: "identifier cannot start with a digit".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "upload.list_name = '2x' is not a JavaScript identifier: identifier cannot start with a digit"
        );
    }
}
