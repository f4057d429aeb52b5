/// One piece of generated code, before indentation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    Line(String),
    /// Empty line, never indented.
    Blank,
    /// `open` on its own line, `body` one level deeper, then `close` if any.
    Block {
        open: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

impl CodeFragment {
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(open: impl Into<String>, body: Vec<CodeFragment>, close: Option<&str>) -> Self {
        Self::Block {
            open: open.into(),
            body,
            close: close.map(str::to_string),
        }
    }

    /// A block closed by a lone `}`.
    pub fn braced(open: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::block(open, body, Some("}"))
    }

    /// The same fragment followed by a `,`, as in an argument list.
    pub fn with_comma(self) -> Self {
        match self {
            Self::Line(text) => Self::Line(format!("{text},")),
            Self::Block {
                open,
                body,
                close: Some(close),
            } => Self::Block {
                open,
                body,
                close: Some(format!("{close},")),
            },
            other => other,
        }
    }
}

/// Anything that can be laid out by a [`CodeWriter`](super::CodeWriter).
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        T::to_fragments(self)
    }
}

impl Renderable for [CodeFragment] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braced_closes_with_brace() {
        let block = CodeFragment::braced("if (ok) {", vec![CodeFragment::line("return 1;")]);
        let CodeFragment::Block { open, body, close } = block else {
            panic!("expected a block");
        };
        assert_eq!(open, "if (ok) {");
        assert_eq!(body, vec![CodeFragment::Line("return 1;".into())]);
        assert_eq!(close.as_deref(), Some("}"));
    }

    #[test]
    fn test_with_comma() {
        assert_eq!(
            CodeFragment::line("file").with_comma(),
            CodeFragment::line("file,")
        );
        let block = CodeFragment::block("[", Vec::new(), Some("]")).with_comma();
        assert!(matches!(block, CodeFragment::Block { close: Some(c), .. } if c == "],"));
        assert_eq!(CodeFragment::blank().with_comma(), CodeFragment::Blank);
    }
}
