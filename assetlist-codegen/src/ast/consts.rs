//! TypeScript const declaration builder.

use crate::builder::{CodeFragment, Renderable};

/// Builder for TypeScript const declarations.
///
/// A multiline value is split across lines; the terminating `;` lands on
/// the last one.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
    ty: Option<String>,
    exported: bool,
    comment: Option<String>,
    trailing: Option<String>,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ty: None,
            exported: true,
            comment: None,
            trailing: None,
        }
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Make this const private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Line comment placed above the declaration.
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comment = Some(text.into());
        self
    }

    /// Line comment appended after the `;`.
    pub fn trailing_comment(mut self, text: impl Into<String>) -> Self {
        self.trailing = Some(text.into());
        self
    }

    fn head(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        match &self.ty {
            Some(ty) => format!("{}const {}: {} = ", export, self.name, ty),
            None => format!("{}const {} = ", export, self.name),
        }
    }

    fn tail(&self) -> String {
        match &self.trailing {
            Some(text) => format!("; // {}", text),
            None => ";".to_string(),
        }
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(comment) = &self.comment {
            fragments.push(CodeFragment::line(format!("// {}", comment)));
        }

        let lines: Vec<&str> = self.value.lines().collect();
        match lines.as_slice() {
            [] => fragments.push(CodeFragment::line(format!("{}{}", self.head(), self.tail()))),
            [only] => fragments.push(CodeFragment::line(format!(
                "{}{}{}",
                self.head(),
                only,
                self.tail()
            ))),
            [first, middle @ .., last] => {
                fragments.push(CodeFragment::line(format!("{}{}", self.head(), first)));
                fragments.extend(middle.iter().map(|l| CodeFragment::line(*l)));
                fragments.push(CodeFragment::line(format!("{}{}", last, self.tail())));
            }
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::render;

    #[test]
    fn test_simple_const() {
        assert_eq!(render(&Const::new("foo", "42")), "export const foo = 42;\n");
    }

    #[test]
    fn test_const_with_type() {
        let c = Const::new("PATHS", "[]").ty("string[]").private();
        assert_eq!(render(&c), "const PATHS: string[] = [];\n");
    }

    #[test]
    fn test_const_with_comments() {
        let c = Const::new("BUCKET", "'stickers'")
            .comment("Target bucket")
            .trailing_comment("Replace me");
        assert_eq!(
            render(&c),
            "// Target bucket\nexport const BUCKET = 'stickers'; // Replace me\n"
        );
    }

    #[test]
    fn test_multiline_value() {
        let c = Const::new("XS", "[\n  'a',\n]").private();
        assert_eq!(render(&c), "const XS = [\n  'a',\n];\n");
    }
}
