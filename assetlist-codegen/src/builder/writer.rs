use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated code, indenting each line by the current depth.
///
/// ```
/// use assetlist_codegen::builder::{CodeFragment, CodeWriter};
///
/// let mut w = CodeWriter::default();
/// w.line("function main() {");
/// w.indented(|w| w.line("console.log('hi');"));
/// w.line("}");
/// w.write(&CodeFragment::braced("{", vec![]));
///
/// assert_eq!(w.finish(), "function main() {\n  console.log('hi');\n}\n{\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeWriter {
    unit: String,
    depth: usize,
    out: String,
}

impl CodeWriter {
    pub fn new(indent: Indent) -> Self {
        Self {
            unit: indent.unit(),
            depth: 0,
            out: String::new(),
        }
    }

    pub fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(&self.unit);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Run `f` one level deeper than the current depth.
    pub fn indented(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    pub fn write(&mut self, fragment: &CodeFragment) {
        match fragment {
            CodeFragment::Line(text) => self.line(text),
            CodeFragment::Blank => self.blank(),
            CodeFragment::Block { open, body, close } => {
                self.line(open);
                self.indented(|w| body.iter().for_each(|f| w.write(f)));
                if let Some(close) = close {
                    self.line(close);
                }
            }
        }
    }

    pub fn emit<R: Renderable + ?Sized>(&mut self, node: &R) {
        for fragment in node.to_fragments() {
            self.write(&fragment);
        }
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::render;

    #[test]
    fn test_blank_lines_are_not_indented() {
        let mut w = CodeWriter::default();
        w.indented(|w| {
            w.line("a;");
            w.blank();
            w.line("b;");
        });
        assert_eq!(w.finish(), "  a;\n\n  b;\n");
    }

    #[test]
    fn test_nested_blocks() {
        let code = render(&[CodeFragment::braced(
            "for (const path of PATHS) {",
            vec![CodeFragment::braced(
                "try {",
                vec![CodeFragment::line("await upload(path);")],
            )],
        )][..]);
        assert_eq!(
            code,
            "for (const path of PATHS) {\n  try {\n    await upload(path);\n  }\n}\n"
        );
    }

    #[test]
    fn test_block_without_close() {
        let code = render(
            &[
                CodeFragment::block("try {", vec![CodeFragment::line("go();")], None),
                CodeFragment::line("} finally {}"),
            ][..],
        );
        assert_eq!(code, "try {\n  go();\n} finally {}\n");
    }
}
