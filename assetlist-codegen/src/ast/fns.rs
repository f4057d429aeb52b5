//! Exported, parameterless TypeScript functions.

use crate::builder::{CodeFragment, Renderable};

/// An `export function` whose body is a list of fragments, so nested blocks
/// keep their indentation relative to the function.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    is_async: bool,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_async: false,
            body: Vec::new(),
        }
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn body_line(self, line: impl Into<String>) -> Self {
        self.body_fragment(CodeFragment::line(line))
    }

    pub fn body_blank(self) -> Self {
        self.body_fragment(CodeFragment::blank())
    }

    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let keyword = if self.is_async { "export async function" } else { "export function" };
        let open = format!("{} {}() {{", keyword, self.name);
        vec![CodeFragment::braced(open, self.body.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::render;

    #[test]
    fn test_empty_fn() {
        assert_eq!(render(&Fn::new("greet")), "export function greet() {\n}\n");
    }

    #[test]
    fn test_async_fn_with_nested_block() {
        let f = Fn::new("run")
            .async_()
            .body_line("let n = 0;")
            .body_blank()
            .body_fragment(CodeFragment::braced(
                "for (const x of xs) {",
                vec![CodeFragment::line("n++;")],
            ));
        assert_eq!(
            render(&f),
            "export async function run() {\n  let n = 0;\n\n  for (const x of xs) {\n    n++;\n  }\n}\n"
        );
    }
}
