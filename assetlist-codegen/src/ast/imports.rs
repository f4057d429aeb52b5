use super::quote;
use crate::builder::{CodeFragment, Renderable};

/// `import { a, b } from 'module';`
#[derive(Debug, Clone)]
pub struct Import {
    module: String,
    names: Vec<String>,
}

impl Import {
    pub fn new<I, S>(module: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            module: module.into(),
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "import {{ {} }} from {};",
            self.names.join(", "),
            quote(&self.module)
        ))]
    }
}
