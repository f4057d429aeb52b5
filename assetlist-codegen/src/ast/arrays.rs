//! Array literals.

use super::quote;
use crate::builder::Indent;

/// A string-array literal with one item per line and trailing commas. No
/// items renders as `[]`.
#[derive(Debug, Clone, Default)]
pub struct JsArray {
    /// Items already quoted and escaped.
    items: Vec<String>,
    as_const: bool,
}

impl JsArray {
    pub fn from_strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            items: values.into_iter().map(|v| quote(v.as_ref())).collect(),
            as_const: false,
        }
    }

    /// Append a TypeScript `as const` assertion.
    pub fn as_const(mut self) -> Self {
        self.as_const = true;
        self
    }

    pub fn build(&self) -> String {
        let mut out = if self.items.is_empty() {
            String::from("[]")
        } else {
            let unit = Indent::TYPESCRIPT.unit();
            let body: String = self
                .items
                .iter()
                .map(|item| format!("{unit}{item},\n"))
                .collect();
            format!("[\n{body}]")
        };
        if self.as_const {
            out.push_str(" as const");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_items() {
        let none: [&str; 0] = [];
        assert_eq!(JsArray::from_strings(none).build(), "[]");
        assert_eq!(JsArray::from_strings(none).as_const().build(), "[] as const");
    }

    #[test]
    fn test_one_item_per_line() {
        let arr = JsArray::from_strings(["/s/a.png", "/s/b.png"]).build();
        assert_eq!(arr, "[\n  '/s/a.png',\n  '/s/b.png',\n]");
    }

    #[test]
    fn test_strings_are_escaped() {
        let arr = JsArray::from_strings(["it's", "a\\b"]).build();
        assert_eq!(arr, "[\n  'it\\'s',\n  'a\\\\b',\n]");
    }

    #[test]
    fn test_as_const() {
        let arr = JsArray::from_strings(["a.png"]).as_const().build();
        assert_eq!(arr, "[\n  'a.png',\n] as const");
    }
}
