//! Object literals with string values.

use super::quote;
use crate::builder::Indent;

/// An object literal rendered one property per line.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<(String, String)>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property whose value is a string literal.
    pub fn string(mut self, key: impl Into<String>, value: &str) -> Self {
        self.properties.push((key.into(), quote(value)));
        self
    }

    pub fn build(&self) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }

        let unit = Indent::TYPESCRIPT.unit();
        let mut out = String::from("{\n");
        for (key, value) in &self.properties {
            out.push_str(&format!("{unit}{}: {value},\n", property_key(key)));
        }
        out.push('}');
        out
    }
}

/// Keys that are plain identifiers stay bare; anything else is quoted.
fn property_key(key: &str) -> String {
    let mut chars = key.chars();
    let bare = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if bare { key.to_string() } else { quote(key) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object() {
        assert_eq!(JsObject::new().build(), "{}");
    }

    #[test]
    fn test_string_properties() {
        let obj = JsObject::new()
            .string("gif", "image/gif")
            .string("png", "image/png")
            .build();
        assert_eq!(obj, "{\n  gif: 'image/gif',\n  png: 'image/png',\n}");
    }

    #[test]
    fn test_non_identifier_keys_are_quoted() {
        let obj = JsObject::new().string("3gp", "video/3gpp").build();
        assert_eq!(obj, "{\n  '3gp': 'video/3gpp',\n}");
    }
}
