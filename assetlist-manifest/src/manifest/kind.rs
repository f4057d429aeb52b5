//! Kinds of generated module.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Which module the emitter renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// Path list plus the sequential upload function.
    #[default]
    Upload,
    /// A bare `as const` list of file names.
    #[serde(alias = "list")]
    Options,
}

impl ModuleKind {
    /// Returns the kind identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Upload => "upload",
            ModuleKind::Options => "options",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upload" => Ok(ModuleKind::Upload),
            "options" | "list" => Ok(ModuleKind::Options),
            _ => Err(format!(
                "unknown module kind '{}', expected 'upload' or 'options'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(ModuleKind::from_str("upload").unwrap(), ModuleKind::Upload);
        assert_eq!(ModuleKind::from_str("Upload").unwrap(), ModuleKind::Upload);
        assert_eq!(
            ModuleKind::from_str("options").unwrap(),
            ModuleKind::Options
        );
        assert_eq!(ModuleKind::from_str("list").unwrap(), ModuleKind::Options);
        assert!(ModuleKind::from_str("download").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ModuleKind::Upload.to_string(), "upload");
        assert_eq!(ModuleKind::Options.to_string(), "options");
    }

    #[test]
    fn test_deserialize() {
        let upload: ModuleKind = serde_json::from_str(r#""upload""#).unwrap();
        assert_eq!(upload, ModuleKind::Upload);

        let options: ModuleKind = serde_json::from_str(r#""options""#).unwrap();
        assert_eq!(options, ModuleKind::Options);

        let list: ModuleKind = serde_json::from_str(r#""list""#).unwrap();
        assert_eq!(list, ModuleKind::Options);
    }
}
