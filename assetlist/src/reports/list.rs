//! List command report.

use std::path::PathBuf;

use serde::Serialize;

use super::output::{Output, Report};

/// Discovered logical paths.
#[derive(Debug, Serialize)]
pub struct ListReport {
    pub source: PathBuf,
    pub paths: Vec<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.paths.is_empty() {
            out.warning(&format!("no matching files in {}", self.source.display()));
        }
        for path in &self.paths {
            out.line(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_one_path_per_line() {
        let report = ListReport {
            source: PathBuf::from("public/s"),
            paths: vec!["/s/a.png".to_string(), "/s/b.png".to_string()],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(out.stdout, vec!["/s/a.png", "/s/b.png"]);
    }

    #[test]
    fn test_json_shape() {
        let report = ListReport {
            source: PathBuf::from("public/s"),
            paths: vec!["/s/a.png".to_string()],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "source": "public/s", "paths": ["/s/a.png"] })
        );
    }
}
