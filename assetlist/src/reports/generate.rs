//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Logical paths in output order.
    pub paths: Vec<String>,
    /// File names that had to be escaped.
    pub escaped: Vec<String>,
    pub result: GenerationResult,
}

/// What happened to the module.
#[derive(Debug)]
pub enum GenerationResult {
    /// The module was written to disk.
    Written { path: PathBuf },
    /// Dry-run preview.
    Preview { path: PathBuf, content: String },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for name in &self.escaped {
            out.warning(&format!(
                "'{}' contains characters that were escaped in the generated string",
                name
            ));
        }

        match &self.result {
            GenerationResult::Written { path } => {
                out.key_value("Found", &format!("{} files", self.paths.len()));
                out.key_value("Generated", &path.display().to_string());
                for path in &self.paths {
                    out.line(path);
                }
            }
            GenerationResult::Preview { path, content } => {
                out.divider(&path.display().to_string());
                out.preformatted(content);
                out.divider("Summary");
                out.line(&format!(
                    "Found {} files; {} would be written",
                    self.paths.len(),
                    path.display()
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_written_summary() {
        let report = GenerateReport {
            paths: vec!["/s/a.png".to_string(), "/s/b.png".to_string()],
            escaped: vec![],
            result: GenerationResult::Written {
                path: PathBuf::from("src/lib/uploadStickers.ts"),
            },
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.stdout,
            vec![
                "Found 2 files",
                "Generated src/lib/uploadStickers.ts",
                "/s/a.png",
                "/s/b.png"
            ]
        );
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_escape_warnings_go_to_stderr() {
        let report = GenerateReport {
            paths: vec!["/s/it's.png".to_string()],
            escaped: vec!["it's.png".to_string()],
            result: GenerationResult::Written {
                path: PathBuf::from("out.ts"),
            },
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.stderr.len(), 1);
        assert!(out.stderr[0].contains("it's.png"));
        assert_eq!(out.stdout[0], "Found 1 files");
    }
}
