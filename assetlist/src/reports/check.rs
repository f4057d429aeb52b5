//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// How the module on disk compares with a fresh render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    Stale,
    Missing,
}

/// Report data from comparing the generated module.
#[derive(Debug)]
pub struct CheckReport {
    /// Module location.
    pub path: PathBuf,
    /// Number of files currently in the source directory.
    pub file_count: usize,
    pub status: Freshness,
}

impl CheckReport {
    pub fn is_up_to_date(&self) -> bool {
        self.status == Freshness::UpToDate
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.path.display();
        match self.status {
            Freshness::UpToDate => {
                out.line(&format!("✓ {} is up to date ({} files)", path, self.file_count));
            }
            Freshness::Stale => {
                out.warning(&format!(
                    "{} is stale; run 'assetlist generate' to refresh it",
                    path
                ));
            }
            Freshness::Missing => {
                out.warning(&format!(
                    "{} does not exist; run 'assetlist generate' to create it",
                    path
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
    fn test_up_to_date() {
        let report = CheckReport {
            path: PathBuf::from("out.ts"),
            file_count: 3,
            status: Freshness::UpToDate,
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert!(report.is_up_to_date());
        assert_eq!(out.stdout, vec!["✓ out.ts is up to date (3 files)"]);
    }

    #[test]
    fn test_stale_is_a_warning() {
        let report = CheckReport {
            path: PathBuf::from("out.ts"),
            file_count: 3,
            status: Freshness::Stale,
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert!(!report.is_up_to_date());
        assert!(out.stdout.is_empty());
        assert!(out.stderr[0].contains("stale"));
    }
}
