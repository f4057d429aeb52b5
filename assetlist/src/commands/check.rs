use std::path::Path;

use clap::Args;
use eyre::Result;

use super::args::{OutputArgs, SourceArgs};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl CheckCommand {
    /// Exits with status 1 when the module is missing or stale.
    pub fn run(&self) -> Result<()> {
        let mut manifest = self.source.load()?;
        self.output.apply(&mut manifest);

        let report = ops::check(&manifest, Path::new(""))?;
        report.render(&mut TerminalOutput);

        if !report.is_up_to_date() {
            std::process::exit(1);
        }
        Ok(())
    }
}
