use std::path::Path;

use clap::Args;
use eyre::Result;

use super::args::{OutputArgs, SourceArgs};
use crate::{
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Print the module instead of writing it
    #[arg(long)]
    dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let mut manifest = self.source.load()?;
        self.output.apply(&mut manifest);

        // Paths in the manifest are relative to the working directory.
        let report = ops::generate(
            &manifest,
            GenerateOptions {
                base: Path::new(""),
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput);
        Ok(())
    }
}
