use clap::Args;
use eyre::{Context, Result};

use super::args::SourceArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    source: SourceArgs,

    /// Print a JSON object instead of one path per line
    #[arg(long)]
    json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = self.source.load()?;
        let report = ops::list(&manifest)?;

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to encode JSON")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput);
        }
        Ok(())
    }
}
