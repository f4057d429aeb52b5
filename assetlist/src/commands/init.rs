use std::{
    io::{self, IsTerminal},
    path::{Path, PathBuf},
};

use assetlist_codegen::files::AssetlistToml;
use assetlist_core::{GeneratedFile, WriteResult};
use assetlist_manifest::MANIFEST_FILE;
use clap::Args;
use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result};

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the configuration (defaults to ./assetlist.toml)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(MANIFEST_FILE));
        let force = self.force || (path.exists() && Self::confirm_overwrite(&path)?);

        let file = AssetlistToml::new().at(&path).force(force);
        match file.write(Path::new("")).wrap_err("Failed to write configuration")? {
            WriteResult::Written => {
                println!("Created {}", path.display());
                println!();
                println!("Next steps:");
                println!("  edit [source] and [upload] in {}", path.display());
                println!("  assetlist generate");
            }
            WriteResult::Skipped => {
                eprintln!(
                    "warning: {} already exists; use --force to replace it",
                    path.display()
                );
            }
        }
        Ok(())
    }

    /// Ask before clobbering; non-interactive sessions keep the file.
    fn confirm_overwrite(path: &Path) -> Result<bool> {
        if !io::stdin().is_terminal() {
            return Ok(false);
        }
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} already exists. Overwrite?", path.display()))
            .default(false)
            .interact()
            .wrap_err("Failed to read confirmation")
    }
}
