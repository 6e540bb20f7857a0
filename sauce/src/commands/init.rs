use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, bail};
use xosauce_config::{Config, DEFAULT_CONFIG_FILE};

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the file (defaults to ./sauce.toml)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        if self.config.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.config.display()
            );
        }

        let content = Config::default()
            .to_toml_string()
            .wrap_err("Failed to serialize default configuration")?;
        std::fs::write(&self.config, content)
            .wrap_err_with(|| format!("Failed to write {}", self.config.display()))?;

        println!("Created {}", self.config.display());
        println!();
        println!("Next steps:");
        println!("  sauce check");
        println!("  sauce generate <DATA_SOURCE> -o <DIR>");

        Ok(())
    }
}
