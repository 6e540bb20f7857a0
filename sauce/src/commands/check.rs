use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use xosauce_config::{DEFAULT_CONFIG_FILE, SauceToml};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to sauce.toml (defaults to ./sauce.toml)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let sauce_toml = SauceToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(&sauce_toml);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
