use std::{fs::File, io, path::PathBuf};

use clap::{Args, CommandFactory};
use eyre::{Context, Result};

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    shell: clap_complete::Shell,

    /// Write the script to a file instead of stdout
    #[arg(short = 'o', long = "out-file")]
    out_file: Option<PathBuf>,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        let mut cmd = Cli::command();
        match &self.out_file {
            Some(path) => {
                let mut file = File::create(path)
                    .wrap_err_with(|| format!("failed to create '{}'", path.display()))?;
                clap_complete::generate(self.shell, &mut cmd, "sauce", &mut file);
            }
            None => clap_complete::generate(self.shell, &mut cmd, "sauce", &mut io::stdout()),
        }
        Ok(())
    }
}
