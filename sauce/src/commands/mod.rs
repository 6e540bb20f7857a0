mod check;
mod completions;
mod generate;
mod init;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use xosauce_codegen::RunError;

/// Extension trait for exiting on configuration and source errors with
/// pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for xosauce_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Render unparsable source units with their source context and exit;
/// pass every other error through.
pub(crate) trait ExitOnParseError<T> {
    fn exit_on_parse_error(self) -> Result<T>;
}

impl<T> ExitOnParseError<T> for Result<T> {
    fn exit_on_parse_error(self) -> Result<T> {
        let err = match self {
            Ok(v) => return Ok(v),
            Err(e) => e,
        };
        match err.downcast::<RunError>() {
            Ok(RunError::Parse(parse)) => {
                eprintln!("{:?}", miette::Report::new(*parse));
                std::process::exit(1);
            }
            Ok(other) => Err(other.into()),
            Err(err) => Err(err),
        }
    }
}

#[derive(Parser)]
#[command(name = "sauce")]
#[command(version)]
#[command(about = "Regenerate editable Go wrappers around xo-generated models")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run xo and regenerate the wrapper files
    Generate(GenerateCommand),

    /// Write a default sauce.toml
    Init(InitCommand),

    /// Validate sauce.toml and show the effective settings
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["sauce", "generate", "pgsql://localhost/db", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }
}
