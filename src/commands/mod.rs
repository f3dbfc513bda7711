use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};

pub mod run;
pub mod show;

/// Expose remote configuration as environment variables and step outputs
#[derive(Parser, Debug)]
#[command(version, bin_name = "envfetch")]
pub struct Cli {
    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the remote document and export every entry
    Run(run::Cli),
    /// Print the resolved request without performing it
    Show(show::Cli),
}

impl Cli {
    pub fn exec(self) -> Result<()> {
        match self.command {
            Commands::Run(cli) => cli.exec(),
            Commands::Show(cli) => cli.exec(),
        }
    }
}
