#[macro_use]
mod macros;

mod app;
mod commands;
mod emit;
mod error;
mod fetch;
mod github;
mod inputs;
mod request;

use clap::Parser;
use commands::Cli;
use log::LevelFilter;

fn main() {
    let cli = Cli::parse();

    let mut verbosity = cli.verbose.log_level_filter();
    if github::step_debug_enabled() {
        verbosity = verbosity.max(LevelFilter::Debug);
    }
    app::set_global_verbosity(verbosity);

    if let Err(error) = cli.exec() {
        debug!("{error:?}");
        github::error(&format!("{error:#}"));
        std::process::exit(1);
    }
}
