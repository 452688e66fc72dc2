//! crc-sleuth CLI
//!
//! Command-line interface for reverse-engineering one-byte checksums.

mod cli_types;
mod error;
mod logging;

mod commands {
    pub(crate) mod config;
    pub(crate) mod list;
    pub(crate) mod search;
}

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose) {
        eprintln!("{e}");
    }

    let result = match cli.command {
        Commands::Search(args) => commands::search::run_search(args, cli.quiet),
        Commands::List => commands::list::run_list(),
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::Show => commands::config::run_config_show(),
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
