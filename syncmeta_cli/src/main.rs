mod cli;
pub mod errors;
mod handlers;
mod logging;

use clap::Parser;
use crate::cli::{Cli, Command};
use crate::errors::CliError;
use crate::handlers::{handle_add, handle_init, handle_list, handle_path, open_storage};
use crate::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    init_logging(cli.verbose)?;
    let key = cli.key.or_else(|| std::env::var("SYNCMETA_DB_KEY").ok());

    match cli.command {
        Command::Init { account, database, encrypt } => {
            handle_init(&cli.config, &account, database, encrypt, key.as_deref())
        }
        Command::Add { remote_path, name, parent } => {
            let storage = open_storage(&cli.config, key.as_deref())?;
            handle_add(&storage, &remote_path, name.as_deref(), parent)
        }
        Command::Path { remote_path } => {
            let storage = open_storage(&cli.config, key.as_deref())?;
            handle_path(&storage, &remote_path)
        }
        Command::List { parent } => {
            let storage = open_storage(&cli.config, key.as_deref())?;
            handle_list(&storage, parent)
        }
    }
}
