mod cli;
mod commands;
mod config;
mod constants;
mod error;
mod modrinth;
mod ui;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Search { query }) => commands::search::search(query).await?,
        Some(Commands::Install { mods, force }) => commands::install::install(mods, force).await?,
        Some(Commands::Update) => commands::update::update(&[]).await?,
        Some(Commands::List { verbose }) => commands::list::list(verbose).await?,
        Some(Commands::InitLocal) => commands::init_local::init_local()?,
        None => {
            // Even a bare invocation validates (and bootstraps) the config
            Cli::command().print_help()?;
            config::ConfigStore::initialize()?;
        }
    }

    Ok(())
}
