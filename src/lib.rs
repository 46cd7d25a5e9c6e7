pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod eligibility;
pub mod errors;
pub mod report;
pub mod services;
pub mod standings;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::league::LeagueService;
use crate::services::server::ServerService;
use crate::store::SqliteStore;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_init() -> Result<()> {
    let config = AppConfig::new();
    SqliteStore::open(&config.server.database_path)?;
    Ok(())
}

pub fn handle_standings() -> Result<()> {
    let config = AppConfig::new();
    let store = SqliteStore::open(&config.server.database_path)?;
    let service = LeagueService::new(store, config.league);
    let standings = service.standings()?;
    print!("{}", report::format_standings(&standings));
    Ok(())
}

pub fn handle_add_admin(identity: &str) -> Result<()> {
    let config = AppConfig::new();
    let store = SqliteStore::open(&config.server.database_path)?;
    store.add_admin(identity)?;
    log::info!("Added admin identity {}", identity);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
