use anyhow::Result;

use sevenball_league::cli::Command;
use sevenball_league::{
    handle_add_admin, handle_completions, handle_init, handle_serve, handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Init => handle_init(),
        Command::Standings => handle_standings(),
        Command::AddAdmin { identity } => handle_add_admin(identity),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
