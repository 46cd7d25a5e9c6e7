use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "sevenball-league scoreboard")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Start the scoreboard API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Create the database schema if it does not exist
    Init,
    /// Print the current league table
    Standings,
    /// Allow an identity to record and delete games and players
    AddAdmin {
        /// Bearer identity sent by the admin client
        identity: String,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_default_port() {
        let cli = Cli::try_parse_from(["sevenball_league", "serve"]).unwrap();
        assert_eq!(cli.command, Command::Serve { port: 3000 });
    }

    #[test]
    fn test_add_admin() {
        let cli = Cli::try_parse_from(["sevenball_league", "add-admin", "owner"]).unwrap();
        assert_eq!(
            cli.command,
            Command::AddAdmin {
                identity: "owner".to_string()
            }
        );
    }

    #[test]
    fn test_completions_shell() {
        let cli = Cli::try_parse_from(["sevenball_league", "completions", "bash"]).unwrap();
        assert_eq!(cli.command, Command::Completions { shell: Shell::Bash });
    }
}
