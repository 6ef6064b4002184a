//! Command-line interface for mastermind.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use strictly_mastermind::GameMode;

/// Mastermind - crack the secret code in the terminal
#[derive(Parser, Debug)]
#[command(name = "mastermind")]
#[command(
    about = "Play Mastermind against the computer, a friend or a real board",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding saved games (overrides the configuration)
    #[arg(long, global = true)]
    pub games_dir: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a new game
    New {
        /// Number of colors
        #[arg(long)]
        colors: Option<u8>,

        /// Number of pegs in the code
        #[arg(long)]
        dots: Option<u8>,

        /// Guesses allowed
        #[arg(long)]
        attempts: Option<u8>,

        /// Game mode: PVP, PVC, CVP or EVE
        #[arg(long)]
        mode: Option<GameMode>,
    },

    /// Continue a saved game
    Resume {
        /// Game id
        id: String,
    },

    /// List saved games
    List {
        /// Include finished games
        #[arg(long)]
        all: bool,
    },

    /// Print a saved game's board
    Show {
        /// Game id
        id: String,
    },

    /// Delete a saved game
    Delete {
        /// Game id
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_new_with_overrides() {
        let cli = Cli::parse_from(["mastermind", "new", "--colors", "8", "--mode", "pvc"]);
        match cli.command {
            Command::New { colors, mode, dots, .. } => {
                assert_eq!(colors, Some(8));
                assert_eq!(mode, Some(GameMode::PVC));
                assert_eq!(dots, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["mastermind", "list", "--all", "--games-dir", "/tmp/games"]);
        assert_eq!(cli.games_dir, Some(PathBuf::from("/tmp/games")));
        assert!(matches!(cli.command, Command::List { all: true }));
    }
}
