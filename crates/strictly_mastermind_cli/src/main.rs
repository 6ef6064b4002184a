//! Mastermind - terminal CLI
//!
//! Creates, resumes and manages games stored as JSON files.

use std::io::{self, BufReader};

use anyhow::Result;
use clap::Parser;
use strictly_mastermind::Game;
use strictly_mastermind_cli::{
    AppConfig, Cli, Command, Disposition, GameRepository, GameSession, GameSummary, Prompt,
    render_board,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    // Logs go to stderr so prompts on stdout stay readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    let repository = GameRepository::open(config.games_dir_or(cli.games_dir.as_deref()))?;

    match cli.command {
        Command::New {
            colors,
            dots,
            attempts,
            mode,
        } => {
            let configuration = config.game_configuration(colors, dots, attempts, mode)?;
            play(&repository, &config, GameSession::new(Game::new(configuration)))
        }
        Command::Resume { id } => {
            let session = GameSession::resume(&repository, &id)?;
            let game = session.game();
            if game.state().game_over() {
                print!("{}", render_board(game));
                println!("Game {} is already over ({} won).", id, game.state().winner());
                return Ok(());
            }
            play(&repository, &config, session)
        }
        Command::List { all } => list(&repository, all),
        Command::Show { id } => {
            let game = repository.load(&id)?;
            println!("{}", GameSummary::from_game(id, &game));
            print!("{}", render_board(&game));
            Ok(())
        }
        Command::Delete { id } => {
            repository.delete(&id)?;
            println!("Game {} deleted.", id);
            Ok(())
        }
    }
}

/// Runs a session on stdin/stdout and stores the result.
#[instrument(skip_all, fields(id = ?session.id()))]
fn play(repository: &GameRepository, config: &AppConfig, mut session: GameSession) -> Result<()> {
    let prompt = Prompt::shared(BufReader::new(io::stdin()), io::stdout());
    let outcome = session.play(prompt, io::stdout(), config.play())?;
    info!(?outcome, "Session complete");

    let disposition = session.settle(repository, outcome, config.play())?;
    if disposition != Disposition::Dropped {
        println!("{}", disposition);
    }
    Ok(())
}

/// Prints one line per stored game.
#[instrument(skip(repository))]
fn list(repository: &GameRepository, all: bool) -> Result<()> {
    let summaries = repository.summaries(!all)?;
    if summaries.is_empty() {
        println!("No saved games.");
    }
    for summary in summaries {
        println!("{}", summary);
    }
    Ok(())
}
