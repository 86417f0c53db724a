//! Numberle - CLI
//!
//! Guess a 4-digit code in six tries, in a TUI or a plain line-based mode.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use numberle::{
    commands::{evaluate_guess, replay_game, run_simple},
    core::Code,
    interactive::{App, run_tui},
    output::{print_evaluation_result, print_replay_result},
};
use std::io;

#[derive(Parser, Debug)]
#[command(
    name = "numberle",
    about = "Numberle: crack a 4-digit code in six guesses",
    version,
    author,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Options for the default `play` mode
    #[command(flatten)]
    play: SecretArgs,
}

#[derive(Args, Debug, Default)]
struct SecretArgs {
    /// Use this secret instead of a random one (4 digits, leading zero allowed)
    #[arg(short, long)]
    secret: Option<Code>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive TUI mode (default)
    Play(SecretArgs),

    /// Simple CLI mode (line-based, no TUI)
    Simple(SecretArgs),

    /// Score one guess against a secret
    Evaluate {
        /// The secret code
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Play a sequence of guesses against a secret and show the board
    Replay {
        /// The secret code
        secret: String,

        /// Guesses, in order
        #[arg(required = true)]
        guesses: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play(cli.play));

    match command {
        Commands::Play(args) => run_tui(App::new(args.secret)),
        Commands::Simple(args) => run_simple_command(args.secret),
        Commands::Evaluate { secret, guess } => run_evaluate_command(&secret, &guess),
        Commands::Replay { secret, guesses } => run_replay_command(&secret, &guesses),
    }
}

fn run_simple_command(secret: Option<Code>) -> Result<()> {
    let mut reader = io::stdin().lock();
    let mut out = io::stdout();
    let stats = run_simple(secret, &mut reader, &mut out).map_err(|e| anyhow::anyhow!(e))?;
    log::debug!(
        "Session finished: {} games, {} won",
        stats.total_games,
        stats.games_won
    );
    Ok(())
}

fn run_evaluate_command(secret: &str, guess: &str) -> Result<()> {
    let result = evaluate_guess(secret, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_evaluation_result(&result);
    Ok(())
}

fn run_replay_command(secret: &str, guesses: &[String]) -> Result<()> {
    let result = replay_game(secret, guesses).map_err(|e| anyhow::anyhow!(e))?;
    print_replay_result(&result);
    Ok(())
}
