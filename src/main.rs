//! Gomoku hotseat CLI
//!
//! Two players take turns typing `x y` coordinates on stdin.
//! Commands: `undo`, `reset`, `quit`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gomoku::{GameConfig, GameSession, MoveOutcome, Pos, SessionError};

#[derive(Debug, Parser)]
#[command(name = "gomoku", about = "Play Gomoku in the terminal")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board size, overrides the config file
    #[arg(short, long)]
    size: Option<usize>,

    /// Stones in a row needed to win, overrides the config file
    #[arg(short = 'k', long)]
    run_length: Option<usize>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(size) = args.size {
        config.board_size = size;
    }
    if let Some(k) = args.run_length {
        config.rule.pieces_to_win = k;
    }
    config.validate().context("invalid configuration")?;

    let mut session = GameSession::from_config(&config)?;
    let rule = session.rule();
    println!(
        "{} on {}x{}: {} in a row wins",
        rule.name(),
        config.board_size,
        config.board_size,
        rule.run_length()
    );
    print!("{}", session.board());
    prompt(&session)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            "quit" | "q" => break,
            "undo" | "u" => match session.undo() {
                Some(record) => {
                    println!("Took back {:?} at {}", record.stone, record.pos);
                    print!("{}", session.board());
                }
                None => println!("Nothing to undo"),
            },
            "reset" => {
                session.reset();
                print!("{}", session.board());
            }
            input => match parse_pos(input) {
                Some(pos) => handle_move(&mut session, pos),
                None => println!("Expected `x y`, `undo`, `reset` or `quit`"),
            },
        }
        prompt(&session)?;
    }

    Ok(())
}

fn handle_move(session: &mut GameSession, pos: Pos) {
    match session.play(pos) {
        Ok(outcome) => {
            print!("{}", session.board());
            match outcome {
                MoveOutcome::Continue { .. } => {}
                MoveOutcome::Won { result, .. } => {
                    let cells: Vec<String> = result
                        .winning_line
                        .cells
                        .iter()
                        .map(|p| p.to_string())
                        .collect();
                    println!(
                        "{:?} wins ({:?}): {}",
                        result.winner,
                        result.winning_line.direction,
                        cells.join(" ")
                    );
                    println!("Type `reset` for a new game or `undo` to take back the move");
                }
                MoveOutcome::Draw { .. } => println!("Board full, draw"),
            }
        }
        Err(SessionError::GameOver { .. } | SessionError::Drawn) => println!("Game is over"),
        Err(e) => println!("Invalid move: {e}"),
    }
}

fn parse_pos(input: &str) -> Option<Pos> {
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Pos::new(x, y))
}

fn prompt(session: &GameSession) -> io::Result<()> {
    if let Some(player) = session.current_player() {
        print!("{player:?} to move> ");
    } else {
        print!("> ");
    }
    io::stdout().flush()
}
