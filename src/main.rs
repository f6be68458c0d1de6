//! Morris-Rust: a placement-phase mill game engine.
//!
//! ## Usage
//!
//! - `morris-rust` - Show a demo
//! - `morris-rust referee` - Play against a referee over stdin/stdout
//! - `morris-rust play` - Play against the engine at the console
//! - `morris-rust demo` - Run the self-play demo

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use morris_rust::board::{Board, Player};
use morris_rust::capture::RandomCapture;
use morris_rust::console::ConsoleGame;
use morris_rust::constants::DEFAULT_DEPTH;
use morris_rust::referee::RefereeEngine;
use morris_rust::search::Searcher;

/// Morris-Rust: a placement-phase mill game engine
#[derive(Parser)]
#[command(name = "morris-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search depth in plies
    #[arg(long, global = true, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Seed for the engine's capture choices
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print search diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against an external referee using the line protocol
    Referee,
    /// Play an interactive game as Orange against the engine
    Play,
    /// Run a short self-play demo
    Demo,
}

impl Cli {
    fn capture_selector(&self) -> RandomCapture {
        match self.seed {
            Some(seed) => RandomCapture::with_seed(seed),
            None => RandomCapture::new(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Referee) => {
            let mut engine = RefereeEngine::with_depth(cli.depth).with_verbose(cli.verbose);
            engine.run()?;
        }
        Some(Commands::Play) => {
            let stdin = io::stdin();
            let mut game = ConsoleGame::new(stdin.lock(), io::stdout())
                .with_depth(cli.depth)
                .with_capture_selector(Box::new(cli.capture_selector()))
                .with_verbose(cli.verbose);
            game.play()?;
        }
        Some(Commands::Demo) | None => run_demo(&cli)?,
    }
    Ok(())
}

/// Both sides played by the engine until the board is full.
fn run_demo(cli: &Cli) -> Result<()> {
    println!("Morris-Rust: placement-phase mill engine\n");

    let mut board = Board::new();
    let mut capture = cli.capture_selector();
    let mut searchers = [
        Searcher::new(Player::Blue).with_verbose(cli.verbose),
        Searcher::new(Player::Orange).with_verbose(cli.verbose),
    ];

    let mut turn = 0;
    while !board.is_terminal() {
        let searcher = &mut searchers[turn % 2];
        let player = searcher.root();
        let result = searcher.best_move(&mut board, cli.depth);
        let Some(mv) = result.best_move else {
            break;
        };
        board.apply(mv, player);
        println!(
            "{player} plays {mv} (score {}, {} nodes)",
            result.score, result.nodes
        );

        if board.forms_mill(mv, player) {
            if let Some(taken) = board.resolve_capture(player, &mut capture)? {
                println!("  mill! {player} removes {taken}");
            }
        }
        turn += 1;
    }

    println!("\n{board}");
    if let Some(outcome) = board.outcome() {
        println!("Result: {outcome:?}");
    }
    Ok(())
}
