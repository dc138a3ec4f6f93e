//! Atari-Go: capture-Go for two players.
//!
//! ## Usage
//!
//! - `atari-go` - Play a random demo game
//! - `atari-go gtp` - Start the text protocol server for GUI integration
//! - `atari-go demo --seed 3` - Play a reproducible random game

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use atari_go::board::Color;
use atari_go::config::{GameConfig, SuicidePolicy, TieBreak};
use atari_go::constants::{DEFAULT_SIZE, DEMO_MAX_MOVES, WINNING_SCORE};
use atari_go::demo::play_random_game;
use atari_go::game::Game;
use atari_go::gtp::GtpEngine;

/// Atari-Go: the first capture wins
#[derive(Parser)]
#[command(name = "atari-go")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (NxN)
    #[arg(long, global = true, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Prisoners needed to win
    #[arg(long, global = true, default_value_t = WINNING_SCORE)]
    winning_score: u32,

    /// Color that wins if both reach the winning score at once
    #[arg(long, global = true, value_enum, default_value_t = TieBreakArg::Black)]
    tie_break: TieBreakArg,

    /// Reject moves that leave the mover's own group without liberties
    #[arg(long, global = true)]
    forbid_suicide: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the text protocol server for use with GUI applications
    Gtp,
    /// Play a random game between two random movers
    Demo {
        /// Seed for the random mover
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many moves
        #[arg(long, default_value_t = DEMO_MAX_MOVES)]
        max_moves: usize,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum TieBreakArg {
    Black,
    White,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let tie_break = match self.tie_break {
            TieBreakArg::Black => TieBreak::Black,
            TieBreakArg::White => TieBreak::White,
        };
        let suicide = if self.forbid_suicide {
            SuicidePolicy::Forbid
        } else {
            SuicidePolicy::Permit
        };
        GameConfig::default()
            .with_size(self.size)
            .with_winning_score(self.winning_score)
            .with_tie_break(tie_break)
            .with_suicide(suicide)
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = cli.config();

    match cli.command {
        Some(Commands::Gtp) => {
            let mut engine = GtpEngine::new(config).context("cannot start text protocol server")?;
            engine.run().context("text protocol I/O failed")?;
        }
        Some(Commands::Demo { seed, max_moves }) => run_demo(config, seed, max_moves)?,
        None => run_demo(config, None, DEMO_MAX_MOVES)?,
    }
    Ok(())
}

fn run_demo(config: GameConfig, seed: Option<u64>, max_moves: usize) -> Result<()> {
    let mut game = Game::new(config).context("invalid game configuration")?;
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    println!("Atari-Go: random demo game\n");
    let result = play_random_game(&mut game, &mut rng, max_moves);

    println!("{}\n", game.board().render_labelled());
    println!(
        "Black captures: {}  White captures: {}",
        game.prisoners().get(Color::Black),
        game.prisoners().get(Color::White)
    );
    match game.winner() {
        Some(winner) => println!("{winner} wins after {} moves", result.moves),
        None => println!("no winner after {} moves", result.moves),
    }
    Ok(())
}
