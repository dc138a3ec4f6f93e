//! Atari-Go: the capture-Go variant where the first capture wins.
//!
//! Two players alternately place stones. Orthogonally connected stones of one
//! color form a group, and a group left without any empty neighbor is taken
//! off the board. The first player to take at least one prisoner (or the
//! configured winning score) wins.
//!
//! ## Modules
//!
//! - [`constants`] - Default sizes, win threshold and glyphs
//! - [`board`] - Grid of intersections, vertex notation and rendering
//! - [`rules`] - Validity, groups, liberties, captures and the win check
//! - [`config`] - Per-game configuration and policies
//! - [`error`] - Error types
//! - [`game`] - Turn order and game lifecycle
//! - [`gtp`] - Text protocol front end
//! - [`demo`] - Random self-play
//!
//! ## Example
//!
//! ```
//! use atari_go::config::GameConfig;
//! use atari_go::game::{Game, MoveStatus};
//! use atari_go::board::Color;
//!
//! let mut game = Game::new(GameConfig::default().with_size(5)).unwrap();
//! game.apply_move((2, 2)).unwrap(); // black
//! game.apply_move((1, 2)).unwrap(); // white
//! game.pass_turn().unwrap();
//! game.apply_move((3, 2)).unwrap();
//! game.pass_turn().unwrap();
//! game.apply_move((2, 1)).unwrap();
//! game.pass_turn().unwrap();
//! let report = game.apply_move((2, 3)).unwrap();
//!
//! assert_eq!(report.status, MoveStatus::Winner(Color::White));
//! assert_eq!(game.prisoners().get(Color::White), 1);
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod demo;
pub mod error;
pub mod game;
pub mod gtp;
pub mod rules;
