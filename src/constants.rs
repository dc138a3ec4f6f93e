//! Default game parameters and rendering glyphs.
//!
//! These are the values a [`GameConfig`](crate::config::GameConfig) starts
//! from. Everything here can be overridden per game, either in code or from
//! the command line.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN).
pub const DEFAULT_SIZE: usize = 19;

/// Smallest board on which a capture is possible.
pub const MIN_SIZE: usize = 2;

/// Largest board addressable with vertex letters (A-Z without I).
pub const MAX_VERTEX_SIZE: usize = 25;

// =============================================================================
// Win Condition
// =============================================================================

/// Prisoners needed to win. A single captured stone ends the game.
pub const WINNING_SCORE: u32 = 1;

// =============================================================================
// Demo Driver
// =============================================================================

/// Move cap for the random self-play demo.
pub const DEMO_MAX_MOVES: usize = 1000;

// =============================================================================
// Stone Glyphs
// =============================================================================

/// Black stone.
pub const STONE_BLACK: char = 'X';

/// White stone.
pub const STONE_WHITE: char = 'O';

/// Empty point.
pub const EMPTY: char = '.';
