//! Per-game configuration.

use crate::board::Color;
use crate::constants::{DEFAULT_SIZE, MIN_SIZE, WINNING_SCORE};
use crate::error::GameError;

/// Which color wins when both reach the winning score in the same check.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    #[default]
    Black,
    White,
}

impl TieBreak {
    pub fn favored(self) -> Color {
        match self {
            TieBreak::Black => Color::Black,
            TieBreak::White => Color::White,
        }
    }
}

/// What to do with a move that leaves the mover's own group without liberties.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SuicidePolicy {
    /// The stone stays; only the opponent is swept for captures.
    #[default]
    Permit,
    /// The move is undone and rejected.
    Forbid,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub winning_score: u32,
    pub tie_break: TieBreak,
    pub suicide: SuicidePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            winning_score: WINNING_SCORE,
            tie_break: TieBreak::default(),
            suicide: SuicidePolicy::default(),
        }
    }
}

impl GameConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_winning_score(mut self, winning_score: u32) -> Self {
        self.winning_score = winning_score;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_suicide(mut self, suicide: SuicidePolicy) -> Self {
        self.suicide = suicide;
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.size < MIN_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "board size must be at least {MIN_SIZE} (got {})",
                self.size
            )));
        }
        if self.winning_score == 0 {
            return Err(GameError::InvalidConfig(
                "winning score must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
