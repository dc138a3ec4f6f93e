//! Turn order and win detection around the rules engine.
//!
//! A [`Game`] owns the board and prisoner counters for one session. Each
//! placement is validated, applied, followed by a capture sweep against the
//! opponent, and then checked for a winner. Once someone wins the game is
//! over and refuses further moves.

use tracing::{debug, info};

use crate::board::{Board, Color, Point};
use crate::config::{GameConfig, SuicidePolicy};
use crate::error::{GameError, InvalidMove};
use crate::rules::{self, Prisoners};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    AwaitingMove(Color),
    GameOver(Color),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Place(Point),
    Pass,
}

/// What happened after an accepted placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveStatus {
    /// The game goes on with this color to play.
    Continue(Color),
    Winner(Color),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub color: Color,
    pub point: Point,
    /// Opponent stones removed by this move.
    pub captured: Vec<Point>,
    pub status: MoveStatus,
}

#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    prisoners: Prisoners,
    state: GameState,
    move_number: usize,
    last_move: Option<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::fresh(GameConfig::default())
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    fn fresh(config: GameConfig) -> Self {
        Self {
            board: Board::new(config.size),
            config,
            prisoners: Prisoners::default(),
            state: GameState::AwaitingMove(Color::Black),
            move_number: 0,
            last_move: None,
        }
    }

    /// Start over on an empty board with the same configuration.
    pub fn new_game(&mut self) {
        *self = Self::fresh(self.config.clone());
        debug!(size = self.config.size, "new game");
    }

    /// Start over on an empty board of a different size.
    pub fn resize(&mut self, size: usize) -> Result<(), GameError> {
        let config = self.config.clone().with_size(size);
        config.validate()?;
        self.config = config;
        self.new_game();
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn prisoners(&self) -> &Prisoners {
        &self.prisoners
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The color on turn, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Color> {
        match self.state {
            GameState::AwaitingMove(c) => Some(c),
            GameState::GameOver(_) => None,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self.state {
            GameState::GameOver(c) => Some(c),
            GameState::AwaitingMove(_) => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Moves and passes accepted so far.
    pub fn move_number(&self) -> usize {
        self.move_number
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    fn active(&self) -> Result<Color, GameError> {
        self.to_move().ok_or(GameError::AlreadyOver)
    }

    /// Place a stone for the color on turn at `p`.
    ///
    /// Rejected moves leave the board, counters and turn untouched.
    pub fn apply_move(&mut self, p: Point) -> Result<MoveReport, GameError> {
        let color = self.active()?;
        rules::check_move(&self.board, p)?;

        self.board.place(p, color);
        let captured = rules::capture_stones(&mut self.board, color.opposite());

        if self.config.suicide == SuicidePolicy::Forbid {
            let suicidal = rules::group_at(&self.board, p)
                .is_some_and(|g| rules::has_no_liberties(&self.board, &g));
            if suicidal {
                // Any capture frees a point next to `p`, so nothing was taken.
                debug_assert!(captured.is_empty());
                self.board.remove(p);
                return Err(InvalidMove::Suicide { col: p.0, row: p.1 }.into());
            }
        }

        self.prisoners.add(color, captured.len() as u32);
        self.move_number += 1;
        self.last_move = Some(Move::Place(p));
        debug!(%color, col = p.0, row = p.1, captured = captured.len(), "stone placed");

        let status = match rules::check_winner(
            &self.prisoners,
            self.config.winning_score,
            self.config.tie_break,
        ) {
            Some(winner) => {
                self.state = GameState::GameOver(winner);
                info!(%winner, move_number = self.move_number, "game over");
                MoveStatus::Winner(winner)
            }
            None => {
                let next = color.opposite();
                self.state = GameState::AwaitingMove(next);
                MoveStatus::Continue(next)
            }
        };

        Ok(MoveReport {
            color,
            point: p,
            captured,
            status,
        })
    }

    /// Yield the turn without placing a stone. Returns the color now on turn.
    pub fn pass_turn(&mut self) -> Result<Color, GameError> {
        let color = self.active()?;
        let next = color.opposite();
        self.state = GameState::AwaitingMove(next);
        self.move_number += 1;
        self.last_move = Some(Move::Pass);
        debug!(%color, "pass");
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_game() -> Game {
        Game::new(GameConfig::default().with_size(5)).unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let game = small_game();
        assert_eq!(game.state(), GameState::AwaitingMove(Color::Black));
        assert_eq!(game.move_number(), 0);
        assert_eq!(game.last_move(), None);
        assert_eq!(game.board().size(), 5);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Game::new(GameConfig::default().with_size(1));
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_apply_move_toggles_turn() {
        let mut game = small_game();
        let report = game.apply_move((2, 2)).unwrap();
        assert_eq!(report.color, Color::Black);
        assert!(report.captured.is_empty());
        assert_eq!(report.status, MoveStatus::Continue(Color::White));
        assert_eq!(game.to_move(), Some(Color::White));
        assert_eq!(game.last_move(), Some(Move::Place((2, 2))));
    }

    #[test]
    fn test_occupied_move_keeps_turn() {
        let mut game = small_game();
        game.apply_move((2, 2)).unwrap();
        let err = game.apply_move((2, 2)).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidMove(InvalidMove::Occupied { col: 2, row: 2 })
        );
        assert_eq!(game.to_move(), Some(Color::White));
        assert_eq!(game.move_number(), 1);
    }

    #[test]
    fn test_pass_toggles_turn() {
        let mut game = small_game();
        assert_eq!(game.pass_turn().unwrap(), Color::White);
        assert_eq!(game.pass_turn().unwrap(), Color::Black);
        assert_eq!(game.last_move(), Some(Move::Pass));
        assert_eq!(game.move_number(), 2);
    }

    #[test]
    fn test_suicide_forbidden() {
        let config = GameConfig::default()
            .with_size(5)
            .with_suicide(SuicidePolicy::Forbid);
        let mut game = Game::new(config).unwrap();
        game.apply_move((1, 0)).unwrap(); // B
        game.pass_turn().unwrap(); // W
        game.apply_move((0, 1)).unwrap(); // B
        let err = game.apply_move((0, 0)).unwrap_err(); // W into the corner
        assert_eq!(
            err,
            GameError::InvalidMove(InvalidMove::Suicide { col: 0, row: 0 })
        );
        assert!(game.board().is_empty((0, 0)));
        assert_eq!(game.to_move(), Some(Color::White));
    }

    #[test]
    fn test_suicide_permitted_by_default() {
        let mut game = small_game();
        game.apply_move((1, 0)).unwrap();
        game.pass_turn().unwrap();
        game.apply_move((0, 1)).unwrap();
        let report = game.apply_move((0, 0)).unwrap();
        assert_eq!(report.status, MoveStatus::Continue(Color::Black));
        assert_eq!(game.board().color_at((0, 0)), Some(Color::White));
        assert_eq!(game.prisoners().get(Color::Black), 0);
    }

    #[test]
    fn test_new_game_resets() {
        let mut game = small_game();
        game.apply_move((0, 0)).unwrap();
        game.new_game();
        assert!(game.board().is_empty((0, 0)));
        assert_eq!(game.to_move(), Some(Color::Black));
        assert_eq!(game.move_number(), 0);
    }

    #[test]
    fn test_resize() {
        let mut game = small_game();
        game.resize(9).unwrap();
        assert_eq!(game.board().size(), 9);
        assert!(game.resize(0).is_err());
        assert_eq!(game.board().size(), 9);
    }
}
