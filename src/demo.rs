//! Random self-play: both colors pick uniformly among valid moves until one
//! of them captures or the move cap runs out.

use tracing::debug;

use crate::board::Point;
use crate::game::{Game, MoveStatus};
use crate::rules::is_valid_move;

/// Summary of a finished random game.
#[derive(Debug)]
pub struct DemoResult {
    pub moves: usize,
    pub finished: bool,
}

fn random_move(game: &Game, rng: &mut fastrand::Rng) -> Option<Point> {
    let board = game.board();
    let candidates: Vec<Point> = board
        .points()
        .filter(|&p| is_valid_move(board, p))
        .collect();
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.usize(..candidates.len())])
}

/// Play random moves on `game` until it is over, the board fills up, or
/// `max_moves` have been played.
pub fn play_random_game(
    game: &mut Game,
    rng: &mut fastrand::Rng,
    max_moves: usize,
) -> DemoResult {
    let mut moves = 0;
    while moves < max_moves && !game.is_over() {
        let result = match random_move(game, rng) {
            Some(p) => game.apply_move(p).map(|report| report.status),
            None => break,
        };
        moves += 1;
        match result {
            Ok(MoveStatus::Winner(winner)) => {
                debug!(%winner, moves, "random game decided");
            }
            Ok(MoveStatus::Continue(_)) => {}
            // Forbidden suicide; let the other side move instead.
            Err(_) => {
                if game.pass_turn().is_err() {
                    break;
                }
            }
        }
    }
    DemoResult {
        moves,
        finished: game.is_over(),
    }
}
