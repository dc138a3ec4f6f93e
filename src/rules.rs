//! Capture-Go rules: move validity, group discovery, liberties and captures.
//!
//! Everything here is a free function over a [`Board`]. Groups are found by
//! flood fill every time they are needed and never cached, so the results are
//! always consistent with the board they were computed from.

use tracing::{debug, trace};

use crate::board::{Board, Color, Point};
use crate::config::TieBreak;
use crate::error::InvalidMove;

/// A maximal set of same-colored stones connected through orthogonal
/// adjacency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    color: Color,
    stones: Vec<Point>,
}

impl Group {
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn stones(&self) -> &[Point] {
        &self.stones
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.stones.contains(&p)
    }
}

/// Stones each color has captured from the other.
///
/// Counters only ever grow during a game; a new game starts from zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Prisoners {
    black: u32,
    white: u32,
}

impl Prisoners {
    pub fn new(black: u32, white: u32) -> Self {
        Self { black, white }
    }

    /// Prisoners taken by `color`.
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub(crate) fn add(&mut self, color: Color, n: u32) {
        match color {
            Color::Black => self.black += n,
            Color::White => self.white += n,
        }
    }
}

/// Check that a stone may be placed at `p`: on the board and on an empty cell.
///
/// This variant has no ko rule; suicide is a controller policy, not checked here.
pub fn check_move(board: &Board, p: Point) -> Result<(), InvalidMove> {
    let (col, row) = p;
    if !board.contains(p) {
        return Err(InvalidMove::OutOfBounds {
            col,
            row,
            size: board.size(),
        });
    }
    if !board.is_empty(p) {
        return Err(InvalidMove::Occupied { col, row });
    }
    Ok(())
}

pub fn is_valid_move(board: &Board, p: Point) -> bool {
    check_move(board, p).is_ok()
}

/// Collect the group containing `start` into `out`, marking it in `visited`.
fn collect_group(board: &Board, start: Point, visited: &mut [bool], out: &mut Vec<Point>) {
    let size = board.size();
    let color = board.color_at(start);
    let mut stack = vec![start];

    while let Some(p) = stack.pop() {
        let i = p.1 * size + p.0;
        if visited[i] {
            continue;
        }
        visited[i] = true;
        out.push(p);
        for n in board.neighbors(p) {
            if !visited[n.1 * size + n.0] && board.color_at(n) == color {
                stack.push(n);
            }
        }
    }
}

/// Partition all stones of `color` into groups.
///
/// Every stone lands in exactly one group; isolated stones form singletons.
pub fn find_groups(board: &Board, color: Color) -> Vec<Group> {
    let mut visited = vec![false; board.size() * board.size()];
    let mut groups = Vec::new();

    for p in board.stones(color) {
        if visited[p.1 * board.size() + p.0] {
            continue;
        }
        let mut stones = Vec::new();
        collect_group(board, p, &mut visited, &mut stones);
        groups.push(Group { color, stones });
    }
    trace!(%color, groups = groups.len(), "found groups");
    groups
}

/// The group containing the stone at `p`, or `None` if `p` is empty.
pub fn group_at(board: &Board, p: Point) -> Option<Group> {
    let color = board.color_at(p)?;
    let mut visited = vec![false; board.size() * board.size()];
    let mut stones = Vec::new();
    collect_group(board, p, &mut visited, &mut stones);
    Some(Group { color, stones })
}

/// Count the distinct empty points adjacent to any stone of the group.
pub fn liberties(board: &Board, group: &Group) -> usize {
    let size = board.size();
    let mut liberty_visited = vec![false; size * size];
    let mut libs = 0;

    for &p in group.stones() {
        for n in board.neighbors(p) {
            let i = n.1 * size + n.0;
            if board.is_empty(n) && !liberty_visited[i] {
                liberty_visited[i] = true;
                libs += 1;
            }
        }
    }
    libs
}

/// True iff no stone of the group touches an empty on-board point.
pub fn has_no_liberties(board: &Board, group: &Group) -> bool {
    group
        .stones()
        .iter()
        .all(|&p| board.neighbors(p).all(|n| !board.is_empty(n)))
}

/// Remove every group of `color` that has no liberties and return the
/// removed points.
///
/// Liberties are judged on the board as it stands before this sweep removes
/// anything, so all dead groups are taken off together.
pub fn capture_stones(board: &mut Board, color: Color) -> Vec<Point> {
    let dead: Vec<Point> = find_groups(board, color)
        .into_iter()
        .filter(|g| has_no_liberties(board, g))
        .flat_map(|g| g.stones)
        .collect();

    for &p in &dead {
        board.remove(p);
    }
    if !dead.is_empty() {
        debug!(%color, captured = dead.len(), "captured stones");
    }
    dead
}

/// Like [`capture_stones`] but only reports how many stones were removed.
pub fn capture(board: &mut Board, color: Color) -> usize {
    capture_stones(board, color).len()
}

/// The color that has taken at least `winning_score` prisoners, if any.
///
/// When both have, `tie_break` decides.
pub fn check_winner(
    prisoners: &Prisoners,
    winning_score: u32,
    tie_break: TieBreak,
) -> Option<Color> {
    let favored = tie_break.favored();
    [favored, favored.opposite()]
        .into_iter()
        .find(|&c| prisoners.get(c) >= winning_score)
}
