//! Board state: a square grid of intersections, each empty or holding a stone.
//!
//! Points are `(col, row)` pairs, 0-indexed, with row 0 at the top edge.
//! The board stores cells in a flat vector indexed by `row * size + col` and
//! knows nothing about the rules; validation lives in [`crate::rules`].

use std::fmt;

use crate::constants::{EMPTY, MAX_VERTEX_SIZE, STONE_BLACK, STONE_WHITE};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Parse a color as written in text commands (`b`, `black`, `w`, `white`).
    pub fn parse(s: &str) -> Option<Color> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Some(Color::Black),
            "w" | "white" => Some(Color::White),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Color::Black => STONE_BLACK,
            Color::White => STONE_WHITE,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// An intersection as `(col, row)`.
pub type Point = (usize, usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `(col, row)` lies on the grid.
    pub fn contains(&self, (col, row): Point) -> bool {
        col < self.size && row < self.size
    }

    fn idx(&self, p: Point) -> usize {
        assert!(
            self.contains(p),
            "point {p:?} is off a {size}x{size} board",
            size = self.size
        );
        p.1 * self.size + p.0
    }

    /// True iff the cell holds no stone.
    ///
    /// # Panics
    /// If `p` is off the board. Callers bounds-check first.
    pub fn is_empty(&self, p: Point) -> bool {
        self.cells[self.idx(p)].is_none()
    }

    /// The stone at `p`, or `None` for an empty cell.
    ///
    /// # Panics
    /// If `p` is off the board.
    pub fn color_at(&self, p: Point) -> Option<Color> {
        self.cells[self.idx(p)]
    }

    /// Put a stone on `p`. Does not check that the cell was empty.
    pub fn place(&mut self, p: Point, color: Color) {
        let i = self.idx(p);
        self.cells[i] = Some(color);
    }

    pub fn remove(&mut self, p: Point) {
        let i = self.idx(p);
        self.cells[i] = None;
    }

    /// In-bounds orthogonal neighbors of `p`.
    pub fn neighbors(&self, (x, y): Point) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        let mut v = Vec::with_capacity(4);
        if x > 0 {
            v.push((x - 1, y));
        }
        if x + 1 < s {
            v.push((x + 1, y));
        }
        if y > 0 {
            v.push((x, y - 1));
        }
        if y + 1 < s {
            v.push((x, y + 1));
        }
        v.into_iter()
    }

    /// Every point of the grid, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        (0..s).flat_map(move |row| (0..s).map(move |col| (col, row)))
    }

    /// Points currently holding `color`.
    pub fn stones(&self, color: Color) -> impl Iterator<Item = Point> + '_ {
        self.points()
            .filter(move |&p| self.cells[p.1 * self.size + p.0] == Some(color))
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    /// Render with column and row labels around the grid.
    ///
    /// Columns are lettered like vertices up to [`MAX_VERTEX_SIZE`] and
    /// numbered from 1 on larger boards.
    pub fn render_labelled(&self) -> String {
        let lettered = self.size <= MAX_VERTEX_SIZE;
        let width = if lettered { 1 } else { self.size.to_string().len() };
        let margin = self.size.to_string().len().max(2);

        let header = (0..self.size)
            .map(|col| {
                let label = if lettered {
                    column_letter(col).to_string()
                } else {
                    (col + 1).to_string()
                };
                format!("{label:>width$}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        let header = format!("{:margin$} {header}", "");

        let mut out = format!("{header}\n");
        for row in 0..self.size {
            let label = self.size - row;
            let line = (0..self.size)
                .map(|col| format!("{:>width$}", glyph(self.color_at((col, row)))))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&format!("{label:>margin$} {line} {label}\n"));
        }
        out.push_str(&header);
        out
    }
}

fn glyph(cell: Option<Color>) -> char {
    cell.map_or(EMPTY, Color::glyph)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                write!(f, "{} ", glyph(self.color_at((x, y))))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Column letter for vertex notation, skipping 'I'.
///
/// Only defined for `col < MAX_VERTEX_SIZE`.
fn column_letter(col: usize) -> char {
    debug_assert!(col < MAX_VERTEX_SIZE);
    let mut c = b'A' + col as u8;
    if c >= b'I' {
        c += 1;
    }
    c as char
}

/// Parse a vertex such as `D4` into a point on a board of `size`.
///
/// Columns use letters A-Z without I; row 1 is the bottom edge.
/// Returns `None` for malformed or off-board vertices.
pub fn parse_vertex(s: &str, size: usize) -> Option<Point> {
    let s = s.trim();
    let mut chars = s.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() || letter == 'I' {
        return None;
    }
    let mut col = (letter as u8 - b'A') as usize;
    if letter > 'I' {
        col -= 1;
    }
    let number: usize = chars.as_str().parse().ok()?;
    if col >= size || number == 0 || number > size {
        return None;
    }
    Some((col, size - number))
}

/// Format a point as a vertex string (e.g. `D4`).
///
/// Vertices exist on boards up to [`MAX_VERTEX_SIZE`].
pub fn vertex_str((col, row): Point, size: usize) -> String {
    format!("{}{}", column_letter(col), size - row)
}
