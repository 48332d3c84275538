//! Maze coordinates and single-cell moves.
//!
//! `Pos` addresses a cell of the materialized maze (`row ∈ [0, 2H]`,
//! `col ∈ [0, 2W]`).  `Move` is a signed one-cell delta; the five legal
//! moves are listed in [`Move::ALL`] in the fixed candidate order used by
//! direction choice.

use std::fmt;

/// A cell position in the materialized maze.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Apply `m` and return the landing cell if it lies inside a
    /// `rows × cols` rectangle.
    #[inline]
    pub fn offset(self, m: Move, rows: usize, cols: usize) -> Option<Pos> {
        let row = self.row as i64 + m.dr as i64;
        let col = self.col as i64 + m.dc as i64;
        if row < 0 || col < 0 || row >= rows as i64 || col >= cols as i64 {
            return None;
        }
        Some(Pos::new(row as usize, col as usize))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A one-step displacement `(dr, dc)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub dr: i32,
    pub dc: i32,
}

impl Move {
    pub const UP:    Move = Move { dr: -1, dc:  0 };
    pub const DOWN:  Move = Move { dr:  1, dc:  0 };
    pub const LEFT:  Move = Move { dr:  0, dc: -1 };
    pub const RIGHT: Move = Move { dr:  0, dc:  1 };
    pub const STAY:  Move = Move { dr:  0, dc:  0 };

    /// Candidate moves in evaluation order.
    pub const ALL: [Move; 5] = [Move::UP, Move::DOWN, Move::LEFT, Move::RIGHT, Move::STAY];

    /// The four real directions, in the same order as [`Move::ALL`].
    pub const DIRECTIONS: [Move; 4] = [Move::UP, Move::DOWN, Move::LEFT, Move::RIGHT];

    /// A "last step" whose reverse is never a legal move.  Passing it to
    /// direction choice disables backtrack suppression.
    pub const UNREACHABLE: Move = Move { dr: -2, dc: -2 };

    #[inline]
    pub const fn new(dr: i32, dc: i32) -> Self {
        Self { dr, dc }
    }

    #[inline]
    pub fn reversed(self) -> Move {
        Move { dr: -self.dr, dc: -self.dc }
    }

    #[inline]
    pub fn is_stay(self) -> bool {
        self == Move::STAY
    }

    /// `true` if `self` exactly undoes a real (non-stay) step `last`.
    #[inline]
    pub fn is_reverse_of(self, last: Move) -> bool {
        !last.is_stay() && self == last.reversed()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.dr, self.dc)
    }
}
