//! Materialized maze: rooms and carved passages interleaved with walls.
//!
//! # Data layout
//!
//! A logical `H × W` grid becomes a `(2H+1) × (2W+1)` cell rectangle stored
//! row-major in a flat `Vec<bool>` of wall flags.  Room `(i, j)` sits at cell
//! `(2i+1, 2j+1)`; the cell between two adjacent rooms is open iff their
//! edge belongs to the spanning tree.  Everything else is wall.
//!
//! Wall flags are fixed once the maze is built.

use std::collections::VecDeque;
use std::fmt;

use am_core::{Move, Pos};

use crate::{GridEdge, GridGraph};

/// Wall layout of a perfect maze plus the spanning tree that carved it.
#[derive(Clone, Debug)]
pub struct Maze {
    height: usize,
    width:  usize,
    rows:   usize,
    cols:   usize,
    walls:  Vec<bool>,
    tree:   Vec<GridEdge>,
}

impl Maze {
    /// Carve `tree` (edges of `graph`) into a wall-filled rectangle.
    pub fn from_spanning_tree(graph: &GridGraph, tree: Vec<GridEdge>) -> Self {
        let rows = 2 * graph.height + 1;
        let cols = 2 * graph.width + 1;
        let mut walls = vec![true; rows * cols];

        for &(i, j) in &graph.nodes {
            walls[(2 * i + 1) * cols + (2 * j + 1)] = false;
        }
        for edge in &tree {
            let (ar, ac) = graph.coords(edge.from);
            let (br, bc) = graph.coords(edge.to);
            // Midpoint between the two room centers.
            let dr = 2 * ar + 1 + br - ar;
            let dc = 2 * ac + 1 + bc - ac;
            walls[dr * cols + dc] = false;
        }

        Self {
            height: graph.height,
            width: graph.width,
            rows,
            cols,
            walls,
            tree,
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Logical room rows (`H`).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Logical room columns (`W`).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell rows (`2H + 1`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Cell columns (`2W + 1`).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Spanning-tree edges in the order they were accepted.
    pub fn tree_edges(&self) -> &[GridEdge] {
        &self.tree
    }

    // ── Cell queries ──────────────────────────────────────────────────────

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// `true` for walls; positions outside the maze also count as walls.
    #[inline]
    pub fn is_wall(&self, pos: Pos) -> bool {
        !self.in_bounds(pos) || self.walls[pos.row * self.cols + pos.col]
    }

    #[inline]
    pub fn is_open(&self, pos: Pos) -> bool {
        !self.is_wall(pos)
    }

    /// Cell position of logical room `(i, j)`.
    #[inline]
    pub fn room_center(&self, i: usize, j: usize) -> Pos {
        Pos::new(2 * i + 1, 2 * j + 1)
    }

    /// All open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| Pos::new(r, c)))
            .filter(move |&p| self.is_open(p))
    }

    pub fn open_count(&self) -> usize {
        self.walls.iter().filter(|&&w| !w).count()
    }

    /// Open 4-neighbours of `pos`, in `Move::DIRECTIONS` order.
    pub fn open_neighbours(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        Move::DIRECTIONS
            .into_iter()
            .filter_map(move |m| pos.offset(m, self.rows, self.cols))
            .filter(move |&p| self.is_open(p))
    }

    // ── Structure checks ──────────────────────────────────────────────────

    /// Number of open cells reachable from `start` under 4-adjacency.
    pub fn reachable_from(&self, start: Pos) -> usize {
        if self.is_wall(start) {
            return 0;
        }
        let mut seen = vec![false; self.rows * self.cols];
        let mut queue = VecDeque::from([start]);
        seen[start.row * self.cols + start.col] = true;
        let mut count = 0;
        while let Some(p) = queue.pop_front() {
            count += 1;
            for n in self.open_neighbours(p) {
                let idx = n.row * self.cols + n.col;
                if !seen[idx] {
                    seen[idx] = true;
                    queue.push_back(n);
                }
            }
        }
        count
    }

    /// `true` if the open cells form a single tree under 4-adjacency:
    /// connected, and with exactly one fewer adjacency than open cells.
    pub fn is_perfect(&self) -> bool {
        let open = self.open_count();
        if self.reachable_from(self.room_center(0, 0)) != open {
            return false;
        }
        // Count each adjacency once by looking only down and right.
        let adjacencies: usize = self
            .open_cells()
            .map(|p| {
                [Move::DOWN, Move::RIGHT]
                    .into_iter()
                    .filter_map(|m| p.offset(m, self.rows, self.cols))
                    .filter(|&n| self.is_open(n))
                    .count()
            })
            .sum();
        adjacencies + 1 == open
    }
}

impl fmt::Display for Maze {
    /// `#` for walls, space for open cells, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let ch = if self.is_wall(Pos::new(r, c)) { '#' } else { ' ' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
