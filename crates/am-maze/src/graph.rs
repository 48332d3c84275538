//! The logical grid graph that mazes are carved from.
//!
//! # Layout
//!
//! Nodes are the `height × width` logical rooms, indexed row-major:
//!
//! ```text
//! NodeId(i * width + j)  ⇔  room (i, j)
//! ```
//!
//! Edges are listed in a fixed order: every horizontal edge (row by row,
//! left to right), then every vertical edge (row by row).  Each edge is
//! stored once with the lower-index endpoint first.  The graph is only
//! needed while a spanning tree is being computed.

use am_core::NodeId;

use crate::{MazeError, MazeResult};

/// An undirected edge between two adjacent logical rooms, `(from, to)` with
/// `from < to`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridEdge {
    pub from: NodeId,
    pub to:   NodeId,
}

impl GridEdge {
    #[inline]
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }
}

/// Node and edge universe for a 4-connected `height × width` grid.
#[derive(Clone, Debug)]
pub struct GridGraph {
    pub height: usize,
    pub width:  usize,
    /// `(row, col)` of each node, indexed by `NodeId`.
    pub nodes:  Vec<(usize, usize)>,
    pub edges:  Vec<GridEdge>,
}

impl GridGraph {
    /// Build the grid graph.  Both dimensions must be at least 1.
    pub fn new(height: usize, width: usize) -> MazeResult<Self> {
        if height == 0 || width == 0 {
            return Err(MazeError::EmptyGrid { height, width });
        }

        let mut nodes = Vec::with_capacity(height * width);
        for i in 0..height {
            for j in 0..width {
                nodes.push((i, j));
            }
        }

        let edge_count = height * (width - 1) + (height - 1) * width;
        let mut edges = Vec::with_capacity(edge_count);
        for row in 0..height {
            for col in 1..width {
                edges.push(GridEdge::new(
                    node_id(row * width + (col - 1)),
                    node_id(row * width + col),
                ));
            }
        }
        for row in 1..height {
            for col in 0..width {
                edges.push(GridEdge::new(
                    node_id((row - 1) * width + col),
                    node_id(row * width + col),
                ));
            }
        }
        debug_assert_eq!(edges.len(), edge_count);

        Ok(Self { height, width, nodes, edges })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Logical `(row, col)` of `node`.
    #[inline]
    pub fn coords(&self, node: NodeId) -> (usize, usize) {
        self.nodes[node.index()]
    }
}

#[inline]
fn node_id(index: usize) -> NodeId {
    NodeId(index as u32)
}
