//! `am-maze` — grid graph, union-find, and random spanning-tree mazes.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`graph`]      | `GridGraph` — 4-connected logical H×W node/edge universe  |
//! | [`union_find`] | `UnionFind` — path-compressed disjoint sets               |
//! | [`generator`]  | `random_spanning_tree`, `shuffle_edges`, `MazeGenerator`  |
//! | [`maze`]       | `Maze` — materialized (2H+1)×(2W+1) wall layout           |
//! | [`error`]      | `MazeError`, `MazeResult<T>`                              |
//!
//! # Pipeline
//!
//! ```text
//! GridGraph::new(h, w) ──► shuffle edges ──► keep edge iff union() merges
//!                                               │
//!                                               ▼
//!                         Maze::from_spanning_tree (rooms + carved edges)
//! ```

pub mod error;
pub mod generator;
pub mod graph;
pub mod maze;
pub mod union_find;


pub use error::{MazeError, MazeResult};
pub use generator::{MazeGenerator, random_spanning_tree, shuffle_edges};
pub use graph::{GridEdge, GridGraph};
pub use maze::Maze;
pub use union_find::UnionFind;
