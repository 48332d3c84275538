//! Maze-subsystem error type.

use thiserror::Error;

/// Errors produced by `am-maze`.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("grid must be at least 1x1, got {height}x{width}")]
    EmptyGrid { height: usize, width: usize },
}

pub type MazeResult<T> = Result<T, MazeError>;
