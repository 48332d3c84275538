use am_core::Pos;
use am_maze::MazeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("cannot spawn at {pos}: not an open cell")]
    SpawnOnWall { pos: Pos },

    #[error("maze is {got_h}x{got_w} but config asks for {expected_h}x{expected_w}")]
    DimensionMismatch {
        expected_h: usize,
        expected_w: usize,
        got_h:      usize,
        got_w:      usize,
    },

    #[error("maze error: {0}")]
    Maze(#[from] MazeError),
}

pub type SimResult<T> = Result<T, SimError>;
