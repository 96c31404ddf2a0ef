//! mz-core: procedural maze and dungeon layout generation
//!
//! Builds fully connected corridor/wall grids with per-axis wraparound,
//! mirror symmetry, loops, thick halls and rooms. Generation is a pure
//! function of a [`MazeConfig`] and its seed; this crate does no I/O.

pub mod config;
pub mod error;
pub mod maze;
mod rng;

pub use config::{AxisConfig, MazeConfig, DEFAULT_SIZE};
pub use error::MazeError;
pub use maze::{generate, generate_with_rng, render, CellState, DeadEnd, Grid, Maze};
pub use rng::MazeRng;
