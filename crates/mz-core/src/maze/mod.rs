//! Maze generation
//!
//! Grid, cell states and the generation phases. Each phase takes the grid by
//! `&mut` and leaves it valid input for the next one:
//!
//! 1. [`allocate`] sizes a solid grid to the lattice parity rules
//! 2. [`reserve`] scatters soft walls
//! 3. [`carve`] runs the backtracking carver and records dead ends
//! 4. [`loosen`] opens loops and repairs islands
//! 5. [`stitch`] finishes the borders
//! 6. [`thicken`] expands lines to hall and wall bands
//! 7. [`carve_rooms`] opens rooms at the outer dead ends
//!
//! [`generate`] runs them all in order.

mod allocate;
mod carve;
mod cell;
mod connectivity;
mod grid;
mod loosen;
mod pipeline;
mod render;
mod reserve;
mod rooms;
mod stitch;
mod thicken;

use serde::{Deserialize, Serialize};

pub use allocate::{
    adjust_dimension, adjust_dimensions, allocate, is_valid_dimension, map_dimension, MAX_DIMENSION,
    MAX_MAP_DIMENSION,
};
pub use carve::{carve, lattice_center};
pub use cell::CellState;
pub use connectivity::{empty_components, flood_fill, is_connected};
pub use grid::{Axis, AxisFrame, Direction, Grid, Mirror};
pub use loosen::{loosen, removal_target, repair_islands, LoosenStats};
pub use pipeline::{generate, generate_with_rng};
pub use render::render;
pub use reserve::{reservation_probability, reserve};
pub use rooms::{carve_rooms, room_half_width, ROOM_SCALE};
pub use stitch::{perforation_probability, shift_dead_ends, stitch};
pub use thicken::thicken;

/// A carved cell that had nowhere left to go when the carver reached it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeadEnd {
    pub x: usize,
    pub y: usize,
}

impl DeadEnd {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Coordinate along `axis`
    pub const fn along(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Same dead end with its `axis` coordinate replaced
    pub const fn moved(&self, axis: Axis, to: usize) -> Self {
        match axis {
            Axis::Horizontal => Self::new(to, self.y),
            Axis::Vertical => Self::new(self.x, to),
        }
    }
}

/// A finished maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub grid: Grid,
    /// Dead ends in discovery order, in final grid coordinates
    pub dead_ends: Vec<DeadEnd>,
}

impl Maze {
    /// Text rendering of the grid
    pub fn render(&self) -> String {
        render(&self.grid)
    }
}
