//! Randomized backtracking carver
//!
//! Depth-first walk over the hall lattice driven by an explicit stack, so
//! large grids never recurse. Each carved hall also opens the wall back
//! toward the hall that discovered it, which yields a spanning tree of the
//! carved halls when no mirror is active.

use tracing::debug;

use crate::rng::MazeRng;

use super::DeadEnd;
use super::cell::CellState;
use super::grid::{Direction, Grid};

/// Pending visit on the carve stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: usize,
    y: usize,
    /// Direction travelled to reach this cell, `None` for the origin
    arrival: Option<Direction>,
}

/// Hall line nearest the middle of an axis of length `len`
pub fn lattice_center(len: usize) -> usize {
    let c = len / 2;
    if c % 2 == 1 { c } else { c.saturating_sub(1) }
}

/// Whether the carver may enter a cell
fn is_unexplored(state: CellState, ignore_reservations: bool) -> bool {
    match state {
        CellState::Solid => true,
        CellState::Reserved => ignore_reservations,
        CellState::Empty => false,
    }
}

/// Carve a perfect maze into `grid`, returning the dead ends in discovery
/// order (the origin first)
///
/// Leftover reservations are turned back into walls before returning.
pub fn carve(grid: &mut Grid, straightness: f64, rng: &mut MazeRng) -> Vec<DeadEnd> {
    if grid.width() == 0 || grid.height() == 0 {
        return Vec::new();
    }

    let origin = (lattice_center(grid.width()), lattice_center(grid.height()));
    let mut dead_ends = vec![DeadEnd::new(origin.0, origin.1)];
    let mut budget = grid.width().max(grid.height());
    let mut directions = Direction::ALL;
    let mut stack = Vec::with_capacity(grid.width() * grid.height() / 4);
    stack.push(Frame {
        x: origin.0,
        y: origin.1,
        arrival: None,
    });

    let mut carved = 0usize;
    while let Some(frame) = stack.pop() {
        if !is_unexplored(grid.get(frame.x, frame.y), budget > 0) {
            continue;
        }

        let (x, y) = (frame.x as isize, frame.y as isize);
        grid.set(x, y, CellState::Empty);
        if let Some(dir) = frame.arrival {
            let (dx, dy) = dir.delta();
            grid.set(x - dx, y - dy, CellState::Empty);
        }
        budget = budget.saturating_sub(1);
        carved += 1;

        rng.shuffle(&mut directions);
        if let Some(arrival) = frame.arrival {
            // Pushed last, popped first
            if rng.chance(straightness) {
                if let Some(pos) = directions.iter().position(|&d| d == arrival) {
                    directions[pos..].rotate_left(1);
                }
            }
        }

        let mut pushed = 0;
        for dir in directions {
            let Some((nx, ny)) = grid.step(frame.x, frame.y, dir, 2) else {
                continue;
            };
            if is_unexplored(grid.get(nx, ny), budget > 0) {
                stack.push(Frame {
                    x: nx,
                    y: ny,
                    arrival: Some(dir),
                });
                pushed += 1;
            }
        }

        if pushed == 0 && (frame.x, frame.y) != origin {
            dead_ends.push(DeadEnd::new(frame.x, frame.y));
        }
    }

    let restored = grid.replace_all(CellState::Reserved, CellState::Solid);
    debug!(carved, dead_ends = dead_ends.len(), restored, "carved maze");
    dead_ends
}
