//! Imperfection pass
//!
//! Knocks extra walls out of a perfect maze to create loops, then puts back
//! one wall around any solid cell left floating in open space. Walls on a
//! wrapped mirror seam are fair game: such a wall is its own mirror image.

use tracing::debug;

use crate::rng::MazeRng;

use super::cell::CellState;
use super::connectivity::empty_components;
use super::grid::{Axis, AxisFrame, Direction, Grid};

/// Outcome of a loosening pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoosenStats {
    /// Walls cleared
    pub removed: usize,
    /// Islands closed off again
    pub repaired: usize,
}

/// Number of removal attempts for an imperfection level
pub fn removal_target(imperfection: f64, width: usize, height: usize) -> usize {
    (imperfection * (width * height) as f64 / 3.0).ceil() as usize
}

/// `(count, first)` of the removable wall lines along an axis
///
/// A bounded axis keeps its boundary lines.
fn interior_walls(frame: &AxisFrame) -> (usize, usize) {
    if frame.wraps {
        (frame.len / 2, 0)
    } else {
        (frame.len.saturating_sub(3) / 2, 2)
    }
}

/// Loosen the maze: remove walls, then repair islands
pub fn loosen(grid: &mut Grid, imperfection: f64, rng: &mut MazeRng) -> LoosenStats {
    let target = removal_target(imperfection, grid.width(), grid.height());
    let mut stats = LoosenStats::default();
    if target > 0 {
        // Horizontal walls separate cells stacked vertically
        stats.removed += remove_walls(grid, target.div_ceil(2), Axis::Vertical, rng);
        stats.removed += remove_walls(grid, target / 2, Axis::Horizontal, rng);
        stats.repaired = repair_islands(grid, rng);
    }
    debug!(target, removed = stats.removed, repaired = stats.repaired, "loosened maze");
    stats
}

/// Try `attempts` random removals of walls separating two cells along
/// `across`; returns the number of walls cleared
fn remove_walls(grid: &mut Grid, attempts: usize, across: Axis, rng: &mut MazeRng) -> usize {
    let (walls, first) = interior_walls(grid.frame(across));
    let halls = grid.frame(across.other()).len / 2;
    if walls == 0 || halls == 0 {
        return 0;
    }
    let mut removed = 0;
    for _ in 0..attempts {
        let wall_line = first + 2 * rng.below(walls);
        let hall_line = 2 * rng.below(halls) + 1;
        let (x, y) = across.point(wall_line, hall_line);
        if grid.get(x, y) != CellState::Solid {
            continue;
        }

        let touches_corridor = grid
            .neighbors(x, y)
            .into_iter()
            .any(|(nx, ny)| grid.get(nx, ny) == CellState::Empty);
        if touches_corridor {
            grid.set(x as isize, y as isize, CellState::Empty);
            removed += 1;
        }
    }
    removed
}

/// Restore one wall next to every solid cell whose four neighbors are all
/// empty; returns the number of islands repaired
pub fn repair_islands(grid: &mut Grid, rng: &mut MazeRng) -> usize {
    let mut repaired = 0;
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if grid.is_island(x, y) && restore_wall(grid, x, y, rng) {
                repaired += 1;
            }
        }
    }
    repaired
}

/// Walls around the post at `(x, y)` that can close without cutting a path
///
/// A wall with a solid cell on either side is a stub and always safe. A wall
/// joining two open cells is only safe when the whole ring around the post
/// is open, since the ring is then the detour.
fn restorable_walls(grid: &Grid, x: usize, y: usize) -> Vec<(usize, usize)> {
    let walls: Vec<((usize, usize), bool)> = Direction::ALL
        .iter()
        .filter_map(|&dir| {
            let (wx, wy) = grid.step(x, y, dir, 1)?;
            let joins = dir.perpendicular().iter().all(|&side| {
                grid.step(wx, wy, side, 1)
                    .is_some_and(|(hx, hy)| grid.get(hx, hy) == CellState::Empty)
            });
            Some(((wx, wy), joins))
        })
        .collect();
    let ring_open = walls.iter().all(|&(_, joins)| joins);
    walls
        .into_iter()
        .filter(|&(_, joins)| ring_open || !joins)
        .map(|(wall, _)| wall)
        .collect()
}

/// Close one wall of the island at `(x, y)`; returns false if none could
/// close without splitting the maze
fn restore_wall(grid: &mut Grid, x: usize, y: usize, rng: &mut MazeRng) -> bool {
    let neighbors = grid.neighbors(x, y);
    let mut candidates = restorable_walls(grid, x, y);

    // A wall whose mirror images land away from this island closes one side
    // only, which the local check above covers
    let single: Vec<(usize, usize)> = candidates
        .iter()
        .copied()
        .filter(|&(wx, wy)| {
            grid.orbit(wx, wy)
                .iter()
                .filter(|&p| neighbors.contains(p))
                .count()
                == 1
        })
        .collect();
    if let Some(&(wx, wy)) = rng.choose(&single) {
        grid.set(wx as isize, wy as isize, CellState::Solid);
        return true;
    }

    // Post fixed by both mirrors: every wall closes together with its image
    // on the same ring, so check the maze as a whole
    let regions = empty_components(grid);
    rng.shuffle(&mut candidates);
    for (wx, wy) in candidates {
        grid.set(wx as isize, wy as isize, CellState::Solid);
        if empty_components(grid) <= regions {
            return true;
        }
        grid.set(wx as isize, wy as isize, CellState::Empty);
    }
    debug!(x, y, "island left open, every wall would split the maze");
    false
}
