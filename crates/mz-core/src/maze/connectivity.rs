//! Reachability over empty cells
//!
//! Flood fills follow the grid's own topology, so passages that cross a
//! wrapped edge count as connections.

use std::collections::VecDeque;

use super::grid::Grid;

/// Mark every empty cell 4-connected to `start`
///
/// Returns an all-false mask when `start` is not empty.
pub fn flood_fill(grid: &Grid, start: (usize, usize)) -> Vec<Vec<bool>> {
    let mut seen = vec![vec![false; grid.height()]; grid.width()];
    if grid.get(start.0, start.1).is_passable() {
        fill_region(grid, start, &mut seen);
    }
    seen
}

/// Number of separate regions of empty cells
///
/// One mask is shared by all regions, so each cell is visited once.
pub fn empty_components(grid: &Grid) -> usize {
    let mut seen = vec![vec![false; grid.height()]; grid.width()];
    let mut components = 0;
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if !seen[x][y] && grid.get(x, y).is_passable() {
                components += 1;
                fill_region(grid, (x, y), &mut seen);
            }
        }
    }
    components
}

/// BFS from `start`, marking reached cells in `seen`
fn fill_region(grid: &Grid, start: (usize, usize), seen: &mut [Vec<bool>]) {
    let mut queue = VecDeque::from([start]);
    seen[start.0][start.1] = true;
    while let Some((x, y)) = queue.pop_front() {
        for (nx, ny) in grid.neighbors(x, y) {
            if !seen[nx][ny] && grid.get(nx, ny).is_passable() {
                seen[nx][ny] = true;
                queue.push_back((nx, ny));
            }
        }
    }
}

/// Whether all empty cells form a single region (vacuously true when there
/// are none)
pub fn is_connected(grid: &Grid) -> bool {
    empty_components(grid) <= 1
}
