//! Border stitching
//!
//! Finishes the edges of each axis according to its `(loops, border,
//! symmetric)` combination:
//!
//! | loops | border | symmetric | edit                                         |
//! |-------|--------|-----------|----------------------------------------------|
//! | yes   | 0      | no        | none, the torus wraps                        |
//! | yes   | 0      | yes       | open passages through the mirror seam        |
//! | yes   | > 0    | no        | copy the first line past the last one        |
//! | yes   | > 0    | yes       | punch mirrored passages through the border   |
//! | no    | any    | any       | none, the lattice boundary is the border     |
//!
//! Carving never crosses the seam of a symmetric torus, since both sides are
//! mirror images carved together. Any opening there closes a loop, so the
//! seam stays shut in a perfect maze and gets at least one passage otherwise.
//!
//! Any bordered axis with `border > 1` then gets its outermost line repeated
//! until the frame is `border` lines thick.

use tracing::debug;

use crate::config::MazeConfig;
use crate::rng::MazeRng;

use super::DeadEnd;
use super::cell::CellState;
use super::grid::{Axis, Grid};

/// Chance of punching a passage at an eligible border point
///
/// Looser, twistier mazes get more openings.
pub fn perforation_probability(straightness: f64, imperfection: f64) -> f64 {
    (0.1 + 0.4 * imperfection + 0.3 * (1.0 - straightness)).clamp(0.0, 0.8)
}

/// Apply the border edits for both axes; returns the number of passages
/// punched
pub fn stitch(
    grid: &mut Grid,
    dead_ends: &mut Vec<DeadEnd>,
    config: &MazeConfig,
    rng: &mut MazeRng,
) -> usize {
    for axis in Axis::ALL {
        let topology = config.axis(axis);
        if topology.wraps() && topology.border > 0 {
            close_seam(grid, dead_ends, axis);
        }
    }

    let p = perforation_probability(config.straightness, config.imperfection);
    let mut punched = 0;
    for axis in Axis::ALL {
        let topology = config.axis(axis);
        if topology.perforated() {
            punched += perforate(grid, axis, p, rng);
        } else if topology.wraps() && topology.symmetric && config.imperfection > 0.0 {
            punched += open_seam(grid, axis, p, rng);
        }
    }

    for axis in Axis::ALL {
        let topology = config.axis(axis);
        let extra = topology.border.saturating_sub(1) as usize;
        if topology.bordered() && extra > 0 {
            grid.grow_border(axis, extra);
            shift_dead_ends(dead_ends, axis, extra as isize, grid.frame(axis).len);
        }
    }

    debug!(
        punched,
        width = grid.width(),
        height = grid.height(),
        dead_ends = dead_ends.len(),
        "stitched borders"
    );
    punched
}

/// Copy line 0 past the far end so a wrapped axis shows a closed seam
fn close_seam(grid: &mut Grid, dead_ends: &mut Vec<DeadEnd>, axis: Axis) {
    grid.duplicate_leading_edge(axis);
    let last = grid.frame(axis).len - 1;
    let copies: Vec<DeadEnd> = dead_ends
        .iter()
        .filter(|de| de.along(axis) == 0)
        .map(|de| de.moved(axis, last))
        .collect();
    dead_ends.extend(copies);
}

/// Whether line 0 of `axis` is open at line `j` of the other axis
fn is_open(grid: &Grid, axis: Axis, j: usize) -> bool {
    let (x, y) = axis.point(0, j);
    grid.get(x, y) == CellState::Empty
}

/// Hall lines where line 0 of `axis` can be opened
///
/// The corridor must reach line 1, and a point next to an existing opening
/// is skipped so openings never merge.
fn eligible(grid: &Grid, axis: Axis, j: usize) -> bool {
    let across = grid.frame(axis.other());
    let (ix, iy) = axis.point(1, j);
    let crowded = [-2, 2].iter().any(|&d| {
        across
            .wrap(j as isize + d)
            .is_some_and(|k| is_open(grid, axis, k))
    });
    across.is_hall_line(j)
        && grid.get(ix, iy) == CellState::Empty
        && !is_open(grid, axis, j)
        && !crowded
}

/// Open line 0 of `axis` at `j` and all its mirror images, unless that
/// would leave a wall post standing alone in open space
fn try_open(grid: &mut Grid, axis: Axis, j: usize) -> bool {
    let (bx, by) = axis.point(0, j);
    grid.set(bx as isize, by as isize, CellState::Empty);
    let isolates = grid.orbit(bx, by).into_iter().any(|(ox, oy)| {
        grid.neighbors(ox, oy)
            .into_iter()
            .any(|(nx, ny)| grid.is_island(nx, ny))
    });
    if isolates {
        grid.set(bx as isize, by as isize, CellState::Solid);
    }
    !isolates
}

/// Punch mirrored openings through both ends of `axis`
fn perforate(grid: &mut Grid, axis: Axis, p: f64, rng: &mut MazeRng) -> usize {
    if grid.frame(axis).len < 3 {
        return 0;
    }
    let mut punched = 0;
    for j in 0..grid.frame(axis.other()).len {
        if eligible(grid, axis, j) && rng.chance(p) && try_open(grid, axis, j) {
            punched += 1;
        }
    }
    punched
}

/// Open passages through the mirror seam on line 0 of a symmetric torus
///
/// Each seam wall separates a hall from its own mirror image. Works like
/// [`perforate`], then opens one eligible wall at random if the seam is
/// still shut.
fn open_seam(grid: &mut Grid, axis: Axis, p: f64, rng: &mut MazeRng) -> usize {
    let len = grid.frame(axis).len;
    if len < 3 {
        return 0;
    }
    let mut punched = perforate(grid, axis, p, rng);

    let lines = grid.frame(axis.other()).len;
    if (0..lines).any(|j| is_open(grid, axis, j)) {
        return punched;
    }
    let mut seam_walls: Vec<usize> = (0..lines)
        .filter(|&j| {
            grid.are_mirrors(axis.point(1, j), axis.point(len - 1, j)) && eligible(grid, axis, j)
        })
        .collect();
    rng.shuffle(&mut seam_walls);
    if seam_walls.into_iter().any(|j| try_open(grid, axis, j)) {
        punched += 1;
    }
    punched
}

/// Move dead ends by `delta` along `axis`, dropping any that leave `0..len`
pub fn shift_dead_ends(dead_ends: &mut Vec<DeadEnd>, axis: Axis, delta: isize, len: usize) {
    dead_ends.retain_mut(|de| {
        let moved = de.along(axis) as isize + delta;
        if moved < 0 || moved as usize >= len {
            return false;
        }
        *de = de.moved(axis, moved as usize);
        true
    });
}
