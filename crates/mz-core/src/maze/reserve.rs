//! Region reservation
//!
//! Scatters soft walls over the hall lattice before carving. The carver may
//! still pass through them while its ignore-reservation budget lasts, so
//! they thin out the maze without cutting it apart.

use tracing::debug;

use crate::rng::MazeRng;

use super::cell::CellState;
use super::grid::{Axis, Grid};

/// Probability that a hall cell is reserved for a given fill density
pub fn reservation_probability(fill: f64) -> f64 {
    (1.0 - (fill * 0.9 + 0.1)).clamp(0.0, 1.0).powf(1.6)
}

/// Mark hall cells `Reserved` at random; returns how many orbits were marked
pub fn reserve(grid: &mut Grid, fill: f64, rng: &mut MazeRng) -> usize {
    let p = reservation_probability(fill);
    if p <= 0.0 {
        return 0;
    }

    let columns = *grid.frame(Axis::Horizontal);
    let rows = *grid.frame(Axis::Vertical);
    let mut reserved = 0;
    for x in (0..grid.width()).filter(|&x| columns.is_hall_line(x)) {
        for y in (0..grid.height()).filter(|&y| rows.is_hall_line(y)) {
            if !grid.is_canonical(x, y) {
                continue;
            }
            if rng.chance(p) {
                grid.set(x as isize, y as isize, CellState::Reserved);
                reserved += 1;
            }
        }
    }

    debug!(reserved, probability = p, "reserved hall cells");
    reserved
}
