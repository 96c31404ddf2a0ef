//! Rooms at dead ends
//!
//! Clears square rooms around the outermost dead ends. Rooms are written
//! without mirroring and symmetry is restored in one pass afterwards.

use tracing::debug;

use super::DeadEnd;
use super::cell::CellState;
use super::grid::{Axis, AxisFrame, Grid};

/// Room size relative to one hall plus one wall
pub const ROOM_SCALE: f64 = 0.5;

/// Half-width of every room for the given room fraction and band widths
///
/// Fewer rooms means bigger rooms, down to a fraction of 0.4.
pub fn room_half_width(rooms: f64, hall_width: u32, wall_width: u32) -> usize {
    (ROOM_SCALE * f64::from(hall_width + wall_width) / rooms.max(0.4)).ceil() as usize
}

/// Coordinates covered by `center ± half` along one axis
///
/// Wrapping axes wrap; bounded axes are clipped to stay clear of the solid
/// margin.
fn span(frame: &AxisFrame, center: usize, half: usize) -> Vec<usize> {
    let center = center as isize;
    let half = half as isize;
    if frame.wraps {
        let mut points: Vec<usize> = (center - half..=center + half)
            .filter_map(|i| frame.wrap(i))
            .collect();
        points.sort_unstable();
        points.dedup();
        return points;
    }
    let Some(last) = frame.len.checked_sub(frame.margin + 1) else {
        return Vec::new();
    };
    let low = (center - half).max(frame.margin as isize);
    let high = (center + half).min(last as isize);
    (low..=high).map(|i| i as usize).collect()
}

/// Carve a room around each of the last `ceil(rooms * n)` dead ends; returns
/// the number of rooms carved
pub fn carve_rooms(
    grid: &mut Grid,
    dead_ends: &[DeadEnd],
    rooms: f64,
    hall_width: u32,
    wall_width: u32,
) -> usize {
    if rooms <= 0.0 || dead_ends.is_empty() {
        return 0;
    }
    let count = ((rooms * dead_ends.len() as f64).ceil() as usize).min(dead_ends.len());
    let half = room_half_width(rooms, hall_width, wall_width);

    let columns = *grid.frame(Axis::Horizontal);
    let rows = *grid.frame(Axis::Vertical);
    let mut cleared = 0;
    for de in &dead_ends[dead_ends.len() - count..] {
        let ys = span(&rows, de.y, half);
        for x in span(&columns, de.x, half) {
            for &y in &ys {
                if grid.get(x, y) != CellState::Empty {
                    grid.put(x, y, CellState::Empty);
                    cleared += 1;
                }
            }
        }
    }
    let mirrored = grid.resync_symmetry();

    debug!(rooms = count, half, cleared, mirrored, "carved rooms");
    count
}
