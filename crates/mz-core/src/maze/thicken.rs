//! Band expansion
//!
//! Every unit line of the lattice becomes a band of `hall_width` cells (hall
//! lines of the core) or `wall_width` cells (wall and border lines). Rows and
//! columns expand independently, so each output cell is a copy of exactly
//! one unit cell.

use tracing::debug;

use super::DeadEnd;
use super::grid::{Axis, AxisFrame, Grid};

/// Expansion of one axis
#[derive(Debug, Clone, PartialEq, Eq)]
struct BandMap {
    /// Source line of every output line
    source: Vec<usize>,
    /// First output line of every source line
    start: Vec<usize>,
    /// Band width of every source line
    width: Vec<usize>,
}

impl BandMap {
    fn new(frame: &AxisFrame, hall: usize, wall: usize) -> Self {
        let mut source = Vec::new();
        let mut start = Vec::with_capacity(frame.len);
        let mut width = Vec::with_capacity(frame.len);
        for i in 0..frame.len {
            let band = if frame.is_hall_line(i) { hall } else { wall };
            start.push(source.len());
            width.push(band);
            source.extend(std::iter::repeat_n(i, band));
        }
        Self {
            source,
            start,
            width,
        }
    }

    /// Middle of the band for line `i`; the cell past the midpoint when the
    /// band is even
    fn center(&self, i: usize) -> usize {
        self.start[i] + self.width[i] / 2
    }

    /// Frame of the expanded axis
    fn frame(&self, old: &AxisFrame, wall: usize) -> AxisFrame {
        let len = self.source.len();
        AxisFrame {
            len,
            wraps: old.wraps,
            // Line 0 of a wrapped axis is its own mirror, so the whole first
            // band reflects onto itself
            pivot: if old.wraps {
                wall as isize - 1
            } else {
                len as isize - 1
            },
            lead: old.lead * wall,
            margin: old.margin * wall,
        }
    }
}

/// Expand `grid` to the given band widths and move every dead end to the
/// centre of its band
pub fn thicken(grid: &Grid, dead_ends: &mut [DeadEnd], hall_width: u32, wall_width: u32) -> Grid {
    let hall = hall_width.max(1) as usize;
    let wall = wall_width.max(1) as usize;
    if hall == 1 && wall == 1 {
        return grid.clone();
    }

    let columns = BandMap::new(grid.frame(Axis::Horizontal), hall, wall);
    let rows = BandMap::new(grid.frame(Axis::Vertical), hall, wall);
    let thick = grid.resampled(
        &columns.source,
        &rows.source,
        columns.frame(grid.frame(Axis::Horizontal), wall),
        rows.frame(grid.frame(Axis::Vertical), wall),
    );

    for de in dead_ends.iter_mut() {
        *de = DeadEnd::new(columns.center(de.x), rows.center(de.y));
    }

    debug!(
        hall,
        wall,
        width = thick.width(),
        height = thick.height(),
        "thickened maze"
    );
    thick
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AxisConfig, MazeConfig};
    use crate::maze::allocate::allocate;
    use crate::maze::carve::carve;
    use crate::maze::cell::CellState;
    use crate::maze::connectivity::empty_components;
    use crate::rng::MazeRng;

    fn carved(config: &MazeConfig) -> (Grid, Vec<DeadEnd>) {
        let mut grid = allocate(config).unwrap();
        let mut rng = config.rng.clone();
        let dead_ends = carve(&mut grid, config.straightness, &mut rng);
        (grid, dead_ends)
    }

    #[test]
    fn test_unit_bands_are_identity() {
        let (grid, mut dead_ends) = carved(&MazeConfig {
            width: 9,
            ..MazeConfig::seeded(1)
        });
        let before = dead_ends.clone();
        assert_eq!(thicken(&grid, &mut dead_ends, 1, 1), grid);
        assert_eq!(dead_ends, before);
    }

    #[test]
    fn test_thick_halls_copy_source_cells() {
        let (grid, mut dead_ends) = carved(&MazeConfig {
            width: 9,
            ..MazeConfig::seeded(2)
        });
        let thick = thicken(&grid, &mut dead_ends.clone(), 3, 1);
        assert_eq!((thick.width(), thick.height()), (17, 17));
        // Unit line of each output line: walls at multiples of 4
        let unit = |i: usize| if i % 4 == 0 { i / 2 } else { 2 * (i / 4) + 1 };
        for x in 0..17 {
            for y in 0..17 {
                assert_eq!(thick.get(x, y), grid.get(unit(x), unit(y)));
            }
        }
        assert_eq!(empty_components(&thick), 1);

        let thick_again = thicken(&grid, &mut dead_ends, 3, 1);
        assert_eq!(thick_again, thick);
    }

    #[test]
    fn test_dead_end_closed_form() {
        let mut frame = AxisFrame::new(15, false);
        frame.lead = 2;
        frame.margin = 3;
        for (hall, wall) in [(1, 1), (2, 1), (3, 2), (4, 3)] {
            let bands = BandMap::new(&frame, hall, wall);
            for old in (0..15).filter(|&i| frame.is_hall_line(i)) {
                let c = old - frame.lead;
                let expected = frame.lead * wall + (c >> 1) * (hall + wall) + wall + hall / 2;
                assert_eq!(bands.center(old), expected);
            }
        }
    }

    #[test]
    fn test_even_band_rounds_past_midpoint() {
        let mut dead_ends = vec![DeadEnd::new(1, 1)];
        let grid = Grid::new(
            AxisFrame::new(3, false),
            AxisFrame::new(3, false),
            crate::maze::Mirror::empty(),
        );
        let thick = thicken(&grid, &mut dead_ends, 4, 1);
        assert_eq!(thick.width(), 6);
        // Band covers 1..5, centre rounds to 3
        assert_eq!(dead_ends, vec![DeadEnd::new(3, 3)]);
    }

    #[test]
    fn test_frames_rescale() {
        let config = MazeConfig {
            width: 10,
            height: Some(11),
            horizontal: AxisConfig::new(true, 0, true),
            vertical: AxisConfig::new(true, 0, false),
            ..MazeConfig::seeded(3)
        };
        let (grid, mut dead_ends) = carved(&config);
        let thick = thicken(&grid, &mut dead_ends, 2, 3);
        let columns = thick.frame(Axis::Horizontal);
        assert!(columns.wraps);
        assert_eq!(columns.len, 5 * 3 + 5 * 2);
        assert_eq!(columns.pivot, 2);
        let rows = thick.frame(Axis::Vertical);
        assert_eq!(rows.len, 6 * 3 + 5 * 2);
        assert_eq!(rows.margin, 3);
        assert!(thick.is_symmetric());
        for de in &dead_ends {
            assert_eq!(thick.get(de.x, de.y), CellState::Empty);
        }
    }

    #[test]
    fn test_thickening_keeps_connectivity() {
        for seed in 0..4 {
            let config = MazeConfig {
                width: 15,
                ..MazeConfig::seeded(seed)
            };
            let mut grid = allocate(&config).unwrap();
            let mut rng = MazeRng::new(seed);
            let mut dead_ends = carve(&mut grid, 0.5, &mut rng);
            let thick = thicken(&grid, &mut dead_ends, 2, 2);
            assert_eq!(empty_components(&thick), 1);
        }
    }
}
