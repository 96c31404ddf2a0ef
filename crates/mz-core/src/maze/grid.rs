//! Maze grid with mirrored writes
//!
//! The grid owns the cells and the per-axis geometry (length, wraparound,
//! mirror pivot, border bookkeeping). Every phase before room carving writes
//! through [`Grid::set`], which keeps all mirror images of a cell equal, so a
//! symmetric grid stays symmetric by construction.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::cell::CellState;

bitflags! {
    /// Axes along which writes are mirrored
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Mirror: u8 {
        const HORIZONTAL = 0x01;
        const VERTICAL = 0x02;
    }
}

/// Grid axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Axis {
    /// x, along the width
    #[strum(to_string = "width")]
    Horizontal,
    /// y, along the height
    #[strum(to_string = "height")]
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// Mirror flag for this axis
    pub const fn flag(self) -> Mirror {
        match self {
            Axis::Horizontal => Mirror::HORIZONTAL,
            Axis::Vertical => Mirror::VERTICAL,
        }
    }

    /// Grid coordinates of the cell at `along` on this axis and `across` on
    /// the other one
    pub const fn point(self, along: usize, across: usize) -> (usize, usize) {
        match self {
            Axis::Horizontal => (along, across),
            Axis::Vertical => (across, along),
        }
    }

    /// The other axis
    pub const fn other(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Cardinal directions, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit step for this direction
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// The two directions at right angles to this one
    pub const fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::North | Direction::South => [Direction::West, Direction::East],
            Direction::East | Direction::West => [Direction::North, Direction::South],
        }
    }
}

/// Geometry of one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisFrame {
    pub len: usize,
    pub wraps: bool,
    /// Mirror image of `i` is `pivot - i` (modulo `len` when wrapping)
    pub pivot: isize,
    /// Border lines added in front of the lattice core
    pub lead: usize,
    /// Solid lines at each end that rooms must not touch
    pub margin: usize,
}

impl AxisFrame {
    pub fn new(len: usize, wraps: bool) -> Self {
        Self {
            len,
            wraps,
            pivot: if wraps { len as isize } else { len as isize - 1 },
            lead: 0,
            margin: if wraps { 0 } else { 1 },
        }
    }

    /// Bring a signed coordinate into range, or `None` when it falls off a
    /// bounded axis
    pub fn wrap(&self, i: isize) -> Option<usize> {
        if self.len == 0 {
            None
        } else if self.wraps {
            Some(i.rem_euclid(self.len as isize) as usize)
        } else if i >= 0 && (i as usize) < self.len {
            Some(i as usize)
        } else {
            None
        }
    }

    /// Mirror image of a coordinate
    pub fn mirror(&self, i: usize) -> usize {
        let m = self.pivot - i as isize;
        if self.wraps {
            m.rem_euclid(self.len as isize) as usize
        } else {
            m as usize
        }
    }

    /// Whether `i` is a hall line of the unit lattice
    pub fn is_hall_line(&self, i: usize) -> bool {
        i >= self.lead && i + self.lead < self.len && (i - self.lead) % 2 == 1
    }
}

/// 2D cell grid indexed `[x][y]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<CellState>>,
    horizontal: AxisFrame,
    vertical: AxisFrame,
    mirror: Mirror,
}

impl Grid {
    /// Solid grid of the given size
    pub fn new(horizontal: AxisFrame, vertical: AxisFrame, mirror: Mirror) -> Self {
        Self {
            cells: vec![vec![CellState::Solid; vertical.len]; horizontal.len],
            horizontal,
            vertical,
            mirror,
        }
    }

    pub fn width(&self) -> usize {
        self.horizontal.len
    }

    pub fn height(&self) -> usize {
        self.vertical.len
    }

    pub fn frame(&self, axis: Axis) -> &AxisFrame {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    pub(crate) fn frame_mut(&mut self, axis: Axis) -> &mut AxisFrame {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    /// Axes with mirror symmetry
    pub fn mirror_axes(&self) -> Mirror {
        self.mirror
    }

    /// Cell at `(x, y)`; panics when out of range
    pub fn get(&self, x: usize, y: usize) -> CellState {
        self.cells[x][y]
    }

    /// Mirrored write: sets `(x, y)` and every mirror image of it
    ///
    /// Coordinates are wrapped on wrapping axes; writes that fall off a
    /// bounded axis are ignored.
    pub fn set(&mut self, x: isize, y: isize, state: CellState) {
        let (Some(x), Some(y)) = (self.horizontal.wrap(x), self.vertical.wrap(y)) else {
            return;
        };
        for (px, py) in self.orbit(x, y) {
            self.cells[px][py] = state;
        }
    }

    /// Unmirrored write
    pub(crate) fn put(&mut self, x: usize, y: usize, state: CellState) {
        self.cells[x][y] = state;
    }

    /// All mirror images of `(x, y)` including itself, without repeats
    pub fn orbit(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mx = if self.mirror.contains(Mirror::HORIZONTAL) {
            self.horizontal.mirror(x)
        } else {
            x
        };
        let my = if self.mirror.contains(Mirror::VERTICAL) {
            self.vertical.mirror(y)
        } else {
            y
        };
        let mut points = Vec::with_capacity(4);
        for p in [(x, y), (mx, y), (x, my), (mx, my)] {
            if !points.contains(&p) {
                points.push(p);
            }
        }
        points
    }

    /// Whether `(x, y)` is the representative of its orbit
    pub fn is_canonical(&self, x: usize, y: usize) -> bool {
        (!self.mirror.contains(Mirror::HORIZONTAL) || x <= self.horizontal.mirror(x))
            && (!self.mirror.contains(Mirror::VERTICAL) || y <= self.vertical.mirror(y))
    }

    /// Whether two distinct cells are mirror images of each other
    pub fn are_mirrors(&self, a: (usize, usize), b: (usize, usize)) -> bool {
        a != b && self.orbit(a.0, a.1).contains(&b)
    }

    /// Whether every cell equals all of its mirror images
    pub fn is_symmetric(&self) -> bool {
        (0..self.width()).all(|x| {
            (0..self.height()).all(|y| {
                let state = self.cells[x][y];
                self.orbit(x, y)
                    .into_iter()
                    .all(|(px, py)| self.cells[px][py] == state)
            })
        })
    }

    /// Cell `distance` steps from `(x, y)` in `dir`, if it exists
    pub fn step(&self, x: usize, y: usize, dir: Direction, distance: isize) -> Option<(usize, usize)> {
        let (dx, dy) = dir.delta();
        let nx = self.horizontal.wrap(x as isize + dx * distance)?;
        let ny = self.vertical.wrap(y as isize + dy * distance)?;
        Some((nx, ny))
    }

    /// Orthogonal neighbors that exist (wrapped where the axis wraps)
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.step(x, y, dir, 1))
            .collect()
    }

    /// Whether `(x, y)` is solid with all four neighbors empty
    pub fn is_island(&self, x: usize, y: usize) -> bool {
        let neighbors = self.neighbors(x, y);
        self.cells[x][y] == CellState::Solid
            && neighbors.len() == 4
            && neighbors
                .iter()
                .all(|&(nx, ny)| self.cells[nx][ny] == CellState::Empty)
    }

    /// Number of cells in the given state
    pub fn count(&self, state: CellState) -> usize {
        self.cells
            .iter()
            .map(|col| col.iter().filter(|&&c| c == state).count())
            .sum()
    }

    /// Cells row by row, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellState> + '_> + '_ {
        (0..self.height()).map(move |y| (0..self.width()).map(move |x| self.cells[x][y]))
    }

    /// Append a copy of the first line along `axis` at the far end
    ///
    /// The axis stops wrapping: the copy closes the seam visually.
    pub(crate) fn duplicate_leading_edge(&mut self, axis: Axis) {
        match axis {
            Axis::Horizontal => {
                if let Some(first) = self.cells.first().cloned() {
                    self.cells.push(first);
                }
            }
            Axis::Vertical => {
                for col in &mut self.cells {
                    if let Some(&first) = col.first() {
                        col.push(first);
                    }
                }
            }
        }
        let frame = self.frame_mut(axis);
        frame.len += 1;
        frame.wraps = false;
        frame.pivot = frame.len as isize - 1;
        frame.margin = 1;
    }

    /// Repeat the outermost line at both ends of `axis`
    pub(crate) fn grow_border(&mut self, axis: Axis, copies: usize) {
        if copies == 0 || self.frame(axis).len == 0 {
            return;
        }
        match axis {
            Axis::Horizontal => self.cells = pad_line(&self.cells, copies),
            Axis::Vertical => {
                for col in &mut self.cells {
                    *col = pad_line(col, copies);
                }
            }
        }
        let frame = self.frame_mut(axis);
        frame.len += 2 * copies;
        frame.lead += copies;
        frame.margin += copies;
        if !frame.wraps {
            frame.pivot = frame.len as isize - 1;
        }
    }

    /// Make every orbit agree again after unmirrored writes
    ///
    /// Only carving happens between re-syncs, so an orbit with any empty
    /// member becomes entirely empty. Returns the number of cells changed.
    pub(crate) fn resync_symmetry(&mut self) -> usize {
        if self.mirror.is_empty() {
            return 0;
        }
        let mut changed = 0;
        for x in 0..self.width() {
            for y in 0..self.height() {
                if !self.is_canonical(x, y) {
                    continue;
                }
                let orbit = self.orbit(x, y);
                if orbit.iter().any(|&(px, py)| self.cells[px][py] == CellState::Empty) {
                    for (px, py) in orbit {
                        if self.cells[px][py] != CellState::Empty {
                            self.cells[px][py] = CellState::Empty;
                            changed += 1;
                        }
                    }
                }
            }
        }
        changed
    }

    /// Replace every cell in `from` state with `to`
    pub(crate) fn replace_all(&mut self, from: CellState, to: CellState) -> usize {
        let mut replaced = 0;
        for cell in self.cells.iter_mut().flatten() {
            if *cell == from {
                *cell = to;
                replaced += 1;
            }
        }
        replaced
    }

    /// Build a grid whose cell `(x, y)` is `source[col_map[x]][row_map[y]]`
    pub(crate) fn resampled(
        &self,
        col_map: &[usize],
        row_map: &[usize],
        horizontal: AxisFrame,
        vertical: AxisFrame,
    ) -> Grid {
        let cells = col_map
            .iter()
            .map(|&sx| row_map.iter().map(|&sy| self.cells[sx][sy]).collect())
            .collect();
        Grid {
            cells,
            horizontal,
            vertical,
            mirror: self.mirror,
        }
    }
}

/// `line` with its first and last element repeated `copies` times outward
fn pad_line<T: Clone>(line: &[T], copies: usize) -> Vec<T> {
    let (Some(first), Some(last)) = (line.first(), line.last()) else {
        return line.to_vec();
    };
    let mut padded = Vec::with_capacity(line.len() + 2 * copies);
    padded.extend(std::iter::repeat_n(first.clone(), copies));
    padded.extend_from_slice(line);
    padded.extend(std::iter::repeat_n(last.clone(), copies));
    padded
}
