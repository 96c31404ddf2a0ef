//! Grid allocation with lattice parity rules
//!
//! Hall lines sit on odd coordinates. A bounded axis needs an odd length so
//! both ends are wall lines; a wrapping axis needs an even length so the last
//! hall line meets wall line 0 across the seam. Symmetric axes additionally
//! need their mirror line on a hall line.

use tracing::debug;

use crate::config::{AxisConfig, MazeConfig};
use crate::error::MazeError;

use super::grid::{Axis, AxisFrame, Grid, Mirror};

/// Largest accepted grid side before thickening
pub const MAX_DIMENSION: usize = 4096;

/// Largest accepted side of the finished map
pub const MAX_MAP_DIMENSION: usize = 16_384;

/// Whether `len` is a valid lattice length for the given topology
pub fn is_valid_dimension(len: usize, axis: &AxisConfig) -> bool {
    match (axis.wraps(), axis.symmetric) {
        (true, false) => len >= 2 && len % 2 == 0,
        (true, true) => len >= 2 && (len - 2) % 4 == 0,
        (false, false) => len >= 3 && len % 2 == 1,
        (false, true) => len >= 3 && len % 4 == 3,
    }
}

/// Nearest valid length to `requested`, ties rounding up
pub fn adjust_dimension(axis_id: Axis, requested: i64, axis: &AxisConfig) -> Result<usize, MazeError> {
    if requested <= 0 {
        return Err(MazeError::DegenerateDimension {
            axis: axis_id,
            requested,
        });
    }
    if requested as u64 > MAX_DIMENSION as u64 {
        return Err(MazeError::DimensionTooLarge {
            axis: axis_id,
            requested,
            max: MAX_DIMENSION,
        });
    }

    let len = requested as usize;
    // Valid lengths repeat every 4, so the search ends within a few steps
    for k in 0..=4 {
        if is_valid_dimension(len + k, axis) {
            return Ok(len + k);
        }
        if k < len && is_valid_dimension(len - k, axis) {
            return Ok(len - k);
        }
    }
    unreachable!("every residue class mod 4 has a valid length within 4 steps")
}

/// Adjusted `(width, height)` for a configuration
pub fn adjust_dimensions(config: &MazeConfig) -> Result<(usize, usize), MazeError> {
    let width = adjust_dimension(Axis::Horizontal, config.width, &config.horizontal)?;
    let height = adjust_dimension(Axis::Vertical, config.requested_height(), &config.vertical)?;
    if width as i64 != config.width || height as i64 != config.requested_height() {
        debug!(
            requested_width = config.width,
            requested_height = config.requested_height(),
            width,
            height,
            "adjusted maze size to lattice"
        );
    }
    Ok((width, height))
}

/// Side of the finished map along an axis whose lattice is `len` lines long
///
/// Adds the seam copy and border lines from stitching, then widens hall
/// lines to `hall_width` cells and wall lines to `wall_width`.
pub fn map_dimension(
    axis_id: Axis,
    len: usize,
    axis: &AxisConfig,
    hall_width: u32,
    wall_width: u32,
) -> Result<usize, MazeError> {
    let halls = (len / 2) as u64;
    let mut lines = len as u64;
    if axis.wraps() && axis.border > 0 {
        lines += 1;
    }
    if axis.bordered() {
        lines = lines.saturating_add(2 * u64::from(axis.border.saturating_sub(1)));
    }
    let cells = halls
        .saturating_mul(u64::from(hall_width.max(1)))
        .saturating_add((lines - halls).saturating_mul(u64::from(wall_width.max(1))));
    if cells > MAX_MAP_DIMENSION as u64 {
        return Err(MazeError::MapTooLarge {
            axis: axis_id,
            len: cells,
            max: MAX_MAP_DIMENSION,
        });
    }
    Ok(cells as usize)
}

/// Allocate a solid grid sized and framed for `config`
///
/// Fails up front when borders or band widths would blow the finished map
/// past [`MAX_MAP_DIMENSION`].
pub fn allocate(config: &MazeConfig) -> Result<Grid, MazeError> {
    let (width, height) = adjust_dimensions(config)?;
    for (axis, len) in [(Axis::Horizontal, width), (Axis::Vertical, height)] {
        map_dimension(axis, len, config.axis(axis), config.hall_width, config.wall_width)?;
    }

    let mut mirror = Mirror::empty();
    for axis in Axis::ALL {
        if config.axis(axis).symmetric {
            mirror |= axis.flag();
        }
    }

    Ok(Grid::new(
        AxisFrame::new(width, config.horizontal.wraps()),
        AxisFrame::new(height, config.vertical.wraps()),
        mirror,
    ))
}
