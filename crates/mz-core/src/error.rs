//! Configuration errors

use thiserror::Error;

use crate::maze::Axis;

/// Errors raised before generation starts
///
/// Generation itself cannot fail once the configuration has been accepted.
#[derive(Error, Debug)]
pub enum MazeError {
    #[error("{axis} size {requested} leaves no room for a maze")]
    DegenerateDimension { axis: Axis, requested: i64 },

    #[error("{axis} size {requested} exceeds the maximum of {max}")]
    DimensionTooLarge {
        axis: Axis,
        requested: i64,
        max: usize,
    },

    #[error("{axis} side of the finished map would be {len} cells, above the maximum of {max}")]
    MapTooLarge { axis: Axis, len: u64, max: usize },

    #[error("invalid maze configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
