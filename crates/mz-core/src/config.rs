//! Generation parameters
//!
//! `MazeConfig` is both the in-memory parameter set and the on-disk JSON
//! format; every field has a default so partial files are accepted.

use serde::{Deserialize, Serialize};

use crate::error::MazeError;
use crate::maze::Axis;
use crate::rng::MazeRng;

/// Width used when none is given
pub const DEFAULT_SIZE: i64 = 32;

/// Topology of one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    /// Mirror the maze across the middle of this axis
    pub symmetric: bool,
    /// Solid border thickness in lattice cells
    pub border: u32,
    /// Request wraparound along this axis
    pub loops: bool,
}

impl AxisConfig {
    pub const fn new(symmetric: bool, border: u32, loops: bool) -> Self {
        Self {
            symmetric,
            border,
            loops,
        }
    }

    /// True toroidal wrap. A symmetric bordered loop is generated bounded
    /// and perforated instead.
    pub const fn wraps(&self) -> bool {
        self.loops && !(self.symmetric && self.border > 0)
    }

    /// Symmetric bordered loop: bounded grid with passages punched through
    /// the border.
    pub const fn perforated(&self) -> bool {
        self.loops && self.symmetric && self.border > 0
    }

    /// Whether the finished map has a solid frame on this axis
    pub const fn bordered(&self) -> bool {
        !self.wraps() || self.border > 0
    }
}

/// Full parameter set for one maze
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub width: i64,
    /// Defaults to `width`
    pub height: Option<i64>,
    pub horizontal: AxisConfig,
    pub vertical: AxisConfig,
    /// Bias toward continuing in the arrival direction, `[0, 1]`
    pub straightness: f64,
    /// Fraction of extra loop-making wall removals, `[0, 1]`
    pub imperfection: f64,
    /// Density of carved space, `[0, 1]`; lower values reserve more cells
    pub fill: f64,
    pub hall_width: u32,
    pub wall_width: u32,
    /// Fraction of dead ends that get a room, `[0, 1]`
    pub rooms: f64,
    #[serde(rename = "seed")]
    pub rng: MazeRng,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: None,
            horizontal: AxisConfig::default(),
            vertical: AxisConfig::default(),
            straightness: 0.0,
            imperfection: 0.0,
            fill: 1.0,
            hall_width: 1,
            wall_width: 1,
            rooms: 0.0,
            rng: MazeRng::default(),
        }
    }
}

impl MazeConfig {
    /// Default configuration with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: MazeRng::new(seed),
            ..Self::default()
        }
    }

    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json(text: &str) -> Result<Self, MazeError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Requested height, falling back to the width
    pub fn requested_height(&self) -> i64 {
        self.height.unwrap_or(self.width)
    }

    pub fn axis(&self, axis: Axis) -> &AxisConfig {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    /// Copy with every numeric parameter clamped into its valid range
    pub fn sanitized(&self) -> Self {
        Self {
            straightness: unit(self.straightness),
            imperfection: unit(self.imperfection),
            fill: unit(self.fill),
            rooms: unit(self.rooms),
            hall_width: self.hall_width.max(1),
            wall_width: self.wall_width.max(1),
            ..self.clone()
        }
    }
}

/// Clamp to `[0, 1]`, mapping NaN to 0
fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_topology() {
        let plain = AxisConfig::new(false, 0, false);
        assert!(!plain.wraps());
        assert!(plain.bordered());

        let torus = AxisConfig::new(false, 0, true);
        assert!(torus.wraps());
        assert!(!torus.bordered());
        assert!(!torus.perforated());

        let seamless = AxisConfig::new(false, 1, true);
        assert!(seamless.wraps());
        assert!(seamless.bordered());

        let mirrored_torus = AxisConfig::new(true, 0, true);
        assert!(mirrored_torus.wraps());

        let tunnels = AxisConfig::new(true, 2, true);
        assert!(!tunnels.wraps());
        assert!(tunnels.perforated());
        assert!(tunnels.bordered());
    }

    #[test]
    fn test_sanitized_clamps() {
        let config = MazeConfig {
            straightness: 2.0,
            imperfection: -1.0,
            fill: f64::NAN,
            rooms: 0.5,
            hall_width: 0,
            wall_width: 0,
            ..MazeConfig::seeded(1)
        };
        let clean = config.sanitized();
        assert_eq!(clean.straightness, 1.0);
        assert_eq!(clean.imperfection, 0.0);
        assert_eq!(clean.fill, 0.0);
        assert_eq!(clean.rooms, 0.5);
        assert_eq!(clean.hall_width, 1);
        assert_eq!(clean.wall_width, 1);
    }

    #[test]
    fn test_height_defaults_to_width() {
        let config = MazeConfig {
            width: 17,
            ..MazeConfig::seeded(1)
        };
        assert_eq!(config.requested_height(), 17);
    }

    #[test]
    fn test_from_json_partial() {
        let config = MazeConfig::from_json(
            r#"{ "width": 21, "seed": 9, "horizontal": { "symmetric": true } }"#,
        )
        .unwrap();
        assert_eq!(config.width, 21);
        assert_eq!(config.rng.seed(), 9);
        assert!(config.horizontal.symmetric);
        assert_eq!(config.horizontal.border, 0);
        assert_eq!(config.hall_width, 1);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            MazeConfig::from_json("{ width: }"),
            Err(MazeError::InvalidConfig(_))
        ));
    }
}
