//! Command line options
//!
//! Configuration is layered: defaults, then the `--config` file, then
//! individual flags.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mz_core::{MazeConfig, MazeRng};

/// Procedural maze generator
#[derive(Parser, Debug, Default)]
#[command(name = "mazegen")]
#[command(author, version, about = "Generate a maze and print it as text", long_about = None)]
pub struct Args {
    /// Width in unit cells (adjusted to the nearest valid size)
    #[arg(short = 'W', long = "width")]
    pub width: Option<i64>,

    /// Height in unit cells, defaults to the width
    #[arg(short = 'H', long = "height")]
    pub height: Option<i64>,

    /// Random seed, random if omitted
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Bias toward straight corridors, 0 to 1
    #[arg(long = "straightness")]
    pub straightness: Option<f64>,

    /// Fraction of extra walls removed to create loops, 0 to 1
    #[arg(short = 'i', long = "imperfection")]
    pub imperfection: Option<f64>,

    /// Density of carved space, 0 to 1
    #[arg(short = 'f', long = "fill")]
    pub fill: Option<f64>,

    /// Corridor thickness in cells
    #[arg(long = "hall-width")]
    pub hall_width: Option<u32>,

    /// Wall thickness in cells
    #[arg(long = "wall-width")]
    pub wall_width: Option<u32>,

    /// Fraction of dead ends that get a room, 0 to 1
    #[arg(short = 'r', long = "rooms")]
    pub rooms: Option<f64>,

    /// Mirror left to right
    #[arg(long = "h-sym")]
    pub h_sym: bool,

    /// Mirror top to bottom
    #[arg(long = "v-sym")]
    pub v_sym: bool,

    /// Wrap around horizontally
    #[arg(long = "h-loop")]
    pub h_loop: bool,

    /// Wrap around vertically
    #[arg(long = "v-loop")]
    pub v_loop: bool,

    /// Left and right border thickness
    #[arg(long = "h-border")]
    pub h_border: Option<u32>,

    /// Top and bottom border thickness
    #[arg(long = "v-border")]
    pub v_border: Option<u32>,

    /// JSON configuration file; flags override its values
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Print the dead ends as JSON after the map
    #[arg(long = "dead-ends")]
    pub dead_ends: bool,

    /// Debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    /// Build the configuration from the optional file and the flags
    pub fn resolve(&self) -> Result<MazeConfig> {
        let base = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                MazeConfig::from_json(&text)
                    .with_context(|| format!("failed to parse config file {}", path.display()))?
            }
            None => MazeConfig::default(),
        };
        Ok(self.apply(base))
    }

    /// Override `config` with every flag that was given
    pub fn apply(&self, mut config: MazeConfig) -> MazeConfig {
        if let Some(width) = self.width {
            config.width = width;
        }
        if self.height.is_some() {
            config.height = self.height;
        }
        if let Some(seed) = self.seed {
            config.rng = MazeRng::new(seed);
        }
        if let Some(straightness) = self.straightness {
            config.straightness = straightness;
        }
        if let Some(imperfection) = self.imperfection {
            config.imperfection = imperfection;
        }
        if let Some(fill) = self.fill {
            config.fill = fill;
        }
        if let Some(hall_width) = self.hall_width {
            config.hall_width = hall_width;
        }
        if let Some(wall_width) = self.wall_width {
            config.wall_width = wall_width;
        }
        if let Some(rooms) = self.rooms {
            config.rooms = rooms;
        }

        config.horizontal.symmetric |= self.h_sym;
        config.vertical.symmetric |= self.v_sym;
        config.horizontal.loops |= self.h_loop;
        config.vertical.loops |= self.v_loop;
        if let Some(border) = self.h_border {
            config.horizontal.border = border;
        }
        if let Some(border) = self.v_border {
            config.vertical.border = border;
        }
        config
    }
}
