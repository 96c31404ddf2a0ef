//! Full generation pipeline

use tracing::info;

use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::rng::MazeRng;

use super::Maze;
use super::allocate::allocate;
use super::carve::carve;
use super::loosen::loosen;
use super::reserve::reserve;
use super::rooms::carve_rooms;
use super::stitch::stitch;
use super::thicken::thicken;

/// Generate a maze, drawing randomness from the configuration's own RNG
///
/// The same configuration always yields the same maze.
pub fn generate(config: MazeConfig) -> Result<Maze, MazeError> {
    let mut rng = config.rng.clone();
    generate_with_rng(&config, &mut rng)
}

/// Generate a maze with an external RNG stream
///
/// Parameters are clamped into range first; only the grid size can be
/// rejected.
pub fn generate_with_rng(config: &MazeConfig, rng: &mut MazeRng) -> Result<Maze, MazeError> {
    let config = config.sanitized();

    let mut grid = allocate(&config)?;
    let reserved = reserve(&mut grid, config.fill, rng);
    let mut dead_ends = carve(&mut grid, config.straightness, rng);
    let loosened = loosen(&mut grid, config.imperfection, rng);
    let punched = stitch(&mut grid, &mut dead_ends, &config, rng);

    let mut grid = thicken(&grid, &mut dead_ends, config.hall_width, config.wall_width);
    let rooms = carve_rooms(
        &mut grid,
        &dead_ends,
        config.rooms,
        config.hall_width,
        config.wall_width,
    );

    info!(
        seed = rng.seed(),
        width = grid.width(),
        height = grid.height(),
        reserved,
        dead_ends = dead_ends.len(),
        removed = loosened.removed,
        repaired = loosened.repaired,
        punched,
        rooms,
        "generated maze"
    );
    Ok(Maze { grid, dead_ends })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AxisConfig;
    use crate::maze::{CellState, empty_components};

    #[test]
    fn test_same_seed_same_maze() {
        let config = MazeConfig {
            width: 25,
            straightness: 0.3,
            imperfection: 0.4,
            fill: 0.7,
            rooms: 0.2,
            ..MazeConfig::seeded(99)
        };
        assert_eq!(generate(config.clone()).unwrap(), generate(config).unwrap());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate(MazeConfig {
            width: 25,
            ..MazeConfig::seeded(1)
        })
        .unwrap();
        let b = generate(MazeConfig {
            width: 25,
            ..MazeConfig::seeded(2)
        })
        .unwrap();
        assert_ne!(a.grid, b.grid);
    }

    #[test]
    fn test_out_of_range_parameters_are_clamped() {
        let maze = generate(MazeConfig {
            width: 15,
            straightness: 7.0,
            imperfection: f64::NAN,
            fill: -3.0,
            hall_width: 0,
            ..MazeConfig::seeded(4)
        })
        .unwrap();
        assert_eq!(maze.grid.width(), 15);
        assert_eq!(maze.grid.count(CellState::Reserved), 0);
        assert_eq!(empty_components(&maze.grid), 1);
    }

    #[test]
    fn test_every_stage_runs() {
        let tunnels = AxisConfig::new(true, 2, true);
        let maze = generate(MazeConfig {
            width: 23,
            horizontal: tunnels,
            vertical: tunnels,
            imperfection: 0.3,
            hall_width: 2,
            rooms: 0.3,
            ..MazeConfig::seeded(5)
        })
        .unwrap();
        // 23 + 2 border lines: 14 walls of 1 and 11 halls of 2
        assert_eq!(maze.grid.width(), 14 + 11 * 2);
        assert!(maze.grid.is_symmetric());
        assert_eq!(empty_components(&maze.grid), 1);
        for de in &maze.dead_ends {
            assert_eq!(maze.grid.get(de.x, de.y), CellState::Empty);
        }
    }
}
