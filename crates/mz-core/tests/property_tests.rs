use mz_core::maze::{
    adjust_dimension, allocate, carve, empty_components, is_valid_dimension, loosen, map_dimension,
    reserve, Axis,
};
use mz_core::{generate, AxisConfig, CellState, Grid, MazeConfig, MazeRng};
use proptest::prelude::*;

fn axis_config() -> impl Strategy<Value = AxisConfig> {
    (any::<bool>(), 0u32..3, any::<bool>())
        .prop_map(|(symmetric, border, loops)| AxisConfig::new(symmetric, border, loops))
}

fn maze_config() -> impl Strategy<Value = MazeConfig> {
    (
        (3i64..36, 3i64..36),
        (axis_config(), axis_config()),
        (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0),
        (1u32..4, 1u32..3),
        0.0f64..=1.0,
        any::<u64>(),
    )
        .prop_map(
            |((width, height), (horizontal, vertical), (straightness, imperfection, fill), (hall, wall), rooms, seed)| {
                MazeConfig {
                    width,
                    height: Some(height),
                    horizontal,
                    vertical,
                    straightness,
                    imperfection,
                    fill,
                    hall_width: hall,
                    wall_width: wall,
                    rooms,
                    rng: MazeRng::new(seed),
                }
            },
        )
}

/// A bordered loop is cut open at its seam so it tiles; it is only
/// connected as a tile, not on its own
fn is_tiling(config: &MazeConfig) -> bool {
    Axis::ALL.iter().any(|&axis| {
        let topology = config.axis(axis);
        topology.wraps() && topology.border > 0
    })
}

fn solid_islands(grid: &Grid) -> usize {
    (0..grid.width())
        .flat_map(|x| (0..grid.height()).map(move |y| (x, y)))
        .filter(|&(x, y)| grid.is_island(x, y))
        .count()
}

/// Symmetric torus along x with any other topology along y
fn seam_config() -> impl Strategy<Value = MazeConfig> {
    let vertical = axis_config().prop_filter("one mirror seam", |v| !(v.symmetric && v.wraps()));
    (6i64..40, 3i64..40, vertical, 0.05f64..=1.0, 0.0f64..=1.0, any::<u64>()).prop_map(
        |(width, height, vertical, imperfection, fill, seed)| MazeConfig {
            width,
            height: Some(height),
            horizontal: AxisConfig::new(true, 0, true),
            vertical,
            imperfection,
            fill,
            rng: MazeRng::new(seed),
            ..MazeConfig::default()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: the same configuration always yields the same maze.
    #[test]
    fn prop_generation_is_deterministic(config in maze_config()) {
        let a = generate(config.clone()).unwrap();
        let b = generate(config).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Property: finished mazes hold no reserved cells and keep their mirror
    /// symmetry.
    #[test]
    fn prop_finished_maze_is_clean(config in maze_config()) {
        let maze = generate(config.clone()).unwrap();
        for axis in Axis::ALL {
            let requested = if axis == Axis::Horizontal {
                config.width
            } else {
                config.requested_height()
            };
            let len = adjust_dimension(axis, requested, config.axis(axis)).unwrap();
            let side = map_dimension(axis, len, config.axis(axis), config.hall_width, config.wall_width)
                .unwrap();
            let actual = if axis == Axis::Horizontal {
                maze.grid.width()
            } else {
                maze.grid.height()
            };
            prop_assert_eq!(actual, side);
        }
        prop_assert_eq!(maze.grid.count(CellState::Reserved), 0);
        prop_assert!(maze.grid.is_symmetric());
        for de in &maze.dead_ends {
            prop_assert!(de.x < maze.grid.width() && de.y < maze.grid.height());
        }
    }

    /// Property: every corridor is reachable from every other one.
    #[test]
    fn prop_finished_maze_is_connected(config in maze_config()) {
        prop_assume!(!is_tiling(&config));
        let maze = generate(config).unwrap();
        prop_assert_eq!(empty_components(&maze.grid), 1);
    }

    /// Property: loosening leaves no free-standing wall cells and never
    /// disconnects the maze.
    #[test]
    fn prop_loosening_leaves_no_islands(config in maze_config()) {
        let config = config.sanitized();
        let mut rng = config.rng.clone();
        let mut grid = allocate(&config).unwrap();
        reserve(&mut grid, config.fill, &mut rng);
        carve(&mut grid, config.straightness, &mut rng);
        prop_assert!(grid.is_symmetric());
        loosen(&mut grid, config.imperfection, &mut rng);
        prop_assert_eq!(solid_islands(&grid), 0);
        prop_assert_eq!(empty_components(&grid), 1);
        prop_assert!(grid.is_symmetric());
    }

    /// Property: a loose symmetric torus has at least one passage through its
    /// mirror seam whenever a corridor runs beside it.
    #[test]
    fn prop_symmetric_torus_opens_seam(config in seam_config()) {
        let maze = generate(config).unwrap();
        let grid = &maze.grid;
        let beside = (0..grid.height()).any(|y| grid.get(1, y) == CellState::Empty);
        let through = (0..grid.height()).any(|y| grid.get(0, y) == CellState::Empty);
        prop_assert!(!beside || through);
        prop_assert_eq!(solid_islands(grid), 0);
    }

    /// Property: adjusted sizes are valid and adjusting again is a no-op.
    #[test]
    fn prop_adjusted_size_is_stable(requested in 1i64..500, topology in axis_config()) {
        let len = adjust_dimension(Axis::Horizontal, requested, &topology).unwrap();
        prop_assert!(is_valid_dimension(len, &topology));
        prop_assert!(len.abs_diff(requested as usize) <= 2);
        let again = adjust_dimension(Axis::Horizontal, len as i64, &topology).unwrap();
        prop_assert_eq!(again, len);
    }
}
