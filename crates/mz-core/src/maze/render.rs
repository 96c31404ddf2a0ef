//! Diagnostic text rendering

use super::grid::Grid;

/// One line per row, walls as full blocks and corridors as spaces
pub fn render(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() * 3 + 1) * grid.height());
    for row in grid.rows() {
        out.extend(row.map(|cell| cell.symbol()));
        out.push('\n');
    }
    out
}
