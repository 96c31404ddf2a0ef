//! Cell states

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// State of one grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellState {
    /// Wall
    #[default]
    Solid = 0,
    /// Corridor
    Empty = 1,
    /// Soft wall, only present while carving
    Reserved = 2,
}

impl CellState {
    /// Check if this cell can be walked through
    pub const fn is_passable(&self) -> bool {
        matches!(self, CellState::Empty)
    }

    /// Get the display character for this cell
    pub const fn symbol(&self) -> char {
        match self {
            CellState::Solid => '\u{2588}',
            CellState::Empty => ' ',
            CellState::Reserved => '\u{2591}',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_is_solid() {
        assert_eq!(CellState::default(), CellState::Solid);
    }

    #[test]
    fn test_only_empty_is_passable() {
        let passable: Vec<_> = CellState::iter().filter(|c| c.is_passable()).collect();
        assert_eq!(passable, vec![CellState::Empty]);
    }

    #[test]
    fn test_symbols_are_distinct() {
        let symbols: Vec<char> = CellState::iter().map(|c| c.symbol()).collect();
        assert_eq!(symbols, vec!['█', ' ', '░']);
    }
}
