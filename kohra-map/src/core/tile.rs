//! Tile types for the maze grid.

use serde::{Deserialize, Serialize};

/// Semantic tile type, one-to-one with the map alphabet:
///
/// - `Free` = "0", open floor
/// - `Wall` = "1", impassable
/// - `Start` = "S", the agent's spawn cell (passable)
/// - `Goal` = "G", the target cell (passable)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Free,
    Wall,
    Start,
    Goal,
}

impl Tile {
    /// Parse a single map symbol. Returns `None` for anything outside the
    /// alphabet; the loader turns that into a located validation error.
    pub fn from_symbol(sym: &str) -> Option<Tile> {
        match sym {
            "0" => Some(Tile::Free),
            "1" => Some(Tile::Wall),
            "S" => Some(Tile::Start),
            "G" => Some(Tile::Goal),
            _ => None,
        }
    }

    /// The map symbol for this tile.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Tile::Free => '0',
            Tile::Wall => '1',
            Tile::Start => 'S',
            Tile::Goal => 'G',
        }
    }

    /// Can an agent occupy this tile?
    #[inline]
    pub fn is_passable(self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for tile in [Tile::Free, Tile::Wall, Tile::Start, Tile::Goal] {
            assert_eq!(Tile::from_symbol(&tile.symbol().to_string()), Some(tile));
        }
    }

    #[test]
    fn test_rejects_unknown_symbols() {
        assert_eq!(Tile::from_symbol("x"), None);
        assert_eq!(Tile::from_symbol(""), None);
        assert_eq!(Tile::from_symbol("00"), None);
    }

    #[test]
    fn test_passability() {
        assert!(Tile::Free.is_passable());
        assert!(Tile::Start.is_passable());
        assert!(Tile::Goal.is_passable());
        assert!(!Tile::Wall.is_passable());
    }
}
