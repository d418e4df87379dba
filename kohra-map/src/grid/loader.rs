//! CSV map loading and validation.
//!
//! Map format: one row per line, single-character symbols separated by
//! commas, alphabet {0, 1, S, G}. All rows must have equal length and the
//! map must contain exactly one `S` and one `G`. Violations are reported
//! with enough context (row/column) to locate the fault; nothing past
//! loading ever raises.

use std::path::Path;

use thiserror::Error;

use super::MazeGrid;
use crate::core::Tile;

/// Validation failure while loading a map.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("map is empty")]
    Empty,

    #[error("non-rectangular map at row {row}: expected {expected} columns, got {found}")]
    NonRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid symbol '{symbol}' at ({row}, {col})")]
    InvalidSymbol {
        row: usize,
        col: usize,
        symbol: String,
    },

    #[error("expected exactly one 'S', found {0}")]
    StartCount(usize),

    #[error("expected exactly one 'G', found {0}")]
    GoalCount(usize),

    #[error("failed to read map: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a comma-separated map string into a validated grid.
pub fn parse_str(text: &str) -> Result<MazeGrid, MapError> {
    let mut rows: Vec<Vec<Tile>> = Vec::new();

    for (r, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for (c, sym) in line.split(',').enumerate() {
            let sym = sym.trim();
            match Tile::from_symbol(sym) {
                Some(tile) => row.push(tile),
                None => {
                    return Err(MapError::InvalidSymbol {
                        row: r,
                        col: c,
                        symbol: sym.to_string(),
                    })
                }
            }
        }
        rows.push(row);
    }

    MazeGrid::from_tiles(rows)
}

/// Load and validate a map from a CSV file.
pub fn load(path: &Path) -> Result<MazeGrid, MapError> {
    let text = std::fs::read_to_string(path)?;
    parse_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_valid_map() {
        let g = parse_str("S,0,0\n0,1,0\n0,0,G").unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 3);
        assert_eq!(g.start(), crate::core::Coord::new(0, 0));
        assert_eq!(g.goal(), crate::core::Coord::new(2, 2));
    }

    #[test]
    fn test_empty_map_rejected() {
        assert!(matches!(parse_str(""), Err(MapError::Empty)));
        assert!(matches!(parse_str("\n\n"), Err(MapError::Empty)));
    }

    #[test]
    fn test_non_rectangular_rejected_with_row() {
        let err = parse_str("S,0,0\n0,1\n0,0,G").unwrap_err();
        match err {
            MapError::NonRectangular {
                row,
                expected,
                found,
            } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected NonRectangular, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_symbol_rejected_with_position() {
        let err = parse_str("S,0\nX,G").unwrap_err();
        match err {
            MapError::InvalidSymbol { row, col, symbol } => {
                assert_eq!((row, col), (1, 0));
                assert_eq!(symbol, "X");
            }
            other => panic!("expected InvalidSymbol, got {other:?}"),
        }
    }

    #[test]
    fn test_start_goal_counts_enforced() {
        assert!(matches!(
            parse_str("0,0\n0,G"),
            Err(MapError::StartCount(0))
        ));
        assert!(matches!(
            parse_str("S,S\n0,G"),
            Err(MapError::StartCount(2))
        ));
        assert!(matches!(parse_str("S,0\n0,0"), Err(MapError::GoalCount(0))));
        assert!(matches!(
            parse_str("S,G\nG,0"),
            Err(MapError::GoalCount(2))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "S,0,1\n0,0,0\n1,0,G").unwrap();

        let g = load(file.path()).unwrap();
        assert_eq!(g.height(), 3);
        assert!(g.is_wall(crate::core::Coord::new(0, 2)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, MapError::Io(_)));
    }
}
