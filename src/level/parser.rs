//! # Level Parser
//!
//! Reads level text from a string or a file.

use crate::game::{Grid, Position, TileKind};
use crate::level::{Level, LevelFormatError};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Symbol that marks the player's starting cell.
pub const SPAWN_SYMBOL: char = '@';

/// Symbol used to pad short lines.
pub const PAD_SYMBOL: char = '.';

/// Parses level text into a [`Level`].
///
/// Lines are trimmed, then padded on the right with `.` to the length of the
/// longest line. The spawn marker becomes an open tile and its position is
/// kept in [`Level::spawn`]. With several markers the last one in row-major
/// order wins.
///
/// # Errors
///
/// - [`LevelFormatError::NoRows`] if the text has no lines
/// - [`LevelFormatError::NoColumns`] if every line is blank
/// - [`LevelFormatError::UnknownSymbol`] for anything besides `.`, `#`, `@`
///
/// # Examples
///
/// ```
/// use gridwalk::{parse_level, Position, TileKind};
///
/// let level = parse_level("##\n#").unwrap();
/// assert_eq!(level.grid.dimensions(), (2, 2));
/// assert_eq!(level.grid.tile_at(Position::new(1, 1)).unwrap(), TileKind::Open);
/// assert_eq!(level.spawn, None);
/// ```
pub fn parse_level(text: &str) -> Result<Level, LevelFormatError> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    if lines.is_empty() {
        return Err(LevelFormatError::NoRows);
    }

    let max_width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    if max_width == 0 {
        return Err(LevelFormatError::NoColumns);
    }

    let mut spawn = None;
    let mut spawn_markers = 0;
    let mut rows = Vec::with_capacity(lines.len());

    for (row, line) in lines.iter().enumerate() {
        let padded = line
            .chars()
            .chain(std::iter::repeat(PAD_SYMBOL))
            .take(max_width);

        let mut tiles = Vec::with_capacity(max_width);
        for (col, symbol) in padded.enumerate() {
            let kind = if symbol == SPAWN_SYMBOL {
                let position = Position::new(col as i32, row as i32);
                if let Some(previous) = spawn.replace(position) {
                    warn!(
                        "Duplicate spawn marker at {}, replacing the one at {}",
                        position, previous
                    );
                }
                spawn_markers += 1;
                TileKind::Open
            } else {
                TileKind::from_symbol(symbol)
                    .ok_or(LevelFormatError::UnknownSymbol { symbol, col, row })?
            };
            tiles.push(kind);
        }
        rows.push(tiles);
    }

    let grid = Grid::from_rows(rows).ok_or(LevelFormatError::NoColumns)?;

    Ok(Level {
        grid,
        spawn,
        spawn_markers,
    })
}

/// Reads and parses a level file.
///
/// # Errors
///
/// [`LevelFormatError::Missing`] if the file does not exist,
/// [`LevelFormatError::Unreadable`] for any other read failure, and anything
/// [`parse_level`] rejects.
pub fn load_level(path: &Path) -> Result<Level, LevelFormatError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LevelFormatError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            LevelFormatError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let level = parse_level(&text)?;
    let (rows, cols) = level.grid.dimensions();
    info!("Loaded level '{}' ({}x{})", path.display(), cols, rows);
    Ok(level)
}

/// Resolves a level name against the data directory.
///
/// Absolute names are used as they are.
pub fn resolve_level_path(data_dir: &Path, name: &str) -> PathBuf {
    data_dir.join(name.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_walled_room_with_spawn() {
        let level = parse_level("####\n#.@#\n####").unwrap();
        assert_eq!(level.grid.dimensions(), (3, 4));
        assert_eq!(level.spawn, Some(Position::new(2, 1)));
        assert_eq!(level.spawn_markers, 1);
        assert_eq!(
            level.grid.tile_at(Position::new(2, 1)).unwrap(),
            TileKind::Open
        );
    }

    #[test]
    fn test_short_rows_are_padded_with_open() {
        let level = parse_level("###\n#\n").unwrap();
        assert_eq!(level.grid.to_text(), "###\n#..");
    }

    #[test]
    fn test_lines_are_trimmed() {
        let level = parse_level("  #.#  \r\n#@\r\n").unwrap();
        assert_eq!(level.grid.dimensions(), (2, 3));
        assert_eq!(level.spawn, Some(Position::new(1, 1)));
    }

    #[test]
    fn test_blank_lines_become_open_rows() {
        let level = parse_level("##\n\n##").unwrap();
        assert_eq!(level.grid.to_text(), "##\n..\n##");
    }

    #[test]
    fn test_empty_text_has_no_rows() {
        assert!(matches!(parse_level(""), Err(LevelFormatError::NoRows)));
    }

    #[test]
    fn test_blank_text_has_no_columns() {
        assert!(matches!(
            parse_level("\n  \n"),
            Err(LevelFormatError::NoColumns)
        ));
    }

    #[test]
    fn test_unknown_symbol() {
        match parse_level("#.#\n#x#") {
            Err(LevelFormatError::UnknownSymbol { symbol, col, row }) => {
                assert_eq!((symbol, col, row), ('x', 1, 1));
            }
            other => panic!("expected UnknownSymbol, got {:?}", other),
        }
    }

    #[test]
    fn test_last_spawn_marker_wins() {
        let level = parse_level("@.\n.@").unwrap();
        assert_eq!(level.spawn, Some(Position::new(1, 1)));
        assert_eq!(level.spawn_markers, 2);
        assert!(level.grid.is_walkable(Position::new(0, 0)));
    }

    #[test]
    fn test_multibyte_symbol_reports_char_column() {
        assert!(matches!(
            parse_level("#é"),
            Err(LevelFormatError::UnknownSymbol { symbol: 'é', col: 1, row: 0 })
        ));
    }

    #[test]
    fn test_resolve_level_path() {
        let resolved = resolve_level_path(Path::new("data"), "levelex.txt\n");
        assert_eq!(resolved, Path::new("data").join("levelex.txt"));
    }
}
