//! ASCII maze layouts

use gloam_nav::Cell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::MazeGrid;

/// Layout parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// Layout text had no rows
    #[error("layout is empty")]
    Empty,
    /// Row length differs from the first row
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    /// Unrecognized tile character
    #[error("unknown tile '{tile}' at ({x}, {z})")]
    UnknownTile { tile: char, x: i32, z: i32 },
    /// More than one player spawn marker
    #[error("duplicate player spawn at ({x}, {z})")]
    DuplicatePlayerSpawn { x: i32, z: i32 },
}

/// A parsed maze layout: the occupancy grid plus everything the markers
/// placed on it.
///
/// Tiles: `#` wall, `.` open floor, `P` player spawn, `G` ghost spawn,
/// `*` energy pellet. Marker tiles are open floor underneath. The first
/// text line is row z = 0; leading/trailing whitespace per line is
/// ignored so layouts can be indented inside config files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MazeLayout {
    pub grid: MazeGrid,
    pub player_spawn: Option<Cell>,
    pub ghost_spawns: Vec<Cell>,
    pub pellets: Vec<Cell>,
}

impl MazeLayout {
    /// Parse a layout from ASCII text.
    ///
    /// Blocked cells on the perimeter are marked as boundary walls and
    /// become unbreakable.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(LayoutError::Empty);
        }

        let width = rows[0].chars().count();
        let height = rows.len();
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    row,
                    found,
                    expected: width,
                });
            }
        }

        let mut grid = MazeGrid::new(width as i32, height as i32);
        let mut player_spawn = None;
        let mut ghost_spawns = Vec::new();
        let mut pellets = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let z = row as i32;
            for (col, tile) in line.chars().enumerate() {
                let x = col as i32;
                match tile {
                    '#' => grid.set_blocked(x, z, true),
                    '.' => {}
                    'P' => {
                        if player_spawn.is_some() {
                            return Err(LayoutError::DuplicatePlayerSpawn { x, z });
                        }
                        player_spawn = Some(Cell::new(x, z));
                    }
                    'G' => ghost_spawns.push(Cell::new(x, z)),
                    '*' => pellets.push(Cell::new(x, z)),
                    _ => return Err(LayoutError::UnknownTile { tile, x, z }),
                }
            }
        }

        // Perimeter walls form the unbreakable shell
        for z in 0..grid.height() {
            for x in 0..grid.width() {
                let on_perimeter =
                    x == 0 || z == 0 || x == grid.width() - 1 || z == grid.height() - 1;
                if on_perimeter && grid.is_blocked(x, z) {
                    grid.set_boundary(x, z, true);
                }
            }
        }

        Ok(Self {
            grid,
            player_spawn,
            ghost_spawns,
            pellets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = "\
        #####
        #P.*#
        #.#.#
        #*.G#
        #####";

    #[test]
    fn test_parse_markers() {
        let layout = MazeLayout::parse(LAYOUT).unwrap();

        assert_eq!(layout.grid.width(), 5);
        assert_eq!(layout.grid.height(), 5);
        assert_eq!(layout.player_spawn, Some(Cell::new(1, 1)));
        assert_eq!(layout.ghost_spawns, vec![Cell::new(3, 3)]);
        assert_eq!(layout.pellets, vec![Cell::new(3, 1), Cell::new(1, 3)]);
    }

    #[test]
    fn test_marker_tiles_are_open() {
        let layout = MazeLayout::parse(LAYOUT).unwrap();

        assert!(!layout.grid.is_blocked(1, 1));
        assert!(!layout.grid.is_blocked(3, 3));
        assert!(!layout.grid.is_blocked(3, 1));
        assert!(layout.grid.is_blocked(2, 2));
    }

    #[test]
    fn test_perimeter_walls_are_boundary() {
        let layout = MazeLayout::parse(LAYOUT).unwrap();

        assert!(layout.grid.is_boundary(0, 0));
        assert!(layout.grid.is_boundary(4, 2));
        assert!(layout.grid.is_boundary(2, 4));
        // Interior wall is breakable
        assert!(!layout.grid.is_boundary(2, 2));
    }

    #[test]
    fn test_empty_layout() {
        assert_eq!(MazeLayout::parse("").unwrap_err(), LayoutError::Empty);
        assert_eq!(MazeLayout::parse("  \n\n  ").unwrap_err(), LayoutError::Empty);
    }

    #[test]
    fn test_ragged_rows() {
        let error = MazeLayout::parse("###\n####\n###").unwrap_err();
        assert_eq!(
            error,
            LayoutError::RaggedRow {
                row: 1,
                found: 4,
                expected: 3
            }
        );
    }

    #[test]
    fn test_unknown_tile() {
        let error = MazeLayout::parse("###\n#?#\n###").unwrap_err();
        assert_eq!(
            error,
            LayoutError::UnknownTile {
                tile: '?',
                x: 1,
                z: 1
            }
        );
    }

    #[test]
    fn test_duplicate_player_spawn() {
        let error = MazeLayout::parse("####\n#PP#\n####").unwrap_err();
        assert_eq!(error, LayoutError::DuplicatePlayerSpawn { x: 2, z: 1 });
    }
}
