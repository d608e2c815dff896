use crate::error::Error;
use crate::geom::{Coord, Direction};
use crate::shape::PipeShape;
use crate::tile::Tile;

/// Rectangular owned container of tiles, addressed by [`Coord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Parses a rectangular character map, one row per line.
    ///
    /// All rows must have equal length; ragged input is a caller error and
    /// asserted. Characters outside the allowed set fail with
    /// [`Error::InvalidSymbol`].
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut tiles = Vec::new();
        let mut rows = 0usize;
        let mut cols = 0usize;

        for (row, line) in text.lines().enumerate() {
            let mut row_len = 0usize;
            for (col, c) in line.chars().enumerate() {
                let at = Coord::new(row as i32, col as i32);
                let symbol =
                    PipeShape::from_char(c).ok_or(Error::InvalidSymbol { symbol: c, at })?;
                tiles.push(Tile::new(symbol, at));
                row_len += 1;
            }

            if row == 0 {
                cols = row_len;
            } else {
                assert_eq!(row_len, cols, "map rows must have equal length");
            }
            rows += 1;
        }

        Ok(Self { rows, cols, tiles })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, coord: Coord) -> Option<&Tile> {
        self.index_of(coord).map(|i| &self.tiles[i])
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Tile> {
        let i = self.index_of(coord)?;
        Some(&mut self.tiles[i])
    }

    /// The tile one step toward `dir`, if it is in bounds.
    pub fn neighbor(&self, coord: Coord, dir: Direction) -> Option<&Tile> {
        self.get(coord + dir.offset())
    }

    /// Coordinate of the start tile, if the map has one.
    pub fn find_start(&self) -> Option<Coord> {
        self.tiles
            .iter()
            .find(|t| t.symbol() == PipeShape::Start)
            .map(|t| t.coord())
    }

    /// Row-major iteration over all tiles.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        if coord.row < 0 || coord.col < 0 {
            return None;
        }
        let (row, col) = (coord.row as usize, coord.col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }
}
