//! Read-only aggregation over an analyzed grid.
//!
//! Nothing here mutates tiles; the census and the renderings read the
//! state left behind by loop extraction and enclosure classification.

use core::fmt;

use pm_core::{Coord, Grid, PipeShape, SHAPES, Tile};
use pm_trace::PipeLoop;

/// Tile census for one analyzed map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub rows: usize,
    pub cols: usize,
    /// Count per raw symbol, in fixed display order.
    pub symbol_counts: Vec<(PipeShape, usize)>,
    pub loop_tiles: usize,
    pub farthest_distance: usize,
    pub interior_tiles: usize,
    pub exterior_tiles: usize,
}

impl Report {
    pub fn total_tiles(&self) -> usize {
        self.rows * self.cols
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "map is {}x{}, {} tiles",
            self.rows,
            self.cols,
            self.total_tiles()
        )?;

        write!(f, "symbols:")?;
        for (shape, count) in &self.symbol_counts {
            write!(f, " {}={count}", shape.to_char())?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "loop tiles: {} (farthest {})",
            self.loop_tiles, self.farthest_distance
        )?;
        writeln!(f, "interior tiles: {}", self.interior_tiles)?;
        write!(f, "exterior tiles: {}", self.exterior_tiles)
    }
}

/// Aggregates counts over the final grid.
pub fn summarize(grid: &Grid, path: &PipeLoop) -> Report {
    let mut counts = [0usize; SHAPES.len()];
    let mut loop_tiles = 0usize;
    let mut interior_tiles = 0usize;
    let mut exterior_tiles = 0usize;

    for tile in grid.iter() {
        let slot = SHAPES
            .iter()
            .position(|s| *s == tile.symbol())
            .expect("display order covers every symbol");
        counts[slot] += 1;

        if tile.is_loop {
            loop_tiles += 1;
        } else if tile.is_interior {
            interior_tiles += 1;
        } else {
            exterior_tiles += 1;
        }
    }

    Report {
        rows: grid.rows(),
        cols: grid.cols(),
        symbol_counts: SHAPES.into_iter().zip(counts).collect(),
        loop_tiles,
        farthest_distance: path.farthest_distance(),
        interior_tiles,
        exterior_tiles,
    }
}

/// Renders the raw symbol map, one row per line.
pub fn render_symbols(grid: &Grid) -> String {
    render_with(grid, |tile| tile.symbol().to_char())
}

/// Renders the enclosure map: loop tiles keep their symbol, interior
/// tiles print `I`, exterior ground prints `O`.
pub fn render_enclosure(grid: &Grid) -> String {
    render_with(grid, |tile| {
        if tile.is_loop {
            tile.symbol().to_char()
        } else if tile.is_interior {
            'I'
        } else if tile.is_ground() {
            'O'
        } else {
            tile.symbol().to_char()
        }
    })
}

fn render_with(grid: &Grid, cell: impl Fn(&Tile) -> char) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 1));

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let tile = grid
                .get(Coord::new(row as i32, col as i32))
                .expect("in-bounds render access");
            out.push(cell(tile));
        }
        out.push('\n');
    }

    out
}
