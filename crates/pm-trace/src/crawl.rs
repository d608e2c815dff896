use log::{debug, trace};
use pm_core::{Coord, DIRECTIONS, Direction, Error, Grid, PipeShape};

use crate::resolve::resolve_start;

/// The closed cycle through the start tile, in traversal order.
///
/// Coordinates run from the first step after the start through the start
/// revisit inclusive, so the start appears exactly once and [`len`] equals
/// the number of loop-tagged tiles on the grid.
///
/// [`len`]: PipeLoop::len
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeLoop {
    start: Coord,
    tiles: Vec<Coord>,
}

impl PipeLoop {
    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Traversal-ordered coordinates; the last entry is the start.
    pub fn tiles(&self) -> &[Coord] {
        &self.tiles
    }

    /// Steps from the start to the farthest tile on the loop.
    pub fn farthest_distance(&self) -> usize {
        self.tiles.len() / 2
    }
}

/// Resolves the start tile and walks the unique cycle through it, marking
/// every visited tile `is_loop`.
///
/// The initial travel direction is the first table-order opening of the
/// resolved start alias, so extraction is deterministic for a given map.
pub fn extract_loop(grid: &mut Grid) -> Result<PipeLoop, Error> {
    let start = resolve_start(grid)?;

    let start_tile = grid
        .get_mut(start)
        .expect("start coordinate is in bounds");
    start_tile.is_loop = true;
    let alias = start_tile.alias();

    let mut travel = first_exit(alias).expect("resolved start alias has two openings");
    let mut coord = start;
    let mut tiles = Vec::new();

    loop {
        let next = coord + travel.offset();
        let tile = grid.get_mut(next).ok_or(Error::OutOfBounds { at: next })?;
        tile.is_loop = true;
        tiles.push(next);
        trace!("stepped {travel:?} to {next}, found {:?}", tile.alias());

        if tile.symbol() == PipeShape::Start {
            break;
        }

        travel = tile
            .alias()
            .exit_toward(travel)
            .ok_or(Error::BrokenLoop { at: next })?;
        coord = next;
    }

    debug!("loop closed through {start} after {} tiles", tiles.len());
    Ok(PipeLoop { start, tiles })
}

fn first_exit(alias: PipeShape) -> Option<Direction> {
    DIRECTIONS.into_iter().find(|dir| alias.has_opening(*dir))
}
