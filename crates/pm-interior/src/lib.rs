//! Enclosure classification by right-hand boundary probing.
//!
//! Instead of a point-in-polygon test, the classifier re-walks the
//! extracted loop and tags the cells on one side of the boundary:
//! - The walk is anchored at the topmost-leftmost loop tile. That tile has
//!   no loop neighbor above or to its left, so it is a south-east bend,
//!   and heading east from it traverses the cycle clockwise. The
//!   right-hand side of travel therefore faces the enclosed region for
//!   the whole walk.
//! - At every step a probe ray runs from the entered tile along the
//!   travel direction rotated 90° clockwise, tagging non-loop tiles as
//!   interior until another loop tile stops it.
//! - Corner tiles expose two right-hand half-planes and are probed along
//!   both the arrival and the departure direction.
//!
//! Tiles are only ever tagged, never cleared, so repeated classification
//! of the same loop is a no-op.

use log::debug;
use pm_core::{Coord, Direction, Grid, PipeShape};
use pm_trace::PipeLoop;

/// Tags every non-loop tile enclosed by `path` as interior.
///
/// The grid must be the one `path` was extracted from, with loop tags in
/// place. Non-loop tiles outside the cycle are left untouched.
pub fn classify_interior(grid: &mut Grid, path: &PipeLoop) {
    let Some(anchor) = anchor_corner(path) else {
        return;
    };

    let anchor_alias = grid.get(anchor).expect("loop tiles are in bounds").alias();
    assert_eq!(
        anchor_alias,
        PipeShape::SouthEast,
        "topmost-leftmost loop tile must open south and east"
    );

    let mut coord = anchor;
    let mut travel = Direction::East;
    let mut tagged = 0usize;

    loop {
        let next = coord + travel.offset();
        tagged += probe_right(grid, next, travel);

        let tile = grid.get(next).expect("loop traversal stays in bounds");
        let turned = tile
            .alias()
            .exit_toward(travel)
            .expect("loop tiles always continue");
        if tile.is_corner() {
            tagged += probe_right(grid, next, turned);
        }

        if next == anchor {
            break;
        }

        coord = next;
        travel = turned;
    }

    debug!("tagged {tagged} interior tiles from anchor {anchor}");
}

/// The topmost-leftmost tile on the loop, the walk's anchor corner.
fn anchor_corner(path: &PipeLoop) -> Option<Coord> {
    path.tiles()
        .iter()
        .copied()
        .min_by_key(|coord| (coord.row, coord.col))
}

/// Walks the probe ray from `from`, tagging non-loop tiles until a loop
/// tile or the grid edge stops it. Returns the number of newly tagged
/// tiles.
fn probe_right(grid: &mut Grid, from: Coord, travel: Direction) -> usize {
    let step = travel.clockwise().offset();
    let mut tagged = 0usize;
    let mut coord = from + step;

    while let Some(tile) = grid.get_mut(coord) {
        if tile.is_loop {
            break;
        }
        if !tile.is_interior {
            tile.is_interior = true;
            tagged += 1;
        }
        coord = coord + step;
    }

    tagged
}
