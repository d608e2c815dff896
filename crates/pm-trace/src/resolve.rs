use log::debug;
use pm_core::{Coord, DIRECTIONS, Direction, Error, Grid, PipeShape};

/// 4-bit encoding of which neighbors open back toward `coord`, one bit per
/// direction in table order (bit 0 = north, bit 3 = west).
pub fn neighbor_signature(grid: &Grid, coord: Coord) -> u8 {
    let mut signature = 0u8;
    for (bit, dir) in DIRECTIONS.into_iter().enumerate() {
        if opens_back(grid, coord, dir) {
            signature |= 1 << bit;
        }
    }
    signature
}

#[inline]
fn opens_back(grid: &Grid, coord: Coord, dir: Direction) -> bool {
    grid.neighbor(coord, dir)
        .is_some_and(|tile| tile.alias().has_opening(dir.opposite()))
}

/// The unique two-opening shape matching a neighbor signature, if any.
fn shape_for_signature(signature: u8) -> Option<PipeShape> {
    match signature {
        0b0011 => Some(PipeShape::NorthEast),
        0b0101 => Some(PipeShape::Vertical),
        0b0110 => Some(PipeShape::SouthEast),
        0b1001 => Some(PipeShape::NorthWest),
        0b1010 => Some(PipeShape::Horizontal),
        0b1100 => Some(PipeShape::SouthWest),
        _ => None,
    }
}

/// Finds the start tile and assigns its inferred shape as the alias.
///
/// Returns the start coordinate. Fails with [`Error::MissingStart`] when
/// the map has no start tile and [`Error::AmbiguousStart`] when the
/// neighbor signature does not name exactly two openings.
pub fn resolve_start(grid: &mut Grid) -> Result<Coord, Error> {
    let start = grid.find_start().ok_or(Error::MissingStart)?;
    let signature = neighbor_signature(grid, start);
    let shape =
        shape_for_signature(signature).ok_or(Error::AmbiguousStart { signature })?;
    debug!("start {start} resolved as {shape:?} from signature {signature:#06b}");

    grid.get_mut(start)
        .expect("start coordinate is in bounds")
        .resolve_alias(shape);
    Ok(start)
}

#[cfg(test)]
mod tests {
    use super::{neighbor_signature, resolve_start, shape_for_signature};
    use pm_core::{Coord, Error, Grid, PipeShape};

    #[test]
    fn signature_table_covers_all_two_bit_values() {
        let two_bit: Vec<u8> = (0u8..16).filter(|s| s.count_ones() == 2).collect();
        for signature in 0u8..16 {
            let shape = shape_for_signature(signature);
            if two_bit.contains(&signature) {
                assert!(shape.is_some(), "signature {signature:#06b}");
            } else {
                assert_eq!(shape, None, "signature {signature:#06b}");
            }
        }
    }

    #[test]
    fn signature_reads_neighbors_in_table_order() {
        // North and west neighbors open back; east and south do not.
        let grid = Grid::parse(".|.\n-S.\n...\n").expect("valid map");
        assert_eq!(neighbor_signature(&grid, Coord::new(1, 1)), 0b1001);
    }

    #[test]
    fn resolves_each_two_opening_shape() {
        let cases = [
            (".|.\n.S.\n.|.\n", PipeShape::Vertical),
            ("...\n-S-\n...\n", PipeShape::Horizontal),
            (".|.\n.S-\n...\n", PipeShape::NorthEast),
            (".|.\n-S.\n...\n", PipeShape::NorthWest),
            ("...\n-S.\n.|.\n", PipeShape::SouthWest),
            ("...\n.S-\n.|.\n", PipeShape::SouthEast),
        ];

        for (map, expected) in cases {
            let mut grid = Grid::parse(map).expect("valid map");
            let start = resolve_start(&mut grid).expect("resolvable start");
            assert_eq!(start, Coord::new(1, 1));
            let tile = grid.get(start).expect("in bounds");
            assert_eq!(tile.symbol(), PipeShape::Start);
            assert_eq!(tile.alias(), expected, "{map}");
        }
    }

    #[test]
    fn missing_start_is_reported() {
        let mut grid = Grid::parse("F7\nLJ\n").expect("valid map");
        assert_eq!(resolve_start(&mut grid), Err(Error::MissingStart));
    }

    #[test]
    fn three_open_neighbors_are_ambiguous() {
        let mut grid = Grid::parse(".|.\n-S-\n...\n").expect("valid map");
        assert_eq!(
            resolve_start(&mut grid),
            Err(Error::AmbiguousStart { signature: 0b1011 })
        );
    }

    #[test]
    fn too_few_open_neighbors_are_ambiguous() {
        let mut grid = Grid::parse("...\n.S-\n...\n").expect("valid map");
        assert_eq!(
            resolve_start(&mut grid),
            Err(Error::AmbiguousStart { signature: 0b0010 })
        );

        let mut grid = Grid::parse("S").expect("valid map");
        assert_eq!(
            resolve_start(&mut grid),
            Err(Error::AmbiguousStart { signature: 0 })
        );
    }

    #[test]
    fn neighbors_that_point_elsewhere_do_not_count() {
        // The eastern pipe is horizontal but the northern one only opens
        // north and east, so it does not connect back down to the start.
        let grid = Grid::parse(".L.\n.S-\n.|.\n").expect("valid map");
        assert_eq!(neighbor_signature(&grid, Coord::new(1, 1)), 0b0110);
    }
}
