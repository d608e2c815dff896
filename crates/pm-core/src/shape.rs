use crate::geom::Direction;

/// The cell kinds a map character can denote.
///
/// Bend names spell the two cardinal directions the shape connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeShape {
    Ground,
    Vertical,
    Horizontal,
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
    Start,
}

/// Fixed display order for histograms and renderings.
pub const SHAPES: [PipeShape; 8] = [
    PipeShape::Ground,
    PipeShape::SouthEast,
    PipeShape::Horizontal,
    PipeShape::SouthWest,
    PipeShape::Vertical,
    PipeShape::NorthEast,
    PipeShape::NorthWest,
    PipeShape::Start,
];

impl PipeShape {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Ground),
            '|' => Some(Self::Vertical),
            '-' => Some(Self::Horizontal),
            'L' => Some(Self::NorthEast),
            'J' => Some(Self::NorthWest),
            '7' => Some(Self::SouthWest),
            'F' => Some(Self::SouthEast),
            'S' => Some(Self::Start),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Ground => '.',
            Self::Vertical => '|',
            Self::Horizontal => '-',
            Self::NorthEast => 'L',
            Self::NorthWest => 'J',
            Self::SouthWest => '7',
            Self::SouthEast => 'F',
            Self::Start => 'S',
        }
    }

    /// The two cardinal openings of a pipe shape.
    ///
    /// Ground has none, and the start's openings are unknown until its
    /// alias is resolved.
    pub fn openings(self) -> Option<[Direction; 2]> {
        match self {
            Self::Vertical => Some([Direction::North, Direction::South]),
            Self::Horizontal => Some([Direction::East, Direction::West]),
            Self::NorthEast => Some([Direction::North, Direction::East]),
            Self::NorthWest => Some([Direction::North, Direction::West]),
            Self::SouthWest => Some([Direction::South, Direction::West]),
            Self::SouthEast => Some([Direction::South, Direction::East]),
            Self::Ground | Self::Start => None,
        }
    }

    pub fn has_opening(self, dir: Direction) -> bool {
        self.openings().is_some_and(|[a, b]| a == dir || b == dir)
    }

    /// Continuation of travel through this shape: the opening that is not
    /// the side the traversal arrived on.
    pub fn exit_toward(self, travel: Direction) -> Option<Direction> {
        let entered = travel.opposite();
        let [a, b] = self.openings()?;
        if a == entered {
            Some(b)
        } else if b == entered {
            Some(a)
        } else {
            None
        }
    }

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Self::NorthEast | Self::NorthWest | Self::SouthWest | Self::SouthEast
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{PipeShape, SHAPES};
    use crate::geom::{DIRECTIONS, Direction};

    #[test]
    fn char_round_trip_over_display_order() {
        for shape in SHAPES {
            assert_eq!(PipeShape::from_char(shape.to_char()), Some(shape));
        }
        assert_eq!(PipeShape::from_char('X'), None);
        assert_eq!(PipeShape::from_char(' '), None);
    }

    #[test]
    fn every_pipe_has_exactly_two_openings() {
        for shape in SHAPES {
            match shape {
                PipeShape::Ground | PipeShape::Start => {
                    assert_eq!(shape.openings(), None);
                    for dir in DIRECTIONS {
                        assert!(!shape.has_opening(dir));
                    }
                }
                _ => {
                    let count = DIRECTIONS
                        .iter()
                        .filter(|dir| shape.has_opening(**dir))
                        .count();
                    assert_eq!(count, 2, "{shape:?}");
                }
            }
        }
    }

    #[test]
    fn opening_table_matches_symbols() {
        assert!(PipeShape::Vertical.has_opening(Direction::North));
        assert!(PipeShape::Vertical.has_opening(Direction::South));
        assert!(PipeShape::SouthEast.has_opening(Direction::South));
        assert!(PipeShape::SouthEast.has_opening(Direction::East));
        assert!(!PipeShape::SouthEast.has_opening(Direction::North));
        assert!(PipeShape::NorthWest.has_opening(Direction::West));
        assert!(!PipeShape::Horizontal.has_opening(Direction::South));
    }

    #[test]
    fn exit_continues_through_straights_and_turns_at_bends() {
        // Traveling north through a vertical pipe keeps heading north.
        assert_eq!(
            PipeShape::Vertical.exit_toward(Direction::North),
            Some(Direction::North)
        );
        // Traveling south into an L bend turns east.
        assert_eq!(
            PipeShape::NorthEast.exit_toward(Direction::South),
            Some(Direction::East)
        );
        // Traveling west into an L bend turns north.
        assert_eq!(
            PipeShape::NorthEast.exit_toward(Direction::West),
            Some(Direction::North)
        );
        assert_eq!(
            PipeShape::SouthWest.exit_toward(Direction::East),
            Some(Direction::South)
        );
    }

    #[test]
    fn exit_rejects_sides_without_an_opening() {
        // A vertical pipe entered from the west has no continuation.
        assert_eq!(PipeShape::Vertical.exit_toward(Direction::East), None);
        assert_eq!(PipeShape::Ground.exit_toward(Direction::North), None);
        assert_eq!(PipeShape::Start.exit_toward(Direction::North), None);
    }

    #[test]
    fn corners_are_the_four_bends() {
        let corners: Vec<_> = SHAPES.into_iter().filter(|s| s.is_corner()).collect();
        assert_eq!(
            corners,
            vec![
                PipeShape::SouthEast,
                PipeShape::SouthWest,
                PipeShape::NorthEast,
                PipeShape::NorthWest,
            ]
        );
    }
}
