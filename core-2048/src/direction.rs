/// A direction tiles can be pushed towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Direction {
    #[display("up")]
    Up,
    #[display("down")]
    Down,
    #[display("right")]
    Right,
    #[display("left")]
    Left,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Right, Self::Left];

    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// Whether the lines for this direction are columns rather than rows.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Whether the target edge is the end of a line with the highest index.
    pub const fn targets_far_end(self) -> bool {
        matches!(self, Self::Down | Self::Right)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn all_lists_each_direction_once() {
        let directions: HashSet<Direction> = Direction::iter().collect();

        assert_eq!(directions.len(), Direction::ALL.len());
    }

    #[test]
    fn axis_and_edge() {
        assert!(Direction::Up.is_vertical() && !Direction::Up.targets_far_end());
        assert!(Direction::Down.is_vertical() && Direction::Down.targets_far_end());
        assert!(!Direction::Right.is_vertical() && Direction::Right.targets_far_end());
        assert!(!Direction::Left.is_vertical() && !Direction::Left.targets_far_end());
    }
}
