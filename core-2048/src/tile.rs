/// The content of a single cell.
///
/// `row` and `col` always mirror the slot the tile occupies in its grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    value: u32,
    row: usize,
    col: usize,
}

impl Tile {
    pub const fn new(value: u32, row: usize, col: usize) -> Self {
        Self { value, row, col }
    }

    pub const fn empty(row: usize, col: usize) -> Self {
        Self::new(0, row, col)
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    pub const fn row(&self) -> usize {
        self.row
    }

    pub const fn col(&self) -> usize {
        self.col
    }

    pub const fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Returns true for 0 or a power of two of at least 2.
    pub const fn is_valid_value(value: u32) -> bool {
        value == 0 || (value >= 2 && value.is_power_of_two())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tile_has_zero_value() {
        let tile = Tile::empty(2, 3);

        assert!(tile.is_empty());
        assert_eq!((tile.row(), tile.col()), (2, 3));
        assert!(!Tile::new(2, 0, 0).is_empty());
    }

    #[test]
    fn valid_values() {
        assert!(Tile::is_valid_value(0));
        assert!(Tile::is_valid_value(2));
        assert!(Tile::is_valid_value(2048));
        assert!(!Tile::is_valid_value(1));
        assert!(!Tile::is_valid_value(3));
        assert!(!Tile::is_valid_value(96));
    }
}
