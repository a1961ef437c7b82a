use std::fmt;

use core_2048::{line, Direction, Tile, DEFAULT_SIZE};

use crate::random::RandomSource;

/// Errors produced when building a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    #[display("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyDimension { rows: usize, cols: usize },
    #[display("expected {expected} cell values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[display("cell {index} holds {value}, which is not 0 or a power of two")]
    InvalidValue { index: usize, value: u32 },
}

/// What a single slide did to the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    pub changed: bool,
    pub score_delta: u64,
    pub merges: u32,
}

/// A fixed-size board of tiles stored in row-major order.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

impl Grid {
    /// Creates a grid with every cell empty.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimension { rows, cols });
        }

        Ok(Self::empty(rows, cols))
    }

    /// Creates a grid from row-major cell values.
    pub fn from_values(rows: usize, cols: usize, values: &[u32]) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, cols)?;

        if values.len() != grid.size() {
            return Err(GridError::ShapeMismatch {
                expected: grid.size(),
                actual: values.len(),
            });
        }

        for (index, &value) in values.iter().enumerate() {
            if !Tile::is_valid_value(value) {
                return Err(GridError::InvalidValue { index, value });
            }

            grid.set_value(index, value);
        }

        Ok(grid)
    }

    fn empty(rows: usize, cols: usize) -> Self {
        let tiles = (0..rows * cols)
            .map(|index| Tile::empty(index / cols, index % cols))
            .collect();

        Self { rows, cols, tiles }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        (row < self.rows && col < self.cols).then(|| &self.tiles[row * self.cols + col])
    }

    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.tiles.iter().map(Tile::value)
    }

    pub fn empty_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_empty()).count()
    }

    pub fn max_value(&self) -> u32 {
        self.values().max().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.values().map(u64::from).sum()
    }

    fn set_value(&mut self, index: usize, value: u32) {
        self.tiles[index] = Tile::new(value, index / self.cols, index % self.cols);
    }

    /// Places `value` in a uniformly chosen empty cell.
    ///
    /// Empty cells are enumerated in row-major order. Returns false, leaving the grid
    /// untouched, when no cell is empty.
    pub fn spawn_random_tile(&mut self, rng: &mut impl RandomSource, value: u32) -> bool {
        let empty_cells: Vec<usize> = self
            .tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_empty())
            .map(|(index, _)| index)
            .collect();

        if empty_cells.is_empty() {
            return false;
        }

        let index = empty_cells[rng.choose(empty_cells.len())];
        self.set_value(index, value);

        log::trace!(
            "spawned {value} at ({}, {})",
            index / self.cols,
            index % self.cols
        );

        true
    }

    /// Empties every cell.
    pub fn restart(&mut self) {
        for index in 0..self.tiles.len() {
            self.set_value(index, 0);
        }
    }

    fn line_count(&self, direction: Direction) -> usize {
        if direction.is_vertical() {
            self.cols
        } else {
            self.rows
        }
    }

    /// Indices of one row or column in axis order.
    fn line_indices(&self, direction: Direction, line_index: usize) -> impl Iterator<Item = usize> {
        let (start, step, len) = if direction.is_vertical() {
            (line_index, self.cols, self.rows)
        } else {
            (line_index * self.cols, 1, self.cols)
        };

        (0..len).map(move |i| start + i * step)
    }

    fn line_values(&self, direction: Direction, line_index: usize) -> Vec<u32> {
        self.line_indices(direction, line_index)
            .map(|index| self.tiles[index].value())
            .collect()
    }

    /// Lines that a slide towards `direction` would change, with their new contents.
    fn changed_lines(
        &self,
        direction: Direction,
    ) -> impl Iterator<Item = (usize, line::SlidLine)> + '_ {
        (0..self.line_count(direction)).filter_map(move |line_index| {
            let original = self.line_values(direction, line_index);
            let slid = line::slide_line(&original, direction.targets_far_end());

            slid.changed_from(&original).then_some((line_index, slid))
        })
    }

    /// Slides every line towards `direction`, merging equal neighbours.
    ///
    /// Lines that would not change are left untouched.
    pub fn slide_and_merge(&mut self, direction: Direction) -> MoveOutcome {
        let changed: Vec<_> = self.changed_lines(direction).collect();
        let mut outcome = MoveOutcome::default();

        for (line_index, slid) in changed {
            outcome.changed = true;
            outcome.score_delta += slid.score;
            outcome.merges += slid.merges;

            let indices: Vec<usize> = self.line_indices(direction, line_index).collect();

            for &index in &indices {
                self.set_value(index, 0);
            }

            for (index, value) in indices.into_iter().zip(slid.values) {
                self.set_value(index, value);
            }
        }

        outcome
    }

    /// Computes what [`Grid::slide_and_merge`] would do without changing the grid.
    pub fn preview(&self, direction: Direction) -> MoveOutcome {
        self.changed_lines(direction)
            .fold(MoveOutcome::default(), |outcome, (_, slid)| MoveOutcome {
                changed: true,
                score_delta: outcome.score_delta + slid.score,
                merges: outcome.merges + slid.merges,
            })
    }

    pub fn has_legal_move(&self) -> bool {
        Direction::iter().any(|direction| self.preview(direction).changed)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.cols)?;

        for row in self.tiles.chunks(self.cols) {
            for tile in row {
                write!(f, "{:>6}", tile.value())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
