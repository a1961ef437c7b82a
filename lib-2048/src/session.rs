use core_2048::{Command, Direction, Tile};

use crate::{
    grid::{Grid, MoveOutcome},
    random::RandomSource,
};

/// A read-only view of a session, taken once per frame by whatever draws it.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub rows: usize,
    pub cols: usize,
    pub tiles: &'a [Tile],
    pub score: u64,
    pub high_score: u64,
    pub has_legal_move: bool,
}

impl Snapshot<'_> {
    pub fn max_value(&self) -> u32 {
        self.tiles.iter().map(Tile::value).max().unwrap_or(0)
    }
}

/// One running game: a grid plus its score bookkeeping.
///
/// The high score survives restarts for as long as the session lives.
#[derive(Debug)]
pub struct GameSession<R> {
    grid: Grid,
    score: u64,
    high_score: u64,
    rng: R,
}

impl<R> GameSession<R>
where
    R: RandomSource,
{
    /// Starts a new game on `grid`, which is cleared and seeded with two tiles.
    pub fn new(grid: Grid, rng: R) -> Self {
        let mut session = Self::resume(grid, rng, 0, 0);
        session.restart();

        session
    }

    /// Continues from an existing position without spawning anything.
    pub fn resume(grid: Grid, rng: R, score: u64, high_score: u64) -> Self {
        Self {
            grid,
            score,
            high_score: high_score.max(score),
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn score(&self) -> u64 {
        self.score
    }

    pub const fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn has_legal_move(&self) -> bool {
        self.grid.has_legal_move()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            tiles: self.grid.tiles(),
            score: self.score,
            high_score: self.high_score,
            has_legal_move: self.grid.has_legal_move(),
        }
    }

    /// Slides the grid and, if anything moved, scores the merges and spawns a tile.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.grid.slide_and_merge(direction);

        if !outcome.changed {
            log::debug!("move {direction} changed nothing");
            return outcome;
        }

        self.score += outcome.score_delta;
        self.high_score = self.high_score.max(self.score);

        // One spawn in ten is a 4.
        let value = if self.rng.choose(10) == 0 { 4 } else { 2 };
        self.grid.spawn_random_tile(&mut self.rng, value);

        log::debug!(
            "move {direction}: {} merges, +{} (score {}, best {})",
            outcome.merges,
            outcome.score_delta,
            self.score,
            self.high_score
        );

        outcome
    }

    /// Clears the board and score, keeping the high score, and places two 2s.
    pub fn restart(&mut self) {
        self.grid.restart();
        self.score = 0;

        for _ in 0..2 {
            self.grid.spawn_random_tile(&mut self.rng, 2);
        }

        log::info!(
            "new {}x{} game (best {})",
            self.grid.rows(),
            self.grid.cols(),
            self.high_score
        );
    }

    /// Runs a command. Returns the move outcome for [`Command::Move`].
    pub fn apply(&mut self, command: Command) -> Option<MoveOutcome> {
        match command {
            Command::Move(direction) => Some(self.apply_move(direction)),
            Command::Restart => {
                self.restart();
                None
            }
        }
    }
}
