pub use core_2048::*;

pub mod grid;
pub mod random;
pub mod session;

pub use grid::{Grid, GridError, MoveOutcome};
pub use random::{DefaultSource, RandomSource, RngSource};
pub use session::{GameSession, Snapshot};
