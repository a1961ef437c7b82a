pub mod command;
pub mod direction;
pub mod line;
pub mod palette;
pub mod tile;

pub use command::Command;
pub use direction::Direction;
pub use tile::Tile;

/// Default number of rows and columns on a board.
pub const DEFAULT_SIZE: usize = 4;
