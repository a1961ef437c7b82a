use crate::direction::Direction;

/// A request fed into a game session by whatever drives it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Command {
    #[display("move {_0}")]
    Move(Direction),
    #[display("restart")]
    Restart,
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Self::Move(direction)
    }
}
