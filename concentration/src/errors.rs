use crate::{InvalidPick, OutOfRange, Phase};

/// The error type for driving a [`Game`](crate::Game).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// The player's input was rejected. The game state is unchanged and
    /// the player should be asked again.
    InvalidPick(InvalidPick),
    /// A board access outside the grid. Indicates a bug, since picks are
    /// validated before they reach the board.
    OutOfRange(OutOfRange),
    /// A pick or resolve was requested in a phase that does not allow it.
    UnexpectedPhase { phase: Phase },
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::InvalidPick(err) => Some(err),
            GameError::OutOfRange(err) => Some(err),
            GameError::UnexpectedPhase { .. } => None,
        }
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidPick(_) => write!(f, "The pick was not accepted"),
            GameError::OutOfRange(_) => write!(f, "Tried to access a card outside of the board"),
            GameError::UnexpectedPhase { phase } => {
                write!(f, "This action is not possible while {}", phase)
            }
        }
    }
}

impl From<InvalidPick> for GameError {
    fn from(err: InvalidPick) -> Self {
        GameError::InvalidPick(err)
    }
}

impl From<OutOfRange> for GameError {
    fn from(err: OutOfRange) -> Self {
        GameError::OutOfRange(err)
    }
}
