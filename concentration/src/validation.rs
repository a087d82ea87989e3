use crate::{Board, Cell, Pick};

/// Why a line of player input was not accepted as a pick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InvalidPick {
    /// Not of the form `row,col`.
    Syntax,
    /// At least one coordinate is off the board.
    Range,
    /// The card at this position has already been matched.
    Matched,
    /// The card at this position is already face-up.
    Visible,
}

impl std::error::Error for InvalidPick {}

impl std::fmt::Display for InvalidPick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            InvalidPick::Syntax => "Invalid Syntax.",
            InvalidPick::Range => "Position out of range",
            InvalidPick::Matched => "Card already matched",
            InvalidPick::Visible => "Same card",
        };
        f.write_str(msg)
    }
}

type Check = fn(&Board, &str) -> bool;

/// One step of the validation pipeline.
#[derive(Copy, Clone)]
pub struct Stage {
    pub kind: InvalidPick,
    check: Check,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage").field("kind", &self.kind).finish()
    }
}

// Every stage after the first may assume that the earlier ones passed.
const STAGES: [Stage; 4] = [
    Stage {
        kind: InvalidPick::Syntax,
        check: |_, input| Pick::parse(input).is_some(),
    },
    Stage {
        kind: InvalidPick::Range,
        check: |board, input| Pick::parse(input).is_some_and(|pick| board.contains(pick)),
    },
    Stage {
        kind: InvalidPick::Matched,
        check: |board, input| target(board, input).is_some_and(|cell| !cell.is_matched()),
    },
    Stage {
        kind: InvalidPick::Visible,
        check: |board, input| target(board, input).is_some_and(|cell| !cell.is_visible()),
    },
];

fn target<'a>(board: &'a Board, input: &str) -> Option<&'a Cell> {
    Pick::parse(input).and_then(|pick| board.get(pick).ok())
}

/// Checks raw player input against the board, one stage at a time.
///
/// The stages run in a fixed order and the first failing one determines the
/// error, so e.g. `99,99` on a small board is a [`InvalidPick::Range`] error
/// and never a [`InvalidPick::Syntax`] error.
#[derive(Clone, Debug)]
pub struct Validator {
    stages: [Stage; 4],
}

impl Validator {
    pub fn new() -> Self {
        Self { stages: STAGES }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Returns the pick if all stages pass, or the first stage that failed.
    pub fn validate(&self, board: &Board, input: &str) -> Result<Pick, InvalidPick> {
        for stage in &self.stages {
            if !(stage.check)(board, input) {
                return Err(stage.kind);
            }
        }
        // The syntax stage passed, so this cannot fail
        Pick::parse(input).ok_or(InvalidPick::Syntax)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
