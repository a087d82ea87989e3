use tracing::{debug, info};

use crate::{Board, Cell, GameError, Pick, Validator};

/// Where a [`Game`] is within the current turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingFirstPick,
    AwaitingSecondPick,
    /// Both cards of the turn are face-up and need to be compared.
    Resolving,
    Finished(GameResult),
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingFirstPick => write!(f, "waiting for the first pick of the turn"),
            Phase::AwaitingSecondPick => write!(f, "waiting for the second pick of the turn"),
            Phase::Resolving => write!(f, "waiting for the turn to be resolved"),
            Phase::Finished(_) => write!(f, "the game is over"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// All pairs were found.
    Won { guesses: u32 },
    /// The guess budget ran out first.
    Lost,
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Won { guesses } => write!(f, "You won in {} picks.", guesses),
            GameResult::Lost => write!(f, "You lose."),
        }
    }
}

/// Summarizes the outcome of resolving a turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The two cards were removed from the board.
    Match,
    /// The two cards were turned face-down again.
    Mismatch,
}

/// A single game, from dealing to the final result.
///
/// Each turn consists of two calls to [`Game::pick()`] followed by one call to
/// [`Game::resolve()`]. The current [`Phase`] says which one is expected next.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    validator: Validator,
    prev_pick: Option<Pick>,
    curr_pick: Option<Pick>,
    guess_count: u32,
    max_guesses: u32,
    phase: Phase,
}

impl Game {
    pub fn new(board: Board) -> Self {
        let max_guesses = 3 * board.size().cell_count() as u32;
        let mut game = Self {
            board,
            validator: Validator::new(),
            prev_pick: None,
            curr_pick: None,
            guess_count: 0,
            max_guesses,
            phase: Phase::AwaitingFirstPick,
        };
        if let Some(result) = game.termination() {
            game.phase = Phase::Finished(result);
        }
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn prev_pick(&self) -> Option<Pick> {
        self.prev_pick
    }

    pub fn curr_pick(&self) -> Option<Pick> {
        self.curr_pick
    }

    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    pub fn max_guesses(&self) -> u32 {
        self.max_guesses
    }

    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::Finished(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    /// Validates the player's input and turns the chosen card face-up.
    ///
    /// On an [`GameError::InvalidPick`] error nothing is changed, and the
    /// player can simply try again.
    pub fn pick(&mut self, input: &str) -> Result<Pick, GameError> {
        let next_phase = match self.phase {
            Phase::AwaitingFirstPick => Phase::AwaitingSecondPick,
            Phase::AwaitingSecondPick => Phase::Resolving,
            phase => return Err(GameError::UnexpectedPhase { phase }),
        };

        let pick = self
            .validator
            .validate(&self.board, input)
            .inspect_err(|kind| debug!(input, stage = ?kind, "Rejected pick"))?;
        if let Some(card) = self.board.get_mut(pick)?.card_mut() {
            card.show();
        }

        if self.phase == Phase::AwaitingFirstPick {
            self.prev_pick = Some(pick);
            self.curr_pick = None;
        } else {
            self.curr_pick = Some(pick);
        }
        self.phase = next_phase;
        Ok(pick)
    }

    /// Compares the two face-up cards, removes them if they match and hides
    /// them otherwise. Counts as one guess either way.
    pub fn resolve(&mut self) -> Result<TurnOutcome, GameError> {
        let (Phase::Resolving, Some(prev), Some(curr)) =
            (self.phase, self.prev_pick, self.curr_pick)
        else {
            return Err(GameError::UnexpectedPhase { phase: self.phase });
        };

        let outcome = if self.board.get(prev)?.matches(self.board.get(curr)?) {
            self.board.set(prev, Cell::Matched)?;
            self.board.set(curr, Cell::Matched)?;
            TurnOutcome::Match
        } else {
            for pick in [prev, curr] {
                if let Some(card) = self.board.get_mut(pick)?.card_mut() {
                    card.hide();
                }
            }
            TurnOutcome::Mismatch
        };
        self.guess_count += 1;
        debug!(
            first = %prev,
            second = %curr,
            ?outcome,
            guess_count = self.guess_count,
            "Resolved turn"
        );

        // The board is updated before this check, so that a final match on the
        // last allowed guess still counts as a win.
        self.phase = match self.termination() {
            Some(result) => {
                info!(%result, guess_count = self.guess_count, "Game over");
                Phase::Finished(result)
            }
            None => Phase::AwaitingFirstPick,
        };
        Ok(outcome)
    }

    fn termination(&self) -> Option<GameResult> {
        if self.board.is_fully_matched() {
            Some(GameResult::Won {
                guesses: self.guess_count,
            })
        } else if self.guess_count >= self.max_guesses {
            Some(GameResult::Lost)
        } else {
            None
        }
    }
}
