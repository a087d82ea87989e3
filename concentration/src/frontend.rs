use std::time::Duration;

use crate::{Board, Game, GameError, GameResult, InvalidPick, Pick};

/// Everything the game loop needs from the outside world.
///
/// Implementations do the actual I/O, e.g. drawing to a terminal and reading
/// lines typed by the player.
pub trait Frontend {
    /// Shows the current state of the board.
    fn render(&mut self, board: &Board) -> anyhow::Result<()>;

    /// Asks the player to choose a card.
    fn prompt_pick(&mut self) -> anyhow::Result<()>;

    /// Reads one line of input. `None` means there is no more input.
    fn read_line(&mut self) -> anyhow::Result<Option<String>>;

    /// Tells the player why their input was rejected.
    fn report_invalid(&mut self, err: InvalidPick) -> anyhow::Result<()>;

    /// Gives the player time to look at both cards before they are resolved.
    fn pause(&mut self, delay: Duration);

    fn announce(&mut self, result: GameResult) -> anyhow::Result<()>;
}

/// Plays the game until it is won or lost, and returns the result.
///
/// Returns an error only when the frontend fails or runs out of input,
/// not when the player makes an invalid pick.
pub fn play_game<F: Frontend + ?Sized>(
    game: &mut Game,
    frontend: &mut F,
    turn_delay: Duration,
) -> anyhow::Result<GameResult> {
    let result = loop {
        if let Some(result) = game.result() {
            break result;
        }
        frontend.render(game.board())?;
        take_pick(game, frontend)?;
        frontend.render(game.board())?;
        take_pick(game, frontend)?;
        frontend.render(game.board())?;
        frontend.pause(turn_delay);
        game.resolve()?;
    };
    frontend.announce(result)?;
    Ok(result)
}

fn take_pick<F: Frontend + ?Sized>(game: &mut Game, frontend: &mut F) -> anyhow::Result<Pick> {
    frontend.prompt_pick()?;
    loop {
        let Some(line) = frontend.read_line()? else {
            anyhow::bail!("Input closed before the game was over");
        };
        let input = line.strip_suffix('\n').unwrap_or(&line);
        let input = input.strip_suffix('\r').unwrap_or(input);
        match game.pick(input) {
            Ok(pick) => return Ok(pick),
            Err(GameError::InvalidPick(err)) => frontend.report_invalid(err)?,
            Err(err) => return Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::{render_board, BoardSize};

    /// Replays a fixed list of input lines and records all output.
    #[derive(Default)]
    struct ScriptedFrontend {
        input: VecDeque<String>,
        renders: Vec<String>,
        prompts: usize,
        invalid: Vec<InvalidPick>,
        pauses: Vec<Duration>,
        announced: Option<GameResult>,
    }

    impl ScriptedFrontend {
        fn new(lines: &[&str]) -> Self {
            Self {
                input: lines.iter().map(|&l| String::from(l)).collect(),
                ..Default::default()
            }
        }
    }

    impl Frontend for ScriptedFrontend {
        fn render(&mut self, board: &Board) -> anyhow::Result<()> {
            self.renders.push(render_board(board));
            Ok(())
        }

        fn prompt_pick(&mut self) -> anyhow::Result<()> {
            self.prompts += 1;
            Ok(())
        }

        fn read_line(&mut self) -> anyhow::Result<Option<String>> {
            Ok(self.input.pop_front())
        }

        fn report_invalid(&mut self, err: InvalidPick) -> anyhow::Result<()> {
            self.invalid.push(err);
            Ok(())
        }

        fn pause(&mut self, delay: Duration) {
            self.pauses.push(delay);
        }

        fn announce(&mut self, result: GameResult) -> anyhow::Result<()> {
            self.announced = Some(result);
            Ok(())
        }
    }

    fn game_2x2() -> Game {
        let board = Board::from_symbols(BoardSize::new(2).unwrap(), &['a', 'b', 'b', 'a']).unwrap();
        Game::new(board)
    }

    #[test]
    fn two_matches_win() {
        let mut game = game_2x2();
        let mut frontend = ScriptedFrontend::new(&["0,0", "1,1", "0,1", "1,0"]);
        let result = play_game(&mut game, &mut frontend, Duration::ZERO).unwrap();

        assert_eq!(result, GameResult::Won { guesses: 2 });
        assert_eq!(result.to_string(), "You won in 2 picks.");
        assert_eq!(frontend.announced, Some(result));
        assert_eq!(game.guess_count(), 2);
        assert!(game.board().is_fully_matched());
        assert_eq!(frontend.prompts, 4);
        assert_eq!(frontend.pauses, vec![Duration::ZERO; 2]);
        assert_eq!(
            frontend.renders,
            vec!["X X\nX X", "a X\nX X", "a X\nX a", ". X\nX .", ". b\nX .", ". b\nb ."]
        );
    }

    #[test]
    fn invalid_input_is_retried() {
        let mut game = game_2x2();
        let mut frontend = ScriptedFrontend::new(&[
            "hello", "5,5", "0,0\n", "0,0", "1,1\r\n", "1,1", "0,1", "1,0",
        ]);
        let result = play_game(&mut game, &mut frontend, Duration::from_millis(5)).unwrap();

        assert_eq!(result, GameResult::Won { guesses: 2 });
        assert_eq!(
            frontend.invalid,
            vec![
                InvalidPick::Syntax,
                InvalidPick::Range,
                InvalidPick::Visible,
                InvalidPick::Matched
            ]
        );
        // Retries don't prompt again
        assert_eq!(frontend.prompts, 4);
    }

    #[test]
    fn mismatch_then_matches() {
        let mut game = game_2x2();
        let mut frontend = ScriptedFrontend::new(&["0,0", "0,1", "1,0", "0,1", "1,1", "0,0"]);
        let result = play_game(&mut game, &mut frontend, Duration::ZERO).unwrap();
        assert_eq!(result, GameResult::Won { guesses: 3 });
        // Shown face-up before resolving, hidden again afterwards
        assert_eq!(frontend.renders[2], "a b\nX X");
        assert_eq!(frontend.renders[3], "X X\nX X");
    }

    #[test]
    fn running_out_of_input_is_an_error() {
        let mut game = game_2x2();
        let mut frontend = ScriptedFrontend::new(&["0,0"]);
        assert!(play_game(&mut game, &mut frontend, Duration::ZERO).is_err());
        assert_eq!(frontend.announced, None);
    }

    #[test]
    fn finished_game_only_announces() {
        let mut game = game_2x2();
        for pick in ["0,0", "1,1"] {
            game.pick(pick).unwrap();
        }
        game.resolve().unwrap();
        for pick in ["0,1", "1,0"] {
            game.pick(pick).unwrap();
        }
        game.resolve().unwrap();

        let mut frontend = ScriptedFrontend::new(&[]);
        let result = play_game(&mut game, &mut frontend, Duration::ZERO).unwrap();
        assert_eq!(result, GameResult::Won { guesses: 2 });
        assert!(frontend.renders.is_empty());
        assert_eq!(frontend.announced, Some(result));
    }
}
