use std::io::{BufRead, Write};
use std::time::Duration;

use concentration::{render_board, Board, BoardSize, Frontend, GameResult, InvalidPick};

use crate::setup::choose_board_size;

/// Moves the cursor to the top left after clearing the screen.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Plays the game on a line-based terminal.
pub struct TerminalFrontend<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Asks the player whether to play a standard game, or on which size of board.
    pub fn choose_board_size(&mut self) -> anyhow::Result<BoardSize> {
        choose_board_size(&mut self.input, &mut self.output)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Frontend for TerminalFrontend<R, W> {
    fn render(&mut self, board: &Board) -> anyhow::Result<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        writeln!(self.output, "{}", render_board(board))?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt_pick(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Choose a card (e.g. 1,2)")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        // Not valid UTF-8 is still a line, which the syntax check will reject
        let mut buf = Vec::new();
        let num_bytes_read = self.input.read_until(b'\n', &mut buf)?;
        if num_bytes_read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn report_invalid(&mut self, err: InvalidPick) -> anyhow::Result<()> {
        writeln!(self.output, "{}", err)?;
        self.output.flush()?;
        Ok(())
    }

    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }

    fn announce(&mut self, result: GameResult) -> anyhow::Result<()> {
        writeln!(self.output, "{}", result)?;
        self.output.flush()?;
        Ok(())
    }
}
