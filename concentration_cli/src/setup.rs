use std::io::{BufRead, Write};

use concentration::BoardSize;
use tracing::debug;

/// Asks whether to play a standard game, and if not, for the size of the board.
///
/// Keeps asking for a size until a valid one is given.
pub fn choose_board_size<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<BoardSize> {
    writeln!(output, "Standard Game? (y/n)")?;
    output.flush()?;
    if read_answer(input)? == "y" {
        return Ok(BoardSize::STANDARD);
    }

    loop {
        writeln!(
            output,
            "What size board? ({}-{})",
            BoardSize::MIN,
            BoardSize::MAX
        )?;
        output.flush()?;
        let answer = read_answer(input)?;
        match answer.parse::<usize>() {
            Ok(size) => match BoardSize::new(size) {
                Ok(size) => return Ok(size),
                Err(err) => writeln!(output, "{}", err)?,
            },
            Err(_) => writeln!(output, "'{}' is not a number", answer)?,
        }
        debug!(answer = %answer, "Rejected board size");
    }
}

fn read_answer<R: BufRead>(input: &mut R) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        anyhow::bail!("Input closed before a board size was chosen");
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(String::from(line.trim_end_matches(['\n', '\r'])))
}
