/// A position on the board, as chosen by the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pick {
    pub row: usize,
    pub col: usize,
}

impl Pick {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parses the `row,col` notation used at the prompt.
    ///
    /// Both parts must be plain decimal digits. A number too large for `usize`
    /// is saturated, which keeps it well-formed but off every board.
    pub fn parse(input: &str) -> Option<Self> {
        let (row, col) = input.split_once(',')?;
        Some(Self {
            row: parse_coordinate(row)?,
            col: parse_coordinate(col)?,
        })
    }
}

fn parse_coordinate(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Only overflow can fail at this point
    Some(s.parse().unwrap_or(usize::MAX))
}

impl std::fmt::Display for Pick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
