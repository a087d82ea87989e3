use crate::Pick;

/// Direct board access outside of the grid.
///
/// User input never gets this far, since picks are range-checked first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    pub pick: Pick,
    pub size: usize,
}

impl std::error::Error for OutOfRange {}

impl std::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Position {} is outside of the {}x{} board",
            self.pick, self.size, self.size
        )
    }
}

/// The error type for [`BoardSize::new()`](crate::BoardSize::new).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidBoardSize {
    pub size: usize,
}

impl std::error::Error for InvalidBoardSize {}

impl std::fmt::Display for InvalidBoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Board size must be an even number between {} and {}, got {}",
            crate::BoardSize::MIN,
            crate::BoardSize::MAX,
            self.size
        )
    }
}

/// The error type for [`Board::from_symbols()`](crate::Board::from_symbols).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoardLayoutError {
    WrongLength { expected: usize, actual: usize },
    UnknownSymbol { symbol: char },
    UnpairedSymbol { symbol: char, count: usize },
}

impl std::error::Error for BoardLayoutError {}

impl std::fmt::Display for BoardLayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardLayoutError::WrongLength { expected, actual } => {
                write!(f, "Expected {} symbols, got {}", expected, actual)
            }
            BoardLayoutError::UnknownSymbol { symbol } => {
                write!(f, "'{}' is not a card symbol", symbol)
            }
            BoardLayoutError::UnpairedSymbol { symbol, count } => write!(
                f,
                "Symbol '{}' appears {} times, but every symbol must appear exactly twice",
                symbol, count
            ),
        }
    }
}
