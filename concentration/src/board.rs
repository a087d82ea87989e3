mod error;

use std::collections::BTreeMap;

pub use error::*;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::{is_valid_symbol, render_board, Card, Cell, Pick, ALPHABET};

/// The side length of a square board.
///
/// Always even and within [`BoardSize::MIN`]..=[`BoardSize::MAX`], so that
/// the cards can be dealt in pairs and there are enough symbols for them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct BoardSize(usize);

impl BoardSize {
    pub const MIN: usize = 2;
    pub const MAX: usize = 10;
    /// The size used when the player asks for a standard game.
    pub const STANDARD: BoardSize = BoardSize(6);

    pub fn new(size: usize) -> Result<Self, InvalidBoardSize> {
        if (Self::MIN..=Self::MAX).contains(&size) && size % 2 == 0 {
            Ok(Self(size))
        } else {
            Err(InvalidBoardSize { size })
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }

    pub fn pair_count(self) -> usize {
        self.cell_count() / 2
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// A square grid of cards, dealt in pairs.
///
/// Every symbol that is still on the board appears on exactly two cards.
/// Pairs are only ever removed as a whole, by setting both of their cells
/// to [`Cell::Matched`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    /// Row-major.
    cells: Vec<Cell>,
}

impl Board {
    /// Deals a new board with the first `size²/2` symbols of the
    /// [`ALPHABET`], each on two cards, in random order.
    pub fn new<R: Rng + ?Sized>(size: BoardSize, rng: &mut R) -> Self {
        let pairs = size.pair_count();
        let mut symbols: Vec<char> = ALPHABET[..pairs]
            .iter()
            .chain(&ALPHABET[..pairs])
            .copied()
            .collect();
        symbols.shuffle(rng);

        let mut cells = Vec::with_capacity(size.cell_count());
        while let Some(symbol) = symbols.pop() {
            cells.push(Cell::Card(Card::new(symbol)));
        }
        debug!(%size, pairs, "Dealt a new board");

        Self { size, cells }
    }

    /// Creates a board with the given symbols in row-major order, all face-down.
    pub fn from_symbols(size: BoardSize, symbols: &[char]) -> Result<Self, BoardLayoutError> {
        if symbols.len() != size.cell_count() {
            return Err(BoardLayoutError::WrongLength {
                expected: size.cell_count(),
                actual: symbols.len(),
            });
        }
        let mut counts = BTreeMap::<char, usize>::new();
        for &symbol in symbols {
            if !is_valid_symbol(symbol) {
                return Err(BoardLayoutError::UnknownSymbol { symbol });
            }
            *counts.entry(symbol).or_default() += 1;
        }
        if let Some((&symbol, &count)) = counts.iter().find(|(_, &count)| count != 2) {
            return Err(BoardLayoutError::UnpairedSymbol { symbol, count });
        }

        Ok(Self {
            size,
            cells: symbols.iter().map(|&s| Cell::Card(Card::new(s))).collect(),
        })
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn contains(&self, pick: Pick) -> bool {
        pick.row < self.size.get() && pick.col < self.size.get()
    }

    pub fn get(&self, pick: Pick) -> Result<&Cell, OutOfRange> {
        let idx = self.index_of(pick)?;
        Ok(&self.cells[idx])
    }

    pub fn get_mut(&mut self, pick: Pick) -> Result<&mut Cell, OutOfRange> {
        let idx = self.index_of(pick)?;
        Ok(&mut self.cells[idx])
    }

    pub fn set(&mut self, pick: Pick, cell: Cell) -> Result<(), OutOfRange> {
        *self.get_mut(pick)? = cell;
        Ok(())
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.size.get())
    }

    pub fn is_fully_matched(&self) -> bool {
        self.cells.iter().all(Cell::is_matched)
    }

    fn index_of(&self, pick: Pick) -> Result<usize, OutOfRange> {
        if self.contains(pick) {
            Ok(pick.row * self.size.get() + pick.col)
        } else {
            Err(OutOfRange {
                pick,
                size: self.size.get(),
            })
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    quickcheck! {
        fn dealt_in_pairs(size: BoardSize, seed: u64) -> bool {
            let board = Board::new(size, &mut StdRng::seed_from_u64(seed));
            let mut counts = BTreeMap::<char, usize>::new();
            for row in board.rows() {
                for cell in row {
                    match cell {
                        Cell::Card(card) if !card.is_visible() => {
                            *counts.entry(card.symbol()).or_default() += 1;
                        }
                        _ => return false,
                    }
                }
            }
            counts.len() == size.pair_count()
                && counts.values().all(|&count| count == 2)
                && counts.keys().all(|symbol| ALPHABET[..size.pair_count()].contains(symbol))
        }

        fn rows_cover_the_grid(size: BoardSize, seed: u64) -> bool {
            let board = Board::new(size, &mut StdRng::seed_from_u64(seed));
            board.rows().count() == size.get()
                && board.rows().all(|row| row.len() == size.get())
        }
    }

    #[test]
    fn board_size_bounds() {
        for size in [2, 4, 6, 8, 10] {
            assert_eq!(BoardSize::new(size).map(BoardSize::get), Ok(size));
        }
        for size in [0, 1, 3, 5, 9, 11, 12, 100] {
            assert_eq!(BoardSize::new(size), Err(InvalidBoardSize { size }));
        }
        assert_eq!(BoardSize::STANDARD.cell_count(), 36);
        assert_eq!(BoardSize::STANDARD.pair_count(), 18);
    }

    #[test]
    fn same_seed_same_board() {
        let size = BoardSize::new(8).unwrap();
        let a = Board::new(size, &mut StdRng::seed_from_u64(7));
        let b = Board::new(size, &mut StdRng::seed_from_u64(7));
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(a, b);
    }

    #[test]
    fn from_symbols_is_row_major() {
        let board = Board::from_symbols(BoardSize::new(2).unwrap(), &['a', 'b', 'b', 'a']).unwrap();
        let symbol_at = |row, col| board.get(Pick { row, col }).unwrap().card().unwrap().symbol();
        assert_eq!(symbol_at(0, 0), 'a');
        assert_eq!(symbol_at(0, 1), 'b');
        assert_eq!(symbol_at(1, 0), 'b');
        assert_eq!(symbol_at(1, 1), 'a');
    }

    #[test]
    fn from_symbols_rejects_bad_layouts() {
        let size = BoardSize::new(2).unwrap();
        assert_eq!(
            Board::from_symbols(size, &['a', 'a']),
            Err(BoardLayoutError::WrongLength {
                expected: 4,
                actual: 2
            })
        );
        assert_eq!(
            Board::from_symbols(size, &['a', 'a', 'X', 'X']),
            Err(BoardLayoutError::UnknownSymbol { symbol: 'X' })
        );
        assert_eq!(
            Board::from_symbols(size, &['a', 'a', 'a', 'b']),
            Err(BoardLayoutError::UnpairedSymbol {
                symbol: 'a',
                count: 3
            })
        );
    }

    #[test]
    fn access_out_of_range() {
        let mut board = Board::new(BoardSize::new(4).unwrap(), &mut StdRng::seed_from_u64(1));
        let outside = Pick { row: 4, col: 0 };
        assert_eq!(
            board.get(outside),
            Err(OutOfRange {
                pick: outside,
                size: 4
            })
        );
        assert!(board.set(Pick { row: 0, col: 4 }, Cell::Matched).is_err());
        assert!(board.get(Pick { row: 3, col: 3 }).is_ok());
    }

    #[test]
    fn fully_matched() {
        let mut board = Board::from_symbols(BoardSize::new(2).unwrap(), &['a', 'b', 'b', 'a']).unwrap();
        assert!(!board.is_fully_matched());
        for (row, col) in [(0, 0), (0, 1), (1, 0)] {
            board.set(Pick { row, col }, Cell::Matched).unwrap();
            assert!(!board.is_fully_matched());
        }
        board.set(Pick { row: 1, col: 1 }, Cell::Matched).unwrap();
        assert!(board.is_fully_matched());
    }
}
