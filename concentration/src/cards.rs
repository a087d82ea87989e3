/// The letter that is never dealt, because it is the glyph for face-down cards.
pub const RESERVED_SYMBOL: char = 'X';

/// All symbols that can appear on a card, in dealing order.
///
/// This is `a..=z` followed by `A..=Z`, without [`RESERVED_SYMBOL`].
pub static ALPHABET: [char; 51] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L',
    'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'Y', 'Z',
];

pub fn is_valid_symbol(symbol: char) -> bool {
    symbol.is_ascii_alphabetic() && symbol != RESERVED_SYMBOL
}

/// A single card on the board.
///
/// Cards compare equal when their symbols are equal, regardless of whether
/// they are face-up.
#[derive(Copy, Clone, Debug, Eq)]
pub struct Card {
    symbol: char,
    visible: bool,
}

impl Card {
    /// Creates a face-down card.
    pub fn new(symbol: char) -> Self {
        Self {
            symbol,
            visible: false,
        }
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// The contents of one slot on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Card(Card),
    /// Both cards of this pair have been found and removed.
    Matched,
}

impl Cell {
    /// Two cells match only if both hold cards with the same symbol.
    pub fn matches(&self, other: &Cell) -> bool {
        match (self, other) {
            (Cell::Card(a), Cell::Card(b)) => a == b,
            _ => false,
        }
    }

    pub fn card(&self) -> Option<&Card> {
        match self {
            Cell::Card(card) => Some(card),
            Cell::Matched => None,
        }
    }

    pub fn card_mut(&mut self) -> Option<&mut Card> {
        match self {
            Cell::Card(card) => Some(card),
            Cell::Matched => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Cell::Matched)
    }

    /// Whether this cell holds a face-up card.
    pub fn is_visible(&self) -> bool {
        self.card().is_some_and(Card::is_visible)
    }
}

impl From<Card> for Cell {
    fn from(card: Card) -> Self {
        Cell::Card(card)
    }
}
