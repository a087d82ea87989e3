use crate::{Board, Cell, RESERVED_SYMBOL};

/// Shown for cells whose pair has already been found.
pub const MATCHED_GLYPH: char = '.';
/// Shown for face-down cards.
pub const HIDDEN_GLYPH: char = RESERVED_SYMBOL;

pub fn cell_glyph(cell: &Cell) -> char {
    match cell {
        Cell::Matched => MATCHED_GLYPH,
        Cell::Card(card) if card.is_visible() => card.symbol(),
        Cell::Card(_) => HIDDEN_GLYPH,
    }
}

/// Draws the board as one line per row, with the cells separated by spaces.
///
/// There is no trailing newline.
pub fn render_board(board: &Board) -> String {
    let mut result = String::with_capacity(board.size().cell_count() * 2);
    for (row_idx, row) in board.rows().enumerate() {
        if row_idx > 0 {
            result.push('\n');
        }
        for (col_idx, cell) in row.iter().enumerate() {
            if col_idx > 0 {
                result.push(' ');
            }
            result.push(cell_glyph(cell));
        }
    }
    result
}
