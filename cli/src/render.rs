use std::fmt::Write;

use minesweep_core::{BoardState, CellView, Statistics};

const HIDDEN_CELL: char = '■';
const MARKED_CELL: char = '⚑';
const MINE_CELL: char = '✹';
const EMPTY_CELL: char = ' ';

fn cell_symbol(cell: CellView) -> char {
    match cell {
        CellView::Hidden => HIDDEN_CELL,
        CellView::Marked => MARKED_CELL,
        CellView::Mine => MINE_CELL,
        CellView::Revealed(0) => EMPTY_CELL,
        CellView::Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
    }
}

/// Column header, a separator, then one line per row prefixed by its index.
pub fn render_board(state: &BoardState) -> String {
    let (rows, columns) = state.size();
    let mut out = String::from("   ");

    for column in 0..columns {
        let _ = write!(out, "{column:2} ");
    }
    out.push_str("\n   ");
    out.push_str(&"---".repeat(columns.into()));
    out.push('\n');

    for (row, cells) in state.cells.outer_iter().enumerate() {
        let _ = write!(out, "{row:2}|");
        for &cell in cells {
            let _ = write!(out, " {} ", cell_symbol(cell));
        }
        out.truncate(out.trim_end_matches(' ').len());
        if row + 1 < usize::from(rows) {
            out.push('\n');
        }
    }
    out
}

pub fn render_statistics(stats: &Statistics) -> String {
    format!(
        "Remaining mines: {}\nMoves: {}",
        stats.remaining_mines, stats.moves
    )
}
