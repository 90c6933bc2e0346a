use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Code of a hidden, unmarked cell in [`BoardState::codes`].
pub const HIDDEN: i8 = -1;
/// Code of a revealed mine.
pub const MINE: i8 = -2;
/// Code of a hidden cell carrying a mark.
pub const MARKED: i8 = -3;

/// What an observer may know about a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Marked,
    Mine,
    Revealed(u8),
}

impl CellView {
    pub const fn code(self) -> i8 {
        match self {
            Self::Hidden => HIDDEN,
            Self::Marked => MARKED,
            Self::Mine => MINE,
            Self::Revealed(count) => count as i8,
        }
    }
}

/// Player-visible snapshot of a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: Array2<CellView>,
}

impl BoardState {
    pub fn from_board(board: &Board) -> Self {
        let cells = Array2::from_shape_fn(board.size().to_nd_index(), |(row, column)| {
            let coords = (row as Coord, column as Coord);
            match (board.visible_at(coords), board.cell_at(coords)) {
                (true, Cell::Mine) => CellView::Mine,
                (true, Cell::Clear(count)) => CellView::Revealed(count),
                (false, _) if board.marked_at(coords) => CellView::Marked,
                (false, _) => CellView::Hidden,
            }
        });
        Self { cells }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.cells.dim();
        (rows as Coord, columns as Coord)
    }

    pub fn cell(&self, coords: Coord2) -> Option<CellView> {
        in_bounds(coords, self.size()).then(|| self.cells[coords.to_nd_index()])
    }

    /// Integer grid: 0..=8 for revealed counts, otherwise [`HIDDEN`], [`MARKED`] or [`MINE`].
    pub fn codes(&self) -> Array2<i8> {
        self.cells.map(|cell| cell.code())
    }
}

/// Summary of a game in progress or finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub status: GameStatus,
    pub moves: u32,
    pub rows: Coord,
    pub columns: Coord,
    pub mines: CellCount,
    pub remaining_mines: i64,
}
