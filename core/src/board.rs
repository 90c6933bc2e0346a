use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed content of a cell, decided when the board is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Mine,
    /// Safe cell with the number of adjacent mines.
    Clear(u8),
}

impl Cell {
    /// Integer encoding shared with [`BoardState::codes`].
    pub const fn code(self) -> i8 {
        match self {
            Self::Mine => MINE,
            Self::Clear(count) => count as i8,
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

/// Mine layout with adjacency counts plus the visible and marked overlays.
///
/// Overlays only change through [`Game`]; the read accessors reject coordinates
/// outside the grid with [`GameError::OutOfBounds`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    cells: Array2<Cell>,
    visible: Array2<bool>,
    marked: Array2<bool>,
    mine_count: CellCount,
    visible_safe_count: Saturating<CellCount>,
    marked_count: Saturating<CellCount>,
}

impl Board {
    pub fn generate(config: GameConfig, generator: impl LayoutGenerator) -> Self {
        Self::from_layout(&generator.generate(config))
    }

    pub fn from_layout(layout: &MineLayout) -> Self {
        let size = layout.size();
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, column)| {
            let coords = (row as Coord, column as Coord);
            if layout.contains_mine(coords) {
                Cell::Mine
            } else {
                Cell::Clear(layout.adjacent_mine_count(coords))
            }
        });

        Self {
            cells,
            visible: Array2::default(size.to_nd_index()),
            marked: Array2::default(size.to_nd_index()),
            mine_count: layout.mine_count(),
            visible_safe_count: Saturating(0),
            marked_count: Saturating(0),
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.cells.dim();
        (rows as Coord, columns as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn columns(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.rows(), self.columns())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn marked_count(&self) -> CellCount {
        self.marked_count.0
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn is_mine(&self, coords: Coord2) -> Result<bool> {
        Ok(self.cell(coords)?.is_mine())
    }

    pub fn is_visible(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self.visible[coords.to_nd_index()])
    }

    pub fn is_marked(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self.marked[coords.to_nd_index()])
    }

    /// In-bounds neighbors of `coords` in row-major order.
    pub fn adjacent_cells(&self, coords: Coord2) -> Result<NeighborIter> {
        let coords = self.validate_coords(coords)?;
        Ok(self.neighbors(coords))
    }

    /// Mines minus marks, negative when the player has over-marked.
    pub fn remaining_mines(&self) -> i64 {
        i64::from(self.mine_count) - i64::from(self.marked_count.0)
    }

    pub fn all_safe_cells_visible(&self) -> bool {
        self.visible_safe_count.0 == self.safe_cell_count()
    }

    pub(crate) fn neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Unchecked lookups for coordinates the caller already validated.
    pub(crate) fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub(crate) fn visible_at(&self, coords: Coord2) -> bool {
        self.visible[coords.to_nd_index()]
    }

    pub(crate) fn marked_at(&self, coords: Coord2) -> bool {
        self.marked[coords.to_nd_index()]
    }

    /// Makes a cell visible without looking at what it holds.
    pub(crate) fn reveal(&mut self, coords: Coord2) {
        let index = coords.to_nd_index();
        if self.visible[index] {
            return;
        }
        self.visible[index] = true;
        if !self.cells[index].is_mine() {
            self.visible_safe_count += 1;
        }
    }

    /// Flips the mark; the caller makes sure the cell is hidden.
    pub(crate) fn toggle_mark(&mut self, coords: Coord2) -> bool {
        let index = coords.to_nd_index();
        let marked = !self.marked[index];
        self.marked[index] = marked;
        if marked {
            self.marked_count += 1;
        } else {
            self.marked_count -= 1;
        }
        marked
    }

    pub(crate) fn reveal_all_mines(&mut self) {
        for (cell, visible) in self.cells.iter().zip(self.visible.iter_mut()) {
            if cell.is_mine() {
                *visible = true;
            }
        }
    }
}
