use alloc::vec::Vec;
use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Ongoing -> Victory
/// - Ongoing -> Defeat
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Ongoing,
    Victory,
    Defeat,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }
}

/// A single player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Open(Coord2),
    Mark(Coord2),
}

/// Represents a game from start to finish.
///
/// Inputs outside the board, on cells that cannot change, or after the game
/// has ended are ignored rather than reported.
#[derive(Debug)]
pub struct Game {
    board: Board,
    status: GameStatus,
    moves: Saturating<u32>,
    first_move: bool,
    events: EventBus,
}

impl Game {
    /// Random game seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn new(rows: Coord, columns: Coord, mines: CellCount) -> Result<Self> {
        let config = GameConfig::new((rows, columns), mines)?;
        Ok(Self::generate(config, RandomLayoutGenerator::from_entropy()))
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::generate(config, RandomLayoutGenerator::new(seed))
    }

    pub fn generate(config: GameConfig, generator: impl LayoutGenerator) -> Self {
        Self::from_board(Board::generate(config, generator))
    }

    pub fn from_layout(layout: &MineLayout) -> Self {
        Self::from_board(Board::from_layout(layout))
    }

    fn from_board(board: Board) -> Self {
        Self {
            board,
            status: Default::default(),
            moves: Saturating(0),
            first_move: true,
            events: EventBus::new(),
        }
    }

    #[cfg(feature = "std")]
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::generate(difficulty.config(), RandomLayoutGenerator::from_entropy())
    }

    #[cfg(feature = "std")]
    pub fn beginner() -> Self {
        Self::from_difficulty(Difficulty::Beginner)
    }

    #[cfg(feature = "std")]
    pub fn intermediate() -> Self {
        Self::from_difficulty(Difficulty::Intermediate)
    }

    #[cfg(feature = "std")]
    pub fn expert() -> Self {
        Self::from_difficulty(Difficulty::Expert)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn moves(&self) -> u32 {
        self.moves.0
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn register_handler(&mut self, kind: EventKind, handler: impl FnMut(&GameEvent) + 'static) {
        self.events.register(kind, handler);
    }

    pub fn apply(&mut self, action: Action) -> GameStatus {
        match action {
            Action::Open(coords) => self.open(coords),
            Action::Mark(coords) => {
                self.mark(coords);
                self.status
            }
        }
    }

    pub fn open(&mut self, coords: Coord2) -> GameStatus {
        if !self.accepts_input(coords) {
            return self.status;
        }
        if self.board.visible_at(coords) || self.board.marked_at(coords) {
            log::trace!("Ignoring open at {:?}, cell is visible or marked", coords);
            return self.status;
        }

        self.count_move();

        let value = match self.board.cell_at(coords) {
            Cell::Mine => {
                self.status = GameStatus::Defeat;
                self.board.reveal_all_mines();
                log::debug!("Mine hit at {:?} after {} moves", coords, self.moves.0);
                self.events.emit(GameEvent::GameLost { coords });
                return self.status;
            }
            Cell::Clear(value) => value,
        };

        self.board.reveal(coords);
        log::debug!("Open cell at {:?}, adjacent mines: {}", coords, value);
        self.events.emit(GameEvent::CellOpened { coords, value });

        if value == 0 {
            self.flood_fill(coords);
        }

        if self.board.all_safe_cells_visible() {
            self.status = GameStatus::Victory;
            log::debug!("All safe cells open after {} moves", self.moves.0);
            self.events.emit(GameEvent::GameWon {
                moves: self.moves.0,
            });
        }

        self.status
    }

    pub fn mark(&mut self, coords: Coord2) {
        if !self.accepts_input(coords) {
            return;
        }
        if self.board.visible_at(coords) {
            log::trace!("Ignoring mark at {:?}, cell is visible", coords);
            return;
        }

        self.count_move();

        let event = if self.board.toggle_mark(coords) {
            GameEvent::CellMarked { coords }
        } else {
            GameEvent::CellUnmarked { coords }
        };
        self.events.emit(event);
    }

    pub fn board_state(&self) -> BoardState {
        BoardState::from_board(&self.board)
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            status: self.status,
            moves: self.moves.0,
            rows: self.board.rows(),
            columns: self.board.columns(),
            mines: self.board.mine_count(),
            remaining_mines: self.board.remaining_mines(),
        }
    }

    /// Common guard for both actions: coordinates on the board and the game still running.
    fn accepts_input(&self, coords: Coord2) -> bool {
        if !self.board.contains(coords) {
            log::trace!("Ignoring input at {:?}, outside the board", coords);
            return false;
        }
        if self.status.is_finished() {
            log::trace!("Ignoring input at {:?}, game is {:?}", coords, self.status);
            return false;
        }
        true
    }

    fn count_move(&mut self) {
        if self.first_move {
            self.first_move = false;
            log::debug!("Game started");
            self.events.emit(GameEvent::GameStarted);
        }
        self.moves += 1;
    }

    /// Depth-first expansion over the zero region around `origin`.
    ///
    /// Each stack entry is the remaining neighbors of a zero cell, so cells are
    /// opened in the same order a recursive descent would open them.
    fn flood_fill(&mut self, origin: Coord2) {
        let mut stack: Vec<NeighborIter> = Vec::from([self.board.neighbors(origin)]);

        while let Some(neighbors) = stack.last_mut() {
            let Some(coords) = neighbors.next() else {
                stack.pop();
                continue;
            };

            if self.board.visible_at(coords) || self.board.marked_at(coords) {
                continue;
            }

            // zero cells never border a mine, so every neighbor reached here is safe
            let Cell::Clear(value) = self.board.cell_at(coords) else {
                continue;
            };

            self.board.reveal(coords);
            log::trace!("Flood opened cell at {:?}, adjacent mines: {}", coords, value);
            self.events.emit(GameEvent::CellOpened { coords, value });

            if value == 0 {
                stack.push(self.board.neighbors(coords));
            }
        }
    }
}
