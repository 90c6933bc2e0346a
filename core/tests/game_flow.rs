use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use minesweep_core::*;

fn fixed_game(size: Coord2, mines: &[Coord2]) -> Game {
    Game::from_layout(&MineLayout::from_mine_coords(size, mines).unwrap())
}

fn all_coords(size: Coord2) -> impl Iterator<Item = Coord2> {
    (0..size.0).flat_map(move |row| (0..size.1).map(move |column| (row, column)))
}

fn opened_cells(game: &mut Game) -> Rc<RefCell<Vec<Coord2>>> {
    let opened = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&opened);
    game.register_handler(EventKind::CellOpened, move |event| {
        if let GameEvent::CellOpened { coords, .. } = event {
            sink.borrow_mut().push(*coords);
        }
    });
    opened
}

#[test]
fn construction_rejects_zero_rows() {
    assert_eq!(
        Game::new(0, 5, 3).map(|game| game.status()),
        Err(GameError::InvalidDimensions)
    );
    assert!(Game::new(3, 0, 0).is_err());
}

#[test]
fn generated_boards_hold_exact_mine_count_and_counts() {
    for seed in 0..20 {
        let config = GameConfig::new((9, 13), 30).unwrap();
        let game = Game::with_seed(config, seed);
        let board = game.board();

        let mines = all_coords(board.size())
            .filter(|&coords| board.is_mine(coords).unwrap())
            .count();
        assert_eq!(mines, 30);
        assert_eq!(board.mine_count(), 30);

        for coords in all_coords(board.size()) {
            if let Cell::Clear(count) = board.cell(coords).unwrap() {
                let neighbors = board
                    .adjacent_cells(coords)
                    .unwrap()
                    .filter(|&pos| board.is_mine(pos).unwrap())
                    .count();
                assert_eq!(usize::from(count), neighbors);
            }
        }
    }
}

#[test]
fn single_row_pair_wins_on_first_open() {
    let mut game = Game::new(1, 2, 1).unwrap();
    let board = game.board();
    assert_eq!(board.mine_count(), 1);

    let safe = all_coords((1, 2))
        .find(|&coords| !board.is_mine(coords).unwrap())
        .unwrap();
    assert_eq!(board.cell(safe), Ok(Cell::Clear(1)));

    assert_eq!(game.open(safe), GameStatus::Victory);
    assert_eq!(game.statistics().moves, 1);
}

#[test]
fn over_requested_mines_are_clamped() {
    let game = Game::new(1, 2, 5).unwrap();
    assert_eq!(game.board().mine_count(), 1);
    assert_eq!(game.board().safe_cell_count(), 1);
}

#[test]
fn three_by_three_corner_mine_floods_to_victory() {
    let mut game = fixed_game((3, 3), &[(0, 0)]);
    let opened = opened_cells(&mut game);

    assert_eq!(game.open((2, 2)), GameStatus::Victory);
    assert_eq!(opened.borrow().len(), 8);
    assert!(game.board().all_safe_cells_visible());

    let codes = game.board_state().codes();
    assert_eq!(codes[[0, 0]], HIDDEN);
    assert_eq!(codes[[0, 1]], 1);
    assert_eq!(codes[[1, 1]], 1);
    assert_eq!(codes[[2, 2]], 0);
}

#[test]
fn flood_fill_never_opens_a_cell_twice() {
    for seed in 0..30 {
        let mut game = Game::with_seed(Difficulty::Intermediate.config(), seed);
        let opened = opened_cells(&mut game);

        let start = all_coords((16, 16))
            .find(|&coords| game.board().cell(coords) == Ok(Cell::Clear(0)));
        let Some(start) = start else { continue };

        let hidden_before: HashSet<_> = all_coords((16, 16))
            .filter(|&coords| !game.board().is_visible(coords).unwrap())
            .collect();
        game.open(start);
        let newly_visible: HashSet<_> = hidden_before
            .into_iter()
            .filter(|&coords| game.board().is_visible(coords).unwrap())
            .collect();

        let opened = opened.borrow();
        let unique: HashSet<_> = opened.iter().copied().collect();
        assert_eq!(unique.len(), opened.len(), "duplicate open for seed {seed}");
        assert_eq!(unique, newly_visible);
    }
}

#[test]
fn victory_exactly_when_last_safe_cell_opens() {
    let mut game = fixed_game((2, 3), &[(0, 0), (1, 2)]);
    let safe: Vec<_> = all_coords((2, 3))
        .filter(|&coords| !game.board().is_mine(coords).unwrap())
        .collect();

    let (last, rest) = safe.split_last().unwrap();
    for &coords in rest {
        assert_eq!(game.open(coords), GameStatus::Ongoing);
        assert!(!game.board().all_safe_cells_visible());
    }
    assert_eq!(game.open(*last), GameStatus::Victory);
    assert!(game.board().all_safe_cells_visible());
}

#[test]
fn defeat_reveals_all_mines_and_freezes_game() {
    let mines = [(0, 0), (3, 3), (1, 2)];
    let mut game = fixed_game((4, 4), &mines);
    let lost = Rc::new(RefCell::new(None));
    {
        let lost = Rc::clone(&lost);
        game.register_handler(EventKind::GameLost, move |event| {
            *lost.borrow_mut() = Some(*event);
        });
    }

    assert_eq!(game.open((1, 2)), GameStatus::Defeat);
    assert_eq!(*lost.borrow(), Some(GameEvent::GameLost { coords: (1, 2) }));

    let state = game.board_state();
    for mine in mines {
        assert_eq!(state.cell(mine), Some(CellView::Mine));
    }
    assert_eq!(game.open((3, 0)), GameStatus::Defeat);
    assert_eq!(game.board().is_visible((3, 0)), Ok(false));
    assert_eq!(game.statistics().moves, 1);
}

#[test]
fn marked_mine_shows_as_mine_after_defeat() {
    let mut game = fixed_game((3, 3), &[(0, 0), (2, 2)]);

    game.mark((0, 0));
    assert_eq!(game.board_state().cell((0, 0)), Some(CellView::Marked));

    assert_eq!(game.open((2, 2)), GameStatus::Defeat);
    assert_eq!(game.board().is_marked((0, 0)), Ok(true));

    let state = game.board_state();
    assert_eq!(state.cell((0, 0)), Some(CellView::Mine));
    assert_eq!(state.cell((2, 2)), Some(CellView::Mine));
    assert_eq!(state.codes()[[0, 0]], MINE);
    assert_eq!(state.cell((1, 1)), Some(CellView::Hidden));
}

#[test]
fn game_started_fires_once() {
    let mut game = fixed_game((3, 3), &[(1, 1)]);
    let started = Rc::new(RefCell::new(0));
    {
        let started = Rc::clone(&started);
        game.register_handler(EventKind::GameStarted, move |_| *started.borrow_mut() += 1);
    }

    game.mark((0, 0));
    game.open((0, 1));
    game.mark((0, 0));
    game.open((2, 2));

    assert_eq!(*started.borrow(), 1);
    assert_eq!(game.moves(), 4);
}

#[test]
fn marked_visible_cell_stays_unmarked() {
    let mut game = fixed_game((3, 3), &[(0, 0)]);
    game.open((2, 2));

    for coords in all_coords((3, 3)) {
        if game.board().is_visible(coords).unwrap() {
            assert_eq!(game.board().is_marked(coords), Ok(false));
        }
    }
}

#[test]
fn statistics_serialize_to_json() {
    let mut game = fixed_game((2, 2), &[(0, 0)]);
    game.mark((0, 0));
    game.mark((1, 1));

    let json = serde_json::to_value(game.statistics()).unwrap();
    assert_eq!(json["status"], "Ongoing");
    assert_eq!(json["moves"], 2);
    assert_eq!(json["rows"], 2);
    assert_eq!(json["mines"], 1);
    assert_eq!(json["remaining_mines"], -1);
}
