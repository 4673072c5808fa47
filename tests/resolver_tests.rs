use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{fire, generate, resolve, CellState, Coord, Grid, OutcomeKind, ShotOutcome};

fn at(col: usize, row: usize) -> Coord {
    Coord::new(col, row).unwrap()
}

fn ships_at(cells: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new();
    for &(c, r) in cells {
        grid.set(at(c, r), CellState::Ship);
    }
    grid
}

#[test]
fn test_two_deck_ship_hit_then_win() {
    let mut grid = ships_at(&[(3, 4), (4, 4)]);
    assert_eq!(resolve(&mut grid, 3, 4), ShotOutcome::Hit { at: at(3, 4) });
    assert_eq!(grid.get(at(3, 4)), CellState::Hit);

    let outcome = resolve(&mut grid, 4, 4);
    assert_eq!(outcome.kind(), OutcomeKind::Win);
    assert_eq!(grid.get(at(3, 4)), CellState::Sunk);
    assert_eq!(grid.get(at(4, 4)), CellState::Sunk);
    match outcome {
        ShotOutcome::Win { at: target, grid: final_grid } => {
            assert_eq!(target, at(4, 4));
            assert_eq!(final_grid, grid);
        }
        other => panic!("expected Win, got {:?}", other),
    }
}

#[test]
fn test_miss_then_already_shot_leaves_grid_unchanged() {
    let mut grid = ships_at(&[(3, 4), (4, 4)]);
    assert_eq!(resolve(&mut grid, 0, 0), ShotOutcome::Miss { at: at(0, 0) });
    assert_eq!(grid.get(at(0, 0)), CellState::Miss);

    let before = grid;
    assert_eq!(
        resolve(&mut grid, 0, 0),
        ShotOutcome::AlreadyShot { at: at(0, 0) }
    );
    assert_eq!(grid, before);
    assert_eq!(grid.to_rows(), before.to_rows());
}

#[test]
fn test_repeat_fire_on_hit_and_sunk_cells() {
    let mut grid = ships_at(&[(0, 0), (1, 0), (5, 5)]);
    resolve(&mut grid, 0, 0);
    let before = grid;
    assert_eq!(resolve(&mut grid, 0, 0).kind(), OutcomeKind::AlreadyShot);
    assert_eq!(grid, before);

    assert_eq!(resolve(&mut grid, 1, 0).kind(), OutcomeKind::Sunk);
    let before = grid;
    assert_eq!(resolve(&mut grid, 1, 0).kind(), OutcomeKind::AlreadyShot);
    assert_eq!(grid, before);
}

#[test]
fn test_out_of_bounds_is_rejected() {
    let mut grid = ships_at(&[(9, 9)]);
    let before = grid;
    assert_eq!(
        resolve(&mut grid, 10, 3),
        ShotOutcome::OutOfBounds { col: 10, row: 3 }
    );
    assert_eq!(resolve(&mut grid, 0, 42).kind(), OutcomeKind::OutOfBounds);
    assert_eq!(grid, before);
}

#[test]
fn test_sinking_recolours_whole_ship() {
    let mut grid = ships_at(&[(2, 6), (3, 6), (4, 6), (0, 0)]);
    assert_eq!(resolve(&mut grid, 3, 6).kind(), OutcomeKind::Hit);
    assert_eq!(resolve(&mut grid, 2, 6).kind(), OutcomeKind::Hit);
    assert_eq!(
        resolve(&mut grid, 4, 6),
        ShotOutcome::Sunk {
            at: at(4, 6),
            length: 3
        }
    );
    for c in 2..=4 {
        assert_eq!(grid.get(at(c, 6)), CellState::Sunk);
    }
    assert_eq!(grid.get(at(0, 0)), CellState::Ship);
}

#[test]
fn test_sinking_leaves_surrounding_water_untouched() {
    let mut grid = ships_at(&[(5, 5), (0, 0)]);
    assert_eq!(resolve(&mut grid, 5, 5).kind(), OutcomeKind::Sunk);
    for neighbour in at(5, 5).ring() {
        assert_eq!(grid.get(neighbour), CellState::Empty);
    }
    assert_eq!(grid.count(CellState::Miss), 0);
    assert_eq!(resolve(&mut grid, 5, 6).kind(), OutcomeKind::Miss);
}

#[test]
fn test_win_clears_dangling_hits() {
    // a stored board with a stray Hit that never completed a ship
    let mut grid = ships_at(&[(7, 7)]);
    grid.set(at(0, 0), CellState::Hit);
    let outcome = fire(&mut grid, at(7, 7));
    assert!(outcome.is_win());
    assert_eq!(grid.count(CellState::Hit), 0);
    assert_eq!(grid.get(at(0, 0)), CellState::Sunk);
}

#[test]
fn test_full_game_on_generated_board() {
    let mut grid = generate(&mut SmallRng::seed_from_u64(7)).unwrap();
    let targets: Vec<Coord> = grid
        .iter()
        .filter(|&(_, s)| s == CellState::Ship)
        .map(|(c, _)| c)
        .collect();
    assert_eq!(targets.len(), 20);

    let mut sunk = 0;
    let (last, rest) = targets.split_last().unwrap();
    for (fired, &target) in rest.iter().enumerate() {
        assert_eq!(grid.remaining_ship_cells(), 20 - fired);
        match fire(&mut grid, target).kind() {
            OutcomeKind::Sunk => sunk += 1,
            OutcomeKind::Hit => {}
            other => panic!("unexpected {:?} at {}", other, target),
        }
    }
    assert_eq!(sunk, 9);
    assert_eq!(grid.remaining_ship_cells(), 1);
    assert!(fire(&mut grid, *last).is_win());
    assert_eq!(grid.count(CellState::Hit), 0);
    assert_eq!(grid.count(CellState::Sunk), 20);
    assert_eq!(grid.remaining_ship_cells(), 0);
}

#[test]
fn test_counts_as_move() {
    let c = at(1, 1);
    assert!(ShotOutcome::Miss { at: c }.counts_as_move());
    assert!(ShotOutcome::Hit { at: c }.counts_as_move());
    assert!(ShotOutcome::Sunk { at: c, length: 2 }.counts_as_move());
    assert!(!ShotOutcome::AlreadyShot { at: c }.counts_as_move());
    assert!(!ShotOutcome::OutOfBounds { col: 11, row: 0 }.counts_as_move());
    assert!(ShotOutcome::AlreadyShot { at: c }.message().contains("B2"));
}
