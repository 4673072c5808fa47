use seabattle::{render, symbol, CellMask, CellState, Coord, Grid, GridError, Reveal};

fn at(col: usize, row: usize) -> Coord {
    Coord::new(col, row).unwrap()
}

fn grid_with(cells: &[(usize, usize, CellState)]) -> Grid {
    let mut grid = Grid::new();
    for &(c, r, s) in cells {
        grid.set(at(c, r), s);
    }
    grid
}

#[test]
fn test_new_grid_is_water() {
    let grid = Grid::new();
    assert_eq!(grid.count(CellState::Empty), 100);
    assert!(!grid.has_afloat());
    assert!(grid.ships().is_empty());
}

#[test]
fn test_rows_roundtrip() {
    let grid = grid_with(&[
        (0, 0, CellState::Ship),
        (1, 0, CellState::Hit),
        (5, 5, CellState::Miss),
        (9, 9, CellState::Sunk),
    ]);
    let rows = grid.to_rows();
    assert_eq!(rows.len(), 10);
    assert!(rows.iter().all(|r| r.len() == 10));
    assert_eq!(rows[0][0], 1);
    assert_eq!(rows[0][1], 3);
    assert_eq!(rows[5][5], 2);
    assert_eq!(rows[9][9], 4);
    assert_eq!(Grid::from_rows(&rows).unwrap(), grid);
}

#[test]
fn test_from_rows_rejects_bad_shapes() {
    let short = vec![vec![0u8; 10]; 9];
    assert!(matches!(
        Grid::from_rows(&short),
        Err(GridError::BadDimensions { rows: 9, .. })
    ));

    let mut ragged = vec![vec![0u8; 10]; 10];
    ragged[3] = vec![0u8; 11];
    assert_eq!(
        Grid::from_rows(&ragged),
        Err(GridError::BadDimensions { rows: 10, cols: 11 })
    );

    let mut bad_state = vec![vec![0u8; 10]; 10];
    bad_state[2][2] = 5;
    assert_eq!(Grid::from_rows(&bad_state), Err(GridError::BadCellState(5)));
}

#[test]
fn test_ship_at_follows_edges_only() {
    let grid = grid_with(&[
        (2, 2, CellState::Ship),
        (3, 2, CellState::Hit),
        (4, 2, CellState::Sunk),
        // diagonal neighbour is a different component
        (5, 3, CellState::Ship),
        (2, 3, CellState::Miss),
    ]);
    let ship = grid.ship_at(at(3, 2));
    assert_eq!(ship.len(), 3);
    assert!(ship.contains(at(2, 2)));
    assert!(ship.contains(at(4, 2)));
    assert!(!ship.contains(at(5, 3)));
    assert!(grid.ship_at(at(2, 3)).is_empty());
    assert!(grid.ship_at(at(0, 0)).is_empty());
    assert_eq!(grid.ships().len(), 2);
}

#[test]
fn test_ship_at_is_bounded_on_a_full_board() {
    let mut grid = Grid::new();
    for c in Coord::all() {
        grid.set(c, CellState::Ship);
    }
    assert_eq!(grid.ship_at(at(5, 5)).len(), 100);
}

#[test]
fn test_cell_mask_dilate() {
    let corner = CellMask::single(at(0, 0)).dilate();
    assert_eq!(corner.len(), 4);
    let middle = CellMask::single(at(5, 5)).dilate();
    assert_eq!(middle.len(), 9);
    let bar: CellMask = (0..3).map(|c| at(c + 3, 4)).collect();
    assert_eq!(bar.dilate().len(), 15);
    assert_eq!((!CellMask::new()).len(), 100);
}

#[test]
fn test_render_distinguishes_states() {
    let grid = grid_with(&[
        (0, 0, CellState::Ship),
        (1, 0, CellState::Miss),
        (2, 0, CellState::Hit),
        (3, 0, CellState::Sunk),
    ]);
    let symbols: Vec<char> = CellState::ALL.iter().map(|&s| symbol(s)).collect();
    let mut unique = symbols.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), 5);

    let full = render(&grid, Reveal::All);
    let first_row = full.lines().nth(3).unwrap();
    assert!(first_row.contains(" 1 S o X # ."));

    let hidden = render(&grid, Reveal::Hidden);
    let first_row = hidden.lines().nth(3).unwrap();
    assert!(first_row.contains(" 1 . o X # ."));
    assert!(hidden.contains("A B C D E F G H I J"));
}
