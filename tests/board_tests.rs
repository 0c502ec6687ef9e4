use battlesalvo::{Board, CellState, Coord, SalvoError, ShipBoard};

#[test]
fn test_new_board_is_all_water() -> Result<(), SalvoError> {
    let board = Board::new(6, 8)?;
    assert_eq!(board.dimensions(), (6, 8));
    assert_eq!(board.count(CellState::Water), 48);
    assert_eq!(board.unresolved_coords().len(), 48);
    Ok(())
}

#[test]
fn test_dimensions_out_of_range_rejected() {
    // either dimension outside [6, 15] fails
    for (h, w) in [(5, 5), (16, 16), (10, 5), (5, 10), (6, 16)] {
        assert!(
            matches!(Board::new(h, w), Err(SalvoError::InvalidDimensions { .. })),
            "{}x{} should be rejected",
            h,
            w
        );
        assert!(matches!(
            ShipBoard::new(h, w),
            Err(SalvoError::InvalidDimensions { .. })
        ));
    }
    assert!(Board::new(6, 6).is_ok());
    assert!(Board::new(15, 15).is_ok());
}

#[test]
fn test_cell_access_out_of_bounds() -> Result<(), SalvoError> {
    let mut board = Board::new(6, 7)?;
    // x is the column, so x = 6 fits a width of 7 but y = 6 does not
    assert!(board.cell_at(Coord::new(6, 5)).is_ok());
    assert!(matches!(
        board.cell_at(Coord::new(6, 6)),
        Err(SalvoError::OutOfBounds { .. })
    ));
    assert!(matches!(
        board.set_cell_at(Coord::new(7, 0), CellState::Miss),
        Err(SalvoError::OutOfBounds { .. })
    ));
    Ok(())
}

#[test]
fn test_set_and_read_cells() -> Result<(), SalvoError> {
    let mut board = Board::new(6, 6)?;
    board.set_cell_at(Coord::new(2, 3), CellState::Hit)?;
    board.set_cell_at(Coord::new(0, 0), CellState::Miss)?;
    assert_eq!(board.cell_at(Coord::new(2, 3))?, CellState::Hit);
    assert_eq!(board.cell_at(Coord::new(0, 0))?, CellState::Miss);
    assert_eq!(board.unresolved_coords().len(), 34);
    assert!(!board.unresolved_coords().contains(&Coord::new(2, 3)));
    Ok(())
}

#[test]
fn test_render_rows_space_separated() -> Result<(), SalvoError> {
    let mut board = Board::new(6, 6)?;
    board.set_cell_at(Coord::new(1, 0), CellState::Ship)?;
    board.set_cell_at(Coord::new(0, 1), CellState::Hit)?;
    board.set_cell_at(Coord::new(5, 5), CellState::Miss)?;
    let rendered = board.to_string();
    let rows: Vec<&str> = rendered.lines().collect();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0], ". S . . . .");
    assert_eq!(rows[1], "H . . . . .");
    assert_eq!(rows[5], ". . . . . M");
    assert!(!rendered.ends_with('\n'));
    Ok(())
}

#[test]
fn test_coords_row_by_row() -> Result<(), SalvoError> {
    let board = Board::new(6, 7)?;
    let coords: Vec<Coord> = board.coords().collect();
    assert_eq!(coords.len(), 42);
    assert_eq!(coords[0], Coord::new(0, 0));
    assert_eq!(coords[1], Coord::new(1, 0));
    assert_eq!(coords[7], Coord::new(0, 1));
    assert!(coords.iter().all(|&c| board.is_in_bounds(c)));
    Ok(())
}

#[test]
fn test_negative_coordinates_rejected() {
    assert!(matches!(
        Coord::try_new(-1, 0),
        Err(SalvoError::InvalidCoordinate { x: -1, y: 0 })
    ));
    assert!(Coord::try_new(0, -3).is_err());
    assert_eq!(Coord::try_new(3, 4).ok(), Some(Coord::new(3, 4)));
}

#[test]
fn test_neighbors_skip_negative() {
    let corner: Vec<Coord> = Coord::new(0, 0).neighbors().collect();
    assert_eq!(corner, vec![Coord::new(1, 0), Coord::new(0, 1)]);
    let inner: Vec<Coord> = Coord::new(2, 2).neighbors().collect();
    assert_eq!(inner.len(), 4);
}
