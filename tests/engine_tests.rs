//! Engine tests - move, merge, spawn and terminal rules

use tui_2048::core::{slide_row_left, GridEngine, GridError};
use tui_2048::types::{Direction, Tile, DEFAULT_BOARD_SIZE, MAX_TILE};

fn engine_from(rows: &[&[Tile]]) -> GridEngine {
    GridEngine::from_rows(rows, 12345).unwrap()
}

fn non_zero(engine: &GridEngine) -> usize {
    engine.grid().cells().iter().filter(|&&v| v != 0).count()
}

#[test]
fn test_default_engine_is_six_by_six() {
    let engine = GridEngine::new(DEFAULT_BOARD_SIZE, 1).unwrap();
    assert_eq!(engine.size(), 6);
    assert_eq!(engine.grid().cells().len(), 36);
    assert_eq!(engine.score(), 0);
    assert!(!engine.is_terminal());
}

#[test]
fn test_scenario_compact_then_merge() {
    let mut row = [0, 2, 2, 4];
    let outcome = slide_row_left(&mut row);
    assert_eq!(row, [4, 4, 0, 0]);
    assert_eq!(outcome.gained, 4);
    assert!(outcome.changed);
}

#[test]
fn test_scenario_three_equal_merge_once() {
    let mut row = [2, 0, 2, 2];
    let outcome = slide_row_left(&mut row);
    assert_eq!(row, [4, 2, 0, 0]);
    assert_eq!(outcome.gained, 4);
}

#[test]
fn test_four_equal_merge_pairwise() {
    let mut row = [2, 2, 2, 2];
    slide_row_left(&mut row);
    assert_eq!(row, [4, 4, 0, 0]);
    assert_ne!(row, [8, 0, 0, 0]);
    assert_ne!(row, [4, 0, 0, 4]);
}

#[test]
fn test_scenario_through_engine_updates_score() {
    let mut engine = engine_from(&[
        &[0, 2, 2, 4],
        &[0, 0, 0, 0],
        &[0, 0, 0, 0],
        &[0, 0, 0, 0],
    ]);
    assert!(engine.apply_move(Direction::Left));
    assert_eq!(engine.grid().row(0).map(|r| &r[..2]), Some(&[4, 4][..]));
    assert_eq!(engine.score(), 4);
    // two tiles left after the merge, plus the spawn
    assert_eq!(non_zero(&engine), 3);
}

#[test]
fn test_every_direction_moves_toward_its_edge() {
    let center: [&[Tile]; 3] = [&[0, 0, 0], &[0, 8, 0], &[0, 0, 0]];

    let expectations = [
        (Direction::Left, (1, 0)),
        (Direction::Right, (1, 2)),
        (Direction::Up, (0, 1)),
        (Direction::Down, (2, 1)),
    ];

    for (dir, (row, col)) in expectations {
        let mut engine = engine_from(&center);
        assert!(engine.apply_move(dir), "{:?} should move the tile", dir);
        assert_eq!(engine.cell(row, col), Some(8), "{:?}", dir);
        assert_eq!(engine.score(), 0);
    }
}

#[test]
fn test_right_merges_from_the_right_edge() {
    let mut engine = engine_from(&[
        &[2, 2, 2, 0],
        &[0, 0, 0, 0],
        &[0, 0, 0, 0],
        &[0, 0, 0, 0],
    ]);
    assert!(engine.apply_move(Direction::Right));
    // Slide-right is slide-left on the mirrored row: [2,2,2] -> [4,2] from the right.
    assert_eq!(engine.cell(0, 3), Some(4));
    assert_eq!(engine.cell(0, 2), Some(2));
    assert_eq!(engine.score(), 4);
}

#[test]
fn test_down_merges_from_the_bottom_edge() {
    let mut engine = engine_from(&[
        &[4, 0, 0],
        &[2, 0, 0],
        &[2, 0, 0],
    ]);
    assert!(engine.apply_move(Direction::Down));
    assert_eq!(engine.cell(2, 0), Some(4));
    assert_eq!(engine.cell(1, 0), Some(4));
    assert_eq!(engine.score(), 4);
}

#[test]
fn test_noop_move_returns_false_and_keeps_state() {
    let mut engine = engine_from(&[
        &[2, 4, 8, 16],
        &[32, 64, 128, 256],
        &[0, 0, 0, 0],
        &[0, 0, 0, 0],
    ]);
    let before = engine.grid().clone();
    let empties = engine.empty_tiles().to_vec();

    assert!(!engine.apply_move(Direction::Left));
    assert!(!engine.apply_move(Direction::Up));

    assert_eq!(engine.grid(), &before);
    assert_eq!(engine.empty_tiles(), empties.as_slice());
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.moves(), 0);
}

#[test]
fn test_full_grid_without_pairs_is_terminal() {
    let engine = engine_from(&[
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
    ]);
    assert!(engine.is_terminal());
}

#[test]
fn test_full_grid_with_vertical_pair_is_not_terminal() {
    let engine = engine_from(&[
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
        &[2, 4, 2, 4],
        &[2, 8, 16, 32],
    ]);
    assert!(!engine.is_terminal());
}

#[test]
fn test_any_empty_cell_is_not_terminal() {
    let engine = engine_from(&[
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
        &[2, 4, 0, 4],
        &[4, 2, 4, 2],
    ]);
    assert!(!engine.is_terminal());
}

#[test]
fn test_moves_after_terminal_change_nothing() {
    let mut engine = engine_from(&[
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
    ]);
    let before = engine.grid().clone();
    for dir in Direction::ALL {
        assert!(!engine.apply_move(dir));
    }
    assert_eq!(engine.grid(), &before);
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_last_merge_can_unlock_a_full_grid() {
    let mut engine = engine_from(&[&[2, 2], &[4, 8]]);
    assert!(!engine.is_terminal());
    assert!(engine.apply_move(Direction::Left));
    // [4,0] gains a spawned tile in the freed cell.
    assert_eq!(engine.cell(0, 0), Some(4));
    assert!(matches!(engine.cell(0, 1), Some(2) | Some(4)));
    assert!(engine.empty_tiles().is_empty());
}

#[test]
fn test_unknown_direction_is_rejected_not_aliased_to_left() {
    let mut engine = engine_from(&[&[0, 2], &[0, 0]]);
    let before = engine.grid().clone();

    let err = engine.apply_named_move("NorthEast").unwrap_err();
    assert_eq!(err, GridError::UnknownDirection("NorthEast".to_string()));
    assert_eq!(err.to_string(), "unknown direction: \"NorthEast\"");
    assert_eq!(engine.grid(), &before);

    // Left itself would have moved the tile.
    assert_eq!(engine.apply_named_move("left"), Ok(true));
    assert_eq!(engine.cell(0, 0), Some(2));
}

#[test]
fn test_spawn_fills_only_empty_cells_until_full() {
    let mut engine = GridEngine::new(3, 77).unwrap();
    for placed in 1..=9 {
        let (row, col, value) = engine.spawn_random_tile().unwrap();
        assert_eq!(engine.cell(row, col), Some(value));
        assert!(value == 2 || value == 4);
        assert_eq!(non_zero(&engine), placed);
        assert_eq!(engine.empty_tiles(), engine.grid().empty_cells().as_slice());
    }
    assert_eq!(engine.spawn_random_tile(), None);
    assert_eq!(non_zero(&engine), 9);
}

#[test]
fn test_same_seed_replays_identically() {
    let moves = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Down,
    ];

    let mut a = GridEngine::new(4, 2024).unwrap();
    let mut b = GridEngine::new(4, 2024).unwrap();
    a.start();
    b.start();
    for dir in moves {
        assert_eq!(a.apply_move(dir), b.apply_move(dir));
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.score(), b.score());
    }
}

#[test]
fn test_restart_resets_and_places_opening_tiles() {
    let mut engine = engine_from(&[&[2, 2, 0], &[0, 0, 0], &[0, 0, 0]]);
    engine.apply_move(Direction::Left);
    assert_eq!(engine.score(), 4);

    engine.restart();
    assert_eq!(engine.size(), 3);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.moves(), 0);
    assert_eq!(non_zero(&engine), 2);
}

#[test]
fn test_from_rows_rejects_non_square() {
    let rows: Vec<Vec<Tile>> = vec![vec![0, 0], vec![0, 0], vec![0, 0]];
    assert!(matches!(
        GridEngine::from_rows(&rows, 1),
        Err(GridError::NotSquare { .. })
    ));
}

#[test]
fn test_max_tiles_do_not_overflow_on_merge() {
    let mut engine = engine_from(&[&[MAX_TILE, MAX_TILE], &[2, 4]]);
    let before = engine.grid().clone();

    assert!(engine.is_terminal());
    for dir in Direction::ALL {
        assert!(!engine.apply_move(dir), "{:?}", dir);
    }
    assert_eq!(engine.grid(), &before);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.moves(), 0);
}

#[test]
fn test_merge_up_to_max_tile_keeps_its_value() {
    let half = MAX_TILE / 2;
    let mut engine = engine_from(&[&[half, half], &[2, 4]]);

    assert!(engine.apply_move(Direction::Left));
    assert_eq!(engine.cell(0, 0), Some(MAX_TILE));
    assert_eq!(engine.score(), MAX_TILE);
    assert!(matches!(engine.cell(0, 1), Some(2) | Some(4)));
}

#[test]
fn test_from_rows_rejects_values_that_are_not_tiles() {
    let rows: [&[Tile]; 2] = [&[2, 3], &[0, 0]];
    assert_eq!(
        GridEngine::from_rows(&rows, 1).unwrap_err(),
        GridError::InvalidTile {
            row: 0,
            col: 1,
            value: 3
        }
    );
}
