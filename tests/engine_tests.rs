//! Integration tests for the 2048 session: concrete scenarios and invariants.

use proptest::prelude::*;

use rust_2048::{
    can_move, is_stuck, legal_moves, shift, Board, Direction, Game2048, Game2048Builder, GameConfig,
    GameError, GameRng, RandomSource, ScriptedRng, Tile, MAX_TILE,
};

fn game_from(rows: &[&[Tile]], rng: ScriptedRng) -> Game2048<ScriptedRng> {
    let board = Board::from_rows(rows).unwrap();
    let config = GameConfig::new(board.width(), board.height(), 0.1);
    Game2048::from_board(config, board, 0, rng).unwrap()
}

/// Brute force: does any direction change the board?
fn any_move_changes(board: &Board) -> bool {
    Direction::ALL.into_iter().any(|dir| shift(board, dir).changed)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_merge_then_spawn_in_corner() {
    // Scripted source: value roll 0.5 (a 2), cell index 14 = (3, 3) among 15 empties.
    let mut game = game_from(
        &[&[2, 2, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]],
        ScriptedRng::constant(0.5, 14),
    );

    let pre_spawn = shift(game.board(), Direction::Left);
    assert_eq!(pre_spawn.board.row(0), &[4, 0, 0, 0]);

    let outcome = game.apply_move(Direction::Left);
    assert_eq!(outcome.score_delta, 4);
    assert_eq!(game.score(), 4);
    assert_eq!(
        game.board().to_rows(),
        vec![vec![4, 0, 0, 0], vec![0, 0, 0, 0], vec![0, 0, 0, 0], vec![0, 0, 0, 2]]
    );
}

#[test]
fn test_alternating_row_is_a_no_op() {
    let mut game = game_from(&[&[2, 4, 2, 4]], ScriptedRng::constant(0.5, 0));
    let outcome = game.apply_move(Direction::Left);

    assert_eq!(game.board().row(0), &[2, 4, 2, 4]);
    assert_eq!(outcome.score_delta, 0);
    assert!(!outcome.changed);
    assert!(outcome.spawned.is_none());
    assert_eq!(game.score(), 0);
}

#[test]
fn test_no_chain_merge_in_one_move() {
    let mut game = game_from(&[&[2, 2, 2, 2], &[0, 0, 0, 0]], ScriptedRng::constant(0.5, 0));
    let outcome = game.apply_move(Direction::Left);

    assert_eq!(game.board().row(0), &[4, 4, 0, 0]);
    assert_eq!(outcome.score_delta, 8);
}

#[test]
fn test_game_over_reported_by_the_move_that_locks_the_board() {
    // Left merges the 2s on row 0 and leaves one gap at (0, 3); the spawned
    // 2 fills it and no row or column has an equal pair afterwards.
    let mut game = game_from(
        &[&[2, 2, 8, 16], &[2, 4, 8, 16], &[4, 8, 16, 2], &[2, 4, 8, 16]],
        ScriptedRng::constant(0.5, 0),
    );
    assert!(!game.is_over());

    let outcome = game.apply_move(Direction::Left);
    assert_eq!(
        game.board().to_rows(),
        vec![vec![4, 8, 16, 2], vec![2, 4, 8, 16], vec![4, 8, 16, 2], vec![2, 4, 8, 16]]
    );
    assert_eq!(outcome.score_delta, 4);
    assert!(outcome.changed);
    assert!(outcome.game_over);
    assert!(game.is_over());
    assert!(!any_move_changes(game.board()));
}

#[test]
fn test_locked_board_detected() {
    let mut game = game_from(
        &[&[2, 4, 2, 4], &[4, 2, 4, 2], &[2, 4, 2, 4], &[4, 2, 4, 8]],
        ScriptedRng::default(),
    );
    assert!(game.is_over());
    for dir in Direction::ALL {
        let outcome = game.apply_move(dir);
        assert_eq!(outcome.score_delta, 0);
        assert!(outcome.game_over);
    }
}

#[test]
fn test_invalid_direction_leaves_board_unchanged() {
    let mut game = Game2048Builder::new().build(5).unwrap();
    let before = game.board().clone();
    assert_eq!(game.one_turn(9), Err(GameError::InvalidDirection(9)));
    assert_eq!(game.board(), &before);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let mut a = Game2048Builder::new().build(2024).unwrap();
    let mut b = Game2048Builder::new().build(2024).unwrap();
    for i in 0..200 {
        let dir = Direction::ALL[i % 4];
        assert_eq!(a.apply_move(dir), b.apply_move(dir));
    }
    assert_eq!(a.board(), b.board());
    assert_eq!(a.score(), b.score());
}

#[test]
fn test_random_game_runs_to_completion() {
    let mut game = Game2048Builder::new().build(99).unwrap();
    let mut policy = GameRng::new(100);
    let mut steps = 0;
    while !game.is_over() {
        let dir = Direction::ALL[policy.next_index(4)];
        game.apply_move(dir);
        steps += 1;
        assert!(steps < 1_000_000, "game did not terminate");
    }
    assert!(game.legal_moves().is_empty());
    assert!(is_stuck(game.board()));
    assert!(game.score() > 0);
}

#[test]
fn test_capped_tiles_end_the_game_without_overflow() {
    let capped = game_from(&[&[MAX_TILE, MAX_TILE]], ScriptedRng::constant(0.5, 0));
    assert!(capped.is_over());

    let mut game = game_from(&[&[MAX_TILE / 2, MAX_TILE / 2, 0]], ScriptedRng::constant(0.5, 0));
    let outcome = game.apply_move(Direction::Left);
    assert_eq!(outcome.score_delta, MAX_TILE);
    assert_eq!(game.board().row(0)[0], MAX_TILE);
}

// =============================================================================
// Spawn distribution
// =============================================================================

const SPAWN_TRIALS: u64 = 10_000;

/// Spawns from one seeded Right move per seed on a board holding a single 2
/// in the top-left corner, which leaves 15 empty cells.
fn seeded_spawns() -> Vec<(usize, usize, Tile)> {
    let mut board_rows = vec![vec![0; 4]; 4];
    board_rows[0][0] = 2;
    let board = Board::from_rows(&board_rows).unwrap();

    (0..SPAWN_TRIALS)
        .map(|seed| {
            let mut game =
                Game2048::from_board(GameConfig::default(), board.clone(), 0, GameRng::new(seed)).unwrap();
            let spawn = game.apply_move(Direction::Right).spawned.unwrap();
            (spawn.row, spawn.col, spawn.value)
        })
        .collect()
}

#[test]
fn test_spawn_value_frequency_matches_prob_4() {
    let spawns = seeded_spawns();
    assert!(spawns.iter().all(|&(_, _, v)| v == 2 || v == 4));

    let fours = spawns.iter().filter(|&&(_, _, v)| v == 4).count();
    let fraction = fours as f64 / SPAWN_TRIALS as f64;
    assert!((fraction - 0.1).abs() < 0.02, "4s made up {fraction:.4} of spawns");
}

#[test]
fn test_spawn_cell_is_uniform_over_empty_cells() {
    let mut counts = [[0u64; 4]; 4];
    for (row, col, _) in seeded_spawns() {
        counts[row][col] += 1;
    }

    // The moved tile sits at (0, 3); nothing may spawn there.
    assert_eq!(counts[0][3], 0);

    let expected = SPAWN_TRIALS / 15;
    for (row, row_counts) in counts.iter().enumerate() {
        for (col, &count) in row_counts.iter().enumerate() {
            if (row, col) == (0, 3) {
                continue;
            }
            assert!(
                count.abs_diff(expected) < 125,
                "cell ({row}, {col}) got {count} spawns, expected about {expected}"
            );
        }
    }
}

// =============================================================================
// Properties
// =============================================================================

fn arb_board() -> impl Strategy<Value = Board> {
    (1usize..=5, 1usize..=5).prop_flat_map(|(width, height)| {
        prop::collection::vec(0u32..=6, width * height).prop_map(move |exponents| {
            let rows: Vec<Vec<Tile>> = exponents
                .chunks(width)
                .map(|chunk| chunk.iter().map(|&e| if e == 0 { 0 } else { 1 << e }).collect())
                .collect();
            Board::from_rows(&rows).unwrap()
        })
    })
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    (0usize..4).prop_map(|i| Direction::ALL[i])
}

proptest! {
    #[test]
    fn prop_shift_conserves_tile_sum(board in arb_board(), dir in arb_direction()) {
        let out = shift(&board, dir);
        prop_assert_eq!(out.board.tile_sum(), board.tile_sum());
        prop_assert!(out.board.tile_count() <= board.tile_count());
        prop_assert_eq!(out.changed, out.board != board);
        if !out.changed {
            prop_assert_eq!(out.gained, 0);
        }
    }

    #[test]
    fn prop_can_move_matches_shift(board in arb_board()) {
        for dir in Direction::ALL {
            prop_assert_eq!(can_move(&board, dir), shift(&board, dir).changed);
        }
        prop_assert_eq!(is_stuck(&board), !any_move_changes(&board));
        prop_assert_eq!(legal_moves(&board).is_empty(), is_stuck(&board));
    }

    #[test]
    fn prop_blocked_direction_is_true_no_op(board in arb_board(), dir in arb_direction(), seed in any::<u64>()) {
        let config = GameConfig::new(board.width(), board.height(), 0.1);
        let mut game = Game2048::from_board(config, board, 0, GameRng::new(seed)).unwrap();
        if !can_move(game.board(), dir) {
            let before = game.board().clone();
            let first = game.apply_move(dir);
            let second = game.apply_move(dir);
            prop_assert_eq!(game.board(), &before);
            prop_assert_eq!(first.score_delta, 0);
            prop_assert_eq!(second.score_delta, 0);
            prop_assert_eq!(game.score(), 0);
        }
    }

    #[test]
    fn prop_session_invariants(
        seed in any::<u64>(),
        width in 1usize..=5,
        height in 1usize..=5,
        prob_4 in 0.0f64..=1.0,
        actions in prop::collection::vec(0i64..4, 0..200),
    ) {
        let mut game = Game2048Builder::new()
            .width(width)
            .height(height)
            .prob_4(prob_4)
            .build(seed)
            .unwrap();

        for action in actions {
            let score_before = game.score();
            let tiles_before = game.board().tile_count();
            let sum_before = game.board().tile_sum();
            let outcome = game.one_turn(action).unwrap();

            prop_assert!(game.board().cells().iter().all(|&v| rust_2048::core::is_valid_tile(v)));
            prop_assert_eq!(game.score(), score_before + outcome.score_delta);
            prop_assert!(game.board().tile_count() <= width * height);

            if outcome.changed {
                prop_assert!(game.board().tile_count() <= tiles_before + 1);
                let spawn = outcome.spawned.expect("board-changing move leaves a gap");
                prop_assert!(spawn.value == 2 || spawn.value == 4);
                prop_assert_eq!(game.board().tile_sum(), sum_before + spawn.value);
            } else {
                prop_assert_eq!(game.board().tile_count(), tiles_before);
                prop_assert_eq!(outcome.score_delta, 0);
            }

            prop_assert_eq!(outcome.game_over, game.is_over());
            prop_assert_eq!(game.is_over(), !any_move_changes(game.board()));
        }
    }
}
