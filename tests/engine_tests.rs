//! Grid engine tests - directional moves, spawning, terminal detection

use tui_2048::core::{Grid, GridEngine, GridSize, SimpleRng, TileRng};
use tui_2048::types::{Direction, MAX_TILE, SPAWN_VALUES};

/// Always returns the same draw (reduced modulo `max`).
struct Fixed(u32);

impl TileRng for Fixed {
    fn next_range(&mut self, max: u32) -> u32 {
        self.0 % max
    }
}

fn grid(rows: &[[u32; 4]]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

fn engine(rows: &[[u32; 4]]) -> GridEngine {
    GridEngine::from_grid(grid(rows), SimpleRng::new(1))
}

/// Random-ish grids with a mix of blanks and small tiles.
fn sample_grids(count: usize) -> Vec<Grid> {
    let mut rng = SimpleRng::new(2024);
    (0..count)
        .map(|_| {
            let mut g = Grid::new(GridSize::CLASSIC);
            for r in 0..4 {
                for c in 0..4 {
                    let v = [0, 0, 2, 4, 8, 16][rng.next_range(6) as usize];
                    g.set(r, c, v);
                }
            }
            g
        })
        .collect()
}

#[test]
fn test_left_move_example() {
    let mut e = engine(&[[2, 0, 2, 4], [0; 4], [0; 4], [0; 4]]);
    let out = e.apply_move(Direction::Left);
    assert!(out.changed);
    assert_eq!(e.grid().row(0), &[4, 4, 0, 0]);
    assert_eq!(e.score(), 4);
}

#[test]
fn test_empty_grid_move_is_noop() {
    let mut e = engine(&[[0; 4]; 4]);
    for d in Direction::ALL {
        assert!(!e.apply_move(d).changed);
    }
    assert_eq!(e.score(), 0);
}

#[test]
fn test_right_move() {
    let mut e = engine(&[[2, 2, 4, 4], [0, 0, 0, 2], [8, 0, 8, 0], [2, 4, 8, 16]]);
    let out = e.apply_move(Direction::Right);
    assert!(out.changed);
    assert_eq!(
        e.grid(),
        &grid(&[[0, 0, 4, 8], [0, 0, 0, 2], [0, 0, 0, 16], [2, 4, 8, 16]])
    );
    assert_eq!(e.score(), 4 + 8 + 16);
}

#[test]
fn test_up_and_down_moves() {
    let rows = [[2, 0, 4, 0], [2, 0, 4, 0], [0, 8, 4, 0], [4, 8, 4, 2]];

    let mut up = engine(&rows);
    up.apply_move(Direction::Up);
    assert_eq!(
        up.grid(),
        &grid(&[[4, 16, 8, 2], [4, 0, 8, 0], [0, 0, 0, 0], [0, 0, 0, 0]])
    );
    assert_eq!(up.score(), 4 + 16 + 8 + 8);

    let mut down = engine(&rows);
    down.apply_move(Direction::Down);
    assert_eq!(
        down.grid(),
        &grid(&[[0, 0, 0, 0], [0, 0, 0, 0], [4, 0, 8, 0], [4, 16, 8, 2]])
    );
}

#[test]
fn test_vertical_moves_match_transposed_horizontal_moves() {
    let pairs = [
        (Direction::Up, Direction::Left),
        (Direction::Down, Direction::Right),
    ];
    for g in sample_grids(200) {
        for (vertical, horizontal) in pairs {
            let mut direct = g;
            let direct_out = direct.slide(vertical);

            let mut via_transpose = g.transpose();
            let transposed_out = via_transpose.slide(horizontal);
            let via_transpose = via_transpose.transpose();

            assert_eq!(direct, via_transpose, "{:?} mismatch on {:?}", vertical, g);
            assert_eq!(direct_out, transposed_out);
        }
    }
}

#[test]
fn test_up_matches_manual_column_simulation() {
    for g in sample_grids(100) {
        let mut moved = g;
        moved.slide(Direction::Up);
        for col in 0..4 {
            let mut column: Vec<u32> = (0..4).map(|r| g.get(r, col).unwrap()).collect();
            tui_2048::core::slide_line(&mut column);
            let actual: Vec<u32> = (0..4).map(|r| moved.get(r, col).unwrap()).collect();
            assert_eq!(column, actual);
        }
    }
}

#[test]
fn test_repeat_direction_reports_unchanged() {
    for g in sample_grids(100) {
        for d in Direction::ALL {
            let mut e = GridEngine::from_grid(g, SimpleRng::new(1));
            e.apply_move(d);
            // Drain any merges the first pass exposed.
            while e.apply_move(d).changed {}
            let settled = *e.grid();
            let score = e.score();
            assert!(!e.apply_move(d).changed);
            assert_eq!(e.grid(), &settled);
            assert_eq!(e.score(), score);
        }
    }
}

#[test]
fn test_repeat_direction_after_full_compaction() {
    let mut e = engine(&[[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]);
    assert!(e.apply_move(Direction::Down).changed);
    assert!(!e.apply_move(Direction::Down).changed);
}

#[test]
fn test_score_tracks_created_tiles() {
    for g in sample_grids(100) {
        for d in Direction::ALL {
            let mut e = GridEngine::from_grid(g, SimpleRng::new(1));
            let out = e.apply_move(d);
            assert_eq!(e.score(), out.score_gained);
            if out.merges == 0 {
                assert_eq!(e.score(), 0);
            }
            // Tile sum is conserved by sliding.
            let before: u32 = g.cells().iter().sum();
            let after: u32 = e.grid().cells().iter().sum();
            assert_eq!(before, after);
        }
    }
}

#[test]
fn test_changed_false_leaves_grid_identical() {
    let rows = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
    let mut e = engine(&rows);
    for d in Direction::ALL {
        let out = e.apply_move(d);
        assert!(!out.changed);
        assert_eq!(out.score_gained, 0);
        assert_eq!(e.grid(), &grid(&rows));
    }
}

#[test]
fn test_spawn_on_full_grid_is_noop() {
    let rows = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 8]];
    let mut e = engine(&rows);
    assert!(!e.spawn_random_tile());
    assert_eq!(e.grid(), &grid(&rows));
}

#[test]
fn test_spawn_fills_the_only_empty_cell() {
    for seed in 0..50 {
        let rows = [[2, 4, 2, 4], [4, 2, 0, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
        let mut e = GridEngine::from_grid(grid(&rows), SimpleRng::new(seed));
        assert!(e.spawn_random_tile());
        let v = e.grid().get(1, 2).unwrap();
        assert!(SPAWN_VALUES.contains(&v));
        assert!(e.grid().is_full());
    }
}

#[test]
fn test_spawn_does_not_touch_score() {
    let mut e = GridEngine::new(GridSize::CLASSIC, 5);
    for _ in 0..16 {
        e.spawn_random_tile();
    }
    assert_eq!(e.score(), 0);
    assert!(e.grid().is_full());
}

#[test]
fn test_spawn_picks_cell_and_value_from_rng() {
    // Draw 0: first empty cell, first spawn value.
    let mut e = GridEngine::with_rng(GridSize::CLASSIC, Fixed(0));
    assert!(e.spawn_random_tile());
    assert_eq!(e.grid().get(0, 0), Some(2));
    assert!(e.spawn_random_tile());
    assert_eq!(e.grid().get(0, 1), Some(2));

    // Draw 3: fourth empty cell, value index 3 % 2 = 1.
    let mut e = GridEngine::with_rng(GridSize::CLASSIC, Fixed(3));
    assert!(e.spawn_random_tile());
    assert_eq!(e.grid().get(0, 3), Some(4));
}

#[test]
fn test_spawn_values_are_unweighted() {
    let mut twos = 0;
    let mut fours = 0;
    for seed in 1..=400 {
        let mut e = GridEngine::new(GridSize::CLASSIC, seed);
        e.spawn_random_tile();
        match e.max_tile() {
            2 => twos += 1,
            4 => fours += 1,
            other => panic!("unexpected spawn value {}", other),
        }
    }
    // Even odds: both well away from a 90/10 split.
    assert!(twos > 120, "twos = {}", twos);
    assert!(fours > 120, "fours = {}", fours);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GridEngine::new(GridSize::CLASSIC, 77);
    let mut b = GridEngine::new(GridSize::CLASSIC, 77);
    a.start();
    b.start();
    for d in [Direction::Left, Direction::Up, Direction::Right, Direction::Down].repeat(10) {
        assert_eq!(a.play(d), b.play(d));
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_is_terminal_iff_full_and_no_pairs() {
    let stuck = engine(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(stuck.is_terminal());

    let one_gap = engine(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]]);
    assert!(!one_gap.is_terminal());

    let horizontal_pair = engine(&[[2, 2, 8, 4], [4, 8, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(!horizontal_pair.is_terminal());

    let vertical_pair = engine(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [2, 8, 16, 2]]);
    assert!(!vertical_pair.is_terminal());
}

#[test]
fn test_is_terminal_agrees_with_can_move() {
    let mut rng = SimpleRng::new(11);
    for _ in 0..300 {
        let mut g = Grid::new(GridSize::CLASSIC);
        for r in 0..4 {
            for c in 0..4 {
                g.set(r, c, [2, 4, 8, 16, 32][rng.next_range(5) as usize]);
            }
        }
        let e = GridEngine::from_grid(g, SimpleRng::new(1));
        let any_legal = e.legal_moves().iter().any(|&ok| ok);
        assert_eq!(e.is_terminal(), !any_legal, "{:?}", g);
        assert_eq!(e.grid(), &g);
    }
}

#[test]
fn test_snapshot_is_a_copy() {
    let mut e = engine(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let mut snap = e.snapshot();
    snap.cells[0] = 1024;
    snap.score = 999;
    assert_eq!(e.grid().get(0, 0), Some(2));
    assert_eq!(e.score(), 0);

    e.apply_move(Direction::Left);
    let fresh = e.snapshot();
    assert_eq!(fresh.get(0, 0), Some(4));
    assert_eq!(fresh.score, 4);
    assert_ne!(fresh.board_hash, snap.board_hash);
}

#[test]
fn test_play_runs_to_game_over() {
    let mut e = GridEngine::new(GridSize::CLASSIC, 31337);
    e.start();
    let mut last_score = 0;
    let mut steps = 0;
    while !e.is_terminal() && steps < 100_000 {
        for d in Direction::ALL {
            let out = e.play(d);
            assert!(e.score() >= last_score);
            last_score = e.score();
            assert_eq!(out.spawned, out.moved.changed);
            for &v in e.grid().cells() {
                assert!(v == 0 || v.is_power_of_two());
            }
        }
        steps += 1;
    }
    assert!(e.is_terminal());
    assert!(e.snapshot().game_over);
}

#[test]
fn test_larger_and_smaller_boards() {
    for n in 2..=8u8 {
        let size = GridSize::new(n).unwrap();
        let mut e = GridEngine::new(size, n as u32);
        e.start();
        assert_eq!(e.grid().empty_count(), size.cell_count() - 2);
        assert_eq!(e.snapshot().rows().count(), n as usize);
    }
}

#[test]
fn test_capped_pair_stays_put() {
    let g = Grid::from_rows(&[[MAX_TILE, MAX_TILE], [0, 0]]).unwrap();
    let mut e = GridEngine::from_grid(g, SimpleRng::new(1));

    let out = e.apply_move(Direction::Left);
    assert!(!out.changed);
    assert_eq!(out.score_gained, 0);
    assert_eq!(e.score(), 0);
    assert_eq!(e.grid(), &g);
    assert!(!e.can_move(Direction::Right));
    assert!(e.can_move(Direction::Down));
}

#[test]
fn test_full_board_of_capped_tiles_is_terminal() {
    let g = Grid::from_rows(&[[MAX_TILE, MAX_TILE], [MAX_TILE, MAX_TILE]]).unwrap();
    let e = GridEngine::from_grid(g, SimpleRng::new(1));
    assert!(e.is_terminal());
    assert_eq!(e.legal_moves(), [false; 4]);
}

#[test]
fn test_merge_into_cap_scores_its_value() {
    let half = MAX_TILE / 2;
    let g = Grid::from_rows(&[[half, half], [0, 0]]).unwrap();
    let mut e = GridEngine::from_grid(g, SimpleRng::new(1));
    let out = e.apply_move(Direction::Left);
    assert!(out.changed);
    assert_eq!(e.score(), MAX_TILE);
    assert_eq!(e.grid().row(0), &[MAX_TILE, 0]);
}

#[test]
fn test_grid_refuses_non_tile_values() {
    let mut g = Grid::new(GridSize::CLASSIC);
    assert!(!g.set(0, 0, 3));
    assert!(Grid::from_rows(&[[3, 0], [0, 0]]).is_none());

    let e = GridEngine::from_grid(g, SimpleRng::new(1));
    assert!(e.grid().cells().iter().all(|&v| v == 0 || v.is_power_of_two()));
    assert_eq!(e.max_tile(), 0);
}
