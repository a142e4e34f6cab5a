//! Integration test: identical boards produce identical searches.
//!
//! The expansion order is a contract, not an accident of iteration
//! order, so equal inputs must reproduce equal closed sequences, paths,
//! and counters — across separate grids, across restarts of one grid,
//! and across interleaved runs on clones.

use lodestar_core::{Pos, SearchStatus};
use lodestar_engine::{SearchEngine, SearchStats};
use lodestar_test_utils::grid_from_ascii;

const BOARD: &str = "
    S...#...
    .##.#.#.
    .#..#.#.
    .#.##.#.
    .#....#G
    ";

fn p(x: i32, y: i32) -> Pos {
    Pos::new(x, y)
}

fn assert_stats_eq(a: &SearchStats, b: &SearchStats) {
    assert_eq!(a.steps, b.steps);
    assert_eq!(a.expanded, b.expanded);
    assert_eq!(a.relaxed, b.relaxed);
    assert_eq!(a.peak_open, b.peak_open);
}

#[test]
fn equal_boards_reproduce_the_run() {
    let mut first_grid = grid_from_ascii(BOARD);
    let mut second_grid = grid_from_ascii(BOARD);
    let mut first = SearchEngine::new();
    let mut second = SearchEngine::new();

    first.start(&mut first_grid, p(0, 0), p(7, 4)).unwrap();
    second.start(&mut second_grid, p(0, 0), p(7, 4)).unwrap();
    first.run_to_completion(&mut first_grid, None).unwrap();
    second.run_to_completion(&mut second_grid, None).unwrap();

    assert_eq!(first.status(), SearchStatus::Succeeded);
    let first_closed: Vec<Pos> = first.closed_set().collect();
    let second_closed: Vec<Pos> = second.closed_set().collect();
    assert_eq!(first_closed, second_closed);
    assert_eq!(first.path(), second.path());
    assert_stats_eq(first.stats(), second.stats());
}

#[test]
fn restarting_reproduces_the_run() {
    let mut grid = grid_from_ascii(BOARD);
    let mut engine = SearchEngine::new();

    engine.start(&mut grid, p(0, 0), p(7, 4)).unwrap();
    engine.run_to_completion(&mut grid, None).unwrap();
    let first_closed: Vec<Pos> = engine.closed_set().collect();
    let first_path = engine.path().to_vec();
    let first_stats = engine.stats().clone();

    engine.start(&mut grid, p(0, 0), p(7, 4)).unwrap();
    engine.run_to_completion(&mut grid, None).unwrap();
    let second_closed: Vec<Pos> = engine.closed_set().collect();

    assert_eq!(first_closed, second_closed);
    assert_eq!(engine.path(), first_path.as_slice());
    assert_stats_eq(engine.stats(), &first_stats);
}

#[test]
fn interleaved_runs_on_clones_do_not_interfere() {
    let mut grid = grid_from_ascii(BOARD);
    let mut copy = grid.clone();
    let mut ahead = SearchEngine::new();
    let mut behind = SearchEngine::new();

    ahead.start(&mut grid, p(0, 0), p(7, 4)).unwrap();
    behind.start(&mut copy, p(0, 0), p(7, 4)).unwrap();

    // One engine runs two steps for the other's one; lockstep is not
    // required for determinism, only equal inputs.
    while ahead.status() == SearchStatus::Running || behind.status() == SearchStatus::Running {
        ahead.step(&mut grid).unwrap();
        ahead.step(&mut grid).unwrap();
        behind.step(&mut copy).unwrap();
    }

    assert_eq!(ahead.status(), SearchStatus::Succeeded);
    assert_eq!(behind.status(), SearchStatus::Succeeded);
    let ahead_closed: Vec<Pos> = ahead.closed_set().collect();
    let behind_closed: Vec<Pos> = behind.closed_set().collect();
    assert_eq!(ahead_closed, behind_closed);
    assert_eq!(ahead.path(), behind.path());
}
