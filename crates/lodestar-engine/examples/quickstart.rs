//! Lodestar Quickstart — a complete step-wise search from scratch.
//!
//! Demonstrates:
//!   1. Building a board with walls and endpoint designations
//!   2. Starting a run and stepping one expansion at a time
//!   3. Rendering the open/closed/path state between steps
//!   4. Reading the final path, costs, and counters
//!   5. Editing the board and re-running on the same grid
//!
//! Run with:
//!   cargo run --example quickstart

use lodestar_core::{Pos, SearchStatus};
use lodestar_engine::SearchEngine;
use lodestar_grid::{CellClass, Grid};

// ─── Board parameters ───────────────────────────────────────────

const WIDTH: i32 = 20;
const HEIGHT: i32 = 15;
const START: Pos = Pos::new(2, 7);
const GOAL: Pos = Pos::new(17, 7);

// ─── Rendering ──────────────────────────────────────────────────

fn glyph(class: CellClass) -> char {
    match class {
        CellClass::Blocked => '#',
        CellClass::Start => 'S',
        CellClass::Goal => 'G',
        CellClass::Path => '*',
        CellClass::Open => 'o',
        CellClass::Closed => 'x',
        CellClass::Floor => '.',
    }
}

fn print_board(grid: &Grid) {
    for y in 0..grid.height() {
        let row: String = (0..grid.width())
            .map(|x| glyph(grid.classify(Pos::new(x, y)).unwrap_or(CellClass::Floor)))
            .collect();
        println!("  {row}");
    }
    println!();
}

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Lodestar Quickstart ===\n");

    // 1. Build the board: a vertical wall stands between the endpoints,
    //    forcing a detour around one of its ends.
    let mut grid = Grid::builder(WIDTH, HEIGHT)
        .walls((3..=11).map(|y| Pos::new(10, y)))
        .start(START)
        .goal(GOAL)
        .build()?;
    println!(
        "Board: {}x{} cells, wall from (10, 3) to (10, 11)",
        grid.width(),
        grid.height()
    );

    // 2. Start the run with explicit endpoints.
    let mut engine = SearchEngine::new();
    engine.start(&mut grid, START, GOAL)?;
    println!("Searching {START} -> {GOAL}\n");

    // 3. Step one expansion at a time; any pacing works, the engine
    //    only advances when asked. Render a frame every 60 steps.
    while engine.status() == SearchStatus::Running {
        engine.step(&mut grid)?;
        let stats = engine.stats();
        if stats.steps % 60 == 0 {
            println!(
                "after {:>3} steps: open {:>3}, closed {:>3}",
                stats.steps,
                engine.open_set().count(),
                engine.closed_set().count()
            );
            print_board(&grid);
        }
    }

    // 4. Terminal state: the reconstructed path is marked on the board.
    println!("status: {}", engine.status());
    print_board(&grid);
    let stats = engine.stats();
    println!(
        "path: {} cells, cost {}; expanded {} of {} cells, peak open {}",
        engine.path().len(),
        grid.cell(GOAL).g,
        stats.expanded,
        grid.cell_count(),
        stats.peak_open,
    );

    // 5. Knock the wall down and re-run on the same grid: restart
    //    resets every annotation, so no stale marks survive.
    grid.clear_walls();
    engine.start(&mut grid, START, GOAL)?;
    engine.run_to_completion(&mut grid, None)?;
    println!(
        "\nwithout the wall: path {} cells, cost {}",
        engine.path().len(),
        grid.cell(GOAL).g
    );

    Ok(())
}
