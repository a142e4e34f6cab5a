//! Benchmark board profiles for the Lodestar pathfinding toolkit.
//!
//! Provides pre-built [`Grid`] layouts for benchmarking and examples:
//!
//! - [`open_field`]: wall-free board, the all-cells-expanded worst case
//! - [`serpentine`]: switchback maze forcing a path through every band
//! - [`random_scatter`]: seeded random walls at a chosen density
//!
//! Every profile places the start at the top-left corner and the goal at
//! the bottom-right, so `grid.start()` and `grid.goal()` are ready to feed
//! straight into an engine.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lodestar_core::Pos;
use lodestar_grid::Grid;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build a wall-free square board.
///
/// With uniform costs and a Manhattan heuristic every cell of an open
/// board ties on f, so a full search closes all `size * size` cells.
/// That makes this the heaviest profile per cell and a good ceiling
/// measurement. `size` must be at least 2.
pub fn open_field(size: i32) -> Grid {
    Grid::builder(size, size)
        .start(Pos::new(0, 0))
        .goal(Pos::new(size - 1, size - 1))
        .build()
        .unwrap()
}

/// Build a switchback maze.
///
/// Every other row is a wall with a single gap, alternating between the
/// right and left edge, so the only route snakes through each horizontal
/// band in turn. The last row is always left open for the goal. `size`
/// must be at least 2.
pub fn serpentine(size: i32) -> Grid {
    let mut walls = Vec::new();
    let mut y = 1;
    while y + 1 < size {
        let gap = if y % 4 == 1 { size - 1 } else { 0 };
        walls.extend((0..size).filter(|&x| x != gap).map(|x| Pos::new(x, y)));
        y += 2;
    }

    Grid::builder(size, size)
        .start(Pos::new(0, 0))
        .goal(Pos::new(size - 1, size - 1))
        .walls(walls)
        .build()
        .unwrap()
}

/// Build a board with randomly scattered walls.
///
/// Each cell is blocked with probability `density_pct / 100`, drawn from
/// a ChaCha8 stream seeded with `seed`, so the same arguments always
/// produce the same board. One draw is consumed per cell regardless of
/// the density, which keeps the wall pattern for a given seed stable as
/// the density varies. The start and goal corners are never blocked;
/// connectivity between them is otherwise not guaranteed. `size` must be
/// at least 2 and `density_pct` at most 100.
pub fn random_scatter(size: i32, density_pct: u32, seed: u64) -> Grid {
    let start = Pos::new(0, 0);
    let goal = Pos::new(size - 1, size - 1);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut walls = Vec::new();
    for y in 0..size {
        for x in 0..size {
            let roll = rng.next_u32() % 100;
            let pos = Pos::new(x, y);
            if roll < density_pct && pos != start && pos != goal {
                walls.push(pos);
            }
        }
    }

    Grid::builder(size, size)
        .start(start)
        .goal(goal)
        .walls(walls)
        .build()
        .unwrap()
}
