//! ASCII grid fixtures and a breadth-first distance oracle.
//!
//! Maps are written top-down: the first text line is row `y = 0` and `x`
//! grows rightward, matching the grid crate's rendering convention.
//! Glyphs: `#` wall, `.` floor, `S` start designation, `G` goal
//! designation. Indentation and blank lines are stripped so maps can sit
//! inside raw string literals at any nesting depth.

use std::collections::{HashMap, VecDeque};

use lodestar_core::Pos;
use lodestar_grid::{CellClass, Grid};

/// Parse an ASCII map into a [`Grid`].
///
/// Rows must all be the same width. `S`/`G` may be omitted, in which
/// case the grid keeps its default corner designations.
///
/// # Panics
///
/// Panics on an empty map, ragged rows, or an unknown glyph. Fixture
/// maps are authored by hand; a malformed one is a bug in the test.
pub fn grid_from_ascii(map: &str) -> Grid {
    let rows: Vec<&str> = map
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    assert!(!rows.is_empty(), "map has no rows");
    let width = rows[0].chars().count();

    let mut builder = Grid::builder(width as i32, rows.len() as i32);
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(
            row.chars().count(),
            width,
            "map row {y} is not {width} cells wide"
        );
        for (x, glyph) in row.chars().enumerate() {
            let pos = Pos::new(x as i32, y as i32);
            builder = match glyph {
                '#' => builder.wall(pos),
                'S' => builder.start(pos),
                'G' => builder.goal(pos),
                '.' => builder,
                other => panic!("unknown map glyph {other:?} at {pos}"),
            };
        }
    }
    builder.build().expect("parsed map positions are in bounds")
}

/// Render a grid's current classification, one text line per row plus a
/// trailing newline.
///
/// Inverse of [`grid_from_ascii`] for untouched grids; after a search
/// has run, frontier and path marks show up as `o`/`x`/`*`.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let class = grid
                .classify(Pos::new(x, y))
                .expect("iterating in-bounds positions");
            out.push(glyph(class));
        }
        out.push('\n');
    }
    out
}

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

/// Breadth-first distances from `start`, in unit steps.
///
/// The ground truth for uniform-cost search: a position maps to its
/// exact shortest distance, and unreachable positions are absent.
/// Walkability matches the engine's rule, so `start` and `goal` are
/// enterable even when their blocked flag is set.
pub fn bfs_distances(grid: &Grid, start: Pos, goal: Pos) -> HashMap<Pos, u32> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);
    while let Some(pos) = queue.pop_front() {
        let next_dist = dist[&pos] + 1;
        for n in grid.neighbours(pos) {
            if grid.cell(n).blocked && n != start && n != goal {
                continue;
            }
            if !dist.contains_key(&n) {
                dist.insert(n, next_dist);
                queue.push_back(n);
            }
        }
    }
    dist
}
