//! Rectangular grid with walls, endpoints, and checked accessors.

use crate::cell::{Cell, CellClass};
use crate::error::GridError;
use lodestar_core::{GridInstanceId, Pos};
use smallvec::SmallVec;

/// Neighbour offsets `(dx, dy)` in expansion order.
///
/// The order is part of the search contract: it fixes the insertion order
/// of equally-ranked frontier cells and therefore which of several optimal
/// paths a run reconstructs. Vertical pair first (`y + 1`, then `y - 1`),
/// horizontal pair second (`x + 1`, then `x - 1`).
const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// A rectangular board of [`Cell`]s with designated start and goal cells.
///
/// The grid owns both the static map (walls) and the per-cell annotations
/// a search run writes (costs, parent links, membership flags). Walls and
/// endpoint designations survive [`Grid::reset_annotations`]; a fresh run
/// resets everything else.
///
/// Every instance carries a unique [`GridInstanceId`]. Cloning produces an
/// equal board under a fresh ID, so an engine bound to the original will
/// refuse to step the clone rather than silently mix two runs' state.
///
/// # Examples
///
/// ```
/// use lodestar_grid::Grid;
/// use lodestar_core::Pos;
///
/// let grid = Grid::new(20, 15).unwrap();
/// assert_eq!(grid.cell_count(), 300);
/// // Endpoints default to opposite corners until designated.
/// assert_eq!(grid.start(), Pos::new(0, 0));
/// assert_eq!(grid.goal(), Pos::new(19, 14));
/// ```
#[derive(Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    start: Pos,
    goal: Pos,
    instance_id: GridInstanceId,
}

impl Grid {
    /// Maximum size of either dimension.
    ///
    /// Bounds the cell count, and with it every reachable `g` cost, far
    /// below `u32::MAX`, so cost arithmetic inside a run cannot overflow.
    pub const MAX_DIM: i32 = 4096;

    /// Create a `width x height` grid of clean floor cells.
    ///
    /// The start designation defaults to `(0, 0)` and the goal to the
    /// opposite corner `(width - 1, height - 1)`.
    ///
    /// Returns [`GridError::InvalidDimensions`] if either dimension is
    /// zero or negative, or [`GridError::DimensionTooLarge`] if either
    /// exceeds [`Grid::MAX_DIM`].
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
            start: Pos::new(0, 0),
            goal: Pos::new(width - 1, height - 1),
            instance_id: GridInstanceId::next(),
        })
    }

    /// Start building a grid with walls and endpoints in one expression.
    pub fn builder(width: i32, height: i32) -> GridBuilder {
        GridBuilder::new(width, height)
    }

    /// Grid width in cells.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Unique identity of this grid instance.
    pub fn instance_id(&self) -> GridInstanceId {
        self.instance_id
    }

    /// The designated start cell.
    pub fn start(&self) -> Pos {
        self.start
    }

    /// The designated goal cell.
    pub fn goal(&self) -> Pos {
        self.goal
    }

    /// True if `pos` lies within the grid.
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Row-major index of an in-bounds position.
    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * (self.width as usize) + (pos.x as usize)
    }

    /// The cell at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: Pos) -> Option<&Cell> {
        if self.contains(pos) {
            Some(&self.cells[self.index(pos)])
        } else {
            None
        }
    }

    /// Mutable access to the cell at `pos`, or `None` when out of bounds.
    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut Cell> {
        if self.contains(pos) {
            let idx = self.index(pos);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// The cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds. Use [`Grid::get`] for a checked
    /// lookup.
    pub fn cell(&self, pos: Pos) -> &Cell {
        if !self.contains(pos) {
            panic!(
                "position {pos} out of bounds for {}x{} grid",
                self.width, self.height
            );
        }
        &self.cells[self.index(pos)]
    }

    /// Mutable access to the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds. Use [`Grid::get_mut`] for a
    /// checked lookup.
    pub fn cell_mut(&mut self, pos: Pos) -> &mut Cell {
        if !self.contains(pos) {
            panic!(
                "position {pos} out of bounds for {}x{} grid",
                self.width, self.height
            );
        }
        let idx = self.index(pos);
        &mut self.cells[idx]
    }

    /// True if `pos` is a wall or out of bounds.
    ///
    /// Treating the outside of the board as solid lets traversal code ask
    /// one question instead of two.
    pub fn is_blocked(&self, pos: Pos) -> bool {
        self.get(pos).map_or(true, |cell| cell.blocked)
    }

    /// Set or clear the wall flag at `pos`.
    ///
    /// Walls may be placed anywhere, including on the current endpoint
    /// designations; endpoint validity is checked when a run starts, not
    /// here.
    pub fn set_blocked(&mut self, pos: Pos, blocked: bool) -> Result<(), GridError> {
        let (width, height) = (self.width, self.height);
        match self.get_mut(pos) {
            Some(cell) => {
                cell.blocked = blocked;
                Ok(())
            }
            None => Err(GridError::OutOfBounds { pos, width, height }),
        }
    }

    /// Move the start designation to `pos`.
    pub fn set_start(&mut self, pos: Pos) -> Result<(), GridError> {
        if !self.contains(pos) {
            return Err(GridError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            });
        }
        self.start = pos;
        Ok(())
    }

    /// Move the goal designation to `pos`.
    pub fn set_goal(&mut self, pos: Pos) -> Result<(), GridError> {
        if !self.contains(pos) {
            return Err(GridError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            });
        }
        self.goal = pos;
        Ok(())
    }

    /// In-bounds 4-connected neighbours of `pos`, in the fixed expansion
    /// order `(x, y+1)`, `(x, y-1)`, `(x+1, y)`, `(x-1, y)`.
    ///
    /// Walls are included; whether a neighbour may be entered is the
    /// traversal's decision, not the grid's.
    pub fn neighbours(&self, pos: Pos) -> SmallVec<[Pos; 4]> {
        let mut result = SmallVec::new();
        for (dx, dy) in NEIGHBOUR_OFFSETS {
            let n = pos.offset(dx, dy);
            if self.contains(n) {
                result.push(n);
            }
        }
        result
    }

    /// All positions in row-major order (`y` outer, `x` inner).
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Pos::new(x, y)))
    }

    /// Clear every search annotation, keeping walls and endpoint
    /// designations.
    pub fn reset_annotations(&mut self) {
        for cell in &mut self.cells {
            cell.reset_annotations();
        }
    }

    /// Remove every wall, keeping annotations and endpoint designations.
    pub fn clear_walls(&mut self) {
        for cell in &mut self.cells {
            cell.blocked = false;
        }
    }

    /// The single [`CellClass`] a renderer should draw `pos` as, or
    /// `None` when out of bounds.
    ///
    /// Precedence, highest first: `Blocked`, `Start`, `Goal`, `Path`,
    /// `Open`, `Closed`, `Floor`.
    pub fn classify(&self, pos: Pos) -> Option<CellClass> {
        let cell = self.get(pos)?;
        Some(if cell.blocked {
            CellClass::Blocked
        } else if pos == self.start {
            CellClass::Start
        } else if pos == self.goal {
            CellClass::Goal
        } else if cell.on_path {
            CellClass::Path
        } else if cell.in_open {
            CellClass::Open
        } else if cell.in_closed {
            CellClass::Closed
        } else {
            CellClass::Floor
        })
    }
}

impl Clone for Grid {
    /// Clones the board under a fresh [`GridInstanceId`].
    ///
    /// Grids hold mutable run state, so identity follows the instance,
    /// not the contents; see [`GridInstanceId`] for the consequences.
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: self.cells.clone(),
            start: self.start,
            goal: self.goal,
            instance_id: GridInstanceId::next(),
        }
    }
}

/// Builds a [`Grid`] with walls and endpoint designations in one
/// expression.
///
/// Validation happens in [`GridBuilder::build`]: dimension checks first,
/// then every queued wall and endpoint is bounds-checked in the order it
/// was added.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    width: i32,
    height: i32,
    walls: Vec<Pos>,
    start: Option<Pos>,
    goal: Option<Pos>,
}

impl GridBuilder {
    fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            walls: Vec::new(),
            start: None,
            goal: None,
        }
    }

    /// Queue a wall at `pos`.
    pub fn wall(mut self, pos: Pos) -> Self {
        self.walls.push(pos);
        self
    }

    /// Queue walls at every position in `positions`.
    pub fn walls<I>(mut self, positions: I) -> Self
    where
        I: IntoIterator<Item = Pos>,
    {
        self.walls.extend(positions);
        self
    }

    /// Designate the start cell (defaults to `(0, 0)`).
    pub fn start(mut self, pos: Pos) -> Self {
        self.start = Some(pos);
        self
    }

    /// Designate the goal cell (defaults to the far corner).
    pub fn goal(mut self, pos: Pos) -> Self {
        self.goal = Some(pos);
        self
    }

    /// Validate and build the grid.
    ///
    /// # Errors
    ///
    /// Propagates [`Grid::new`] dimension errors, and
    /// [`GridError::OutOfBounds`] for the first queued wall or endpoint
    /// that falls outside the board.
    pub fn build(self) -> Result<Grid, GridError> {
        let mut grid = Grid::new(self.width, self.height)?;
        for pos in self.walls {
            grid.set_blocked(pos, true)?;
        }
        if let Some(pos) = self.start {
            grid.set_start(pos)?;
        }
        if let Some(pos) = self.goal {
            grid.set_goal(pos)?;
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> Pos {
        Pos::new(x, y)
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_rejects_nonpositive_dimensions() {
        for (w, h) in [(0, 5), (5, 0), (-1, 5), (5, -3), (0, 0)] {
            match Grid::new(w, h) {
                Err(GridError::InvalidDimensions { width, height }) => {
                    assert_eq!((width, height), (w, h));
                }
                other => panic!("expected InvalidDimensions, got {other:?}"),
            }
        }
    }

    #[test]
    fn new_rejects_oversized_width() {
        match Grid::new(Grid::MAX_DIM + 1, 4) {
            Err(GridError::DimensionTooLarge { name, value, max }) => {
                assert_eq!(name, "width");
                assert_eq!(value, Grid::MAX_DIM + 1);
                assert_eq!(max, Grid::MAX_DIM);
            }
            other => panic!("expected DimensionTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn new_rejects_oversized_height() {
        assert!(matches!(
            Grid::new(4, Grid::MAX_DIM + 1),
            Err(GridError::DimensionTooLarge { name: "height", .. })
        ));
    }

    #[test]
    fn new_accepts_maximum_dimension() {
        let grid = Grid::new(Grid::MAX_DIM, 1).unwrap();
        assert_eq!(grid.cell_count(), Grid::MAX_DIM as usize);
    }

    #[test]
    fn endpoints_default_to_opposite_corners() {
        let grid = Grid::new(20, 15).unwrap();
        assert_eq!(grid.start(), p(0, 0));
        assert_eq!(grid.goal(), p(19, 14));
    }

    // ── Builder ─────────────────────────────────────────────────

    #[test]
    fn builder_places_walls_and_endpoints() {
        let grid = Grid::builder(6, 4)
            .wall(p(3, 1))
            .walls([p(3, 2), p(3, 3)])
            .start(p(0, 2))
            .goal(p(5, 2))
            .build()
            .unwrap();
        assert!(grid.is_blocked(p(3, 1)));
        assert!(grid.is_blocked(p(3, 2)));
        assert!(grid.is_blocked(p(3, 3)));
        assert!(!grid.is_blocked(p(2, 2)));
        assert_eq!(grid.start(), p(0, 2));
        assert_eq!(grid.goal(), p(5, 2));
    }

    #[test]
    fn builder_rejects_out_of_bounds_wall() {
        let err = Grid::builder(4, 4).wall(p(4, 0)).build().unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { pos, .. } if pos == p(4, 0)));
    }

    #[test]
    fn builder_rejects_out_of_bounds_endpoint() {
        let err = Grid::builder(4, 4).goal(p(1, -1)).build().unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { pos, .. } if pos == p(1, -1)));
    }

    #[test]
    fn builder_propagates_dimension_errors() {
        assert!(matches!(
            Grid::builder(0, 3).build(),
            Err(GridError::InvalidDimensions { .. })
        ));
    }

    // ── Accessors ───────────────────────────────────────────────

    #[test]
    fn get_is_none_out_of_bounds() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(grid.get(p(3, 0)).is_none());
        assert!(grid.get(p(0, -1)).is_none());
        assert!(grid.get(p(2, 2)).is_some());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn cell_panics_out_of_bounds() {
        let grid = Grid::new(3, 3).unwrap();
        let _ = grid.cell(p(0, 3));
    }

    #[test]
    fn is_blocked_treats_outside_as_solid() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(grid.is_blocked(p(-1, 0)));
        assert!(grid.is_blocked(p(0, 3)));
        assert!(!grid.is_blocked(p(1, 1)));
    }

    #[test]
    fn set_blocked_round_trips() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_blocked(p(1, 1), true).unwrap();
        assert!(grid.is_blocked(p(1, 1)));
        grid.set_blocked(p(1, 1), false).unwrap();
        assert!(!grid.is_blocked(p(1, 1)));
    }

    #[test]
    fn set_blocked_out_of_bounds_is_error() {
        let mut grid = Grid::new(3, 3).unwrap();
        let err = grid.set_blocked(p(5, 5), true).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                pos: p(5, 5),
                width: 3,
                height: 3
            }
        );
    }

    #[test]
    fn endpoint_designations_move() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_start(p(2, 2)).unwrap();
        grid.set_goal(p(4, 0)).unwrap();
        assert_eq!(grid.start(), p(2, 2));
        assert_eq!(grid.goal(), p(4, 0));
        assert!(grid.set_start(p(-1, 2)).is_err());
        assert!(grid.set_goal(p(0, 5)).is_err());
    }

    // ── Neighbours ──────────────────────────────────────────────

    #[test]
    fn neighbours_interior_in_expansion_order() {
        let grid = Grid::new(5, 5).unwrap();
        let n = grid.neighbours(p(2, 2));
        assert_eq!(n.as_slice(), &[p(2, 3), p(2, 1), p(3, 2), p(1, 2)]);
    }

    #[test]
    fn neighbours_origin_corner() {
        let grid = Grid::new(5, 5).unwrap();
        let n = grid.neighbours(p(0, 0));
        assert_eq!(n.as_slice(), &[p(0, 1), p(1, 0)]);
    }

    #[test]
    fn neighbours_far_corner() {
        let grid = Grid::new(5, 5).unwrap();
        let n = grid.neighbours(p(4, 4));
        assert_eq!(n.as_slice(), &[p(4, 3), p(3, 4)]);
    }

    #[test]
    fn neighbours_edge_cell() {
        let grid = Grid::new(5, 5).unwrap();
        let n = grid.neighbours(p(2, 0));
        assert_eq!(n.as_slice(), &[p(2, 1), p(3, 0), p(1, 0)]);
    }

    #[test]
    fn neighbours_include_walls() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_blocked(p(2, 3), true).unwrap();
        assert!(grid.neighbours(p(2, 2)).contains(&p(2, 3)));
    }

    #[test]
    fn single_cell_grid_has_no_neighbours() {
        let grid = Grid::new(1, 1).unwrap();
        assert!(grid.neighbours(p(0, 0)).is_empty());
    }

    // ── Annotations ─────────────────────────────────────────────

    #[test]
    fn reset_annotations_keeps_walls_and_endpoints() {
        let mut grid = Grid::builder(4, 4)
            .wall(p(1, 1))
            .start(p(0, 3))
            .goal(p(3, 0))
            .build()
            .unwrap();
        {
            let cell = grid.cell_mut(p(2, 2));
            cell.g = 7;
            cell.h = Some(3);
            cell.parent = Some(p(1, 2));
            cell.in_open = true;
            cell.on_path = true;
        }
        grid.reset_annotations();
        assert_eq!(*grid.cell(p(2, 2)), Cell::default());
        assert!(grid.is_blocked(p(1, 1)));
        assert_eq!(grid.start(), p(0, 3));
        assert_eq!(grid.goal(), p(3, 0));
    }

    #[test]
    fn clear_walls_touches_only_the_wall_flag() {
        let mut grid = Grid::builder(4, 4).wall(p(1, 1)).wall(p(2, 3)).build().unwrap();
        grid.cell_mut(p(2, 2)).g = 9;
        grid.clear_walls();
        assert!(!grid.is_blocked(p(1, 1)));
        assert!(!grid.is_blocked(p(2, 3)));
        assert_eq!(grid.cell(p(2, 2)).g, 9);
    }

    // ── Classification ──────────────────────────────────────────

    #[test]
    fn classify_wall_beats_everything() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_start(p(1, 1)).unwrap();
        grid.set_blocked(p(1, 1), true).unwrap();
        grid.cell_mut(p(1, 1)).on_path = true;
        assert_eq!(grid.classify(p(1, 1)), Some(CellClass::Blocked));
    }

    #[test]
    fn classify_endpoints_beat_search_marks() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_start(p(0, 0)).unwrap();
        grid.set_goal(p(3, 3)).unwrap();
        grid.cell_mut(p(0, 0)).in_closed = true;
        grid.cell_mut(p(0, 0)).on_path = true;
        grid.cell_mut(p(3, 3)).in_open = true;
        assert_eq!(grid.classify(p(0, 0)), Some(CellClass::Start));
        assert_eq!(grid.classify(p(3, 3)), Some(CellClass::Goal));
    }

    #[test]
    fn classify_path_beats_frontier_marks() {
        let mut grid = Grid::new(4, 4).unwrap();
        let cell = grid.cell_mut(p(2, 1));
        cell.on_path = true;
        cell.in_closed = true;
        assert_eq!(grid.classify(p(2, 1)), Some(CellClass::Path));
    }

    #[test]
    fn classify_open_beats_closed() {
        let mut grid = Grid::new(4, 4).unwrap();
        let cell = grid.cell_mut(p(2, 1));
        cell.in_open = true;
        cell.in_closed = true;
        assert_eq!(grid.classify(p(2, 1)), Some(CellClass::Open));
    }

    #[test]
    fn classify_floor_and_out_of_bounds() {
        let grid = Grid::new(4, 4).unwrap();
        assert_eq!(grid.classify(p(2, 2)), Some(CellClass::Floor));
        assert_eq!(grid.classify(p(4, 4)), None);
    }

    // ── Identity and iteration ──────────────────────────────────

    #[test]
    fn clone_allocates_fresh_identity() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_blocked(p(1, 2), true).unwrap();
        let copy = grid.clone();
        assert_ne!(copy.instance_id(), grid.instance_id());
        assert!(copy.is_blocked(p(1, 2)));
        assert_eq!(copy.start(), grid.start());
    }

    #[test]
    fn distinct_grids_have_distinct_identities() {
        let a = Grid::new(2, 2).unwrap();
        let b = Grid::new(2, 2).unwrap();
        assert_ne!(a.instance_id(), b.instance_id());
    }

    #[test]
    fn positions_iterate_row_major() {
        let grid = Grid::new(3, 2).unwrap();
        let all: Vec<Pos> = grid.positions().collect();
        assert_eq!(
            all,
            vec![p(0, 0), p(1, 0), p(2, 0), p(0, 1), p(1, 1), p(2, 1)]
        );
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbours_always_in_bounds(w in 1i32..=16, h in 1i32..=16,
                                       xr in 0i32..64, yr in 0i32..64) {
            let grid = Grid::new(w, h).unwrap();
            let pos = p(xr % w, yr % h);
            for n in grid.neighbours(pos) {
                prop_assert!(grid.contains(n));
                prop_assert_eq!(pos.manhattan(n), 1);
            }
        }

        #[test]
        fn neighbours_are_symmetric(w in 1i32..=16, h in 1i32..=16,
                                    xr in 0i32..64, yr in 0i32..64) {
            let grid = Grid::new(w, h).unwrap();
            let pos = p(xr % w, yr % h);
            for n in grid.neighbours(pos) {
                prop_assert!(grid.neighbours(n).contains(&pos));
            }
        }

        #[test]
        fn contains_matches_get(w in 1i32..=16, h in 1i32..=16,
                                x in -4i32..20, y in -4i32..20) {
            let grid = Grid::new(w, h).unwrap();
            prop_assert_eq!(grid.contains(p(x, y)), grid.get(p(x, y)).is_some());
        }
    }
}
