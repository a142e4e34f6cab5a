//! Cell state: walls, costs, parent links, membership flags.

use lodestar_core::Pos;

/// One grid cell: the wall flag plus the search annotations written by the
/// engine during a run.
///
/// The grid is the search's working memory, and callers are expected to
/// read annotations directly between steps (`g`, `parent`, the membership
/// flags) when inspecting or rendering a run, so the fields are plain and
/// public. Writing them outside the engine is possible but pointless: the
/// next `start` resets everything except `blocked`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Wall flag. Blocked cells are never traversed, with one exception:
    /// the engine always treats the current run's endpoints as walkable.
    pub blocked: bool,
    /// Exact cost from the run's start cell, in unit steps. Meaningful
    /// only while the cell carries an open/closed membership flag.
    pub g: u32,
    /// Manhattan distance to the run's goal, computed once when the
    /// search first discovers the cell. `None` until then.
    pub h: Option<u32>,
    /// Back-reference to the cell this one was best reached from.
    /// `None` for the start cell and for undiscovered cells.
    pub parent: Option<Pos>,
    /// Cell is currently in the open set (discovered, not yet expanded).
    pub in_open: bool,
    /// Cell is in the closed set (expanded; its `g` is final).
    pub in_closed: bool,
    /// Cell lies on the reconstructed path of a succeeded run.
    pub on_path: bool,
}

impl Cell {
    /// Total estimated cost through this cell: `g + h`.
    ///
    /// An undiscovered cell (no `h` yet) contributes `g` alone; the
    /// engine never ranks such cells, so the fallback is only ever seen
    /// by direct inspection.
    pub fn f(&self) -> u32 {
        self.g + self.h.unwrap_or(0)
    }

    /// Clears everything except `blocked`, returning the cell to its
    /// pre-search state.
    pub(crate) fn reset_annotations(&mut self) {
        self.g = 0;
        self.h = None;
        self.parent = None;
        self.in_open = false;
        self.in_closed = false;
        self.on_path = false;
    }
}

/// The single role a renderer should draw a cell as.
///
/// A cell can hold several marks at once (the start cell is also closed
/// after the first expansion; a path cell is also closed). Classification
/// collapses them with a fixed precedence: walls always show, endpoints
/// beat the path, the path beats the frontier, open beats closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellClass {
    /// A wall.
    Blocked,
    /// The grid's designated start cell.
    Start,
    /// The grid's designated goal cell.
    Goal,
    /// On the reconstructed path.
    Path,
    /// In the open set.
    Open,
    /// In the closed set.
    Closed,
    /// Plain walkable floor, untouched by the search.
    Floor,
}
