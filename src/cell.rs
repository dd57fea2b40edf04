//! A single grid unit.

use crate::geometry::{Point, Rect};

/// Whether a cell belongs to a ship or to the open water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Ship,
    Water,
}

/// One cell of the grid: where it is, what it is, and whether it was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    position: Point,
    kind: CellKind,
    hit: bool,
}

impl Cell {
    /// An unhit cell of the given kind anchored at `position`.
    pub const fn new(position: Point, kind: CellKind) -> Self {
        Self {
            position,
            kind,
            hit: false,
        }
    }

    /// An unhit water cell.
    pub const fn water(position: Point) -> Self {
        Self::new(position, CellKind::Water)
    }

    /// An unhit ship cell.
    pub const fn ship(position: Point) -> Self {
        Self::new(position, CellKind::Ship)
    }

    /// Anchor of the cell in pixel units.
    pub const fn position(&self) -> Point {
        self.position
    }

    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    pub const fn is_hit(&self) -> bool {
        self.hit
    }

    /// Record a hit on this cell. Hits are never undone.
    pub fn mark_hit(&mut self) {
        self.hit = true;
    }

    /// Builder form of [`Cell::mark_hit`], handy when restoring saved cells.
    pub const fn with_hit(mut self, hit: bool) -> Self {
        self.hit = hit;
        self
    }

    /// Screen rectangle covered by this cell.
    pub const fn rect(&self, cell_size: i32) -> Rect {
        Rect::cell(self.position, cell_size)
    }
}
