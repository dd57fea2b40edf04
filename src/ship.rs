//! Ship classes and the ships built from them.

use alloc::vec::Vec;
use core::fmt;

use crate::cell::Cell;
use crate::geometry::{Direction, Point};

/// Class of a ship. The class fixes how many cells the ship occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipClass {
    Battleship,
    Cruiser,
    Destroyer,
    UBoat,
}

impl ShipClass {
    /// Every class, largest first.
    pub const ALL: [ShipClass; 4] = [
        ShipClass::Battleship,
        ShipClass::Cruiser,
        ShipClass::Destroyer,
        ShipClass::UBoat,
    ];

    /// Number of cells a ship of this class occupies once placed.
    pub const fn capacity(self) -> usize {
        match self {
            ShipClass::Battleship => 5,
            ShipClass::Cruiser => 4,
            ShipClass::Destroyer => 3,
            ShipClass::UBoat => 2,
        }
    }

    /// Display label.
    pub const fn name(self) -> &'static str {
        match self {
            ShipClass::Battleship => "Battleship",
            ShipClass::Cruiser => "Cruiser",
            ShipClass::Destroyer => "Destroyer",
            ShipClass::UBoat => "UBoat",
        }
    }

    /// Single-character symbol used when drawing the grid as text.
    pub const fn symbol(self) -> char {
        match self {
            ShipClass::Battleship => 'B',
            ShipClass::Cruiser => 'C',
            ShipClass::Destroyer => 'D',
            ShipClass::UBoat => 'U',
        }
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship: its class and the cells it covers.
///
/// A freshly created ship has no cells. Placement fills in exactly
/// `class.capacity()` contiguous cells.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    class: ShipClass,
    cells: Vec<Cell>,
}

impl Ship {
    /// An unplaced ship of the given class.
    pub fn new(class: ShipClass) -> Self {
        Self {
            class,
            cells: Vec::with_capacity(class.capacity()),
        }
    }

    /// A ship whose cells were populated elsewhere, e.g. loaded from storage.
    /// Nothing is validated until the ship is placed.
    pub fn with_cells(class: ShipClass, cells: Vec<Cell>) -> Self {
        Self { class, cells }
    }

    /// A ship covering the given anchors, all unhit.
    pub fn from_positions<I>(class: ShipClass, positions: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        Self::with_cells(class, positions.into_iter().map(Cell::ship).collect())
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    /// Ship's length in cells.
    pub fn capacity(&self) -> usize {
        self.class.capacity()
    }

    /// Cells in the order they were built, starting at the anchor.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns `true` once the ship has cells.
    pub fn is_placed(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Anchor cell position, if placed.
    pub fn anchor(&self) -> Option<Point> {
        self.cells.first().map(Cell::position)
    }

    /// Direction the ship was built in, inferred from its first two cells.
    pub fn direction(&self) -> Direction {
        match self.cells.as_slice() {
            [first, second, ..] => Direction::between(first.position(), second.position()),
            _ => Direction::None,
        }
    }

    /// Returns `true` if one of the ship's cells is anchored at `position`.
    pub fn occupies(&self, position: Point) -> bool {
        self.cells.iter().any(|c| c.position() == position)
    }

    /// Number of cells that were hit.
    pub fn hits(&self) -> usize {
        self.cells.iter().filter(|c| c.is_hit()).count()
    }

    /// A placed ship is sunk when every one of its cells was hit.
    pub fn is_sunk(&self) -> bool {
        self.is_placed() && self.cells.iter().all(Cell::is_hit)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut Vec<Cell> {
        &mut self.cells
    }

    /// Revert to unplaced.
    pub(crate) fn clear(&mut self) {
        self.cells.clear();
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.anchor() {
            Some(anchor) => write!(
                f,
                "Ship {{ class: \"{}\", anchor: ({}, {}), direction: {:?}, hits: {}/{} }}",
                self.class.name(),
                anchor.x,
                anchor.y,
                self.direction(),
                self.hits(),
                self.cells.len(),
            ),
            None => write!(f, "Ship {{ class: \"{}\", unplaced }}", self.class.name()),
        }
    }
}
