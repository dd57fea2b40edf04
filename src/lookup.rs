//! Spatial lookups from screen points to cells and from cells to ships.

use crate::cell::{Cell, CellKind};
use crate::geometry::{quantize, Point};
use crate::grid::{Grid, ShipId};
use crate::ship::Ship;

impl Grid {
    /// The cell whose rectangle contains `point`, water or ship.
    pub fn cell_at(&self, point: Point) -> Option<&Cell> {
        let size = self.cell_size();
        self.water()
            .iter()
            .chain(self.ships().iter().flat_map(|s| s.cells()))
            .find(|c| c.rect(size).contains(point))
    }

    /// Round `point` to the nearest cell anchor and return the cell there.
    ///
    /// Returns `None` only for points that round to a spot outside the grid.
    pub fn point_to_cell(&self, point: Point) -> Option<&Cell> {
        self.cell_at(quantize(point, self.cell_size()))
    }

    /// Id of the ship that owns `cell`. Water cells have no ship.
    pub fn ship_id_of(&self, cell: &Cell) -> Option<ShipId> {
        if cell.kind() != CellKind::Ship {
            return None;
        }
        self.ships()
            .iter()
            .position(|s| s.occupies(cell.position()))
    }

    /// The ship that owns `cell`, if it is a ship cell.
    pub fn ship_of(&self, cell: &Cell) -> Option<&Ship> {
        self.ship_id_of(cell).and_then(|id| self.ship(id))
    }

    /// Returns `true` when at least one ship is placed and every ship is sunk.
    pub fn all_ships_sunk(&self) -> bool {
        self.has_ships() && self.ships().iter().all(Ship::is_sunk)
    }
}
