//! Placement engine: expands ships onto a grid, validates them and commits
//! the ones that fit.
//!
//! The engine holds no grid of its own. Every call receives exclusive access
//! to the grid it works on, so there is never more than one placement in
//! flight for a grid.

use alloc::vec::Vec;

use log::{debug, trace, warn};
use rand::Rng;

use crate::cell::{Cell, CellKind};
use crate::common::PlacementError;
use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::geometry::{quantize, snap, Direction, Point};
use crate::grid::{Grid, ShipId};
use crate::ship::{Ship, ShipClass};
use crate::validator::{knocks, within_bounds};

/// Places ships on a [`Grid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementEngine {
    max_attempts: usize,
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementEngine {
    /// Engine whose random placement gives up after
    /// [`MAX_PLACEMENT_ATTEMPTS`] samples.
    pub const fn new() -> Self {
        Self {
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Engine with a custom random placement bound. A bound of zero is
    /// raised to one.
    pub const fn with_max_attempts(max_attempts: usize) -> Self {
        Self {
            max_attempts: if max_attempts == 0 { 1 } else { max_attempts },
        }
    }

    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Fill an unplaced ship with `capacity` cells starting at `anchor`, one
    /// cell size apart in `direction`. No bounds or collision checks.
    pub fn expand(
        &self,
        grid: &Grid,
        ship: &mut Ship,
        anchor: Point,
        direction: Direction,
    ) -> Result<(), PlacementError> {
        if ship.is_placed() {
            return Err(PlacementError::AlreadyPlaced);
        }
        if direction == Direction::None {
            return Err(PlacementError::NotInitialized);
        }
        let (dx, dy) = direction.step();
        let size = grid.cell_size();
        let len = ship.capacity() as i32;
        ship.cells_mut()
            .extend((0..len).map(|i| Cell::ship(anchor.offset(dx * i * size, dy * i * size))));
        Ok(())
    }

    /// Bounds check, expansion and collision check for an unplaced ship. On
    /// failure the ship is left unplaced.
    fn validate(
        &self,
        grid: &Grid,
        ship: &mut Ship,
        anchor: Point,
        direction: Direction,
    ) -> Result<(), PlacementError> {
        if !within_bounds(grid, ship, anchor, direction) {
            return Err(PlacementError::NotOnField);
        }
        self.expand(grid, ship, anchor, direction)?;
        if knocks(grid, ship, direction) {
            return Err(PlacementError::Knocking);
        }
        Ok(())
    }

    fn commit(grid: &mut Grid, ship: Ship) -> ShipId {
        debug!("placed {:?}", ship);
        grid.commit(ship)
    }

    /// Interactive placement: snap `point` to the cell under it and try to
    /// build `ship` from there.
    ///
    /// On success the ship moves into the grid and its id is returned. On
    /// any failure the ship comes back unplaced so the caller can retry with
    /// new input. A ship that already has cells is handed back untouched; use
    /// [`PlacementEngine::place_directly`] for those.
    pub fn try_place_at(
        &self,
        grid: &mut Grid,
        mut ship: Ship,
        point: Point,
        direction: Direction,
    ) -> Result<ShipId, Ship> {
        if ship.is_placed() {
            return Err(ship);
        }
        let Some(anchor) = grid.cell_at(point).map(|c| c.position()) else {
            return Err(ship);
        };
        match self.validate(grid, &mut ship, anchor, direction) {
            Ok(()) => Ok(Self::commit(grid, ship)),
            Err(e) => {
                trace!("{} rejected at ({}, {}): {}", ship.class(), anchor.x, anchor.y, e);
                ship.clear();
                Err(ship)
            }
        }
    }

    /// Same checks as [`PlacementEngine::try_place_at`] without committing.
    /// Returns the expanded ship for display while the user is still choosing
    /// a spot, or the unplaced ship if the spot is invalid. An already
    /// populated ship comes back untouched.
    pub fn preview(
        &self,
        grid: &Grid,
        mut ship: Ship,
        point: Point,
        direction: Direction,
    ) -> Result<Ship, Ship> {
        if ship.is_placed() {
            return Err(ship);
        }
        let Some(anchor) = grid.cell_at(point).map(|c| c.position()) else {
            return Err(ship);
        };
        match self.validate(grid, &mut ship, anchor, direction) {
            Ok(()) => Ok(ship),
            Err(_) => {
                ship.clear();
                Err(ship)
            }
        }
    }

    /// Place a ship whose cells were populated elsewhere, e.g. loaded from
    /// storage or produced by [`PlacementEngine::preview`].
    ///
    /// The direction is inferred from the first two cells.
    pub fn place_directly(&self, grid: &mut Grid, mut ship: Ship) -> Result<ShipId, PlacementError> {
        let (anchor, direction) = Self::layout(grid, &ship)?;
        if !within_bounds(grid, &ship, anchor, direction) {
            return Err(PlacementError::NotOnField);
        }
        if knocks(grid, &mut ship, direction) {
            return Err(PlacementError::Knocking);
        }
        Ok(Self::commit(grid, ship))
    }

    /// Anchor and direction of an externally populated ship. The cells must be
    /// exactly the expansion of the first cell along the inferred direction.
    fn layout(grid: &Grid, ship: &Ship) -> Result<(Point, Direction), PlacementError> {
        let cells = ship.cells();
        if cells.len() != ship.capacity() {
            return Err(PlacementError::NotInitialized);
        }
        let direction = ship.direction();
        let anchor = match ship.anchor() {
            Some(anchor) if direction != Direction::None => anchor,
            _ => return Err(PlacementError::NotInitialized),
        };
        let size = grid.cell_size();
        if !grid.bounds().contains(anchor) || snap(anchor, size) != Some(anchor) {
            return Err(PlacementError::NotOnField);
        }
        let (dx, dy) = direction.step();
        let straight = cells.iter().enumerate().all(|(i, c)| {
            let i = i as i32;
            c.kind() == CellKind::Ship && c.position() == anchor.offset(dx * i * size, dy * i * size)
        });
        if !straight {
            return Err(PlacementError::NotInitialized);
        }
        Ok((anchor, direction))
    }

    /// Place an unplaced ship at a random anchor and direction, retrying until
    /// it fits or the attempt bound is reached.
    pub fn place_randomly<R: Rng>(
        &self,
        grid: &mut Grid,
        mut ship: Ship,
        rng: &mut R,
    ) -> Result<ShipId, PlacementError> {
        if ship.is_placed() {
            return Err(PlacementError::AlreadyPlaced);
        }
        let size = grid.cell_size();
        let max_x = grid.pixel_width() - size;
        let max_y = grid.pixel_height() - size;
        for attempt in 1..=self.max_attempts {
            let raw = Point::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
            let anchor = quantize(raw, size);
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            match self.validate(grid, &mut ship, anchor, direction) {
                Ok(()) => {
                    trace!("{} fit after {} attempts", ship.class(), attempt);
                    return Ok(Self::commit(grid, ship));
                }
                Err(PlacementError::NotOnField) | Err(PlacementError::Knocking) => ship.clear(),
                Err(e) => return Err(e),
            }
        }
        warn!(
            "giving up on {} after {} attempts on a {}x{} grid",
            ship.class(),
            self.max_attempts,
            grid.width(),
            grid.height()
        );
        Err(PlacementError::Unplaceable {
            attempts: self.max_attempts,
        })
    }

    /// Randomly place one new ship per class, in order. Stops at the first
    /// ship that does not fit; ships placed before it stay on the grid.
    pub fn place_fleet<R: Rng>(
        &self,
        grid: &mut Grid,
        classes: &[ShipClass],
        rng: &mut R,
    ) -> Result<Vec<ShipId>, PlacementError> {
        classes
            .iter()
            .map(|&class| self.place_randomly(grid, Ship::new(class), rng))
            .collect()
    }
}
