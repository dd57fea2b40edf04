//! Placement rules: a ship must lie inside the grid and may neither overlap
//! nor touch another ship, not even diagonally.
//!
//! Everything here reports through booleans and plain collections. The
//! engine decides which typed error a failed check turns into.

use alloc::vec::Vec;

use crate::geometry::{Direction, Point, Rect};
use crate::grid::Grid;
use crate::ship::Ship;

/// Returns `true` if a ship of `ship`'s class built from `anchor` towards
/// `direction` lies entirely on the grid.
///
/// Only the declared direction is checked. `Direction::None` is never in
/// bounds.
pub fn within_bounds(grid: &Grid, ship: &Ship, anchor: Point, direction: Direction) -> bool {
    if direction == Direction::None {
        return false;
    }
    let (dx, dy) = direction.step();
    let span = (ship.capacity() as i32 - 1) * grid.cell_size();
    let far_end = anchor.offset(dx * span, dy * span);
    let bounds = grid.bounds();
    bounds.contains(anchor) && bounds.contains(far_end)
}

/// Compute the one-cell ring around an expanded ship that no other ship may
/// touch.
///
/// The ring holds the cells on both sides of every ship cell plus three caps
/// of cells beyond each end. Points whose cell lies outside the grid are
/// dropped, so ships on an edge have a smaller zone. Unplaced ships and
/// `Direction::None` yield an empty zone.
pub fn forbidden_zone(grid: &Grid, ship: &Ship, direction: Direction) -> Vec<Point> {
    let cells = ship.cells();
    if cells.is_empty() || direction == Direction::None {
        return Vec::new();
    }
    let size = grid.cell_size();
    let vertical = direction.is_vertical();
    let along = |p: &Point| if vertical { p.y } else { p.x };

    // ends along the ship's axis, whatever order the cells were built in
    let positions = cells.iter().map(|c| c.position());
    let (low, high) = match (
        positions.clone().min_by_key(along),
        positions.max_by_key(along),
    ) {
        (Some(low), Some(high)) => (low, high),
        _ => return Vec::new(),
    };

    let mut zone = Vec::with_capacity(2 * cells.len() + 6);
    for side in [-size, 0, size] {
        if vertical {
            zone.push(high.offset(side, size));
            zone.push(low.offset(side, -size));
        } else {
            zone.push(high.offset(size, side));
            zone.push(low.offset(-size, side));
        }
    }
    for cell in cells {
        let p = cell.position();
        if vertical {
            zone.push(p.offset(-size, 0));
            zone.push(p.offset(size, 0));
        } else {
            zone.push(p.offset(0, -size));
            zone.push(p.offset(0, size));
        }
    }

    let bounds = grid.bounds();
    zone.retain(|p| Rect::cell(*p, size).intersects(&bounds));
    zone
}

/// Returns `true` if an existing ship's cell lies in `zone` or under one of
/// `ship`'s own cells.
///
/// The first ship on an empty grid never collides.
pub fn collides(grid: &Grid, ship: &Ship, zone: &[Point]) -> bool {
    if !grid.has_ships() {
        return false;
    }
    let size = grid.cell_size();
    grid.ships()
        .iter()
        .flat_map(|s| s.cells())
        .map(|placed| placed.rect(size))
        .any(|placed| {
            zone.iter().any(|p| Rect::cell(*p, size).intersects(&placed))
                || ship.cells().iter().any(|c| c.rect(size).intersects(&placed))
        })
}

/// Full collision check for an expanded ship.
///
/// A ship without cells always knocks: there is nothing that could be
/// placed. When a collision is found the ship's cells are cleared, so a
/// `true` result means the ship is back to unplaced.
pub fn knocks(grid: &Grid, ship: &mut Ship, direction: Direction) -> bool {
    if !ship.is_placed() {
        return true;
    }
    let zone = forbidden_zone(grid, ship, direction);
    if collides(grid, ship, &zone) {
        ship.clear();
        return true;
    }
    false
}
