use crate::ship::ShipClass;

/// Edge length of a cell in pixels.
pub const CELL_SIZE: i32 = 40;
/// Default grid width in cells.
pub const GRID_WIDTH: i32 = 10;
/// Default grid height in cells.
pub const GRID_HEIGHT: i32 = 10;

/// Number of ships in the standard fleet.
pub const FLEET_SIZE: usize = 4;
/// The standard fleet, placed largest first.
pub const FLEET: [ShipClass; FLEET_SIZE] = [
    ShipClass::Battleship,
    ShipClass::Cruiser,
    ShipClass::Destroyer,
    ShipClass::UBoat,
];

/// Random placement gives up after this many anchor/direction samples.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Look up a ship class by its display label. Returns `None` if no class
/// carries that name.
pub fn ship_class_by_name(name: &str) -> Option<ShipClass> {
    ShipClass::ALL.iter().copied().find(|c| c.name() == name)
}
