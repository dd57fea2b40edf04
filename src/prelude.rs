//! Commonly used types and utilities for ease of import.

pub use crate::{
    Cell, CellKind, Direction, Grid, GridState, PlacementEngine, PlacementError, Point, Ship,
    ShipClass, ShipId, CELL_SIZE, FLEET,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
