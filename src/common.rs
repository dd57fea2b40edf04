//! Errors shared by the grid and the placement engine.

/// Errors returned by fallible placement and grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Ship has no cells where they are required, or its cells do not form a
    /// single straight run.
    NotInitialized,
    /// Ship would extend outside the grid.
    NotOnField,
    /// Ship overlaps or touches an existing ship.
    Knocking,
    /// Random placement ran out of attempts.
    Unplaceable { attempts: usize },
    /// Ship already has cells and cannot be expanded again.
    AlreadyPlaced,
    /// Grid dimensions or cell size are zero, negative or too large.
    InvalidGrid,
    /// Point does not lie on any cell of the grid.
    OutsideGrid { x: i32, y: i32 },
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::NotInitialized => write!(f, "Ship is not fully initialized"),
            PlacementError::NotOnField => write!(f, "Ship is not on the playing field"),
            PlacementError::Knocking => write!(f, "Ship is knocking against another ship"),
            PlacementError::Unplaceable { attempts } => {
                write!(f, "Unable to place ship after {} attempts", attempts)
            }
            PlacementError::AlreadyPlaced => write!(f, "Ship is already placed"),
            PlacementError::InvalidGrid => write!(f, "Grid dimensions are invalid"),
            PlacementError::OutsideGrid { x, y } => {
                write!(f, "Point ({}, {}) is outside the grid", x, y)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
