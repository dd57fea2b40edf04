//! Grid state: placed ships and the remaining water.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::cell::{Cell, CellKind};
use crate::common::PlacementError;
use crate::config::{CELL_SIZE, GRID_HEIGHT, GRID_WIDTH};
use crate::geometry::{Point, Rect};
use crate::ship::{Ship, ShipClass};

/// Positive dimensions whose pixel extents fit in `i32`.
fn check_dimensions(width: i32, height: i32, cell_size: i32) -> Result<(), PlacementError> {
    if width <= 0 || height <= 0 || cell_size <= 0 {
        return Err(PlacementError::InvalidGrid);
    }
    width
        .checked_mul(cell_size)
        .and(height.checked_mul(cell_size))
        .map(|_| ())
        .ok_or(PlacementError::InvalidGrid)
}

/// Index of a placed ship within its grid.
pub type ShipId = usize;

/// Serializable grid snapshot for saving and restoring games.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GridState {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    pub ships: Vec<Ship>,
    pub water: Vec<Cell>,
}

/// Everything a renderer needs to paint one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView {
    pub rect: Rect,
    pub kind: CellKind,
    pub hit: bool,
    /// Class of the owning ship, `None` for water.
    pub class: Option<ShipClass>,
}

/// The playing field. Sole owner of every ship and cell on it.
///
/// The water cells together with the cells of all ships tile the grid exactly
/// once. Ships only enter the grid through the placement engine and are never
/// removed.
pub struct Grid {
    width: i32,
    height: i32,
    cell_size: i32,
    ships: Vec<Ship>,
    water: Vec<Cell>,
}

impl Grid {
    /// Create an all-water grid of `width` x `height` cells, each
    /// `cell_size` pixels wide.
    pub fn new(width: i32, height: i32, cell_size: i32) -> Result<Self, PlacementError> {
        check_dimensions(width, height, cell_size)?;
        Ok(Self::filled(width, height, cell_size))
    }

    fn filled(width: i32, height: i32, cell_size: i32) -> Self {
        let water = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| Cell::water(Point::new(x * cell_size, y * cell_size)))
            })
            .collect();
        Grid {
            width,
            height,
            cell_size,
            ships: Vec::new(),
            water,
        }
    }

    /// Width in cells.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Width in pixels.
    pub fn pixel_width(&self) -> i32 {
        self.width * self.cell_size
    }

    /// Height in pixels.
    pub fn pixel_height(&self) -> i32 {
        self.height * self.cell_size
    }

    /// Rectangle covered by the whole grid.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.pixel_width(), self.pixel_height())
    }

    /// All placed ships, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id)
    }

    pub fn has_ships(&self) -> bool {
        !self.ships.is_empty()
    }

    /// Cells not covered by any ship.
    pub fn water(&self) -> &[Cell] {
        &self.water
    }

    /// Iterate every cell of the grid, water first, then ship by ship.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        let size = self.cell_size;
        let water = self.water.iter().map(move |c| CellView {
            rect: c.rect(size),
            kind: c.kind(),
            hit: c.is_hit(),
            class: None,
        });
        let ships = self.ships.iter().flat_map(move |s| {
            let class = s.class();
            s.cells().iter().map(move |c| CellView {
                rect: c.rect(size),
                kind: c.kind(),
                hit: c.is_hit(),
                class: Some(class),
            })
        });
        water.chain(ships)
    }

    /// Mark the cell under `point` as hit and report what was there. Returns
    /// `None` if no cell contains the point.
    pub fn hit(&mut self, point: Point) -> Option<CellKind> {
        let size = self.cell_size;
        let cell = self
            .water
            .iter_mut()
            .chain(self.ships.iter_mut().flat_map(|s| s.cells_mut().iter_mut()))
            .find(|c| c.rect(size).contains(point))?;
        cell.mark_hit();
        Some(cell.kind())
    }

    /// Take ownership of a validated ship and remove the water it covers.
    pub(crate) fn commit(&mut self, ship: Ship) -> ShipId {
        self.water.retain(|w| !ship.occupies(w.position()));
        self.ships.push(ship);
        self.ships.len() - 1
    }
}

impl Default for Grid {
    /// The standard 10x10 grid with 40 pixel cells.
    fn default() -> Self {
        Self::filled(GRID_WIDTH, GRID_HEIGHT, CELL_SIZE)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{ size: {}x{}, cell_size: {}, ships: {:?}, water: {} }}",
            self.width,
            self.height,
            self.cell_size,
            self.ships,
            self.water.len()
        )?;
        write!(f, "{}", self)
    }
}

impl fmt::Display for Grid {
    /// Text map: `.` water, `o` missed shot, class symbol for a ship cell,
    /// `X` for a hit ship cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut map = vec![' '; w * h];
        let size = self.cell_size;
        let mut paint = |p: Point, c: char| {
            let (col, row) = (p.x.div_euclid(size), p.y.div_euclid(size));
            if (0..self.width).contains(&col) && (0..self.height).contains(&row) {
                map[row as usize * w + col as usize] = c;
            }
        };
        for cell in &self.water {
            paint(cell.position(), if cell.is_hit() { 'o' } else { '.' });
        }
        for ship in &self.ships {
            for cell in ship.cells() {
                let c = if cell.is_hit() { 'X' } else { ship.class().symbol() };
                paint(cell.position(), c);
            }
        }
        for (r, row) in map.chunks(w).enumerate() {
            for c in row {
                write!(f, "{} ", c)?;
            }
            if r + 1 < h {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl From<&Grid> for GridState {
    fn from(g: &Grid) -> Self {
        GridState {
            width: g.width,
            height: g.height,
            cell_size: g.cell_size,
            ships: g.ships.clone(),
            water: g.water.clone(),
        }
    }
}

impl TryFrom<GridState> for Grid {
    type Error = PlacementError;

    /// Restore a saved grid. Dimensions get the same checks as
    /// [`Grid::new`]; ship and water cells are taken as saved.
    fn try_from(state: GridState) -> Result<Self, Self::Error> {
        check_dimensions(state.width, state.height, state.cell_size)?;
        Ok(Grid {
            width: state.width,
            height: state.height,
            cell_size: state.cell_size,
            ships: state.ships,
            water: state.water,
        })
    }
}
