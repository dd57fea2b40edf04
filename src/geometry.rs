//! Pixel-space geometry shared by the grid, the validator and the lookups.
//!
//! Every cell is a square of `cell_size` pixels whose top-left corner (its
//! anchor) sits on a multiple of the cell size. Points may be negative while a
//! forbidden zone is being computed; anything outside the grid is clipped by
//! the caller.

/// A position in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a point at (`x`, `y`).
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point shifted by (`dx`, `dy`).
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Axis-aligned rectangle, half-open on its right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The square cell anchored at `origin`.
    pub const fn cell(origin: Point, size: i32) -> Self {
        Self::new(origin.x, origin.y, size, size)
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Returns `true` if `p` lies inside the rectangle.
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Returns `true` if the two rectangles share some area. Rectangles that
    /// only touch along an edge or a corner do not intersect.
    pub const fn intersects(&self, other: &Rect) -> bool {
        other.x < self.right()
            && self.x < other.right()
            && other.y < self.bottom()
            && self.y < other.bottom()
    }
}

/// Direction a ship is built in, starting from its anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    /// No direction. Never valid for a placed ship.
    #[default]
    None,
}

impl Direction {
    /// The four directions a ship can actually be built in.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step in cells along this direction. `None` does not move.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::None => (0, 0),
        }
    }

    /// Returns `true` for `Up` and `Down`.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Infer the direction pointing from `from` to `to`.
    ///
    /// The axis with the larger absolute delta wins. When both deltas have the
    /// same magnitude the vertical axis is preferred. Identical points have no
    /// direction.
    pub fn between(from: Point, to: Point) -> Direction {
        let dx = i64::from(to.x) - i64::from(from.x);
        let dy = i64::from(to.y) - i64::from(from.y);
        if dx == 0 && dy == 0 {
            Direction::None
        } else if dx.abs() > dy.abs() {
            if dx > 0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if dy > 0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

/// Snap `p` to the anchor of the cell that encloses it. Returns `None` when
/// that anchor is not representable in `i32`.
pub fn snap(p: Point, cell_size: i32) -> Option<Point> {
    let floor = |v: i32| v.checked_div_euclid(cell_size)?.checked_mul(cell_size);
    Some(Point::new(floor(p.x)?, floor(p.y)?))
}

/// Round each axis of `p` to the nearest multiple of `cell_size`. Exact
/// midpoints go to the even multiple.
pub fn quantize(p: Point, cell_size: i32) -> Point {
    let size = f64::from(cell_size);
    let round = |v: i32| (libm::rint(f64::from(v) / size) as i32).saturating_mul(cell_size);
    Point::new(round(p.x), round(p.y))
}
