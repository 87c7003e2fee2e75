//! Integer pixel geometry: points, sizes, rectangles, grid snapping and segment intersection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A node's box. `position` is the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub position: Position,
    pub size: Size,
}

impl Rect {
    pub const fn new(position: Position, size: Size) -> Self {
        Self { position, size }
    }

    pub fn right(&self) -> i32 {
        self.position.x + self.size.width
    }

    pub fn bottom(&self) -> i32 {
        self.position.y + self.size.height
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.position.x.min(other.position.x);
        let y = self.position.y.min(other.position.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(Position::new(x, y), Size::new(right - x, bottom - y))
    }
}

/// Rounds `v` up to the next multiple of `grid`. A non-positive grid disables snapping.
pub fn snap(v: i32, grid: i32) -> i32 {
    if grid <= 0 {
        return v;
    }
    let rem = v.rem_euclid(grid);
    if rem == 0 { v } else { v + grid - rem }
}

/// Rounds `v` to the nearest multiple of `grid`; exact halves round away from zero.
pub fn round_to_grid(v: i32, grid: i32) -> i32 {
    if grid <= 0 {
        return v;
    }
    let cells = (f64::from(v) / f64::from(grid)).round() as i32;
    cells * grid
}

/// Signed area of the triangle `(a, b, c)`, doubled. Positive when `c` is left of `a -> b`.
pub fn cross(a: Position, b: Position, c: Position) -> i64 {
    let abx = i64::from(b.x) - i64::from(a.x);
    let aby = i64::from(b.y) - i64::from(a.y);
    let acx = i64::from(c.x) - i64::from(a.x);
    let acy = i64::from(c.y) - i64::from(a.y);
    abx * acy - aby * acx
}

/// Proper intersection of the closed segments `ab` and `cd`.
///
/// Touching endpoints and collinear overlaps do not count.
pub fn segments_intersect(a: Position, b: Position, c: Position, d: Position) -> bool {
    let d1 = cross(a, b, c);
    let d2 = cross(a, b, d);
    let d3 = cross(c, d, a);
    let d4 = cross(c, d, b);

    if d1 == 0 && d2 == 0 && d3 == 0 && d4 == 0 {
        return false;
    }

    d1.signum() * d2.signum() < 0 && d3.signum() * d4.signum() < 0
}
