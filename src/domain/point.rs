use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D coordinate with the directional vocabulary the rest of the domain
/// builds on: "above" means strictly greater y, "left" means strictly
/// smaller x. Copy semantics make every hand-off an independent value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint between this point and another.
    pub fn middle(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Strictly north of `other`.
    pub fn is_above(&self, other: &Point) -> bool {
        self.y > other.y
    }

    /// Strictly south of `other`.
    pub fn is_under(&self, other: &Point) -> bool {
        other.is_above(self)
    }

    /// Strictly west of `other`.
    pub fn is_left(&self, other: &Point) -> bool {
        self.x < other.x
    }

    /// Shifts this point in place by the given deltas.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
