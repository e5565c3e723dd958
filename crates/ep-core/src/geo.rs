//! Planar geometry: points and axis-aligned rectangles.
//!
//! The simulation plane is unitless; the default population area is the
//! square `[-1, 1]²`.  Double precision keeps repeated `x += v·dt`
//! integration from drifting over long runs.

use serde::{Deserialize, Serialize};

use crate::SimRng;

/// A point (or vector) in the simulation plane.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance.  Use for radius comparisons.
    #[inline]
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Length when treated as a vector.
    #[inline]
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

/// An axis-aligned rectangle `[min_x, max_x] × [min_y, max_y]`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    #[inline]
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }

    /// Square of half-side `half` centred on `center`.
    pub fn around(center: Point, half: f64) -> Self {
        Self::new(center.x - half, center.x + half, center.y - half, center.y + half)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new((self.min_x + self.max_x) * 0.5, (self.min_y + self.max_y) * 0.5)
    }

    /// Closed containment test.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// `true` if the two rectangles share no point.
    pub fn is_disjoint(&self, other: &Bounds) -> bool {
        self.max_x < other.min_x
            || other.max_x < self.min_x
            || self.max_y < other.min_y
            || other.max_y < self.min_y
    }

    /// Shrink every side by `margin`.  A margin larger than half the side
    /// collapses that axis onto its centre line.
    pub fn inset(&self, margin: f64) -> Bounds {
        let c = self.center();
        let hx = (self.width() * 0.5 - margin).max(0.0);
        let hy = (self.height() * 0.5 - margin).max(0.0);
        Bounds::new(c.x - hx, c.x + hx, c.y - hy, c.y + hy)
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.min_x.min(other.min_x),
            self.max_x.max(other.max_x),
            self.min_y.min(other.min_y),
            self.max_y.max(other.max_y),
        )
    }

    /// A uniformly distributed point inside the rectangle.
    pub fn sample(&self, rng: &mut SimRng) -> Point {
        Point::new(
            uniform_between(rng, self.min_x, self.max_x),
            uniform_between(rng, self.min_y, self.max_y),
        )
    }
}

// `gen_range` panics on an empty range; a collapsed axis samples its only value.
fn uniform_between(rng: &mut SimRng, lo: f64, hi: f64) -> f64 {
    if hi > lo { rng.gen_range(lo..hi) } else { lo }
}
