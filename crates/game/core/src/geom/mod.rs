//! Integer spatial primitives: points, directions, distances, lines.

mod line;

pub use line::{continue_line, line_to};

use std::fmt;
use std::ops::{Add, Sub};

/// Discrete tile position in bubble-local coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Iterate over the 3x3 block centered here, including the center.
    pub fn neighborhood(self) -> impl Iterator<Item = Point> {
        let center = self;
        (-1..=1).flat_map(move |dy| (-1..=1).map(move |dx| Point::new(center.x + dx, center.y + dy)))
    }

    /// The eight tiles adjacent to this one.
    pub fn adjacent(self) -> impl Iterator<Item = Point> {
        self.neighborhood().filter(move |p| *p != self)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Absolute coordinate of a submap in the world, including z-level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubmapCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl SubmapCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for SubmapCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.x, self.y, self.z)
    }
}

/// The eight movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const fn offset(self) -> Point {
        match self {
            Direction::North => Point::new(0, -1),
            Direction::NorthEast => Point::new(1, -1),
            Direction::East => Point::new(1, 0),
            Direction::SouthEast => Point::new(1, 1),
            Direction::South => Point::new(0, 1),
            Direction::SouthWest => Point::new(-1, 1),
            Direction::West => Point::new(-1, 0),
            Direction::NorthWest => Point::new(-1, -1),
        }
    }
}

/// Chebyshev distance: the number of 8-way steps between two tiles.
pub fn chebyshev_dist(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Rounded Euclidean distance, used by the ranged resolver.
pub fn trig_dist(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt() as i32
}

pub(crate) fn sgn(a: i32) -> i32 {
    if a < 0 { -1 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn chebyshev_is_max_axis() {
        assert_eq!(chebyshev_dist(Point::new(0, 0), Point::new(3, -5)), 5);
        assert_eq!(chebyshev_dist(Point::new(2, 2), Point::new(2, 2)), 0);
    }

    #[test]
    fn trig_matches_pythagoras() {
        assert_eq!(trig_dist(Point::new(0, 0), Point::new(3, 4)), 5);
        assert_eq!(trig_dist(Point::new(0, 0), Point::new(1, 1)), 1);
    }

    #[test]
    fn directions_cover_all_neighbors() {
        let offsets: Vec<Point> = Direction::iter().map(Direction::offset).collect();
        assert_eq!(offsets.len(), 8);
        for p in Point::new(0, 0).adjacent() {
            assert!(offsets.contains(&p));
        }
    }

    #[test]
    fn neighborhood_is_nine_tiles() {
        assert_eq!(Point::new(4, 4).neighborhood().count(), 9);
        assert_eq!(Point::new(4, 4).adjacent().count(), 8);
    }
}
