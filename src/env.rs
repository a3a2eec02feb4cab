use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vec2D {
    pub x: i16,
    pub y: i16,
}

pub const fn v2(x: i16, y: i16) -> Vec2D {
    Vec2D { x, y }
}

impl Vec2D {
    pub fn new(x: i16, y: i16) -> Vec2D {
        Vec2D { x, y }
    }

    pub fn apply(self, d: Direction) -> Vec2D {
        self + d.into()
    }

    pub fn manhattan(&self) -> u64 {
        self.x.unsigned_abs() as u64 + self.y.unsigned_abs() as u64
    }

    /// Manhattan distance between two points.
    pub fn dist(self, other: Vec2D) -> u64 {
        (self - other).manhattan()
    }

    pub fn within(self, width: usize, height: usize) -> bool {
        0 <= self.x && self.x < width as _ && 0 <= self.y && self.y < height as _
    }
}

impl From<Direction> for Vec2D {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Up => Vec2D::new(0, 1),
            Direction::Right => Vec2D::new(1, 0),
            Direction::Down => Vec2D::new(0, -1),
            Direction::Left => Vec2D::new(-1, 0),
            Direction::Stop => Vec2D::new(0, 0),
        }
    }
}

impl Add for Vec2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Moves on the grid.
/// `Stop` is the reserved no-movement action.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    Stop,
}

impl Direction {
    /// The four moving directions, `Stop` excluded.
    pub fn iter() -> impl Iterator<Item = Direction> {
        [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ]
        .into_iter()
    }

    pub fn invert(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Stop => Direction::Stop,
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Stop
    }
}
