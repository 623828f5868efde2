use serde::{Deserialize, Serialize};

/// A waypoint on the wall, in wall coordinates with the origin at the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub bottom_left: Point,
    pub dimensions: Dimensions,
}

impl Obstacle {
    pub fn new(bottom_left: Point, dimensions: Dimensions) -> Self {
        Self { bottom_left, dimensions }
    }

    pub fn bounds(&self) -> ObstacleBounds {
        ObstacleBounds {
            x_min: self.bottom_left.x,
            x_max: self.bottom_left.x + self.dimensions.width,
            y_min: self.bottom_left.y,
            y_max: self.bottom_left.y + self.dimensions.height,
        }
    }
}

/// Axis-aligned extent of an obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ObstacleBounds {
    /// Strict interior test; points on the obstacle's edges are not inside.
    pub fn strictly_contains(&self, p: &Point) -> bool {
        self.x_min < p.x && p.x < self.x_max && self.y_min < p.y && p.y < self.y_max
    }
}

pub type Path = Vec<Point>;
