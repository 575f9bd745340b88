//! Core geometric types shared across field_planner

use nalgebra::Vector2;

/// 2D point in world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from(tuple: (f64, f64)) -> Self {
        Self { x: tuple.0, y: tuple.1 }
    }
}

/// Integer index of one cell in the discretized potential grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub ix: i32,
    pub iy: i32,
}

impl GridCell {
    pub fn new(ix: i32, iy: i32) -> Self {
        Self { ix, iy }
    }

    /// Cell shifted by a motion offset
    pub fn offset(&self, dx: i32, dy: i32) -> GridCell {
        GridCell::new(self.ix + dx, self.iy + dy)
    }
}

/// Path represented as an ordered sequence of world points
#[derive(Debug, Clone, Default)]
pub struct Path2D {
    pub points: Vec<Point2D>,
}

impl Path2D {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn from_points(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    pub fn push(&mut self, point: Point2D) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<Point2D> {
        self.points.last().copied()
    }

    pub fn x_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn y_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Sum of the segment lengths along the path
    pub fn total_length(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.points.windows(2).map(|w| w[0].distance(&w[1])).sum()
    }
}

/// Point obstacles, ordered as supplied by the caller and read-only
/// for the duration of a planning run
#[derive(Debug, Clone, Default)]
pub struct Obstacles {
    pub points: Vec<Point2D>,
}

impl Obstacles {
    pub fn from_points(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    pub fn from_xy(x: &[f64], y: &[f64]) -> Self {
        assert_eq!(x.len(), y.len());
        let points = x.iter().zip(y.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect();
        Self { points }
    }

    pub fn push(&mut self, point: Point2D) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn x_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn y_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}
