//! Attractive / repulsive field model and the materialized potential grid

use itertools::Itertools;
use nalgebra::DMatrix;
use ordered_float::OrderedFloat;

use crate::common::{GridCell, Point2D};
use crate::field::grid::GridIndex;
use crate::field::nearest::NearestNeighbor;

/// Floor on the obstacle distance used in the repulsive term
const MIN_CLEARANCE: f64 = 0.1;

/// Field coefficients
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Attractive potential gain
    pub kp: f64,
    /// Repulsive potential gain
    pub eta: f64,
    /// Margin added around the obstacles, start, and goal [m]
    pub area_width: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            kp: 5.0,
            eta: 100.0,
            area_width: 30.0,
        }
    }
}

/// Scalar potential over continuous world coordinates.
///
/// The attractive term is a conic well centered on the goal; it grows
/// without bound so the field keeps a net pull toward the goal at any
/// scale. The repulsive term is active only within the robot radius of
/// the nearest obstacle and diverges as that distance approaches zero.
pub struct FieldModel<N: NearestNeighbor> {
    goal: Point2D,
    robot_radius: f64,
    config: FieldConfig,
    obstacles: N,
}

impl<N: NearestNeighbor> FieldModel<N> {
    pub fn new(goal: Point2D, obstacles: N, robot_radius: f64, config: FieldConfig) -> Self {
        FieldModel {
            goal,
            robot_radius,
            config,
            obstacles,
        }
    }

    pub fn goal(&self) -> Point2D {
        self.goal
    }

    pub fn attractive(&self, point: Point2D) -> f64 {
        0.5 * self.config.kp * point.distance(&self.goal)
    }

    pub fn repulsive(&self, point: Point2D) -> f64 {
        let (_, dq) = self.obstacles.nearest(point.x, point.y);

        if dq <= self.robot_radius {
            let dq = dq.max(MIN_CLEARANCE);
            0.5 * self.config.eta * (1.0 / dq - 1.0 / self.robot_radius).powi(2)
        } else {
            0.0
        }
    }

    pub fn potential(&self, point: Point2D) -> f64 {
        self.attractive(point) + self.repulsive(point)
    }

    /// Eagerly evaluate the field over a bounding box that contains the
    /// obstacles, start, and goal plus the configured margin. Every cell
    /// is computed exactly once; the grid is read-only afterwards.
    pub fn build_grid(&self, start: Point2D, resolution: f64) -> PotentialGrid {
        let half = self.config.area_width / 2.0;
        let (min_x, max_x) = axis_bounds(
            self.obstacles.points().iter().map(|p| p.x),
            start.x,
            self.goal.x,
        );
        let (min_y, max_y) = axis_bounds(
            self.obstacles.points().iter().map(|p| p.y),
            start.y,
            self.goal.y,
        );
        let index = GridIndex::new(
            min_x - half,
            min_y - half,
            max_x + half,
            max_y + half,
            resolution,
        );

        let cells = DMatrix::from_fn(index.x_width() as usize, index.y_width() as usize, |ix, iy| {
            self.potential(index.to_world(GridCell::new(ix as i32, iy as i32)))
        });

        PotentialGrid { cells, index }
    }
}

fn axis_bounds(coords: impl Iterator<Item = f64>, start: f64, goal: f64) -> (f64, f64) {
    use itertools::MinMaxResult;

    match coords.minmax() {
        MinMaxResult::NoElements => (start.min(goal), start.max(goal)),
        MinMaxResult::OneElement(v) => (v.min(start).min(goal), v.max(start).max(goal)),
        MinMaxResult::MinMax(lo, hi) => (lo.min(start).min(goal), hi.max(start).max(goal)),
    }
}

/// Potential values materialized over a grid, rows indexed by ix and
/// columns by iy. Write-once: filled during construction, read-only
/// while tracing.
#[derive(Debug, Clone)]
pub struct PotentialGrid {
    cells: DMatrix<f64>,
    index: GridIndex,
}

impl PotentialGrid {
    /// Assemble a grid from precomputed cells, for synthetic fields
    pub fn from_parts(cells: DMatrix<f64>, index: GridIndex) -> Self {
        PotentialGrid { cells, index }
    }

    pub fn index(&self) -> &GridIndex {
        &self.index
    }

    pub fn cells(&self) -> &DMatrix<f64> {
        &self.cells
    }

    /// Potential at a cell, or `None` outside the grid
    pub fn value(&self, cell: GridCell) -> Option<f64> {
        if self.index.contains(cell) {
            Some(self.cells[(cell.ix as usize, cell.iy as usize)])
        } else {
            None
        }
    }

    /// Largest finite cell value, used to scale heatmap rendering
    pub fn max_finite(&self) -> f64 {
        self.cells
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .map(OrderedFloat)
            .max()
            .map(|v| v.into_inner())
            .unwrap_or(0.0)
    }
}
