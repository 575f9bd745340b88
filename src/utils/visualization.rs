//! Gnuplot rendering of the potential field and traced path
//!
//! Strictly a collaborator of the planner: the core never calls into
//! this module, only the demo binaries do.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, PointSize, PointSymbol};

use crate::common::{Obstacles, Path2D, PlannerError, PlannerResult, Point2D};
use crate::field::PotentialGrid;

/// Cap applied to heatmap values so the repulsive spikes near obstacles
/// do not wash out the rest of the field
const HEATMAP_CAP: f64 = 100.0;

/// Renders one planning run: field heatmap, obstacles, endpoints, path
pub struct FieldView {
    figure: Figure,
    title: String,
}

impl FieldView {
    pub fn new(title: &str) -> Self {
        FieldView {
            figure: Figure::new(),
            title: title.to_string(),
        }
    }

    pub fn draw(
        &mut self,
        grid: &PotentialGrid,
        obstacles: &Obstacles,
        start: Point2D,
        goal: Point2D,
        path: &Path2D,
    ) {
        let index = grid.index();
        let cap = grid.max_finite().min(HEATMAP_CAP);
        let x_width = index.x_width() as usize;
        let y_width = index.y_width() as usize;

        // transposed copy so image rows advance along y
        let mut heat = Vec::with_capacity(x_width * y_width);
        for iy in 0..y_width {
            for ix in 0..x_width {
                heat.push(grid.cells()[(ix, iy)].min(cap));
            }
        }

        let axes = self.figure.axes2d();
        axes.set_title(&self.title, &[])
            .set_x_label("X [m]", &[])
            .set_y_label("Y [m]", &[])
            .set_aspect_ratio(AutoOption::Fix(1.0));
        axes.image(
            heat.iter().copied(),
            y_width,
            x_width,
            Some((index.min_x(), index.min_y(), index.max_x(), index.max_y())),
            &[],
        );
        axes.points(
            &obstacles.x_coords(),
            &obstacles.y_coords(),
            &[Caption("Obstacles"), Color("black"), PointSymbol('O'), PointSize(1.0)],
        );
        axes.points(
            &[start.x],
            &[start.y],
            &[Caption("Start"), Color("green"), PointSymbol('*'), PointSize(1.5)],
        );
        axes.points(
            &[goal.x],
            &[goal.y],
            &[Caption("Goal"), Color("blue"), PointSymbol('*'), PointSize(1.5)],
        );
        axes.lines(
            &path.x_coords(),
            &path.y_coords(),
            &[Caption("Path"), Color("red")],
        );
    }

    /// Show the plot in a gnuplot window
    pub fn show(&mut self) -> PlannerResult<()> {
        self.figure
            .show()
            .map(|_| ())
            .map_err(|e| PlannerError::Visualization(e.to_string()))
    }

    /// Save the plot to a PNG file
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> PlannerResult<()> {
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| PlannerError::Visualization(e.to_string()))
    }
}
