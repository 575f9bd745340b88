use field_planner::utils::FieldView;
use field_planner::{GridCell, Obstacles, PlannerObserver, Point2D, PotentialFieldPlanner};

/// Prints tracer diagnostics to the console
struct ConsoleObserver {
    boundary_hits: usize,
}

impl PlannerObserver for ConsoleObserver {
    fn on_boundary_hit(&mut self, _cell: GridCell) {
        self.boundary_hits += 1;
        println!("outside potential!");
    }

    fn on_oscillation(&mut self, cell: GridCell) {
        println!("Oscillation detected at ({},{})!", cell.ix, cell.iy);
    }

    fn on_goal_reached(&mut self, position: Point2D, steps: usize) {
        println!(
            "Goal reached at ({:.1}, {:.1}) after {} steps!",
            position.x, position.y, steps
        );
    }
}

fn main() {
    println!("Potential Field path planning start!!");

    let start = Point2D::new(0.0, 10.0); // start position [m]
    let goal = Point2D::new(30.0, 30.0); // goal position [m]
    let grid_size = 0.5; // potential grid size [m]
    let robot_radius = 5.0; // robot radius [m]

    let obstacles = Obstacles::from_xy(
        &[15.0, 5.0, 20.0, 25.0, 21.0], // obstacle x position list [m]
        &[25.0, 15.0, 26.0, 25.0, 23.0], // obstacle y position list [m]
    );

    let planner = match PotentialFieldPlanner::new(&obstacles, grid_size, robot_radius) {
        Ok(planner) => planner.with_seed(42),
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    let mut observer = ConsoleObserver { boundary_hits: 0 };
    match planner.plan_with_observer(start, goal, &mut observer) {
        Ok(path) => {
            println!(
                "Found path with {} points ({} boundary hits)",
                path.len(),
                observer.boundary_hits
            );

            let grid = planner.build_grid(start, goal);
            let mut view = FieldView::new("Potential Field Path Planning");
            view.draw(&grid, &obstacles, start, goal, &path);

            let output_path = "img/potential_field_result.png";
            match view.save_png(output_path, 800, 600) {
                Ok(()) => println!("Plot saved to: {}", output_path),
                Err(e) => println!("Plot failed: {}", e),
            }
        }
        Err(e) => println!("Cannot find path: {}", e),
    }

    println!("Potential Field path planning finish!!");
}
