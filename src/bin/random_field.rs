use rand::rngs::StdRng;
use rand::SeedableRng;

use field_planner::{scenario, PathPlanner, Point2D, PotentialFieldPlanner};

fn main() {
    println!("Random potential field scenario start!!");

    let area_width = 30.0; // scenario area [m]
    let num_obstacles = 5;
    let grid_size = 0.5; // potential grid size [m]
    let robot_radius = 5.0; // robot radius [m]
    let seed = 7;

    let mut rng = StdRng::seed_from_u64(seed);
    let obstacles = scenario::random_obstacles(&mut rng, num_obstacles, area_width);
    let goal = scenario::random_goal(&mut rng, area_width);
    let start = Point2D::new(0.0, 10.0);

    println!("Goal: ({:.1}, {:.1})", goal.x, goal.y);
    for (i, p) in obstacles.points.iter().enumerate() {
        println!("Obstacle {}: ({:.1}, {:.1})", i, p.x, p.y);
    }

    let planner = match PotentialFieldPlanner::new(&obstacles, grid_size, robot_radius) {
        Ok(planner) => planner.with_seed(seed),
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    match planner.plan(start, goal) {
        Ok(path) => println!(
            "Found path with {} points, total length {:.1} m",
            path.len(),
            path.total_length()
        ),
        Err(e) => println!("Cannot find path: {}", e),
    }

    println!("Random potential field scenario finish!!");
}
