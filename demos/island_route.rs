use island_pathfinding::{path_steps, IslandError, MapConfig, RouteQuery};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Generates a 50x50 map with 30% land, prints it and routes from the top-left to the
// bottom-right corner. Pass a number as first argument to fix the seed, e.g.
//
//     RUST_LOG=info cargo run --example island_route -- 42
fn main() {
    env_logger::init();
    let mut rng = match std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = MapConfig::default();
    let grid = match config.generate(&mut rng) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Invalid map configuration: {e}");
            std::process::exit(1);
        }
    };
    print!("{grid}");

    let query = RouteQuery::corners(&grid);
    match query.run(&grid) {
        Ok(path) => match path_steps(&path) {
            Some(steps) => {
                println!(
                    "The shortest path from {} to {} is {steps} steps.",
                    query.start, query.end
                );
                let points = path.iter().map(|p| p.to_string()).collect::<Vec<_>>();
                println!("Path: {}", points.join(" "));
            }
            None => println!("No path found from {} to {}.", query.start, query.end),
        },
        Err(IslandError::NotWater(p)) => {
            println!("{p} is not water. Adjust the points or regenerate the map.")
        }
        Err(e) => println!("Invalid query: {e}"),
    }
}
