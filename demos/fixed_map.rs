use island_pathfinding::{find_path, Coord, IslandGrid};

// In this example a path is found on a map with shape
// WWWWWWW
// WLLLLLW
// WWWWWLW
// WLLLWLW
// WWWWWWW
// from the inner pocket at (1, 2) out to the bottom-right corner.
fn main() {
    env_logger::init();
    let grid: IslandGrid = "
        WWWWWWW
        WLLLLLW
        WWWWWLW
        WLLLWLW
        WWWWWWW"
        .parse()
        .expect("map text is well formed");
    print!("{grid}");
    let start = Coord::new(1, 2);
    let end = Coord::new(6, 4);
    let path = find_path(&grid, start, end);
    if path.is_empty() {
        println!("No path from {start} to {end}");
    } else {
        println!("A path of {} steps has been found:", path.len() - 1);
        for p in path {
            println!("{p}");
        }
    }
}
