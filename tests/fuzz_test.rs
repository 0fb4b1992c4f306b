//! Fuzzes the pathfinding system by checking for many random grids that a path is found exactly
//! when the goal is reachable, and that its length matches a breadth-first search.
use island_pathfinding::{
    find_path, generate, is_valid_path, path_steps, AstarSolver, Cell, Coord, GridSolver,
    IslandGrid,
};
use rand::prelude::*;
use std::collections::VecDeque;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> IslandGrid {
    let mut grid = IslandGrid::new(w, h, Cell::Water);
    for coord in grid.coords().collect::<Vec<_>>() {
        if rng.gen_bool(0.4) {
            grid.set(coord, Cell::Land);
        }
    }
    grid.update();
    grid
}

/// Brute-force shortest step count over water cells.
fn bfs_distance(grid: &IslandGrid, start: Coord, end: Coord) -> Option<usize> {
    if !grid.is_water(start) || !grid.is_water(end) {
        return None;
    }
    let mut dist = vec![None; grid.width() * grid.height()];
    let ix = |c: Coord| c.y * grid.width() + c.x;
    dist[ix(start)] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let d = dist[ix(current)].unwrap();
        if current == end {
            return Some(d);
        }
        for n in current.neumann_neighborhood() {
            if grid.is_water(n) && dist[ix(n)].is_none() {
                dist[ix(n)] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

fn visualize_grid(grid: &IslandGrid, start: &Coord, end: &Coord) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Coord::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.is_water(p) {
                print!(".");
            } else {
                print!("#");
            }
        }
        println!();
    }
}

fn check_query(grid: &IslandGrid, start: Coord, end: Coord) {
    let path = find_path(grid, start, end);
    let expected = bfs_distance(grid, start, end);
    if path_steps(&path) != expected {
        visualize_grid(grid, &start, &end);
        println!("A* path: {path:?}; BFS distance: {expected:?}");
    }
    assert_eq!(path_steps(&path), expected);
    assert_eq!(grid.reachable(start, end), expected.is_some());
    if !path.is_empty() {
        assert!(is_valid_path(&path));
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        assert!(path.iter().all(|&p| grid.is_water(p)));
    }
}

#[test]
fn fuzz_random_obstacles() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Coord::new(0, 0);
    let end = Coord::new(N - 1, N - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        grid.set(start, Cell::Water);
        grid.set(end, Cell::Water);
        check_query(&grid, start, end);
    }
}

#[test]
fn fuzz_generated_maps() {
    const N_MAPS: usize = 200;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_MAPS {
        let w = rng.gen_range(3..15);
        let h = rng.gen_range(3..15);
        let ratio = rng.gen_range(0.0..0.8);
        let grid = generate(w, h, ratio, &mut rng);
        for _ in 0..10 {
            let start = Coord::new(rng.gen_range(0..w), rng.gen_range(0..h));
            let end = Coord::new(rng.gen_range(0..w), rng.gen_range(0..h));
            check_query(&grid, start, end);
        }
    }
}

/// The 5x5 single-gap wall case: the only route runs through the gap.
#[test]
fn wall_with_single_gap() {
    let grid: IslandGrid = "
        WWLWW
        WWLWW
        WWWWW
        WWLWW
        WWLWW"
        .parse()
        .unwrap();
    let start = Coord::new(0, 0);
    let end = Coord::new(4, 4);
    let path = find_path(&grid, start, end);
    assert_eq!(path_steps(&path), Some(8));
    assert!(path.contains(&Coord::new(2, 2)));
    check_query(&grid, Coord::new(0, 4), Coord::new(4, 0));
}

#[test]
fn repeated_queries_have_stable_length() {
    let mut rng = StdRng::seed_from_u64(2);
    let grid = generate(25, 25, 0.35, &mut rng);
    let solver = AstarSolver::new();
    let start = Coord::new(0, 0);
    let end = Coord::new(24, 24);
    let first = solver.get_path_single_goal(&grid, start, end).unwrap();
    let second = solver.get_path_single_goal(&grid, start, end).unwrap();
    assert_eq!(first.len(), second.len());
    assert_eq!(first.len(), 49);
}
