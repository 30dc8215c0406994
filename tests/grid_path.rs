//! S1 and S4: shortest paths and non-existence on a small grid with walls.

use puzzle_search::{astar, bfs, dijkstra, SearchOptions, State};

const GOAL: (i32, i32) = (4, 4);
const WALLS: [(i32, i32); 3] = [(2, 2), (1, 3), (3, 1)];

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Grid(i32, i32);

impl State for Grid {
    fn is_goal_state(&self) -> bool {
        (self.0, self.1) == GOAL
    }

    fn gen_children(&self, out: &mut Vec<Self>) {
        let Grid(x, y) = *self;
        for (dx, dy) in [(1, 0), (0, 1), (-1, 0), (0, -1)] {
            let (nx, ny) = (x + dx, y + dy);
            if (0..5).contains(&nx) && (0..5).contains(&ny) && !WALLS.contains(&(nx, ny)) {
                out.push(Grid(nx, ny));
            }
        }
    }

    fn get_distance(&self, _child: &Self) -> u32 {
        1
    }

    fn get_heuristic(&self) -> u32 {
        self.0.abs_diff(GOAL.0) + self.1.abs_diff(GOAL.1)
    }
}

fn edge_count(path: &[Grid]) -> usize {
    path.len() - 1
}

#[test]
fn astar_finds_a_length_eight_path_around_the_wall() {
    let mut out: Vec<Grid> = Vec::new();
    let outcome = astar(Grid(0, 0), SearchOptions::first_solution(), &mut out);
    assert!(outcome.found);
    assert_eq!(edge_count(&out), 8);
    assert_eq!(out.first(), Some(&Grid(0, 0)));
    assert_eq!(out.last(), Some(&Grid(4, 4)));
}

#[test]
fn bfs_finds_a_length_eight_path_around_the_wall() {
    let mut out: Vec<Grid> = Vec::new();
    let outcome = bfs(Grid(0, 0), &mut out);
    assert!(outcome.found);
    assert_eq!(edge_count(&out), 8);
}

#[test]
fn dijkstra_path_has_equal_cost_to_astar() {
    let mut out: Vec<Grid> = Vec::new();
    let outcome = dijkstra(Grid(0, 0), SearchOptions::first_solution(), &mut out);
    assert!(outcome.found);
    assert_eq!(edge_count(&out), 8);
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Boxed(i32, i32);

const BOXED_GOAL: (i32, i32) = (2, 2);
const ENCLOSING_WALLS: [(i32, i32); 4] = [(1, 2), (3, 2), (2, 1), (2, 3)];

impl State for Boxed {
    fn is_goal_state(&self) -> bool {
        (self.0, self.1) == BOXED_GOAL
    }

    fn gen_children(&self, out: &mut Vec<Self>) {
        let Boxed(x, y) = *self;
        for (dx, dy) in [(1, 0), (0, 1), (-1, 0), (0, -1)] {
            let (nx, ny) = (x + dx, y + dy);
            if (0..5).contains(&nx) && (0..5).contains(&ny) && !ENCLOSING_WALLS.contains(&(nx, ny)) {
                out.push(Boxed(nx, ny));
            }
        }
    }

    fn get_distance(&self, _child: &Self) -> u32 {
        1
    }
}

#[test]
fn astar_reports_not_found_when_the_goal_is_walled_in() {
    let mut out: Vec<Boxed> = Vec::new();
    let outcome = astar(Boxed(0, 0), SearchOptions::first_solution(), &mut out);
    assert!(!outcome.found);
    assert!(out.is_empty());
    assert!(outcome.examined > 0);
}
