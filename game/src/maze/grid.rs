use std::collections::{HashSet, VecDeque};

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::resources::GridCell;

// ============================================================================
// Boundary Helpers
// ============================================================================

// Orthogonal carve directions. North is -Z (row 0 is the north edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }
}

// Clear the boundary between (x, z) and its neighbor in `dir`, updating the
// flag on both sides so adjacent cells never disagree. Out-of-bounds
// neighbors simply have no twin flag to clear.
pub fn open_boundary(grid: &mut [Vec<GridCell>], x: i32, z: i32, dir: Direction) {
    let (dx, dz) = dir.delta();
    let (nx, nz) = (x + dx, z + dz);
    let in_bounds = nz >= 0 && (nz as usize) < grid.len() && nx >= 0 && (nx as usize) < grid[0].len();

    match dir {
        Direction::North => {
            grid[z as usize][x as usize].has_north_wall = false;
            if in_bounds {
                grid[nz as usize][nx as usize].has_south_wall = false;
            }
        }
        Direction::South => {
            grid[z as usize][x as usize].has_south_wall = false;
            if in_bounds {
                grid[nz as usize][nx as usize].has_north_wall = false;
            }
        }
        Direction::East => {
            grid[z as usize][x as usize].has_east_wall = false;
            if in_bounds {
                grid[nz as usize][nx as usize].has_west_wall = false;
            }
        }
        Direction::West => {
            grid[z as usize][x as usize].has_west_wall = false;
            if in_bounds {
                grid[nz as usize][nx as usize].has_east_wall = false;
            }
        }
    }
}

// ============================================================================
// Maze Carving
// ============================================================================

// Iterative backtracking carve over a fully walled grid: from a random start
// cell, repeatedly open a boundary to a random unvisited neighbor of the
// stack top, backtracking when none remain. Every cell ends up visited
// exactly once, so the cleared boundaries form a spanning tree.
pub fn carve_maze(grid: &mut [Vec<GridCell>], cols: i32, rows: i32, rng: &mut ChaCha8Rng) {
    let start_x = rng.random_range(0..cols);
    let start_z = rng.random_range(0..rows);
    grid[start_z as usize][start_x as usize].visited = true;

    let mut stack = vec![(start_x, start_z)];

    while let Some(&(x, z)) = stack.last() {
        let mut candidates = [Direction::North; 4];
        let mut count = 0;
        for dir in Direction::ALL {
            let (dx, dz) = dir.delta();
            let (nx, nz) = (x + dx, z + dz);
            if nx >= 0 && nx < cols && nz >= 0 && nz < rows && !grid[nz as usize][nx as usize].visited {
                candidates[count] = dir;
                count += 1;
            }
        }

        if count == 0 {
            let _ = stack.pop();
            continue;
        }

        let dir = candidates[rng.random_range(0..count)];
        let (dx, dz) = dir.delta();
        open_boundary(grid, x, z, dir);
        grid[(z + dz) as usize][(x + dx) as usize].visited = true;
        stack.push((x + dx, z + dz));
    }
}

// Post-carve pass in row-major order: with probability `loop_chance` per
// cell, open one extra boundary (east preferred, north as the fallback).
// Only ever clears flags, so the spanning tree from carving stays intact and
// connectivity can only grow.
pub fn inject_loops(grid: &mut [Vec<GridCell>], cols: i32, rows: i32, loop_chance: f64, rng: &mut ChaCha8Rng) {
    if loop_chance <= 0.0 {
        return;
    }
    let loop_chance = loop_chance.min(1.0);

    for z in 0..rows {
        for x in 0..cols {
            if !rng.random_bool(loop_chance) {
                continue;
            }
            if x + 1 < cols {
                open_boundary(grid, x, z, Direction::East);
            } else if z > 0 {
                open_boundary(grid, x, z, Direction::North);
            }
        }
    }
}

// ============================================================================
// Structural Checks
// ============================================================================

// BFS over open boundaries from cell (0, 0); true when every cell is
// reachable.
#[must_use]
pub fn all_cells_reachable(grid: &[Vec<GridCell>], cols: i32, rows: i32) -> bool {
    if cols <= 0 || rows <= 0 {
        return true;
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let target_count = (rows * cols) as usize;

    queue.push_back((0, 0));
    let _ = visited.insert((0, 0));

    while let Some((x, z)) = queue.pop_front() {
        let cell = &grid[z as usize][x as usize];

        if z > 0 && !cell.has_north_wall && !visited.contains(&(x, z - 1)) {
            let _ = visited.insert((x, z - 1));
            queue.push_back((x, z - 1));
        }
        if z < rows - 1 && !cell.has_south_wall && !visited.contains(&(x, z + 1)) {
            let _ = visited.insert((x, z + 1));
            queue.push_back((x, z + 1));
        }
        if x > 0 && !cell.has_west_wall && !visited.contains(&(x - 1, z)) {
            let _ = visited.insert((x - 1, z));
            queue.push_back((x - 1, z));
        }
        if x < cols - 1 && !cell.has_east_wall && !visited.contains(&(x + 1, z)) {
            let _ = visited.insert((x + 1, z));
            queue.push_back((x + 1, z));
        }

        if visited.len() == target_count {
            return true;
        }
    }

    visited.len() == target_count
}

// Number of cleared interior boundary pairs, each shared boundary counted
// once. A spanning tree over the grid clears exactly cols × rows − 1.
#[must_use]
pub fn cleared_boundary_pairs(grid: &[Vec<GridCell>], cols: i32, rows: i32) -> usize {
    let mut cleared = 0;
    for z in 0..rows as usize {
        for x in 0..cols as usize {
            if x + 1 < cols as usize && !grid[z][x].has_east_wall {
                cleared += 1;
            }
            if z + 1 < rows as usize && !grid[z][x].has_south_wall {
                cleared += 1;
            }
        }
    }
    cleared
}
