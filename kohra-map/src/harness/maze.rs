//! Seeded maze generator.
//!
//! Carves a perfect maze with an iterative recursive backtracker over
//! cells at odd coordinates, corridors two steps at a time, then optionally
//! "braids" a fraction of dead ends by knocking out one adjacent wall to
//! create loops. Braiding increases branching, which is what separates the
//! search algorithms from each other on benchmarks. The start lands at
//! (1, 1) and the goal at (height-2, width-2); S-G connectivity holds for
//! any braid fraction because braiding only removes walls.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::core::Tile;
use crate::grid::{MapError, MazeGrid};

/// Parameters for one generated maze.
#[derive(Clone, Copy, Debug)]
pub struct MazeSpec {
    /// Desired width; coerced to an odd value >= 5
    pub width: usize,
    /// Desired height; coerced to an odd value >= 5
    pub height: usize,
    /// RNG seed for reproducibility
    pub seed: u64,
    /// Fraction of dead ends to braid into loops, clamped to [0, 1]
    pub braid: f64,
}

impl Default for MazeSpec {
    fn default() -> Self {
        Self {
            width: 21,
            height: 21,
            seed: 0,
            braid: 0.0,
        }
    }
}

fn ensure_odd(n: usize) -> usize {
    if n % 2 == 1 {
        n
    } else {
        n + 1
    }
}

/// Generate the tile rows for a maze described by `spec`.
pub fn generate(spec: &MazeSpec) -> Vec<Vec<Tile>> {
    let mut rng = StdRng::seed_from_u64(spec.seed);
    let w = ensure_odd(spec.width.max(5));
    let h = ensure_odd(spec.height.max(5));

    let mut cells = vec![vec![Tile::Wall; w]; h];

    // Carve corridors with an iterative DFS over odd-coordinate cells.
    let mut stack: Vec<(usize, usize)> = vec![(1, 1)];
    cells[1][1] = Tile::Free;

    while let Some(&(r, c)) = stack.last() {
        // Unvisited cells two steps away, with the wall between.
        let mut candidates: Vec<(usize, usize, usize, usize)> = Vec::new();
        for (dr, dc) in [(-2i32, 0i32), (0, 2), (2, 0), (0, -2)] {
            let nr = r as i32 + dr;
            let nc = c as i32 + dc;
            if nr >= 1 && (nr as usize) < h - 1 && nc >= 1 && (nc as usize) < w - 1 {
                let (nr, nc) = (nr as usize, nc as usize);
                if cells[nr][nc] == Tile::Wall {
                    let wr = (r as i32 + dr / 2) as usize;
                    let wc = (c as i32 + dc / 2) as usize;
                    candidates.push((nr, nc, wr, wc));
                }
            }
        }

        match candidates.choose(&mut rng) {
            Some(&(nr, nc, wr, wc)) => {
                cells[wr][wc] = Tile::Free;
                cells[nr][nc] = Tile::Free;
                stack.push((nr, nc));
            }
            None => {
                stack.pop();
            }
        }
    }

    // Braid: knock out one wall next to a fraction of the dead ends.
    let braid = spec.braid.clamp(0.0, 1.0);
    if braid > 0.0 {
        let mut dead_ends: Vec<(usize, usize)> = Vec::new();
        for r in 1..h - 1 {
            for c in 1..w - 1 {
                if cells[r][c] == Tile::Free && free_neighbor_count(&cells, r, c) == 1 {
                    dead_ends.push((r, c));
                }
            }
        }
        dead_ends.shuffle(&mut rng);

        let target = (dead_ends.len() as f64 * braid) as usize;
        let mut made = 0;
        for (r, c) in dead_ends {
            if made >= target {
                break;
            }
            // A removable wall separates this dead end from another corridor.
            let mut walls: Vec<(usize, usize)> = Vec::new();
            for (dr, dc) in [(-1i32, 0i32), (1, 0), (0, -1), (0, 1)] {
                let wr = r as i32 + dr;
                let wc = c as i32 + dc;
                let r2 = r as i32 + 2 * dr;
                let c2 = c as i32 + 2 * dc;
                if wr >= 0
                    && (wr as usize) < h
                    && wc >= 0
                    && (wc as usize) < w
                    && r2 >= 0
                    && (r2 as usize) < h
                    && c2 >= 0
                    && (c2 as usize) < w
                    && cells[wr as usize][wc as usize] == Tile::Wall
                    && cells[r2 as usize][c2 as usize] == Tile::Free
                {
                    walls.push((wr as usize, wc as usize));
                }
            }
            if let Some(&(wr, wc)) = walls.choose(&mut rng) {
                cells[wr][wc] = Tile::Free;
                made += 1;
            }
        }
    }

    // Start and goal at opposite interior corners.
    cells[1][1] = Tile::Start;
    cells[h - 2][w - 2] = Tile::Goal;

    cells
}

fn free_neighbor_count(cells: &[Vec<Tile>], r: usize, c: usize) -> usize {
    let h = cells.len() as i32;
    let w = cells[0].len() as i32;
    [(-1i32, 0i32), (1, 0), (0, -1), (0, 1)]
        .iter()
        .filter(|&&(dr, dc)| {
            let nr = r as i32 + dr;
            let nc = c as i32 + dc;
            nr >= 0
                && nr < h
                && nc >= 0
                && nc < w
                && cells[nr as usize][nc as usize] != Tile::Wall
        })
        .count()
}

/// Generate a maze and wrap it in a validated grid.
pub fn generate_grid(spec: &MazeSpec) -> Result<MazeGrid, MapError> {
    MazeGrid::from_tiles(generate(spec))
}

/// Render tile rows in the CSV map format.
pub fn rows_to_csv(rows: &[Vec<Tile>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|t| t.symbol().to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;
    use crate::search::algorithms::bfs;

    fn full_map_neighbors(grid: &MazeGrid) -> impl FnMut(Coord) -> Vec<Coord> + '_ {
        move |pos: Coord| {
            grid.neighbors4(pos)
                .into_iter()
                .filter(|&n| grid.passable(n))
                .collect()
        }
    }

    #[test]
    fn test_generated_maze_shape_and_border() {
        let rows = generate(&MazeSpec {
            width: 15,
            height: 11,
            seed: 7,
            braid: 0.0,
        });
        assert_eq!(rows.len(), 11);
        assert!(rows.iter().all(|r| r.len() == 15));

        // Border is solid wall.
        assert!(rows[0].iter().all(|&t| t == Tile::Wall));
        assert!(rows[10].iter().all(|&t| t == Tile::Wall));
        for row in &rows {
            assert_eq!(row[0], Tile::Wall);
            assert_eq!(row[14], Tile::Wall);
        }
    }

    #[test]
    fn test_even_sizes_coerced_odd() {
        let rows = generate(&MazeSpec {
            width: 10,
            height: 8,
            seed: 1,
            braid: 0.0,
        });
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].len(), 11);
    }

    #[test]
    fn test_generated_maze_is_solvable() {
        for seed in 0..5 {
            let grid = generate_grid(&MazeSpec {
                width: 21,
                height: 21,
                seed,
                braid: 0.0,
            })
            .unwrap();
            let mut neighbors = full_map_neighbors(&grid);
            let path = bfs(grid.start(), grid.goal(), &mut neighbors);
            assert!(!path.is_empty(), "seed {seed} produced an unsolvable maze");
        }
    }

    #[test]
    fn test_braiding_keeps_maze_solvable() {
        let grid = generate_grid(&MazeSpec {
            width: 21,
            height: 21,
            seed: 42,
            braid: 0.3,
        })
        .unwrap();
        let mut neighbors = full_map_neighbors(&grid);
        let path = bfs(grid.start(), grid.goal(), &mut neighbors);
        assert!(!path.is_empty());
    }

    #[test]
    fn test_same_seed_same_maze() {
        let spec = MazeSpec {
            width: 17,
            height: 17,
            seed: 99,
            braid: 0.1,
        };
        assert_eq!(generate(&spec), generate(&spec));
    }

    #[test]
    fn test_csv_round_trip() {
        let rows = generate(&MazeSpec {
            width: 9,
            height: 9,
            seed: 3,
            braid: 0.0,
        });
        let csv = rows_to_csv(&rows);
        let grid = MazeGrid::parse_str(&csv).unwrap();
        assert_eq!(grid.width(), 9);
        assert_eq!(grid.height(), 9);
        assert_eq!(grid.start(), Coord::new(1, 1));
        assert_eq!(grid.goal(), Coord::new(7, 7));
    }
}
