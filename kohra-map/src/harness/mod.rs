//! Synthetic maze generation for benchmarks and tests.

mod maze;

pub use maze::{generate, generate_grid, rows_to_csv, MazeSpec};
