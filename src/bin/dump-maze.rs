//! CLI for inspecting a carved maze cell by cell

use clap::Parser;
use torus_maze::maze_generator::MazeGenerator;

/// Carve a wrap-around maze and dump every cell on its own line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze height in cells
    #[arg(long, default_value_t = 15)]
    rows: usize,

    /// Maze width in cells
    #[arg(long, default_value_t = 15)]
    cols: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate maze of the requested size, print cell dump in row-major order
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut generator = MazeGenerator::new(args.seed);
    let maze = generator.generate_maze(args.rows, args.cols)?;

    let (rows, cols) = maze.dimensions();
    for row in 0..rows {
        for col in 0..cols {
            println!("{}", maze.cell(row, col)?);
        }
    }
    Ok(())
}
