//! CLI for maze carving

use clap::Parser;
use itertools::Itertools;
use torus_maze::{maze_generator::MazeGenerator, Direction, Maze};

/// Carve a wrap-around maze and draw it on the terminal
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

/// Generate maze of the requested size, print drawing
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut generator = MazeGenerator::new(args.seed);
    let maze = generator.generate_maze(args.rows, args.cols)?;
    println!("{}", render(&maze)?);
    Ok(())
}

/// Draw each cell as a 3x3 character tile.
///
/// The cell marker sits in the middle (`S` start, `E` end, `+` elsewhere)
/// with a passage segment from the center towards each connected neighbor.
/// A side without a connection stays blank, i.e. walled. Passages that wrap
/// around the grid edge show as segments pointing off the drawing.
fn render(maze: &Maze) -> anyhow::Result<String> {
    let (rows, cols) = maze.dimensions();
    let mut lines = Vec::with_capacity(rows * 3);

    for row in 0..rows {
        let mut top = String::new();
        let mut middle = String::new();
        let mut bottom = String::new();
        for col in 0..cols {
            let cell = maze.cell(row, col)?;
            let marker = if cell.position() == maze.start() {
                'S'
            } else if cell.position() == maze.end() {
                'E'
            } else {
                '+'
            };
            let segment = |direction: Direction, passage: char| {
                if cell.connection(direction).is_some() {
                    passage
                } else {
                    ' '
                }
            };

            top.push(' ');
            top.push(segment(Direction::Up, '|'));
            top.push(' ');
            middle.push(segment(Direction::Left, '-'));
            middle.push(marker);
            middle.push(segment(Direction::Right, '-'));
            bottom.push(' ');
            bottom.push(segment(Direction::Down, '|'));
            bottom.push(' ');
        }
        lines.push(top);
        lines.push(middle);
        lines.push(bottom);
    }

    Ok(lines.iter().join("\n"))
}
