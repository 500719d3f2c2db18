//! Perfect maze generation on a toroidal grid
//!
//! The grid wraps around at every edge: row arithmetic is taken modulo the
//! row count and column arithmetic modulo the column count, so a cell on the
//! top row has its "up" neighbor on the bottom row. Carving a passage removes
//! the wall between a cell and one of its four neighbors by recording the
//! connection on both cells, which keeps the maze walkable from either end.
//!
//! # Examples
//! ```
//! use torus_maze::maze_generator::MazeGenerator;
//!
//! let mut generator = MazeGenerator::new(Some(13));
//! let maze = generator.generate_maze(9, 9).unwrap();
//!
//! assert_eq!(maze.dimensions(), (9, 9));
//! let start = maze.cell(0, 0).unwrap();
//! assert!(start.visited());
//! assert!(!start.connections().is_empty());
//! ```

use std::fmt;

use anyhow::bail;
use itertools::Itertools;

pub mod maze_generator;

/// Compass direction from a cell towards one of its four neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Direction pointing back along this one (e.g. `Up` -> `Down`).
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{name}")
    }
}

/// Location of a cell in the grid
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// One square of the maze
///
/// An empty connection list means the cell still has walls on all four
/// sides. Connections are kept in insertion order, so dumps of a finished
/// maze are stable.
#[derive(Debug, Clone)]
pub struct Cell {
    position: Position,
    visited: bool,
    connections: Vec<(Direction, Position)>,
}

impl Cell {
    fn new(row: usize, col: usize) -> Self {
        Cell {
            position: Position { row, col },
            visited: false,
            connections: Vec::new(),
        }
    }

    /// Location of this cell in the grid.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether the carving walk has reached this cell.
    pub fn visited(&self) -> bool {
        self.visited
    }

    /// Carved passages, each as a direction and the neighbor it leads to.
    pub fn connections(&self) -> &[(Direction, Position)] {
        &self.connections
    }

    /// Target of the passage in `direction`, if one has been carved.
    pub fn connection(&self, direction: Direction) -> Option<Position> {
        self.connections
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|(_, target)| *target)
    }

    /// Record a passage towards `target`.
    ///
    /// Each direction has exactly one neighbor, so a duplicate insertion can
    /// only repeat an existing pair; it is absorbed as a no-op.
    fn add_connection(&mut self, direction: Direction, target: Position) {
        if !self.connections.contains(&(direction, target)) {
            self.connections.push((direction, target));
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cell {}, visited: {}, connections: {}",
            self.position,
            self.visited,
            self.connections
                .iter()
                .map(|(direction, target)| format!("({direction}, {target})"))
                .join(" ")
        )
    }
}

/// Rectangular arrangement of cells with wrap-around neighbor topology
///
/// Rows are the outer index, columns the inner one. Neighbor lookups wrap
/// modulo the respective dimension, so every cell has a full complement of
/// four neighbors and edge cells need no special casing.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Allocate a `rows` x `cols` grid of unvisited, unconnected cells.
    ///
    /// Returns an error when either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> anyhow::Result<Self> {
        if rows < 1 || cols < 1 {
            bail!("invalid grid dimensions {rows}x{cols}: both must be at least 1");
        }
        let cells = (0..rows)
            .map(|row| (0..cols).map(|col| Cell::new(row, col)).collect())
            .collect();
        Ok(Grid { rows, cols, cells })
    }

    /// Grid extents as `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Cell lookup by index.
    ///
    /// Returns an error when the indices fall outside the grid. The carving
    /// walk itself only ever addresses cells through [`Self::neighbor`],
    /// which cannot go out of range.
    pub fn cell(&self, row: usize, col: usize) -> anyhow::Result<&Cell> {
        if row >= self.rows || col >= self.cols {
            bail!(
                "cell {row}:{col} out of range for a {}x{} grid",
                self.rows,
                self.cols
            );
        }
        Ok(&self.cells[row][col])
    }

    /// Position of the neighbor in `direction`, wrapping at the edges.
    ///
    /// Total over the grid: the upward neighbor of row 0 is on the bottom
    /// row, and so on. In a grid one cell wide or tall, a cell resolves to
    /// itself; callers that carve must not treat such a cell as a neighbor.
    pub fn neighbor(&self, position: Position, direction: Direction) -> Position {
        let Position { row, col } = position;
        match direction {
            Direction::Up => Position {
                row: (row + self.rows - 1) % self.rows,
                col,
            },
            Direction::Down => Position {
                row: (row + 1) % self.rows,
                col,
            },
            Direction::Left => Position {
                row,
                col: (col + self.cols - 1) % self.cols,
            },
            Direction::Right => Position {
                row,
                col: (col + 1) % self.cols,
            },
        }
    }

    /// True if any wrap-around neighbor of `position` is still unvisited.
    pub fn has_unvisited_neighbor(&self, position: Position) -> bool {
        Direction::ALL.iter().any(|&direction| {
            let target = self.neighbor(position, direction);
            target != position && !self.is_visited(target)
        })
    }

    /// Unvisited wrap-around neighbors of `position`, paired with the
    /// direction that reaches them.
    ///
    /// A neighbor that wraps onto the cell itself (1-wide or 1-tall
    /// dimension) is never a candidate. In a two-row or two-column grid the
    /// same neighbor can appear under two directions; both pairs are kept,
    /// as they stand for distinct passages on the torus.
    pub(crate) fn unvisited_neighbors(&self, position: Position) -> Vec<(Direction, Position)> {
        Direction::ALL
            .iter()
            .map(|&direction| (direction, self.neighbor(position, direction)))
            .filter(|&(_, target)| target != position && !self.is_visited(target))
            .collect()
    }

    pub(crate) fn is_visited(&self, position: Position) -> bool {
        self.cells[position.row][position.col].visited
    }

    pub(crate) fn mark_visited(&mut self, position: Position) {
        self.cells[position.row][position.col].visited = true;
    }

    /// Carve the passage from `position` towards `direction`.
    ///
    /// The connection is recorded on both cells, mirrored through
    /// [`Direction::opposite`], so the passage is walkable from either end.
    /// Carving the same passage again is a no-op, and a passage whose two
    /// endpoints coincide (wrap onto the same cell) is refused.
    pub(crate) fn remove_wall(&mut self, position: Position, direction: Direction) {
        let target = self.neighbor(position, direction);
        if target == position {
            return;
        }
        self.cells[position.row][position.col].add_connection(direction, target);
        self.cells[target.row][target.col].add_connection(direction.opposite(), position);
    }
}

/// A maze: the grid plus its designated start and end cells
///
/// The maze exclusively owns its grid and all cells; cells refer to each
/// other only through [`Position`] values resolved against the grid.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    start: Position,
    end: Position,
}

impl Maze {
    /// Lay out an uncarved maze.
    ///
    /// Start is the top-left cell and end the bottom-right one.
    pub fn new(rows: usize, cols: usize) -> anyhow::Result<Self> {
        let grid = Grid::new(rows, cols)?;
        Ok(Maze {
            grid,
            start: Position { row: 0, col: 0 },
            end: Position {
                row: rows - 1,
                col: cols - 1,
            },
        })
    }

    /// The grid and its cells, read-only.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Grid extents as `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Cell lookup by index; see [`Grid::cell`].
    pub fn cell(&self, row: usize, col: usize) -> anyhow::Result<&Cell> {
        self.grid.cell(row, col)
    }

    /// Designated starting cell position.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Designated end cell position.
    pub fn end(&self) -> Position {
        self.end
    }
}
