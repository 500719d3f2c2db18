//! Maze carving

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::Maze;

/// Carves perfect mazes by randomized depth-first backtracking.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    /// Create a generator, optionally with a fixed seed.
    ///
    /// The same seed always carves the same maze for the same dimensions;
    /// with `None` the carving order comes from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate a fully carved maze of the given dimensions.
    ///
    /// Returns an error when either dimension is zero. The result is a
    /// perfect maze over the wrap-around grid: every cell is visited, every
    /// cell is reachable from every other, and the carved passages form a
    /// spanning tree (no cycles).
    pub fn generate_maze(&mut self, rows: usize, cols: usize) -> anyhow::Result<Maze> {
        let mut maze = Maze::new(rows, cols)?;
        self.carve(&mut maze);
        Ok(maze)
    }

    /// Depth-first carving walk over the whole grid.
    ///
    /// The classic formulation recurses once per carved passage, which on a
    /// `rows * cols` grid can nest as deep as the cell count. The walk here
    /// keeps its frames in an explicit stack instead: the top of the stack
    /// is the current cell, carving into an unvisited neighbor pushes it,
    /// and a cell with no unvisited neighbors left is popped, resuming the
    /// cell below exactly where a recursive call would have returned.
    ///
    /// Each draw picks uniformly among the current cell's unvisited
    /// neighbors. Neighbors that wrap onto the current cell itself are
    /// excluded by the grid, so a 1x1 maze ends immediately with no
    /// connections.
    fn carve(&mut self, maze: &mut Maze) {
        let start = maze.start();
        let grid = maze.grid_mut();
        grid.mark_visited(start);

        let mut stack = vec![start];
        while let Some(&current) = stack.last() {
            let candidates = grid.unvisited_neighbors(current);
            match candidates.choose(&mut self.random) {
                Some(&(direction, target)) => {
                    grid.remove_wall(current, direction);
                    grid.mark_visited(target);
                    stack.push(target);
                }
                None => {
                    stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use petgraph::algo::connected_components;
    use petgraph::graph::UnGraph;

    use crate::maze_generator::MazeGenerator;
    use crate::Maze;

    /// Undirected passage graph of a carved maze, one node per cell.
    ///
    /// Every passage is recorded on both of its cells, so each undirected
    /// edge is added once by keeping only the endpoint-ordered half.
    fn passage_graph(maze: &Maze) -> UnGraph<(), ()> {
        let (rows, cols) = maze.dimensions();
        let mut graph = UnGraph::new_undirected();
        let nodes = (0..rows * cols).map(|_| graph.add_node(())).collect_vec();

        for row in 0..rows {
            for col in 0..cols {
                let cell = maze.cell(row, col).unwrap();
                for (_, target) in cell.connections() {
                    if (row, col) < (target.row, target.col) {
                        graph.add_edge(
                            nodes[row * cols + col],
                            nodes[target.row * cols + target.col],
                            (),
                        );
                    }
                }
            }
        }
        graph
    }

    #[test]
    fn every_cell_is_visited() {
        let mut generator = MazeGenerator::new(Some(0));
        let maze = generator.generate_maze(9, 7).unwrap();

        for row in 0..9 {
            for col in 0..7 {
                assert!(maze.cell(row, col).unwrap().visited());
            }
        }
    }

    #[test]
    fn carved_passages_form_a_spanning_tree() {
        let mut generator = MazeGenerator::new(Some(7));
        let maze = generator.generate_maze(12, 15).unwrap();

        let graph = passage_graph(&maze);
        assert_eq!(connected_components(&graph), 1);
        assert_eq!(graph.edge_count(), 12 * 15 - 1);
    }

    #[test]
    fn connections_are_bidirectional() {
        let mut generator = MazeGenerator::new(Some(42));
        let maze = generator.generate_maze(8, 8).unwrap();

        for row in 0..8 {
            for col in 0..8 {
                let cell = maze.cell(row, col).unwrap();
                for &(direction, target) in cell.connections() {
                    let mirrored = maze
                        .cell(target.row, target.col)
                        .unwrap()
                        .connection(direction.opposite());
                    assert_eq!(mirrored, Some(cell.position()));
                }
            }
        }
    }

    #[test]
    fn same_seed_carves_the_same_maze() {
        fn dump(maze: &Maze) -> String {
            let (rows, cols) = maze.dimensions();
            (0..rows)
                .cartesian_product(0..cols)
                .map(|(row, col)| maze.cell(row, col).unwrap().to_string())
                .join("\n")
        }

        let maze_a = MazeGenerator::new(Some(1234)).generate_maze(10, 10).unwrap();
        let maze_b = MazeGenerator::new(Some(1234)).generate_maze(10, 10).unwrap();
        assert_eq!(dump(&maze_a), dump(&maze_b));
    }

    #[test]
    fn single_cell_maze_has_no_passages() {
        let mut generator = MazeGenerator::new(Some(3));
        let maze = generator.generate_maze(1, 1).unwrap();

        let cell = maze.cell(0, 0).unwrap();
        assert!(cell.visited());
        assert!(cell.connections().is_empty());
        assert_eq!(maze.start(), maze.end());
    }

    #[test]
    fn two_by_two_maze_has_three_passages() {
        let mut generator = MazeGenerator::new(Some(11));
        let maze = generator.generate_maze(2, 2).unwrap();

        let graph = passage_graph(&maze);
        assert_eq!(connected_components(&graph), 1);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn single_row_maze_never_connects_a_cell_to_itself() {
        let mut generator = MazeGenerator::new(Some(5));
        let maze = generator.generate_maze(1, 6).unwrap();

        for col in 0..6 {
            let cell = maze.cell(0, col).unwrap();
            assert!(cell.visited());
            for &(_, target) in cell.connections() {
                assert_ne!(target, cell.position());
            }
        }
        let graph = passage_graph(&maze);
        assert_eq!(connected_components(&graph), 1);
        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn zero_sized_maze_is_rejected() {
        let mut generator = MazeGenerator::new(Some(0));
        assert!(generator.generate_maze(0, 4).is_err());
        assert!(generator.generate_maze(4, 0).is_err());
    }
}
