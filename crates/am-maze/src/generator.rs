//! Randomized Kruskal-style spanning tree and maze generation.

use am_core::SimRng;
use log::{debug, info};

use crate::{GridEdge, GridGraph, Maze, MazeResult, UnionFind};

/// Shuffle `edges` in place.
///
/// Step `i` (for `i` in `0..n-1`) swaps position `i` with a position drawn
/// uniformly from `i+1..n`, so every element is always moved.  This is the
/// exact index scheme mazes have always been generated with; keep it.
pub fn shuffle_edges(edges: &mut [GridEdge], rng: &mut SimRng) {
    let n = edges.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        let j = rng.randint(i + 1, n);
        edges.swap(i, j);
    }
}

/// Random spanning tree of `graph`: walk a shuffled copy of the edge list and
/// keep each edge whose endpoints are not yet connected.
///
/// The result always has `node_count - 1` edges.
pub fn random_spanning_tree(graph: &GridGraph, rng: &mut SimRng) -> Vec<GridEdge> {
    let mut work = graph.edges.clone();
    shuffle_edges(&mut work, rng);

    let mut sets = UnionFind::new(graph.node_count());
    let mut tree = Vec::with_capacity(graph.node_count().saturating_sub(1));
    for edge in work {
        if sets.union(edge.from.index(), edge.to.index()) {
            tree.push(edge);
        }
    }
    debug!(
        "spanning tree: kept {} of {} edges",
        tree.len(),
        graph.edge_count()
    );
    tree
}

/// Generates perfect mazes of a fixed logical size.
///
/// # Example
///
/// ```
/// use am_core::SimRng;
/// use am_maze::MazeGenerator;
///
/// let maze = MazeGenerator::new(4, 6).generate(&mut SimRng::new(7)).unwrap();
/// assert_eq!((maze.rows(), maze.cols()), (9, 13));
/// assert_eq!(maze.tree_edges().len(), 4 * 6 - 1);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct MazeGenerator {
    pub height: usize,
    pub width:  usize,
}

impl MazeGenerator {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Build the grid graph, pick a random spanning tree, and materialize it.
    pub fn generate(&self, rng: &mut SimRng) -> MazeResult<Maze> {
        let graph = GridGraph::new(self.height, self.width)?;
        let tree = random_spanning_tree(&graph, rng);
        let maze = Maze::from_spanning_tree(&graph, tree);
        info!(
            "generated {}x{} maze ({}x{} cells, {} open)",
            self.height,
            self.width,
            maze.rows(),
            maze.cols(),
            maze.open_count()
        );
        Ok(maze)
    }
}
