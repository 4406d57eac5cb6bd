//! Maze loading: graph JSON files, grid text files, generated grids, fixtures.

use std::path::Path;

use amazed_maze::digest::ContentHash;
use amazed_maze::{AdjacencyMaze, GridMaze, NodeId};
use serde::{Deserialize, Serialize};

use crate::config::MazeSourceV1;
use crate::error::HarnessError;
use crate::fixtures;

/// JSON form of an adjacency-list maze.
///
/// ```json
/// {"node_count": 3, "edges": [[0, 1], [1, 2]], "goals": [2], "start": 0}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFileV1 {
    pub node_count: usize,
    /// Undirected edges.
    #[serde(default)]
    pub edges: Vec<(usize, usize)>,
    /// Directed arcs.
    #[serde(default)]
    pub arcs: Vec<(usize, usize)>,
    #[serde(default)]
    pub goals: Vec<usize>,
    pub start: usize,
}

impl GraphFileV1 {
    /// Build the maze and its start node.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Maze`] if an endpoint, goal, or the start is
    /// out of range.
    pub fn build(&self) -> Result<(AdjacencyMaze, NodeId), HarnessError> {
        if self.start >= self.node_count {
            return Err(amazed_maze::MazeError::NodeOutOfRange {
                node: self.start,
                node_count: self.node_count,
            }
            .into());
        }
        let mut builder = AdjacencyMaze::builder(self.node_count);
        for &(a, b) in &self.edges {
            builder = builder.edge(a, b);
        }
        for &(from, to) in &self.arcs {
            builder = builder.arc(from, to);
        }
        for &g in &self.goals {
            builder = builder.goal(g);
        }
        Ok((builder.build()?, NodeId(self.start)))
    }
}

/// A maze ready to solve, whichever representation it came in.
#[derive(Debug, Clone)]
pub enum LoadedMaze {
    Graph(AdjacencyMaze),
    Grid(GridMaze),
}

/// A maze together with the node the search starts from.
#[derive(Debug, Clone)]
pub struct LoadedMazeV1 {
    pub maze: LoadedMaze,
    pub start: NodeId,
}

impl LoadedMazeV1 {
    #[must_use]
    pub fn graph(maze: AdjacencyMaze, start: NodeId) -> Self {
        Self {
            maze: LoadedMaze::Graph(maze),
            start,
        }
    }

    #[must_use]
    pub fn grid(maze: GridMaze) -> Self {
        let start = maze.start();
        Self {
            maze: LoadedMaze::Grid(maze),
            start,
        }
    }

    /// Digest of the underlying maze.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        match &self.maze {
            LoadedMaze::Graph(m) => m.digest(),
            LoadedMaze::Grid(m) => m.digest(),
        }
    }
}

/// Resolve a maze source into a loaded maze.
///
/// # Errors
///
/// Returns [`HarnessError`] if a file cannot be read or parsed, a generated
/// grid has invalid dimensions, or a fixture name is unknown.
pub fn load_maze(source: &MazeSourceV1) -> Result<LoadedMazeV1, HarnessError> {
    match source {
        MazeSourceV1::Fixture { name } => fixtures::by_name(name),
        MazeSourceV1::GridFile { path } => {
            let text = read_to_string(path)?;
            Ok(LoadedMazeV1::grid(GridMaze::parse(&text)?))
        }
        MazeSourceV1::GraphFile { path } => {
            let text = read_to_string(path)?;
            let file: GraphFileV1 = serde_json::from_str(&text)?;
            let (maze, start) = file.build()?;
            Ok(LoadedMazeV1::graph(maze, start))
        }
        MazeSourceV1::Generated {
            width,
            height,
            seed,
        } => Ok(LoadedMazeV1::grid(GridMaze::generate(*width, *height, *seed)?)),
    }
}

pub(crate) fn read_to_string(path: &Path) -> Result<String, HarnessError> {
    std::fs::read_to_string(path).map_err(|source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    })
}
