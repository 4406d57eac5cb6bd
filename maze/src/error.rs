//! Maze construction and parsing errors.

use thiserror::Error;

/// Typed failure for building or parsing a maze.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// An edge endpoint, goal, or start refers to a node outside the maze.
    #[error("node {node} is out of range for a maze of {node_count} nodes")]
    NodeOutOfRange { node: usize, node_count: usize },
    /// The grid text contained no rows.
    #[error("grid is empty")]
    EmptyGrid,
    /// A grid row has a different width than the first row.
    #[error("grid row {row} has width {width}, expected {expected}")]
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },
    /// A grid cell used a glyph outside the grid alphabet.
    #[error("unknown glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },
    /// The grid declared no start cell.
    #[error("grid has no start cell")]
    MissingStart,
    /// The grid declared more than one start cell.
    #[error("grid has more than one start cell (second at row {row}, column {col})")]
    DuplicateStart { row: usize, col: usize },
    /// Generated grids need odd dimensions of at least 5.
    #[error("cannot generate a {width}x{height} grid: dimensions must be odd and at least 5")]
    InvalidDimensions { width: usize, height: usize },
}
