//! Amazed Maze: the graph capability consumed by the parallel solver.
//!
//! # API Surface
//!
//! - [`contract::MazeV1`] -- adjacency, goal testing, and player animation hooks
//! - [`adjacency::AdjacencyMaze`] -- explicit adjacency-list graph
//! - [`grid::GridMaze`] -- ASCII grid maze, parsed or generated from a seed
//! - [`recorder::RecordingMaze`] -- wrapper that records every player move
//! - [`digest::canonical_hash`] -- content digests binding reports to inputs
//!
//! # Module Dependency Direction
//!
//! `node` ← `contract` ← (`adjacency`, `grid`, `recorder`)
//!
//! `digest` and `error` depend on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod adjacency;
pub mod contract;
pub mod digest;
pub mod error;
pub mod grid;
pub mod node;
pub mod recorder;

pub use adjacency::{AdjacencyMaze, AdjacencyMazeBuilder};
pub use contract::MazeV1;
pub use error::MazeError;
pub use grid::GridMaze;
pub use node::{NodeId, PlayerId};
pub use recorder::{MoveEventV1, RecordingMaze};
