//! Amazed Harness: run configurations, maze loading, and repeatable runs.
//!
//! The harness resolves a [`config::RunConfigV1`] into a maze, drives
//! [`amazed_search::solve`] the requested number of times, and checks every
//! returned path against the maze it came from.
//!
//! The harness does NOT implement search logic; it delegates to
//! `amazed_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod fixtures;
pub mod load;
pub mod runner;
pub mod telemetry;

pub use config::{MazeSourceV1, RunConfigV1};
pub use error::HarnessError;
pub use load::{load_maze, GraphFileV1, LoadedMaze, LoadedMazeV1};
pub use runner::{run, RunReportV1};
