//! Amazed Search: parallel depth-first maze solving with fork/join branches.
//!
//! This crate provides the search layer. It depends only on `amazed_maze`;
//! it does NOT depend on `amazed_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! amazed_maze  ←  amazed_search  ←  amazed_harness
//! (capability)    (branches, pool)   (configs, runner, fixtures)
//! ```
//!
//! # Key types
//!
//! - [`solve::solve`]: entry point taking a maze, a start node and a fork
//!   threshold; synchronous, internally parallel
//! - [`solve::solve_with_policy`]: same, with worker count, stack size and
//!   non-positive threshold mode from a [`policy::SolverPolicyV1`]
//! - [`claim::ClaimSet`]: at-most-once node reservation across branches
//! - [`abort::AbortSignal`]: cooperative stop once any branch finds a goal
//! - [`branch::Branch`]: one depth-first exploration unit
//! - [`scheduler::ForkJoinScheduler`]: executor seam (rayon pool or inline)
//! - [`join::JoinLedger`]: folds branch outcomes in join order
//! - [`path::PrefixSegment`]: frozen path prefix shared by forked children
//! - [`policy::SolverPolicyV1`]: fork threshold and worker configuration

#![forbid(unsafe_code)]

pub mod abort;
pub mod branch;
pub mod claim;
pub mod error;
pub mod frontier;
pub mod join;
pub mod path;
pub mod policy;
pub mod scheduler;
pub mod solve;

pub use error::SolveError;
pub use path::Path;
pub use policy::SolverPolicyV1;
pub use solve::{solve, solve_sequential, solve_with, solve_with_policy, SolveResult};
