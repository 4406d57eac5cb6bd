//! Built-in mazes addressable by name from a run config.

use amazed_maze::{AdjacencyMaze, GridMaze, MazeError, NodeId};

use crate::error::HarnessError;
use crate::load::LoadedMazeV1;

/// Every fixture name [`by_name`] accepts.
pub const FIXTURE_NAMES: &[&str] = &[
    "line_three",
    "two_branches",
    "isolated_start",
    "triangle_cycle",
    "no_goal_grid",
    "comb",
    "open_field",
];

const NO_GOAL_GRID: &str = "\
#######
#S..#.#
#.#...#
#.#.#.#
#...#.#
#######
";

const OPEN_FIELD: &str = "\
###########
#S........#
#.........#
#.........#
#.........#
#.........#
#........G#
###########
";

/// Look up a fixture.
///
/// # Errors
///
/// Returns [`HarnessError::UnknownFixture`] for a name not in
/// [`FIXTURE_NAMES`].
pub fn by_name(name: &str) -> Result<LoadedMazeV1, HarnessError> {
    let loaded = match name {
        "line_three" => line_three()?,
        "two_branches" => two_branches()?,
        "isolated_start" => isolated_start()?,
        "triangle_cycle" => triangle_cycle()?,
        "no_goal_grid" => LoadedMazeV1::grid(GridMaze::parse(NO_GOAL_GRID)?),
        "comb" => comb(6, 4)?,
        "open_field" => LoadedMazeV1::grid(GridMaze::parse(OPEN_FIELD)?),
        _ => {
            return Err(HarnessError::UnknownFixture {
                name: name.to_owned(),
            })
        }
    };
    Ok(loaded)
}

/// `0 - 1 - 2`, goal at 2.
fn line_three() -> Result<LoadedMazeV1, MazeError> {
    let maze = AdjacencyMaze::builder(3)
        .edge(0, 1)
        .edge(1, 2)
        .goal(2)
        .build()?;
    Ok(LoadedMazeV1::graph(maze, NodeId(0)))
}

/// `0 -> {1, 2}`, `1 -> 3`, `2 -> 4`, goal at 3.
fn two_branches() -> Result<LoadedMazeV1, MazeError> {
    let maze = AdjacencyMaze::builder(5)
        .arc(0, 1)
        .arc(0, 2)
        .arc(1, 3)
        .arc(2, 4)
        .goal(3)
        .build()?;
    Ok(LoadedMazeV1::graph(maze, NodeId(0)))
}

/// Start has no neighbors; the goal is elsewhere.
fn isolated_start() -> Result<LoadedMazeV1, MazeError> {
    let maze = AdjacencyMaze::builder(2).goal(1).build()?;
    Ok(LoadedMazeV1::graph(maze, NodeId(0)))
}

/// `0 - 1 - 2 - 0`, goal at 2.
fn triangle_cycle() -> Result<LoadedMazeV1, MazeError> {
    let maze = AdjacencyMaze::builder(3)
        .edge(0, 1)
        .edge(1, 2)
        .edge(2, 0)
        .goal(2)
        .build()?;
    Ok(LoadedMazeV1::graph(maze, NodeId(0)))
}

/// A spine of `teeth` nodes, each carrying a dead-end tooth of length
/// `depth`; only the last tooth's tip is a goal.
///
/// Spine node `i` is `i`; tooth `i` occupies
/// `teeth + i * depth .. teeth + (i + 1) * depth`.
fn comb(teeth: usize, depth: usize) -> Result<LoadedMazeV1, MazeError> {
    let mut builder = AdjacencyMaze::builder(teeth + teeth * depth);
    for i in 1..teeth {
        builder = builder.edge(i - 1, i);
    }
    for i in 0..teeth {
        let base = teeth + i * depth;
        builder = builder.edge(i, base);
        for d in 1..depth {
            builder = builder.edge(base + d - 1, base + d);
        }
    }
    builder = builder.goal(teeth + teeth * depth - 1);
    Ok(LoadedMazeV1::graph(builder.build()?, NodeId(0)))
}
