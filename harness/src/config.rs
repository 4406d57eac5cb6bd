//! Run configuration: which maze, which policy, how many repetitions.

use std::path::{Path, PathBuf};

use amazed_search::SolverPolicyV1;
use serde::{Deserialize, Serialize};

use crate::error::HarnessError;
use crate::load::read_to_string;

/// Where the maze for a run comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum MazeSourceV1 {
    /// A built-in maze, see [`crate::fixtures::by_name`].
    Fixture { name: String },
    /// A text grid (`#` wall, `.` open, `S` start, `G` goal).
    GridFile { path: PathBuf },
    /// A [`crate::load::GraphFileV1`] JSON document.
    GraphFile { path: PathBuf },
    /// A perfect maze carved from `seed`.
    Generated { width: usize, height: usize, seed: u64 },
}

fn default_repetitions() -> u32 {
    1
}

/// One harness run.
///
/// ```json
/// {
///   "maze": {"kind": "generated", "width": 41, "height": 41, "seed": 7},
///   "policy": {"fork_threshold": 8, "worker_threads": 4},
///   "repetitions": 3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfigV1 {
    pub maze: MazeSourceV1,
    #[serde(default)]
    pub policy: SolverPolicyV1,
    #[serde(default = "default_repetitions")]
    pub repetitions: u32,
}

impl RunConfigV1 {
    /// Parse and validate a config. Relative paths are left as written.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Json`] on malformed input and
    /// [`HarnessError::InvalidConfig`] if validation fails.
    pub fn from_json_str(text: &str) -> Result<Self, HarnessError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file, resolving relative maze paths against the
    /// directory that holds it.
    ///
    /// # Errors
    ///
    /// As [`RunConfigV1::from_json_str`], plus [`HarnessError::Io`].
    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let text = read_to_string(path)?;
        let mut config = Self::from_json_str(&text)?;
        if let Some(dir) = path.parent() {
            config.resolve_relative_to(dir);
        }
        Ok(config)
    }

    /// Rejects zero repetitions and invalid policies.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.repetitions == 0 {
            return Err(HarnessError::InvalidConfig {
                detail: "repetitions must be at least 1".into(),
            });
        }
        self.policy
            .validate()
            .map_err(|e| HarnessError::InvalidConfig {
                detail: e.to_string(),
            })
    }

    fn resolve_relative_to(&mut self, dir: &Path) {
        match &mut self.maze {
            MazeSourceV1::GridFile { path } | MazeSourceV1::GraphFile { path } => {
                if path.is_relative() {
                    *path = dir.join(&*path);
                }
            }
            MazeSourceV1::Fixture { .. } | MazeSourceV1::Generated { .. } => {}
        }
    }
}
