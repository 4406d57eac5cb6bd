//! ASCII grid mazes.
//!
//! Grid alphabet:
//!
//! | Glyph       | Meaning            |
//! |-------------|--------------------|
//! | `#`         | wall               |
//! | `.` / space | open cell          |
//! | `S`         | start (open)       |
//! | `G` / `*`   | goal (open)        |
//!
//! Node ids are `row * width + col`. Walls are not nodes.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::contract::MazeV1;
use crate::digest::{canonical_hash, ContentHash, DOMAIN_GRID_MAZE};
use crate::error::MazeError;
use crate::node::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Wall,
    Open,
    Goal,
}

/// A rectangular maze of open cells connected to their 4-neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMaze {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: NodeId,
}

impl GridMaze {
    /// Parse a grid from its text form.
    ///
    /// Blank lines are ignored; every other line is one row.
    ///
    /// # Errors
    ///
    /// Returns a [`MazeError`] for an empty grid, ragged rows, unknown glyphs,
    /// or a missing or duplicated start cell.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(MazeError::EmptyGrid);
        };
        let width = first.chars().count();

        let mut cells = Vec::with_capacity(width * rows.len());
        let mut start = None;
        for (row, line) in rows.iter().enumerate() {
            let row_width = line.chars().count();
            if row_width != width {
                return Err(MazeError::RaggedRow {
                    row,
                    width: row_width,
                    expected: width,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let cell = match glyph {
                    '#' => Cell::Wall,
                    '.' | ' ' => Cell::Open,
                    'G' | '*' => Cell::Goal,
                    'S' => {
                        if start.is_some() {
                            return Err(MazeError::DuplicateStart { row, col });
                        }
                        start = Some(NodeId(row * width + col));
                        Cell::Open
                    }
                    _ => return Err(MazeError::UnknownGlyph { glyph, row, col }),
                };
                cells.push(cell);
            }
        }

        let start = start.ok_or(MazeError::MissingStart)?;
        Ok(Self {
            width,
            height: rows.len(),
            cells,
            start,
        })
    }

    /// Carve a perfect maze (exactly one path between any two open cells).
    ///
    /// Uses randomized depth-first carving seeded with `seed`; identical
    /// arguments always produce identical mazes. The start is at (1, 1) and
    /// the single goal at (`height - 2`, `width - 2`).
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] unless both dimensions are odd
    /// and at least 5.
    pub fn generate(width: usize, height: usize, seed: u64) -> Result<Self, MazeError> {
        if width < 5 || height < 5 || width % 2 == 0 || height % 2 == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let idx = |r: usize, c: usize| r * width + c;
        let mut cells = vec![Cell::Wall; width * height];
        cells[idx(1, 1)] = Cell::Open;

        let mut stack = vec![(1usize, 1usize)];
        let mut options = Vec::with_capacity(4);
        while let Some(&(r, c)) = stack.last() {
            options.clear();
            if r >= 3 && cells[idx(r - 2, c)] == Cell::Wall {
                options.push((r - 2, c));
            }
            if c + 2 <= width - 2 && cells[idx(r, c + 2)] == Cell::Wall {
                options.push((r, c + 2));
            }
            if r + 2 <= height - 2 && cells[idx(r + 2, c)] == Cell::Wall {
                options.push((r + 2, c));
            }
            if c >= 3 && cells[idx(r, c - 2)] == Cell::Wall {
                options.push((r, c - 2));
            }
            if let Some(&(nr, nc)) = options.choose(&mut rng) {
                cells[idx((r + nr) / 2, (c + nc) / 2)] = Cell::Open;
                cells[idx(nr, nc)] = Cell::Open;
                stack.push((nr, nc));
            } else {
                stack.pop();
            }
        }
        cells[idx(height - 2, width - 2)] = Cell::Goal;

        Ok(Self {
            width,
            height,
            cells,
            start: NodeId(idx(1, 1)),
        })
    }

    /// The start cell.
    #[must_use]
    pub fn start(&self) -> NodeId {
        self.start
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Node at (`row`, `col`), or `None` for walls and out-of-bounds positions.
    #[must_use]
    pub fn node_at(&self, row: usize, col: usize) -> Option<NodeId> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let node = NodeId(row * self.width + col);
        self.contains(node).then_some(node)
    }

    /// (`row`, `col`) of `node`.
    #[must_use]
    pub fn position(&self, node: NodeId) -> (usize, usize) {
        (node.index() / self.width, node.index() % self.width)
    }

    /// Number of open cells (walls excluded).
    #[must_use]
    pub fn open_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Wall).count()
    }

    /// Render back to the grid alphabet, one row per line.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (i, cell) in self.cells.iter().enumerate() {
            let glyph = if i == self.start.index() {
                'S'
            } else {
                match cell {
                    Cell::Wall => '#',
                    Cell::Open => '.',
                    Cell::Goal => 'G',
                }
            };
            out.push(glyph);
            if (i + 1) % self.width == 0 {
                out.push('\n');
            }
        }
        out
    }

    /// Content digest of the rendered grid.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(DOMAIN_GRID_MAZE, self.to_text().as_bytes())
    }

    fn cell(&self, node: NodeId) -> Option<Cell> {
        self.cells.get(node.index()).copied()
    }
}

impl MazeV1 for GridMaze {
    fn contains(&self, node: NodeId) -> bool {
        matches!(self.cell(node), Some(Cell::Open | Cell::Goal))
    }

    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut adjacent = [None; 4];
        if self.contains(node) {
            let (r, c) = self.position(node);
            adjacent = [
                r.checked_sub(1).and_then(|r| self.node_at(r, c)),
                self.node_at(r, c + 1),
                self.node_at(r + 1, c),
                c.checked_sub(1).and_then(|c| self.node_at(r, c)),
            ];
        }
        adjacent.into_iter().flatten()
    }

    fn has_goal(&self, node: NodeId) -> bool {
        self.cell(node) == Some(Cell::Goal)
    }
}
