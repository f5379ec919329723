//! Maze grid: generation, cell queries and open-cell sampling

use rand::{seq::SliceRandom, Rng};
use std::fmt;
use tracing::warn;

use super::state::Position;
use crate::error::{GameError, GameResult};

/// A single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Wall,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Open => ' ',
            Cell::Wall => '#',
        }
    }
}

/// Rectangular maze whose border cells are always walls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major cells
    cells: Vec<Cell>,
}

impl Grid {
    /// Open interior surrounded by a wall border
    pub fn bordered(width: usize, height: usize) -> GameResult<Self> {
        check_size(width, height)?;
        let mut grid = Self {
            width,
            height,
            cells: vec![Cell::Open; width * height],
        };
        grid.seal_border();
        Ok(grid)
    }

    /// Random maze: each cell is a wall with `wall_probability`, then the
    /// border is sealed
    pub fn generate<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        wall_probability: f64,
        rng: &mut R,
    ) -> GameResult<Self> {
        check_size(width, height)?;
        if !(0.0..=1.0).contains(&wall_probability) {
            return Err(GameError::InvalidWallProbability(wall_probability));
        }

        let cells = (0..width * height)
            .map(|_| {
                if rng.gen_bool(wall_probability) {
                    Cell::Wall
                } else {
                    Cell::Open
                }
            })
            .collect();

        let mut grid = Self {
            width,
            height,
            cells,
        };
        grid.seal_border();
        Ok(grid)
    }

    /// Parse a maze from text rows: `#` is a wall, space or `.` is open
    pub fn from_rows(rows: &[&str]) -> GameResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        check_size(width, height)?;

        let mut cells = Vec::with_capacity(width * height);
        for (row_idx, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GameError::RaggedRow {
                    row: row_idx,
                    expected: width,
                    found,
                });
            }
            for ch in row.chars() {
                cells.push(match ch {
                    '#' => Cell::Wall,
                    ' ' | '.' => Cell::Open,
                    other => return Err(GameError::UnknownCell(other)),
                });
            }
        }

        let grid = Self {
            width,
            height,
            cells,
        };
        if let Some(pos) = grid.border().find(|&pos| grid.is_open(pos)) {
            return Err(GameError::UnsealedBorder { x: pos.x, y: pos.y });
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    fn is_border(&self, pos: Position) -> bool {
        pos.x == 0
            || pos.y == 0
            || pos.x == self.width as i32 - 1
            || pos.y == self.height as i32 - 1
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.is_in_bounds(pos)
            .then(|| pos.y as usize * self.width + pos.x as usize)
    }

    /// Cell at `pos`, or `None` outside the grid
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    pub fn is_open(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Open)
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Wall)
    }

    /// Change an interior cell; border cells can only be walls
    pub fn set_cell(&mut self, pos: Position, cell: Cell) -> GameResult<()> {
        let idx = self
            .index(pos)
            .ok_or(GameError::OutOfBounds { x: pos.x, y: pos.y })?;
        if cell == Cell::Open && self.is_border(pos) {
            return Err(GameError::UnsealedBorder { x: pos.x, y: pos.y });
        }
        self.cells[idx] = cell;
        Ok(())
    }

    /// All border positions (corners may repeat)
    pub fn border(&self) -> impl Iterator<Item = Position> + '_ {
        let (w, h) = (self.width as i32, self.height as i32);
        let rows = (0..w).flat_map(move |x| [Position::new(x, 0), Position::new(x, h - 1)]);
        let cols = (0..h).flat_map(move |y| [Position::new(0, y), Position::new(w - 1, y)]);
        rows.chain(cols)
    }

    /// Open interior cells in row-major order
    pub fn open_cells(&self) -> impl Iterator<Item = Position> + '_ {
        (1..self.height as i32 - 1)
            .flat_map(move |y| (1..self.width as i32 - 1).map(move |x| Position::new(x, y)))
            .filter(|&pos| self.is_open(pos))
    }

    pub fn open_count(&self) -> usize {
        self.open_cells().count()
    }

    /// Pick a random open interior cell not listed in `exclude`
    ///
    /// Draws up to `max_attempts` uniform interior coordinates, then falls
    /// back to choosing among a full scan of eligible cells. Returns
    /// `NoOpenCell` when nothing qualifies.
    pub fn sample_open_cell<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        max_attempts: usize,
        exclude: &[Position],
    ) -> GameResult<Position> {
        let eligible = |pos: Position| self.is_open(pos) && !exclude.contains(&pos);

        for _ in 0..max_attempts {
            let x = rng.gen_range(1..self.width as i32 - 1);
            let y = rng.gen_range(1..self.height as i32 - 1);
            let pos = Position::new(x, y);
            if eligible(pos) {
                return Ok(pos);
            }
        }

        let candidates: Vec<Position> = self.open_cells().filter(|&pos| eligible(pos)).collect();
        warn!(
            attempts = max_attempts,
            candidates = candidates.len(),
            "open-cell sampling fell back to a full scan"
        );
        candidates
            .choose(rng)
            .copied()
            .ok_or(GameError::NoOpenCell)
    }

    fn seal_border(&mut self) {
        let border: Vec<Position> = self.border().collect();
        for pos in border {
            let idx = pos.y as usize * self.width + pos.x as usize;
            self.cells[idx] = Cell::Wall;
        }
    }
}

fn check_size(width: usize, height: usize) -> GameResult<()> {
    if width < 3 || height < 3 {
        return Err(GameError::GridTooSmall { width, height });
    }
    Ok(())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
