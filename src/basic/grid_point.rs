use super::{dir::Dir, point::Point};
use num_integer::Integer;
use rand::Rng;
use std::fmt::{Debug, Error, Formatter};

/// A cell of the board, columns grow to the right and rows downwards
#[derive(Eq, PartialEq, Copy, Clone, Add, Hash)]
pub struct GridPoint {
    pub col: isize,
    pub row: isize,
}

/// Number of columns and rows of the board
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct GridDim {
    pub cols: isize,
    pub rows: isize,
}

impl GridDim {
    pub fn contains(self, point: GridPoint) -> bool {
        (0..self.cols).contains(&point.col) && (0..self.rows).contains(&point.row)
    }
}

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.col, self.row)
    }
}

impl GridPoint {
    pub const fn new(col: isize, row: isize) -> Self {
        Self { col, row }
    }

    /// Modular wrap into the board, also for negative coordinates
    /// (-1 becomes `cols - 1`)
    #[must_use]
    pub fn wrap(self, dim: GridDim) -> Self {
        Self {
            col: self.col.mod_floor(&dim.cols),
            row: self.row.mod_floor(&dim.rows),
        }
    }

    /// Neighbouring cell in `dir`, wrapping around the board edges
    #[must_use]
    pub fn step(self, dir: Dir, dim: GridDim) -> Self {
        let (dc, dr) = dir.delta();
        (self + Self::new(dc, dr)).wrap(dim)
    }

    pub fn random_in(dim: GridDim, rng: &mut impl Rng) -> Self {
        Self {
            col: rng.gen_range(0..dim.cols),
            row: rng.gen_range(0..dim.rows),
        }
    }

    pub fn to_pixel(self, cell_size: f32) -> Point {
        Point {
            x: self.col as f32 * cell_size,
            y: self.row as f32 * cell_size,
        }
    }
}
