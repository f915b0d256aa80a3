use crate::{
    app::{color_selector::ColorSelector, game::Game, snake::Snake},
    basic::GridDim,
};
use std::{
    error,
    fmt::{self, Display, Formatter},
};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Prefs {
    /// Window size in pixels
    pub window_width: u32,
    pub window_height: u32,
    /// Side of a grid cell in pixels
    pub cell_size: u32,
    /// Game ticks per second
    pub fps: u32,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            window_width: 640,
            window_height: 480,
            cell_size: 20,
            fps: 25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefsError {
    ZeroCellSize,
    ZeroFps,
    FpsTooHigh { fps: u32, max: u32 },
    NotCellAligned { window: (u32, u32), cell_size: u32 },
    BoardTooSmall { board: GridDim, min: GridDim },
    WindowTooNarrow { width: u32, min: u32 },
}

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use PrefsError::*;
        match self {
            ZeroCellSize => write!(f, "cell size must be positive"),
            ZeroFps => write!(f, "fps must be positive"),
            FpsTooHigh { fps, max } => write!(f, "fps {} is above the maximum {}", fps, max),
            NotCellAligned { window: (w, h), cell_size } => write!(
                f,
                "window {}x{} is not a multiple of the cell size {}",
                w, h, cell_size
            ),
            BoardTooSmall { board, min } => write!(
                f,
                "board {}x{} is smaller than the minimum {}x{}",
                board.cols, board.rows, min.cols, min.rows
            ),
            WindowTooNarrow { width, min } => write!(
                f,
                "window width {} cannot fit the color swatches (minimum {})",
                width, min
            ),
        }
    }
}

impl error::Error for PrefsError {}

impl Prefs {
    pub fn board_dim(&self) -> GridDim {
        GridDim {
            cols: (self.window_width / self.cell_size) as isize,
            rows: (self.window_height / self.cell_size) as isize,
        }
    }

    /// Smallest board that still holds the starting snake and target
    pub fn min_board_dim() -> GridDim {
        Snake::INITIAL_BODY
            .iter()
            .chain([&Game::STARTING_TARGET])
            .fold(GridDim { cols: 1, rows: 1 }, |dim, p| GridDim {
                cols: dim.cols.max(p.col + 1),
                rows: dim.rows.max(p.row + 1),
            })
    }

    pub const MAX_FPS: u32 = 1000;

    pub fn validate(&self) -> Result<(), PrefsError> {
        if self.cell_size == 0 {
            return Err(PrefsError::ZeroCellSize);
        }
        if self.fps == 0 {
            return Err(PrefsError::ZeroFps);
        }
        if self.fps > Self::MAX_FPS {
            return Err(PrefsError::FpsTooHigh {
                fps: self.fps,
                max: Self::MAX_FPS,
            });
        }
        if self.window_width % self.cell_size != 0 || self.window_height % self.cell_size != 0 {
            return Err(PrefsError::NotCellAligned {
                window: (self.window_width, self.window_height),
                cell_size: self.cell_size,
            });
        }

        let board = self.board_dim();
        let min = Self::min_board_dim();
        if board.cols < min.cols || board.rows < min.rows {
            return Err(PrefsError::BoardTooSmall { board, min });
        }

        let min_width = ColorSelector::row_width().ceil() as u32;
        if self.window_width < min_width {
            return Err(PrefsError::WindowTooNarrow {
                width: self.window_width,
                min: min_width,
            });
        }

        Ok(())
    }
}

// builder
impl Prefs {
    pub fn window(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }
}
