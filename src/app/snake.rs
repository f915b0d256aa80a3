use crate::{
    app::rendering::{Layer, Renderer},
    basic::{Dir, GridDim, GridPoint},
    color::SnakeColor,
};
use itertools::Itertools;

pub struct Snake {
    /// Tail first, head last
    body: Vec<GridPoint>,
    dir: Dir,
    /// Set by `grow`, consumed by the next `advance`
    growing: bool,
    pub color: SnakeColor,
    board_dim: GridDim, // cached value
}

impl Snake {
    pub const INITIAL_BODY: [GridPoint; 4] = [
        GridPoint::new(2, 10),
        GridPoint::new(2, 11),
        GridPoint::new(2, 12),
        GridPoint::new(2, 13),
    ];
    pub const INITIAL_DIR: Dir = Dir::Down;

    pub fn new(board_dim: GridDim) -> Self {
        Self {
            body: Self::INITIAL_BODY.to_vec(),
            dir: Self::INITIAL_DIR,
            growing: false,
            color: SnakeColor::default(),
            board_dim,
        }
    }

    pub fn head(&self) -> GridPoint {
        // body is never empty
        self.body[self.body.len() - 1]
    }

    #[cfg(test)]
    pub fn body(&self) -> &[GridPoint] {
        &self.body
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    #[cfg(test)]
    pub fn is_growing(&self) -> bool {
        self.growing
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Move one cell in the current direction, keeping the tail
    /// if a growth was requested since the last move
    pub fn advance(&mut self) {
        let new_head = self.head().step(self.dir, self.board_dim);
        debug_assert!(self.board_dim.contains(new_head));
        if !self.growing {
            self.body.remove(0);
        }
        self.body.push(new_head);
        self.growing = false;
    }

    /// Several calls before the next move still only add one cell
    pub fn grow(&mut self) {
        self.growing = true;
    }

    pub fn can_change_dir_to(&self, new_dir: Dir) -> bool {
        new_dir != -self.dir
    }

    /// Doesn't check for reversal, see `can_change_dir_to`
    pub fn set_dir(&mut self, new_dir: Dir) {
        self.dir = new_dir;
    }

    /// Any two segments on the same cell, not only the head
    pub fn has_self_collision(&self) -> bool {
        !self.body.iter().all_unique()
    }

    pub fn draw(&self, renderer: &mut impl Renderer, cell_size: f32) {
        let color = self.color.color();
        for segment in &self.body {
            renderer.draw_square(segment.to_pixel(cell_size), cell_size - 1., color, Layer::Board);
        }
    }

    #[cfg(test)]
    pub fn from_body(body: Vec<GridPoint>, dir: Dir, board_dim: GridDim) -> Self {
        assert!(!body.is_empty());
        Self {
            body,
            dir,
            growing: false,
            color: SnakeColor::default(),
            board_dim,
        }
    }
}
