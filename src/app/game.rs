use crate::{
    app::rendering::{Layer, Renderer},
    basic::{GridDim, GridPoint, Point},
    color::Color,
};
use rand::Rng;

/// Target, score and whether the snake has crashed
pub struct Game {
    target: GridPoint,
    score: u32,
    finished: bool,
    board_dim: GridDim,
}

impl Game {
    pub const STARTING_TARGET: GridPoint = GridPoint::new(10, 10);

    const TEXT_POS: Point = Point { x: 20., y: 20. };
    const TEXT_SIZE: f32 = 25.;

    pub fn new(board_dim: GridDim) -> Self {
        Self {
            target: Self::STARTING_TARGET,
            score: 0,
            finished: false,
            board_dim,
        }
    }

    pub fn target(&self) -> GridPoint {
        self.target
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn check_hit(&self, pos: GridPoint) -> bool {
        pos == self.target
    }

    /// The new target may land on the snake, nothing is excluded
    pub fn record_hit(&mut self, rng: &mut impl Rng) {
        self.score += 1;
        self.target = GridPoint::random_in(self.board_dim, rng);
    }

    pub fn finish(&mut self) {
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn display_text(&self) -> String {
        if self.finished {
            format!(
                "Game over! Your Score: {}. Press 'Space' to restart.",
                self.score
            )
        } else {
            format!("Score: {}", self.score)
        }
    }

    pub fn draw(&self, renderer: &mut impl Renderer, cell_size: f32) {
        renderer.draw_square(
            self.target.to_pixel(cell_size),
            cell_size,
            Color::RED,
            Layer::Board,
        );
        renderer.draw_text(
            &self.display_text(),
            Self::TEXT_POS,
            Self::TEXT_SIZE,
            Color::WHITE,
            Layer::Overlay,
        );
    }

    #[cfg(test)]
    pub fn set_target(&mut self, target: GridPoint) {
        self.target = target;
    }
}
