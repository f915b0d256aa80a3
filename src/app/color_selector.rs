use crate::{
    app::rendering::{Layer, Renderer},
    basic::Point,
    color::{Color, SnakeColor},
};
use static_assertions::const_assert;

const BOX_SIZE: u32 = 60;
const BOX_PADDING: u32 = 20;
/// Margin between the highlight frame and the colored square
const BOX_INSET: u32 = 10;
/// y coordinate of the swatch row
const BAND_Y: f32 = 50.;

const_assert!(2 * BOX_INSET < BOX_SIZE);

/// A clickable colored box
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Swatch {
    /// Top-left corner in pixels
    pub pos: Point,
    pub size: f32,
    pub color: SnakeColor,
    pub highlighted: bool,
}

impl Swatch {
    // edges count as inside
    pub fn contains(&self, point: Point) -> bool {
        (self.pos.x..=self.pos.x + self.size).contains(&point.x)
            && (self.pos.y..=self.pos.y + self.size).contains(&point.y)
    }

    fn draw(&self, renderer: &mut impl Renderer) {
        if self.highlighted {
            renderer.draw_square(self.pos, self.size, Color::WHITE, Layer::Overlay);
        }
        let inset = BOX_INSET as f32;
        renderer.draw_square(
            self.pos + Point::square(inset),
            self.size - 2. * inset,
            self.color.color(),
            Layer::Swatch,
        );
    }
}

/// Row of swatches shown before the game starts
pub struct ColorSelector {
    swatches: Vec<Swatch>,
    selected: Option<SnakeColor>,
}

impl ColorSelector {
    /// Swatches are laid out once, centered horizontally in the window
    pub fn new(window_width: f32) -> Self {
        let step = (BOX_SIZE + BOX_PADDING) as f32;
        let left = (window_width - Self::row_width()) / 2.;
        let swatches = SnakeColor::ALL
            .iter()
            .enumerate()
            .map(|(i, &color)| Swatch {
                pos: Point {
                    x: left + i as f32 * step,
                    y: BAND_Y,
                },
                size: BOX_SIZE as f32,
                color,
                highlighted: false,
            })
            .collect();

        Self {
            swatches,
            selected: None,
        }
    }

    /// Horizontal space taken by the swatches including padding
    pub fn row_width() -> f32 {
        (SnakeColor::ALL.len() as u32 * (BOX_SIZE + BOX_PADDING)) as f32
    }

    #[cfg(test)]
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Highlights the swatch under `point` and selects its color, every
    /// other swatch loses its highlight. A click that misses everything
    /// keeps the previous selection.
    pub fn handle_click(&mut self, point: Point) {
        for swatch in &mut self.swatches {
            swatch.highlighted = swatch.contains(point);
            if swatch.highlighted {
                self.selected = Some(swatch.color);
            }
        }
    }

    pub fn selected_color(&self) -> Option<SnakeColor> {
        self.selected
    }

    pub fn draw(&self, renderer: &mut impl Renderer) {
        for swatch in &self.swatches {
            swatch.draw(renderer)
        }
    }
}
