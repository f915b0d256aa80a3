use crate::{basic::Point, color::Color};
use ggez::graphics::{Canvas, DrawParam, PxScale, Quad, Rect, Text};

/// Draw order, higher layers are drawn on top
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum Layer {
    Board = 0,
    Overlay = 1,
    Swatch = 2,
}

/// Everything the game needs to put on the screen, in pixel coordinates
pub trait Renderer {
    fn draw_square(&mut self, origin: Point, size: f32, color: Color, layer: Layer);
    fn draw_text(&mut self, text: &str, origin: Point, size: f32, color: Color, layer: Layer);
}

pub struct CanvasRenderer<'a> {
    canvas: &'a mut Canvas,
}

impl<'a> CanvasRenderer<'a> {
    pub fn new(canvas: &'a mut Canvas) -> Self {
        Self { canvas }
    }
}

impl Renderer for CanvasRenderer<'_> {
    fn draw_square(&mut self, origin: Point, size: f32, color: Color, layer: Layer) {
        let dp = DrawParam::default()
            .dest_rect(Rect::new(origin.x, origin.y, size, size))
            .color(*color)
            .z(layer as i32);
        self.canvas.draw(&Quad, dp)
    }

    fn draw_text(&mut self, text: &str, origin: Point, size: f32, color: Color, layer: Layer) {
        let mut text = Text::new(text);
        text.set_scale(PxScale::from(size));
        let dp = DrawParam::default()
            .dest(origin)
            .color(*color)
            .z(layer as i32);
        self.canvas.draw(&text, dp)
    }
}

#[cfg(test)]
pub mod recording {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum DrawCall {
        Square {
            origin: Point,
            size: f32,
            color: Color,
            layer: Layer,
        },
        Text {
            text: String,
            origin: Point,
            size: f32,
            color: Color,
            layer: Layer,
        },
    }

    /// Keeps every draw request for inspection in tests
    #[derive(Default)]
    pub struct RecordingRenderer {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingRenderer {
        pub fn squares_on(&self, layer: Layer) -> impl Iterator<Item = &DrawCall> {
            self.calls.iter().filter(move |call| {
                matches!(call, DrawCall::Square { layer: l, .. } if *l == layer)
            })
        }

        pub fn texts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Text { text, .. } => Some(text.as_str()),
                    DrawCall::Square { .. } => None,
                })
                .collect()
        }
    }

    impl Renderer for RecordingRenderer {
        fn draw_square(&mut self, origin: Point, size: f32, color: Color, layer: Layer) {
            self.calls.push(DrawCall::Square { origin, size, color, layer })
        }

        fn draw_text(&mut self, text: &str, origin: Point, size: f32, color: Color, layer: Layer) {
            self.calls.push(DrawCall::Text {
                text: text.to_string(),
                origin,
                size,
                color,
                layer,
            })
        }
    }
}
