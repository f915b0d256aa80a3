use ggez::graphics;
use std::fmt::{self, Display, Formatter};

#[derive(Deref, DerefMut, Copy, Clone, Debug, PartialEq)]
pub struct Color(pub graphics::Color);

impl Color {
    pub const WHITE: Self = Self(graphics::Color::WHITE);
    pub const BLACK: Self = Self(graphics::Color::BLACK);
    pub const RED: Self = Self(graphics::Color::RED);

    #[inline(always)]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(graphics::Color::from_rgb(r, g, b))
    }
}

/// Colors the player can pick for the snake
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum SnakeColor {
    Maroon,
    Teal,
    #[default]
    Olive,
    Silver,
    Orange,
}

impl SnakeColor {
    /// In the order the swatches are laid out
    pub const ALL: [Self; 5] = [
        Self::Maroon,
        Self::Teal,
        Self::Olive,
        Self::Silver,
        Self::Orange,
    ];

    pub fn color(self) -> Color {
        use SnakeColor::*;
        match self {
            Maroon => Color::from_rgb(128, 0, 0),
            Teal => Color::from_rgb(0, 128, 128),
            Olive => Color::from_rgb(128, 128, 0),
            Silver => Color::from_rgb(192, 192, 192),
            Orange => Color::from_rgb(255, 165, 0),
        }
    }
}

impl Display for SnakeColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use SnakeColor::*;
        let name = match self {
            Maroon => "maroon",
            Teal => "teal",
            Olive => "olive",
            Silver => "silver",
            Orange => "orange",
        };
        f.write_str(name)
    }
}

#[test]
fn test_palette_colors_are_distinct() {
    use itertools::Itertools;

    let colors = SnakeColor::ALL.map(|c| c.color());
    for (a, b) in colors.iter().tuple_combinations() {
        assert_ne!(a, b);
    }
    assert_eq!(SnakeColor::default(), SnakeColor::Olive);
}
