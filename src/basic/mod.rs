pub use dir::Dir;
pub use grid_point::{GridDim, GridPoint};
pub use point::Point;

mod dir;
mod grid_point;
mod point;
