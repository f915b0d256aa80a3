use std::ops::Neg;

use Dir::*;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

impl Dir {
    // clockwise order starting from Up
    #[cfg(test)]
    pub fn iter() -> impl Iterator<Item = Self> + Clone {
        [Up, Right, Down, Left].iter().copied()
    }

    /// Unit step on the grid, rows grow downwards
    pub fn delta(self) -> (isize, isize) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

#[test]
fn test_opposite() {
    for (dir, opposite) in [(Up, Down), (Down, Up), (Left, Right), (Right, Left)] {
        assert_eq!(-dir, opposite, "-{:?}", dir);
    }
    for dir in Dir::iter() {
        assert_eq!(-(-dir), dir);
    }
}

#[test]
fn test_delta_is_unit_step() {
    for dir in Dir::iter() {
        let (dc, dr) = dir.delta();
        assert_eq!(dc.abs() + dr.abs(), 1, "{:?}", dir);
        let (oc, or) = (-dir).delta();
        assert_eq!((dc + oc, dr + or), (0, 0));
    }
}
