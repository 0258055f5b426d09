#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::Face;

/// Facelet color.
#[derive(EnumIter, Display, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    /// Solved color of the left face.
    Red,
    /// Solved color of the right face.
    Green,
    /// Solved color of the down face.
    Blue,
    /// Solved color of the up face.
    Yellow,
    /// Solved color of the back face.
    Orange,
    /// Solved color of the front face.
    White,
}
impl Color {
    /// Returns the color of `face` when the cube is solved.
    pub const fn canonical(face: Face) -> Self {
        match face {
            Face::L => Color::Red,
            Face::R => Color::Green,
            Face::D => Color::Blue,
            Face::U => Color::Yellow,
            Face::B => Color::Orange,
            Face::F => Color::White,
        }
    }
    /// Returns the face that has this color when the cube is solved.
    pub const fn home_face(self) -> Face {
        match self {
            Color::Red => Face::L,
            Color::Green => Face::R,
            Color::Blue => Face::D,
            Color::Yellow => Face::U,
            Color::Orange => Face::B,
            Color::White => Face::F,
        }
    }

    /// Returns the color as linear RGB components in the range 0.0 to 1.0.
    pub const fn rgb(self) -> [f32; 3] {
        match self {
            Color::Red => [1.0, 0.0, 0.0],
            Color::Green => [0.0, 1.0, 0.0],
            Color::Blue => [0.0, 0.0, 1.0],
            Color::Yellow => [1.0, 1.0, 0.0],
            Color::Orange => [1.0, 0.5, 0.0],
            Color::White => [1.0, 1.0, 1.0],
        }
    }

    /// Returns a one-letter symbol for the color.
    pub const fn symbol(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::White => 'W',
        }
    }
}
