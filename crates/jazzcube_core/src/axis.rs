//! Axes, signs, and faces of a 3D cube.

use std::fmt;
use std::ops::{Mul, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::{Color, CubeError};

/// 3-dimensional axis.
#[derive(EnumIter, strum::Display, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the viewer).
    Z = 2,
}
impl Axis {
    /// Returns the index of the axis in a coordinate triple.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the two axes perpendicular to this one, using the right-hand
    /// rule: a positive quarter turn about `self` carries the first returned
    /// axis onto the second.
    pub const fn perpendiculars(self) -> [Axis; 2] {
        use Axis::*;
        match self {
            X => [Y, Z], // X+ => rotate from Y+ to Z+.
            Y => [Z, X], // Y+ => rotate from Z+ to X+.
            Z => [X, Y], // Z+ => rotate from X+ to Y+.
        }
    }

    /// Returns the face on the given side of the axis.
    pub const fn face(self, sign: Sign) -> Face {
        use Face::*;
        match (self, sign) {
            (Axis::X, Sign::Pos) => R,
            (Axis::X, Sign::Neg) => L,
            (Axis::Y, Sign::Pos) => U,
            (Axis::Y, Sign::Neg) => D,
            (Axis::Z, Sign::Pos) => F,
            (Axis::Z, Sign::Neg) => B,
        }
    }
}

/// Positive or negative.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    /// Positive
    #[default]
    Pos,
    /// Negative
    Neg,
}
impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Pos => write!(f, "+"),
            Sign::Neg => write!(f, "-"),
        }
    }
}
impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }
}
impl Mul<Sign> for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        match self {
            Sign::Pos => rhs,
            Sign::Neg => -rhs,
        }
    }
}
impl Sign {
    /// Returns an integer representation of the sign (either -1 or 1).
    pub const fn int(self) -> i32 {
        match self {
            Sign::Pos => 1,
            Sign::Neg => -1,
        }
    }
}

/// Face of the cube.
///
/// A face is both something that can be turned and the outward direction of
/// a facelet: a facelet "on `U`" points up.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Face {
    /// Right (+X).
    R = 0,
    /// Left (-X).
    L = 1,
    /// Up (+Y).
    U = 2,
    /// Down (-Y).
    D = 3,
    /// Front (+Z).
    F = 4,
    /// Back (-Z).
    B = 5,
}
impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl TryFrom<char> for Face {
    type Error = CubeError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Face::iter()
            .find(|face| face.symbol() == c)
            .ok_or(CubeError::InvalidFace(c))
    }
}
impl Face {
    /// All six faces, in the order `R L U D F B`.
    pub const ALL: [Face; 6] = [Face::R, Face::L, Face::U, Face::D, Face::F, Face::B];

    /// Returns the index of the face, in the same order as [`Face::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the axis perpendicular to the face.
    pub const fn axis(self) -> Axis {
        use Face::*;
        match self {
            R | L => Axis::X,
            U | D => Axis::Y,
            F | B => Axis::Z,
        }
    }
    /// Returns which end of its axis the face is on. `R`, `U`, and `F` are on
    /// the maximum-index end.
    pub const fn sign(self) -> Sign {
        use Face::*;
        match self {
            R | U | F => Sign::Pos,
            L | D | B => Sign::Neg,
        }
    }
    /// Returns the face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Self {
        use Face::*;
        match self {
            R => L,
            L => R,
            U => D,
            D => U,
            F => B,
            B => F,
        }
    }

    /// Returns the color of every facelet on this face when the cube is
    /// solved.
    pub const fn color(self) -> Color {
        Color::canonical(self)
    }

    /// Returns the single-letter symbol for the face.
    pub const fn symbol(self) -> char {
        use Face::*;
        match self {
            R => 'R',
            L => 'L',
            U => 'U',
            D => 'D',
            F => 'F',
            B => 'B',
        }
    }
    /// Returns a human-friendly name for the face.
    pub const fn name(self) -> &'static str {
        use Face::*;
        match self {
            R => "Right",
            L => "Left",
            U => "Up",
            D => "Down",
            F => "Front",
            B => "Back",
        }
    }
}
