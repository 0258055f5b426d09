//! Cube-state engine for Jazzcube.
//!
//! Tracks the facelet colors of an X×Y×Z twisty cube, turns its slices, and
//! keeps the move history used for scrambling and step-by-step undo. Drawing
//! the cube is left to the caller, which reads [`Cube::cubies()`] between
//! rotations.

#[cfg(test)]
use criterion as _; // Suppress unused crate warning (it's used in a benchmark)

mod axis;
mod color;
mod cube;
mod error;
mod grid;
mod history;
pub mod notation;
mod rotation;
mod scramble;
mod select;
mod shared;

pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::axis::{Axis, Face, Sign};
    pub use crate::color::Color;
    pub use crate::cube::{Cube, SolveStep};
    pub use crate::error::CubeError;
    pub use crate::grid::{Cubie, Dimensions, Facelets, GridPos};
    pub use crate::history::{Move, MoveHistory, MoveSource};
    pub use crate::notation::ParseError;
    pub use crate::rotation::{PendingRotation, QuarterTurn};
    pub use crate::scramble::{ScrambleParams, ScrambleState};
    pub use crate::shared::SharedCube;
}

/// Maximum number of layers along any axis.
pub const MAX_LAYER_COUNT: u16 = 64;

/// Number of layers along each axis of the default cube.
pub const DEFAULT_LAYER_COUNT: u16 = 3;
