use crate::{Axis, Face, MAX_LAYER_COUNT};

/// Reason that an operation on a cube was not performed.
///
/// None of these are fatal: whenever one is returned, the cube is left
/// exactly as it was.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// A side length is zero or larger than [`MAX_LAYER_COUNT`].
    #[error(
        "{axis} size {len} is out of range; must be between 1 and {max}",
        max = MAX_LAYER_COUNT
    )]
    InvalidDimension {
        /// Axis with the bad length.
        axis: Axis,
        /// Requested number of layers.
        len: u16,
    },
    /// Face symbol is not one of `R L U D F B`.
    #[error("unknown face {0:?}; expected one of R, L, U, D, F, B")]
    InvalidFace(char),
    /// Layer is not inside the cube.
    #[error("layer {layer} of {face} is out of range; {face} has {layer_count} layers")]
    InvalidLayer {
        /// Face the layer is counted from.
        face: Face,
        /// Requested layer, counted from 0.
        layer: u16,
        /// Number of layers along the face's axis.
        layer_count: u16,
    },
    /// Quarter turn of a rectangular slice, which would not map the slice
    /// onto itself.
    #[error("cannot quarter-turn {face}: slice is {width}x{height}")]
    NonSquareSlice {
        /// Face being turned.
        face: Face,
        /// Extent of the slice along its first free axis.
        width: u16,
        /// Extent of the slice along its second free axis.
        height: u16,
    },
    /// The whole cube is a single cubie, so no turn changes anything.
    #[error("cannot turn layer {layer} of {face} on a 1x1x1 cube")]
    DegenerateSlice {
        /// Face being turned.
        face: Face,
        /// Layer being turned.
        layer: u16,
    },
    /// Another rotation has begun and has not been committed or canceled.
    #[error("another rotation is in progress")]
    RotationInProgress,
}
