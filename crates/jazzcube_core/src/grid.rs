//! Grid coordinates, dimensions, and per-cubie facelet records.

use std::fmt;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{Axis, Color, CubeError, DEFAULT_LAYER_COUNT, Face, MAX_LAYER_COUNT, Sign};

/// Number of layers along each axis of a cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions([u16; 3]);
impl Default for Dimensions {
    fn default() -> Self {
        Self([DEFAULT_LAYER_COUNT; 3])
    }
}
impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "{x}x{y}x{z}")
    }
}
impl Index<Axis> for Dimensions {
    type Output = u16;

    fn index(&self, axis: Axis) -> &Self::Output {
        &self.0[axis.index()]
    }
}
impl Dimensions {
    /// Constructs dimensions for an X×Y×Z cuboid, or returns an error if any
    /// side is zero or larger than [`MAX_LAYER_COUNT`].
    pub fn new(x: u16, y: u16, z: u16) -> Result<Self, CubeError> {
        let ret = Self([x, y, z]);
        for axis in Axis::iter() {
            let len = ret[axis];
            if !(1..=MAX_LAYER_COUNT).contains(&len) {
                return Err(CubeError::InvalidDimension { axis, len });
            }
        }
        Ok(ret)
    }
    /// Constructs dimensions for an N×N×N cube.
    pub fn cube(layer_count: u16) -> Result<Self, CubeError> {
        Self::new(layer_count, layer_count, layer_count)
    }

    /// Returns the number of layers along `axis`.
    pub fn layer_count(self, axis: Axis) -> u16 {
        self[axis]
    }
    /// Returns the largest number of layers along any axis.
    pub fn max_layer_count(self) -> u16 {
        self.0.into_iter().max().unwrap_or(1)
    }

    /// Returns the coordinate of the outermost layer on `face`.
    pub fn boundary(self, face: Face) -> u16 {
        match face.sign() {
            Sign::Pos => self[face.axis()] - 1,
            Sign::Neg => 0,
        }
    }
    /// Returns whether a cubie at `pos` shows a facelet on `face`.
    pub fn is_exposed(self, pos: GridPos, face: Face) -> bool {
        pos[face.axis()] == self.boundary(face)
    }
    /// Returns whether `pos` is on the outer shell of the cube.
    pub fn is_on_shell(self, pos: GridPos) -> bool {
        Face::iter().any(|face| self.is_exposed(pos, face))
    }
    /// Returns whether `pos` is inside the cube at all.
    pub fn contains(self, pos: GridPos) -> bool {
        Axis::iter().all(|axis| pos[axis] < self[axis])
    }

    /// Returns an iterator over every position on the outer shell, in
    /// lexicographic `(x, y, z)` order.
    pub fn shell_positions(self) -> impl Iterator<Item = GridPos> {
        let [nx, ny, nz] = self.0;
        itertools::iproduct!(0..nx, 0..ny, 0..nz)
            .map(|(x, y, z)| GridPos([x, y, z]))
            .filter(move |&pos| self.is_on_shell(pos))
    }

    /// Returns the default scramble length for these dimensions.
    pub fn default_scramble_length(self) -> u32 {
        10 * u32::from(self.max_layer_count())
    }
}

/// Integer grid coordinates `(x, y, z)` of a cubie.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridPos(pub [u16; 3]);
impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "({x}, {y}, {z})")
    }
}
impl Index<Axis> for GridPos {
    type Output = u16;

    fn index(&self, axis: Axis) -> &Self::Output {
        &self.0[axis.index()]
    }
}
impl IndexMut<Axis> for GridPos {
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        &mut self.0[axis.index()]
    }
}
impl GridPos {
    /// Constructs a grid position.
    pub const fn new(x: u16, y: u16, z: u16) -> Self {
        Self([x, y, z])
    }
}

/// Colors of the facelets on one cubie, indexed by the face each one points
/// toward. A slot is `None` when the cubie shows nothing in that direction.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Facelets([Option<Color>; 6]);
impl Index<Face> for Facelets {
    type Output = Option<Color>;

    fn index(&self, face: Face) -> &Self::Output {
        &self.0[face.index()]
    }
}
impl IndexMut<Face> for Facelets {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        &mut self.0[face.index()]
    }
}
impl Facelets {
    /// Returns the facelets of a solved cubie at `pos`.
    pub fn solved(dims: Dimensions, pos: GridPos) -> Self {
        Self::from_fn(|face| dims.is_exposed(pos, face).then(|| face.color()))
    }
    /// Constructs facelets by calling `f` for each face.
    pub fn from_fn(mut f: impl FnMut(Face) -> Option<Color>) -> Self {
        Self(Face::ALL.map(&mut f))
    }

    /// Returns the color of the facelet pointing toward `face`, if there is
    /// one.
    pub fn get(&self, face: Face) -> Option<Color> {
        self[face]
    }
    /// Returns an iterator over the faces with a facelet and their colors.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (Face, Color)> {
        Face::iter().filter_map(|face| Some((face, self[face]?)))
    }
    /// Returns an iterator over the faces with a facelet.
    pub fn exposed_faces(&self) -> impl '_ + Iterator<Item = Face> {
        self.iter().map(|(face, _)| face)
    }
    /// Returns the number of facelets.
    pub fn len(&self) -> usize {
        self.0.iter().flatten().count()
    }
    /// Returns whether the cubie has no facelets.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether every facelet has the solved color for the direction it
    /// points.
    pub fn is_solved(&self) -> bool {
        self.iter().all(|(face, color)| color == face.color())
    }
}

/// Cubie on the outer shell of a cube: its position and its facelets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cubie {
    /// Current grid position.
    pub pos: GridPos,
    /// Current facelet colors.
    pub facelets: Facelets,
}
