//! Quarter turns of a slice: where each cubie goes and which way its
//! facelets end up pointing.

use std::fmt;

use crate::{Axis, Cube, CubeError, Dimensions, Face, Facelets, GridPos, Move, MoveSource, Sign};

/// Faces around each axis, in the order that a positive quarter turn about
/// that axis carries them.
const FACE_CYCLES: [[Face; 4]; 3] = [
    [Face::U, Face::F, Face::D, Face::B], // X
    [Face::F, Face::R, Face::B, Face::L], // Y
    [Face::R, Face::U, Face::L, Face::D], // Z
];

/// 90-degree rotation about an axis through the center of the cube.
///
/// A positive turn follows the right-hand rule: it carries the first of
/// [`Axis::perpendiculars()`] onto the second.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct QuarterTurn {
    /// Axis of rotation.
    pub axis: Axis,
    /// Direction of rotation.
    pub sign: Sign,
}
impl fmt::Display for QuarterTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign, self.axis)
    }
}
impl QuarterTurn {
    /// Returns the rotation that turns `face` clockwise (or counterclockwise)
    /// as seen from outside that face.
    pub fn new(face: Face, clockwise: bool) -> Self {
        // Looking at a positive face from outside, clockwise is the negative
        // direction about its axis.
        let sign = if clockwise { -face.sign() } else { face.sign() };
        Self {
            axis: face.axis(),
            sign,
        }
    }

    /// Returns the rotation in the opposite direction.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            axis: self.axis,
            sign: -self.sign,
        }
    }

    /// Returns the direction that a facelet pointing toward `face` points
    /// after the rotation.
    pub fn apply_to_face(self, face: Face) -> Face {
        if face.axis() == self.axis {
            return face;
        }
        let cycle = &FACE_CYCLES[self.axis.index()];
        let Some(i) = cycle.iter().position(|&f| f == face) else {
            return face;
        };
        match self.sign {
            Sign::Pos => cycle[(i + 1) % 4],
            Sign::Neg => cycle[(i + 3) % 4],
        }
    }

    /// Returns the position of the cubie at `pos` after the rotation.
    ///
    /// The two axes perpendicular to the rotation must have the same length
    /// in `dims`.
    pub fn apply_to_pos(self, pos: GridPos, dims: Dimensions) -> GridPos {
        let [a, b] = self.axis.perpendiculars();
        debug_assert_eq!(dims[a], dims[b], "quarter turn of non-square slice");
        let max = dims[a] - 1;

        // Relative to the center of the slice, a positive turn takes `(u, v)`
        // to `(-v, u)` and a negative turn takes it to `(v, -u)`.
        let mut ret = pos;
        match self.sign {
            Sign::Pos => {
                ret[a] = max - pos[b];
                ret[b] = pos[a];
            }
            Sign::Neg => {
                ret[a] = pos[b];
                ret[b] = max - pos[a];
            }
        }
        ret
    }
}

impl Facelets {
    /// Returns the facelets after rotating the cubie they belong to.
    #[must_use]
    pub fn rotated(self, turn: QuarterTurn) -> Self {
        let mut ret = Facelets::default();
        for (face, color) in self.iter() {
            ret[turn.apply_to_face(face)] = Some(color);
        }
        ret
    }
}

/// Rotation that has been computed but not yet applied to the cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRotation {
    mv: Move,
    source: MoveSource,
    turn: QuarterTurn,
    /// Old position, new position, and new facelets of every cubie in the
    /// slice.
    moves: Vec<(GridPos, GridPos, Facelets)>,
}
impl PendingRotation {
    /// Computes the effect of `mv` on `cube` without modifying it.
    pub(crate) fn compute(cube: &Cube, mv: Move, source: MoveSource) -> Result<Self, CubeError> {
        let dims = cube.dimensions();
        let Move { face, layer, .. } = mv;

        let layer_count = dims.layer_count(face.axis());
        if layer >= layer_count {
            return Err(CubeError::InvalidLayer {
                face,
                layer,
                layer_count,
            });
        }
        let [a, b] = face.axis().perpendiculars();
        let (width, height) = (dims[a], dims[b]);
        if width != height {
            return Err(CubeError::NonSquareSlice {
                face,
                width,
                height,
            });
        }
        if dims.max_layer_count() == 1 {
            return Err(CubeError::DegenerateSlice { face, layer });
        }

        let turn = QuarterTurn::new(face, mv.clockwise);
        let moves = cube
            .select(face, layer)
            .into_iter()
            .filter_map(|old_pos| {
                let facelets = cube.get(old_pos)?;
                let new_pos = turn.apply_to_pos(old_pos, dims);
                let rotated = facelets.rotated(turn);
                let new_facelets = Facelets::from_fn(|f| {
                    dims.is_exposed(new_pos, f).then_some(rotated[f]).flatten()
                });
                debug_assert_eq!(rotated, new_facelets, "facelet exposure changed");
                Some((old_pos, new_pos, new_facelets))
            })
            .collect();

        Ok(Self {
            mv,
            source,
            turn,
            moves,
        })
    }

    /// Returns the move being performed.
    pub fn mv(&self) -> Move {
        self.mv
    }
    /// Returns where the move came from.
    pub fn source(&self) -> MoveSource {
        self.source
    }
    /// Returns the geometric rotation applied to the slice.
    pub fn turn(&self) -> QuarterTurn {
        self.turn
    }
    /// Returns the number of cubies in the slice.
    pub fn len(&self) -> usize {
        self.moves.len()
    }
    /// Returns whether the slice has no cubies.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
    /// Returns the current positions of the cubies in the slice.
    pub fn positions(&self) -> impl '_ + Iterator<Item = GridPos> {
        self.moves.iter().map(|&(old, _, _)| old)
    }
    /// Returns the old and new position of each cubie in the slice.
    pub fn mapping(&self) -> impl '_ + Iterator<Item = (GridPos, GridPos)> {
        self.moves.iter().map(|&(old, new, _)| (old, new))
    }
    /// Returns the new position and facelets of each cubie in the slice.
    pub(crate) fn results(&self) -> impl '_ + Iterator<Item = (GridPos, Facelets)> {
        self.moves.iter().map(|&(_, new, facelets)| (new, facelets))
    }
}
