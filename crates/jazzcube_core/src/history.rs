//! Moves and the history of moves applied to a cube.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Dimensions, Face};

/// Quarter turn of one slice of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    /// Face that the slice is counted from, and that the turn is viewed from.
    pub face: Face,
    /// Number of layers in from `face`, starting at 0 for the outermost
    /// slice.
    pub layer: u16,
    /// Whether the turn is clockwise as seen by someone looking at `face`
    /// from outside the cube.
    pub clockwise: bool,
}
impl Move {
    /// Constructs a move.
    pub const fn new(face: Face, layer: u16, clockwise: bool) -> Self {
        Self {
            face,
            layer,
            clockwise,
        }
    }
    /// Constructs a clockwise turn of the outermost slice of `face`.
    pub const fn cw(face: Face) -> Self {
        Self::new(face, 0, true)
    }
    /// Constructs a counterclockwise turn of the outermost slice of `face`.
    pub const fn ccw(face: Face) -> Self {
        Self::new(face, 0, false)
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            clockwise: !self.clockwise,
            ..self
        }
    }

    /// Returns whether the move's layer exists on a cube with the given
    /// dimensions.
    pub fn is_in_range(self, dims: Dimensions) -> bool {
        self.layer < dims.layer_count(self.face.axis())
    }
}

/// Where a committed move came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveSource {
    /// Requested directly by the caller.
    Manual,
    /// Taken from the scramble queue.
    Scramble,
    /// Inverse of a history entry, applied by a solve step. Not recorded.
    Undo,
}
impl MoveSource {
    /// Returns whether moves from this source are appended to the history.
    pub fn is_recorded(self) -> bool {
        match self {
            MoveSource::Manual | MoveSource::Scramble => true,
            MoveSource::Undo => false,
        }
    }
}

/// Ordered list of moves applied to a cube since it was constructed or
/// reset. This doubles as the undo stack.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<Move>,
}
impl MoveHistory {
    /// Constructs an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a move.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }
    /// Removes and returns the most recent move.
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }
    /// Returns the most recent move.
    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Returns the number of moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }
    /// Returns whether there are no moves.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
    /// Returns the moves, oldest first.
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
    /// Returns an iterator over the moves, oldest first.
    pub fn iter(&self) -> impl '_ + DoubleEndedIterator<Item = Move> {
        self.moves.iter().copied()
    }

    /// Returns the sequence of moves that undoes the whole history, in the
    /// order they must be applied.
    pub fn undo_sequence(&self) -> impl '_ + Iterator<Item = Move> {
        self.iter().rev().map(Move::inverse)
    }
}
impl Extend<Move> for MoveHistory {
    fn extend<T: IntoIterator<Item = Move>>(&mut self, iter: T) {
        self.moves.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_inverse() {
        let mv = Move::new(Face::D, 2, true);
        assert_eq!(mv.inverse(), Move::new(Face::D, 2, false));
        assert_eq!(mv.inverse().inverse(), mv);
        assert_eq!(Move::cw(Face::F).inverse(), Move::ccw(Face::F));
    }

    #[test]
    fn test_move_range() {
        let dims = Dimensions::new(2, 5, 1).unwrap();
        assert!(Move::new(Face::R, 1, true).is_in_range(dims));
        assert!(!Move::new(Face::L, 2, true).is_in_range(dims));
        assert!(Move::new(Face::D, 4, true).is_in_range(dims));
        assert!(!Move::new(Face::B, 1, false).is_in_range(dims));
    }

    #[test]
    fn test_undo_sequence() {
        let mut history = MoveHistory::new();
        history.extend([Move::cw(Face::R), Move::ccw(Face::U), Move::new(Face::F, 1, true)]);
        assert_eq!(history.len(), 3);
        assert_eq!(
            history.undo_sequence().collect::<Vec<_>>(),
            vec![Move::new(Face::F, 1, false), Move::cw(Face::U), Move::ccw(Face::R)],
        );
        assert_eq!(history.pop(), Some(Move::new(Face::F, 1, true)));
        assert_eq!(history.last(), Some(Move::ccw(Face::U)));
        assert_eq!(history.pop(), Some(Move::ccw(Face::U)));
        assert_eq!(history.pop(), Some(Move::cw(Face::R)));
        assert!(history.is_empty());
        assert_eq!(history.last(), None);
    }
}
