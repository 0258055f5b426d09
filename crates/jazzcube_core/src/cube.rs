//! Cube state: the facelets of every cubie, the move history, and the
//! scramble queue.

use std::collections::{BTreeMap, VecDeque};

use crate::{
    CubeError, Cubie, Dimensions, Face, Facelets, GridPos, Move, MoveHistory, MoveSource,
    PendingRotation, ScrambleParams, ScrambleState,
};

/// Result of a successful [`Cube::solve_step()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SolveStep {
    /// The most recent move was undone.
    Undone {
        /// Move that was undone. Its inverse was applied to the cube.
        mv: Move,
        /// Number of moves left in the history.
        remaining: usize,
    },
    /// There was nothing to undo.
    AlreadySolved,
}

/// State of an X×Y×Z cube: the facelets of every cubie on its shell, plus the
/// bookkeeping for scrambling and undoing.
#[derive(Debug, Clone)]
pub struct Cube {
    dims: Dimensions,
    /// Facelets of each cubie on the shell, keyed by current position.
    cubies: BTreeMap<GridPos, Facelets>,

    /// Moves applied since construction, most recent last.
    history: MoveHistory,
    /// Scramble moves not yet applied.
    scramble_queue: VecDeque<Move>,
    /// Whether the cube has been scrambled.
    scramble_state: ScrambleState,

    /// Rotation that has begun but not been committed.
    in_flight: Option<PendingRotation>,
}
impl Default for Cube {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}
impl Eq for Cube {}
impl PartialEq for Cube {
    fn eq(&self, other: &Self) -> bool {
        self.dims == other.dims && self.cubies == other.cubies
    }
}
impl Cube {
    /// Constructs a solved cube.
    pub fn new(dims: Dimensions) -> Self {
        let cubies = dims
            .shell_positions()
            .map(|pos| (pos, Facelets::solved(dims, pos)))
            .collect();
        Self {
            dims,
            cubies,

            history: MoveHistory::new(),
            scramble_queue: VecDeque::new(),
            scramble_state: ScrambleState::None,

            in_flight: None,
        }
    }
    /// Constructs a solved X×Y×Z cube, or returns an error if any side is out
    /// of range.
    pub fn with_size(x: u16, y: u16, z: u16) -> Result<Self, CubeError> {
        Ok(Self::new(Dimensions::new(x, y, z)?))
    }
    /// Resets the cube to a solved state with the same dimensions, discarding
    /// the history, the scramble, and any rotation in progress.
    pub fn reset(&mut self) {
        *self = Self::new(self.dims);
    }

    /// Returns the dimensions of the cube.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }
    /// Returns the number of cubies on the shell.
    pub fn cubie_count(&self) -> usize {
        self.cubies.len()
    }
    /// Returns an iterator over the positions of cubies on the shell, in
    /// sorted order.
    pub fn positions(&self) -> impl '_ + Iterator<Item = GridPos> {
        self.cubies.keys().copied()
    }
    /// Returns an iterator over every cubie on the shell, in sorted order.
    pub fn cubies(&self) -> impl '_ + Iterator<Item = Cubie> {
        self.cubies
            .iter()
            .map(|(&pos, &facelets)| Cubie { pos, facelets })
    }
    /// Returns the facelets of the cubie at `pos`, or `None` if there is no
    /// cubie there.
    pub fn get(&self, pos: GridPos) -> Option<Facelets> {
        self.cubies.get(&pos).copied()
    }

    /// Computes a rotation without applying it. The cube is unchanged until
    /// [`Cube::commit_rotation()`] is called.
    pub fn begin_rotation(&mut self, mv: Move) -> Result<&PendingRotation, CubeError> {
        self.begin(mv, MoveSource::Manual)
    }
    fn begin(&mut self, mv: Move, source: MoveSource) -> Result<&PendingRotation, CubeError> {
        if self.in_flight.is_some() {
            return Err(CubeError::RotationInProgress);
        }
        let pending = PendingRotation::compute(self, mv, source)?;
        Ok(&*self.in_flight.insert(pending))
    }
    /// Returns the rotation that has begun but not been committed.
    pub fn pending_rotation(&self) -> Option<&PendingRotation> {
        self.in_flight.as_ref()
    }
    /// Applies the rotation in progress and returns its move, or returns
    /// `None` if no rotation has begun.
    pub fn commit_rotation(&mut self) -> Option<Move> {
        let pending = self.in_flight.take()?;
        // The slice maps onto itself, so overwriting every new position
        // replaces every old one.
        self.cubies.extend(pending.results());

        let mv = pending.mv();
        if pending.source().is_recorded() {
            self.history.push(mv);
        }
        log::trace!("committed {mv} ({:?}, {} cubies)", pending.source(), pending.len());
        self.check_just_solved();
        Some(mv)
    }
    /// Discards the rotation in progress and returns its move, or returns
    /// `None` if no rotation has begun.
    pub fn cancel_rotation(&mut self) -> Option<Move> {
        let mv = self.in_flight.take()?.mv();
        log::trace!("canceled {mv}");
        Some(mv)
    }

    /// Turns one slice of the cube and records it in the history.
    ///
    /// On error, the cube is unchanged.
    pub fn rotate(&mut self, face: Face, layer: u16, clockwise: bool) -> Result<(), CubeError> {
        self.apply(Move::new(face, layer, clockwise))
    }
    /// Applies a move and records it in the history.
    ///
    /// On error, the cube is unchanged.
    pub fn apply(&mut self, mv: Move) -> Result<(), CubeError> {
        self.perform(mv, MoveSource::Manual)
    }
    /// Applies each move in order. Moves that cannot be performed are skipped
    /// and returned along with the reason.
    pub fn apply_all(&mut self, moves: impl IntoIterator<Item = Move>) -> Vec<(Move, CubeError)> {
        moves
            .into_iter()
            .filter_map(|mv| Some((mv, self.apply(mv).err()?)))
            .collect()
    }
    fn perform(&mut self, mv: Move, source: MoveSource) -> Result<(), CubeError> {
        self.begin(mv, source)?;
        self.commit_rotation();
        Ok(())
    }

    /// Queues a scramble of `length` random moves with a fresh seed and
    /// returns the parameters used to generate it.
    pub fn scramble(&mut self, length: u32) -> ScrambleParams {
        let params = ScrambleParams::new(length);
        self.scramble_with(&params);
        params
    }
    /// Queues the scramble generated by `params`. The moves are applied by
    /// [`Cube::exec_next_scramble_move()`] or [`Cube::finish_scramble()`].
    ///
    /// Earlier history is kept; scramble moves are appended to it as they are
    /// applied.
    pub fn scramble_with(&mut self, params: &ScrambleParams) {
        log::info!(
            "queueing {}-move scramble of {} with seed {:?}",
            params.length,
            self.dims,
            params.seed,
        );
        self.scramble_queue.extend(params.generate(self.dims));
        if !self.scramble_queue.is_empty() {
            self.scramble_state = ScrambleState::Scrambling;
        }
    }
    /// Returns the number of scramble moves not yet applied.
    pub fn scramble_remaining(&self) -> usize {
        self.scramble_queue.len()
    }
    /// Applies the next scramble move and returns the number left.
    ///
    /// Queued moves that cannot be performed on this cube are dropped without
    /// being recorded.
    pub fn exec_next_scramble_move(&mut self) -> Result<usize, CubeError> {
        if self.in_flight.is_some() {
            return Err(CubeError::RotationInProgress);
        }
        while let Some(mv) = self.scramble_queue.pop_front() {
            match self.perform(mv, MoveSource::Scramble) {
                Ok(()) => break,
                Err(e) => log::debug!("skipping scramble move {mv}: {e}"),
            }
        }
        if self.scramble_queue.is_empty() && self.scramble_state == ScrambleState::Scrambling {
            self.scramble_state = ScrambleState::Scrambled;
            self.check_just_solved();
        }
        Ok(self.scramble_queue.len())
    }
    /// Applies every remaining scramble move.
    pub fn finish_scramble(&mut self) -> Result<(), CubeError> {
        while self.scramble_remaining() > 0 {
            self.exec_next_scramble_move()?;
        }
        Ok(())
    }

    /// Undoes the most recent move in the history by applying its inverse.
    /// The inverse is not recorded.
    ///
    /// Any scramble moves still queued are discarded first.
    pub fn solve_step(&mut self) -> Result<SolveStep, CubeError> {
        if self.in_flight.is_some() {
            return Err(CubeError::RotationInProgress);
        }
        if !self.scramble_queue.is_empty() {
            log::debug!(
                "discarding {} queued scramble moves",
                self.scramble_queue.len(),
            );
            self.scramble_queue.clear();
            if self.scramble_state == ScrambleState::Scrambling {
                self.scramble_state = ScrambleState::Scrambled;
                self.check_just_solved();
            }
        }

        let Some(mv) = self.history.last() else {
            return Ok(SolveStep::AlreadySolved);
        };
        self.perform(mv.inverse(), MoveSource::Undo)?;
        self.history.pop();
        Ok(SolveStep::Undone {
            mv,
            remaining: self.history.len(),
        })
    }

    /// Returns the moves applied to the cube, including scramble moves.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }
    /// Returns whether the cube has been scrambled, solved, etc.
    pub fn scramble_state(&self) -> ScrambleState {
        self.scramble_state
    }
    /// Returns whether every facelet has the solved color for the direction
    /// it points.
    pub fn is_solved(&self) -> bool {
        self.cubies.values().all(Facelets::is_solved)
    }
    /// Checks whether the cube was scrambled and is now solved. If so,
    /// updates the scramble state, and returns `true`.
    fn check_just_solved(&mut self) -> bool {
        if self.scramble_state == ScrambleState::Scrambled && self.is_solved() {
            log::debug!("solved after scramble");
            self.scramble_state = ScrambleState::Solved;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Color;

    #[test]
    fn test_new_cube_is_solved() {
        let cube = Cube::default();
        assert_eq!(cube.dimensions(), Dimensions::cube(3).unwrap());
        assert_eq!(cube.cubie_count(), 26);
        assert!(cube.is_solved());
        assert!(cube.history().is_empty());
        assert_eq!(cube.scramble_state(), ScrambleState::None);
        assert_eq!(cube.get(GridPos::new(1, 1, 1)), None);
    }

    #[test]
    fn test_begin_does_not_change_state() {
        let mut cube = Cube::default();
        let before = cube.clone();
        let pending = cube.begin_rotation(Move::cw(Face::R)).unwrap();
        assert_eq!(pending.len(), 9);
        assert_eq!(cube, before);
        assert!(cube.history().is_empty());

        assert_eq!(cube.cancel_rotation(), Some(Move::cw(Face::R)));
        assert_eq!(cube.pending_rotation(), None);
        assert_eq!(cube.commit_rotation(), None);
        assert_eq!(cube, before);
    }

    #[test]
    fn test_second_begin_is_rejected() {
        let mut cube = Cube::default();
        cube.begin_rotation(Move::cw(Face::U)).unwrap();
        assert_eq!(
            cube.begin_rotation(Move::cw(Face::F)).map(|p| p.mv()),
            Err(CubeError::RotationInProgress),
        );
        assert_eq!(cube.rotate(Face::F, 0, true), Err(CubeError::RotationInProgress));
        assert_eq!(cube.solve_step(), Err(CubeError::RotationInProgress));
        assert_eq!(cube.commit_rotation(), Some(Move::cw(Face::U)));
        assert_eq!(cube.history().as_slice(), &[Move::cw(Face::U)]);
        assert!(cube.rotate(Face::F, 0, true).is_ok());
    }

    #[test]
    fn test_rotate_records_history() {
        let mut cube = Cube::default();
        cube.rotate(Face::R, 0, true).unwrap();
        cube.rotate(Face::U, 1, false).unwrap();
        assert_eq!(
            cube.history().as_slice(),
            &[Move::cw(Face::R), Move::new(Face::U, 1, false)],
        );
        assert!(!cube.is_solved());
        assert_eq!(
            cube.get(GridPos::new(2, 2, 0)).unwrap()[Face::U],
            Some(Color::White),
        );
    }

    #[test]
    fn test_apply_all_reports_skipped_moves() {
        let mut cube = Cube::default();
        let skipped = cube.apply_all([
            Move::cw(Face::R),
            Move::new(Face::L, 5, true),
            Move::ccw(Face::R),
        ]);
        assert_eq!(
            skipped,
            vec![(
                Move::new(Face::L, 5, true),
                CubeError::InvalidLayer {
                    face: Face::L,
                    layer: 5,
                    layer_count: 3,
                },
            )],
        );
        assert!(cube.is_solved());
        assert_eq!(cube.history().len(), 2);
    }

    #[test]
    fn test_scramble_state_transitions() {
        let mut cube = Cube::default();
        cube.scramble_with(&ScrambleParams::with_seed(4, "state"));
        assert_eq!(cube.scramble_state(), ScrambleState::Scrambling);
        assert_eq!(cube.scramble_remaining(), 4);
        assert_eq!(cube.exec_next_scramble_move(), Ok(3));
        assert_eq!(cube.history().len(), 1);
        cube.finish_scramble().unwrap();
        assert_eq!(cube.scramble_remaining(), 0);
        assert_eq!(cube.history().len(), 4);
        assert!(cube.scramble_state().has_been_fully_scrambled());

        while let SolveStep::Undone { .. } = cube.solve_step().unwrap() {}
        assert!(cube.is_solved());
        assert_eq!(cube.scramble_state(), ScrambleState::Solved);
        assert_eq!(cube.exec_next_scramble_move(), Ok(0));
    }

    #[test]
    fn test_solve_step_discards_queue() {
        let mut cube = Cube::default();
        cube.rotate(Face::F, 0, true).unwrap();
        cube.scramble_with(&ScrambleParams::with_seed(10, "discard"));
        cube.exec_next_scramble_move().unwrap();
        assert_eq!(cube.scramble_remaining(), 9);

        let scramble_move = cube.history().last().unwrap();
        assert_eq!(
            cube.solve_step(),
            Ok(SolveStep::Undone {
                mv: scramble_move,
                remaining: 1,
            }),
        );
        assert_eq!(cube.scramble_remaining(), 0);
        assert_eq!(
            cube.solve_step(),
            Ok(SolveStep::Undone {
                mv: Move::cw(Face::F),
                remaining: 0,
            }),
        );
        assert!(cube.is_solved());
        assert_eq!(cube.solve_step(), Ok(SolveStep::AlreadySolved));
    }

    #[test]
    fn test_cuboid_scramble_skips_blocked_moves() {
        let mut cube = Cube::with_size(2, 3, 4).unwrap();
        cube.scramble_with(&ScrambleParams::with_seed(40, "cuboid"));
        cube.finish_scramble().unwrap();
        // Every slice of a 2x3x4 is rectangular.
        assert!(cube.history().is_empty());
        assert!(cube.is_solved());
    }

    #[test]
    fn test_reset() {
        let mut cube = Cube::with_size(4, 4, 4).unwrap();
        cube.scramble(20);
        cube.finish_scramble().unwrap();
        cube.begin_rotation(Move::cw(Face::B)).unwrap();
        cube.reset();
        assert_eq!(cube, Cube::with_size(4, 4, 4).unwrap());
        assert!(cube.history().is_empty());
        assert_eq!(cube.pending_rotation(), None);
        assert_eq!(cube.scramble_state(), ScrambleState::None);
    }
}
