use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::{Cube, CubeError, Face, Move, SolveStep};

/// Cube that can be shared between threads.
///
/// Every method locks the cube for its whole duration, so a rotation's begin
/// and commit can come from different threads but two rotations never
/// overlap.
#[derive(Debug, Default, Clone)]
pub struct SharedCube(Arc<Mutex<Cube>>);
impl From<Cube> for SharedCube {
    fn from(cube: Cube) -> Self {
        Self(Arc::new(Mutex::new(cube)))
    }
}
impl SharedCube {
    /// Wraps a cube.
    pub fn new(cube: Cube) -> Self {
        Self::from(cube)
    }

    /// Locks the cube for arbitrary access.
    pub fn lock(&self) -> MutexGuard<'_, Cube> {
        self.0.lock()
    }
    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> Cube {
        self.lock().clone()
    }

    /// See [`Cube::rotate()`].
    pub fn rotate(&self, face: Face, layer: u16, clockwise: bool) -> Result<(), CubeError> {
        self.lock().rotate(face, layer, clockwise)
    }
    /// See [`Cube::begin_rotation()`].
    pub fn begin(&self, mv: Move) -> Result<(), CubeError> {
        self.lock().begin_rotation(mv).map(|_| ())
    }
    /// See [`Cube::commit_rotation()`].
    pub fn commit(&self) -> Option<Move> {
        self.lock().commit_rotation()
    }
    /// See [`Cube::cancel_rotation()`].
    pub fn cancel(&self) -> Option<Move> {
        self.lock().cancel_rotation()
    }
    /// See [`Cube::solve_step()`].
    pub fn solve_step(&self) -> Result<SolveStep, CubeError> {
        self.lock().solve_step()
    }
    /// See [`Cube::is_solved()`].
    pub fn is_solved(&self) -> bool {
        self.lock().is_solved()
    }
}
