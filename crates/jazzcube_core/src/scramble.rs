//! Seeded scramble generation.

use rand::{Rng, SeedableRng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::{Dimensions, Face, Move};

/// Parameters to deterministically generate a move sequence to scramble a
/// cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScrambleParams {
    /// Number of moves to generate.
    pub length: u32,
    /// Random seed. The same seed on the same dimensions always generates the
    /// same moves.
    pub seed: String,
}
impl ScrambleParams {
    /// Generates new parameters with a random seed.
    pub fn new(length: u32) -> Self {
        let random_u64: u64 = rand::rng().random();
        Self::with_seed(length, random_u64.to_string())
    }
    /// Constructs parameters with a specific seed.
    pub fn with_seed(length: u32, seed: impl Into<String>) -> Self {
        Self {
            length,
            seed: seed.into(),
        }
    }

    /// Returns the random number generator determined by the seed.
    pub fn rng(&self) -> rand_chacha::ChaCha12Rng {
        let digest = sha2::Sha256::new()
            .chain_update(self.seed.len().to_le_bytes())
            .chain_update(self.seed.as_bytes())
            .finalize();
        rand_chacha::ChaCha12Rng::from_seed(digest.into())
    }

    /// Generates the scramble for a cube with the given dimensions.
    ///
    /// Each move picks a face uniformly, then a layer uniformly from the
    /// layers along that face's axis, then a direction by coin flip.
    pub fn generate(&self, dims: Dimensions) -> Vec<Move> {
        let mut rng = self.rng();
        (0..self.length)
            .map(|_| {
                let face = Face::ALL[rng.random_range(0..Face::ALL.len())];
                let layer = rng.random_range(0..dims[face.axis()]);
                let clockwise = rng.random_bool(0.5);
                Move::new(face, layer, clockwise)
            })
            .collect()
    }
}

/// Where a cube is in the scramble-then-solve cycle.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScrambleState {
    /// Not scrambled.
    #[default]
    None,
    /// Scramble moves are queued but not all applied.
    Scrambling,
    /// Every scramble move has been applied and the cube is not solved.
    Scrambled,
    /// The cube was scrambled and has since been solved.
    Solved,
}
impl ScrambleState {
    /// Returns whether a scramble has been fully applied to the cube, solved
    /// or not.
    pub fn has_been_fully_scrambled(self) -> bool {
        matches!(self, ScrambleState::Scrambled | ScrambleState::Solved)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_same_seed_same_moves() {
        let dims = Dimensions::new(4, 2, 3).unwrap();
        let params = ScrambleParams::with_seed(50, "jazz");
        let moves = params.generate(dims);
        assert_eq!(moves.len(), 50);
        assert_eq!(moves, ScrambleParams::with_seed(50, "jazz").generate(dims));
        assert_ne!(moves, ScrambleParams::with_seed(50, "jazzy").generate(dims));
        assert!(moves.iter().all(|mv| mv.is_in_range(dims)));
    }

    #[test]
    fn test_prefix_stable_across_lengths() {
        let dims = Dimensions::cube(3).unwrap();
        let short = ScrambleParams::with_seed(5, "seed").generate(dims);
        let long = ScrambleParams::with_seed(20, "seed").generate(dims);
        assert_eq!(&short[..], &long[..5]);
    }

    #[test]
    fn test_random_params() {
        let params = ScrambleParams::new(7);
        assert_eq!(params.length, 7);
        assert!(!params.seed.is_empty());
        assert_eq!(params.generate(Dimensions::default()).len(), 7);
    }

    #[test]
    fn test_uses_every_face() {
        let moves = ScrambleParams::with_seed(300, "coverage").generate(Dimensions::default());
        for face in Face::ALL {
            assert!(moves.iter().any(|mv| mv.face == face), "{face} never chosen");
        }
        assert!(moves.iter().any(|mv| mv.clockwise));
        assert!(moves.iter().any(|mv| !mv.clockwise));
        assert!(moves.iter().any(|mv| mv.layer == 2));
    }
}
