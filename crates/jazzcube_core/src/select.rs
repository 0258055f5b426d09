//! Selecting the cubies in one slice of the cube.

use crate::{Cube, Dimensions, Face, GridPos, Sign};

impl Dimensions {
    /// Returns the coordinate along `face`'s axis of the slice `layer` layers
    /// in from `face`, or `None` if the cube is not that deep.
    pub fn layer_coordinate(self, face: Face, layer: u16) -> Option<u16> {
        let layer_count = self.layer_count(face.axis());
        if layer >= layer_count {
            return None;
        }
        Some(match face.sign() {
            Sign::Pos => layer_count - 1 - layer,
            Sign::Neg => layer,
        })
    }
    /// Returns how many layers in from `face` the position `pos` is. This is
    /// the inverse of [`Dimensions::layer_coordinate()`].
    pub fn layer_of(self, face: Face, pos: GridPos) -> u16 {
        u16::abs_diff(self.boundary(face), pos[face.axis()])
    }
}

impl Cube {
    /// Returns the position of every cubie in the slice `layer` layers in
    /// from `face`, in sorted order.
    ///
    /// Returns an empty list if the cube is not that deep.
    pub fn select(&self, face: Face, layer: u16) -> Vec<GridPos> {
        let Some(coord) = self.dimensions().layer_coordinate(face, layer) else {
            return vec![];
        };
        let axis = face.axis();
        self.positions().filter(|pos| pos[axis] == coord).collect()
    }

    /// Returns the faces that can be turned.
    pub fn selectable_faces(&self) -> [Face; 6] {
        Face::ALL
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_layer_coordinate() {
        let dims = Dimensions::new(4, 1, 3).unwrap();
        assert_eq!(dims.layer_coordinate(Face::R, 0), Some(3));
        assert_eq!(dims.layer_coordinate(Face::R, 3), Some(0));
        assert_eq!(dims.layer_coordinate(Face::L, 1), Some(1));
        assert_eq!(dims.layer_coordinate(Face::R, 4), None);
        assert_eq!(dims.layer_coordinate(Face::U, 0), Some(0));
        assert_eq!(dims.layer_coordinate(Face::D, 0), Some(0));
        assert_eq!(dims.layer_coordinate(Face::U, 1), None);
        assert_eq!(dims.layer_coordinate(Face::F, 2), Some(0));
        assert_eq!(dims.layer_coordinate(Face::B, 2), Some(2));
    }

    #[test]
    fn test_layer_of_inverts_layer_coordinate() {
        let dims = Dimensions::new(2, 3, 5).unwrap();
        for face in Face::iter() {
            for layer in 0..dims[face.axis()] {
                let mut pos = GridPos::default();
                pos[face.axis()] = dims.layer_coordinate(face, layer).unwrap();
                assert_eq!(dims.layer_of(face, pos), layer);
            }
        }
    }

    #[test]
    fn test_select_3x3x3() {
        let cube = Cube::with_size(3, 3, 3).unwrap();

        let r = cube.select(Face::R, 0);
        assert_eq!(r.len(), 9);
        assert!(r.iter().all(|pos| pos.0[0] == 2));

        // Middle slice has no core cubie.
        let m = cube.select(Face::L, 1);
        assert_eq!(m.len(), 8);
        assert!(!m.contains(&GridPos::new(1, 1, 1)));
        assert_eq!(m, cube.select(Face::R, 1));

        assert!(cube.select(Face::R, 3).is_empty());
        assert_eq!(cube.select(Face::B, 0), cube.select(Face::F, 2));
    }

    #[test]
    fn test_select_degenerate_axis() {
        let cube = Cube::with_size(3, 1, 3).unwrap();
        assert_eq!(cube.select(Face::U, 0).len(), 9);
        assert_eq!(cube.select(Face::U, 0), cube.select(Face::D, 0));
        assert!(cube.select(Face::U, 1).is_empty());
        assert!(cube.select(Face::D, 1).is_empty());
    }

    #[test]
    fn test_selectable_faces() {
        let cube = Cube::with_size(2, 2, 2).unwrap();
        assert_eq!(cube.selectable_faces(), Face::ALL);
    }
}
