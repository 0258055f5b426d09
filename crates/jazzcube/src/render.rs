use itertools::Itertools;
use jazzcube_core::{Axis, Cube, Face, GridPos};

/// Axis along which rows of a face grid run from top to bottom, and whether
/// the coordinate descends; then the same for columns from left to right.
///
/// Each face is drawn as seen from outside the cube, with `U` and `D` oriented
/// so that their edge next to `F` faces the front grid.
fn face_layout(face: Face) -> [(Axis, bool); 2] {
    match face {
        Face::F => [(Axis::Y, true), (Axis::X, false)],
        Face::B => [(Axis::Y, true), (Axis::X, true)],
        Face::R => [(Axis::Y, true), (Axis::Z, true)],
        Face::L => [(Axis::Y, true), (Axis::Z, false)],
        Face::U => [(Axis::Z, false), (Axis::X, false)],
        Face::D => [(Axis::Z, true), (Axis::X, false)],
    }
}

fn coords(len: u16, descending: bool) -> Vec<u16> {
    if descending {
        (0..len).rev().collect()
    } else {
        (0..len).collect()
    }
}

/// Returns the rows of color symbols on one face.
pub(crate) fn face_grid(cube: &Cube, face: Face) -> Vec<String> {
    let dims = cube.dimensions();
    let [(row_axis, row_desc), (col_axis, col_desc)] = face_layout(face);

    let mut pos = GridPos::default();
    pos[face.axis()] = dims.boundary(face);

    coords(dims[row_axis], row_desc)
        .into_iter()
        .map(|row| {
            pos[row_axis] = row;
            coords(dims[col_axis], col_desc)
                .into_iter()
                .map(|col| {
                    pos[col_axis] = col;
                    cube.get(pos)
                        .and_then(|facelets| facelets[face])
                        .map_or('?', |color| color.symbol())
                })
                .join(" ")
        })
        .collect()
}

/// Renders all six faces as labeled grids.
pub(crate) fn render_cube(cube: &Cube) -> String {
    let mut out = String::new();
    for face in [Face::U, Face::L, Face::F, Face::R, Face::B, Face::D] {
        out += &format!("{} ({face}):\n", face.name());
        for row in face_grid(cube, face) {
            out += &format!("  {row}\n");
        }
    }
    out
}
