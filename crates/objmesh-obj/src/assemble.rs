use objmesh_core::{Frame, Mesh, Normal, TextureCoordinates, Triangle, Vertex};
use tracing::{debug, trace};

use crate::record::{FaceGroup, LineRecord};

/// Build a single-frame mesh from a complete record stream.
///
/// Every vertex, normal and texture coordinate is collected before any face
/// is resolved, so faces may reference data that appears later in the file.
/// Indices are converted from 1-based to 0-based but are not range checked.
pub fn assemble(records: &[LineRecord]) -> Mesh {
    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut tex_coords = Vec::new();
    let mut faces = Vec::new();

    for record in records {
        match record {
            LineRecord::Vertex { x, y, z, .. } => vertices.push(Vertex::new(*x, *y, *z)),
            LineRecord::TexCoord { u, v, .. } => {
                tex_coords.push(TextureCoordinates::new(*u, *v));
            }
            LineRecord::Normal { x, y, z } => normals.push(Normal::new(*x, *y, *z)),
            LineRecord::Face { groups } => faces.push(groups.as_slice()),
            LineRecord::Comment { .. } => {}
        }
    }

    let mut triangles = Vec::new();
    for groups in faces {
        let before = triangles.len();
        triangulate_fan(groups, &mut triangles);
        trace!(
            "Face with {} corners produced {} triangles",
            groups.len(),
            triangles.len() - before
        );
    }

    debug!(
        "Assembled mesh: {} vertices, {} normals, {} tex coords, {} triangles",
        vertices.len(),
        normals.len(),
        tex_coords.len(),
        triangles.len()
    );

    Mesh::new(vec![Frame::new(vertices, normals)], tex_coords, triangles)
}

/// Fan out from the first corner: (g0, g1, g2), (g0, g2, g3), ...
fn triangulate_fan(groups: &[FaceGroup], out: &mut Vec<Triangle>) {
    let Some((root, rest)) = groups.split_first() else {
        return;
    };
    for pair in rest.windows(2) {
        out.push(triangle([root, &pair[0], &pair[1]]));
    }
}

fn triangle(corners: [&FaceGroup; 3]) -> Triangle {
    let vertices = corners.map(|g| to_zero_based(g.vertex));
    let tex_coords = all_present(corners.map(|g| g.tex_coord));
    let normals = all_present(corners.map(|g| g.normal));
    Triangle {
        vertices,
        tex_coords,
        normals,
    }
}

/// `Some` only when every corner specifies the attribute.
fn all_present(indices: [Option<i32>; 3]) -> Option<[i32; 3]> {
    match indices {
        [Some(a), Some(b), Some(c)] => Some([a, b, c].map(to_zero_based)),
        _ => None,
    }
}

fn to_zero_based(index: i32) -> i32 {
    index.saturating_sub(1)
}
