//! Human-readable mesh summaries

use std::fmt::Write;

use objmesh_core::Mesh;
use objmesh_obj::LineRecord;

/// Summarize counts and bounds of a loaded mesh
pub fn summary(name: &str, mesh: &Mesh) -> String {
    let mut out = String::new();
    let with_tex = mesh
        .triangles
        .iter()
        .filter(|t| t.tex_coords.is_some())
        .count();
    let with_normals = mesh
        .triangles
        .iter()
        .filter(|t| t.normals.is_some())
        .count();

    let _ = writeln!(out, "{name}");
    let _ = writeln!(out, "  frames:     {}", mesh.frames.len());
    let _ = writeln!(out, "  vertices:   {}", mesh.vertex_count());
    let _ = writeln!(out, "  normals:    {}", mesh.normal_count());
    let _ = writeln!(out, "  tex coords: {}", mesh.tex_coords.len());
    let _ = writeln!(
        out,
        "  triangles:  {} ({} textured, {} with normals)",
        mesh.triangle_count(),
        with_tex,
        with_normals
    );
    match mesh.frame().and_then(|f| f.bounds()) {
        Some((min, max)) => {
            let _ = writeln!(
                out,
                "  bounds:     [{:.3}, {:.3}, {:.3}] .. [{:.3}, {:.3}, {:.3}]",
                min.x,
                min.y,
                min.z,
                max.x,
                max.y,
                max.z
            );
        }
        None => {
            let _ = writeln!(out, "  bounds:     empty");
        }
    }
    out
}

/// One line per record, comments included
pub fn records(records: &[LineRecord]) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        let _ = writeln!(out, "{:>6}  {:?}", i + 1, record);
    }
    out
}
