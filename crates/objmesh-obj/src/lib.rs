//! objmesh OBJ - Wavefront OBJ loading
//!
//! Parses the `v`, `vt`, `vn` and `f` directives (plus `#` comments) of an OBJ
//! file into a single-frame, fully triangulated [`Mesh`].
//!
//! Loading is all-or-nothing: the first malformed line aborts with a
//! [`ParseError`] carrying its position and a rendered diagnostic.

mod assemble;
mod error;
mod fields;
mod lexer;
mod record;

pub use assemble::assemble;
pub use error::{ParseError, ParseErrorKind};
pub use lexer::parse_records;
pub use record::{FaceGroup, LineRecord};

use objmesh_core::Mesh;

/// Parse the raw bytes of an OBJ file into a mesh.
pub fn load(bytes: &[u8]) -> Result<Mesh, ParseError> {
    let records = parse_records(bytes)?;
    Ok(assemble(&records))
}
