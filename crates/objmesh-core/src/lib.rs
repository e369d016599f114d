//! objmesh Core - Mesh types shared by the objmesh loaders
//!
//! This crate provides the value types a loader produces:
//! - Vertex positions and normals (backed by glam)
//! - Frames holding per-snapshot vertex data
//! - Texture coordinates and indexed triangles
//!
//! The types do no validation of their own.

pub mod mesh;

pub use glam::Vec3;
pub use mesh::{Frame, Mesh, Normal, TextureCoordinates, Triangle, Vertex};
