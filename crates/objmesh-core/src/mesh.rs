//! Polygon mesh types shared between loaders and consumers

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A vertex position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Vec3,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
        }
    }
}

/// A normal vector. Not required to be unit length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normal {
    pub direction: Vec3,
}

impl Normal {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            direction: Vec3::new(x, y, z),
        }
    }
}

/// A 2D texture coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextureCoordinates {
    pub u: f32,
    pub v: f32,
}

impl TextureCoordinates {
    pub const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }
}

/// A triangle referencing vertices, and optionally texture coordinates and
/// normals, by 0-based index.
///
/// Indices are not checked against any list; resolving them is up to the
/// consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: [i32; 3],
    pub tex_coords: Option<[i32; 3]>,
    pub normals: Option<[i32; 3]>,
}

impl Triangle {
    /// Create a triangle with vertex indices only
    pub const fn new(vertices: [i32; 3]) -> Self {
        Self {
            vertices,
            tex_coords: None,
            normals: None,
        }
    }

    /// Attach texture coordinate indices
    pub fn with_tex_coords(mut self, tex_coords: [i32; 3]) -> Self {
        self.tex_coords = Some(tex_coords);
        self
    }

    /// Attach normal indices
    pub fn with_normals(mut self, normals: [i32; 3]) -> Self {
        self.normals = Some(normals);
        self
    }
}

/// One snapshot of vertex and normal data.
///
/// Frames can be chained through `previous` for morph or keyframe animation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub vertices: Vec<Vertex>,
    pub normals: Vec<Normal>,
    pub previous: Option<Box<Frame>>,
}

impl Frame {
    /// Create a frame with no previous frame
    pub fn new(vertices: Vec<Vertex>, normals: Vec<Normal>) -> Self {
        Self {
            vertices,
            normals,
            previous: None,
        }
    }

    /// Link this frame to the frame it follows
    pub fn with_previous(mut self, previous: Frame) -> Self {
        self.previous = Some(Box::new(previous));
        self
    }

    /// Number of frames in the chain ending at this one
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.previous.as_deref();
        while let Some(frame) = current {
            depth += 1;
            current = frame.previous.as_deref();
        }
        depth
    }

    /// Axis-aligned bounds of the vertex positions, or `None` if empty
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = self.vertices.first()?.position;
        let bounds = self.vertices.iter().fold((first, first), |(min, max), v| {
            (min.min(v.position), max.max(v.position))
        });
        Some(bounds)
    }
}

/// A triangulated polygon mesh
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub frames: Vec<Frame>,
    pub tex_coords: Vec<TextureCoordinates>,
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(
        frames: Vec<Frame>,
        tex_coords: Vec<TextureCoordinates>,
        triangles: Vec<Triangle>,
    ) -> Self {
        Self {
            frames,
            tex_coords,
            triangles,
        }
    }

    /// The first frame, if any
    pub fn frame(&self) -> Option<&Frame> {
        self.frames.first()
    }

    /// Number of vertices in the first frame
    pub fn vertex_count(&self) -> usize {
        self.frame().map_or(0, |f| f.vertices.len())
    }

    /// Number of normals in the first frame
    pub fn normal_count(&self) -> usize {
        self.frame().map_or(0, |f| f.normals.len())
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}
