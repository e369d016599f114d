/// One corner of a face: a 1-based vertex index with optional texture
/// coordinate and normal indices, exactly as written in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceGroup {
    pub vertex: i32,
    pub tex_coord: Option<i32>,
    pub normal: Option<i32>,
}

impl FaceGroup {
    pub const fn new(vertex: i32) -> Self {
        Self {
            vertex,
            tex_coord: None,
            normal: None,
        }
    }
}

/// A single classified OBJ line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineRecord {
    /// `v x y z [w]`, `w` defaults to 1.0
    Vertex { x: f32, y: f32, z: f32, w: f32 },
    /// `vt u v [w]`, `w` defaults to 0.0
    TexCoord { u: f32, v: f32, w: f32 },
    /// `vn x y z`
    Normal { x: f32, y: f32, z: f32 },
    /// `f g0 g1 ...`
    Face { groups: Vec<FaceGroup> },
    /// `# text`, without the leading `#`
    Comment { text: String },
}
