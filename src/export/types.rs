//! Container format types: component mask, header, index format, options.

use crate::mesh::TriMesh;

/// Magic number identifying the container, written as the first four bytes
/// of every file.
pub const MAGIC: [u8; 4] = [0x10, 0x10, 0x19, 0x91];

/// Size in bytes of the fixed header that follows the magic number.
pub const HEADER_SIZE: usize = 12;

/// Bit set describing which vertex attribute groups a file carries.
///
/// The mask is stored in the file header as a 4-byte unsigned integer.
/// [`VertexComponents::POSITION`] is set in every valid mask.
///
/// The TEXCOORD bit is header-only: it records that texture coordinates were
/// requested and available, but the vertex block never carries UV floats and
/// the bit does not contribute to [`floats_per_vertex`]. Readers must derive
/// the vertex stride from the NORMAL and COLOR bits alone.
///
/// [`floats_per_vertex`]: VertexComponents::floats_per_vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexComponents(u32);

impl VertexComponents {
    /// Vertex position, three floats. Present in every file.
    pub const POSITION: Self = Self(1 << 0);
    /// Vertex normal, three floats.
    pub const NORMAL: Self = Self(1 << 1);
    /// Vertex color, three floats.
    pub const COLOR: Self = Self(1 << 2);
    /// Texture coordinates. Header-only; adds no floats to the vertex block.
    pub const TEXCOORD: Self = Self(1 << 3);

    /// Check whether all bits of `other` are set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Get the raw mask value as stored in the header.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Number of floats each vertex occupies in the vertex block.
    ///
    /// Position always contributes 3; normal and color contribute 3 each
    /// when present. One of {3, 6, 9}.
    pub fn floats_per_vertex(self) -> usize {
        let mut floats = 3;
        if self.contains(Self::NORMAL) {
            floats += 3;
        }
        if self.contains(Self::COLOR) {
            floats += 3;
        }
        floats
    }
}

impl std::ops::BitOr for VertexComponents {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for VertexComponents {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Index element format, chosen per export from the vertex count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexFormat {
    /// 16-bit unsigned indices.
    Uint16,
    /// 32-bit unsigned indices.
    Uint32,
}

impl IndexFormat {
    /// Get the size in bytes of each index.
    pub fn size(&self) -> usize {
        match self {
            Self::Uint16 => 2,
            Self::Uint32 => 4,
        }
    }

    /// Select the narrowest format for a mesh with `vertex_count` vertices.
    ///
    /// `Uint16` is used up to and including 65536 vertices: the largest
    /// index such a mesh can reference is 65535, which still fits.
    pub fn for_vertex_count(vertex_count: usize) -> Self {
        if vertex_count <= 1 << 16 {
            Self::Uint16
        } else {
            Self::Uint32
        }
    }
}

/// The fixed 12-byte header following the magic number.
///
/// All three fields are 4-byte unsigned integers in native byte order, packed
/// without padding: component mask, vertex count, index count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshHeader {
    /// Which attribute groups the vertex block carries.
    pub components: VertexComponents,
    /// Number of vertices in the vertex block.
    pub vertex_count: u32,
    /// Number of indices in the index block, `3 * triangle_count`.
    pub index_count: u32,
}

impl MeshHeader {
    /// Encode the header in native byte order.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.components.bits().to_ne_bytes());
        bytes[4..8].copy_from_slice(&self.vertex_count.to_ne_bytes());
        bytes[8..12].copy_from_slice(&self.index_count.to_ne_bytes());
        bytes
    }
}

/// Export options: which vertex attributes to request.
///
/// Each flag is a *request*. Color and texture coordinates are additionally
/// gated by the mesh actually carrying such a layer; a request for an absent
/// attribute is silently dropped from the written mask. Normals are always
/// present on a [`TriMesh`], so `save_normal` alone decides the NORMAL bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportOptions {
    /// Write per-vertex normals.
    pub save_normal: bool,
    /// Write per-vertex colors resolved from the active color layer.
    pub save_vert_color: bool,
    /// Record texture coordinate availability in the header mask.
    pub save_tex_coord: bool,
}

impl ExportOptions {
    /// Options with every attribute requested.
    pub fn all() -> Self {
        Self {
            save_normal: true,
            save_vert_color: true,
            save_tex_coord: true,
        }
    }

    /// Set the normal request.
    pub fn with_normals(mut self, save: bool) -> Self {
        self.save_normal = save;
        self
    }

    /// Set the vertex color request.
    pub fn with_vertex_colors(mut self, save: bool) -> Self {
        self.save_vert_color = save;
        self
    }

    /// Set the texture coordinate request.
    pub fn with_tex_coords(mut self, save: bool) -> Self {
        self.save_tex_coord = save;
        self
    }
}

/// A scene object as seen by the export entry point.
///
/// Only mesh objects are serializable; the other kinds exist so callers can
/// feed whatever is selected in their scene and let [`export_object`] report
/// a benign skip instead of an error.
///
/// [`export_object`]: crate::export::export_object
#[derive(Debug, Clone)]
pub enum SceneObject {
    /// A triangulated mesh, ready to serialize.
    Mesh(TriMesh),
    /// A camera; not serializable.
    Camera,
    /// A light; not serializable.
    Light,
    /// An empty/null object; not serializable.
    Empty,
}

impl SceneObject {
    /// Get the mesh payload, if this is a mesh object.
    pub fn as_mesh(&self) -> Option<&TriMesh> {
        match self {
            Self::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }
}

/// Result of exporting a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The object was a mesh and a file was written; carries the header.
    Written(MeshHeader),
    /// The object was not a mesh; nothing was written.
    Skipped,
}
