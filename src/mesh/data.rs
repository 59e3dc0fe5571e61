//! CPU-side triangulated mesh data.
//!
//! This module provides:
//! - [`TriMesh`] - Plain-data triangulated mesh (positions, normals, faces,
//!   optional per-loop attribute layers)
//! - [`LoopColorLayer`] - Per-loop RGB color layer
//! - [`LoopUvLayer`] - Per-loop texture coordinate layer

/// A per-loop RGB color layer.
///
/// A *loop* is a face corner: loop `l` belongs to triangle `l / 3` and
/// references vertex `triangles[l / 3][l % 3]`. Loops sharing a vertex may
/// carry different colors.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopColorLayer {
    /// Layer name.
    pub name: String,
    /// One RGB color per loop; length must be `3 * triangle_count`.
    pub colors: Vec<[f32; 3]>,
}

impl LoopColorLayer {
    /// Create a named color layer.
    pub fn new(name: impl Into<String>, colors: Vec<[f32; 3]>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }
}

/// A per-loop texture coordinate layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopUvLayer {
    /// Layer name.
    pub name: String,
    /// One UV pair per loop; length must be `3 * triangle_count`.
    pub uvs: Vec<[f32; 2]>,
}

impl LoopUvLayer {
    /// Create a named UV layer.
    pub fn new(name: impl Into<String>, uvs: Vec<[f32; 2]>) -> Self {
        Self {
            name: name.into(),
            uvs,
        }
    }
}

/// A plain-data triangulated mesh.
///
/// `TriMesh` is the host-agnostic input to the exporter: flat arrays of
/// positions and normals, a triangle list, and zero or more per-loop
/// attribute layers with an active-layer selector. It carries no GPU
/// resources and no host object model.
///
/// Positions and normals are parallel arrays; every vertex has both. Faces
/// must already be triangles; the exporter assumes triangulation happened
/// upstream and does not re-check it.
///
/// Stored data uses plain arrays (`[f32; 3]`, `[u32; 3]`); [`crate::math`]
/// types appear only at computation seams.
///
/// # Example
///
/// ```
/// use rawmesh::mesh::TriMesh;
///
/// let mesh = TriMesh::new()
///     .with_positions(vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
///     .with_normals(vec![[0.0, 0.0, 1.0]; 3])
///     .with_triangles(vec![[0, 1, 2]])
///     .with_label("triangle");
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.loop_count(), 3);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TriMesh {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    triangles: Vec<[u32; 3]>,
    color_layers: Vec<LoopColorLayer>,
    active_color_layer: usize,
    uv_layers: Vec<LoopUvLayer>,
    active_uv_layer: usize,
    label: Option<String>,
}

impl TriMesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set vertex positions.
    pub fn with_positions(mut self, positions: Vec<[f32; 3]>) -> Self {
        self.positions = positions;
        self
    }

    /// Set vertex normals. Must be parallel to positions.
    pub fn with_normals(mut self, normals: Vec<[f32; 3]>) -> Self {
        self.normals = normals;
        self
    }

    /// Set the triangle list.
    pub fn with_triangles(mut self, triangles: Vec<[u32; 3]>) -> Self {
        self.triangles = triangles;
        self
    }

    /// Add a per-loop color layer. The first layer added becomes the active
    /// one.
    pub fn with_color_layer(mut self, layer: LoopColorLayer) -> Self {
        self.color_layers.push(layer);
        self
    }

    /// Add a per-loop UV layer. The first layer added becomes the active one.
    pub fn with_uv_layer(mut self, layer: LoopUvLayer) -> Self {
        self.uv_layers.push(layer);
        self
    }

    /// Select the active color layer by index.
    pub fn with_active_color_layer(mut self, index: usize) -> Self {
        self.active_color_layer = index;
        self
    }

    /// Select the active UV layer by index.
    pub fn with_active_uv_layer(mut self, index: usize) -> Self {
        self.active_uv_layer = index;
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the vertex positions.
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Get the vertex normals.
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Get the triangle list.
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Get the number of loops (face corners), `3 * triangle_count`.
    pub fn loop_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Get the vertex referenced by a loop.
    pub fn loop_vertex(&self, loop_index: usize) -> u32 {
        self.triangles[loop_index / 3][loop_index % 3]
    }

    /// Check whether the mesh carries at least one color layer.
    pub fn has_vertex_colors(&self) -> bool {
        !self.color_layers.is_empty()
    }

    /// Check whether the mesh carries at least one UV layer.
    pub fn has_uv_layers(&self) -> bool {
        !self.uv_layers.is_empty()
    }

    /// Get the active color layer, if any.
    pub fn active_color_layer(&self) -> Option<&LoopColorLayer> {
        self.color_layers.get(self.active_color_layer)
    }

    /// Get the active UV layer, if any.
    pub fn active_uv_layer(&self) -> Option<&LoopUvLayer> {
        self.uv_layers.get(self.active_uv_layer)
    }

    /// Get all color layers.
    pub fn color_layers(&self) -> &[LoopColorLayer] {
        &self.color_layers
    }

    /// Get all UV layers.
    pub fn uv_layers(&self) -> &[LoopUvLayer] {
        &self.uv_layers
    }

    /// Get the debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Validate the mesh data.
    ///
    /// Checks:
    /// - normals are parallel to positions
    /// - every triangle index is in vertex range
    /// - every attribute layer has one entry per loop
    /// - active layer selectors point at existing layers
    ///
    /// The exporter does not call this; callers that assemble meshes from
    /// untrusted data should.
    pub fn validate(&self) -> Result<(), String> {
        if self.normals.len() != self.positions.len() {
            return Err(format!(
                "normal count {} does not match vertex count {}",
                self.normals.len(),
                self.positions.len()
            ));
        }

        let vertex_count = self.positions.len() as u32;
        for (t, tri) in self.triangles.iter().enumerate() {
            for &index in tri {
                if index >= vertex_count {
                    return Err(format!(
                        "triangle {t} references vertex {index}, but only {vertex_count} exist"
                    ));
                }
            }
        }

        let loop_count = self.loop_count();
        for layer in &self.color_layers {
            if layer.colors.len() != loop_count {
                return Err(format!(
                    "color layer '{}' has {} entries for {} loops",
                    layer.name,
                    layer.colors.len(),
                    loop_count
                ));
            }
        }
        for layer in &self.uv_layers {
            if layer.uvs.len() != loop_count {
                return Err(format!(
                    "UV layer '{}' has {} entries for {} loops",
                    layer.name,
                    layer.uvs.len(),
                    loop_count
                ));
            }
        }

        if !self.color_layers.is_empty() && self.active_color_layer >= self.color_layers.len() {
            return Err(format!(
                "active color layer {} out of range ({} layers)",
                self.active_color_layer,
                self.color_layers.len()
            ));
        }
        if !self.uv_layers.is_empty() && self.active_uv_layer >= self.uv_layers.len() {
            return Err(format!(
                "active UV layer {} out of range ({} layers)",
                self.active_uv_layer,
                self.uv_layers.len()
            ));
        }

        Ok(())
    }
}
