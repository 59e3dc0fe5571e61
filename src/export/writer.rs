//! Buffer building for the container writer.
//!
//! Pure functions of `(mesh, components)`: each returns a freshly allocated
//! buffer and mutates no caller state. [`super::serialize_mesh`] composes
//! them into the final byte stream.

use crate::math::{convert_axes, Vec3};
use crate::mesh::{LoopColorLayer, TriMesh};

use super::types::{ExportOptions, IndexFormat, VertexComponents};

/// Compute the component mask actually written for a mesh and options pair.
///
/// POSITION is unconditional. NORMAL follows the request directly (a
/// [`TriMesh`] always carries normals). COLOR and TEXCOORD are each the
/// request intersected with layer availability on the mesh.
pub(super) fn effective_components(mesh: &TriMesh, options: &ExportOptions) -> VertexComponents {
    let mut components = VertexComponents::POSITION;

    if options.save_normal {
        components |= VertexComponents::NORMAL;
    }

    if options.save_vert_color {
        if mesh.has_vertex_colors() {
            components |= VertexComponents::COLOR;
        } else {
            log::debug!("vertex colors requested but the mesh has no color layer, dropping");
        }
    }

    if options.save_tex_coord {
        if mesh.has_uv_layers() {
            components |= VertexComponents::TEXCOORD;
        } else {
            log::debug!("texture coordinates requested but the mesh has no UV layer, dropping");
        }
    }

    components
}

/// Resolve the per-loop color layer down to one color per vertex.
///
/// The result starts zeroed; loops are visited in order and each overwrites
/// the color at its vertex. When several loops share a vertex with differing
/// colors, the last loop wins; no averaging.
fn resolve_vertex_colors(mesh: &TriMesh, layer: &LoopColorLayer) -> Vec<[f32; 3]> {
    let mut colors = vec![[0.0f32; 3]; mesh.vertex_count()];
    for (loop_index, color) in layer.colors.iter().enumerate() {
        colors[mesh.loop_vertex(loop_index) as usize] = *color;
    }
    colors
}

/// Build the interleaved vertex block as a flat float sequence.
///
/// One pass over the vertices. Per-vertex field order is fixed and matches
/// ascending mask bit order: position, then normal if the NORMAL bit is set,
/// then color if the COLOR bit is set. Positions and normals pass through
/// the axis conversion; colors are written as-is. The TEXCOORD bit
/// contributes nothing here.
pub(super) fn build_vertex_data(mesh: &TriMesh, components: VertexComponents) -> Vec<f32> {
    let vertex_count = mesh.vertex_count();
    let save_normal = components.contains(VertexComponents::NORMAL);
    let save_color = components.contains(VertexComponents::COLOR);

    let colors = save_color.then(|| match mesh.active_color_layer() {
        Some(layer) => resolve_vertex_colors(mesh, layer),
        // Active selector points past the existing layers; colors stay zeroed.
        None => vec![[0.0f32; 3]; vertex_count],
    });

    let mut data = Vec::with_capacity(vertex_count * components.floats_per_vertex());
    for i in 0..vertex_count {
        extend_converted(&mut data, mesh.positions()[i]);
        if save_normal {
            extend_converted(&mut data, mesh.normals()[i]);
        }
        if let Some(colors) = &colors {
            data.extend_from_slice(&colors[i]);
        }
    }
    data
}

fn extend_converted(data: &mut Vec<f32>, v: [f32; 3]) {
    let v = convert_axes(Vec3::from(v));
    data.extend_from_slice(&[v.x, v.y, v.z]);
}

/// Build the index block: faces in mesh order, corners in face order.
///
/// The element width is the narrowest that fits every possible index for
/// the mesh's vertex count (see [`IndexFormat::for_vertex_count`]). Bytes
/// are native-endian.
pub(super) fn build_index_data(mesh: &TriMesh) -> (IndexFormat, Vec<u8>) {
    let format = IndexFormat::for_vertex_count(mesh.vertex_count());
    let bytes = match format {
        IndexFormat::Uint16 => {
            let indices: Vec<u16> = mesh
                .triangles()
                .iter()
                .flatten()
                .map(|&i| i as u16)
                .collect();
            bytemuck::cast_slice(&indices).to_vec()
        }
        IndexFormat::Uint32 => {
            let indices: Vec<u32> = mesh.triangles().iter().flatten().copied().collect();
            bytemuck::cast_slice(&indices).to_vec()
        }
    };
    (format, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::LoopUvLayer;

    fn triangle_mesh() -> TriMesh {
        TriMesh::new()
            .with_positions(vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
            .with_normals(vec![[0.0, 0.0, 1.0]; 3])
            .with_triangles(vec![[0, 1, 2]])
    }

    #[test]
    fn test_position_bit_always_set() {
        let mesh = triangle_mesh();
        for options in [
            ExportOptions::default(),
            ExportOptions::all(),
            ExportOptions::default().with_normals(true),
        ] {
            let components = effective_components(&mesh, &options);
            assert!(components.contains(VertexComponents::POSITION));
        }
    }

    #[test]
    fn test_requested_but_unavailable_is_dropped() {
        let mesh = triangle_mesh();
        let components = effective_components(&mesh, &ExportOptions::all());
        assert!(components.contains(VertexComponents::NORMAL));
        assert!(!components.contains(VertexComponents::COLOR));
        assert!(!components.contains(VertexComponents::TEXCOORD));
    }

    #[test]
    fn test_available_but_not_requested_is_dropped() {
        let mesh = triangle_mesh()
            .with_color_layer(LoopColorLayer::new("Col", vec![[1.0, 1.0, 1.0]; 3]))
            .with_uv_layer(LoopUvLayer::new("UVMap", vec![[0.0, 0.0]; 3]));
        let components = effective_components(&mesh, &ExportOptions::default());
        assert_eq!(components, VertexComponents::POSITION);
    }

    #[test]
    fn test_resolve_colors_last_writer_wins() {
        let c0 = [1.0, 0.0, 0.0];
        let c1 = [0.0, 1.0, 0.0];
        let c2 = [0.0, 0.0, 1.0];
        let mesh = TriMesh::new()
            .with_positions(vec![[0.0; 3], [1.0, 0.0, 0.0]])
            .with_normals(vec![[0.0, 0.0, 1.0]; 2])
            .with_triangles(vec![[0, 1, 0]])
            .with_color_layer(LoopColorLayer::new("Col", vec![c0, c1, c2]));

        let colors = resolve_vertex_colors(&mesh, mesh.active_color_layer().unwrap());
        assert_eq!(colors[0], c2);
        assert_eq!(colors[1], c1);
    }

    #[test]
    fn test_vertex_data_axis_conversion() {
        let mesh = TriMesh::new()
            .with_positions(vec![[1.0, 2.0, 3.0]])
            .with_normals(vec![[1.0, 2.0, 3.0]])
            .with_triangles(vec![]);
        let data = build_vertex_data(
            &mesh,
            VertexComponents::POSITION | VertexComponents::NORMAL,
        );
        assert_eq!(data, vec![1.0, 3.0, -2.0, 1.0, 3.0, -2.0]);
    }

    #[test]
    fn test_vertex_data_length_follows_mask() {
        let mesh = triangle_mesh()
            .with_color_layer(LoopColorLayer::new("Col", vec![[0.5, 0.5, 0.5]; 3]));

        let p = VertexComponents::POSITION;
        assert_eq!(build_vertex_data(&mesh, p).len(), 3 * 3);
        assert_eq!(
            build_vertex_data(&mesh, p | VertexComponents::NORMAL).len(),
            3 * 6
        );
        assert_eq!(
            build_vertex_data(&mesh, p | VertexComponents::COLOR).len(),
            3 * 6
        );
        assert_eq!(
            build_vertex_data(
                &mesh,
                p | VertexComponents::NORMAL | VertexComponents::COLOR
            )
            .len(),
            3 * 9
        );
    }

    #[test]
    fn test_index_data_mirrors_face_order() {
        let mesh = TriMesh::new()
            .with_positions(vec![[0.0; 3]; 4])
            .with_normals(vec![[0.0, 0.0, 1.0]; 4])
            .with_triangles(vec![[0, 1, 2], [2, 1, 3]]);

        let (format, bytes) = build_index_data(&mesh);
        assert_eq!(format, IndexFormat::Uint16);

        let expected: Vec<u8> = [0u16, 1, 2, 2, 1, 3]
            .iter()
            .flat_map(|i| i.to_ne_bytes())
            .collect();
        assert_eq!(bytes, expected);
    }
}
