//! Mesh generators for common shapes.
//!
//! These generators produce [`TriMesh`] values for tests, benchmarks, and
//! quick export experiments. Positions use the authoring convention
//! (right-handed, Z up); the exporter converts axes on write.

use std::f32::consts::PI;

use super::data::{LoopUvLayer, TriMesh};

/// Generate a quad on the XY plane, split into two triangles.
///
/// The quad is centered at the origin with the given half-width and
/// half-height, normal pointing up the Z axis, and a `UVMap` loop layer
/// going from (0,0) at the bottom-left corner to (1,1) at the top-right.
///
/// # Arguments
///
/// * `half_width` - Half the width of the quad along the X axis
/// * `half_height` - Half the height of the quad along the Y axis
pub fn generate_quad(half_width: f32, half_height: f32) -> TriMesh {
    let positions = vec![
        [-half_width, -half_height, 0.0],
        [half_width, -half_height, 0.0],
        [half_width, half_height, 0.0],
        [-half_width, half_height, 0.0],
    ];
    let normals = vec![[0.0, 0.0, 1.0]; 4];
    let triangles = vec![[0, 1, 2], [2, 3, 0]];

    let corner_uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
    let uvs = triangles
        .iter()
        .flat_map(|tri| tri.map(|v| corner_uvs[v as usize]))
        .collect();

    TriMesh::new()
        .with_positions(positions)
        .with_normals(normals)
        .with_triangles(triangles)
        .with_uv_layer(LoopUvLayer::new("UVMap", uvs))
        .with_label("quad")
}

/// Generate a UV sphere.
///
/// Creates a sphere with the given radius, number of longitudinal segments,
/// and number of latitudinal rings. Normals are the unit radial directions.
/// A `UVMap` loop layer wraps the equirectangular parameterization.
///
/// # Arguments
///
/// * `radius` - Sphere radius
/// * `segments` - Number of longitudinal segments (around the equator)
/// * `rings` - Number of latitudinal rings (from pole to pole)
pub fn generate_uv_sphere(radius: f32, segments: u32, rings: u32) -> TriMesh {
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut vertex_uvs = Vec::new();
    let mut triangles: Vec<[u32; 3]> = Vec::new();

    for ring in 0..=rings {
        let theta = ring as f32 * PI / rings as f32;
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for segment in 0..=segments {
            let phi = segment as f32 * 2.0 * PI / segments as f32;

            let x = sin_theta * phi.cos();
            let y = sin_theta * phi.sin();
            let z = cos_theta;

            positions.push([x * radius, y * radius, z * radius]);
            normals.push([x, y, z]);
            vertex_uvs.push([
                segment as f32 / segments as f32,
                ring as f32 / rings as f32,
            ]);
        }
    }

    for ring in 0..rings {
        for segment in 0..segments {
            let current = ring * (segments + 1) + segment;
            let next = current + segments + 1;

            triangles.push([current, next, current + 1]);
            triangles.push([current + 1, next, next + 1]);
        }
    }

    let uvs = triangles
        .iter()
        .flat_map(|tri| tri.map(|v| vertex_uvs[v as usize]))
        .collect();

    TriMesh::new()
        .with_positions(positions)
        .with_normals(normals)
        .with_triangles(triangles)
        .with_uv_layer(LoopUvLayer::new("UVMap", uvs))
        .with_label("sphere")
}
