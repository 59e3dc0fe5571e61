use crate::mesh::TriMesh;

mod file_test;

/// Canonical unit triangle: three vertices, one face, +Z normals.
fn unit_triangle() -> TriMesh {
    TriMesh::new()
        .with_positions(vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
        .with_normals(vec![[0.0, 0.0, 1.0]; 3])
        .with_triangles(vec![[0, 1, 2]])
        .with_label("unit_triangle")
}

/// Decode the three header integers: (mask, vertex_count, index_count).
fn decode_header(bytes: &[u8]) -> (u32, u32, u32) {
    let field = |offset: usize| {
        u32::from_ne_bytes(bytes[offset..offset + 4].try_into().unwrap())
    };
    (field(4), field(8), field(12))
}

/// Decode `count` floats from the vertex block (starts at offset 16).
fn decode_vertex_floats(bytes: &[u8], count: usize) -> Vec<f32> {
    bytes[16..16 + count * 4]
        .chunks_exact(4)
        .map(|c| f32::from_ne_bytes(c.try_into().unwrap()))
        .collect()
}

/// Decode `count` 2-byte indices starting at `offset`.
fn decode_u16_indices(bytes: &[u8], offset: usize, count: usize) -> Vec<u16> {
    bytes[offset..offset + count * 2]
        .chunks_exact(2)
        .map(|c| u16::from_ne_bytes(c.try_into().unwrap()))
        .collect()
}

/// Decode `count` 4-byte indices starting at `offset`.
fn decode_u32_indices(bytes: &[u8], offset: usize, count: usize) -> Vec<u32> {
    bytes[offset..offset + count * 4]
        .chunks_exact(4)
        .map(|c| u32::from_ne_bytes(c.try_into().unwrap()))
        .collect()
}
