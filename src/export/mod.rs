//! Binary triangle-mesh container writer.
//!
//! Serializes a [`TriMesh`] into a single versionless blob: magic number,
//! fixed header, interleaved vertex block, index block. There is no reader
//! here; the container is write-only from this crate's point of view.
//!
//! # File layout
//!
//! All integers and floats are **native-endian**, packed with no padding.
//! The format records no endianness marker, so files are only portable
//! between machines of the same byte order. This is a documented limitation
//! of the container, not an oversight.
//!
//! | Offset | Size | Field | Meaning |
//! |--------|------|-------|---------|
//! | 0 | 4 | magic | `10 10 19 91` (hex) |
//! | 4 | 4 | mask | bit 0 position (always set), bit 1 normal, bit 2 color, bit 3 texcoord |
//! | 8 | 4 | vertex_count | number of vertices |
//! | 12 | 4 | index_count | number of indices, `3 * triangle_count` |
//! | 16 | variable | vertex_data | `vertex_count * floats_per_vertex * 4` bytes |
//! | … | variable | index_data | `index_count * 2` bytes if `vertex_count <= 65536`, else `* 4` |
//!
//! `floats_per_vertex` is 3, 6, or 9 depending on the normal and color mask
//! bits. The texcoord bit never affects the vertex block; it is header-only
//! (see [`VertexComponents`]).
//!
//! # Example
//!
//! ```
//! use rawmesh::export::{mesh_to_bytes, ExportOptions};
//! use rawmesh::mesh::generators::generate_quad;
//!
//! let quad = generate_quad(0.5, 0.5);
//! let bytes = mesh_to_bytes(&quad, &ExportOptions::default().with_normals(true));
//!
//! // magic + header + 4 vertices * 6 floats + 6 indices * 2 bytes
//! assert_eq!(bytes.len(), 16 + 4 * 6 * 4 + 6 * 2);
//! ```

mod error;
#[cfg(test)]
mod tests;
mod types;
mod writer;

pub use error::ExportError;
pub use types::{
    ExportOptions, ExportOutcome, IndexFormat, MeshHeader, SceneObject, VertexComponents,
    HEADER_SIZE, MAGIC,
};

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::mesh::TriMesh;

/// Serialize a mesh into a byte sink.
///
/// Writes magic, header, vertex block, and index block in order, then
/// flushes the sink. Returns the header that was written, carrying the
/// effective component mask and the counts.
///
/// The mesh must already be triangulated; the serializer does not verify
/// this. I/O errors propagate and nothing is retried; a failed write can
/// leave a partial stream in the sink, so prefer [`write_mesh_file`] when
/// targeting a path other readers can observe.
pub fn serialize_mesh<W: Write>(
    mesh: &TriMesh,
    options: &ExportOptions,
    sink: &mut W,
) -> Result<MeshHeader, ExportError> {
    let components = writer::effective_components(mesh, options);
    let vertex_data = writer::build_vertex_data(mesh, components);
    let (_, index_data) = writer::build_index_data(mesh);

    let header = MeshHeader {
        components,
        vertex_count: mesh.vertex_count() as u32,
        index_count: mesh.loop_count() as u32,
    };

    sink.write_all(&MAGIC)?;
    sink.write_all(&header.to_bytes())?;
    sink.write_all(bytemuck::cast_slice(&vertex_data))?;
    sink.write_all(&index_data)?;
    sink.flush()?;

    Ok(header)
}

/// Serialize a mesh into an in-memory byte buffer.
pub fn mesh_to_bytes(mesh: &TriMesh, options: &ExportOptions) -> Vec<u8> {
    let mut bytes = Vec::new();
    serialize_mesh(mesh, options, &mut bytes)
        .expect("writing to an in-memory buffer cannot fail");
    bytes
}

/// Serialize a mesh to a file, atomically.
///
/// The blob is written to a sibling `<path>.tmp` file and renamed into place
/// once complete, so a reader polling `path` never observes a partially
/// written file. On failure the temporary is removed and `path` is left
/// untouched.
pub fn write_mesh_file<P: AsRef<Path>>(
    path: P,
    mesh: &TriMesh,
    options: &ExportOptions,
) -> Result<MeshHeader, ExportError> {
    let path = path.as_ref();
    let tmp = tmp_sibling(path);

    let result = fs::File::create(&tmp)
        .map_err(ExportError::from)
        .and_then(|file| {
            let mut sink = io::BufWriter::new(file);
            serialize_mesh(mesh, options, &mut sink)
        })
        .and_then(|header| {
            fs::rename(&tmp, path)?;
            Ok(header)
        });

    match &result {
        Ok(header) => log::debug!(
            "wrote {} ({} vertices, {} indices, mask {:#06b})",
            path.display(),
            header.vertex_count,
            header.index_count,
            header.components.bits()
        ),
        // Leave no partial temporary behind.
        Err(_) => {
            let _ = fs::remove_file(&tmp);
        }
    }

    result
}

/// Export a scene object to a file.
///
/// Only mesh objects are serialized. Anything else yields
/// [`ExportOutcome::Skipped`] (a benign signal, not an error) and no file
/// is touched.
pub fn export_object<P: AsRef<Path>>(
    object: &SceneObject,
    options: &ExportOptions,
    path: P,
) -> Result<ExportOutcome, ExportError> {
    let Some(mesh) = object.as_mesh() else {
        log::debug!("export target is not a mesh, skipping");
        return Ok(ExportOutcome::Skipped);
    };

    let header = write_mesh_file(path, mesh, options)?;
    Ok(ExportOutcome::Written(header))
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
