//! File-level tests: atomic writes and scene-object dispatch.

use std::fs;
use std::path::PathBuf;

use crate::export::{
    export_object, write_mesh_file, ExportOptions, ExportOutcome, SceneObject, MAGIC,
};
use crate::mesh::generators::generate_quad;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("rawmesh_{}_{}", std::process::id(), name))
}

#[test]
fn test_write_mesh_file_produces_complete_file() {
    let path = scratch_path("quad.mesh");
    let quad = generate_quad(0.5, 0.5);

    let header = write_mesh_file(&path, &quad, &ExportOptions::default().with_normals(true))
        .expect("write failed");
    assert_eq!(header.vertex_count, 4);
    assert_eq!(header.index_count, 6);

    let bytes = fs::read(&path).expect("output file missing");
    assert_eq!(&bytes[0..4], &MAGIC);
    assert_eq!(bytes.len(), 16 + 4 * 6 * 4 + 6 * 2);

    // The temporary must have been renamed away, not left behind.
    let mut tmp = path.clone().into_os_string();
    tmp.push(".tmp");
    assert!(!PathBuf::from(tmp).exists());

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_write_mesh_file_replaces_existing_file() {
    let path = scratch_path("replace.mesh");
    fs::write(&path, b"stale contents").unwrap();

    let quad = generate_quad(1.0, 1.0);
    write_mesh_file(&path, &quad, &ExportOptions::default()).expect("write failed");

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[0..4], &MAGIC);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_write_mesh_file_fails_on_unwritable_path() {
    let path = scratch_path("no_such_dir").join("quad.mesh");
    let quad = generate_quad(0.5, 0.5);

    let result = write_mesh_file(&path, &quad, &ExportOptions::default());
    assert!(result.is_err());
    assert!(!path.exists());
}

#[test]
fn test_export_object_writes_mesh() {
    let path = scratch_path("object.mesh");
    let object = SceneObject::Mesh(generate_quad(0.5, 0.5));

    let outcome = export_object(&object, &ExportOptions::all(), &path).expect("export failed");
    match outcome {
        ExportOutcome::Written(header) => assert_eq!(header.vertex_count, 4),
        ExportOutcome::Skipped => panic!("mesh object must not be skipped"),
    }
    assert!(path.exists());

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_export_object_skips_non_mesh() {
    let path = scratch_path("camera.mesh");

    for object in [SceneObject::Camera, SceneObject::Light, SceneObject::Empty] {
        let outcome = export_object(&object, &ExportOptions::all(), &path).expect("skip failed");
        assert_eq!(outcome, ExportOutcome::Skipped);
    }
    assert!(!path.exists(), "skipped export must not touch the path");
}
