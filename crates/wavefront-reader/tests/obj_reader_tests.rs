//! OBJ reader tests against Blender-style fixture exports

mod common;

use common::{fixture, init_logging};
use rstest::rstest;
use std::fs::File;
use std::io::BufReader;
use wavefront_reader::{read_objfile, Channel, ObjParser, ReadOptions, WavefrontError};

const FIXTURES: [&str; 4] = [
    "untitled.obj",
    "untitled_with_normals.obj",
    "untitled_with_normals_and_texcoords.obj",
    "two_complete_meshes.obj",
];

#[rstest]
#[case("untitled.obj", true, false, false)]
#[case("untitled_with_normals.obj", true, true, false)]
#[case("untitled_with_normals_and_texcoords.obj", true, true, true)]
#[case("two_complete_meshes.obj", true, true, true)]
fn test_cube_channels(
    #[case] name: &str,
    #[case] has_vertices: bool,
    #[case] has_normals: bool,
    #[case] has_texcoords: bool,
) {
    init_logging();
    let geoms = read_objfile(fixture(name)).unwrap();
    let cube = &geoms["Cube"];

    assert_eq!(cube.vertex_count() > 0, has_vertices);
    assert_eq!(cube.has_normals(), has_normals);
    assert_eq!(cube.has_texcoords(), has_texcoords);
}

#[rstest]
#[case("untitled.obj", 1)]
#[case("untitled_with_normals.obj", 1)]
#[case("untitled_with_normals_and_texcoords.obj", 1)]
#[case("two_complete_meshes.obj", 2)]
fn test_mesh_count(#[case] name: &str, #[case] count: usize) {
    let geoms = read_objfile(fixture(name)).unwrap();
    assert_eq!(geoms.len(), count);
}

#[test]
fn test_channel_rows_match_positions() {
    for name in FIXTURES {
        let geoms = read_objfile(fixture(name)).unwrap();
        for geom in geoms.values() {
            let rows = geom.vertex_count();
            for channel in [Channel::TexCoord, Channel::Normal] {
                let len = geom.channel_len(channel);
                assert!(
                    len == 0 || len == rows,
                    "{name}/{}: {channel} has {len} rows, positions {rows}",
                    geom.name
                );
            }
        }
    }
}

#[test]
fn test_fixtures_pass_strict_mode() {
    let parser = ObjParser::with_options(ReadOptions::default().with_strict(true));
    for name in FIXTURES {
        assert!(parser.parse_file(fixture(name)).is_ok(), "{name} failed strict parse");
    }
}

#[test]
#[allow(clippy::float_cmp)]
fn test_cube_rows_in_face_order() {
    let geoms = read_objfile(fixture("untitled_with_normals.obj")).unwrap();
    let cube = &geoms["Cube"];

    // 6 quads x 4 face-vertices
    assert_eq!(cube.vertex_count(), 24);
    // Second face starts with vertex 5, normal 2
    assert_eq!(cube.positions[4], [1.0, 1.0, -0.999999]);
    assert_eq!(cube.normals[4], [0.0, 1.0, 0.0]);
    // Last face-vertex is vertex 8, normal 6
    assert_eq!(cube.positions[23], [-1.0, 1.0, -1.0]);
    assert_eq!(cube.normals[23], [0.0, 0.0, -1.0]);
}

#[test]
fn test_attributes_recorded() {
    let geoms = read_objfile(fixture("untitled.obj")).unwrap();
    let cube = &geoms["Cube"];

    assert_eq!(cube.usemtl(), Some("Material"));
    assert_eq!(cube.attribute("s"), Some("off"));
    // mtllib precedes the first object and is not attached to it
    assert_eq!(cube.attribute("mtllib"), None);
    assert!(cube.material.is_none());
}

#[test]
#[allow(clippy::float_cmp)]
fn test_second_object_uses_global_pools() {
    let geoms = read_objfile(fixture("two_complete_meshes.obj")).unwrap();
    let plane = &geoms["Plane"];

    assert_eq!(plane.vertex_count(), 4);
    assert_eq!(plane.positions[0], [1.0, -3.0, 1.0]);
    assert_eq!(
        plane.texcoords,
        vec![[1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]
    );
    assert_eq!(plane.normals, vec![[0.0, 1.0, 0.0]; 4]);
    assert_eq!(plane.usemtl(), Some("Material.001"));
}

#[test]
fn test_objects_in_declaration_order() {
    let geoms = read_objfile(fixture("two_complete_meshes.obj")).unwrap();
    let names: Vec<&str> = geoms.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Cube", "Plane"]);
}

#[test]
fn test_parse_from_open_file() {
    let file = File::open(fixture("untitled.obj")).unwrap();
    let geoms = ObjParser::new().parse_reader(BufReader::new(file)).unwrap();
    assert!(geoms.contains_key("Cube"));
}

#[test]
fn test_mtl_file_is_not_obj() {
    let err = read_objfile(fixture("untitled.mtl")).unwrap_err();
    assert!(matches!(err, WavefrontError::NotObj { .. }));
}

#[test]
fn test_geometry_serializes_to_json() {
    let geoms = read_objfile(fixture("untitled_with_normals.obj")).unwrap();
    let json = serde_json::to_string(&geoms["Cube"]).unwrap();
    assert!(json.contains("\"name\":\"Cube\""));
    assert!(json.contains("\"usemtl\":\"Material\""));
}
