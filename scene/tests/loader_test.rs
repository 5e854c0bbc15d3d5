use math::hcm::{point3, vec2};
use scene::{load_mesh, parse_mesh, LoadError};
use shape::MeshError;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn parses_vertices_and_one_based_faces() {
    init_logger();
    let data = parse_mesh(
        "# a single triangle\n\
         v -1.0 -1 5\n\
         v 1.0 -1.0 5.0\n\
         v 0 1.5e0 5\n\
         f 1 2 3\n",
    )
    .unwrap();
    assert_eq!(
        data.positions,
        vec![point3(-1.0, -1.0, 5.0), point3(1.0, -1.0, 5.0), point3(0.0, 1.5, 5.0)]
    );
    assert_eq!(data.indices, vec![0, 1, 2]);
    assert_eq!(data.tex_indices, vec![None, None, None]);
    assert_eq!(data.into_mesh().unwrap().num_triangles(), 1);
}

#[test]
fn reads_texture_references() {
    let data = parse_mesh(
        "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
         vt 0.0 0.0\nvt 1.0 0.0\nvt 0.0 1.0\n\
         vn 0 0 1\n\
         f 1/1/1 2/2/1 3//1\n",
    )
    .unwrap();
    assert_eq!(data.tex_coords, vec![vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(0.0, 1.0)]);
    assert_eq!(data.indices, vec![0, 1, 2]);
    assert_eq!(data.tex_indices, vec![Some(0), Some(1), None]);
}

#[test]
fn polygons_are_fan_triangulated() {
    let data = parse_mesh("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4").unwrap();
    assert_eq!(data.indices, vec![0, 1, 2, 0, 2, 3]);
}

#[test]
fn unknown_directives_and_comments_are_skipped() {
    let data = parse_mesh(
        "o wall\r\ng group_1\ns off\nusemtl white\n\n   \nv 0 0 0 # origin\nv 1 0 0\nv 0 1 0\nf 1 2 3\n",
    )
    .unwrap();
    assert_eq!(data.positions.len(), 3);
    assert_eq!(data.indices.len(), 3);
}

#[test]
fn syntax_errors_report_the_line() {
    match parse_mesh("v 0 0 0\nv 1 0\n") {
        Err(LoadError::Syntax { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected syntax error, got {:?}", other),
    }
    match parse_mesh("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2\n") {
        Err(LoadError::Syntax { line, .. }) => assert_eq!(line, 4),
        other => panic!("expected syntax error, got {:?}", other),
    }
    assert!(matches!(
        parse_mesh("v 0 0 0\nf -1 -2 -3\n"),
        Err(LoadError::Syntax { line: 2, .. })
    ));
    assert!(matches!(parse_mesh("f 0 1 2\n"), Err(LoadError::Syntax { line: 1, .. })));
    assert!(matches!(parse_mesh("v 0 @ 0\n"), Err(LoadError::Syntax { line: 1, .. })));
}

#[test]
fn out_of_range_faces_fail_when_building_the_mesh() {
    let data = parse_mesh("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 4\n").unwrap();
    assert_eq!(
        data.into_mesh().unwrap_err(),
        MeshError::IndexOutOfRange {
            index: 3,
            vertex_count: 3
        }
    );
}

#[test]
fn missing_file_is_an_io_error() {
    init_logger();
    let err = load_mesh("/nonexistent/dir/green_right").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("green_right"), "{}", err);
}

#[test]
fn loads_mesh_from_disk() {
    let dir = std::env::temp_dir().join(format!("cornell-rt-loader-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("tri");
    std::fs::write(&path, "v 0 0 1\nv 1 0 1\nv 0 1 1\nf 1 2 3\n").unwrap();
    let mesh = load_mesh(&path).unwrap().into_mesh().unwrap();
    assert_eq!(mesh.positions().len(), 3);
    std::fs::remove_dir_all(&dir).unwrap();
}
