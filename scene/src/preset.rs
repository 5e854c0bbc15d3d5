use std::path::Path;

use light::Light;
use material::Material;
use math::hcm::{point3, vec3, Point3, Vec3};
use radiometry::color::Color;
use shape::TriangleMesh;

use crate::{loader, LoadError, Model, Scene};

const HALF_WIDTH: f32 = 100.0;
const DEPTH: f32 = 200.0;

// Functions that build the scenes: lights and collection of models.
// ------------------------------------------------------------------------------------------------

/// Names of the Cornell box walls, in scene order, with their colors.
pub fn cornell_box_walls() -> [(&'static str, Color); 5] {
    [
        ("green_right", Color::rgb(0, 255, 0)),
        ("red_left", Color::rgb(255, 0, 0)),
        ("white_top", Color::white()),
        ("white_back", Color::white()),
        ("white_bottom", Color::white()),
    ]
}

fn wall_material(color: Color) -> Material {
    Material::new(color, 0.8, 0.2)
}

/// The light at the top center of the box.
pub fn cornell_box_light() -> Light {
    Light::point(point3(0.0, 98.0, 100.0), 0.5)
}

/// Builds a quad `origin + a*u + b*v` (a, b in [0, 1]) as two triangles whose flat normals point
/// along `u x v`.
pub fn quad(origin: Point3, u: Vec3, v: Vec3) -> TriangleMesh {
    let positions = vec![origin, origin + u, origin + u + v, origin + v];
    // Four distinct vertices and six in-range indices.
    match TriangleMesh::try_new(positions, vec![0, 1, 2, 0, 2, 3]) {
        Ok(mesh) => mesh,
        Err(e) => unreachable!("quad mesh is always valid: {}", e),
    }
}

/// A room spanning x and y in [-100, 100] and z in [0, 200], open towards the camera at the
/// origin. Every wall faces inwards.
#[rustfmt::skip]
pub fn cornell_box() -> Scene {
    let (w, d) = (HALF_WIDTH, DEPTH);
    let meshes = [
        quad(point3(w, -w, 0.0), vec3(0.0, 0.0, d), vec3(0.0, 2.0 * w, 0.0)),
        quad(point3(-w, -w, 0.0), vec3(0.0, 2.0 * w, 0.0), vec3(0.0, 0.0, d)),
        quad(point3(-w, w, 0.0), vec3(2.0 * w, 0.0, 0.0), vec3(0.0, 0.0, d)),
        quad(point3(-w, -w, d), vec3(0.0, 2.0 * w, 0.0), vec3(2.0 * w, 0.0, 0.0)),
        quad(point3(-w, -w, 0.0), vec3(0.0, 0.0, d), vec3(2.0 * w, 0.0, 0.0)),
    ];
    let models = cornell_box_walls()
        .iter()
        .zip(meshes)
        .map(|((name, color), mesh)| Model::new(name, mesh, wall_material(*color)))
        .collect();
    Scene::new()
        .with_models(models)
        .with_lights(vec![cornell_box_light()])
}

/// Loads the five Cornell box wall meshes from files named after the walls in `dir`, and assigns
/// the same materials and light as `cornell_box()`.
pub fn cornell_box_from_dir(dir: &Path) -> Result<Scene, LoadError> {
    let mut scene = Scene::new().with_lights(vec![cornell_box_light()]);
    for (name, color) in cornell_box_walls().iter() {
        let mesh = loader::load_mesh(dir.join(name))?.into_mesh()?;
        scene.push_model(Model::new(name, mesh, wall_material(*color)));
    }
    Ok(scene)
}

/// A scene with no geometry and no lights.
pub fn empty() -> Scene {
    Scene::new()
}
