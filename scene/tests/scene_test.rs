use geometry::ray::Ray;
use light::{Light, LightKind};
use material::Material;
use math::float::Float;
use math::hcm::{point3, vec3, Point3, Vec3};
use radiometry::color::Color;
use scene::preset;
use scene::{Model, Scene};

const MARGIN: f32 = 0.1;

#[test]
fn empty_scene_has_no_hits_and_no_occluders() {
    let scene = preset::empty();
    let ray = Ray::new(Point3::ORIGIN, Vec3::Z);
    assert!(scene.intersect(&ray, MARGIN).is_none());
    assert!(!scene.occludes(&Ray::segment(Point3::ORIGIN, point3(0.0, 0.0, 9.0)), MARGIN));
    assert_eq!(scene.background(), Color::black());
    assert_eq!(scene.num_triangles(), 0);
}

#[test]
fn nearest_model_wins_regardless_of_order() {
    let far = Material::new(Color::rgb(255, 0, 0), 1.0, 0.0);
    let near = Material::new(Color::rgb(0, 0, 255), 1.0, 0.0);
    let scene = Scene::new().with_models(vec![
        Model::new("far", preset::quad(point3(-1.0, -1.5, 9.0), 2.0 * Vec3::X, 2.0 * Vec3::Y), far),
        Model::new("near", preset::quad(point3(-1.0, -1.5, 4.0), 2.0 * Vec3::X, 2.0 * Vec3::Y), near),
    ]);
    let (hit, mtl) = scene.intersect(&Ray::new(Point3::ORIGIN, Vec3::Z), MARGIN).unwrap();
    assert!(hit.ray_t.dist_to(4.0) < 1e-5);
    assert_eq!(*mtl, near);
}

#[test]
fn cornell_box_walls_face_inwards() {
    let scene = preset::cornell_box();
    assert_eq!(scene.models.len(), 5);
    assert_eq!(scene.num_triangles(), 10);
    assert_eq!(scene.lights.len(), 1);
    assert_eq!(scene.lights[0].kind, LightKind::Point);

    let center = point3(0.0, 10.0, 90.0);
    for model in scene.models.iter() {
        for (p0, p1, p2) in model.mesh.triangles() {
            let normal = (p1 - p0).cross(p2 - p0).hat();
            assert!(normal.dot(center - p0) > 0.0, "{} faces outwards", model.name);
        }
    }

    // Looking straight ahead from the camera hits the back wall.
    let eye = point3(0.0, 10.0, 0.0);
    let (hit, mtl) = scene.intersect(&Ray::new(eye, Vec3::Z), MARGIN).unwrap();
    assert!(hit.pos.distance_to(point3(0.0, 10.0, 200.0)) < 1e-3);
    assert_eq!(mtl.color, Color::white());
    let (_, mtl) = scene.intersect(&Ray::new(center, Vec3::X), MARGIN).unwrap();
    assert_eq!(mtl.color, Color::rgb(0, 255, 0));
    let (_, mtl) = scene.intersect(&Ray::new(center, -Vec3::X), MARGIN).unwrap();
    assert_eq!(mtl.color, Color::rgb(255, 0, 0));
}

#[test]
fn light_inside_the_box_is_visible_from_the_floor() {
    let scene = preset::cornell_box();
    let floor_point = point3(10.0, -100.0, 120.0);
    let light = scene.lights[0].position;
    assert!(!scene.occludes(&Ray::segment(floor_point, light), MARGIN));
    // The same light seen from behind the back wall is blocked.
    assert!(scene.occludes(&Ray::segment(point3(0.0, 0.0, 250.0), light), MARGIN));
}

#[test]
fn spotlights_are_kept_as_lights() {
    let scene = Scene::new().with_lights(vec![
        Light::new(point3(0.0, 1.0, 0.0), LightKind::Spotlight),
        Light::point(vec3(0.0, 2.0, 0.0).into(), 1.0),
    ]);
    assert_eq!(scene.lights.len(), 2);
    assert_eq!(scene.lights[0].brightness, Light::DEFAULT_BRIGHTNESS);
    assert!(scene.summary().contains("SpotlightLight"));
}

#[test]
fn cornell_box_loads_from_wall_files() {
    let dir = std::env::temp_dir().join(format!("cornell-rt-walls-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    for (name, _) in preset::cornell_box_walls().iter() {
        std::fs::write(dir.join(name), "v 0 0 1\nv 1 0 1\nv 0 1 1\nf 1 2 3\n").unwrap();
    }
    let scene = preset::cornell_box_from_dir(&dir).unwrap();
    assert_eq!(scene.models.len(), 5);
    assert_eq!(scene.models[1].name, "red_left");
    std::fs::remove_file(dir.join("white_top")).unwrap();
    assert!(preset::cornell_box_from_dir(&dir).is_err());
    std::fs::remove_dir_all(&dir).unwrap();
}
