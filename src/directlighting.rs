use geometry::ray::Ray;
use material::Material;
use math::hcm::{Point3, Vec3};
use radiometry::color::Color;
use scene::Scene;
use shape::Interaction;

/// Returns true if anything in the scene lies between `point` and `light_pos`.
///
/// The shadow ray spans exactly from the point to the light (unnormalized direction, t in
/// [0, 1]), so geometry beyond the light does not count.
pub fn is_occluded(scene: &Scene, point: Point3, light_pos: Point3, margin: f32) -> bool {
    scene.occludes(&Ray::segment(point, light_pos), margin)
}

/// Lambertian factor `max(0, l . n)`, where `light_vector` points from the light to the surface.
pub fn diffuse_term(light_vector: Vec3, normal: Vec3) -> f32 {
    (-light_vector)
        .try_hat()
        .map_or(0.0, |to_light| to_light.dot(normal).max(0.0))
}

/// Blinn-Phong factor `max(0, h . n)^shininess`, with the half vector built from the view vector
/// (eye to surface) and the incident direction (light to surface).
pub fn specular_term(view: Vec3, light_vector: Vec3, normal: Vec3, shininess: f32) -> f32 {
    let half = light_vector
        .try_hat()
        .and_then(|incident| (view + incident).try_hat());
    match half {
        Some(h) => h.dot(normal).max(0.0).powf(shininess),
        None => 0.0,
    }
}

/// Sums the diffuse and specular light that every unoccluded light sends to the hit point.
/// There is no ambient term: a point that sees no light is black.
pub fn direct_lighting(
    scene: &Scene, hit: &Interaction, mtl: &Material, eye: Point3, margin: f32,
) -> Color {
    let view = hit.pos - eye;
    let mut radiance = Color::black();
    for light in scene.lights.iter() {
        if is_occluded(scene, hit.pos, light.position, margin) {
            continue;
        }
        let light_vector = hit.pos - light.position;
        let diffuse = diffuse_term(light_vector, hit.normal);
        let specular = specular_term(view, light_vector, hit.normal, mtl.shininess);
        radiance += mtl.color * diffuse * light.brightness;
        radiance += mtl.color * specular * light.brightness;
    }
    radiance
}
