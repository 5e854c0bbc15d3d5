pub mod loader;
pub mod preset;
pub mod token;

use geometry::ray::Ray;
use light::{Light, LightKind};
use material::Material;
use radiometry::color::Color;
use shape::{Interaction, Shape, TriangleMesh};

pub use loader::{load_mesh, parse_mesh, LoadError, MeshData};

/// A triangle mesh with the single material it is shaded with.
#[derive(Debug, Clone)]
pub struct Model {
    pub name: String,
    pub mesh: TriangleMesh,
    pub material: Material,
}

impl Model {
    pub fn new(name: &str, mesh: TriangleMesh, material: Material) -> Self {
        Self {
            name: name.to_owned(),
            mesh,
            material,
        }
    }
}

/// Read-only render input: models, lights and the color seen by rays that hit nothing.
/// Empty model and light lists are valid.
#[derive(Debug, Clone)]
pub struct Scene {
    pub models: Vec<Model>,
    pub lights: Vec<Light>,
    background: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            models: vec![],
            lights: vec![],
            background: Color::black(),
        }
    }

    pub fn with_models(self, models: Vec<Model>) -> Self {
        Self { models, ..self }
    }

    pub fn with_lights(self, lights: Vec<Light>) -> Self {
        if lights.iter().any(|l| l.kind == LightKind::Spotlight) {
            log::warn!("Spotlights are shaded as point lights");
        }
        Self { lights, ..self }
    }

    pub fn with_background(self, background: Color) -> Self {
        Self { background, ..self }
    }

    pub fn push_model(&mut self, model: Model) {
        self.models.push(model);
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Finds the nearest hit over all models, along with the material of the model hit.
    pub fn intersect(&self, r: &Ray, margin: f32) -> Option<(Interaction, &Material)> {
        let mut nearest: Option<(Interaction, &Material)> = None;
        for model in self.models.iter() {
            if let Some(hit) = model.mesh.intersect(r, margin) {
                if nearest.map_or(true, |(n, _)| hit.ray_t < n.ray_t) {
                    nearest = Some((hit, &model.material));
                }
            }
        }
        nearest
    }

    /// Returns true if any triangle of any model blocks the ray within its extent.
    pub fn occludes(&self, r: &Ray, margin: f32) -> bool {
        self.models.iter().any(|m| m.mesh.occludes(r, margin))
    }

    pub fn num_triangles(&self) -> usize {
        self.models.iter().map(|m| m.mesh.num_triangles()).sum()
    }

    pub fn summary(&self) -> String {
        let models = self
            .models
            .iter()
            .map(|m| format!("  {}: {} {}", m.name, m.mesh.summary(), m.material.summary()))
            .collect::<Vec<_>>();
        let lights = self
            .lights
            .iter()
            .map(|l| format!("  {}", l.summary()))
            .collect::<Vec<_>>();
        format!(
            "Scene: {} models ({} triangles), {} lights, background {:x}\n{}\n{}",
            self.models.len(),
            self.num_triangles(),
            self.lights.len(),
            self.background,
            models.join("\n"),
            lights.join("\n")
        )
    }
}
