use math::hcm::Point3;
use math::Angle;

/// Parameters of a render that stay fixed for every pixel.
#[derive(Debug, Clone, Copy)]
pub struct TraceSettings {
    /// Camera position; primary rays start here and specular highlights are computed from it.
    pub origin: Point3,
    pub fov: Angle,
    pub gamma: f32,
    /// Hits within this distance of a ray origin (on every axis) are ignored. Must be positive:
    /// it is what makes every reflection bounce advance the travelled distance.
    pub error_margin: f32,
    /// Total distance a ray may travel, summed over all bounces, before it stops contributing.
    pub ray_depth: f32,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            origin: Point3::ORIGIN,
            fov: Angle::new_deg(90.0),
            gamma: 1.0,
            error_margin: 0.1,
            ray_depth: 1000.0,
        }
    }
}

impl TraceSettings {
    pub fn with_fov(self, fov: Angle) -> Self {
        Self { fov, ..self }
    }

    pub fn with_gamma(self, gamma: f32) -> Self {
        Self { gamma, ..self }
    }

    pub fn summary(&self) -> String {
        format!(
            "origin = {}, fov = {}, gamma = {}, margin = {}, ray depth = {}",
            self.origin, self.fov, self.gamma, self.error_margin, self.ray_depth
        )
    }
}
