use crate::ray;
use math::hcm;

/// Pinhole camera looking down +z: x rightward, y upward.
///
/// Pixel `(x, y)` is addressed with `y = 0` at the bottom row. There is no aspect-ratio
/// correction: both axes are scaled by the same `tan(fov / 2)`, so non-square films come out
/// stretched.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    center: hcm::Point3,
    half_extent: f32,

    // Film image resolution.
    width: u32,
    height: u32,
}

impl Camera {
    pub fn new(resolution: (u32, u32), fov: math::Angle) -> Camera {
        let (width, height) = resolution;
        Camera {
            center: hcm::Point3::ORIGIN,
            half_extent: (fov * 0.5).tan(),
            width,
            height,
        }
    }

    pub fn translate(self, v: hcm::Vec3) -> Self {
        Self {
            center: self.center + v,
            ..self
        }
    }

    pub fn placed_at(self, center: hcm::Point3) -> Self {
        Self { center, ..self }
    }

    /// Maps a pixel to normalized device coordinates in `[-1, 1]`, sampling the pixel center.
    pub fn ndc(&self, x: u32, y: u32) -> (f32, f32) {
        let ndc_x = (x as f32 + 0.5) / self.width as f32;
        let ndc_y = (y as f32 + 0.5) / self.height as f32;
        (2.0 * ndc_x - 1.0, 2.0 * ndc_y - 1.0)
    }

    /// Builds the primary ray through the center of pixel `(x, y)`, with a unit direction.
    /// Returns `None` for pixels outside the film.
    pub fn shoot_ray(&self, x: u32, y: u32) -> Option<ray::Ray> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let (ndc_x, ndc_y) = self.ndc(x, y);
        let dir = hcm::normalize(ndc_x * self.half_extent, ndc_y * self.half_extent, 1.0);
        Some(ray::Ray::new(self.center, dir))
    }

    pub fn center(&self) -> hcm::Point3 {
        self.center
    }

    /// Returns resolution (width x height) of the camera film.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
